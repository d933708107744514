mod actor_id;
mod campaign;
mod campaign_id;
mod campaign_name;
mod data_stores;
mod email;
mod error;
mod member;
mod member_id;
mod member_name;
mod ownership;

pub use actor_id::*;
pub use campaign::*;
pub use campaign_id::*;
pub use campaign_name::*;
pub use data_stores::*;
pub use email::*;
pub use error::*;
pub use member::*;
pub use member_id::*;
pub use member_name::*;
pub use ownership::*;
