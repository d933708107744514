mod create_member;
mod destroy_member;
mod get_member;
mod member_response;
mod update_member;

pub use create_member::*;
pub use destroy_member::*;
pub use get_member::*;
pub use member_response::*;
pub use update_member::*;
