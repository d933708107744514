pub mod campaigns;
pub mod members;
