pub mod media;
pub mod site;
