pub mod config;
pub mod project;
pub mod roll;
pub mod test;
