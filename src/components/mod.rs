pub mod dashboard;
pub mod layout;
