pub mod catalog;
pub mod formula;
pub mod profile;
