pub mod catalog;
pub mod formulas;
pub mod profile;
pub mod recommendations;
