//! Shared model and formula-construction core used by both the backend and the
//! frontend.

pub mod builder;
pub mod catalog;
pub mod error;
pub mod model;
pub mod requests;
