pub mod config;
pub mod error;
pub mod filters;
pub mod model;
pub mod profile;
