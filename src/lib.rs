pub mod calculator;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod render;
pub mod report;
pub mod store;
pub mod tracker;

pub use error::{FootprintError, Result};
