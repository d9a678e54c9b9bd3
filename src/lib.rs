pub mod client;
pub mod config;
pub mod error;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{PolyclashError, Result};
