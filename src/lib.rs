pub mod config;
pub mod error;
pub mod gateway;
pub mod server;
pub mod simulate;

pub use error::{Error, Result};
