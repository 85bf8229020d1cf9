pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod graph;
pub mod scan;

pub use error::{GridError, Result};
