pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod git;
pub mod resolver;
pub mod ui;

pub use error::{Result, StampError};
