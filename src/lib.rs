pub mod build;
pub mod cli;
pub mod compose;
pub mod config;
pub mod constants;
pub mod context;
pub mod pipeline;
pub mod runner;
pub mod wrapper;

pub use anyhow::Result;
