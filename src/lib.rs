// src/lib.rs

pub mod config;
pub mod error;
pub mod pipeline;
pub mod reference;
pub mod table;

pub use config::PipelineConfig;
pub use error::{EnrichError, ErrorKind};
pub use pipeline::{run, run_with, RunSummary};
