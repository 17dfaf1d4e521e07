//! Accuse - line-attribution audit for version-controlled files
//!
//! A CLI tool that attributes every line of a set of tracked files to the
//! commit that introduced it, filters those attributions by author,
//! whitespace, and time window, and aggregates per-author contribution
//! statistics.

pub mod blame;
pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod filtering;
pub mod report;
pub mod stats;

pub use error::{AccuseError, Result};
