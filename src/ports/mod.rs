// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that separate the resolver
//! from the things it reads: configuration files, the environment variable
//! table, and the filesystem. Adapters in the adapters layer implement them.

pub mod environment;
pub mod filesystem;
pub mod parser;
pub mod repository;

// Re-export commonly used types
pub use environment::Environment;
pub use filesystem::FileSystem;
pub use parser::ConfigParser;
pub use repository::Repository;
