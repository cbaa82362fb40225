// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration service implementations.
//!
//! This module contains the resolver over a single repository, file discovery,
//! the auto-discovering accessor built on both, and the process-wide instance.

pub mod auto_config;
pub mod config;
pub mod discovery;
pub mod global;

// Re-export commonly used types
pub use auto_config::AutoConfig;
pub use config::Config;
pub use discovery::{find_file, Discovery, RepositoryKind, SUPPORTED_FILES};
pub use global::{global, reset_global, set_global};
