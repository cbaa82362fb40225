// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! This module contains the concrete repositories for each supported file
//! format, plus the process environment and local filesystem adapters.

pub mod empty;
pub mod env_file;
pub mod env_var;
pub mod ini_file;
pub mod json_file;
pub mod local_fs;

pub use empty::EmptyRepository;
pub use env_file::{EnvFileParser, EnvFileRepository};
pub use env_var::EnvVarAdapter;
pub use ini_file::{IniParser, IniRepository};
pub use json_file::JsonRepository;
pub use local_fs::LocalFileSystem;
