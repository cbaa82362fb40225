// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the decouple-cfg crate.
//!
//! This example demonstrates:
//! - Discovering `secrets.json`, `settings.ini` or `.env` from a directory
//! - Environment variables overriding file values
//! - Boolean, numeric and list casts
//! - Defaults for missing options
//!
//! To run this example:
//! ```bash
//! # Optional overrides
//! export DEBUG=off
//! export DATABASE_PORT=5433
//!
//! # Show discovery logs
//! RUST_LOG=debug cargo run --example basic_usage
//! ```

use decouple_cfg::prelude::*;
use std::fs;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== decouple-cfg: Basic Usage ===\n");

    let dir = std::env::temp_dir().join("decouple-cfg-demo");
    fs::create_dir_all(&dir)?;
    fs::write(
        dir.join(".env"),
        "SECRET_KEY=change-me\nDEBUG=True\nDATABASE_PORT=5432\nALLOWED_HOSTS=localhost, 127.0.0.1\n",
    )?;

    let config = AutoConfig::with_search_path(&dir);
    match config.discovery()?.path() {
        Some(path) => println!("Using {}\n", path.display()),
        None => println!("No settings file found\n"),
    }

    println!("--- Strings ---");
    println!("SECRET_KEY = {}", config.get("SECRET_KEY")?);

    println!("\n--- Casts ---");
    let debug = config.get_cast("DEBUG", Boolean)?;
    let port = config.get_cast("DATABASE_PORT", Parse::<u16>::new())?;
    let hosts: Vec<String> = config.get_cast("ALLOWED_HOSTS", Csv::new())?;
    println!("DEBUG = {}", debug);
    println!("DATABASE_PORT = {}", port);
    println!("ALLOWED_HOSTS = {:?}", hosts);

    println!("\n--- Defaults ---");
    let workers = config.get_or_cast("WORKERS", 4_u32, Parse::<usize>::new())?;
    println!("WORKERS = {}", workers);

    match config.get("DATABASE_URL") {
        Ok(url) => println!("DATABASE_URL = {}", url),
        Err(e) => println!("{}", e),
    }

    Ok(())
}
