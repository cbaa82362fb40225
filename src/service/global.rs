// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide accessor.
//!
//! The global [`AutoConfig`] is created lazily on first use and searches from
//! the current directory. Tests and applications that need another setup can
//! replace it with [`set_global`] and restore the default with [`reset_global`].

use crate::service::auto_config::AutoConfig;
use once_cell::sync::Lazy;
use std::sync::{Arc, PoisonError, RwLock};

static GLOBAL: Lazy<RwLock<Arc<AutoConfig>>> =
    Lazy::new(|| RwLock::new(Arc::new(AutoConfig::new())));

/// Returns the process-wide accessor.
///
/// The handle stays valid after [`set_global`] or [`reset_global`]; it keeps
/// pointing at the instance that was current when it was taken.
pub fn global() -> Arc<AutoConfig> {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replaces the process-wide accessor.
pub fn set_global(config: AutoConfig) {
    tracing::debug!("Replacing global configuration: {:?}", config);
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(config);
}

/// Restores a fresh default accessor, forgetting any discovery result.
pub fn reset_global() {
    set_global(AutoConfig::new());
}
