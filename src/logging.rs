// SPDX-License-Identifier: PMPL-1.0-or-later

//! Log subscriber setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! application's call. `UPWAYS_LOG` takes a full filter directive
//! (`upways=debug,upways::i18n=trace`) and beats the configured level.

use crate::config::LOG_ENV;
use tracing_subscriber::EnvFilter;

pub fn init(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("upways={}", level.to_lowercase())));

    // A subscriber may already be installed (tests, embedding apps).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init();
}
