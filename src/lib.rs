// SPDX-License-Identifier: PMPL-1.0-or-later

//! Upways display toolkit.
//!
//! Presentation-side support for the Upways upgrade calculator:
//!
//! 1. **i18n**: the localization resolver, its catalog, language metadata,
//!    persistence seam and the `data-i18n*` binding sweep.
//! 2. **format**: locale-aware rendering of costs, numbers, durations and
//!    dates.
//! 3. **diagnostics**: schema checks and debug dumps for strategy results,
//!    for developers only.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod i18n;
pub mod logging;
pub mod types;

pub use error::{I18nError, I18nResult};
