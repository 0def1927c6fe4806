// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Every user-visible string (labels, status lines, validation messages) is a
//! Fluent message key resolved at render time.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Fallback to the default locale for keys a translation lacks

pub mod fluent;

pub use fluent::I18n;
