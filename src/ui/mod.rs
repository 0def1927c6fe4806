// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen owns its state, renders from a borrowed view context and reports
//! what the application has to do through its messages.
//!
//! # Screens
//!
//! - [`home`] - Landing page with shortcuts
//! - [`gallery`] - Thumbnail grid and lightbox
//! - [`forms`] - Contact, volunteer and program application forms
//!
//! # Page Chrome
//!
//! - [`navbar`] - Header navigation built from the shared header fragment
//! - [`footer`] - Footer built from the shared footer fragment
//! - [`notifications`] - Toast notifications
//!
//! # Styling
//!
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod footer;
pub mod forms;
pub mod gallery;
pub mod home;
pub mod navbar;
pub mod notifications;
pub mod styles;
