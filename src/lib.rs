// SPDX-License-Identifier: MPL-2.0
//! `community_site` is a desktop client for a community organization's web
//! site, built with the Iced GUI framework.
//!
//! It renders the site's photo gallery (discovered from the photo folder,
//! a manifest or a list supplied by the host page) with a lightbox, and the
//! contact, volunteer and program application forms, which write their
//! records to a document store.

#![doc(html_root_url = "https://docs.rs/community_site/0.3.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod forms;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod site;
pub mod store;
pub mod ui;
