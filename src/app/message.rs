// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Screen;
use crate::config::Config;
use crate::site::{HttpFetcher, Partials};
use crate::store::Backend;
use crate::ui::forms::{contact, program, volunteer};
use crate::ui::{gallery, navbar, notifications};
use url::Url;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    SwitchScreen(Screen),
    PartialsLoaded(Partials),
    Gallery(gallery::Message),
    Contact(contact::Message),
    Volunteer(volunteer::Message),
    Program(program::Message),
    Notification(notifications::NotificationMessage),
}

/// Runtime flags passed from `main.rs` into the Iced application.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Optional locale override in BCP 47 form (e.g. `fr`).
    pub lang: Option<String>,
    pub config: Config,
    /// i18n key of a warning raised while loading the config.
    pub config_warning: Option<String>,
    /// Page location the site is served from.
    pub base_url: Url,
    pub screen: Screen,
    pub fetcher: HttpFetcher,
    pub store: Backend,
}
