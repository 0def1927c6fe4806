// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the site's screens.
//!
//! The `App` struct wires together the page chrome (header and footer
//! fragments), the gallery, the three forms and localization. It routes
//! component messages and turns their results into side effects such as
//! fetches and store writes.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::site::{partials, HttpFetcher, Partials};
use crate::store::Backend;
use crate::ui::forms::{contact, program, volunteer};
use crate::ui::notifications::{self, Notification};
use crate::ui::{gallery, navbar};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use url::Url;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    base_url: Url,
    site: crate::config::SiteConfig,
    fetcher: HttpFetcher,
    store: Backend,
    partials: Partials,
    gallery: gallery::State,
    contact: contact::State,
    volunteer: volunteer::State,
    program: program::State,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off loading of the shared
    /// fragments.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            lang,
            config,
            config_warning,
            base_url,
            screen,
            fetcher,
            store,
        } = flags;

        let mut app = Self::with_parts(lang, &config, base_url, fetcher, store);

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let load_partials = {
            let fetcher = app.fetcher.clone();
            let base = app.base_url.clone();
            let site = app.site.clone();
            Task::perform(
                async move { partials::load(&fetcher, &base, &site).await },
                Message::PartialsLoaded,
            )
        };
        let open_screen = app.switch_screen(screen);

        (app, Task::batch([load_partials, open_screen]))
    }

    fn with_parts(
        lang: Option<String>,
        config: &Config,
        base_url: Url,
        fetcher: HttpFetcher,
        store: Backend,
    ) -> Self {
        Self {
            i18n: I18n::new(lang, config),
            screen: Screen::default(),
            gallery: gallery::State::new(&base_url, &config.gallery),
            base_url,
            site: config.site.clone(),
            fetcher,
            store,
            partials: Partials::default(),
            contact: contact::State::default(),
            volunteer: volunteer::State::new(&config.forms),
            program: program::State::new(&config.forms),
            notifications: notifications::Manager::new(),
        }
    }

    fn title(&self) -> String {
        let site_name = self.i18n.tr("window-title");
        if self.screen == Screen::Home {
            site_name
        } else {
            let page = self.i18n.tr(self.screen.label_key());
            format!("{page} - {site_name}")
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_gallery_subscription(self.screen, &self.gallery),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    /// Shows `screen`, marks its header link active and starts gallery
    /// discovery the first time the gallery is opened.
    fn switch_screen(&mut self, screen: Screen) -> Task<Message> {
        self.screen = screen;
        self.partials.set_current_page(screen.page());
        tracing::debug!(?screen, "screen switched");

        if screen == Screen::Gallery {
            self.gallery
                .ensure_loaded(&self.fetcher)
                .map(Message::Gallery)
        } else {
            Task::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => match navbar::update(message, self.screen) {
                navbar::Event::None => Task::none(),
                navbar::Event::Navigate(screen) => self.switch_screen(screen),
            },
            Message::SwitchScreen(screen) => self.switch_screen(screen),
            Message::PartialsLoaded(mut partials) => {
                partials.set_current_page(self.screen.page());
                self.partials = partials;
                Task::none()
            }
            Message::Gallery(message) => self
                .gallery
                .handle_message(message, &self.fetcher)
                .map(Message::Gallery),
            Message::Contact(message) => self
                .contact
                .update(message, &self.store)
                .map(Message::Contact),
            Message::Volunteer(message) => self
                .volunteer
                .update(message, &self.store)
                .map(Message::Volunteer),
            Message::Program(message) => self
                .program
                .update(message, &self.store)
                .map(Message::Program),
            Message::Notification(message) => {
                self.notifications.handle_message(message);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            partials: &self.partials,
            gallery: &self.gallery,
            contact: &self.contact,
            volunteer: &self.volunteer,
            program: &self.program,
            notifications: &self.notifications,
        })
    }
}
