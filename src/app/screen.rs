// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.
//!
//! Each screen stands for one page of the site. Header links are mapped to
//! screens by the file name they point at.

use crate::site::partials::{current_page, INDEX_PAGE};

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Gallery,
    Contact,
    Volunteer,
    Programs,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::Programs,
        Screen::Gallery,
        Screen::Volunteer,
        Screen::Contact,
    ];

    /// Lowercased file name of the page this screen replaces.
    pub fn page(self) -> &'static str {
        match self {
            Screen::Home => INDEX_PAGE,
            Screen::Gallery => "gallery.html",
            Screen::Contact => "contact.html",
            Screen::Volunteer => "volunteer.html",
            Screen::Programs => "programs.html",
        }
    }

    /// Screen for a link's page name (as produced by `link_page`).
    pub fn from_page(page: &str) -> Option<Screen> {
        let page = if page.is_empty() || page == "./" {
            INDEX_PAGE.to_string()
        } else {
            current_page(page)
        };
        Screen::ALL.into_iter().find(|screen| screen.page() == page)
    }

    /// i18n key of the screen's navigation label.
    pub fn label_key(self) -> &'static str {
        match self {
            Screen::Home => "nav-home",
            Screen::Gallery => "nav-gallery",
            Screen::Contact => "nav-contact",
            Screen::Volunteer => "nav-volunteer",
            Screen::Programs => "nav-programs",
        }
    }
}
