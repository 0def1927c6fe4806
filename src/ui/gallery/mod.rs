// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: thumbnail grid plus lightbox.
//!
//! Discovery runs once when the screen is first shown and again on refresh.
//! Thumbnails are fetched lazily: only tiles inside the visible area (plus one
//! row of look-ahead) are requested, a few at a time, and scrolling or
//! resizing requests the newly exposed ones. Each tile is requested at most
//! once per discovery. Results are tagged with the discovery generation
//! (thumbnails) or the photo index (lightbox image) so late answers for a
//! superseded state are dropped.

mod view;

pub use view::{view, ViewContext};

use crate::app::{WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use crate::config::GalleryConfig;
use crate::error::Error;
use crate::gallery::{
    discover, grid, Discovery, DiscoveryConfig, GallerySession, GridModel, LightboxKey, Strategy,
};
use crate::site::Fetcher;
use crate::ui::design_tokens::{sizing, spacing, typography};
use futures_util::stream::{self, StreamExt};
use iced::widget::scrollable::Viewport;
use iced::widget::{image, svg};
use iced::{event, keyboard, window, Size, Subscription, Task};
use std::collections::{HashMap, HashSet};
use std::ops::Range;
use url::Url;

/// Height of the title row above the grid.
const HEADER_HEIGHT: f32 = typography::TITLE_LG * 1.3;

/// Offset of the first tile row from the top of the scrolled page.
const GRID_TOP: f32 = spacing::LG + HEADER_HEIGHT + spacing::MD;

/// Distance between the origins of neighbouring tiles, both axes.
const TILE_PITCH: f32 = sizing::THUMBNAIL + 2.0 * spacing::XXS + spacing::SM;

/// Rows loaded ahead of the visible area, above and below.
const LOOKAHEAD_ROWS: usize = 1;

/// The part of the gallery page currently on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleArea {
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for VisibleArea {
    fn default() -> Self {
        Self {
            offset_y: 0.0,
            width: WINDOW_DEFAULT_WIDTH as f32,
            height: WINDOW_DEFAULT_HEIGHT as f32,
        }
    }
}

impl VisibleArea {
    pub fn from_viewport(viewport: &Viewport) -> Self {
        let bounds = viewport.bounds();
        Self {
            offset_y: viewport.absolute_offset().y,
            width: bounds.width,
            height: bounds.height,
        }
    }

    /// Indices of the tiles intersecting the area, widened by the
    /// look-ahead rows and clamped to `count`.
    pub fn tile_range(&self, count: usize) -> Range<usize> {
        let usable = (self.width - 2.0 * spacing::LG + spacing::SM).max(TILE_PITCH);
        let columns = ((usable / TILE_PITCH).floor() as usize).max(1);
        let top = (self.offset_y - GRID_TOP).max(0.0);
        let bottom = (self.offset_y + self.height - GRID_TOP).max(0.0);
        let first_row = (top / TILE_PITCH).floor() as usize;
        let last_row = (bottom / TILE_PITCH).floor() as usize;

        let start = first_row.saturating_sub(LOOKAHEAD_ROWS) * columns;
        let end = (last_row + 1 + LOOKAHEAD_ROWS) * columns;
        start.min(count)..end.min(count)
    }
}

/// A decoded-on-demand image, raster or vector.
#[derive(Debug, Clone)]
pub enum Preview {
    Raster(image::Handle),
    Vector(svg::Handle),
}

impl Preview {
    pub fn from_bytes(bytes: Vec<u8>, vector: bool) -> Self {
        if vector {
            Preview::Vector(svg::Handle::from_memory(bytes))
        } else {
            Preview::Raster(image::Handle::from_bytes(bytes))
        }
    }
}

/// State of one thumbnail tile.
#[derive(Debug, Clone)]
pub enum Tile {
    Loaded(Preview),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Discovery has not been started yet.
    Idle,
    Discovering,
    Ready,
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    Discovered {
        generation: u64,
        discovery: Discovery,
    },
    ThumbnailLoaded {
        generation: u64,
        index: usize,
        result: Result<Preview, Error>,
    },
    ThumbnailPressed(usize),
    FullImageLoaded {
        index: usize,
        result: Result<Preview, Error>,
    },
    Next,
    Previous,
    Close,
    BackdropPressed,
    /// Clicks on the image itself must not reach the backdrop.
    ImagePressed,
    Key(LightboxKey),
    Scrolled(VisibleArea),
    WindowResized(Size),
}

#[derive(Debug)]
pub struct State {
    config: Option<DiscoveryConfig>,
    session: GallerySession,
    grid: GridModel,
    phase: Phase,
    strategy: Option<Strategy>,
    generation: u64,
    tiles: HashMap<usize, Tile>,
    /// Tiles whose thumbnail fetch was issued for the current generation.
    requested: HashSet<usize>,
    area: VisibleArea,
    lightbox_image: Option<(usize, Preview)>,
    concurrency: usize,
}

impl State {
    pub fn new(base: &Url, gallery: &GalleryConfig) -> Self {
        let config = match DiscoveryConfig::from_config(base, gallery) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!(folder = %gallery.folder, %err, "gallery folder cannot be resolved");
                None
            }
        };

        Self {
            config,
            session: GallerySession::new(Vec::new(), gallery.home_end_keys),
            grid: GridModel::Placeholder {
                message_key: grid::EMPTY_MESSAGE_KEY,
            },
            phase: Phase::Idle,
            strategy: None,
            generation: 0,
            tiles: HashMap::new(),
            requested: HashSet::new(),
            area: VisibleArea::default(),
            lightbox_image: None,
            concurrency: gallery.clamped_concurrency(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn session(&self) -> &GallerySession {
        &self.session
    }

    pub fn strategy(&self) -> Option<Strategy> {
        self.strategy
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(&index)
    }

    /// Image shown in the lightbox, `None` while it loads or when closed.
    pub fn lightbox_image(&self) -> Option<&Preview> {
        match (&self.lightbox_image, self.session.current_index()) {
            (Some((index, preview)), Some(current)) if *index == current => Some(preview),
            _ => None,
        }
    }

    /// Starts discovery unless it already ran.
    pub fn ensure_loaded<F: Fetcher>(&mut self, fetcher: &F) -> Task<Message> {
        if self.phase == Phase::Idle {
            self.refresh(fetcher)
        } else {
            Task::none()
        }
    }

    fn refresh<F: Fetcher>(&mut self, fetcher: &F) -> Task<Message> {
        let Some(config) = self.config.clone() else {
            self.phase = Phase::Ready;
            return Task::none();
        };

        self.generation += 1;
        self.phase = Phase::Discovering;
        let generation = self.generation;
        let fetcher = fetcher.clone();

        Task::perform(
            async move { discover(&fetcher, &config).await },
            move |discovery| Message::Discovered {
                generation,
                discovery,
            },
        )
    }

    pub fn handle_message<F: Fetcher>(&mut self, message: Message, fetcher: &F) -> Task<Message> {
        match message {
            Message::Refresh => self.refresh(fetcher),
            Message::Discovered {
                generation,
                discovery,
            } => {
                if generation != self.generation {
                    return Task::none();
                }
                self.apply_discovery(discovery);
                self.load_visible_thumbnails(fetcher)
            }
            Message::ThumbnailLoaded {
                generation,
                index,
                result,
            } => {
                if generation == self.generation {
                    let tile = match result {
                        Ok(preview) => Tile::Loaded(preview),
                        Err(err) => {
                            tracing::debug!(index, %err, "thumbnail failed to load");
                            Tile::Failed
                        }
                    };
                    self.tiles.insert(index, tile);
                }
                Task::none()
            }
            Message::ThumbnailPressed(index) => {
                self.session.open(index);
                self.show_current(fetcher)
            }
            Message::FullImageLoaded { index, result } => {
                if self.session.current_index() != Some(index) {
                    tracing::debug!(index, "stale lightbox image dropped");
                    return Task::none();
                }
                match result {
                    Ok(preview) => self.lightbox_image = Some((index, preview)),
                    Err(err) => tracing::debug!(index, %err, "lightbox image failed to load"),
                }
                Task::none()
            }
            Message::Next => {
                self.session.next();
                self.show_current(fetcher)
            }
            Message::Previous => {
                self.session.previous();
                self.show_current(fetcher)
            }
            Message::Close | Message::BackdropPressed => {
                self.session.close();
                self.show_current(fetcher)
            }
            Message::ImagePressed => Task::none(),
            Message::Scrolled(area) => {
                self.area = area;
                self.load_visible_thumbnails(fetcher)
            }
            Message::WindowResized(size) => {
                self.area.width = size.width;
                self.area.height = size.height;
                self.load_visible_thumbnails(fetcher)
            }
            Message::Key(key) => {
                if self.session.handle_key(key) {
                    self.show_current(fetcher)
                } else {
                    Task::none()
                }
            }
        }
    }

    fn apply_discovery(&mut self, discovery: Discovery) {
        self.phase = Phase::Ready;
        self.strategy = discovery.strategy;
        self.session.replace_items(discovery.items);
        self.tiles.clear();
        self.requested.clear();
        self.lightbox_image = None;
        self.grid = match &self.config {
            Some(config) => grid::render(self.session.items(), &config.resolver),
            None => GridModel::Placeholder {
                message_key: grid::EMPTY_MESSAGE_KEY,
            },
        };
    }

    /// Requests the thumbnails of visible tiles that were not requested yet.
    fn load_visible_thumbnails<F: Fetcher>(&mut self, fetcher: &F) -> Task<Message> {
        let thumbs = self.grid.thumbnails();
        let range = self.area.tile_range(thumbs.len());
        let requested = &mut self.requested;
        let jobs: Vec<(usize, Url, bool)> = thumbs[range]
            .iter()
            .filter(|thumb| requested.insert(thumb.index))
            .filter_map(|thumb| thumb.url.clone().map(|url| (thumb.index, url, thumb.vector)))
            .collect();
        if jobs.is_empty() {
            return Task::none();
        }

        let generation = self.generation;
        let fetcher = fetcher.clone();
        let loads = stream::iter(jobs)
            .map(move |(index, url, vector)| {
                let fetcher = fetcher.clone();
                async move {
                    let result = fetcher
                        .fetch_bytes(&url)
                        .await
                        .map(|bytes| Preview::from_bytes(bytes, vector));
                    (index, result)
                }
            })
            .buffer_unordered(self.concurrency);

        Task::run(loads, move |(index, result)| Message::ThumbnailLoaded {
            generation,
            index,
            result,
        })
    }

    /// Syncs the lightbox image with the session, fetching it when the
    /// thumbnail is not available.
    fn show_current<F: Fetcher>(&mut self, fetcher: &F) -> Task<Message> {
        let Some(index) = self.session.current_index() else {
            self.lightbox_image = None;
            return Task::none();
        };
        if matches!(&self.lightbox_image, Some((shown, _)) if *shown == index) {
            return Task::none();
        }
        if let Some(Tile::Loaded(preview)) = self.tiles.get(&index) {
            self.lightbox_image = Some((index, preview.clone()));
            return Task::none();
        }

        self.lightbox_image = None;
        let Some(thumb) = self.grid.thumbnails().get(index) else {
            return Task::none();
        };
        let Some(url) = thumb.url.clone() else {
            return Task::none();
        };
        let vector = thumb.vector;
        let fetcher = fetcher.clone();

        Task::perform(
            async move {
                fetcher
                    .fetch_bytes(&url)
                    .await
                    .map(|bytes| Preview::from_bytes(bytes, vector))
            },
            move |result| Message::FullImageLoaded { index, result },
        )
    }

    /// Tracks window resizes for lazy loading and captures navigation keys
    /// while the lightbox is open.
    pub fn subscription(&self) -> Subscription<Message> {
        let resizes = event::listen_with(|event, _status, _window| match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        });
        if !self.session.is_open() {
            return resizes;
        }
        let keys = event::listen_with(|event, _status, _window| match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                ..
            }) => lightbox_key(named).map(Message::Key),
            _ => None,
        });
        Subscription::batch([resizes, keys])
    }
}

fn lightbox_key(named: keyboard::key::Named) -> Option<LightboxKey> {
    use keyboard::key::Named;
    match named {
        Named::Escape => Some(LightboxKey::Escape),
        Named::ArrowLeft => Some(LightboxKey::ArrowLeft),
        Named::ArrowRight => Some(LightboxKey::ArrowRight),
        Named::Home => Some(LightboxKey::Home),
        Named::End => Some(LightboxKey::End),
        _ => None,
    }
}
