// SPDX-License-Identifier: MPL-2.0
//! Lightbox session: which photo, if any, is shown full size.
//!
//! Navigation wraps around at both ends. With zero items every operation is a
//! no-op and the lightbox never opens.

use super::PhotoItem;

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GallerySession {
    items: Vec<PhotoItem>,
    current: Option<usize>,
    home_end_keys: bool,
}

impl GallerySession {
    pub fn new(items: Vec<PhotoItem>, home_end_keys: bool) -> Self {
        Self {
            items,
            current: None,
            home_end_keys,
        }
    }

    /// Swaps in a freshly discovered list. The lightbox closes.
    pub fn replace_items(&mut self, items: Vec<PhotoItem>) {
        self.items = items;
        self.current = None;
    }

    pub fn items(&self) -> &[PhotoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&PhotoItem> {
        self.current.and_then(|idx| self.items.get(idx))
    }

    /// Opens the lightbox at `index`. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.current = Some(index);
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// Moves to the next photo, wrapping to the first.
    pub fn next(&mut self) -> bool {
        self.step(|idx, len| (idx + 1) % len)
    }

    /// Moves to the previous photo, wrapping to the last.
    pub fn previous(&mut self) -> bool {
        self.step(|idx, len| (idx + len - 1) % len)
    }

    pub fn first(&mut self) -> bool {
        self.step(|_, _| 0)
    }

    pub fn last(&mut self) -> bool {
        self.step(|_, len| len - 1)
    }

    /// Applies a key press. Returns true if the session changed.
    pub fn handle_key(&mut self, key: LightboxKey) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            LightboxKey::Escape => {
                self.close();
                true
            }
            LightboxKey::ArrowLeft => self.previous(),
            LightboxKey::ArrowRight => self.next(),
            LightboxKey::Home if self.home_end_keys => self.first(),
            LightboxKey::End if self.home_end_keys => self.last(),
            LightboxKey::Home | LightboxKey::End => false,
        }
    }

    fn step(&mut self, target: impl FnOnce(usize, usize) -> usize) -> bool {
        let len = self.items.len();
        match self.current {
            Some(idx) if len > 0 => {
                self.current = Some(target(idx, len));
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(n: usize) -> GallerySession {
        let items = (0..n).map(|i| PhotoItem::new(format!("p{i}.jpg"))).collect();
        GallerySession::new(items, true)
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let mut s = session(3);
        assert!(s.open(2));
        s.next();
        assert_eq!(s.current_index(), Some(0));
        s.previous();
        assert_eq!(s.current_index(), Some(2));
    }

    #[test]
    fn next_n_times_returns_to_start() {
        for n in 1..6 {
            for start in 0..n {
                let mut s = session(n);
                s.open(start);
                for _ in 0..n {
                    s.next();
                }
                assert_eq!(s.current_index(), Some(start));
            }
        }
    }

    #[test]
    fn previous_then_next_is_identity() {
        let mut s = session(4);
        s.open(1);
        s.previous();
        s.next();
        assert_eq!(s.current_index(), Some(1));
    }

    #[test]
    fn empty_session_never_opens() {
        let mut s = session(0);
        assert!(!s.open(0));
        assert!(!s.next());
        assert!(!s.previous());
        assert!(!s.handle_key(LightboxKey::End));
        assert!(!s.is_open());
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let mut s = session(2);
        assert!(!s.open(2));
        assert_eq!(s.current(), None);
    }

    #[test]
    fn navigation_while_closed_is_a_no_op() {
        let mut s = session(3);
        assert!(!s.next());
        assert!(!s.handle_key(LightboxKey::ArrowRight));
        assert_eq!(s.current_index(), None);
    }

    #[test]
    fn keys_drive_the_open_lightbox() {
        let mut s = session(5);
        s.open(2);
        s.handle_key(LightboxKey::ArrowRight);
        assert_eq!(s.current_index(), Some(3));
        s.handle_key(LightboxKey::ArrowLeft);
        s.handle_key(LightboxKey::ArrowLeft);
        assert_eq!(s.current_index(), Some(1));
        s.handle_key(LightboxKey::End);
        assert_eq!(s.current_index(), Some(4));
        s.handle_key(LightboxKey::Home);
        assert_eq!(s.current_index(), Some(0));
        s.handle_key(LightboxKey::Escape);
        assert!(!s.is_open());
    }

    #[test]
    fn home_end_can_be_disabled() {
        let items = vec![PhotoItem::new("a.jpg"), PhotoItem::new("b.jpg")];
        let mut s = GallerySession::new(items, false);
        s.open(1);
        assert!(!s.handle_key(LightboxKey::Home));
        assert_eq!(s.current_index(), Some(1));
    }

    #[test]
    fn replacing_items_closes_the_lightbox() {
        let mut s = session(3);
        s.open(1);
        s.replace_items(vec![PhotoItem::new("z.png")]);
        assert!(!s.is_open());
        assert_eq!(s.len(), 1);
    }
}
