use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use super::command::{Direction, GalleryCommand};
use super::item::{Filter, GalleryItem, ItemId};
use crate::constants::GALLERY_CROSSFADE_MS;
use crate::timer::OneShot;

/// What the lightbox overlay currently shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightboxView {
    pub open: bool,
    /// Image source on screen; lags the cursor until the crossfade swaps it
    pub source: Option<String>,
    pub caption: Option<String>,
    /// False while the crossfade has the image faded out
    pub image_visible: bool,
    /// 1-based position and count, e.g. `(3, 7)`
    pub position: Option<(usize, usize)>,
}

/// Filterable gallery with a lightbox viewer
#[derive(Debug, Clone)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    active_filter: Filter,
    visible: Vec<ItemId>,
    cursor: usize,
    lightbox_open: bool,
    displayed: Option<ItemId>,
    image_visible: bool,
    crossfade: OneShot<ItemId>,
    crossfade_delay: Duration,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self::with_crossfade(items, Duration::from_millis(GALLERY_CROSSFADE_MS))
    }

    pub fn with_crossfade(items: Vec<GalleryItem>, crossfade_delay: Duration) -> Self {
        let visible = (0..items.len()).map(ItemId).collect();
        Self {
            items,
            active_filter: Filter::All,
            visible,
            cursor: 0,
            lightbox_open: false,
            displayed: None,
            image_visible: false,
            crossfade: OneShot::new(),
            crossfade_delay,
        }
    }

    /// Dispatch a command to the matching operation
    pub fn apply(&mut self, command: GalleryCommand) {
        match command {
            GalleryCommand::Filter(filter) => self.apply_filter(filter),
            GalleryCommand::Open(id) => self.open(id),
            GalleryCommand::Close => self.close(),
            GalleryCommand::Next => self.navigate(Direction::Forward),
            GalleryCommand::Prev => self.navigate(Direction::Backward),
        }
    }

    /// Advance deferred work by `elapsed`; completes a pending crossfade
    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(id) = self.crossfade.advance(elapsed) {
            self.displayed = Some(id);
            self.image_visible = true;
        }
    }

    /// Restrict the visible items to `filter`, keeping their original order.
    ///
    /// The lightbox is left as it is: an open lightbox stays open and the
    /// cursor is not checked against the new list.
    pub fn apply_filter(&mut self, filter: Filter) {
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| filter.matches(item))
            .map(|(idx, _)| ItemId(idx))
            .collect();
        debug!(filter = %filter, visible = self.visible.len(), "filter applied");
        self.active_filter = filter;
    }

    /// Open the lightbox on `id`; does nothing if the item is filtered out
    pub fn open(&mut self, id: ItemId) {
        let Some(position) = self.visible.iter().position(|&v| v == id) else {
            return;
        };
        self.cursor = position;
        self.lightbox_open = true;
        debug!(item = id.0, position, "lightbox opened");
        self.render_at_cursor();
    }

    pub fn close(&mut self) {
        self.lightbox_open = false;
    }

    /// Step the cursor through the visible items, wrapping at both ends
    pub fn navigate(&mut self, direction: Direction) {
        let len = self.visible.len();
        if len == 0 || !self.lightbox_open {
            return;
        }
        self.cursor = match direction {
            Direction::Forward => (self.cursor + 1) % len,
            Direction::Backward => (self.cursor + len - 1) % len,
        };
        self.render_at_cursor();
    }

    // Fade the image out and queue the swap; a newer render retargets it
    fn render_at_cursor(&mut self) {
        if let Some(&id) = self.visible.get(self.cursor) {
            self.image_visible = false;
            self.crossfade.arm(self.crossfade_delay, id);
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&GalleryItem> {
        self.items.get(id.0)
    }

    pub fn visible_items(&self) -> &[ItemId] {
        &self.visible
    }

    pub fn is_hidden(&self, id: ItemId) -> bool {
        !self.visible.contains(&id)
    }

    pub fn active_filter(&self) -> &Filter {
        &self.active_filter
    }

    /// Filter buttons: `all`, then each category in order of first appearance
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = vec![Filter::All];
        for item in &self.items {
            let filter = Filter::Category(item.category.clone());
            if !filters.contains(&filter) {
                filters.push(filter);
            }
        }
        filters
    }

    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox_open
    }

    /// Cursor into the visible items; only meaningful while the lightbox is open
    pub fn cursor(&self) -> Option<usize> {
        self.lightbox_open.then_some(self.cursor)
    }

    /// Page scrolling is locked while the lightbox covers the gallery
    pub fn scroll_locked(&self) -> bool {
        self.lightbox_open
    }

    pub fn lightbox(&self) -> LightboxView {
        let shown = self.displayed.and_then(|id| self.item(id));
        let position = (self.lightbox_open && self.cursor < self.visible.len())
            .then(|| (self.cursor + 1, self.visible.len()));
        LightboxView {
            open: self.lightbox_open,
            source: shown.map(|item| item.source.clone()),
            caption: shown.map(|item| item.caption.clone()),
            image_visible: self.image_visible,
            position,
        }
    }
}
