use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use std::time::Duration;

use super::render::render_gallery;
use super::screen::Screen;
use super::theme::Theme;
use crate::constants::UI_GRID_COLUMNS;
use crate::gallery::{Filter, Gallery, GalleryCommand, ItemId};

/// Terminal host for the gallery.
///
/// Owns the grid selection, which stands in for pointing at an item: Enter
/// on the selection is the "click" that opens the lightbox.
pub struct GalleryApp {
    pub gallery: Gallery,
    pub theme: Theme,
    /// Index into the visible items
    selected: usize,
    running: bool,
}

impl GalleryApp {
    pub fn new(gallery: Gallery, theme: Theme) -> Self {
        Self {
            gallery,
            theme,
            selected: 0,
            running: true,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<ItemId> {
        self.gallery.visible_items().get(self.selected).copied()
    }

    /// Translate a key press into a gallery command, if it maps to one
    pub fn command_for_key(&self, key: KeyEvent) -> Option<GalleryCommand> {
        if self.gallery.is_lightbox_open() {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Some(GalleryCommand::Close),
                KeyCode::Right => Some(GalleryCommand::Next),
                KeyCode::Left => Some(GalleryCommand::Prev),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.selected_item().map(GalleryCommand::Open),
            KeyCode::Tab => Some(GalleryCommand::Filter(self.cycle_filter(1))),
            KeyCode::BackTab => Some(GalleryCommand::Filter(self.cycle_filter(-1))),
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c.to_digit(10).map(|d| d as usize - 1)?;
                self.gallery.filters().get(idx).cloned().map(GalleryCommand::Filter)
            }
            _ => None,
        }
    }

    fn cycle_filter(&self, step: isize) -> Filter {
        let filters = self.gallery.filters();
        let len = filters.len() as isize;
        let current = filters
            .iter()
            .position(|f| f == self.gallery.active_filter())
            .unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len) as usize;
        filters[next].clone()
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.gallery.visible_items().len();
        if len == 0 {
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, len as isize - 1) as usize;
    }
}

impl Screen for GalleryApp {
    fn handle_key(&mut self, key: KeyEvent) {
        if let Some(command) = self.command_for_key(key) {
            let refilter = matches!(command, GalleryCommand::Filter(_));
            self.gallery.apply(command);
            if refilter {
                self.selected = 0;
            }
            return;
        }

        if self.gallery.is_lightbox_open() {
            return;
        }

        let columns = UI_GRID_COLUMNS as isize;
        match key.code {
            KeyCode::Left => self.move_selection(-1),
            KeyCode::Right => self.move_selection(1),
            KeyCode::Up => self.move_selection(-columns),
            KeyCode::Down => self.move_selection(columns),
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn tick(&mut self, elapsed: Duration) {
        self.gallery.tick(elapsed);
    }

    fn render(&self, frame: &mut Frame) {
        render_gallery(frame, self);
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::sample_items;
    use crossterm::event::KeyModifiers;

    fn app() -> GalleryApp {
        GalleryApp::new(Gallery::new(sample_items()), Theme::dark())
    }

    fn press(app: &mut GalleryApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_enter_opens_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected(), 4);

        press(&mut app, KeyCode::Enter);
        assert!(app.gallery.is_lightbox_open());
        assert_eq!(app.gallery.cursor(), Some(4));
    }

    #[test]
    fn test_lightbox_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.gallery.cursor(), Some(8));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.gallery.cursor(), Some(1));

        // arrows drive the lightbox, not the grid
        assert_eq!(app.selected(), 0);

        press(&mut app, KeyCode::Esc);
        assert!(!app.gallery.is_lightbox_open());
        assert!(app.is_running());

        press(&mut app, KeyCode::Esc);
        assert!(!app.is_running());
    }

    #[test]
    fn test_number_keys_pick_filter() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.gallery.active_filter(), &Filter::from_tag("city"));
        assert_eq!(app.gallery.visible_items().len(), 3);

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.gallery.active_filter(), &Filter::from_tag("city"));

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.gallery.active_filter(), &Filter::All);
    }

    #[test]
    fn test_tab_cycles_filters_and_resets_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.gallery.active_filter(), &Filter::from_tag("nature"));
        assert_eq!(app.selected(), 0);

        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.gallery.active_filter(), &Filter::from_tag("animals"));
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected(), 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected(), 8);
    }

    #[test]
    fn test_enter_on_empty_filter_does_nothing() {
        let mut app = GalleryApp::new(Gallery::new(Vec::new()), Theme::dark());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        assert!(!app.gallery.is_lightbox_open());
    }
}
