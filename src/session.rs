//! Per-connection session state and event handling.
//!
//! A [`Session`] is one client's view of the site: the active page, the
//! terminal geometry, a color profile name, an optional application error,
//! and the viewport holding the wrapped resume document. Events mutate the
//! session in place; rendering never does.
//!
//! Key events are resolved in a single fixed priority order:
//! **quit, then page switches (home, blog, resume, about), then scrolling**.
//! Scroll bindings only apply while the resume page is active and are inert
//! everywhere else. Keys matching nothing are ignored.

use bubbletea_rs::KeyMsg;

use crate::content;
use crate::keymap::SiteKeyMap;
use crate::viewport;

/// Lines scrolled by a single line-scroll key press.
pub const LINE_SCROLL: usize = 1;

/// Rows reserved for the header and footer around the viewport.
pub const CHROME_ROWS: usize = 10;

/// Fixed content width of the resume viewport.
pub const VIEWPORT_WIDTH: usize = 80;

/// The pages a session can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Landing page with prose sections and goal lists.
    Home,
    /// Placeholder until there is something to read.
    Blog,
    /// Scrollable long-form resume.
    Resume,
    /// How the site is built and where to report problems.
    About,
}

impl Page {
    /// All pages in header display order.
    pub const ALL: [Page; 4] = [Page::Home, Page::Blog, Page::Resume, Page::About];

    /// Header label for the page; the first character is its hotkey.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "h home",
            Page::Blog => "b blog",
            Page::Resume => "r resume",
            Page::About => "a about",
        }
    }
}

/// What the session asks of its host after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep the session running and re-render.
    Continue,
    /// Propagate the termination signal to the runtime.
    Quit,
}

/// One connected client's UI state.
#[derive(Debug)]
pub struct Session {
    /// Active page.
    pub page: Page,
    /// Terminal width in columns.
    pub width: usize,
    /// Terminal height in rows.
    pub height: usize,
    /// Color capability profile reported at session start.
    pub profile: String,
    /// Host-settable application error, rendered as a banner.
    pub error: Option<String>,
    /// Viewport over the resume document.
    pub viewport: viewport::Model,
}

impl Session {
    /// Creates a session for a terminal of the given size.
    ///
    /// The viewport is sized to the fixed 80-column content width and the
    /// terminal height minus the chrome reservation, and filled with the
    /// bundled resume text. Dimensions are floored to 1.
    pub fn new(profile: impl Into<String>, width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut vp = viewport::Model::new(VIEWPORT_WIDTH, viewport_height(height));
        vp.set_content(content::store().resume);
        Self {
            page: Page::Home,
            width,
            height,
            profile: profile.into(),
            error: None,
            viewport: vp,
        }
    }

    /// Applies a terminal resize.
    ///
    /// Stores the new geometry and adjusts the viewport's visible height.
    /// The viewport keeps its bootstrap width, so no re-wrap happens here,
    /// and neither the scroll offset nor the active page change.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.viewport
            .set_size(VIEWPORT_WIDTH, viewport_height(self.height));
    }

    /// Handles a key press against the given bindings.
    ///
    /// Priority is quit, then page switches in fixed order, then scrolling
    /// (resume page only). The first match wins; unmatched keys are
    /// silently ignored.
    pub fn handle_key(&mut self, msg: &KeyMsg, keymap: &SiteKeyMap) -> Action {
        if keymap.quit.matches(msg) {
            return Action::Quit;
        }

        if keymap.home.matches(msg) {
            self.page = Page::Home;
        } else if keymap.blog.matches(msg) {
            self.page = Page::Blog;
        } else if keymap.resume.matches(msg) {
            self.page = Page::Resume;
        } else if keymap.about.matches(msg) {
            self.page = Page::About;
        } else if self.page == Page::Resume {
            if keymap.up_line.matches(msg) {
                self.viewport.scroll_up(LINE_SCROLL);
            } else if keymap.down_line.matches(msg) {
                self.viewport.scroll_down(LINE_SCROLL);
            } else if keymap.up_page.matches(msg) {
                self.viewport.half_page_up();
            } else if keymap.down_page.matches(msg) {
                self.viewport.half_page_down();
            }
        }

        Action::Continue
    }

    /// Sets the application error shown in the frame's banner.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Clears the application error.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

fn viewport_height(terminal_height: usize) -> usize {
    terminal_height.saturating_sub(CHROME_ROWS).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{default_key_map, SiteKeyMap};
    use crate::key::Binding;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(c: char) -> KeyMsg {
        KeyMsg {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
        }
    }

    fn session() -> Session {
        Session::new("truecolor", 80, 20)
    }

    #[test]
    fn test_starts_on_home() {
        let s = session();
        assert_eq!(s.page, Page::Home);
        assert_eq!(s.viewport.y_offset(), 0);
    }

    #[test]
    fn test_page_switch_keys() {
        let mut s = session();
        let keymap = default_key_map();

        assert_eq!(s.handle_key(&press('r'), keymap), Action::Continue);
        assert_eq!(s.page, Page::Resume);
        s.handle_key(&press('b'), keymap);
        assert_eq!(s.page, Page::Blog);
        s.handle_key(&press('a'), keymap);
        assert_eq!(s.page, Page::About);
        s.handle_key(&press('h'), keymap);
        assert_eq!(s.page, Page::Home);
    }

    #[test]
    fn test_quit_reports_and_mutates_nothing() {
        let mut s = session();
        s.handle_key(&press('r'), default_key_map());
        let offset = s.viewport.y_offset();

        assert_eq!(s.handle_key(&press('q'), default_key_map()), Action::Quit);
        assert_eq!(s.page, Page::Resume);
        assert_eq!(s.viewport.y_offset(), offset);
    }

    #[test]
    fn test_scroll_only_on_resume() {
        let mut s = session();
        let keymap = default_key_map();

        for page in [Page::Home, Page::Blog, Page::About] {
            s.page = page;
            s.handle_key(&press('j'), keymap);
            s.handle_key(&press('k'), keymap);
            assert_eq!(s.page, page);
            assert_eq!(s.viewport.y_offset(), 0);
        }

        s.page = Page::Resume;
        s.handle_key(&press('j'), keymap);
        assert_eq!(s.viewport.y_offset(), LINE_SCROLL);
    }

    #[test]
    fn test_page_switch_beats_scroll_for_shared_key() {
        // Bind 'j' to both a page switch and line-down; the switch must win.
        let mut keymap = SiteKeyMap::default();
        keymap.blog = Binding::new(vec![KeyCode::Char('j')]).with_help("j", "blog page");

        let mut s = session();
        s.page = Page::Resume;
        s.handle_key(&press('j'), &keymap);
        assert_eq!(s.page, Page::Blog);
        assert_eq!(s.viewport.y_offset(), 0);
    }

    #[test]
    fn test_quit_beats_page_switch_for_shared_key() {
        let mut keymap = SiteKeyMap::default();
        keymap.quit = Binding::new(vec![KeyCode::Char('h')]).with_help("h", "quit");

        let mut s = session();
        assert_eq!(s.handle_key(&press('h'), &keymap), Action::Quit);
        assert_eq!(s.page, Page::Home);
    }

    #[test]
    fn test_unmatched_keys_ignored() {
        let mut s = session();
        let keymap = default_key_map();
        s.handle_key(&press('z'), keymap);
        s.handle_key(
            &KeyMsg {
                key: KeyCode::F(5),
                modifiers: KeyModifiers::NONE,
            },
            keymap,
        );
        assert_eq!(s.page, Page::Home);
        assert_eq!(s.viewport.y_offset(), 0);
    }

    #[test]
    fn test_resize_adjusts_viewport_height_only() {
        let mut s = session();
        s.page = Page::Resume;
        s.handle_key(&press('j'), default_key_map());
        let offset = s.viewport.y_offset();

        s.resize(120, 40);
        assert_eq!(s.width, 120);
        assert_eq!(s.height, 40);
        assert_eq!(s.viewport.height(), 40 - CHROME_ROWS);
        assert_eq!(s.viewport.width(), VIEWPORT_WIDTH);
        assert_eq!(s.viewport.y_offset(), offset);
        assert_eq!(s.page, Page::Resume);
    }

    #[test]
    fn test_tiny_terminal_floors_viewport() {
        let mut s = session();
        s.resize(5, 3);
        assert_eq!(s.viewport.height(), 1);
    }

    #[test]
    fn test_error_slot() {
        let mut s = session();
        assert!(s.error.is_none());
        s.set_error("content failed to load");
        assert_eq!(s.error.as_deref(), Some("content failed to load"));
        s.clear_error();
        assert!(s.error.is_none());
    }

    #[test]
    fn test_line_scroll_clamps_at_end() {
        let mut s = session();
        s.page = Page::Resume;
        let keymap = default_key_map();
        let max = s.viewport.line_count() - s.viewport.height();
        for _ in 0..(max + 50) {
            s.handle_key(&press('j'), keymap);
        }
        assert_eq!(s.viewport.y_offset(), max);
    }
}
