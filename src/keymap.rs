//! Key bindings for site navigation and viewport scrolling.
//!
//! One [`SiteKeyMap`] describes every key the application reacts to:
//!
//! - **Pages**: `h` (home), `b` (blog), `r` (resume), `a` (about)
//! - **Scrolling** (resume page only): `↑/k` and `↓/j` by line,
//!   `ctrl+u` / `ctrl+d` by half page
//! - **Quit**: `q` or `ctrl+c`
//!
//! Matching priority is decided by the session, not here: quit first, then
//! page switches in fixed order, then scrolling. The table itself is
//! immutable and process-wide; [`default_key_map`] hands out the shared
//! instance.

use crossterm::event::{KeyCode, KeyModifiers};
use once_cell::sync::Lazy;

use crate::key::Binding;

/// Key bindings for page switching, scrolling and quitting.
#[derive(Debug, Clone)]
pub struct SiteKeyMap {
    /// Scroll the resume viewport up one line.
    pub up_line: Binding,
    /// Scroll the resume viewport down one line.
    pub down_line: Binding,
    /// Scroll the resume viewport up half a page.
    pub up_page: Binding,
    /// Scroll the resume viewport down half a page.
    pub down_page: Binding,
    /// End the session.
    pub quit: Binding,
    /// Switch to the home page.
    pub home: Binding,
    /// Switch to the blog page.
    pub blog: Binding,
    /// Switch to the resume page.
    pub resume: Binding,
    /// Switch to the about page.
    pub about: Binding,
}

impl Default for SiteKeyMap {
    fn default() -> Self {
        Self {
            up_line: Binding::new(vec![KeyCode::Char('k'), KeyCode::Up])
                .with_help("↑/k", "scroll up"),
            down_line: Binding::new(vec![KeyCode::Char('j'), KeyCode::Down])
                .with_help("↓/j", "scroll down"),
            up_page: Binding::new(vec![(KeyCode::Char('u'), KeyModifiers::CONTROL)])
                .with_help("ctrl+u", "half page up"),
            down_page: Binding::new(vec![(KeyCode::Char('d'), KeyModifiers::CONTROL)])
                .with_help("ctrl+d", "half page down"),
            quit: Binding::new(vec![
                (KeyCode::Char('q'), KeyModifiers::NONE),
                (KeyCode::Char('c'), KeyModifiers::CONTROL),
            ])
            .with_help("q", "quit"),
            home: Binding::new(vec![KeyCode::Char('h')]).with_help("h", "home page"),
            blog: Binding::new(vec![KeyCode::Char('b')]).with_help("b", "blog page"),
            resume: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "resume page"),
            about: Binding::new(vec![KeyCode::Char('a')]).with_help("a", "about page"),
        }
    }
}

static DEFAULT_KEY_MAP: Lazy<SiteKeyMap> = Lazy::new(SiteKeyMap::default);

/// Returns the process-wide default key map.
///
/// The table is built once and shared by every session; bindings are only
/// ever read for matching.
pub fn default_key_map() -> &'static SiteKeyMap {
    &DEFAULT_KEY_MAP
}
