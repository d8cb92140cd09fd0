#![warn(missing_docs)]

//! # termsite
//!
//! A multi-page personal site for the terminal, built with
//! [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs) and styled
//! with lipgloss. Clients get four pages (home, blog, resume, about)
//! switched with single-key commands, with the resume served through a
//! scrollable viewport.
//!
//! ## Architecture
//!
//! The crate is the session-scoped UI engine; the bubbletea-rs runtime
//! plays the transport/session collaborator that feeds it events:
//!
//! - [`content`]: immutable, process-wide page content, loaded once.
//! - [`viewport`]: a bounded scrollable window over word-wrapped text.
//! - [`session`]: per-client state plus the page-navigation state machine
//!   (key priority: quit, then page switches, then scrolling).
//! - [`render`]: composes header, body, error banner and footer hints into
//!   one frame string after every event.
//! - [`keymap`] / [`key`]: the static binding table and its primitives.
//! - [`app`]: bootstrap glue binding all of it to the runtime.
//!
//! ## Example
//!
//! ```rust
//! use termsite::prelude::*;
//!
//! let mut session = Session::new("truecolor", 100, 30);
//! session.handle_key(
//!     &bubbletea_rs::KeyMsg {
//!         key: crossterm::event::KeyCode::Char('r'),
//!         modifiers: crossterm::event::KeyModifiers::NONE,
//!     },
//!     default_key_map(),
//! );
//! let frame = render_frame(&session, &Theme::default());
//! assert!(!frame.is_empty());
//! ```

pub mod app;
pub mod content;
pub mod key;
pub mod keymap;
pub mod render;
pub mod session;
pub mod viewport;

pub use app::Site;
pub use render::{render_frame, Theme};
pub use session::{Action, Page, Session};
pub use viewport::Model as Viewport;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::app::Site;
    pub use crate::content::{store as content_store, ContentStore};
    pub use crate::key::Binding;
    pub use crate::keymap::{default_key_map, SiteKeyMap};
    pub use crate::render::{render_frame, Theme};
    pub use crate::session::{Action, Page, Session};
    pub use crate::viewport::Model as Viewport;
}
