//! Session bootstrap and runtime glue.
//!
//! [`Site`] wires a [`Session`] to the bubbletea-rs event loop: window
//! size messages become resizes, key messages go through the navigation
//! priority order, and a matched quit binding becomes the runtime's quit
//! command. Rendering is delegated to the render pipeline with the theme
//! carried here, outside the session state.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};

use crate::keymap::{default_key_map, SiteKeyMap};
use crate::render::{render_frame, Theme};
use crate::session::{Action, Session};

/// Terminal width assumed until the first resize event arrives.
const DEFAULT_WIDTH: usize = 80;

/// Terminal height assumed until the first resize event arrives.
const DEFAULT_HEIGHT: usize = 20;

/// The site application: one session, its theme, and the shared key map.
#[derive(Debug)]
pub struct Site {
    /// The connected client's UI state.
    pub session: Session,
    /// Presentation configuration handed to the render pipeline.
    pub theme: Theme,
    keymap: &'static SiteKeyMap,
}

impl Site {
    /// Bootstraps a site for a terminal of the given size.
    pub fn new(profile: impl Into<String>, width: usize, height: usize) -> Self {
        Self {
            session: Session::new(profile, width, height),
            theme: Theme::default(),
            keymap: default_key_map(),
        }
    }
}

impl BubbleTeaModel for Site {
    fn init() -> (Self, Option<Cmd>) {
        let site = Site::new(detect_color_profile(), DEFAULT_WIDTH, DEFAULT_HEIGHT);
        (site, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.session
                .resize(size.width as usize, size.height as usize);
            return None;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if self.session.handle_key(key, self.keymap) == Action::Quit {
                return Some(quit());
            }
        }

        None
    }

    fn view(&self) -> String {
        render_frame(&self.session, &self.theme)
    }
}

/// Names the terminal's color capability from the environment.
///
/// Stands in for the capability profile a session transport would report.
fn detect_color_profile() -> String {
    if std::env::var("COLORTERM")
        .map(|v| v.contains("truecolor") || v.contains("24bit"))
        .unwrap_or(false)
    {
        return "truecolor".to_string();
    }
    if std::env::var("TERM")
        .map(|t| t.contains("256color"))
        .unwrap_or(false)
    {
        return "ansi256".to_string();
    }
    "ansi".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Page, LINE_SCROLL};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(c: char) -> Msg {
        Box::new(KeyMsg {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_resume_then_scroll_scenario() {
        let mut site = Site::new("truecolor", 80, 20);

        assert!(site.update(press('r')).is_none());
        assert_eq!(site.session.page, Page::Resume);

        site.update(press('j'));
        assert_eq!(site.session.viewport.y_offset(), LINE_SCROLL);

        // Scrolling clamps at the end of the content.
        let max = site.session.viewport.line_count() - site.session.viewport.height();
        for _ in 0..(max + 20) {
            site.update(press('j'));
        }
        assert_eq!(site.session.viewport.y_offset(), max);
    }

    #[test]
    fn test_quit_key_emits_command() {
        let mut site = Site::new("truecolor", 80, 20);
        let page = site.session.page;
        let cmd = site.update(press('q'));
        assert!(cmd.is_some());
        assert_eq!(site.session.page, page);
    }

    #[test]
    fn test_window_size_msg_resizes_session() {
        let mut site = Site::new("truecolor", 80, 20);
        let msg: Msg = Box::new(WindowSizeMsg {
            width: 120,
            height: 40,
        });
        assert!(site.update(msg).is_none());
        assert_eq!(site.session.width, 120);
        assert_eq!(site.session.height, 40);
    }

    #[test]
    fn test_view_matches_render_pipeline() {
        let site = Site::new("truecolor", 80, 20);
        assert_eq!(site.view(), render_frame(&site.session, &site.theme));
    }

    #[test]
    fn test_detect_color_profile_names_something() {
        let profile = detect_color_profile();
        assert!(["truecolor", "ansi256", "ansi"].contains(&profile.as_str()));
    }
}
