//! Frame composition.
//!
//! Turns a [`Session`] into one complete frame string: bordered page-tab
//! header, active page body, optional error banner, and footer hints. The
//! frame is rebuilt wholesale after every event; there is no diffing and no
//! state in here. All presentation lives in a [`Theme`] passed in by the
//! host, so sessions stay free of styling concerns.

use lipgloss_extras::lipgloss::{rounded_border, width as lg_width};
use lipgloss_extras::prelude::*;

use crate::content;
use crate::key::Binding;
use crate::keymap::default_key_map;
use crate::session::{Page, Session};

/// Minimum terminal width for the resume viewport; below this the page
/// shows a widen-your-terminal notice instead.
pub const MIN_RESUME_WIDTH: usize = 83;

/// Paragraph wrap width cap for prose pages.
const PARA_WIDTH: usize = 80;

/// Bullet used for the home page goal lists.
const BULLET: &str = "•";

/// Styles for every visual element of a frame.
///
/// The default palette is the site's Tokyo-Night-ish scheme; hosts can
/// swap any style to restyle a session without touching its state.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Active page label and page hotkeys.
    pub selected: Style,
    /// Inactive header label text.
    pub nav: Style,
    /// Section titles.
    pub title: Style,
    /// Body prose.
    pub paragraph: Style,
    /// Goal list headings.
    pub list_title: Style,
    /// The error banner.
    pub error: Style,
    /// Footer hint lines.
    pub hint: Style,
    /// Header border glyphs.
    pub border: Style,
    /// Border wrapped around the resume viewport.
    pub viewport_border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected: Style::new().foreground(Color::from("#bb9af7")),
            nav: Style::new().foreground(Color::from("#c0caf5")),
            title: Style::new().foreground(Color::from("#ff9e64")).bold(true),
            paragraph: Style::new().foreground(Color::from("#c0caf5")),
            list_title: Style::new().foreground(Color::from("#2ac3de")),
            error: Style::new().foreground(Color::from("#f7768e")),
            hint: Style::new().foreground(Color::from("#565f89")),
            border: Style::new().foreground(Color::from("#c0caf5")),
            viewport_border: Style::new()
                .border_style(rounded_border())
                .border_foreground(Color::from("62")),
        }
    }
}

/// Renders one complete frame for the session.
///
/// The frame is header, body for the active page, an error banner when the
/// session carries one, a scroll hint on the resume page, and the quit
/// hint, joined with fixed blank-line separators.
pub fn render_frame(session: &Session, theme: &Theme) -> String {
    let mut frame = String::new();

    frame.push_str(&header(session, theme));
    frame.push_str("\n\n");

    let body = match session.page {
        Page::Home => home_body(session, theme),
        Page::Blog => blog_body(),
        Page::Resume => resume_body(session, theme),
        Page::About => about_body(session, theme),
    };
    frame.push_str(&body);
    frame.push_str("\n\n");

    if let Some(err) = &session.error {
        frame.push_str(
            &theme
                .error
                .render(&format!("Error with application: {}", err)),
        );
        frame.push_str("\n\n");
    }

    let keymap = default_key_map();
    if session.page == Page::Resume {
        let scroll_keys: [&Binding; 4] = [
            &keymap.up_line,
            &keymap.down_line,
            &keymap.up_page,
            &keymap.down_page,
        ];
        frame.push_str(&theme.hint.render(&hint_line(&scroll_keys)));
        frame.push('\n');
    }
    frame.push_str(
        &theme
            .hint
            .render(&format!("Press '{}' to quit", keymap.quit.help().key)),
    );

    frame
}

/// Renders the page-tab row inside a thick-bordered box.
///
/// The active page's label is rendered whole in the selected style; every
/// other label gets a selected-style hotkey (its first character) followed
/// by plain navigation text.
fn header(session: &Session, theme: &Theme) -> String {
    let labels: Vec<&str> = Page::ALL.iter().map(|p| p.label()).collect();
    let cells: Vec<String> = Page::ALL
        .iter()
        .map(|page| {
            let label = page.label();
            if *page == session.page {
                theme.selected.render(label)
            } else {
                let (hotkey, rest) = label.split_at(1);
                format!(
                    "{}{}",
                    theme.selected.render(hotkey),
                    theme.nav.render(rest)
                )
            }
        })
        .collect();
    bordered_row(&labels, &cells, &theme.border)
}

/// Draws a one-row grid around pre-styled cells.
///
/// Cell widths come from the plain labels so styling never skews the
/// border math.
fn bordered_row(plain: &[&str], styled: &[String], border: &Style) -> String {
    let widths: Vec<usize> = plain.iter().map(|label| lg_width(label) + 2).collect();

    let bar = |left: &str, sep: &str, right: &str| -> String {
        let spans: Vec<String> = widths.iter().map(|w| "━".repeat(*w)).collect();
        format!("{}{}{}", left, spans.join(sep), right)
    };

    let divider = border.render("┃");
    let row: Vec<String> = styled.iter().map(|cell| format!(" {} ", cell)).collect();

    let mut out = String::new();
    out.push_str(&border.render(&bar("┏", "┳", "┓")));
    out.push('\n');
    out.push_str(&format!("{}{}{}", divider, row.join(&divider), divider));
    out.push('\n');
    out.push_str(&border.render(&bar("┗", "┻", "┛")));
    out
}

fn home_body(session: &Session, theme: &Theme) -> String {
    let store = content::store();
    let width = para_width(session);
    let mut body = String::new();

    for section in store.sections {
        if !section.title.is_empty() {
            body.push_str(&theme.title.render(section.title));
            body.push_str("\n\n");
        }
        if !section.body.is_empty() {
            body.push_str(&theme.paragraph.render(&textwrap::fill(section.body, width)));
            body.push_str("\n\n");
        }
    }

    for goals in [&store.near_term, &store.long_term] {
        body.push_str(&theme.list_title.render(goals.title));
        body.push('\n');
        let items: Vec<String> = goals
            .items
            .iter()
            .map(|item| format!("{} {}", BULLET, item))
            .collect();
        body.push_str(&theme.paragraph.render(&items.join("\n")));
        body.push_str("\n\n");
    }

    // The frame adds its own separator after the body.
    body.trim_end_matches('\n').to_string()
}

fn blog_body() -> String {
    content::store().blog.to_string()
}

fn resume_body(session: &Session, theme: &Theme) -> String {
    if session.width < MIN_RESUME_WIDTH {
        return theme.paragraph.render(&textwrap::fill(
            &format!(
                "Please expand terminal out to at least {} characters",
                MIN_RESUME_WIDTH
            ),
            para_width(session),
        ));
    }
    theme.viewport_border.render(&session.viewport.render())
}

fn about_body(session: &Session, theme: &Theme) -> String {
    theme
        .paragraph
        .render(&textwrap::fill(content::store().about, para_width(session)))
}

/// One dim line of `key description` pairs separated by bullets.
fn hint_line(bindings: &[&Binding]) -> String {
    bindings
        .iter()
        .map(|b| {
            let help = b.help();
            format!("{} {}", help.key, help.desc)
        })
        .collect::<Vec<_>>()
        .join(&format!(" {} ", BULLET))
}

fn para_width(session: &Session) -> usize {
    session.width.min(PARA_WIDTH).max(1)
}
