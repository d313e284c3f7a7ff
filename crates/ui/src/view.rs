//! Text rendering of rows, preview and notifications.

use std::fmt::Write as _;

use crossterm::style::{self as term, Stylize};
use querylens_application::{Notification, NotificationLevel};
use querylens_domain::{Capabilities, PreviewSegment, Rows};

/// Output styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Style with terminal colours; otherwise changed parts are bracketed.
    pub color: bool,
}

impl Style {
    fn highlight(self, text: &str) -> String {
        if self.color {
            term::style(text).bold().yellow().to_string()
        } else {
            format!("[{text}]")
        }
    }
}

/// Renders the row list, numbered from 1.
///
/// A drag handle is shown only when the host can reorder by dragging.
#[must_use]
pub fn render_rows(rows: &Rows, capabilities: Capabilities) -> String {
    if rows.is_empty() {
        return "No parameters\n".to_string();
    }

    let width = rows.iter().map(|r| r.key.len()).max().unwrap_or(0);
    let handle = if capabilities.supports_drag_reorder {
        ":: "
    } else {
        ""
    };

    let mut out = String::new();
    for (index, row) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "{handle}{:>2}. {:<width$} = {}",
            index + 1,
            row.key,
            row.value
        );
    }
    out
}

/// Renders the preview, highlighting changed keys and values.
#[must_use]
pub fn render_preview(segments: &[PreviewSegment], style: Style) -> String {
    segments
        .iter()
        .map(|s| {
            if s.highlighted {
                style.highlight(&s.text)
            } else {
                s.text.clone()
            }
        })
        .collect()
}

/// Renders a notification as a single line.
#[must_use]
pub fn render_notification(notification: &Notification, style: Style) -> String {
    match (notification.level, style.color) {
        (NotificationLevel::Error, true) => term::style(format!("! {}", notification.message))
            .red()
            .to_string(),
        (NotificationLevel::Error, false) => format!("! {}", notification.message),
        _ => format!("* {}", notification.message),
    }
}
