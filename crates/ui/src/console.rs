//! Console host: reads commands, drives the editor, redraws.

use std::io::{self, Write};

use querylens_application::ports::{ClipboardAccessor, TabAccessor};
use querylens_application::{ApplicationError, ApplicationResult, ParamEditor};
use querylens_domain::{DomainError, RowId, SessionPhase};
use querylens_infrastructure::TracingNotifier;
use crate::bridge::{HELP, UiCommand};
use crate::input::LineSource;
use crate::view::{Style, render_notification, render_preview, render_rows};

/// Prompt shown by interactive line sources.
pub const PROMPT: &str = "> ";

/// Editor type the console drives.
pub type ConsoleEditor<T, C> = ParamEditor<T, C, TracingNotifier>;

/// How a console session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The edited URL was applied.
    Committed {
        /// The URL the tab was sent to.
        url: String,
    },
    /// The user quit without applying.
    Quit,
    /// Input ran out.
    InputClosed,
}

/// Runs an editing session until it is committed, the user quits, or the
/// input closes.
///
/// # Errors
///
/// Returns an error only when reading input or writing output fails;
/// editor errors are shown to the user and the session continues.
pub async fn run_session<T, C, S, W>(
    editor: &mut ConsoleEditor<T, C>,
    input: &mut S,
    out: &mut W,
    style: Style,
) -> io::Result<SessionEnd>
where
    T: TabAccessor,
    C: ClipboardAccessor,
    S: LineSource,
    W: Write,
{
    flush_notifications(editor, out, style)?;
    draw(editor, out, style)?;

    loop {
        out.flush()?;
        let Some(line) = input.read_line(PROMPT).await? else {
            return Ok(SessionEnd::InputClosed);
        };

        let command = match line.parse::<UiCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "! {e}")?;
                continue;
            }
        };
        tracing::debug!(?command, "console command");

        match command {
            UiCommand::Quit => return Ok(SessionEnd::Quit),
            UiCommand::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            UiCommand::List => {
                draw(editor, out, style)?;
                continue;
            }
            _ => {}
        }

        let result = dispatch(editor, command).await;
        let shown = flush_notifications(editor, out, style)?;
        if let Err(e) = result {
            if shown == 0 {
                writeln!(out, "! {e}")?;
            }
        }

        if editor.phase().is_terminal() {
            let url = editor.baseline_url().unwrap_or_default().to_string();
            return Ok(SessionEnd::Committed { url });
        }
        draw(editor, out, style)?;
    }
}

async fn dispatch<T, C>(editor: &mut ConsoleEditor<T, C>, command: UiCommand) -> ApplicationResult<()>
where
    T: TabAccessor,
    C: ClipboardAccessor,
{
    match command {
        UiCommand::Add => editor.add_row().map(|_| ()),
        UiCommand::Key { row, text } => {
            let id = row_id(editor, row)?;
            editor.set_key(&id, text)
        }
        UiCommand::Value { row, text } => {
            let id = row_id(editor, row)?;
            editor.set_value(&id, text)
        }
        UiCommand::Remove { row } => {
            let id = row_id(editor, row)?;
            editor.remove_row(&id)
        }
        UiCommand::Move { row, to } => {
            let id = row_id(editor, row)?;
            editor.move_row(&id, to - 1)
        }
        UiCommand::Drag {
            row,
            placement,
            target,
        } => {
            let dragged = row_id(editor, row)?;
            let target = row_id(editor, target)?;
            editor.move_row_relative(&dragged, &target, placement)
        }
        UiCommand::Copy { row: None } => editor.copy_url().await,
        UiCommand::Copy { row: Some(row) } => {
            let id = row_id(editor, row)?;
            editor.copy_value(&id).await
        }
        UiCommand::Reset => editor.reset(),
        UiCommand::Apply => editor.apply().await,
        UiCommand::List | UiCommand::Help | UiCommand::Quit => Ok(()),
    }
}

fn row_id<T, C>(editor: &ConsoleEditor<T, C>, row: usize) -> ApplicationResult<RowId>
where
    T: TabAccessor,
    C: ClipboardAccessor,
{
    editor
        .rows()
        .at(row.saturating_sub(1))
        .map(|r| r.id.clone())
        .ok_or_else(|| {
            ApplicationError::Domain(DomainError::RowIndexOutOfRange {
                index: row,
                len: editor.rows().len(),
            })
        })
}

fn flush_notifications<T, C, W: Write>(
    editor: &ConsoleEditor<T, C>,
    out: &mut W,
    style: Style,
) -> io::Result<usize>
where
    T: TabAccessor,
    C: ClipboardAccessor,
{
    let pending = editor.notifier().drain();
    for notification in &pending {
        writeln!(out, "{}", render_notification(notification, style))?;
    }
    Ok(pending.len())
}

fn draw<T, C, W: Write>(editor: &ConsoleEditor<T, C>, out: &mut W, style: Style) -> io::Result<()>
where
    T: TabAccessor,
    C: ClipboardAccessor,
{
    write!(out, "{}", render_rows(editor.rows(), editor.capabilities()))?;

    let preview = editor.preview();
    if preview.is_empty() {
        writeln!(out, "url: (unavailable)")?;
    } else {
        writeln!(out, "url: {}", render_preview(&preview, style))?;
    }

    let status = match editor.phase() {
        SessionPhase::LoadFailed { reason } => format!("unavailable ({reason})"),
        _ if editor.is_apply_in_flight() => "in progress".to_string(),
        _ if editor.can_apply() => "ready".to_string(),
        _ => "no changes".to_string(),
    };
    writeln!(out, "apply: {status}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use querylens_application::TabId;
    use querylens_domain::{Capabilities, EditorSettings};
    use querylens_infrastructure::{InMemoryTab, Osc52Clipboard};

    use crate::input::PipedLines;

    const PLAIN: Style = Style { color: false };

    type TestEditor = ConsoleEditor<InMemoryTab, Osc52Clipboard<Vec<u8>>>;

    async fn editor(url: &str) -> TestEditor {
        let mut editor = ParamEditor::new(
            InMemoryTab::new(Some(TabId::from(3)), url),
            Osc52Clipboard::with_writer(Vec::new()),
            TracingNotifier::new(),
            Capabilities::popup(),
            EditorSettings::default(),
        );
        let _ = editor.start().await;
        editor
    }

    async fn run(editor: &mut TestEditor, script: &str) -> (SessionEnd, String) {
        let mut out = Vec::new();
        let mut input = PipedLines::new(script.as_bytes());
        let end = run_session(editor, &mut input, &mut out, PLAIN)
            .await
            .unwrap();
        (end, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_add_edit_apply_commits() {
        let mut editor = editor("https://x.com/p?k=v").await;
        let (end, out) = run(&mut editor, "add\nkey 2 new\nvalue 2 1\napply\n").await;

        assert_eq!(
            end,
            SessionEnd::Committed {
                url: "https://x.com/p?k=v&new=1".to_string()
            }
        );
        assert!(out.contains("url: https://x.com/p?k=v&[new]=1"));
        assert!(out.contains("apply: ready"));
        assert!(out.contains("* Changes applied!"));
        assert_eq!(
            editor.tab_accessor().navigations(),
            vec!["https://x.com/p?k=v&new=1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_reset_and_quit() {
        let mut editor = editor("https://x.com/p?k=v").await;
        let (end, out) = run(&mut editor, "value 1 w\nreset\nquit\n").await;

        assert_eq!(end, SessionEnd::Quit);
        assert!(out.contains("url: https://x.com/p?k=[w]"));
        assert!(out.ends_with("url: https://x.com/p?k=v\napply: no changes\n"));
        assert!(editor.tab_accessor().navigations().is_empty());
    }

    #[tokio::test]
    async fn test_errors_are_reported_and_session_continues() {
        let mut editor = editor("https://x.com/p?k=v").await;
        let (end, out) = run(&mut editor, "rm 5\nfrob\napply\n").await;

        assert_eq!(end, SessionEnd::InputClosed);
        assert!(out.contains("! domain error: row index 5 out of range (len 1)"));
        assert!(out.contains("! unknown command 'frob'"));
        assert!(out.contains("! no pending changes"));
    }

    #[tokio::test]
    async fn test_failed_load_shows_unavailable() {
        let mut editor = editor("about:blank").await;
        let (end, out) = run(&mut editor, "add\n").await;

        assert_eq!(end, SessionEnd::InputClosed);
        assert!(out.starts_with("! Unable to load the current tab URL.\nNo parameters\n"));
        assert!(out.contains("url: (unavailable)"));
        assert!(out.contains("! no URL loaded"));
    }

    #[tokio::test]
    async fn test_copy_value_uses_clipboard() {
        let mut editor = editor("https://x.com/p?k=v").await;
        let (_, out) = run(&mut editor, "copy 1\n").await;
        assert!(out.contains("* Value copied!"));
    }
}
