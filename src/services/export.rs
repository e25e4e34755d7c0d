//! Export of the edited template.
//!
//! Exporting re-embeds the session's schema into its document and hands the
//! text to the OS clipboard or writes it to a file. Failures here are
//! reported to the user and never touch the session.

use crate::parser::SerializeOptions;
use crate::services::session::EditorSession;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Destination for copied text.
pub trait ClipboardSink {
    /// Replaces the clipboard content with `text`.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
            .context("Failed to copy to clipboard")
    }
}

/// Renders the updated document.
///
/// # Errors
///
/// Fails when the session's document has no schema block to replace.
pub fn render(session: &EditorSession, options: SerializeOptions) -> Result<String> {
    session
        .export(options)
        .context("Cannot export: the loaded document has no schema block")
}

/// Renders the updated document and copies it to `clipboard`.
///
/// Returns the copied text.
///
/// # Errors
///
/// Fails when rendering fails or the clipboard rejects the text.
pub fn copy_to_clipboard(
    session: &EditorSession,
    options: SerializeOptions,
    clipboard: &mut impl ClipboardSink,
) -> Result<String> {
    let text = render(session, options)?;
    clipboard.set_text(&text)?;

    tracing::info!(bytes = text.len(), "copied updated template to clipboard");
    Ok(text)
}

/// Renders the updated document into `path`.
///
/// # Errors
///
/// Fails when rendering fails or the file cannot be written.
pub fn write_to_file(session: &EditorSession, options: SerializeOptions, path: &Path) -> Result<()> {
    let text = render(session, options)?;

    let temp_path = path.with_extension("export.tmp");
    fs::write(&temp_path, &text)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    tracing::info!(path = %path.display(), bytes = text.len(), "wrote updated template");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingClipboard {
        text: Option<String>,
        fail: bool,
    }

    impl ClipboardSink for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                anyhow::bail!("clipboard unavailable");
            }
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    fn session() -> EditorSession {
        let mut session = EditorSession::default();
        session
            .load_document("head\n{% schema %}{\"settings\":[]}{% endschema %}\ntail")
            .unwrap();
        session
    }

    #[test]
    fn test_copy_hands_text_to_clipboard() {
        let mut clipboard = RecordingClipboard::default();
        let text = copy_to_clipboard(&session(), SerializeOptions::default(), &mut clipboard).unwrap();
        assert_eq!(clipboard.text.as_deref(), Some(text.as_str()));
        assert!(text.starts_with("head\n{% schema %}\n"));
    }

    #[test]
    fn test_clipboard_failure_leaves_session() {
        let session = session();
        let before = session.clone();
        let mut clipboard = RecordingClipboard {
            fail: true,
            ..RecordingClipboard::default()
        };
        assert!(copy_to_clipboard(&session, SerializeOptions::default(), &mut clipboard).is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn test_render_without_block() {
        let session = EditorSession::default();
        let err = render(&session, SerializeOptions::default()).unwrap_err();
        assert!(err.to_string().contains("no schema block"));
    }

    #[test]
    fn test_write_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("section.liquid");
        write_to_file(&session(), SerializeOptions::default(), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.ends_with("{% endschema %}\ntail"));
    }
}
