//! Copy-to-clipboard support
//!
//! A failed copy is logged and reported to the caller as `false`; it never
//! aborts the run.

use crate::error::Result;

/// Destination for copied text
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text.to_owned())?;
        Ok(())
    }
}

/// Copy `text` into `sink`, returning whether it succeeded
pub fn copy_password<C: ClipboardSink + ?Sized>(sink: &mut C, text: &str) -> bool {
    match sink.set_text(text) {
        Ok(()) => {
            tracing::debug!(chars = text.chars().count(), "Password copied to clipboard");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "Copy failed");
            false
        }
    }
}

/// Copy `text` to the system clipboard, returning whether it succeeded
pub fn copy_to_system_clipboard(text: &str) -> bool {
    match SystemClipboard::new() {
        Ok(mut clipboard) => copy_password(&mut clipboard, text),
        Err(e) => {
            tracing::warn!(error = %e, "Clipboard unavailable");
            false
        }
    }
}
