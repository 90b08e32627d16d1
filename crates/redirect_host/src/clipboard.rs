//! Clipboard host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ClipboardService`].
pub type ClipboardFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for writing text to the system clipboard.
pub trait ClipboardService {
    /// Writes `text` to the clipboard.
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Default)]
/// In-memory clipboard that keeps every written value.
pub struct MemoryClipboardService {
    writes: Rc<RefCell<Vec<String>>>,
    denied: bool,
}

impl MemoryClipboardService {
    /// Creates a clipboard that rejects every write, like a browser without clipboard permission.
    pub fn denied() -> Self {
        Self {
            writes: Rc::default(),
            denied: true,
        }
    }

    /// Returns the most recently written value.
    pub fn contents(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }

    /// Returns how many writes succeeded.
    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }
}

impl ClipboardService for MemoryClipboardService {
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if self.denied {
                return Err("clipboard write denied".to_string());
            }
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_clipboard_keeps_last_write() {
        let clipboard = MemoryClipboardService::default();
        let service: &dyn ClipboardService = &clipboard;
        block_on(service.write_text("first")).expect("write");
        block_on(service.write_text("second")).expect("write");
        assert_eq!(clipboard.contents().as_deref(), Some("second"));
        assert_eq!(clipboard.write_count(), 2);
    }

    #[test]
    fn denied_clipboard_rejects_writes() {
        let clipboard = MemoryClipboardService::denied();
        let service: &dyn ClipboardService = &clipboard;
        assert!(block_on(service.write_text("x")).is_err());
        assert_eq!(clipboard.contents(), None);
    }
}
