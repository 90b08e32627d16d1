//! Full-viewport frame embedding and document layout contracts.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

/// Callback invoked when an embedded frame reports a load failure.
pub type FrameErrorHandler = Box<dyn FnOnce()>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Frame element to inject over the whole viewport.
pub struct FrameRequest {
    /// DOM id assigned to the frame element.
    pub frame_id: String,
    /// Navigation target of the frame.
    pub src: String,
}

/// Host service for the page-level DOM mutations used by frame presentation.
pub trait FrameService {
    /// Shows or hides the element with the given id.
    fn set_element_visible(&self, element_id: &str, visible: bool) -> Result<(), String>;

    /// Appends a borderless frame covering the full viewport.
    ///
    /// `on_error` runs at most once, if the host observes a frame load failure. Load failures are
    /// best-effort: hosts are not required to detect them.
    fn embed_full_viewport(
        &self,
        request: &FrameRequest,
        on_error: FrameErrorHandler,
    ) -> Result<(), String>;

    /// Removes the element with the given id. A missing element is not an error.
    fn remove_element(&self, element_id: &str) -> Result<(), String>;

    /// Disables scrolling on both the document body and its root element.
    fn lock_document_scroll(&self) -> Result<(), String>;

    /// Restores scrolling disabled by [`FrameService::lock_document_scroll`].
    fn unlock_document_scroll(&self) -> Result<(), String>;
}

#[derive(Default)]
struct FrameLog {
    frames: Vec<FrameRequest>,
    error_handlers: Vec<Option<FrameErrorHandler>>,
    visibility: BTreeMap<String, bool>,
    scroll_locked: bool,
}

#[derive(Clone, Default)]
/// In-memory frame service that records DOM mutations for assertions.
pub struct MemoryFrameService {
    inner: Rc<RefCell<FrameLog>>,
}

impl std::fmt::Debug for MemoryFrameService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log = self.inner.borrow();
        f.debug_struct("MemoryFrameService")
            .field("frames", &log.frames)
            .field("visibility", &log.visibility)
            .field("scroll_locked", &log.scroll_locked)
            .finish()
    }
}

impl MemoryFrameService {
    /// Returns every frame currently embedded.
    pub fn frames(&self) -> Vec<FrameRequest> {
        self.inner.borrow().frames.clone()
    }

    /// Returns the last visibility set for `element_id`, if it was ever changed.
    pub fn element_visible(&self, element_id: &str) -> Option<bool> {
        self.inner.borrow().visibility.get(element_id).copied()
    }

    /// Returns whether document scrolling has been disabled.
    pub fn scroll_locked(&self) -> bool {
        self.inner.borrow().scroll_locked
    }

    /// Simulates a load failure on the frame at `index`, running its error handler once.
    ///
    /// Returns `false` when there is no such frame or its handler already ran.
    pub fn fail_frame(&self, index: usize) -> bool {
        let handler = self
            .inner
            .borrow_mut()
            .error_handlers
            .get_mut(index)
            .and_then(Option::take);
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl FrameService for MemoryFrameService {
    fn set_element_visible(&self, element_id: &str, visible: bool) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .visibility
            .insert(element_id.to_string(), visible);
        Ok(())
    }

    fn embed_full_viewport(
        &self,
        request: &FrameRequest,
        on_error: FrameErrorHandler,
    ) -> Result<(), String> {
        let mut log = self.inner.borrow_mut();
        log.frames.push(request.clone());
        log.error_handlers.push(Some(on_error));
        Ok(())
    }

    fn remove_element(&self, element_id: &str) -> Result<(), String> {
        let mut log = self.inner.borrow_mut();
        while let Some(index) = log.frames.iter().position(|f| f.frame_id == element_id) {
            log.frames.remove(index);
            log.error_handlers.remove(index);
        }
        Ok(())
    }

    fn lock_document_scroll(&self) -> Result<(), String> {
        self.inner.borrow_mut().scroll_locked = true;
        Ok(())
    }

    fn unlock_document_scroll(&self) -> Result<(), String> {
        self.inner.borrow_mut().scroll_locked = false;
        Ok(())
    }
}
