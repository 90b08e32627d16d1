//! Delayed navigation-replacement contracts and adapters.

use std::{cell::RefCell, rc::Rc};

/// Host service for replacing the current history entry with another URL.
pub trait NavigationService {
    /// Schedules a navigation replacement to `url` once `delay_ms` milliseconds have elapsed.
    ///
    /// The scheduled navigation cannot be cancelled.
    fn replace_after(&self, url: &str, delay_ms: u32) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingReplace {
    url: String,
    remaining_ms: u32,
}

#[derive(Debug, Default)]
struct NavigationLog {
    pending: Vec<PendingReplace>,
    replaced: Vec<String>,
    scheduled_delays: Vec<u32>,
}

#[derive(Debug, Clone, Default)]
/// In-memory navigation service driven by a manual clock.
///
/// Scheduled replacements only complete when [`MemoryNavigationService::advance_ms`] moves the
/// clock past their delay, mirroring a browser timer that never fires early.
pub struct MemoryNavigationService {
    inner: Rc<RefCell<NavigationLog>>,
}

impl MemoryNavigationService {
    /// Advances the manual clock and completes every replacement whose delay has elapsed.
    pub fn advance_ms(&self, elapsed_ms: u32) {
        let mut log = self.inner.borrow_mut();
        let mut still_pending = Vec::new();
        let mut fired = Vec::new();
        for mut pending in log.pending.drain(..) {
            if pending.remaining_ms <= elapsed_ms {
                fired.push(pending.url);
            } else {
                pending.remaining_ms -= elapsed_ms;
                still_pending.push(pending);
            }
        }
        log.pending = still_pending;
        log.replaced.extend(fired);
    }

    /// Returns the URLs navigated to so far, in completion order.
    pub fn replaced_urls(&self) -> Vec<String> {
        self.inner.borrow().replaced.clone()
    }

    /// Returns the delays of every replacement scheduled so far.
    pub fn scheduled_delays(&self) -> Vec<u32> {
        self.inner.borrow().scheduled_delays.clone()
    }

    /// Returns the number of replacements still waiting on the clock.
    pub fn pending_count(&self) -> usize {
        self.inner.borrow().pending.len()
    }
}

impl NavigationService for MemoryNavigationService {
    fn replace_after(&self, url: &str, delay_ms: u32) -> Result<(), String> {
        let mut log = self.inner.borrow_mut();
        log.scheduled_delays.push(delay_ms);
        log.pending.push(PendingReplace {
            url: url.to_string(),
            remaining_ms: delay_ms,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_navigation_waits_for_the_full_delay() {
        let nav = MemoryNavigationService::default();
        nav.replace_after("https://example.com/", 100).expect("schedule");

        nav.advance_ms(99);
        assert!(nav.replaced_urls().is_empty());
        assert_eq!(nav.pending_count(), 1);

        nav.advance_ms(1);
        assert_eq!(nav.replaced_urls(), vec!["https://example.com/".to_string()]);
        assert_eq!(nav.pending_count(), 0);
    }

    #[test]
    fn zero_delay_still_needs_a_clock_tick() {
        let nav = MemoryNavigationService::default();
        nav.replace_after("https://example.com/", 0).expect("schedule");
        assert!(nav.replaced_urls().is_empty());
        nav.advance_ms(0);
        assert_eq!(nav.replaced_urls().len(), 1);
        assert_eq!(nav.scheduled_delays(), vec![0]);
    }
}
