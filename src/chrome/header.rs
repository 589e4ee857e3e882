//! Scroll-driven visibility for the global header.
//!
//! Browsers report scroll positions with sub-pixel jitter, so the decision
//! uses hysteresis: hiding needs a confident downward movement well past the
//! header, while showing happens on much smaller upward intent or whenever
//! the view is back near the top.

use tracing::debug;

/// Scroll offset the view must be past before a downward scroll hides the header.
const HIDE_TRIGGER_SCROLL_TOP: f64 = 88.0;
/// Offset at or under which the header is always restored.
const SHOW_TRIGGER_SCROLL_TOP: f64 = 32.0;
/// Minimum downward movement between samples that hides the header.
const HIDE_DELTA: f64 = 10.0;
/// Minimum upward movement between samples that restores the header.
const SHOW_DELTA: f64 = 6.0;

/// Decides whether the header is hidden from a stream of scroll samples.
///
/// Pure state machine: no I/O, no locking. Callers running outside a
/// single-threaded event loop must serialize access themselves.
#[derive(Debug)]
pub struct HeaderVisibility {
    last_scroll_top: f64,
    hidden: bool,
}

impl HeaderVisibility {
    pub fn new() -> Self {
        Self {
            last_scroll_top: 0.0,
            hidden: false,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn last_scroll_top(&self) -> f64 {
        self.last_scroll_top
    }

    /// Feeds one scroll sample into the machine.
    ///
    /// `header_eligible` is owned by the caller (route and session rules
    /// live there); when false the header is forced visible. Non-finite
    /// offsets are clamped to 0 so a bad DOM measurement cannot wedge the
    /// header hidden.
    pub fn on_scroll(&mut self, raw_top: f64, header_eligible: bool) {
        let next_top = if raw_top.is_finite() {
            raw_top.max(0.0)
        } else {
            0.0
        };

        if !header_eligible {
            self.set_hidden(false);
            self.last_scroll_top = next_top;
            return;
        }

        if next_top <= SHOW_TRIGGER_SCROLL_TOP {
            self.set_hidden(false);
            self.last_scroll_top = next_top;
            return;
        }

        let delta = next_top - self.last_scroll_top;

        if !self.hidden && next_top >= HIDE_TRIGGER_SCROLL_TOP && delta >= HIDE_DELTA {
            self.set_hidden(true);
        } else if self.hidden && (next_top <= SHOW_TRIGGER_SCROLL_TOP || delta <= -SHOW_DELTA) {
            self.set_hidden(false);
        }

        self.last_scroll_top = next_top;
    }

    /// Forgets all scroll history. Must run whenever the consuming view is
    /// torn down or navigated away from, so a stale offset never influences
    /// the next view's first decision.
    pub fn reset(&mut self) {
        self.set_hidden(false);
        self.last_scroll_top = 0.0;
    }

    fn set_hidden(&mut self, hidden: bool) {
        if self.hidden != hidden {
            debug!("header {} at {:.1}", if hidden { "hidden" } else { "shown" }, self.last_scroll_top);
        }
        self.hidden = hidden;
    }
}

impl Default for HeaderVisibility {
    fn default() -> Self {
        Self::new()
    }
}
