use alloc::sync::Arc;

use crate::presenter::AnchorPresenter;

/// A callback fired after every applied placement change.
///
/// Re-applying an identical placement does not notify, so hosts can mirror the
/// callback straight into DOM writes.
pub type OnChangeCallback = Arc<dyn Fn(&AnchorPresenter) + Send + Sync>;

/// Configuration for [`crate::AnchorPresenter`].
///
/// The delays are calibration values, not contracts: the settle delay is the
/// interval after which the keyboard slide-in animation is assumed complete,
/// and the restore delays debounce the gesture-hide release. Confirm against
/// real-device behavior before changing them.
#[derive(Clone)]
pub struct AnchorOptions {
    /// Enables/disables the presenter. When disabled, every event entry point
    /// is a no-op and the placement stays at rest.
    pub enabled: bool,

    /// Interval after focus-in before the keyboard counts as settled.
    pub settle_delay_ms: u64,

    /// Restore delay after a finger lifts.
    pub touch_restore_delay_ms: u64,

    /// Restore delay after the last scroll event (when no pointer is down).
    pub scroll_restore_delay_ms: u64,

    /// Optional callback fired when the applied placement changes.
    pub on_change: Option<OnChangeCallback>,
}

impl AnchorOptions {
    pub fn new() -> Self {
        Self {
            enabled: true,
            settle_delay_ms: 500,
            touch_restore_delay_ms: 100,
            scroll_restore_delay_ms: 200,
            on_change: None,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_settle_delay_ms(mut self, settle_delay_ms: u64) -> Self {
        self.settle_delay_ms = settle_delay_ms;
        self
    }

    pub fn with_touch_restore_delay_ms(mut self, touch_restore_delay_ms: u64) -> Self {
        self.touch_restore_delay_ms = touch_restore_delay_ms;
        self
    }

    pub fn with_scroll_restore_delay_ms(mut self, scroll_restore_delay_ms: u64) -> Self {
        self.scroll_restore_delay_ms = scroll_restore_delay_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&AnchorPresenter) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for AnchorOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for AnchorOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnchorOptions")
            .field("enabled", &self.enabled)
            .field("settle_delay_ms", &self.settle_delay_ms)
            .field("touch_restore_delay_ms", &self.touch_restore_delay_ms)
            .field("scroll_restore_delay_ms", &self.scroll_restore_delay_ms)
            .finish_non_exhaustive()
    }
}
