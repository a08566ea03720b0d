use crate::timer::Debounce;
use crate::{GestureState, TouchTarget};

/// Decides transient hide/show of the anchored element while the user scrolls
/// or drags to peek at content behind the keyboard.
///
/// Every entry point takes the focus machine's `settled` flag: gestures are
/// ignored until the keyboard animation is assumed complete, so the element
/// cannot flicker during the slide-in. A single [`Debounce`] slot holds the
/// restore deadline; any new qualifying event replaces it, so continuous
/// interaction keeps the element hidden without flicker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureMachine {
    state: GestureState,
    restore: Debounce,
    touch_restore_delay_ms: u64,
    scroll_restore_delay_ms: u64,
}

impl GestureMachine {
    pub fn new(touch_restore_delay_ms: u64, scroll_restore_delay_ms: u64) -> Self {
        Self {
            state: GestureState::default(),
            restore: Debounce::new(),
            touch_restore_delay_ms,
            scroll_restore_delay_ms,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_hidden(&self) -> bool {
        self.state.is_hidden
    }

    pub fn is_pointer_active(&self) -> bool {
        self.state.is_pointer_active
    }

    pub fn set_restore_delays_ms(&mut self, touch_ms: u64, scroll_ms: u64) {
        self.touch_restore_delay_ms = touch_ms;
        self.scroll_restore_delay_ms = scroll_ms;
    }

    /// A finger went down. The pointer flag is tracked regardless of settle
    /// state (a touch that starts before settling can still end after it).
    pub fn on_touch_start(&mut self, target: TouchTarget, settled: bool, _now_ms: u64) {
        self.state.is_pointer_active = true;

        if !settled {
            return;
        }
        self.restore.cancel();

        // Taps on the anchor itself or on an input control are the user
        // reaching for the anchor / the keyboard, not peeking behind it.
        if target.is_exempt() {
            return;
        }

        self.state.is_hidden = true;
        atrace!(?target, "gesture: hide on touch");
    }

    /// The finger lifted; restore after a short delay unless superseded.
    pub fn on_touch_end(&mut self, settled: bool, now_ms: u64) {
        self.state.is_pointer_active = false;

        if !settled {
            return;
        }
        self.restore.schedule(now_ms, self.touch_restore_delay_ms);
    }

    /// A scroll event. While a pointer is down the restore waits for
    /// touch-end instead of a deadline.
    pub fn on_scroll(&mut self, settled: bool, now_ms: u64) {
        if !settled {
            return;
        }
        self.restore.cancel();
        self.state.is_hidden = true;

        if self.state.is_pointer_active {
            return;
        }
        self.restore.schedule(now_ms, self.scroll_restore_delay_ms);
    }

    /// Fires the restore deadline. Returns `true` on the tick that flips
    /// `is_hidden` back to `false`.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.restore.fire(now_ms) {
            self.state.is_hidden = false;
            atrace!("gesture: restore");
            return true;
        }
        false
    }

    /// Clears all gesture state and cancels the restore deadline. Invoked by
    /// the presenter on focus-out and on disable: `is_hidden` must never
    /// survive a keyboard close.
    pub fn reset(&mut self) {
        self.state = GestureState::default();
        self.restore.cancel();
    }
}
