use alloc::sync::Arc;

use crate::focus::FocusMachine;
use crate::geometry;
use crate::gesture::GestureMachine;
use crate::{
    AnchorOptions, AnchorPlacement, FocusPhase, GestureState, KeyboardState, TouchTarget,
    ViewportSnapshot,
};

/// Combines the geometry tracker, the focus machine, and the gesture machine
/// into the anchored element's final placement.
///
/// This type is intentionally UI-agnostic:
/// - It holds no UI objects and never reads a clock; the host passes events
///   plus a monotonic `now_ms` in.
/// - The output is a single [`AnchorPlacement`] value; `on_change` fires once
///   per change, never for a re-applied identical placement.
///
/// Event routing expected from the host (all listeners registered
/// non-blocking/passive, held only while the presenter's owner is active):
/// - visual viewport resize + scroll → [`Self::on_viewport_change`]
/// - window focusin / focusout → [`Self::on_focus_in`] / [`Self::on_focus_out`]
/// - window touchstart / touchend / scroll → [`Self::on_touch_start`] /
///   [`Self::on_touch_end`] / [`Self::on_document_scroll`]
/// - animation frame → [`Self::on_frame`], strictly after any same-tick
///   resize handling
/// - a frame/timer tick → [`Self::tick`]
///
/// For host seams and the activation lifecycle, see the `anchorage-adapter`
/// crate.
#[derive(Clone, Debug)]
pub struct AnchorPresenter {
    options: AnchorOptions,
    focus: FocusMachine,
    gesture: GestureMachine,
    placement: AnchorPlacement,
    pending_reset: bool,
}

impl AnchorPresenter {
    pub fn new(options: AnchorOptions) -> Self {
        adebug!(
            enabled = options.enabled,
            settle_delay_ms = options.settle_delay_ms,
            "AnchorPresenter::new"
        );
        Self {
            focus: FocusMachine::new(options.settle_delay_ms),
            gesture: GestureMachine::new(
                options.touch_restore_delay_ms,
                options.scroll_restore_delay_ms,
            ),
            placement: AnchorPlacement::resting(),
            pending_reset: false,
            options,
        }
    }

    pub fn options(&self) -> &AnchorOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: AnchorOptions) {
        let was_enabled = self.options.enabled;
        self.options = options;
        self.focus.set_settle_delay_ms(self.options.settle_delay_ms);
        self.gesture.set_restore_delays_ms(
            self.options.touch_restore_delay_ms,
            self.options.scroll_restore_delay_ms,
        );
        if self.options.enabled != was_enabled {
            self.reset_state();
            self.apply(AnchorPlacement::resting());
        }
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut AnchorOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&AnchorPresenter) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    /// Enables/disables the presenter. Disabling cancels every pending
    /// deadline, clears both machines, and returns the placement to rest;
    /// while disabled, every event entry point is a no-op.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        self.reset_state();
        self.apply(AnchorPlacement::resting());
    }

    /// The currently applied placement.
    pub fn placement(&self) -> AnchorPlacement {
        self.placement
    }

    pub fn keyboard_state(&self) -> KeyboardState {
        self.focus.state()
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gesture.state()
    }

    pub fn focus_phase(&self) -> FocusPhase {
        self.focus.phase()
    }

    /// A visual viewport resize or scroll event.
    ///
    /// `snapshot` is `None` when the host has no visual-viewport concept; the
    /// presenter then degrades to a permanent offset of 0 (graceful feature
    /// absence, not failure). While the keyboard is not open the event is
    /// ignored entirely: the pending frame reset owns the return to 0, so a
    /// same-tick resize can never re-apply a stale offset.
    pub fn on_viewport_change(&mut self, snapshot: Option<ViewportSnapshot>, _now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        let Some(snapshot) = snapshot else {
            atrace!("viewport change without visual viewport");
            return;
        };
        if !self.focus.visible() {
            return;
        }

        let offset = geometry::compute_offset(snapshot, self.focus.has_preexisting_scroll());
        atrace!(offset, "viewport change");
        self.apply(AnchorPlacement {
            offset,
            hidden: self.gesture.is_hidden(),
        });
    }

    /// A focusin event. Captures the pre-keyboard scroll predicate, marks the
    /// keyboard visible, and re-measures immediately.
    pub fn on_focus_in(&mut self, snapshot: Option<ViewportSnapshot>, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        let has_document_scroll = snapshot.is_some_and(|s| s.has_document_scroll());
        // A new session owns the offset again; a reset still pending from the
        // previous focus-out must not clobber the fresh measurement.
        self.pending_reset = false;
        self.focus.on_focus_in(has_document_scroll, now_ms);
        self.on_viewport_change(snapshot, now_ms);
    }

    /// A focusout event. The offset reset is deferred to the next animation
    /// frame ([`Self::on_frame`]); the gesture-hide flag is released
    /// synchronously, since it must never survive a keyboard close.
    pub fn on_focus_out(&mut self, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        self.focus.on_focus_out(now_ms);
        self.gesture.reset();
        self.pending_reset = true;
        self.apply(AnchorPlacement {
            offset: self.placement.offset,
            hidden: false,
        });
    }

    /// The next-animation-frame callback. Consumes the pending focus-out
    /// reset, applying offset 0 strictly after any resize/scroll recomputation
    /// queued in the same tick.
    pub fn on_frame(&mut self, _now_ms: u64) {
        if !self.options.enabled || !self.pending_reset {
            return;
        }
        self.pending_reset = false;
        atrace!("frame reset");
        self.apply(AnchorPlacement {
            offset: 0.0,
            hidden: self.gesture.is_hidden(),
        });
    }

    /// A touchstart event, with the target classified by the host.
    pub fn on_touch_start(&mut self, target: TouchTarget, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        self.gesture
            .on_touch_start(target, self.focus.settled(), now_ms);
        self.sync_hidden();
    }

    /// A touchend event.
    pub fn on_touch_end(&mut self, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        self.gesture.on_touch_end(self.focus.settled(), now_ms);
        self.sync_hidden();
    }

    /// A document scroll event. This drives only the gesture fade; geometry
    /// recomputation is owned by the visual viewport's own scroll signal.
    pub fn on_document_scroll(&mut self, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        self.gesture.on_scroll(self.focus.settled(), now_ms);
        self.sync_hidden();
    }

    /// Advances both machines' deadlines. Hosts call this from their frame
    /// loop or timer; it is cheap when nothing is scheduled.
    pub fn tick(&mut self, now_ms: u64) {
        if !self.options.enabled {
            return;
        }
        self.focus.tick(now_ms);
        if self.gesture.tick(now_ms) {
            self.sync_hidden();
        }
    }

    fn sync_hidden(&mut self) {
        self.apply(AnchorPlacement {
            offset: self.placement.offset,
            hidden: self.gesture.is_hidden(),
        });
    }

    fn apply(&mut self, placement: AnchorPlacement) {
        if self.placement == placement {
            return;
        }
        self.placement = placement;
        self.notify();
    }

    fn reset_state(&mut self) {
        self.focus.reset();
        self.gesture.reset();
        self.pending_reset = false;
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }
}
