use crate::timer::Debounce;
use crate::{FocusPhase, KeyboardState};

/// Tracks whether the keyboard is logically open and whether its slide-in
/// animation has settled.
///
/// Browsers report focus-in before the keyboard animation completes; treating
/// the keyboard as settled too early makes the gesture-fade logic misfire
/// during the slide-in. The machine therefore holds an `Opening` phase for
/// `settle_delay_ms` before it reports `settled`.
///
/// Driven entirely by the owner: focus events plus a `tick(now_ms)` that
/// fires the settle deadline. It holds no timers of its own beyond a
/// [`Debounce`] slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusMachine {
    phase: FocusPhase,
    state: KeyboardState,
    settle: Debounce,
    settle_delay_ms: u64,
}

impl FocusMachine {
    pub fn new(settle_delay_ms: u64) -> Self {
        Self {
            phase: FocusPhase::Idle,
            state: KeyboardState::default(),
            settle: Debounce::new(),
            settle_delay_ms,
        }
    }

    pub fn phase(&self) -> FocusPhase {
        self.phase
    }

    pub fn state(&self) -> KeyboardState {
        self.state
    }

    pub fn visible(&self) -> bool {
        self.state.visible
    }

    pub fn settled(&self) -> bool {
        self.state.settled
    }

    pub fn has_preexisting_scroll(&self) -> bool {
        self.state.has_preexisting_scroll
    }

    pub fn set_settle_delay_ms(&mut self, settle_delay_ms: u64) {
        self.settle_delay_ms = settle_delay_ms;
    }

    /// A focus-in signal: the keyboard is (likely) opening.
    ///
    /// `has_document_scroll` is the `scrollHeight > innerHeight` predicate
    /// evaluated on the same tick as the event. It is captured only on the
    /// `Idle → Opening` transition and held fixed for the whole session.
    pub fn on_focus_in(&mut self, has_document_scroll: bool, now_ms: u64) {
        match self.phase {
            FocusPhase::Idle => {
                self.phase = FocusPhase::Opening;
                self.state.visible = true;
                self.state.settled = false;
                self.state.has_preexisting_scroll = has_document_scroll;
                self.settle.schedule(now_ms, self.settle_delay_ms);
                adebug!(
                    has_document_scroll,
                    settle_delay_ms = self.settle_delay_ms,
                    "focus: opening"
                );
            }
            FocusPhase::Opening => {
                // Rapid refocus across fields: restart the settle deadline,
                // keep the session's scroll snapshot.
                self.settle.schedule(now_ms, self.settle_delay_ms);
                atrace!("focus: re-trigger while opening");
            }
            FocusPhase::Settled => {
                // Keyboard already up; nothing to restart.
            }
        }
    }

    /// A focus-out signal: the keyboard is closing.
    pub fn on_focus_out(&mut self, _now_ms: u64) {
        self.phase = FocusPhase::Idle;
        self.state.visible = false;
        self.state.settled = false;
        self.settle.cancel();
        adebug!("focus: idle");
    }

    /// Fires the settle deadline. Returns `true` on the tick that transitions
    /// `Opening → Settled`.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.phase == FocusPhase::Opening && self.settle.fire(now_ms) {
            self.phase = FocusPhase::Settled;
            self.state.settled = true;
            adebug!("focus: settled");
            return true;
        }
        false
    }

    /// Returns to the initial state and cancels the settle deadline.
    pub fn reset(&mut self) {
        self.phase = FocusPhase::Idle;
        self.state = KeyboardState::default();
        self.settle.cancel();
    }
}
