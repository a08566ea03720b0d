/// A single cancellable delay slot.
///
/// This is the one debounce primitive used for every deferred concern (the
/// settle delay, the gesture-restore delay). Scheduling replaces any pending
/// deadline, so only the most recently scheduled instance is ever honored;
/// [`Debounce::fire`] returns `true` exactly once per schedule, when `now_ms`
/// reaches the deadline.
///
/// Time never comes from the environment: the owner passes a monotonic
/// `now_ms` in, which keeps every timeline deterministic under test.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Debounce {
    deadline_ms: Option<u64>,
}

impl Debounce {
    pub const fn new() -> Self {
        Self { deadline_ms: None }
    }

    /// Schedules (or replaces) the deadline at `now_ms + delay_ms`.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(delay_ms));
    }

    /// Clears any pending deadline. A cleared slot can never fire.
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_scheduled(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Returns `true` and clears the slot when the deadline has been reached.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
