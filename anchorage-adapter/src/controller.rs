use anchorage::{AnchorOptions, AnchorPlacement, AnchorPresenter, TouchTarget};

use crate::{AnchorSurface, ViewportProbe};

/// A framework-neutral controller that wraps an [`AnchorPresenter`] and owns
/// the activation lifecycle.
///
/// The host registers its five event subscriptions (visual viewport resize,
/// visual viewport scroll, focusin, focusout, touchstart/touchend/scroll),
/// all non-blocking/passive, only while the controller is active, and
/// forwards each event here with a monotonic `now_ms`:
///
/// - `activate(now_ms)` / `deactivate()` bracket the subscriptions; after
///   `deactivate`, every entry point is a no-op and no timer can fire, so
///   releasing the listeners on any exit path leaves nothing behind.
/// - `on_viewport_event` for both visual-viewport signals.
/// - `on_frame(now_ms)` from the next animation frame after a focusout,
///   strictly after any same-tick resize handling.
/// - `tick(now_ms)` from a frame loop or timer to fire the settle and
///   gesture-restore deadlines.
///
/// Surface writes are idempotent: a placement equal to the last applied one
/// is never written again.
#[derive(Clone, Debug)]
pub struct Controller<P, S> {
    presenter: AnchorPresenter,
    probe: P,
    surface: S,
    active: bool,
}

impl<P: ViewportProbe, S: AnchorSurface> Controller<P, S> {
    pub fn new(options: AnchorOptions, probe: P, surface: S) -> Self {
        Self {
            presenter: AnchorPresenter::new(options.with_enabled(false)),
            probe,
            surface,
            active: false,
        }
    }

    pub fn presenter(&self) -> &AnchorPresenter {
        &self.presenter
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn into_parts(self) -> (AnchorPresenter, P, S) {
        (self.presenter, self.probe, self.surface)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enters the active state: takes the eager initial measurement and
    /// writes the starting placement to the surface. The host should register
    /// its event listeners once this returns.
    pub fn activate(&mut self, now_ms: u64) {
        if self.active {
            return;
        }
        self.active = true;
        self.presenter.set_enabled(true);
        atrace!(now_ms, "controller: activate");

        let snapshot = self.probe.snapshot();
        self.presenter.on_viewport_change(snapshot, now_ms);
        // Unconditional first write: establishes the surface baseline.
        self.surface.apply(self.presenter.placement());
    }

    /// Leaves the active state: cancels every pending deadline and mutes all
    /// entry points. The host must release its event listeners alongside.
    ///
    /// The surface is left as-is, matching listener teardown semantics: the
    /// element is about to disappear with its owner.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.presenter.set_enabled(false);
        atrace!("controller: deactivate");
    }

    /// A visual viewport resize or scroll event.
    pub fn on_viewport_event(&mut self, now_ms: u64) {
        if !self.active {
            return;
        }
        let snapshot = self.probe.snapshot();
        self.forward(|p| p.on_viewport_change(snapshot, now_ms));
    }

    /// A focusin event.
    pub fn on_focus_in(&mut self, now_ms: u64) {
        if !self.active {
            return;
        }
        let snapshot = self.probe.snapshot();
        self.forward(|p| p.on_focus_in(snapshot, now_ms));
    }

    /// A focusout event.
    pub fn on_focus_out(&mut self, now_ms: u64) {
        if !self.active {
            return;
        }
        self.forward(|p| p.on_focus_out(now_ms));
    }

    /// The next-animation-frame callback after a focusout.
    pub fn on_frame(&mut self, now_ms: u64) {
        if !self.active {
            return;
        }
        self.forward(|p| p.on_frame(now_ms));
    }

    /// A touchstart event, with the target classified by the host.
    pub fn on_touch_start(&mut self, target: TouchTarget, now_ms: u64) {
        if !self.active {
            return;
        }
        self.forward(|p| p.on_touch_start(target, now_ms));
    }

    /// A touchend event.
    pub fn on_touch_end(&mut self, now_ms: u64) {
        if !self.active {
            return;
        }
        self.forward(|p| p.on_touch_end(now_ms));
    }

    /// A document scroll event (drives the gesture fade only).
    pub fn on_document_scroll(&mut self, now_ms: u64) {
        if !self.active {
            return;
        }
        self.forward(|p| p.on_document_scroll(now_ms));
    }

    /// Advances the settle and gesture-restore deadlines.
    pub fn tick(&mut self, now_ms: u64) {
        if !self.active {
            return;
        }
        self.forward(|p| p.tick(now_ms));
    }

    /// The placement last computed by the presenter.
    pub fn placement(&self) -> AnchorPlacement {
        self.presenter.placement()
    }

    fn forward(&mut self, f: impl FnOnce(&mut AnchorPresenter)) {
        let before = self.presenter.placement();
        f(&mut self.presenter);
        let after = self.presenter.placement();
        if before != after {
            self.surface.apply(after);
        }
    }
}
