use crate::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use anchorage::{AnchorOptions, AnchorPlacement, TouchTarget, ViewportSnapshot};

/// A probe whose snapshot the test can swap mid-scenario.
#[derive(Clone, Debug, Default)]
struct ScriptedViewport(Rc<Cell<Option<ViewportSnapshot>>>);

impl ScriptedViewport {
    fn set(&self, snapshot: Option<ViewportSnapshot>) {
        self.0.set(snapshot);
    }
}

impl ViewportProbe for ScriptedViewport {
    fn snapshot(&self) -> Option<ViewportSnapshot> {
        self.0.get()
    }
}

/// Records every placement write so tests can assert write counts.
#[derive(Clone, Debug, Default)]
struct RecordingSurface(Rc<RefCell<Vec<AnchorPlacement>>>);

impl RecordingSurface {
    fn writes(&self) -> Vec<AnchorPlacement> {
        self.0.borrow().clone()
    }

    fn last(&self) -> Option<AnchorPlacement> {
        self.0.borrow().last().copied()
    }
}

impl AnchorSurface for RecordingSurface {
    fn apply(&mut self, placement: AnchorPlacement) {
        self.0.borrow_mut().push(placement);
    }
}

fn device_snapshot(keyboard_height: f64) -> ViewportSnapshot {
    ViewportSnapshot {
        inner_height: 800.0,
        document_client_height: 800.0,
        document_scroll_height: 2000.0,
        scroll_y: 0.0,
        viewport_height: 800.0 - keyboard_height,
        viewport_offset_top: 0.0,
    }
}

fn scripted_controller(
    keyboard_height: f64,
) -> (
    Controller<ScriptedViewport, RecordingSurface>,
    ScriptedViewport,
    RecordingSurface,
) {
    let probe = ScriptedViewport::default();
    probe.set(Some(device_snapshot(keyboard_height)));
    let surface = RecordingSurface::default();
    let c = Controller::new(AnchorOptions::new(), probe.clone(), surface.clone());
    (c, probe, surface)
}

#[test]
fn activation_writes_the_surface_baseline() {
    let (mut c, _probe, surface) = scripted_controller(0.0);
    assert!(!c.is_active());
    assert!(surface.writes().is_empty());

    c.activate(0);
    assert!(c.is_active());
    assert_eq!(surface.writes(), [AnchorPlacement::resting()]);

    // Re-activating an active controller is a no-op.
    c.activate(16);
    assert_eq!(surface.writes().len(), 1);
}

#[test]
fn full_keyboard_session_drives_the_surface() {
    let (mut c, probe, surface) = scripted_controller(0.0);
    c.activate(0);

    // Keyboard opens; the viewport shrinks over a few frames.
    probe.set(Some(device_snapshot(120.0)));
    c.on_focus_in(1000);
    probe.set(Some(device_snapshot(300.0)));
    c.on_viewport_event(1050);
    assert_eq!(c.placement().offset, 300.0);

    // Settles after the delay, then a scroll hides the anchor.
    c.tick(1500);
    c.on_document_scroll(1600);
    assert_eq!(surface.last(), Some(AnchorPlacement {
        offset: 300.0,
        hidden: true,
    }));

    // Pause long enough and it comes back.
    c.tick(1800);
    assert_eq!(surface.last(), Some(AnchorPlacement {
        offset: 300.0,
        hidden: false,
    }));

    // Close: hidden released synchronously, offset zeroed on the frame.
    c.on_document_scroll(1900);
    c.on_focus_out(1950);
    assert!(!c.placement().hidden);
    assert_eq!(c.placement().offset, 300.0);
    c.on_frame(1966);
    assert_eq!(surface.last(), Some(AnchorPlacement::resting()));
}

#[test]
fn identical_viewport_events_write_the_surface_once() {
    let (mut c, _probe, surface) = scripted_controller(300.0);
    c.activate(0);
    c.on_focus_in(100);
    let writes = surface.writes().len();

    c.on_viewport_event(116);
    c.on_viewport_event(132);
    c.on_viewport_event(148);
    assert_eq!(surface.writes().len(), writes);
}

#[test]
fn deactivation_leaves_zero_residual_behavior() {
    let (mut c, probe, surface) = scripted_controller(300.0);
    c.activate(0);
    c.on_focus_in(100);
    c.tick(600);
    // A restore deadline is pending when we tear down.
    c.on_document_scroll(700);

    c.deactivate();
    let writes = surface.writes().len();

    // Synthetic events after teardown must not mutate anything.
    c.on_focus_in(800);
    c.on_viewport_event(810);
    c.on_touch_start(TouchTarget::Content, 820);
    c.on_touch_end(830);
    c.on_document_scroll(840);
    c.on_frame(850);
    c.tick(u64::MAX);
    probe.set(Some(device_snapshot(500.0)));
    c.on_viewport_event(860);

    assert_eq!(surface.writes().len(), writes);
    assert_eq!(c.placement(), AnchorPlacement::resting());
}

#[test]
fn controller_round_trips_cleanly() {
    let (mut c, _probe, surface) = scripted_controller(300.0);
    c.activate(0);
    c.on_focus_in(100);
    c.deactivate();

    c.activate(2000);
    c.on_focus_in(2100);
    c.tick(2600);
    c.on_touch_start(TouchTarget::Content, 2700);
    assert_eq!(surface.last(), Some(AnchorPlacement {
        offset: 300.0,
        hidden: true,
    }));
}

#[test]
fn missing_visual_viewport_never_moves_the_anchor() {
    let probe = ScriptedViewport::default();
    let surface = RecordingSurface::default();
    let mut c = Controller::new(AnchorOptions::new(), probe, surface.clone());

    c.activate(0);
    c.on_focus_in(100);
    c.on_viewport_event(116);
    c.tick(600);
    c.on_focus_out(700);
    c.on_frame(716);

    // Only the activation baseline was ever written.
    assert_eq!(surface.writes(), [AnchorPlacement::resting()]);
}

// ---------------------------------------------------------------------------
// store
// ---------------------------------------------------------------------------

#[cfg(feature = "store")]
mod store {
    use crate::*;

    use std::string::String;

    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Draft {
        body: String,
        long_content: bool,
    }

    #[test]
    fn values_round_trip_as_json() {
        let mut store = JsonStore::new(MemoryStore::new());
        let draft = Draft {
            body: String::from("hello"),
            long_content: true,
        };

        assert!(store.set("draft", &draft));
        assert_eq!(store.get::<Draft>("draft"), Some(draft));
    }

    #[test]
    fn bool_toggle_round_trips() {
        // The shape the consumer pages use: one persisted flag per key.
        let mut store = JsonStore::new(MemoryStore::new());
        assert_eq!(store.get::<bool>("cta-long-content"), None);

        store.set("cta-long-content", &true);
        assert_eq!(store.get::<bool>("cta-long-content"), Some(true));

        store.set("cta-long-content", &false);
        assert_eq!(store.get::<bool>("cta-long-content"), Some(false));
    }

    #[test]
    fn absent_and_removed_keys_resolve_to_none() {
        let mut store = JsonStore::new(MemoryStore::new());
        assert_eq!(store.get::<bool>("missing"), None);

        store.set("k", &1u32);
        store.remove("k");
        assert_eq!(store.get::<u32>("k"), None);
        assert!(store.backend().is_empty());
    }

    #[test]
    fn malformed_stored_data_resolves_to_none() {
        let mut backend = MemoryStore::new();
        backend.write("broken", String::from("{not json"));
        let mut store = JsonStore::new(backend);
        assert_eq!(store.get::<Draft>("broken"), None);

        // A type mismatch against well-formed JSON degrades the same way.
        store.set("n", &7u32);
        assert_eq!(store.get::<Draft>("n"), None);
    }
}
