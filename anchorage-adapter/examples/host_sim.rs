use std::cell::Cell;
use std::rc::Rc;

use anchorage::{AnchorOptions, AnchorPlacement, TouchTarget, ViewportSnapshot};
use anchorage_adapter::{AnchorSurface, Controller, ViewportProbe};

/// A simulated device viewport; the script moves the keyboard height.
#[derive(Clone, Default)]
struct SimViewport {
    keyboard_height: Rc<Cell<f64>>,
}

impl ViewportProbe for SimViewport {
    fn snapshot(&self) -> Option<ViewportSnapshot> {
        Some(ViewportSnapshot {
            inner_height: 800.0,
            document_client_height: 800.0,
            document_scroll_height: 2000.0,
            scroll_y: 0.0,
            viewport_height: 800.0 - self.keyboard_height.get(),
            viewport_offset_top: 0.0,
        })
    }
}

/// Stands in for the DOM write: one transform + one visibility class.
struct PrintSurface;

impl AnchorSurface for PrintSurface {
    fn apply(&mut self, placement: AnchorPlacement) {
        println!(
            "  surface <- translateY(-{}px) hidden={}",
            placement.offset, placement.hidden
        );
    }
}

fn main() {
    // Example: a host event loop in miniature. A real binding forwards the
    // same calls from its visualViewport/focus/touch/scroll listeners, which
    // it registers on activate() and releases on deactivate().
    let probe = SimViewport::default();
    let keyboard = Rc::clone(&probe.keyboard_height);
    let mut c = Controller::new(AnchorOptions::new(), probe, PrintSurface);

    println!("activate");
    c.activate(0);

    println!("focus-in, keyboard slides to 300px");
    keyboard.set(120.0);
    c.on_focus_in(1000);
    for (now_ms, kb) in [(1016u64, 210.0), (1032, 280.0), (1048, 300.0)] {
        keyboard.set(kb);
        c.on_viewport_event(now_ms);
    }

    println!("settle");
    c.tick(1500);

    println!("scroll burst");
    for now_ms in [1600u64, 1650, 1700] {
        c.on_document_scroll(now_ms);
        c.tick(now_ms + 25);
    }
    println!("pause");
    c.tick(1900);

    println!("touch on the anchor");
    c.on_touch_start(TouchTarget::Anchor, 2000);
    c.on_touch_end(2080);
    c.tick(2200);

    println!("focus-out + frame");
    c.on_focus_out(2500);
    keyboard.set(0.0);
    c.on_viewport_event(2500);
    c.on_frame(2516);

    println!("deactivate");
    c.deactivate();
}
