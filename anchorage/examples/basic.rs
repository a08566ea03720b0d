// Example: a scripted keyboard session driven straight through the presenter.
use anchorage::{AnchorOptions, AnchorPresenter, TouchTarget, ViewportSnapshot};

/// An 800px-tall device whose visual viewport has lost `keyboard_height` px.
fn snapshot(keyboard_height: f64) -> ViewportSnapshot {
    ViewportSnapshot {
        inner_height: 800.0,
        document_client_height: 800.0,
        document_scroll_height: 2000.0,
        scroll_y: 0.0,
        viewport_height: 800.0 - keyboard_height,
        viewport_offset_top: 0.0,
    }
}

fn main() {
    let mut p = AnchorPresenter::new(AnchorOptions::new());

    // The user taps an input; the keyboard slides in over a few frames.
    p.on_focus_in(Some(snapshot(120.0)), 0);
    for (now_ms, kb) in [(16u64, 210.0), (32, 280.0), (48, 300.0)] {
        p.on_viewport_change(Some(snapshot(kb)), now_ms);
        println!("t={now_ms} placement={:?}", p.placement());
    }

    // The settle delay elapses; a scroll now fades the anchor out.
    p.tick(500);
    p.on_document_scroll(600);
    println!("scrolling placement={:?}", p.placement());
    p.tick(800);
    println!("paused    placement={:?}", p.placement());

    // A tap on the anchor itself never hides it.
    p.on_touch_start(TouchTarget::Anchor, 900);
    println!("anchor tap placement={:?}", p.placement());

    // Keyboard closes: the offset resets on the next frame, not synchronously.
    p.on_focus_out(1000);
    println!("focus-out placement={:?}", p.placement());
    p.on_frame(1016);
    println!("frame     placement={:?}", p.placement());
}
