use crate::ViewportSnapshot;

/// Derives the keyboard-induced anchor offset from raw viewport geometry.
///
/// Pure function of its inputs: the same snapshot always yields the same
/// offset, and the result is already clamped to `>= 0`. The caller decides
/// whether the value is meaningful (it must be ignored while the keyboard is
/// not open).
///
/// Two regimes, selected by `has_preexisting_scroll` (captured once per
/// keyboard session, see [`crate::KeyboardState`]):
///
/// - The document already had its own scrollbar before the keyboard opened.
///   The visual viewport keeps its vertical offset at the top and only its
///   height shrinks; `height_gap` (platform chrome collapse) is subtracted
///   once so it is not counted twice.
/// - The document started non-scrollable. The browser auto-scrolls the page
///   to keep the focused control visible, so the accumulated `scroll_y` is
///   added back to cancel that pan.
///
/// A negative intermediate value is a recoverable numeric artifact of chrome
/// collapse, not an error; non-finite input degrades to 0.
pub fn compute_offset(snapshot: ViewportSnapshot, has_preexisting_scroll: bool) -> f64 {
    let raw = if has_preexisting_scroll {
        snapshot.inner_height
            - (snapshot.viewport_height + snapshot.viewport_offset_top - snapshot.height_gap())
    } else {
        snapshot.inner_height
            - (snapshot.viewport_height + snapshot.viewport_offset_top)
            + snapshot.scroll_y
    };

    if !raw.is_finite() {
        awarn!(?snapshot, "compute_offset: non-finite geometry, degrading to 0");
        return 0.0;
    }

    raw.max(0.0)
}
