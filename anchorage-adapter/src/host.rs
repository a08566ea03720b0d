use anchorage::{AnchorPlacement, ViewportSnapshot};

/// Reads the host's viewport and document geometry at event time.
///
/// Implementations take the read synchronously inside the event handler they
/// are called from; the snapshot is immutable and recreated per measurement.
pub trait ViewportProbe {
    /// Returns `None` when the host does not expose a visual-viewport
    /// concept. The controller then degrades to a permanent offset of 0
    /// (graceful feature absence, not failure).
    fn snapshot(&self) -> Option<ViewportSnapshot>;
}

/// The single writer of presentation state for the anchored element.
///
/// Hosts apply `placement.offset` either as a vertical transform on the
/// element or as a custom styling variable on the document root (both are
/// equivalent; pick one consistently), and `placement.hidden` as a visibility
/// class. The controller never re-applies an identical placement, so
/// implementations can write unconditionally.
pub trait AnchorSurface {
    fn apply(&mut self, placement: AnchorPlacement);
}
