/// An immutable read of the host's viewport and document geometry, taken
/// synchronously at event time.
///
/// All fields are CSS pixels. DOM geometry is fractional on real devices
/// (device-pixel-ratio scaling), so everything is `f64`.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSnapshot {
    /// Layout viewport height (`window.innerHeight`). Stays constant while
    /// the virtual keyboard animates.
    pub inner_height: f64,
    /// `document.documentElement.clientHeight`.
    pub document_client_height: f64,
    /// Full document height (`document.documentElement.scrollHeight`).
    pub document_scroll_height: f64,
    /// Vertical document scroll position (`window.scrollY`).
    pub scroll_y: f64,
    /// Visual viewport height. Shrinks when the keyboard is shown.
    pub viewport_height: f64,
    /// Visual viewport vertical offset inside the layout viewport.
    pub viewport_offset_top: f64,
}

impl ViewportSnapshot {
    /// Gap introduced by platform chrome collapse (e.g. a browser address bar
    /// shrinking independently of the keyboard). Never negative.
    pub fn height_gap(&self) -> f64 {
        (self.document_client_height - self.inner_height).max(0.0)
    }

    /// Whether the document was taller than the layout viewport (i.e. had its
    /// own scrollbar) at the time this snapshot was taken.
    pub fn has_document_scroll(&self) -> bool {
        self.document_scroll_height > self.inner_height
    }
}

/// Whether the keyboard is logically open and whether its slide-in animation
/// is assumed complete.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyboardState {
    /// Set on focus-in, cleared on focus-out.
    pub visible: bool,
    /// Set once the settle delay elapses without an intervening focus-out.
    pub settled: bool,
    /// Whether the document already had its own scrollbar when the keyboard
    /// started opening. Captured once per open session and held fixed: the
    /// keyboard's own presence changes scroll height mid-session.
    pub has_preexisting_scroll: bool,
}

/// Transient gesture-driven UI state. `is_hidden` is a presentation flag, not
/// a keyboard signal.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureState {
    pub is_pointer_active: bool,
    pub is_hidden: bool,
}

/// The presenter's single output value: a non-negative vertical displacement
/// plus a hidden flag.
///
/// `offset == 0` means the element sits in its resting position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorPlacement {
    pub offset: f64,
    pub hidden: bool,
}

impl AnchorPlacement {
    /// The resting placement: no displacement, fully visible.
    pub const fn resting() -> Self {
        Self {
            offset: 0.0,
            hidden: false,
        }
    }

    pub fn is_resting(&self) -> bool {
        *self == Self::resting()
    }
}

/// Focus machine phase. Cycles `Idle → Opening → Settled → Idle` for the
/// component's whole active lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FocusPhase {
    #[default]
    Idle,
    Opening,
    Settled,
}

/// Host-side classification of a touch-start target. The engine cannot
/// inspect a DOM tree; the host decides what was hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchTarget {
    /// The anchored element itself (or a descendant). The user intends to
    /// interact with the anchor; never hide it.
    Anchor,
    /// A text-input-like control. The user intends to keep typing.
    TextInput,
    /// Anything else on the page.
    Content,
}

impl TouchTarget {
    /// Targets that suppress the gesture-hide reaction.
    pub fn is_exempt(&self) -> bool {
        matches!(self, Self::Anchor | Self::TextInput)
    }
}
