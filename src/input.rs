//! Input model: pointer sources, press targets, and the gesture state machines.
//!
//! The editor runs three independent machines, one each for drag, resize, and
//! rotate. Each is a [`Gesture`] that is either `Idle` or `Active` with a
//! session. The session records everything captured at pointer-down that is
//! needed to turn a later pointer position into an absolute value: the
//! pointer's start point, and the position, size, or rotation the model held
//! at that moment. Values come from "start + total delta", never from summing
//! per-event deltas, so replaying the same pointer path always lands on the
//! same result.
//!
//! While a machine is active the host must route document-level move and
//! up events for its source to the engine. Leaving `Active` happens only
//! through [`Gesture::finish`] or a displacing [`Gesture::begin`]. Both hand
//! back the old session so the engine can tell the host to drop those
//! listeners.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MIN_POLAROID_HEIGHT, MIN_POLAROID_WIDTH};
use crate::doc::{CaptionFont, Frame, ItemId, ItemRef, PageRef};
use crate::geom::{Point, Rect, Size};

/// Which input device produced an event. Both feed the same transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// The sub-part of a widget that received a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressTarget {
    /// The widget itself: image area, frame, sticker glyph.
    Body,
    /// Caption text field.
    Caption,
    /// Delete affordance.
    DeleteButton,
    /// Bottom-right resize grip (polaroids).
    ResizeHandle,
    /// Rotate button in the control cluster (polaroids).
    RotateHandle,
    /// Any other part of the control cluster.
    Controls,
}

impl PressTarget {
    /// Only a press on the body itself moves the widget; interactive
    /// sub-controls keep their own pointer handling.
    #[must_use]
    pub fn starts_drag(self) -> bool {
        matches!(self, Self::Body)
    }
}

/// The three gesture capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    Drag,
    Resize,
    Rotate,
}

/// A pointer-down on a widget, as reported by the host.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointerDown {
    /// The widget pressed.
    pub item: ItemRef,
    /// The part of the widget under the pointer.
    pub target: PressTarget,
    /// Pointer position (first touch for touch input).
    pub point: Point,
    pub source: PointerSource,
    /// The widget's on-screen bounding box, in the same space as `point`.
    pub bounds: Rect,
}

// =============================================================
// Sessions
// =============================================================

/// State shared by every session kind.
pub trait GestureSession {
    const KIND: GestureKind;

    /// The page the gesture started on.
    fn page(&self) -> PageRef;

    /// The widget being manipulated.
    fn item(&self) -> ItemRef;
}

/// A drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub item: ItemRef,
    pub page: PageRef,
    /// Pointer position at pointer-down.
    pub start_pointer: Point,
    /// Model position of the widget at pointer-down.
    pub origin: Point,
}

impl DragSession {
    /// Absolute widget position for the pointer at `pointer`.
    #[must_use]
    pub fn position_at(&self, pointer: Point) -> Point {
        self.origin.offset(pointer.delta_from(self.start_pointer))
    }
}

impl GestureSession for DragSession {
    const KIND: GestureKind = GestureKind::Drag;

    fn page(&self) -> PageRef {
        self.page
    }

    fn item(&self) -> ItemRef {
        self.item
    }
}

/// A polaroid resize in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    pub id: ItemId,
    pub page: PageRef,
    pub start_pointer: Point,
    /// Model size of the polaroid at pointer-down.
    pub origin: Size,
}

impl ResizeSession {
    /// Size for the pointer at `pointer`, clamped to the polaroid minimum.
    #[must_use]
    pub fn size_at(&self, pointer: Point) -> Size {
        self.origin
            .grow_clamped(pointer.delta_from(self.start_pointer), Size::new(MIN_POLAROID_WIDTH, MIN_POLAROID_HEIGHT))
    }
}

impl GestureSession for ResizeSession {
    const KIND: GestureKind = GestureKind::Resize;

    fn page(&self) -> PageRef {
        self.page
    }

    fn item(&self) -> ItemRef {
        ItemRef::Polaroid(self.id)
    }
}

/// A polaroid rotation in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateSession {
    pub id: ItemId,
    pub page: PageRef,
    /// Pivot: the widget's on-screen center at pointer-down.
    pub center: Point,
    /// Pointer angle around `center` at pointer-down, in degrees.
    pub start_angle: f64,
    /// Rotation stored in the model at pointer-down.
    pub base_rotation: f64,
}

impl RotateSession {
    #[must_use]
    pub fn new(id: ItemId, page: PageRef, center: Point, pointer: Point, base_rotation: f64) -> Self {
        Self { id, page, center, start_angle: pointer.angle_around(center), base_rotation }
    }

    /// Rotation for the pointer at `pointer`. Not wrapped into any range.
    #[must_use]
    pub fn rotation_at(&self, pointer: Point) -> f64 {
        self.base_rotation + (pointer.angle_around(self.center) - self.start_angle)
    }
}

impl GestureSession for RotateSession {
    const KIND: GestureKind = GestureKind::Rotate;

    fn page(&self) -> PageRef {
        self.page
    }

    fn item(&self) -> ItemRef {
        ItemRef::Polaroid(self.id)
    }
}

// =============================================================
// Machines
// =============================================================

/// One gesture state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture<S> {
    /// No gesture in progress; no listeners held.
    Idle,
    /// Tracking pointer input from `source`; listeners held.
    Active { session: S, source: PointerSource },
}

impl<S> Default for Gesture<S> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<S> Gesture<S> {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    #[must_use]
    pub fn session(&self) -> Option<&S> {
        match self {
            Self::Idle => None,
            Self::Active { session, .. } => Some(session),
        }
    }

    #[must_use]
    pub fn source(&self) -> Option<PointerSource> {
        match self {
            Self::Idle => None,
            Self::Active { source, .. } => Some(*source),
        }
    }

    /// The session, if active and fed by `source`.
    #[must_use]
    pub fn session_for(&self, source: PointerSource) -> Option<&S> {
        match self {
            Self::Active { session, source: s } if *s == source => Some(session),
            _ => None,
        }
    }

    /// Enter `Active`. A session that was still active is displaced and
    /// returned so its listeners can be released.
    pub fn begin(&mut self, session: S, source: PointerSource) -> Option<(S, PointerSource)> {
        match std::mem::replace(self, Self::Active { session, source }) {
            Self::Idle => None,
            Self::Active { session, source } => Some((session, source)),
        }
    }

    /// Return to `Idle`, handing back the session that was active.
    pub fn finish(&mut self) -> Option<(S, PointerSource)> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Active { session, source } => Some((session, source)),
        }
    }
}

/// The three machines, one per capability.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub drag: Gesture<DragSession>,
    pub resize: Gesture<ResizeSession>,
    pub rotate: Gesture<RotateSession>,
}

impl InputState {
    /// Whether any machine is active.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.drag.is_active() || self.resize.is_active() || self.rotate.is_active()
    }
}

/// Editor choices that shape newly created widgets.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    /// Frame for the next ingested polaroid.
    pub frame: Frame,
    /// Caption font for the next ingested polaroid.
    pub font: CaptionFont,
    /// Size of the page element, for centering new polaroids. Zero until reported.
    pub page_size: Size,
}
