//! The view seam between the toolkit and the snapshot pipeline.

use crate::element::AccessibilityElement;
use crate::geometry::Rect;

/// A snapshottable view.
///
/// The snapshot pipeline only needs a view's bounds and its flattened
/// accessibility representation; everything else (layout, painting,
/// hit testing internals) stays on the toolkit side of the seam.
pub trait View {
    /// The view's bounds in its own coordinate space.
    fn bounds(&self) -> Rect;

    /// The accessibility elements contained in the view, in the order
    /// assistive technology visits them.
    fn accessibility_elements(&self) -> Vec<AccessibilityElement>;
}
