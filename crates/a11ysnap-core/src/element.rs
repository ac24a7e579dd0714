//! Accessible-element descriptors consumed by the snapshot renderer.

use crate::geometry::{Point, Rect};

/// A single element in a view's accessibility representation.
///
/// This is the unit the snapshot renderer overlays and describes. The
/// default activation point of an element is the center of its frame;
/// elements may override it, which some snapshot variants visualize.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessibilityElement {
    /// Accessible name (label) read by assistive technology.
    pub name: Option<String>,
    /// Accessible description or hint.
    pub description: Option<String>,
    /// Frame of the element in the snapshotted view's coordinates.
    pub frame: Rect,
    /// The point assistive technology activates when the element is
    /// triggered. `None` means the default (the frame's center).
    activation_point: Option<Point>,
    /// Labels recognized by voice-driven input for this element.
    pub user_input_labels: Vec<String>,
    /// Whether the element responds to user interaction.
    pub interactive: bool,
}

impl AccessibilityElement {
    /// Create a new element with the given frame.
    #[must_use]
    pub fn new(frame: Rect) -> Self {
        Self {
            name: None,
            description: None,
            frame,
            activation_point: None,
            user_input_labels: Vec::new(),
            interactive: false,
        }
    }

    /// Set the accessible name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the accessible description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Override the activation point.
    #[must_use]
    pub const fn with_activation_point(mut self, point: Point) -> Self {
        self.activation_point = Some(point);
        self
    }

    /// Add a user input label.
    #[must_use]
    pub fn with_user_input_label(mut self, label: impl Into<String>) -> Self {
        self.user_input_labels.push(label.into());
        self
    }

    /// Mark the element as interactive.
    #[must_use]
    pub const fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// The effective activation point: the override if present,
    /// otherwise the frame's center.
    #[must_use]
    pub fn activation_point(&self) -> Point {
        self.activation_point.unwrap_or_else(|| self.frame.center())
    }

    /// Whether the activation point differs from the default.
    #[must_use]
    pub const fn has_custom_activation_point(&self) -> bool {
        self.activation_point.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_activation_point_is_frame_center() {
        let element = AccessibilityElement::new(Rect::new(0.0, 0.0, 100.0, 40.0));
        assert!(!element.has_custom_activation_point());
        assert_eq!(element.activation_point(), Point::new(50.0, 20.0));
    }

    #[test]
    fn test_overridden_activation_point() {
        let element = AccessibilityElement::new(Rect::new(0.0, 0.0, 100.0, 40.0))
            .with_activation_point(Point::new(10.0, 10.0));
        assert!(element.has_custom_activation_point());
        assert_eq!(element.activation_point(), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_builder_chain() {
        let element = AccessibilityElement::new(Rect::new(0.0, 0.0, 44.0, 44.0))
            .with_name("Submit")
            .with_description("Submits the form")
            .with_user_input_label("Submit")
            .interactive();
        assert_eq!(element.name.as_deref(), Some("Submit"));
        assert_eq!(element.user_input_labels, vec!["Submit".to_string()]);
        assert!(element.interactive);
    }
}
