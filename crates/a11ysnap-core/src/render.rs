//! The contract of the opaque rendering pipeline.
//!
//! The accessibility snapshot renderer (hierarchy parsing, overlay
//! drawing, color inversion) lives outside this workspace. The
//! verification layer only depends on this trait and its error
//! taxonomy.

use thiserror::Error;

use crate::config::{HitTargetConfiguration, KeyboardConfiguration, SnapshotConfiguration};
use crate::image::Image;
use crate::view::View;

/// Errors the rendering pipeline can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// The contained view is too large for a monochrome rendering pass.
    #[error("contained view exceeds the maximum renderable size")]
    ViewExceedsMaximumSize,

    /// The contained view has a transform the selected rendering mode
    /// cannot reproduce.
    #[error("contained view has an unsupported transform")]
    UnsupportedTransform,

    /// The contained view has no area to render.
    #[error("contained view has zero size ({width}x{height})")]
    ZeroSize {
        /// The view's width.
        width: f32,
        /// The view's height.
        height: f32,
    },
}

/// Renders accessibility snapshots of views.
///
/// One method per rendering capability the verification entry points
/// reach for. Implementations are provided by the toolkit integration;
/// tests use stubs.
pub trait AccessibilityRenderer<V: View> {
    /// Render the view with accessibility overlays and legend.
    fn render_accessibility(
        &self,
        view: &V,
        config: &SnapshotConfiguration,
    ) -> Result<Image, RenderError>;

    /// Render the view as it appears with inverted colors enabled.
    fn render_inverted_colors(&self, view: &V) -> Result<Image, RenderError>;

    /// Render the view with a legend of its keyboard shortcuts and,
    /// optionally, focus overlays.
    fn render_keyboard_accessibility(
        &self,
        view: &V,
        config: &KeyboardConfiguration,
    ) -> Result<Image, RenderError>;

    /// Render the view with interactive hit-target regions highlighted.
    fn render_hit_targets(
        &self,
        view: &V,
        config: &HitTargetConfiguration,
    ) -> Result<Image, RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_messages() {
        assert_eq!(
            RenderError::ViewExceedsMaximumSize.to_string(),
            "contained view exceeds the maximum renderable size"
        );
        assert_eq!(
            RenderError::ZeroSize {
                width: 0.0,
                height: 10.0
            }
            .to_string(),
            "contained view has zero size (0x10)"
        );
    }
}
