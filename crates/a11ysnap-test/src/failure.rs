//! Failure descriptions surfaced to the test report.
//!
//! Every verification failure is a human-readable string; the
//! assertion macros surface these verbatim. Keeping the wording in one
//! place keeps it consistent across entry points.

use a11ysnap_core::RenderError;

/// Failure when tests run without a host application. Accessibility
/// properties are only populated correctly inside one.
pub const MISSING_HOST_APPLICATION: &str =
    "Accessibility snapshot tests cannot be run without a host application";

/// Failure when inverted-colors verification is requested on a
/// platform that cannot render inverted colors. Emitted before any
/// rendering is attempted.
pub const INVERTED_COLORS_UNSUPPORTED: &str =
    "Snapshot testing with inverted colors is not supported on this platform";

/// Describe a rendering failure reported by the snapshot pipeline.
#[must_use]
pub fn render_failure(error: &RenderError) -> String {
    match error {
        RenderError::ViewExceedsMaximumSize => {
            "View is too large to render a monochrome snapshot. \
             Try using full color rendering or snapshotting a smaller view."
                .to_string()
        }
        RenderError::UnsupportedTransform => {
            "View has an unsupported transform for the specified snapshot parameters. \
             Try using an identity transform or a different rendering mode."
                .to_string()
        }
        RenderError::ZeroSize { .. } => format!("Failed to render snapshot image: {error}"),
    }
}

/// Describe a missing reference snapshot.
#[must_use]
pub fn missing_reference(name: &str) -> String {
    format!("No reference snapshot recorded for '{name}'. Run in record mode to create one.")
}

/// Describe a reference whose dimensions differ from the actual image.
#[must_use]
pub fn dimension_mismatch(
    name: &str,
    reference: (u32, u32),
    actual: (u32, u32),
) -> String {
    format!(
        "Snapshot '{name}' has size {}x{}, but the reference is {}x{}",
        actual.0, actual.1, reference.0, reference.1,
    )
}

/// Describe a pixel-level mismatch against the reference.
#[must_use]
pub fn pixel_mismatch(name: &str, changed_fraction: f64, allowed_fraction: f64) -> String {
    format!(
        "Snapshot '{name}' differs from the reference: {:.2}% of pixels changed (allowed {:.2}%)",
        changed_fraction * 100.0,
        allowed_fraction * 100.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_failure_mentions_zero_size() {
        let message = render_failure(&RenderError::ZeroSize {
            width: 0.0,
            height: 5.0,
        });
        assert!(message.contains("zero size"));
    }

    #[test]
    fn test_missing_reference_names_snapshot() {
        let message = missing_reference("test_button_a11y");
        assert!(message.contains("'test_button_a11y'"));
    }

    #[test]
    fn test_pixel_mismatch_reports_percentages() {
        let message = pixel_mismatch("snap", 0.25, 0.1);
        assert!(message.contains("25.00%"));
        assert!(message.contains("10.00%"));
    }
}
