//! Snapshot rendering configuration.
//!
//! Groups the options the verification layer hands to the renderer:
//! how the contained view is rendered, which overlays are drawn, and
//! what the legend includes.

/// An RGBA marker color used for highlighted regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// The default marker palette, used in order and repeated as needed.
pub const DEFAULT_MARKER_PALETTE: [Color; 6] = [
    Color::rgb(0x00, 0x7A, 0xFF),
    Color::rgb(0xFF, 0x3B, 0x30),
    Color::rgb(0x34, 0xC7, 0x59),
    Color::rgb(0xFF, 0x95, 0x00),
    Color::rgb(0xAF, 0x52, 0xDE),
    Color::rgb(0x5A, 0xC8, 0xFA),
];

/// Whether the snapshot of the contained view is monochrome or full
/// color. Monochrome makes the highlighted elements easier to see but
/// may make some views harder to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorRenderingMode {
    /// Render the contained view in grayscale.
    #[default]
    Monochrome,
    /// Render the contained view in full color.
    FullColor,
}

/// When to draw indicators for elements' activation points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationPointDisplayMode {
    /// Always draw activation point indicators.
    Always,
    /// Draw indicators only for elements that override the default
    /// activation point.
    #[default]
    WhenOverridden,
    /// Never draw activation point indicators.
    Never,
}

impl ActivationPointDisplayMode {
    /// Whether an indicator should be drawn for an element, given
    /// whether that element overrides its activation point.
    #[must_use]
    pub const fn should_display(self, has_custom_activation_point: bool) -> bool {
        match self {
            Self::Always => true,
            Self::WhenOverridden => has_custom_activation_point,
            Self::Never => false,
        }
    }

    /// The display mode selected by an explicit show/hide flag, as the
    /// option-taking verification variants expose it.
    #[must_use]
    pub const fn from_flag(show_activation_points: bool) -> Self {
        if show_activation_points {
            Self::Always
        } else {
            Self::Never
        }
    }
}

/// Configuration for an accessibility snapshot rendering pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotConfiguration {
    /// How the contained view is rendered.
    pub color_mode: ColorRenderingMode,
    /// When activation point indicators are drawn.
    pub activation_point_display: ActivationPointDisplayMode,
    /// Whether the legend includes user input labels.
    pub show_user_input_labels: bool,
    /// Colors for highlighted regions, used in order and repeating.
    /// Never empty.
    marker_palette: Vec<Color>,
}

impl Default for SnapshotConfiguration {
    fn default() -> Self {
        Self {
            color_mode: ColorRenderingMode::Monochrome,
            activation_point_display: ActivationPointDisplayMode::WhenOverridden,
            show_user_input_labels: false,
            marker_palette: DEFAULT_MARKER_PALETTE.to_vec(),
        }
    }
}

impl SnapshotConfiguration {
    /// Create a configuration with the defaults: monochrome rendering,
    /// activation points shown when overridden, no user input labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color rendering mode.
    #[must_use]
    pub const fn with_color_mode(mut self, mode: ColorRenderingMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Set the activation point display mode.
    #[must_use]
    pub const fn with_activation_point_display(mut self, mode: ActivationPointDisplayMode) -> Self {
        self.activation_point_display = mode;
        self
    }

    /// Include user input labels in the legend.
    #[must_use]
    pub const fn with_user_input_labels(mut self, show: bool) -> Self {
        self.show_user_input_labels = show;
        self
    }

    /// Replace the marker palette. An empty palette falls back to the
    /// default so the renderer always has a color to pick.
    #[must_use]
    pub fn with_marker_palette(mut self, palette: Vec<Color>) -> Self {
        self.marker_palette = if palette.is_empty() {
            DEFAULT_MARKER_PALETTE.to_vec()
        } else {
            palette
        };
        self
    }

    /// The marker palette. Guaranteed non-empty.
    #[must_use]
    pub fn marker_palette(&self) -> &[Color] {
        &self.marker_palette
    }
}

/// Configuration for a hit-target snapshot rendering pass.
///
/// The missed-region maxima trade accuracy for speed: regions narrower
/// or shorter than the given values may be skipped by the scan, at the
/// risk of missing very thin interactive views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTargetConfiguration {
    /// Whether the base view snapshot is monochrome.
    pub monochrome: bool,
    /// Maximum width of a region that may go undetected. Non-negative.
    pub max_missed_region_width: f32,
    /// Maximum height of a region that may go undetected. Non-negative.
    pub max_missed_region_height: f32,
}

impl HitTargetConfiguration {
    /// Create a hit-target configuration, clamping the missed-region
    /// maxima to be non-negative.
    #[must_use]
    pub fn new(monochrome: bool, max_missed_region_width: f32, max_missed_region_height: f32) -> Self {
        Self {
            monochrome,
            max_missed_region_width: max_missed_region_width.max(0.0),
            max_missed_region_height: max_missed_region_height.max(0.0),
        }
    }
}

/// Configuration for a keyboard-accessibility snapshot rendering pass.
///
/// The rendered image carries a legend of the view's keyboard
/// shortcuts; focus overlays additionally highlight the focusable
/// elements themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardConfiguration {
    /// Whether the base view snapshot is monochrome.
    pub monochrome: bool,
    /// Whether to draw overlays on focusable elements.
    pub show_focus_overlays: bool,
}

impl Default for KeyboardConfiguration {
    fn default() -> Self {
        Self {
            monochrome: true,
            show_focus_overlays: false,
        }
    }
}

impl KeyboardConfiguration {
    /// Create a keyboard snapshot configuration.
    #[must_use]
    pub const fn new(monochrome: bool, show_focus_overlays: bool) -> Self {
        Self {
            monochrome,
            show_focus_overlays,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SnapshotConfiguration::default();
        assert_eq!(config.color_mode, ColorRenderingMode::Monochrome);
        assert_eq!(
            config.activation_point_display,
            ActivationPointDisplayMode::WhenOverridden
        );
        assert!(!config.show_user_input_labels);
        assert!(!config.marker_palette().is_empty());
    }

    #[test]
    fn test_activation_point_display_rules() {
        assert!(ActivationPointDisplayMode::Always.should_display(false));
        assert!(ActivationPointDisplayMode::WhenOverridden.should_display(true));
        assert!(!ActivationPointDisplayMode::WhenOverridden.should_display(false));
        assert!(!ActivationPointDisplayMode::Never.should_display(true));
    }

    #[test]
    fn test_display_mode_from_flag() {
        assert_eq!(
            ActivationPointDisplayMode::from_flag(true),
            ActivationPointDisplayMode::Always
        );
        assert_eq!(
            ActivationPointDisplayMode::from_flag(false),
            ActivationPointDisplayMode::Never
        );
    }

    #[test]
    fn test_empty_palette_falls_back_to_default() {
        let config = SnapshotConfiguration::new().with_marker_palette(Vec::new());
        assert_eq!(config.marker_palette(), DEFAULT_MARKER_PALETTE.as_slice());
    }

    #[test]
    fn test_custom_palette_kept() {
        let palette = vec![Color::rgb(1, 2, 3)];
        let config = SnapshotConfiguration::new().with_marker_palette(palette.clone());
        assert_eq!(config.marker_palette(), palette.as_slice());
    }

    #[test]
    fn test_keyboard_configuration_defaults() {
        let config = KeyboardConfiguration::default();
        assert!(config.monochrome);
        assert!(!config.show_focus_overlays);
    }

    #[test]
    fn test_hit_target_configuration_clamps_negative() {
        let config = HitTargetConfiguration::new(true, -1.0, 2.0);
        assert_eq!(config.max_missed_region_width, 0.0);
        assert_eq!(config.max_missed_region_height, 2.0);
    }
}
