//! Verification entry points.
//!
//! [`AccessibilityVerifier`] is the capability contract the assertion
//! macros dispatch through: one method per verification variant, all
//! resolved at compile time. [`SnapshotTestCase`] is the standard
//! implementation, wiring a renderer, a reference store, and the host
//! environment together.

use a11ysnap_core::{
    AccessibilityRenderer, ActivationPointDisplayMode, ColorRenderingMode, HitTargetConfiguration,
    HostEnvironment, Image, KeyboardConfiguration, RenderError, SnapshotConfiguration, View,
};

use crate::failure;
use crate::reference::ReferenceStore;
use crate::tolerances::Tolerances;

/// The verification capabilities a test case exposes.
///
/// Every method returns `None` when the snapshot matches its
/// reference, or a description of the failure. The assertion macros
/// panic with that description verbatim; calling a method directly
/// lets a test inspect the outcome without panicking.
///
/// The variants without a `Tolerances` parameter compare exactly; they
/// are provided methods that delegate to their tolerance-accepting
/// counterparts with [`Tolerances::ZERO`].
pub trait AccessibilityVerifier<V: View> {
    /// Verify the view's accessibility snapshot with the default
    /// configuration and exact comparison.
    fn verify_accessibility(&mut self, view: &V, identifier: &str) -> Option<String> {
        self.verify_accessibility_with_tolerances(view, identifier, Tolerances::ZERO)
    }

    /// Verify the view's accessibility snapshot with the default
    /// configuration.
    fn verify_accessibility_with_tolerances(
        &mut self,
        view: &V,
        identifier: &str,
        tolerances: Tolerances,
    ) -> Option<String>;

    /// Verify the view's accessibility snapshot with explicit display
    /// options.
    ///
    /// `show_activation_points` selects between showing indicators for
    /// every element and for none; the default mode of showing them
    /// only for elements with a custom activation point is not
    /// reachable from this variant.
    #[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
    fn verify_accessibility_with_options(
        &mut self,
        view: &V,
        identifier: &str,
        show_activation_points: bool,
        use_monochrome_snapshot: bool,
        show_user_input_labels: bool,
        tolerances: Tolerances,
    ) -> Option<String>;

    /// Verify the view as rendered with inverted colors, with exact
    /// comparison.
    fn verify_inverted_colors(&mut self, view: &V, identifier: &str) -> Option<String> {
        self.verify_inverted_colors_with_tolerances(view, identifier, Tolerances::ZERO)
    }

    /// Verify the view as rendered with inverted colors.
    fn verify_inverted_colors_with_tolerances(
        &mut self,
        view: &V,
        identifier: &str,
        tolerances: Tolerances,
    ) -> Option<String>;

    /// Verify the view with a legend of its keyboard shortcuts, using
    /// the default rendering (monochrome, no focus overlays) and exact
    /// comparison.
    fn verify_keyboard_accessibility(&mut self, view: &V, identifier: &str) -> Option<String> {
        self.verify_keyboard_accessibility_with_tolerances(
            view,
            identifier,
            true,
            false,
            Tolerances::ZERO,
        )
    }

    /// Verify the view with a legend of its keyboard shortcuts and,
    /// optionally, focus overlays on focusable elements.
    fn verify_keyboard_accessibility_with_tolerances(
        &mut self,
        view: &V,
        identifier: &str,
        use_monochrome_snapshot: bool,
        show_focus_overlays: bool,
        tolerances: Tolerances,
    ) -> Option<String>;

    /// Verify the view with its interactive hit-target regions
    /// highlighted.
    #[allow(clippy::too_many_arguments)]
    fn verify_hit_targets(
        &mut self,
        view: &V,
        identifier: &str,
        use_monochrome_snapshot: bool,
        max_missed_region_width: f32,
        max_missed_region_height: f32,
        tolerances: Tolerances,
    ) -> Option<String>;
}

/// The standard verifier: renders through an [`AccessibilityRenderer`]
/// and compares against a [`ReferenceStore`].
///
/// Snapshot names are derived from the test name and the identifier:
/// an empty identifier names the snapshot after the test alone, a
/// non-empty one appends `_{identifier}`. Two verifications in the
/// same test therefore need distinct identifiers to get distinct
/// references.
#[derive(Debug)]
pub struct SnapshotTestCase<R, S> {
    test_name: String,
    renderer: R,
    store: S,
    environment: HostEnvironment,
    configuration: SnapshotConfiguration,
}

impl<R, S> SnapshotTestCase<R, S> {
    /// Create a test case for the named test.
    pub fn new(test_name: impl Into<String>, renderer: R, store: S) -> Self {
        Self {
            test_name: test_name.into(),
            renderer,
            store,
            environment: HostEnvironment::default(),
            configuration: SnapshotConfiguration::default(),
        }
    }

    /// Override the host environment. Tests use this to exercise the
    /// capability guards without changing the platform they run on.
    #[must_use]
    pub fn with_environment(mut self, environment: HostEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Replace the base snapshot configuration used by the
    /// accessibility verification variants. The options-taking
    /// variants override its display flags but keep its marker
    /// palette, so an `.a11ysnap.toml` palette override applies to
    /// every accessibility snapshot.
    #[must_use]
    pub fn with_configuration(mut self, configuration: SnapshotConfiguration) -> Self {
        self.configuration = configuration;
        self
    }

    /// The name of the test this case belongs to.
    #[must_use]
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// The reference store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn snapshot_name(&self, identifier: &str) -> String {
        if identifier.is_empty() {
            self.test_name.clone()
        } else {
            format!("{}_{identifier}", self.test_name)
        }
    }
}

impl<V, R, S> AccessibilityVerifier<V> for SnapshotTestCase<R, S>
where
    V: View,
    R: AccessibilityRenderer<V>,
    S: ReferenceStore,
{
    fn verify_accessibility_with_tolerances(
        &mut self,
        view: &V,
        identifier: &str,
        tolerances: Tolerances,
    ) -> Option<String> {
        if !self.environment.has_host_application {
            return Some(failure::MISSING_HOST_APPLICATION.to_string());
        }
        let config = self.configuration.clone();
        self.render_and_compare(
            identifier,
            tolerances,
            self.renderer.render_accessibility(view, &config),
        )
    }

    fn verify_accessibility_with_options(
        &mut self,
        view: &V,
        identifier: &str,
        show_activation_points: bool,
        use_monochrome_snapshot: bool,
        show_user_input_labels: bool,
        tolerances: Tolerances,
    ) -> Option<String> {
        if !self.environment.has_host_application {
            return Some(failure::MISSING_HOST_APPLICATION.to_string());
        }
        let color_mode = if use_monochrome_snapshot {
            ColorRenderingMode::Monochrome
        } else {
            ColorRenderingMode::FullColor
        };
        let config = self
            .configuration
            .clone()
            .with_color_mode(color_mode)
            .with_activation_point_display(ActivationPointDisplayMode::from_flag(
                show_activation_points,
            ))
            .with_user_input_labels(show_user_input_labels);
        self.render_and_compare(
            identifier,
            tolerances,
            self.renderer.render_accessibility(view, &config),
        )
    }

    fn verify_inverted_colors_with_tolerances(
        &mut self,
        view: &V,
        identifier: &str,
        tolerances: Tolerances,
    ) -> Option<String> {
        // Capability check comes first: an unsupported platform fails
        // the same way for every view, before rendering is attempted.
        if !self.environment.supports_inverted_colors {
            return Some(failure::INVERTED_COLORS_UNSUPPORTED.to_string());
        }
        self.render_and_compare(
            identifier,
            tolerances,
            self.renderer.render_inverted_colors(view),
        )
    }

    fn verify_keyboard_accessibility_with_tolerances(
        &mut self,
        view: &V,
        identifier: &str,
        use_monochrome_snapshot: bool,
        show_focus_overlays: bool,
        tolerances: Tolerances,
    ) -> Option<String> {
        if !self.environment.has_host_application {
            return Some(failure::MISSING_HOST_APPLICATION.to_string());
        }
        let config = KeyboardConfiguration::new(use_monochrome_snapshot, show_focus_overlays);
        self.render_and_compare(
            identifier,
            tolerances,
            self.renderer.render_keyboard_accessibility(view, &config),
        )
    }

    fn verify_hit_targets(
        &mut self,
        view: &V,
        identifier: &str,
        use_monochrome_snapshot: bool,
        max_missed_region_width: f32,
        max_missed_region_height: f32,
        tolerances: Tolerances,
    ) -> Option<String> {
        if !self.environment.has_host_application {
            return Some(failure::MISSING_HOST_APPLICATION.to_string());
        }
        let config = HitTargetConfiguration::new(
            use_monochrome_snapshot,
            max_missed_region_width,
            max_missed_region_height,
        );
        self.render_and_compare(
            identifier,
            tolerances,
            self.renderer.render_hit_targets(view, &config),
        )
    }
}

impl<R, S: ReferenceStore> SnapshotTestCase<R, S> {
    fn render_and_compare(
        &mut self,
        identifier: &str,
        tolerances: Tolerances,
        rendered: Result<Image, RenderError>,
    ) -> Option<String> {
        let name = self.snapshot_name(identifier);
        match rendered {
            Ok(actual) => {
                log::debug!("verifying snapshot '{name}'");
                self.store.compare(&name, &actual, tolerances)
            }
            Err(error) => Some(failure::render_failure(&error)),
        }
    }
}
