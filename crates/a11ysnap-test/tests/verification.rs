//! End-to-end verification behavior: assertion macros, capability
//! guards, tolerance handling, and reference stores.

use a11ysnap_test::{
    assert_accessibility_snapshot, assert_accessibility_snapshot_with_options,
    assert_hit_target_snapshot, assert_imprecise_accessibility_snapshot,
    assert_imprecise_accessibility_snapshot_with_options,
    assert_imprecise_hit_target_snapshot, assert_imprecise_inverted_colors_snapshot,
    assert_imprecise_keyboard_accessibility_snapshot, assert_inverted_colors_snapshot,
    assert_keyboard_accessibility_snapshot, a11y_test, A11ySnapshotConfig, AccessibilityRenderer,
    AccessibilityVerifier, FileReferenceStore, HitTargetConfiguration, HostEnvironment, Image,
    InMemoryReferenceStore, KeyboardConfiguration, RenderError, SnapshotConfiguration,
    SnapshotTestCase, Tolerances, View,
};

use a11ysnap_core::{ColorRenderingMode, Rect};

struct FormView;

impl View for FormView {
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 16.0, 16.0)
    }

    fn accessibility_elements(&self) -> Vec<a11ysnap_test::AccessibilityElement> {
        Vec::new()
    }
}

/// Renders a solid fill that encodes the rendering variant, so tests
/// can seed the reference store with the expected output.
struct SolidRenderer;

impl SolidRenderer {
    fn image(fill: u8) -> Image {
        Image::filled(16, 16, [fill, fill, fill, 255])
    }

    const ACCESSIBILITY_MONO: u8 = 10;
    const ACCESSIBILITY_COLOR: u8 = 20;
    const INVERTED: u8 = 30;
    const HIT_TARGETS: u8 = 40;
    const KEYBOARD_MONO: u8 = 50;
    const KEYBOARD_COLOR: u8 = 60;
}

impl AccessibilityRenderer<FormView> for SolidRenderer {
    fn render_accessibility(
        &self,
        _view: &FormView,
        config: &SnapshotConfiguration,
    ) -> Result<Image, RenderError> {
        let fill = match config.color_mode {
            ColorRenderingMode::Monochrome => Self::ACCESSIBILITY_MONO,
            ColorRenderingMode::FullColor => Self::ACCESSIBILITY_COLOR,
        };
        Ok(Self::image(fill))
    }

    fn render_inverted_colors(&self, _view: &FormView) -> Result<Image, RenderError> {
        Ok(Self::image(Self::INVERTED))
    }

    fn render_keyboard_accessibility(
        &self,
        _view: &FormView,
        config: &KeyboardConfiguration,
    ) -> Result<Image, RenderError> {
        let fill = if config.monochrome {
            Self::KEYBOARD_MONO
        } else {
            Self::KEYBOARD_COLOR
        };
        Ok(Self::image(fill))
    }

    fn render_hit_targets(
        &self,
        _view: &FormView,
        _config: &HitTargetConfiguration,
    ) -> Result<Image, RenderError> {
        Ok(Self::image(Self::HIT_TARGETS))
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn case_with(
    test_name: &str,
    references: &[(&str, Image)],
) -> SnapshotTestCase<SolidRenderer, InMemoryReferenceStore> {
    let mut store = InMemoryReferenceStore::new();
    for (name, image) in references {
        store = store.with_reference(*name, image.clone());
    }
    SnapshotTestCase::new(test_name, SolidRenderer, store)
}

#[test]
fn test_matching_snapshot_passes() {
    init_logging();
    let mut case = case_with(
        "test_form",
        &[("test_form", SolidRenderer::image(SolidRenderer::ACCESSIBILITY_MONO))],
    );
    assert_accessibility_snapshot!(case, FormView);
}

#[test]
fn test_identifier_suffix_selects_reference() {
    let mut case = case_with(
        "test_form",
        &[("test_form_dark", SolidRenderer::image(SolidRenderer::ACCESSIBILITY_MONO))],
    );
    assert_accessibility_snapshot!(case, FormView, "dark");
}

#[test]
#[should_panic(expected = "No reference snapshot recorded for 'test_form'")]
fn test_missing_reference_panics_with_description() {
    let mut case = case_with("test_form", &[]);
    assert_accessibility_snapshot!(case, FormView);
}

#[test]
#[should_panic(expected = "of pixels changed")]
fn test_mismatch_panics_with_description() {
    let mut case = case_with("test_form", &[("test_form", SolidRenderer::image(99))]);
    assert_accessibility_snapshot!(case, FormView);
}

#[test]
fn test_omitted_identifier_is_empty_identifier() {
    // Both spellings resolve to the same snapshot name.
    let reference = SolidRenderer::image(SolidRenderer::ACCESSIBILITY_MONO);
    let mut case = case_with("test_form", &[("test_form", reference)]);
    assert_accessibility_snapshot!(case, FormView);
    assert_accessibility_snapshot!(case, FormView, "");
}

#[test]
fn test_exact_macro_equals_zero_tolerance_call() {
    let reference = SolidRenderer::image(SolidRenderer::ACCESSIBILITY_MONO);
    let mut case = case_with("test_form", &[("test_form", reference)]);
    let direct = case.verify_accessibility_with_tolerances(&FormView, "", Tolerances::ZERO);
    assert_eq!(direct, None);
    assert_accessibility_snapshot!(case, FormView);
}

#[test]
fn test_options_variant_full_color() {
    let mut case = case_with(
        "test_form",
        &[("test_form", SolidRenderer::image(SolidRenderer::ACCESSIBILITY_COLOR))],
    );
    assert_accessibility_snapshot_with_options!(case, FormView, "", true, false, false);
}

#[test]
fn test_imprecise_passes_where_exact_fails() {
    // Reference is one channel step away from the rendering.
    let mut reference = SolidRenderer::image(SolidRenderer::ACCESSIBILITY_MONO);
    reference.set_pixel(0, 0, [SolidRenderer::ACCESSIBILITY_MONO + 2, 10, 10, 255]);
    let mut case = case_with("test_form", &[("test_form", reference)]);

    let exact = case.verify_accessibility(&FormView, "");
    assert!(exact.is_some());

    assert_imprecise_accessibility_snapshot!(case, FormView, "", 0.01, 0.0);
}

#[test]
fn test_imprecise_overall_tolerance() {
    // One of 256 pixels differs beyond any per-pixel tolerance.
    let mut reference = SolidRenderer::image(SolidRenderer::ACCESSIBILITY_MONO);
    reference.set_pixel(5, 5, [200, 200, 200, 255]);
    let mut case = case_with("test_form", &[("test_form", reference)]);
    assert_imprecise_accessibility_snapshot!(case, FormView, "", 0.0, 0.005);
}

#[test]
fn test_imprecise_options_variant() {
    let mut reference = SolidRenderer::image(SolidRenderer::ACCESSIBILITY_COLOR);
    reference.set_pixel(0, 0, [SolidRenderer::ACCESSIBILITY_COLOR + 1, 20, 20, 255]);
    let mut case = case_with("test_form", &[("test_form", reference)]);
    assert_imprecise_accessibility_snapshot_with_options!(
        case, FormView, "", false, false, 0.01, 0.0, true
    );
}

#[test]
fn test_inverted_colors_snapshot() {
    let mut case = case_with(
        "test_form",
        &[("test_form", SolidRenderer::image(SolidRenderer::INVERTED))],
    );
    assert_inverted_colors_snapshot!(case, FormView);
}

#[test]
#[should_panic(expected = "Snapshot testing with inverted colors is not supported on this platform")]
fn test_inverted_colors_unsupported_platform_panics() {
    // The reference matches; the capability guard still fails first.
    let mut case = case_with(
        "test_form",
        &[("test_form", SolidRenderer::image(SolidRenderer::INVERTED))],
    )
    .with_environment(HostEnvironment::full().without_inverted_colors());
    assert_inverted_colors_snapshot!(case, FormView);
}

#[test]
fn test_imprecise_inverted_colors_snapshot() {
    let mut reference = SolidRenderer::image(SolidRenderer::INVERTED);
    reference.set_pixel(1, 1, [SolidRenderer::INVERTED + 1, 30, 30, 255]);
    let mut case = case_with("test_form", &[("test_form", reference)]);
    assert_imprecise_inverted_colors_snapshot!(case, FormView, "", 0.01, 0.0);
}

#[test]
fn test_keyboard_accessibility_snapshot() {
    let mut case = case_with(
        "test_form",
        &[("test_form", SolidRenderer::image(SolidRenderer::KEYBOARD_MONO))],
    );
    assert_keyboard_accessibility_snapshot!(case, FormView);
}

#[test]
fn test_keyboard_accessibility_snapshot_full_color_with_overlays() {
    let mut case = case_with(
        "test_form",
        &[("test_form", SolidRenderer::image(SolidRenderer::KEYBOARD_COLOR))],
    );
    assert_keyboard_accessibility_snapshot!(case, FormView, "", false, true);
}

#[test]
#[should_panic(
    expected = "Accessibility snapshot tests cannot be run without a host application"
)]
fn test_keyboard_accessibility_headless_panics() {
    let mut case =
        SnapshotTestCase::new("test_form", SolidRenderer, InMemoryReferenceStore::new())
            .with_environment(HostEnvironment::headless());
    assert_keyboard_accessibility_snapshot!(case, FormView);
}

#[test]
fn test_imprecise_keyboard_accessibility_snapshot() {
    let mut reference = SolidRenderer::image(SolidRenderer::KEYBOARD_MONO);
    reference.set_pixel(4, 4, [SolidRenderer::KEYBOARD_MONO + 1, 50, 50, 255]);
    let mut case = case_with("test_form", &[("test_form", reference)]);
    assert_imprecise_keyboard_accessibility_snapshot!(case, FormView, "", true, false, 0.01, 0.0);
}

#[test]
fn test_hit_target_snapshot() {
    let mut case = case_with(
        "test_form",
        &[("test_form_targets", SolidRenderer::image(SolidRenderer::HIT_TARGETS))],
    );
    assert_hit_target_snapshot!(case, FormView, "targets", true, 4.0, 4.0);
}

#[test]
fn test_imprecise_hit_target_snapshot() {
    let mut reference = SolidRenderer::image(SolidRenderer::HIT_TARGETS);
    reference.set_pixel(2, 2, [SolidRenderer::HIT_TARGETS + 1, 40, 40, 255]);
    let mut case = case_with("test_form", &[("test_form", reference)]);
    assert_imprecise_hit_target_snapshot!(case, FormView, "", true, 0.0, 0.0, 0.01, 0.0);
}

#[test]
#[should_panic(
    expected = "Accessibility snapshot tests cannot be run without a host application"
)]
fn test_headless_environment_panics() {
    let mut case =
        SnapshotTestCase::new("test_form", SolidRenderer, InMemoryReferenceStore::new())
            .with_environment(HostEnvironment::headless());
    assert_accessibility_snapshot!(case, FormView);
}

#[test]
fn test_verification_is_deterministic() {
    let mut case = case_with("test_form", &[("test_form", SolidRenderer::image(99))]);
    let first = case.verify_accessibility(&FormView, "");
    let second = case.verify_accessibility(&FormView, "");
    assert_eq!(first, second);
    assert!(first.is_some());
}

#[a11y_test(record)]
fn test_record_attribute_records_missing_reference() {
    let mut case = case_with("test_form", &[]);
    // First pass records, second pass compares against the recording.
    assert_accessibility_snapshot!(case, FormView);
    assert_accessibility_snapshot!(case, FormView);
    assert!(case.store().contains("test_form"));
}

#[a11y_test]
fn test_file_store_round_trip() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let store = FileReferenceStore::new(dir.path());
    let mut case = SnapshotTestCase::new("test_form", SolidRenderer, store);

    let recorded = a11ysnap_test::with_record_mode(|| case.verify_accessibility(&FormView, ""));
    assert_eq!(recorded, None);
    assert!(case.store().reference_path("test_form").exists());

    // The written PNG decodes back to a matching reference.
    assert_accessibility_snapshot!(case, FormView);
}

#[a11y_test]
fn test_config_record_flag_records_missing_reference() {
    let dir = tempfile::tempdir().unwrap();
    let toml = format!(
        "record = true\nreference_directory = {:?}",
        dir.path().display().to_string()
    );
    let config = A11ySnapshotConfig::from_toml(&toml).unwrap();
    let mut case = SnapshotTestCase::new("test_form", SolidRenderer, config.file_store())
        .with_configuration(config.snapshot_configuration());

    // No reference exists; the config's record flag alone makes the
    // first verification record and pass.
    assert_accessibility_snapshot!(case, FormView);
    assert!(case.store().reference_path("test_form").exists());
    assert_accessibility_snapshot!(case, FormView);
}

#[a11y_test]
fn test_config_record_flag_off_still_fails() {
    let dir = tempfile::tempdir().unwrap();
    let toml = format!(
        "reference_directory = {:?}",
        dir.path().display().to_string()
    );
    let config = A11ySnapshotConfig::from_toml(&toml).unwrap();
    let mut case = SnapshotTestCase::new("test_form", SolidRenderer, config.file_store());
    let result = case.verify_accessibility(&FormView, "");
    assert!(result.is_some_and(|m| m.contains("No reference snapshot recorded")));
}

#[a11y_test]
fn test_file_store_missing_reference_outside_record_mode() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileReferenceStore::new(dir.path());
    let mut case = SnapshotTestCase::new("test_form", SolidRenderer, store);
    let result = case.verify_accessibility(&FormView, "");
    assert!(result.is_some_and(|m| m.contains("No reference snapshot recorded")));
}
