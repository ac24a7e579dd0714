//! Assertion macros over the verification entry points.
//!
//! Each macro resolves to a method on [`AccessibilityVerifier`] at
//! compile time and panics with the failure description verbatim when
//! verification fails. The identifier argument can be omitted; it
//! defaults to the empty string, naming the snapshot after the test
//! alone.
//!
//! [`AccessibilityVerifier`]: crate::AccessibilityVerifier

/// Assert that a view's accessibility snapshot matches its reference
/// exactly.
///
/// ```ignore
/// assert_accessibility_snapshot!(case, view);
/// assert_accessibility_snapshot!(case, view, "dark_mode");
/// ```
#[macro_export]
macro_rules! assert_accessibility_snapshot {
    ($case:expr, $view:expr $(,)?) => {
        $crate::assert_accessibility_snapshot!($case, $view, "")
    };
    ($case:expr, $view:expr, $identifier:expr $(,)?) => {
        match $crate::AccessibilityVerifier::verify_accessibility(&mut $case, &$view, $identifier) {
            ::core::option::Option::None => (),
            ::core::option::Option::Some(description) => ::core::panic!("{}", description),
        }
    };
}

/// Assert that a view's accessibility snapshot matches its reference
/// exactly, with explicit display options.
///
/// Arguments after the identifier: whether to draw activation point
/// indicators for every element, whether to render the view in
/// monochrome, and whether to include user input labels in the legend.
#[macro_export]
macro_rules! assert_accessibility_snapshot_with_options {
    (
        $case:expr, $view:expr, $identifier:expr,
        $show_activation_points:expr, $use_monochrome_snapshot:expr,
        $show_user_input_labels:expr $(,)?
    ) => {
        match $crate::AccessibilityVerifier::verify_accessibility_with_options(
            &mut $case,
            &$view,
            $identifier,
            $show_activation_points,
            $use_monochrome_snapshot,
            $show_user_input_labels,
            $crate::Tolerances::ZERO,
        ) {
            ::core::option::Option::None => (),
            ::core::option::Option::Some(description) => ::core::panic!("{}", description),
        }
    };
}

/// Assert that a view's inverted-colors snapshot matches its reference
/// exactly.
///
/// Fails on platforms that cannot render inverted colors, regardless
/// of the view.
#[macro_export]
macro_rules! assert_inverted_colors_snapshot {
    ($case:expr, $view:expr $(,)?) => {
        $crate::assert_inverted_colors_snapshot!($case, $view, "")
    };
    ($case:expr, $view:expr, $identifier:expr $(,)?) => {
        match $crate::AccessibilityVerifier::verify_inverted_colors(&mut $case, &$view, $identifier)
        {
            ::core::option::Option::None => (),
            ::core::option::Option::Some(description) => ::core::panic!("{}", description),
        }
    };
}

/// Assert that a view's keyboard-accessibility snapshot matches its
/// reference exactly.
///
/// The rendering carries a legend of the view's keyboard shortcuts.
/// The long form takes whether to render the view in monochrome and
/// whether to draw overlays on focusable elements; the short forms
/// default to monochrome without overlays.
///
/// ```ignore
/// assert_keyboard_accessibility_snapshot!(case, view);
/// assert_keyboard_accessibility_snapshot!(case, view, "shortcuts", false, true);
/// ```
#[macro_export]
macro_rules! assert_keyboard_accessibility_snapshot {
    ($case:expr, $view:expr $(,)?) => {
        $crate::assert_keyboard_accessibility_snapshot!($case, $view, "")
    };
    ($case:expr, $view:expr, $identifier:expr $(,)?) => {
        match $crate::AccessibilityVerifier::verify_keyboard_accessibility(
            &mut $case,
            &$view,
            $identifier,
        ) {
            ::core::option::Option::None => (),
            ::core::option::Option::Some(description) => ::core::panic!("{}", description),
        }
    };
    (
        $case:expr, $view:expr, $identifier:expr,
        $use_monochrome_snapshot:expr, $show_focus_overlays:expr $(,)?
    ) => {
        match $crate::AccessibilityVerifier::verify_keyboard_accessibility_with_tolerances(
            &mut $case,
            &$view,
            $identifier,
            $use_monochrome_snapshot,
            $show_focus_overlays,
            $crate::Tolerances::ZERO,
        ) {
            ::core::option::Option::None => (),
            ::core::option::Option::Some(description) => ::core::panic!("{}", description),
        }
    };
}

/// Assert that a view's hit-target snapshot matches its reference
/// exactly.
///
/// The missed-region maxima bound the size of interactive regions the
/// scan may skip; larger values are faster but may miss thin views.
#[macro_export]
macro_rules! assert_hit_target_snapshot {
    (
        $case:expr, $view:expr, $identifier:expr,
        $use_monochrome_snapshot:expr,
        $max_missed_region_width:expr, $max_missed_region_height:expr $(,)?
    ) => {
        match $crate::AccessibilityVerifier::verify_hit_targets(
            &mut $case,
            &$view,
            $identifier,
            $use_monochrome_snapshot,
            $max_missed_region_width,
            $max_missed_region_height,
            $crate::Tolerances::ZERO,
        ) {
            ::core::option::Option::None => (),
            ::core::option::Option::Some(description) => ::core::panic!("{}", description),
        }
    };
}

/// Assert that a view's accessibility snapshot matches its reference
/// under the given per-pixel and overall tolerances.
///
/// ```ignore
/// assert_imprecise_accessibility_snapshot!(case, view, "", 0.02, 0.001);
/// ```
#[macro_export]
macro_rules! assert_imprecise_accessibility_snapshot {
    (
        $case:expr, $view:expr, $identifier:expr,
        $per_pixel_tolerance:expr, $overall_tolerance:expr $(,)?
    ) => {
        match $crate::AccessibilityVerifier::verify_accessibility_with_tolerances(
            &mut $case,
            &$view,
            $identifier,
            $crate::Tolerances::new($per_pixel_tolerance, $overall_tolerance),
        ) {
            ::core::option::Option::None => (),
            ::core::option::Option::Some(description) => ::core::panic!("{}", description),
        }
    };
}

/// Assert that a view's accessibility snapshot matches its reference
/// under the given tolerances, with explicit display options.
#[macro_export]
macro_rules! assert_imprecise_accessibility_snapshot_with_options {
    (
        $case:expr, $view:expr, $identifier:expr,
        $show_activation_points:expr, $use_monochrome_snapshot:expr,
        $per_pixel_tolerance:expr, $overall_tolerance:expr,
        $show_user_input_labels:expr $(,)?
    ) => {
        match $crate::AccessibilityVerifier::verify_accessibility_with_options(
            &mut $case,
            &$view,
            $identifier,
            $show_activation_points,
            $use_monochrome_snapshot,
            $show_user_input_labels,
            $crate::Tolerances::new($per_pixel_tolerance, $overall_tolerance),
        ) {
            ::core::option::Option::None => (),
            ::core::option::Option::Some(description) => ::core::panic!("{}", description),
        }
    };
}

/// Assert that a view's inverted-colors snapshot matches its reference
/// under the given tolerances.
#[macro_export]
macro_rules! assert_imprecise_inverted_colors_snapshot {
    (
        $case:expr, $view:expr, $identifier:expr,
        $per_pixel_tolerance:expr, $overall_tolerance:expr $(,)?
    ) => {
        match $crate::AccessibilityVerifier::verify_inverted_colors_with_tolerances(
            &mut $case,
            &$view,
            $identifier,
            $crate::Tolerances::new($per_pixel_tolerance, $overall_tolerance),
        ) {
            ::core::option::Option::None => (),
            ::core::option::Option::Some(description) => ::core::panic!("{}", description),
        }
    };
}

/// Assert that a view's keyboard-accessibility snapshot matches its
/// reference under the given tolerances.
#[macro_export]
macro_rules! assert_imprecise_keyboard_accessibility_snapshot {
    (
        $case:expr, $view:expr, $identifier:expr,
        $use_monochrome_snapshot:expr, $show_focus_overlays:expr,
        $per_pixel_tolerance:expr, $overall_tolerance:expr $(,)?
    ) => {
        match $crate::AccessibilityVerifier::verify_keyboard_accessibility_with_tolerances(
            &mut $case,
            &$view,
            $identifier,
            $use_monochrome_snapshot,
            $show_focus_overlays,
            $crate::Tolerances::new($per_pixel_tolerance, $overall_tolerance),
        ) {
            ::core::option::Option::None => (),
            ::core::option::Option::Some(description) => ::core::panic!("{}", description),
        }
    };
}

/// Assert that a view's hit-target snapshot matches its reference
/// under the given tolerances.
#[macro_export]
macro_rules! assert_imprecise_hit_target_snapshot {
    (
        $case:expr, $view:expr, $identifier:expr,
        $use_monochrome_snapshot:expr,
        $max_missed_region_width:expr, $max_missed_region_height:expr,
        $per_pixel_tolerance:expr, $overall_tolerance:expr $(,)?
    ) => {
        match $crate::AccessibilityVerifier::verify_hit_targets(
            &mut $case,
            &$view,
            $identifier,
            $use_monochrome_snapshot,
            $max_missed_region_width,
            $max_missed_region_height,
            $crate::Tolerances::new($per_pixel_tolerance, $overall_tolerance),
        ) {
            ::core::option::Option::None => (),
            ::core::option::Option::Some(description) => ::core::panic!("{}", description),
        }
    };
}
