#![allow(clippy::fn_params_excessive_bools)]
//! Accessibility snapshot verification.
//!
//! Verifies that a view's accessibility representation matches a
//! recorded reference image. Four verification families are exposed:
//! accessibility overlays (element frames, legend, activation points),
//! inverted-colors rendering, keyboard-accessibility legends, and
//! hit-target highlighting. Each comes in an exact variant and an
//! "imprecise" variant taking explicit comparison tolerances.
//!
//! Dispatch is a compile-time contract: the assertion macros resolve
//! to methods on [`AccessibilityVerifier`], so a test case that lacks
//! a capability fails to build instead of failing at runtime.
//!
//! ```ignore
//! use a11ysnap_test::{assert_accessibility_snapshot, SnapshotTestCase};
//!
//! #[test]
//! fn test_login_form() {
//!     let mut case = SnapshotTestCase::new(
//!         "test_login_form",
//!         ToolkitRenderer::new(),
//!         A11ySnapshotConfig::load_default().file_store(),
//!     );
//!     assert_accessibility_snapshot!(case, login_form());
//! }
//! ```
//!
//! Run with the `A11YSNAP_RECORD` environment variable set (or wrap a
//! test body in [`with_record_mode`]) to record missing references
//! instead of failing on them.

mod config;
mod failure;
mod macros;
mod reference;
mod tolerances;
mod verifier;

pub use config::{A11ySnapshotConfig, ConfigError, PaletteEntry};
pub use failure::{INVERTED_COLORS_UNSUPPORTED, MISSING_HOST_APPLICATION};
pub use reference::{
    compare_images, is_record_mode, with_record_mode, FileReferenceStore, InMemoryReferenceStore,
    ReferenceStore, RECORD_ENV_VAR,
};
pub use tolerances::Tolerances;
pub use verifier::{AccessibilityVerifier, SnapshotTestCase};

pub use a11ysnap_test_macros::a11y_test;

// Core types commonly needed alongside the verification surface.
pub use a11ysnap_core::{
    AccessibilityElement, AccessibilityRenderer, HitTargetConfiguration, HostEnvironment, Image,
    KeyboardConfiguration, RenderError, SnapshotConfiguration, View,
};
