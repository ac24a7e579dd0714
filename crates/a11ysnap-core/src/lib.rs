//! Core types and collaborator contracts for accessibility snapshot
//! testing.
//!
//! This crate defines the seam between a GUI toolkit and the
//! accessibility snapshot pipeline: the snapshottable [`View`] trait,
//! the [`AccessibilityRenderer`] contract the opaque pipeline
//! implements, the configuration handed across that seam, and the
//! [`HostEnvironment`] capability model the verification layer
//! consults before dispatch.
//!
//! The verification entry points and assertion macros live in the
//! `a11ysnap-test` crate.

mod config;
mod element;
mod geometry;
mod image;
mod platform;
mod render;
mod view;

pub use config::{
    ActivationPointDisplayMode, Color, ColorRenderingMode, HitTargetConfiguration,
    KeyboardConfiguration, SnapshotConfiguration, DEFAULT_MARKER_PALETTE,
};
pub use element::AccessibilityElement;
pub use geometry::{Point, Rect, Size};
pub use image::Image;
pub use platform::HostEnvironment;
pub use render::{AccessibilityRenderer, RenderError};
pub use view::View;
