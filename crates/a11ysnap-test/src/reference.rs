//! Reference snapshot stores and tolerance-based comparison.

use std::cell::Cell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use a11ysnap_core::Image;

use crate::failure;
use crate::tolerances::Tolerances;

/// Environment variable that enables record mode for the process.
pub const RECORD_ENV_VAR: &str = "A11YSNAP_RECORD";

thread_local! {
    static RECORD_MODE: Cell<bool> = const { Cell::new(false) };
}

/// Run `f` with record mode enabled on the current thread.
///
/// While record mode is active, comparisons against a missing
/// reference record the actual image as the new reference and pass.
/// The previous mode is restored even when `f` panics, so a failing
/// recorded test does not leave the thread in record mode.
pub fn with_record_mode<T>(f: impl FnOnce() -> T) -> T {
    struct Restore(bool);

    impl Drop for Restore {
        fn drop(&mut self) {
            RECORD_MODE.with(|cell| cell.set(self.0));
        }
    }

    let _restore = Restore(RECORD_MODE.with(|cell| cell.replace(true)));
    f()
}

/// Whether record mode is active, either scoped on this thread or
/// enabled process-wide through [`RECORD_ENV_VAR`].
#[must_use]
pub fn is_record_mode() -> bool {
    RECORD_MODE.with(Cell::get) || std::env::var_os(RECORD_ENV_VAR).is_some()
}

/// Compare an actual image against a reference under the given
/// tolerances. Returns `None` on a match, or a description of the
/// mismatch.
///
/// A pixel counts as changed when any channel's absolute difference,
/// as a fraction of the channel range, exceeds `per_pixel`. The image
/// counts as changed when the fraction of changed pixels exceeds
/// `overall`.
#[must_use]
pub fn compare_images(
    name: &str,
    reference: &Image,
    actual: &Image,
    tolerances: Tolerances,
) -> Option<String> {
    if reference.width != actual.width || reference.height != actual.height {
        return Some(failure::dimension_mismatch(
            name,
            (reference.width, reference.height),
            (actual.width, actual.height),
        ));
    }

    let total = reference.pixel_count();
    if total == 0 {
        return None;
    }

    let mut changed = 0usize;
    for (a, b) in reference
        .as_bytes()
        .chunks_exact(4)
        .zip(actual.as_bytes().chunks_exact(4))
    {
        let max_delta = a
            .iter()
            .zip(b.iter())
            .map(|(&x, &y)| x.abs_diff(y))
            .max()
            .unwrap_or(0);
        if f64::from(max_delta) / 255.0 > tolerances.per_pixel {
            changed += 1;
        }
    }

    let changed_fraction = changed as f64 / total as f64;
    if changed_fraction > tolerances.overall {
        Some(failure::pixel_mismatch(
            name,
            changed_fraction,
            tolerances.overall,
        ))
    } else {
        None
    }
}

/// A store of named reference snapshots.
pub trait ReferenceStore {
    /// Compare `actual` against the reference named `name`.
    ///
    /// Returns `None` when the snapshot matches. When no reference
    /// exists and record mode is active, records `actual` as the new
    /// reference and passes; otherwise returns a failure description.
    fn compare(&mut self, name: &str, actual: &Image, tolerances: Tolerances) -> Option<String>;

    /// Record `actual` as the reference named `name`, replacing any
    /// existing reference.
    fn record(&mut self, name: &str, actual: &Image);
}

/// A hermetic, in-memory reference store.
#[derive(Debug, Default)]
pub struct InMemoryReferenceStore {
    references: HashMap<String, Image>,
    record: bool,
}

impl InMemoryReferenceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a named reference.
    #[must_use]
    pub fn with_reference(mut self, name: impl Into<String>, image: Image) -> Self {
        self.references.insert(name.into(), image);
        self
    }

    /// Enable record mode for this store regardless of the thread or
    /// process mode.
    #[must_use]
    pub fn with_record_enabled(mut self, record: bool) -> Self {
        self.record = record;
        self
    }

    /// Whether a reference with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.references.contains_key(name)
    }
}

impl ReferenceStore for InMemoryReferenceStore {
    fn compare(&mut self, name: &str, actual: &Image, tolerances: Tolerances) -> Option<String> {
        match self.references.get(name) {
            Some(reference) => compare_images(name, reference, actual, tolerances),
            None if self.record || is_record_mode() => {
                self.record(name, actual);
                None
            }
            None => Some(failure::missing_reference(name)),
        }
    }

    fn record(&mut self, name: &str, actual: &Image) {
        log::info!("recorded reference snapshot '{name}'");
        self.references.insert(name.to_string(), actual.clone());
    }
}

/// A reference store backed by PNG files in a directory.
///
/// References are stored as `<directory>/<name>.png`. IO and decoding
/// problems are reported as comparison failures; the verification
/// taxonomy is binary, so there is no separate error channel.
#[derive(Debug)]
pub struct FileReferenceStore {
    directory: PathBuf,
    record: bool,
}

impl FileReferenceStore {
    /// Create a store rooted at `directory`.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            record: false,
        }
    }

    /// Enable record mode for this store regardless of the thread or
    /// process mode.
    #[must_use]
    pub fn with_record_enabled(mut self, record: bool) -> Self {
        self.record = record;
        self
    }

    /// The path of the reference named `name`.
    #[must_use]
    pub fn reference_path(&self, name: &str) -> PathBuf {
        self.directory.join(format!("{name}.png"))
    }

    fn load(&self, path: &Path) -> Result<Image, String> {
        let decoded = image::open(path)
            .map_err(|e| format!("Failed to load reference snapshot {}: {e}", path.display()))?
            .to_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(Image {
            width,
            height,
            data: decoded.into_raw(),
        })
    }

    fn save(&self, path: &Path, actual: &Image) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
        let buffer =
            image::RgbaImage::from_raw(actual.width, actual.height, actual.data.clone())
                .ok_or_else(|| "Snapshot buffer does not match its dimensions".to_string())?;
        buffer
            .save(path)
            .map_err(|e| format!("Failed to write reference snapshot {}: {e}", path.display()))
    }
}

impl ReferenceStore for FileReferenceStore {
    fn compare(&mut self, name: &str, actual: &Image, tolerances: Tolerances) -> Option<String> {
        let path = self.reference_path(name);
        if path.exists() {
            log::debug!("comparing snapshot '{name}' against {}", path.display());
            match self.load(&path) {
                Ok(reference) => compare_images(name, &reference, actual, tolerances),
                Err(description) => Some(description),
            }
        } else if self.record || is_record_mode() {
            self.record(name, actual);
            None
        } else {
            Some(failure::missing_reference(name))
        }
    }

    fn record(&mut self, name: &str, actual: &Image) {
        let path = self.reference_path(name);
        match self.save(&path, actual) {
            Ok(()) => log::info!("recorded reference snapshot {}", path.display()),
            Err(description) => log::warn!("{description}"),
        }
    }
}
