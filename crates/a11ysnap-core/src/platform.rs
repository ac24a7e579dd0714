//! Host environment capabilities.
//!
//! Capability questions are answered here, before dispatch, so a
//! verification entry point can fail deterministically instead of
//! attempting a call the platform cannot serve.

/// Capabilities of the environment the tests are running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostEnvironment {
    /// Whether a host application is present. Accessibility properties
    /// are only populated correctly when tests run inside one.
    pub has_host_application: bool,
    /// Whether the platform can render with inverted colors.
    pub supports_inverted_colors: bool,
}

impl HostEnvironment {
    /// An environment with every capability available.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            has_host_application: true,
            supports_inverted_colors: true,
        }
    }

    /// An environment without a host application.
    #[must_use]
    pub const fn headless() -> Self {
        Self {
            has_host_application: false,
            supports_inverted_colors: false,
        }
    }

    /// Disable inverted-colors support.
    #[must_use]
    pub const fn without_inverted_colors(mut self) -> Self {
        self.supports_inverted_colors = false;
        self
    }
}

impl Default for HostEnvironment {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_environment() {
        let env = HostEnvironment::full();
        assert!(env.has_host_application);
        assert!(env.supports_inverted_colors);
    }

    #[test]
    fn test_headless_environment() {
        let env = HostEnvironment::headless();
        assert!(!env.has_host_application);
    }

    #[test]
    fn test_without_inverted_colors() {
        let env = HostEnvironment::full().without_inverted_colors();
        assert!(env.has_host_application);
        assert!(!env.supports_inverted_colors);
    }
}
