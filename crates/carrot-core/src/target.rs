#![forbid(unsafe_code)]

//! Render-target capability descriptor.
//!
//! A [`TargetInfo`] tells blocks and the serializer what the output device can
//! do. It is resolved once, before a render pass, and never changes during
//! one. Detecting the capabilities of an interactive terminal is the caller's
//! job; the constructors here only cover the fixed cases.
//!
//! | Constructor | Color | Use |
//! |-------------|-------|-----|
//! | [`TargetInfo::file()`] | no | plain files, pipes, logs |
//! | [`TargetInfo::colorized()`] | yes | forced color output |
//! | [`TargetInfo::new()`] | caller | externally detected terminals |

/// Tab width used when none is given.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Capabilities of a render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetInfo {
    /// True if the target understands ANSI color escape sequences.
    pub supports_color: bool,
    /// Width of a single tab, in cells.
    pub tab_width: usize,
}

impl TargetInfo {
    /// Create a descriptor from explicit values.
    #[must_use]
    pub const fn new(supports_color: bool, tab_width: usize) -> Self {
        Self {
            supports_color,
            tab_width,
        }
    }

    /// A target that never receives escape sequences.
    #[must_use]
    pub const fn file() -> Self {
        Self::new(false, DEFAULT_TAB_WIDTH)
    }

    /// A target that always receives escape sequences.
    #[must_use]
    pub const fn colorized() -> Self {
        Self::new(true, DEFAULT_TAB_WIDTH)
    }

    /// Replace the tab width.
    #[must_use]
    pub const fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }
}

impl Default for TargetInfo {
    fn default() -> Self {
        Self::file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_target_has_no_color() {
        let target = TargetInfo::file();
        assert!(!target.supports_color);
        assert_eq!(target.tab_width, DEFAULT_TAB_WIDTH);
    }

    #[test]
    fn colorized_target_forces_color() {
        assert!(TargetInfo::colorized().supports_color);
    }

    #[test]
    fn tab_width_builder() {
        let target = TargetInfo::colorized().with_tab_width(8);
        assert_eq!(target, TargetInfo::new(true, 8));
    }

    #[test]
    fn default_is_file() {
        assert_eq!(TargetInfo::default(), TargetInfo::file());
    }
}
