use std::fmt;

/// Errors reported by `SeasonSwitcher::initialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitcherError {
    /// No rendering surface was assigned. The switcher disables itself.
    MissingSurface,
    /// The switcher was disabled by an earlier failure and stays disabled.
    Disabled,
}

impl fmt::Display for SwitcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwitcherError::MissingSurface => write!(f, "ground surface not assigned"),
            SwitcherError::Disabled => write!(f, "season switcher is disabled"),
        }
    }
}

impl std::error::Error for SwitcherError {}
