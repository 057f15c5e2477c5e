//! Transient UI chrome state. Never persisted; a reload resets it.

/// Sidebar visibility flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    sidebar_open: bool,
    mobile_sidebar_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            mobile_sidebar_open: false,
        }
    }
}

impl UiState {
    /// Fresh state: desktop sidebar open, mobile drawer closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Desktop sidebar visibility.
    #[must_use]
    pub const fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Mobile drawer visibility.
    #[must_use]
    pub const fn mobile_sidebar_open(&self) -> bool {
        self.mobile_sidebar_open
    }

    /// Toggle the desktop sidebar.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Toggle the mobile drawer.
    pub fn toggle_mobile_sidebar(&mut self) {
        self.mobile_sidebar_open = !self.mobile_sidebar_open;
    }

    /// Close the mobile drawer, e.g. after a nav click.
    pub fn close_mobile_sidebar(&mut self) {
        self.mobile_sidebar_open = false;
    }
}
