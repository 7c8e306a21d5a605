//! Keyboard shortcuts on the admin dashboard.

/// The parts of a `keydown` event the dashboard cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Ctrl on Linux/Windows, Cmd on macOS.
    fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardShortcut {
    FocusSearch,
    ClearSearch,
    NewUser,
}

impl DashboardShortcut {
    pub fn prevents_default(&self) -> bool {
        matches!(
            self,
            DashboardShortcut::FocusSearch | DashboardShortcut::NewUser
        )
    }

    pub fn hint(&self) -> &'static str {
        match self {
            DashboardShortcut::FocusSearch => "Search focused! (Ctrl+K)",
            DashboardShortcut::ClearSearch => "Search cleared! (Escape)",
            DashboardShortcut::NewUser => "Loading user creation form...",
        }
    }
}

pub fn resolve_dashboard_shortcut(chord: &KeyChord) -> Option<DashboardShortcut> {
    match chord.key.as_str() {
        "k" | "K" if chord.command() => Some(DashboardShortcut::FocusSearch),
        "n" | "N" if chord.command() => Some(DashboardShortcut::NewUser),
        "Escape" => Some(DashboardShortcut::ClearSearch),
        _ => None,
    }
}
