//! Chrome state shared by every page shell.
//!
//! Both `MainLayout` and `DashboardLayout` read and write the same
//! [`SHELL`] signal, so a theme picked on the landing page is still in
//! effect inside the dashboard.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Class placed on the app root; tailwind's `dark:` variants key off it.
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "",
        }
    }

    pub fn color_scheme(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub theme: Theme,
    pub menu_open: bool,
}

impl ShellState {
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

pub static SHELL: GlobalSignal<ShellState> = GlobalSignal::new(ShellState::default);

pub fn toggle_theme() {
    let mut shell = SHELL.write();
    shell.toggle_theme();
    debug!("[shell] theme -> {:?}", shell.theme);
}

pub fn toggle_menu() {
    let mut shell = SHELL.write();
    shell.toggle_menu();
    debug!("[shell] menu open: {}", shell.menu_open);
}

pub fn close_menu() {
    // avoid waking subscribers when nothing changes
    if SHELL.peek().menu_open {
        SHELL.write().close_menu();
        debug!("[shell] menu closed");
    }
}

/// Closes the mobile menu each time the shell renders a different `path`,
/// however the navigation happened (link, back button, redirect).
pub fn use_close_menu_on_navigate(path: String) {
    use_effect(use_reactive(&path, |_| close_menu()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark_with_menu_closed() {
        let s = ShellState::default();
        assert_eq!(s.theme, Theme::Dark);
        assert!(!s.menu_open);
    }

    #[test]
    fn double_toggle_restores_theme() {
        for start in [Theme::Dark, Theme::Light] {
            let mut s = ShellState {
                theme: start,
                menu_open: false,
            };
            s.toggle_theme();
            assert_ne!(s.theme, start);
            s.toggle_theme();
            assert_eq!(s.theme, start);
        }
    }

    #[test]
    fn root_marker_only_in_dark() {
        assert_eq!(Theme::Dark.root_class(), "dark");
        assert_eq!(Theme::Light.root_class(), "");
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut s = ShellState::default();
        s.toggle_menu();
        assert!(s.menu_open);
        s.close_menu();
        s.close_menu();
        assert!(!s.menu_open);
    }
}
