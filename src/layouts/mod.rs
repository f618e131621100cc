pub mod dashboard_layout;
pub mod main_layout;

pub use dashboard_layout::DashboardLayout;
pub use main_layout::MainLayout;

#[cfg(test)]
mod tests {
    use dioxus::prelude::Readable;
    use crate::route::testing::Harness;
    use crate::route::Route;
    use crate::state::shell::{toggle_menu, toggle_theme, ShellState, Theme, SHELL};

    fn shell(h: &Harness) -> ShellState {
        h.with_app(|| *SHELL.peek())
    }

    #[test]
    fn theme_survives_switching_shells() {
        let mut h = Harness::mount();
        assert_eq!(h.current(), Route::Landing {});
        assert_eq!(shell(&h).theme, Theme::Dark);

        h.with_app(toggle_theme);
        h.settle();
        assert_eq!(shell(&h).theme, Theme::Light);

        h.navigate(Route::DashboardHome {});
        assert_eq!(h.current(), Route::DashboardHome {});
        assert_eq!(shell(&h).theme, Theme::Light);

        h.navigate(Route::Landing {});
        assert_eq!(shell(&h).theme, Theme::Light);

        // and back the other way, toggled from the dashboard sidebar
        h.navigate(Route::Wallet {});
        h.with_app(toggle_theme);
        h.settle();
        h.navigate(Route::Landing {});
        assert_eq!(shell(&h).theme, Theme::Dark);
    }

    #[test]
    fn menu_closes_on_every_route_change() {
        let mut h = Harness::mount();

        // public shell, including the jump into the dashboard
        h.with_app(toggle_menu);
        h.settle();
        assert!(shell(&h).menu_open);
        h.navigate(Route::DashboardHome {});
        assert!(!shell(&h).menu_open);

        // drawer link inside the dashboard
        h.with_app(toggle_menu);
        h.settle();
        assert!(shell(&h).menu_open);
        h.navigate(Route::Wallet {});
        assert_eq!(h.current(), Route::Wallet {});
        assert!(!shell(&h).menu_open);

        // within the public shell
        h.navigate(Route::Landing {});
        h.with_app(toggle_menu);
        h.settle();
        h.navigate(Route::Sport {
            sport: "futebol".into(),
        });
        assert!(!shell(&h).menu_open);
    }

    #[test]
    fn menu_survives_rerender_without_navigation() {
        let mut h = Harness::mount();
        h.with_app(toggle_menu);
        h.rerender_everything();
        assert!(shell(&h).menu_open);
    }
}
