use dioxus::prelude::*;

use crate::layouts::{DashboardLayout, MainLayout};
use crate::pages::{
    About, Affiliates, Contact, DashboardHome, Faq, Gamification, History, Landing, Login,
    MyPools, NotFound, Privacy, Register, ResponsibleGaming, Settings, Sport, Support, Terms,
    Wallet,
};

pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/cadastro";
    pub const DASHBOARD: &str = "/dashboard";
}

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        Landing {},
        #[route("/esportes/:sport")]
        Sport { sport: String },
        #[route("/sobre")]
        About {},
        #[route("/termos")]
        Terms {},
        #[route("/privacidade")]
        Privacy {},
        #[route("/jogo-responsavel")]
        ResponsibleGaming {},
        #[route("/contato")]
        Contact {},
        #[route("/faq")]
        Faq {},
    #[end_layout]

    #[route("/login")]
    Login {},
    #[route("/cadastro")]
    Register {},

    #[layout(DashboardLayout)]
        #[route("/dashboard")]
        DashboardHome {},
        #[route("/dashboard/meus-boloes")]
        MyPools {},
        #[route("/dashboard/carteira")]
        Wallet {},
        #[route("/dashboard/afiliados")]
        Affiliates {},
        #[route("/dashboard/historico")]
        History {},
        #[route("/dashboard/gamificacao")]
        Gamification {},
        #[route("/dashboard/suporte")]
        Support {},
        #[route("/dashboard/configuracoes")]
        Settings {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::nav::DASHBOARD_NAV;
    use std::str::FromStr;

    #[test]
    fn named_paths_round_trip() {
        assert_eq!(Route::Landing {}.to_string(), paths::HOME);
        assert_eq!(Route::Login {}.to_string(), paths::LOGIN);
        assert_eq!(Route::Register {}.to_string(), paths::REGISTER);
        assert_eq!(Route::DashboardHome {}.to_string(), paths::DASHBOARD);
    }

    #[test]
    fn dashboard_nav_points_at_real_routes() {
        for entry in DASHBOARD_NAV {
            let route = Route::from_str(entry.path).unwrap();
            assert!(!matches!(route, Route::NotFound { .. }), "{}", entry.path);
            assert_eq!(route.to_string(), entry.path);
        }
    }

    #[test]
    fn sport_slug_is_captured() {
        assert_eq!(
            Route::from_str("/esportes/volei").unwrap(),
            Route::Sport {
                sport: "volei".into()
            }
        );
    }

    #[test]
    fn unknown_path_falls_through() {
        assert!(matches!(
            Route::from_str("/boloes").unwrap(),
            Route::NotFound { .. }
        ));
    }
}

/// A headless app mounted on an in-memory history, for tests that drive the
/// router and the shell globals.
#[cfg(test)]
pub(crate) mod testing {
    use std::rc::Rc;

    use dioxus::dioxus_core::NoOpMutations;
    use dioxus::history::{History, MemoryHistory};
    use dioxus::prelude::*;

    use super::Route;
    use crate::catalog::{CatalogHandle, StaticCatalog};

    #[allow(non_snake_case)]
    fn HeadlessApp() -> Element {
        use_context_provider(|| Rc::new(MemoryHistory::default()) as Rc<dyn History>);
        use_context_provider(|| CatalogHandle::new(StaticCatalog::demo()));
        rsx! { Router::<Route> {} }
    }

    pub struct Harness {
        dom: VirtualDom,
    }

    impl Harness {
        pub fn mount() -> Self {
            let mut dom = VirtualDom::new(HeadlessApp);
            dom.rebuild_in_place();
            let mut harness = Harness { dom };
            harness.settle();
            harness
        }

        /// Runs `f` from the app scope, where the history and the router resolve.
        pub fn with_app<O>(&self, f: impl FnOnce() -> O) -> O {
            self.dom.in_runtime(|| ScopeId::APP.in_runtime(f))
        }

        /// Flushes pending renders and the effects they queue.
        pub fn settle(&mut self) {
            for _ in 0..8 {
                self.dom.render_immediate(&mut NoOpMutations);
            }
        }

        pub fn navigate(&mut self, to: Route) {
            self.with_app(|| {
                root_router().expect("router is mounted").push(to);
            });
            self.settle();
        }

        pub fn current(&self) -> Route {
            self.with_app(|| root_router().expect("router is mounted").current::<Route>())
        }

        /// Marks every live scope dirty and renders again.
        pub fn rerender_everything(&mut self) {
            for id in 0..64 {
                self.dom.mark_dirty(ScopeId(id));
            }
            self.settle();
        }
    }
}
