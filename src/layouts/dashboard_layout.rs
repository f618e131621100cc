use dioxus::prelude::*;

use crate::catalog::CatalogHandle;
use crate::components::icon::{Icon, IconKind};
use crate::components::ui::{Avatar, Button, ButtonSize, ButtonVariant};
use crate::components::{NavItem, ThemeToggle, UserSummary};
use crate::route::Route;
use crate::shared::types::UserProfile;
use crate::state::nav::{is_active, NavEntry, DASHBOARD_NAV};
use crate::state::shell::{close_menu, toggle_menu, use_close_menu_on_navigate, SHELL};
use crate::utils::format::format_brl;

#[allow(non_snake_case)]
#[component]
pub fn DashboardLayout() -> Element {
    let catalog = use_context::<CatalogHandle>();
    let user = catalog.user();
    let current = use_route::<Route>().to_string();
    use_close_menu_on_navigate(current.clone());
    let shell = *SHELL.read();

    rsx! {
        div { class: "flex h-screen bg-background",
            // Desktop sidebar
            aside { class: "hidden md:flex flex-col w-64 border-r border-border bg-black/40 backdrop-blur-md shadow-inner-glow animate-slide-in",
                if let Some(user) = user.clone() {
                    UserSummary { user }
                }
                SideNav { current: current.clone(), entries: DASHBOARD_NAV }
                div { class: "px-4 pb-2 flex justify-end",
                    ThemeToggle {}
                }
                LogoutFooter {}
            }

            // Mobile header
            div { class: "md:hidden fixed top-0 left-0 right-0 z-10 bg-black/60 backdrop-blur-md border-b border-green-900/30 shadow-neon-green animate-fade-down",
                div { class: "flex items-center justify-between p-4",
                    if let Some(user) = user.clone() {
                        MobileIdentity { user }
                    }
                    div { class: "flex items-center gap-1",
                        ThemeToggle {}
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            onclick: move |_| toggle_menu(),
                            Icon { kind: IconKind::Menu }
                        }
                    }
                }
            }

            // Mobile drawer
            if shell.menu_open {
                div { class: "md:hidden fixed inset-0 z-40 bg-black/60", onclick: move |_| close_menu() }
                div { class: "md:hidden fixed inset-y-0 left-0 z-50 w-64 flex flex-col bg-background border-r border-border animate-slide-in",
                    if let Some(user) = user.clone() {
                        UserSummary { user, onclose: move |_| close_menu() }
                    }
                    SideNav { current: current.clone(), entries: DASHBOARD_NAV, onnavigate: move |_| close_menu() }
                    LogoutFooter { onnavigate: move |_| close_menu() }
                }
            }

            main { class: "flex-1 overflow-y-auto bg-gradient-to-b from-black/40 to-gray-900/20 animate-fade-in",
                div { class: "md:p-6 p-4 pt-16 md:pt-6 min-h-screen animate-fade-up",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn SideNav(
    current: String,
    entries: &'static [NavEntry],
    onnavigate: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        nav { class: "flex-1 p-4 space-y-1 overflow-y-auto",
            for entry in entries.iter().copied() {
                NavItem {
                    key: "{entry.path}",
                    entry,
                    active: is_active(&current, &entry),
                    onnavigate: move |_| {
                        if let Some(handler) = &onnavigate {
                            handler.call(());
                        }
                    },
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn LogoutFooter(onnavigate: Option<EventHandler<()>>) -> Element {
    rsx! {
        div { class: "p-4 border-t border-border",
            Link {
                to: Route::Landing {},
                onclick: move |_| {
                    if let Some(handler) = &onnavigate {
                        handler.call(());
                    }
                },
                Button { variant: ButtonVariant::Outline, class: "w-full justify-start gap-2",
                    Icon { kind: IconKind::LogOut, class: "h-4 w-4" }
                    span { "Sair" }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn MobileIdentity(user: UserProfile) -> Element {
    let balance = format_brl(user.balance);
    rsx! {
        div { class: "flex items-center gap-3",
            Avatar { src: user.avatar.clone(), alt: user.name.clone(), fallback: user.initial(), class: "h-8 w-8" }
            div {
                div { class: "text-sm font-medium", "{user.name}" }
                div { class: "text-xs text-muted-foreground", "{balance}" }
            }
        }
    }
}
