use dioxus::prelude::*;

use crate::catalog::CatalogHandle;
use crate::components::icon::{Icon, IconKind};
use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::components::{Brand, SiteFooter, ThemeToggle};
use crate::route::Route;
use crate::state::shell::{close_menu, toggle_menu, use_close_menu_on_navigate, SHELL};

/// Public pages: sticky header with sport links, auth buttons and theme
/// toggle, collapsible mobile menu, footer.
#[allow(non_snake_case)]
#[component]
pub fn MainLayout() -> Element {
    let catalog = use_context::<CatalogHandle>();
    let site = catalog.site();
    let sports = catalog.sports();
    let links = catalog.footer_links();
    use_close_menu_on_navigate(use_route::<Route>().to_string());

    let shell = *SHELL.read();
    let dark = shell.theme.is_dark();
    let surface = if dark {
        "bg-gray-900 text-white"
    } else {
        "bg-gray-100 text-gray-900"
    };

    rsx! {
        div { class: "min-h-screen flex flex-col {surface}",
            // Navbar
            header { class: "sticky top-0 z-50 backdrop-blur-md bg-black/80 border-b border-gray-800",
                div { class: "container mx-auto px-4 py-3",
                    div { class: "flex items-center justify-between",
                        Link { to: Route::Landing {}, class: "flex items-center", onclick: move |_| close_menu(),
                            Brand { primary: site.brand_primary.clone(), accent: site.brand_accent.clone() }
                        }

                        // Desktop
                        div { class: "hidden md:flex items-center space-x-6",
                            nav { class: "flex space-x-4",
                                for sport in sports.iter() {
                                    Link {
                                        key: "{sport.id}",
                                        to: sport.path(),
                                        class: "text-gray-300 hover:text-green-400 transition-colors",
                                        "{sport.name}"
                                    }
                                }
                            }
                            div { class: "flex items-center space-x-2",
                                Link { to: Route::Login {},
                                    Button { variant: ButtonVariant::Outline, class: "border-green-500 text-green-400 hover:bg-green-500/10", "Entrar" }
                                }
                                Link { to: Route::Register {},
                                    Button { class: "bg-green-500 text-black hover:bg-green-400", "Criar Conta" }
                                }
                                ThemeToggle { class: "ml-2" }
                            }
                        }

                        // Mobile
                        div { class: "md:hidden flex items-center",
                            ThemeToggle { class: "mr-2" }
                            Button {
                                variant: ButtonVariant::Ghost,
                                size: ButtonSize::Icon,
                                class: "text-gray-300",
                                onclick: move |_| toggle_menu(),
                                if shell.menu_open {
                                    Icon { kind: IconKind::X, class: "h-6 w-6" }
                                } else {
                                    Icon { kind: IconKind::Menu, class: "h-6 w-6" }
                                }
                            }
                        }
                    }
                }

                if shell.menu_open {
                    div { class: "md:hidden bg-gray-900/95 backdrop-blur-sm border-b border-gray-800 animate-expand",
                        div { class: "container mx-auto px-4 py-3",
                            nav { class: "flex flex-col space-y-3",
                                for sport in sports.iter() {
                                    Link {
                                        key: "{sport.id}",
                                        to: sport.path(),
                                        class: "text-gray-300 hover:text-green-400 transition-colors py-2",
                                        onclick: move |_| close_menu(),
                                        "{sport.name}"
                                    }
                                }
                            }
                            div { class: "flex flex-col space-y-2 mt-4 pb-2",
                                Link { to: Route::Login {}, onclick: move |_| close_menu(),
                                    Button { variant: ButtonVariant::Outline, class: "w-full border-green-500 text-green-400 hover:bg-green-500/10", "Entrar" }
                                }
                                Link { to: Route::Register {}, onclick: move |_| close_menu(),
                                    Button { class: "w-full bg-green-500 text-black hover:bg-green-400", "Criar Conta" }
                                }
                            }
                        }
                    }
                }
            }

            main { class: "flex-grow", Outlet::<Route> {} }

            SiteFooter { site: site.clone(), sports: sports.clone(), links, dark }
        }
    }
}
