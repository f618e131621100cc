use dioxus::prelude::*;

use crate::catalog::CatalogHandle;
use crate::components::icon::{Icon, IconKind};
use crate::components::ui::{Button, ButtonVariant, Card, CardContent};
use crate::components::{BannerCarousel, GameCard};
use crate::route::Route;
use crate::shared::types::Game;
use crate::state::shell::SHELL;
use crate::utils::classes::pick;

struct Feature {
    icon: IconKind,
    title: &'static str,
    body: &'static str,
}

static FEATURES: [Feature; 3] = [
    Feature {
        icon: IconKind::Coins,
        title: "Melhores Odds",
        body: "Oferecemos as melhores odds do mercado para maximizar seus ganhos em cada aposta.",
    },
    Feature {
        icon: IconKind::Shield,
        title: "Segurança Garantida",
        body: "Sua segurança é nossa prioridade. Utilizamos criptografia avançada para proteger seus dados e transações.",
    },
    Feature {
        icon: IconKind::Zap,
        title: "Saques Rápidos",
        body: "Processamos seus saques em até 24 horas, para que você possa aproveitar seus ganhos rapidamente.",
    },
];

#[allow(non_snake_case)]
#[component]
pub fn Landing() -> Element {
    let catalog = use_context::<CatalogHandle>();
    let site = catalog.site();
    let banners = catalog.banners();
    let games = catalog.games();
    let dark = SHELL.read().theme.is_dark();
    let brand = site.brand_primary.clone();
    let lead = pick(dark, "text-gray-300", "text-gray-600");

    rsx! {
        div { class: "container mx-auto px-4 pt-8 pb-12",
            // Banners
            section { class: "mb-12",
                BannerCarousel { banners, interval_ms: site.carousel_interval_ms }
            }

            PopularGames { games }

            // Features
            section { class: "mb-12",
                h2 { class: "text-2xl font-bold mb-6",
                    span { class: "text-green-500", "Por que" }
                    " escolher a {brand}?"
                }
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                    for (i, feature) in FEATURES.iter().enumerate() {
                        div { key: "{i}", class: "animate-fade-up", style: "animation-delay:{(i + 1) * 100}ms",
                            Card { class: pick(dark, "h-full bg-gray-800/50 border-gray-700", "h-full bg-white border-gray-200"),
                                CardContent { class: "pt-6",
                                    div { class: "rounded-full bg-green-500/20 p-3 w-12 h-12 flex items-center justify-center mb-4",
                                        Icon { kind: feature.icon, class: "h-6 w-6 text-green-500" }
                                    }
                                    h3 { class: "text-xl font-bold mb-2", "{feature.title}" }
                                    p { class: pick(dark, "text-gray-400", "text-gray-600"), "{feature.body}" }
                                }
                            }
                        }
                    }
                }
            }

            // Call to action
            section {
                class: pick(
                    dark,
                    "rounded-xl p-8 md:p-12 animate-fade-up bg-gradient-to-r from-green-900/40 to-gray-800/40 border border-green-800/50",
                    "rounded-xl p-8 md:p-12 animate-fade-up bg-gradient-to-r from-green-50 to-gray-50 border border-green-100",
                ),
                div { class: "max-w-3xl mx-auto text-center",
                    h2 { class: "text-2xl md:text-3xl font-bold mb-4", "Pronto para começar a apostar?" }
                    p { class: "text-lg mb-6 {lead}",
                        "Crie sua conta agora e ganhe um bônus de boas-vindas de até R$500 no seu primeiro depósito!"
                    }
                    div { class: "flex flex-col sm:flex-row justify-center gap-4",
                        Link { to: Route::Register {},
                            Button { class: "bg-green-500 hover:bg-green-600 text-white w-full sm:w-auto", "Criar Conta" }
                        }
                        Link { to: Route::Login {},
                            Button {
                                variant: ButtonVariant::Outline,
                                class: "border-green-500 text-green-500 hover:bg-green-500 hover:text-white w-full sm:w-auto",
                                "Já tenho uma conta"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Grid of game cards; selecting one sends the visitor to sign in.
#[allow(non_snake_case)]
#[component]
pub fn PopularGames(games: Vec<Game>) -> Element {
    let nav = navigator();

    rsx! {
        section { class: "mb-12",
            div { class: "flex justify-between items-center mb-6",
                h2 { class: "text-2xl font-bold",
                    span { class: "text-green-500", "Jogos" }
                    " Populares"
                }
                Link {
                    to: Route::Sport { sport: "futebol".into() },
                    class: "text-green-500 hover:text-green-400 flex items-center",
                    "Ver Todos"
                    Icon { kind: IconKind::ChevronRight, class: "h-4 w-4 ml-1" }
                }
            }
            GameGrid { games, onselect: move |_| { nav.push(Route::Login {}); } }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn GameGrid(games: Vec<Game>, onselect: Option<EventHandler<String>>) -> Element {
    if games.is_empty() {
        return rsx! {
            p { class: "text-gray-400", "Nenhum jogo disponível no momento." }
        };
    }
    rsx! {
        div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6",
            for (i, game) in games.into_iter().enumerate() {
                div { key: "{game.id}", class: "animate-fade-up", style: "animation-delay:{i * 100}ms",
                    GameCard {
                        game: game.clone(),
                        onselect: move |id: String| {
                            if let Some(handler) = &onselect {
                                handler.call(id);
                            }
                        },
                    }
                }
            }
        }
    }
}
