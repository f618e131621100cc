use dioxus::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::ui::{Badge, Button, Card, CardContent, CardFooter, CardVariant};
use crate::shared::types::Game;
use crate::utils::format::{format_brl, format_odd};

#[allow(non_snake_case)]
#[component]
pub fn GameCard(game: Game, onselect: Option<EventHandler<String>>) -> Element {
    let min_bet = format_brl(game.min_bet);
    let id = game.id.clone();

    rsx! {
        div { class: "w-full max-w-[350px]",
            Card {
                variant: CardVariant::Neon,
                hover_effect: true,
                class: "h-full bg-black/40 backdrop-blur-md border-gray-800 overflow-hidden animate-float",
                CardContent { class: "p-5",
                    div { class: "flex justify-between items-start mb-4",
                        div {
                            h3 { class: "text-lg font-bold text-white mb-1 animate-slide-in", "{game.title}" }
                            Badge { class: "bg-gray-800/80 text-green-400 backdrop-blur-sm", "{game.league}" }
                        }
                    }
                    // Kickoff
                    div { class: "flex items-center gap-4 text-gray-300 text-sm mt-4",
                        div { class: "flex items-center gap-1",
                            Icon { kind: IconKind::Calendar, class: "h-4 w-4 text-green-400 animate-pulse-glow" }
                            span { "{game.date}" }
                        }
                        div { class: "flex items-center gap-1",
                            Icon { kind: IconKind::Clock, class: "h-4 w-4 text-green-400 animate-pulse-glow" }
                            span { "{game.time}" }
                        }
                    }
                    if let Some(odds) = game.odds {
                        div { class: "grid grid-flow-col auto-cols-fr gap-2 mt-4 text-center text-xs",
                            OddCell { label: "Casa", value: odds.home }
                            if let Some(draw) = odds.draw {
                                OddCell { label: "Empate", value: draw }
                            }
                            OddCell { label: "Fora", value: odds.away }
                        }
                    }
                    div { class: "flex items-center gap-1 mt-4 text-amber-400",
                        Icon { kind: IconKind::Trophy, class: "h-4 w-4 animate-pulse-glow" }
                        span { class: "text-sm", "Aposta mínima: " }
                        span { class: "font-bold", "{min_bet}" }
                    }
                }
                CardFooter { class: "p-4 pt-0",
                    Button {
                        class: "w-full bg-green-500 hover:bg-green-600 text-black font-bold transition-all shadow-neon-green",
                        onclick: move |_| {
                            if let Some(handler) = &onselect {
                                handler.call(id.clone());
                            }
                        },
                        span { class: "transition-transform hover:scale-105 active:scale-95", "Ver Bolões" }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn OddCell(label: &'static str, value: f64) -> Element {
    rsx! {
        div { class: "rounded-md bg-gray-800/60 py-1",
            div { class: "text-gray-400", "{label}" }
            div { class: "font-semibold text-white tabular-nums", "{format_odd(value)}" }
        }
    }
}
