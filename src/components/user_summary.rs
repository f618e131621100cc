use dioxus::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::ui::{
    Avatar, Button, ButtonSize, ButtonVariant, Card, CardContent, CardVariant, Progress,
};
use crate::shared::types::UserProfile;
use crate::utils::format::format_brl;

/// Avatar, level, XP bar and balance, shown at the top of the dashboard sidebar.
#[allow(non_snake_case)]
#[component]
pub fn UserSummary(user: UserProfile, onclose: Option<EventHandler<MouseEvent>>) -> Element {
    let balance = format_brl(user.balance);
    let xp = user.xp.get();

    rsx! {
        div { class: "p-4 border-b border-border",
            div { class: "flex items-center gap-3",
                Avatar { src: user.avatar.clone(), alt: user.name.clone(), fallback: user.initial() }
                div {
                    h3 { class: "font-medium", "{user.name}" }
                    div { class: "text-xs text-muted-foreground", "Nível {user.level}" }
                }
                if let Some(handler) = onclose {
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        class: "ml-auto",
                        onclick: move |evt| handler.call(evt),
                        Icon { kind: IconKind::X, class: "h-4 w-4" }
                    }
                }
            }
            div { class: "mt-3 animate-fade-in",
                div { class: "flex justify-between text-xs mb-1",
                    span { "XP" }
                    span { "{xp}%" }
                }
                Progress { value: user.xp, class: "h-2 bg-muted/30" }
            }
            Card {
                variant: CardVariant::Neon,
                class: "mt-3 bg-black/40 backdrop-blur-md border-green-800/50",
                CardContent { class: "p-3",
                    div { class: "text-xs text-muted-foreground animate-fade-in", "Saldo disponível" }
                    div { class: "text-xl font-semibold text-green-400 animate-fade-up", "{balance}" }
                }
            }
        }
    }
}
