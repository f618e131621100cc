use dioxus::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::state::shell::{toggle_theme, SHELL};

#[allow(non_snake_case)]
#[component]
pub fn ThemeToggle(#[props(into, default)] class: String) -> Element {
    let dark = SHELL.read().theme.is_dark();
    // show the theme you would switch to
    let icon = if dark { IconKind::Sun } else { IconKind::Moon };
    let label = if dark { "Tema claro" } else { "Tema escuro" };

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Icon,
            class: "rounded-full text-gray-300 hover:text-yellow-400 {class}",
            onclick: move |_| toggle_theme(),
            span { class: "sr-only", "{label}" }
            Icon { kind: icon }
        }
    }
}
