use dioxus::prelude::*;

use crate::shared::types::Percentage;
use crate::utils::classes::cn;

#[allow(non_snake_case)]
#[component]
pub fn Progress(value: Percentage, #[props(into, default)] class: String) -> Element {
    let class = cn(["relative w-full overflow-hidden rounded-full", class.as_str()]);
    let width = value.get();
    rsx! {
        div { class: "{class}", role: "progressbar", "aria-valuenow": "{width}", "aria-valuemin": "0", "aria-valuemax": "100",
            div { class: "h-full bg-green-500 rounded-full shadow-neon-green animate-grow", style: "width:{width}%" }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Avatar(
    #[props(into)] src: String,
    #[props(into)] alt: String,
    #[props(into)] fallback: String,
    #[props(into, default = "h-10 w-10".to_string())] class: String,
) -> Element {
    let mut failed = use_signal(|| false);
    let class = cn(["relative flex shrink-0 overflow-hidden rounded-full bg-muted", class.as_str()]);
    rsx! {
        span { class: "{class}",
            if *failed.read() || src.is_empty() {
                span { class: "flex h-full w-full items-center justify-center text-sm font-medium", "{fallback}" }
            } else {
                img { class: "aspect-square h-full w-full", src: "{src}", alt: "{alt}", onerror: move |_| failed.set(true) }
            }
        }
    }
}
