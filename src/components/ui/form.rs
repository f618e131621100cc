use dioxus::prelude::*;

use crate::utils::classes::cn;

#[allow(non_snake_case)]
#[component]
pub fn Input(
    #[props(into)] id: String,
    #[props(into, default = "text".to_string())] input_type: String,
    #[props(into, default)] placeholder: String,
    #[props(into, default)] class: String,
    #[props(into)] value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let class = cn([
        "flex h-10 w-full rounded-md border border-input bg-background px-3 py-2 text-sm placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-green-500",
        class.as_str(),
    ]);
    rsx! {
        input {
            id: "{id}",
            r#type: "{input_type}",
            placeholder: "{placeholder}",
            class: "{class}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Label(#[props(into)] html_for: String, children: Element) -> Element {
    rsx! {
        label { r#for: "{html_for}", class: "text-sm font-medium leading-none", {children} }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Alert(#[props(default)] destructive: bool, children: Element) -> Element {
    let tone = if destructive {
        "border-red-500/50 text-red-400 bg-red-500/10"
    } else {
        "border-border text-foreground"
    };
    rsx! {
        div { role: "alert", class: "relative w-full rounded-lg border p-4 text-sm mb-4 {tone}", {children} }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Badge(#[props(into, default)] class: String, children: Element) -> Element {
    let class = cn([
        "inline-flex items-center rounded-full border border-transparent px-2.5 py-0.5 text-xs font-semibold",
        class.as_str(),
    ]);
    rsx! {
        span { class: "{class}", {children} }
    }
}
