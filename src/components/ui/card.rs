use dioxus::prelude::*;

use crate::utils::classes::cn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Floating,
    Glass,
    Neon,
}

impl CardVariant {
    pub fn classes(self) -> &'static str {
        match self {
            CardVariant::Default => "shadow-md hover:shadow-lg",
            CardVariant::Floating => "shadow-xl hover:shadow-2xl translate-y-0 hover:-translate-y-1",
            CardVariant::Glass => "bg-card/80 backdrop-blur-md border-white/10 shadow-lg",
            CardVariant::Neon => "shadow-neon-green hover:shadow-neon-green-strong border-green-500/30",
        }
    }
}

pub fn card_classes(variant: CardVariant, hover_effect: bool, extra: &str) -> String {
    cn([
        "rounded-xl border bg-card text-card-foreground transition-all duration-300 animate-fade-up",
        variant.classes(),
        if hover_effect {
            "transform transition-transform duration-300 hover:scale-[1.02]"
        } else {
            ""
        },
        extra,
    ])
}

#[allow(non_snake_case)]
#[component]
pub fn Card(
    #[props(default)] variant: CardVariant,
    #[props(default)] hover_effect: bool,
    #[props(into, default)] class: String,
    children: Element,
) -> Element {
    let class = card_classes(variant, hover_effect, &class);
    rsx! {
        div { class: "{class}", {children} }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn CardHeader(#[props(into, default)] class: String, children: Element) -> Element {
    let class = cn(["flex flex-col space-y-1.5 p-6", class.as_str()]);
    rsx! {
        div { class: "{class}", {children} }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn CardTitle(#[props(into, default)] class: String, children: Element) -> Element {
    let class = cn(["font-semibold leading-none tracking-tight animate-fade-in", class.as_str()]);
    rsx! {
        h3 { class: "{class}", {children} }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn CardDescription(#[props(into, default)] class: String, children: Element) -> Element {
    let class = cn(["text-sm text-muted-foreground animate-fade-in", class.as_str()]);
    rsx! {
        p { class: "{class}", {children} }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn CardContent(#[props(into, default)] class: String, children: Element) -> Element {
    let class = cn(["p-6 pt-0", class.as_str()]);
    rsx! {
        div { class: "{class}", {children} }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn CardFooter(#[props(into, default)] class: String, children: Element) -> Element {
    let class = cn(["flex items-center p-6 pt-0", class.as_str()]);
    rsx! {
        div { class: "{class}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_effect_adds_scale() {
        let plain = card_classes(CardVariant::Default, false, "");
        let hover = card_classes(CardVariant::Default, true, "");
        assert!(!plain.contains("hover:scale"));
        assert!(hover.contains("hover:scale-[1.02]"));
    }

    #[test]
    fn extra_classes_come_last() {
        let c = card_classes(CardVariant::Neon, false, "h-full");
        assert!(c.contains("border-green-500/30"));
        assert!(c.ends_with("h-full"));
    }
}
