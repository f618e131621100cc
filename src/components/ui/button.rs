use dioxus::prelude::*;

use crate::utils::classes::cn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Icon,
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let variant = match variant {
        ButtonVariant::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
        ButtonVariant::Outline => "border border-input bg-transparent hover:bg-accent",
        ButtonVariant::Ghost => "hover:bg-accent/50",
        ButtonVariant::Link => "text-primary underline-offset-4 hover:underline",
    };
    let size = match size {
        ButtonSize::Default => "h-10 px-4 py-2",
        ButtonSize::Icon => "h-10 w-10",
    };
    cn([
        "inline-flex items-center justify-center rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 disabled:pointer-events-none disabled:opacity-50",
        variant,
        size,
        extra,
    ])
}

#[allow(non_snake_case)]
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(into, default = "button".to_string())] button_type: String,
    #[props(into, default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = button_classes(variant, size, &class);
    rsx! {
        button {
            r#type: "{button_type}",
            class: "{class}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
