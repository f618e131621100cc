use dioxus::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::state::nav::NavEntry;

pub fn nav_item_classes(active: bool) -> &'static str {
    if active {
        "bg-green-500/20 text-green-400 border-l-2 border-green-500 shadow-neon-green"
    } else {
        "hover:bg-accent/50 border-l-2 border-transparent"
    }
}

#[allow(non_snake_case)]
#[component]
pub fn NavItem(entry: NavEntry, active: bool, onnavigate: Option<EventHandler<()>>) -> Element {
    let tone = nav_item_classes(active);
    let icon_anim = if active { "text-green-400 animate-wiggle" } else { "" };

    rsx! {
        Link {
            to: entry.path,
            class: "w-full block",
            onclick: move |_| {
                if let Some(handler) = &onnavigate {
                    handler.call(());
                }
            },
            div { class: "flex items-center gap-3 p-3 rounded-lg transition-all duration-300 hover:scale-[1.03] hover:translate-x-[3px] active:scale-[0.97] {tone}",
                span { class: "text-xl {icon_anim}", Icon { kind: entry.icon } }
                span { "{entry.label}" }
                if active {
                    span { class: "ml-auto animate-slide-in",
                        Icon { kind: IconKind::ChevronRight, class: "h-4 w-4 text-green-400" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_depends_only_on_flag() {
        assert!(nav_item_classes(true).contains("border-green-500"));
        assert!(nav_item_classes(false).contains("border-transparent"));
        assert_eq!(nav_item_classes(true), nav_item_classes(true));
    }
}
