pub mod banner_carousel;
pub mod game_card;
pub mod icon;
pub mod nav_item;
pub mod site_footer;
pub mod theme_toggle;
pub mod ui;
pub mod user_summary;

use dioxus::prelude::*;

pub use banner_carousel::BannerCarousel;
pub use game_card::GameCard;
pub use icon::{Icon, IconKind};
pub use nav_item::NavItem;
pub use site_footer::SiteFooter;
pub use theme_toggle::ThemeToggle;
pub use user_summary::UserSummary;

#[allow(non_snake_case)]
#[component]
pub fn Brand(#[props(into)] primary: String, #[props(into)] accent: String) -> Element {
    rsx! {
        span { class: "text-2xl font-bold text-green-400 animate-slide-in",
            "{primary}"
            span { class: "text-yellow-400", "{accent}" }
        }
    }
}
