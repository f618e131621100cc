use dioxus::prelude::*;

use crate::catalog::{CatalogHandle, StaticCatalog};
use crate::route::Route;
use crate::state::shell::SHELL;
use crate::{FAVICON, TAILWIND_CSS};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    // Demo content for every page below
    use_context_provider(|| CatalogHandle::new(StaticCatalog::demo()));

    let theme = SHELL.read().theme;

    // Mirror the marker on <html> so the page background follows the theme
    use_effect(move || {
        let dark = SHELL.read().theme.is_dark();
        let _ = document::eval(&format!(
            "document.documentElement.classList.toggle('dark', {dark});"
        ));
    });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Meta { name: "theme-color", content: "#030712" } // gray-950
        document::Meta { name: "color-scheme", content: theme.color_scheme() }
        div { class: "{theme.root_class()}",
            Router::<Route> {}
        }
    }
}
