use dioxus::prelude::*;

use crate::catalog::CatalogHandle;
use crate::pages::landing::GameGrid;
use crate::route::Route;

#[allow(non_snake_case)]
#[component]
pub fn Sport(sport: String) -> Element {
    let catalog = use_context::<CatalogHandle>();
    let nav = navigator();

    let Some(category) = catalog.sport(&sport) else {
        return rsx! {
            div { class: "container mx-auto px-4 py-16 text-center",
                h1 { class: "text-2xl font-bold mb-2", "Esporte não encontrado" }
                p { class: "text-gray-400 mb-6", "Não temos apostas para \"{sport}\"." }
                Link { to: Route::Landing {}, class: "text-green-500 hover:text-green-400", "Voltar para a página inicial" }
            }
        };
    };

    let games: Vec<_> = catalog
        .games()
        .into_iter()
        .filter(|g| g.sport == category.id)
        .collect();

    rsx! {
        div { class: "container mx-auto px-4 pt-8 pb-12",
            h1 { class: "text-3xl font-bold mb-6",
                span { class: "text-green-500", "{category.name}" }
            }
            GameGrid { games, onselect: move |_| { nav.push(Route::Login {}); } }
        }
    }
}
