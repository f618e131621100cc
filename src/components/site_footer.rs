use dioxus::prelude::*;

use crate::components::Brand;
use crate::shared::types::{FooterLink, SiteInfo, SportCategory};
use crate::utils::format::current_year;

#[allow(non_snake_case)]
#[component]
pub fn SiteFooter(
    site: SiteInfo,
    sports: Vec<SportCategory>,
    links: Vec<FooterLink>,
    dark: bool,
) -> Element {
    let year = current_year();
    let (surface, muted) = if dark {
        ("bg-gray-900 border-gray-800", "text-gray-400")
    } else {
        ("bg-gray-100 border-gray-300", "text-gray-600")
    };

    rsx! {
        footer { class: "border-t {surface}",
            div { class: "container mx-auto px-4 py-8",
                div { class: "grid grid-cols-1 md:grid-cols-4 gap-8",
                    // Brand
                    div {
                        div { class: "mb-4", Brand { primary: site.brand_primary.clone(), accent: site.brand_accent.clone() } }
                        p { class: "{muted} text-sm", "{site.tagline}" }
                    }
                    div {
                        h3 { class: "text-lg font-semibold mb-4", "Esportes" }
                        ul { class: "space-y-2 {muted} text-sm",
                            for sport in sports.iter() {
                                li { key: "{sport.id}",
                                    Link { to: sport.path(), class: "hover:text-green-400 transition-colors", "{sport.name}" }
                                }
                            }
                        }
                    }
                    div {
                        h3 { class: "text-lg font-semibold mb-4", "Links Úteis" }
                        ul { class: "space-y-2 {muted} text-sm",
                            for link in links.iter() {
                                li { key: "{link.path}",
                                    Link { to: link.path.clone(), class: "hover:text-green-400 transition-colors", "{link.name}" }
                                }
                            }
                        }
                    }
                    div {
                        h3 { class: "text-lg font-semibold mb-4", "Contato" }
                        ul { class: "space-y-2 {muted} text-sm",
                            if !site.contact_email.is_empty() { li { "Email: {site.contact_email}" } }
                            if !site.contact_phone.is_empty() { li { "Telefone: {site.contact_phone}" } }
                            if !site.service_hours.is_empty() { li { "Horário: {site.service_hours}" } }
                        }
                    }
                }
                div { class: "mt-8 pt-6 border-t border-gray-800 text-center text-gray-500 text-sm",
                    p { "© {year} {site.brand_primary}{site.brand_accent}. Todos os direitos reservados." }
                    p { class: "mt-2", "Proibido para menores de 18 anos. Jogue com responsabilidade." }
                }
            }
        }
    }
}
