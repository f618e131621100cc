use dioxus::prelude::*;

use crate::catalog::CatalogHandle;
use crate::components::icon::Icon;
use crate::components::ui::{Card, CardContent, CardVariant};
use crate::pages::landing::GameGrid;
use crate::state::nav::DASHBOARD_NAV;
use crate::utils::format::format_brl;

#[allow(non_snake_case)]
#[component]
pub fn DashboardHome() -> Element {
    let catalog = use_context::<CatalogHandle>();
    let games = catalog.games();
    let greeting = match catalog.user() {
        Some(u) => format!("Olá, {}!", u.name),
        None => "Olá!".to_string(),
    };
    let balance = catalog.user().map(|u| format_brl(u.balance));

    rsx! {
        div { class: "space-y-8",
            div {
                h1 { class: "text-3xl font-bold", "{greeting}" }
                p { class: "text-muted-foreground", "Confira os jogos em destaque e monte seus bolões." }
            }
            if let Some(balance) = balance {
                Card { variant: CardVariant::Neon, class: "max-w-sm bg-black/40 border-green-800/50",
                    CardContent { class: "p-4",
                        div { class: "text-xs text-muted-foreground", "Saldo disponível" }
                        div { class: "text-2xl font-semibold text-green-400", "{balance}" }
                    }
                }
            }
            section {
                h2 { class: "text-xl font-bold mb-4",
                    span { class: "text-green-500", "Jogos" }
                    " em destaque"
                }
                GameGrid { games }
            }
        }
    }
}

/// Placeholder body for a dashboard area; title and icon come from the
/// sidebar entry with the same path.
#[allow(non_snake_case)]
#[component]
pub fn DashboardSection(path: &'static str, description: &'static str) -> Element {
    let entry = DASHBOARD_NAV.iter().find(|e| e.path == path).copied();

    rsx! {
        div { class: "space-y-6 animate-fade-up",
            if let Some(entry) = entry {
                h1 { class: "flex items-center gap-3 text-3xl font-bold",
                    span { class: "text-green-400", Icon { kind: entry.icon, class: "h-7 w-7" } }
                    "{entry.label}"
                }
            }
            Card { variant: CardVariant::Glass,
                CardContent { class: "p-6 text-muted-foreground", "{description}" }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn MyPools() -> Element {
    rsx! {
        DashboardSection { path: "/dashboard/meus-boloes", description: "Você ainda não participa de nenhum bolão." }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Wallet() -> Element {
    rsx! {
        DashboardSection { path: "/dashboard/carteira", description: "Depósitos e saques aparecerão aqui." }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Affiliates() -> Element {
    rsx! {
        DashboardSection { path: "/dashboard/afiliados", description: "Convide amigos e acompanhe suas indicações." }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn History() -> Element {
    rsx! {
        DashboardSection { path: "/dashboard/historico", description: "Nenhuma aposta registrada até agora." }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Gamification() -> Element {
    rsx! {
        DashboardSection { path: "/dashboard/gamificacao", description: "Complete desafios para ganhar XP e subir de nível." }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Support() -> Element {
    rsx! {
        DashboardSection { path: "/dashboard/suporte", description: "Fale com nosso time de suporte 24 horas por dia." }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Settings() -> Element {
    rsx! {
        DashboardSection { path: "/dashboard/configuracoes", description: "Preferências de conta e notificações." }
    }
}
