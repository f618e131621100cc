use crate::components::icon::IconKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub path: &'static str,
    pub icon: IconKind,
    pub label: &'static str,
}

/// Strict equality, `/dashboard` does not light up for `/dashboard/carteira`.
pub fn is_active(current_path: &str, entry: &NavEntry) -> bool {
    current_path == entry.path
}

pub fn active_index(current_path: &str, entries: &[NavEntry]) -> Option<usize> {
    entries.iter().position(|e| is_active(current_path, e))
}

pub const DASHBOARD_NAV: &[NavEntry] = &[
    NavEntry {
        path: "/dashboard",
        icon: IconKind::Home,
        label: "Início",
    },
    NavEntry {
        path: "/dashboard/meus-boloes",
        icon: IconKind::Ticket,
        label: "Meus Bolões",
    },
    NavEntry {
        path: "/dashboard/carteira",
        icon: IconKind::Wallet,
        label: "Carteira",
    },
    NavEntry {
        path: "/dashboard/afiliados",
        icon: IconKind::Users,
        label: "Afiliados",
    },
    NavEntry {
        path: "/dashboard/historico",
        icon: IconKind::History,
        label: "Histórico",
    },
    NavEntry {
        path: "/dashboard/gamificacao",
        icon: IconKind::Trophy,
        label: "Gamificação",
    },
    NavEntry {
        path: "/dashboard/suporte",
        icon: IconKind::HelpCircle,
        label: "Suporte",
    },
    NavEntry {
        path: "/dashboard/configuracoes",
        icon: IconKind::Settings,
        label: "Configurações",
    },
];
