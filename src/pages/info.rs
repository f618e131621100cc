use dioxus::prelude::*;

use crate::catalog::CatalogHandle;
use crate::shared::types::SiteInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoKind {
    About,
    Terms,
    Privacy,
    ResponsibleGaming,
    Contact,
    Faq,
}

impl InfoKind {
    pub fn title(self) -> &'static str {
        match self {
            InfoKind::About => "Sobre Nós",
            InfoKind::Terms => "Termos de Uso",
            InfoKind::Privacy => "Política de Privacidade",
            InfoKind::ResponsibleGaming => "Jogo Responsável",
            InfoKind::Contact => "Contato",
            InfoKind::Faq => "Perguntas Frequentes",
        }
    }

    pub fn paragraphs(self, site: &SiteInfo) -> Vec<String> {
        let brand = format!("{}{}", site.brand_primary, site.brand_accent);
        match self {
            InfoKind::About => vec![
                format!("A {brand} é uma plataforma de bolões e apostas esportivas feita para quem acompanha o esporte brasileiro."),
                site.tagline.clone(),
            ],
            InfoKind::Terms => vec![
                "Ao utilizar a plataforma você declara ter mais de 18 anos e concorda com as regras de cada bolão.".into(),
                "As odds exibidas são informativas e podem mudar até o início da partida.".into(),
            ],
            InfoKind::Privacy => vec![
                "Seus dados pessoais são usados apenas para identificar sua conta e nunca são vendidos a terceiros.".into(),
            ],
            InfoKind::ResponsibleGaming => vec![
                "Aposte apenas o que você pode perder. Defina limites de depósito e faça pausas regulares.".into(),
                "Proibido para menores de 18 anos.".into(),
            ],
            InfoKind::Contact => vec![
                format!("Email: {}", site.contact_email),
                format!("Telefone: {}", site.contact_phone),
                format!("Horário: {}", site.service_hours),
            ],
            InfoKind::Faq => vec![
                "Como criar uma conta? Clique em \"Criar Conta\" e preencha seus dados.".into(),
                "Esqueci minha senha, e agora? Use \"Esqueci minha senha\" na tela de login.".into(),
            ],
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn InfoPage(kind: InfoKind) -> Element {
    let catalog = use_context::<CatalogHandle>();
    let site = catalog.site();
    let paragraphs = kind.paragraphs(&site);

    rsx! {
        article { class: "container mx-auto max-w-3xl px-4 py-12 space-y-4 animate-fade-up",
            h1 { class: "text-3xl font-bold text-green-400 mb-6", "{kind.title()}" }
            for (i, text) in paragraphs.iter().filter(|t| !t.is_empty()).enumerate() {
                p { key: "{i}", class: "text-gray-400 leading-relaxed", "{text}" }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn About() -> Element {
    rsx! { InfoPage { kind: InfoKind::About } }
}

#[allow(non_snake_case)]
#[component]
pub fn Terms() -> Element {
    rsx! { InfoPage { kind: InfoKind::Terms } }
}

#[allow(non_snake_case)]
#[component]
pub fn Privacy() -> Element {
    rsx! { InfoPage { kind: InfoKind::Privacy } }
}

#[allow(non_snake_case)]
#[component]
pub fn ResponsibleGaming() -> Element {
    rsx! { InfoPage { kind: InfoKind::ResponsibleGaming } }
}

#[allow(non_snake_case)]
#[component]
pub fn Contact() -> Element {
    rsx! { InfoPage { kind: InfoKind::Contact } }
}

#[allow(non_snake_case)]
#[component]
pub fn Faq() -> Element {
    rsx! { InfoPage { kind: InfoKind::Faq } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_page_uses_site_info() {
        let site = SiteInfo {
            contact_email: "oi@exemplo.com".into(),
            ..SiteInfo::default()
        };
        let body = InfoKind::Contact.paragraphs(&site);
        assert_eq!(body[0], "Email: oi@exemplo.com");
    }

    #[test]
    fn about_mentions_full_brand() {
        let body = InfoKind::About.paragraphs(&SiteInfo::default());
        assert!(body[0].contains("BetSportBR"));
    }
}
