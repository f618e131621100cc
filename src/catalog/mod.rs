//! Demo content behind a provider trait.
//!
//! Views never embed their own data: the app root injects a
//! [`CatalogHandle`] into the context and pages read from it. The default
//! provider deserializes `demo.json`, compiled into the binary.

use std::rc::Rc;

use dioxus::logger::tracing::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::shared::types::{Banner, FooterLink, Game, SiteInfo, SportCategory, UserProfile};

const DEMO_JSON: &str = include_str!("demo.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog json: {0}")]
    Parse(#[from] serde_json::Error),
}

pub trait CatalogProvider {
    fn site(&self) -> SiteInfo;
    fn user(&self) -> Option<UserProfile>;
    fn banners(&self) -> Vec<Banner>;
    fn games(&self) -> Vec<Game>;
    fn sports(&self) -> Vec<SportCategory>;
    fn footer_links(&self) -> Vec<FooterLink>;

    fn sport(&self, id: &str) -> Option<SportCategory> {
        self.sports().into_iter().find(|s| s.id == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    pub site: SiteInfo,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub banners: Vec<Banner>,
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub sports: Vec<SportCategory>,
    #[serde(default, rename = "footerLinks")]
    pub footer_links: Vec<FooterLink>,
}

impl StaticCatalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Embedded demo data, or an empty catalog if it does not parse.
    pub fn demo() -> Self {
        match Self::from_json(DEMO_JSON) {
            Ok(c) => {
                info!(
                    "[catalog] loaded {} games, {} banners",
                    c.games.len(),
                    c.banners.len()
                );
                c
            }
            Err(e) => {
                warn!("[catalog] {e}; continuing with empty catalog");
                Self::default()
            }
        }
    }
}

impl CatalogProvider for StaticCatalog {
    fn site(&self) -> SiteInfo {
        self.site.clone()
    }
    fn user(&self) -> Option<UserProfile> {
        self.user.clone()
    }
    fn banners(&self) -> Vec<Banner> {
        self.banners.clone()
    }
    fn games(&self) -> Vec<Game> {
        self.games.clone()
    }
    fn sports(&self) -> Vec<SportCategory> {
        self.sports.clone()
    }
    fn footer_links(&self) -> Vec<FooterLink> {
        self.footer_links.clone()
    }
}

/// Cloneable context value wrapping whichever provider the app was built with.
#[derive(Clone)]
pub struct CatalogHandle(Rc<dyn CatalogProvider>);

impl CatalogHandle {
    pub fn new(provider: impl CatalogProvider + 'static) -> Self {
        CatalogHandle(Rc::new(provider))
    }
}

impl std::ops::Deref for CatalogHandle {
    type Target = dyn CatalogProvider;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_parses() {
        let c = StaticCatalog::from_json(DEMO_JSON).unwrap();
        assert_eq!(c.banners.len(), 3);
        assert_eq!(c.games.len(), 8);
        assert_eq!(c.games.iter().filter(|g| g.sport == "futebol").count(), 6);
        assert_eq!(c.sports.len(), 5);
        assert_eq!(c.footer_links.len(), 6);
        let user = c.user.unwrap();
        assert_eq!(user.name, "João Silva");
        assert_eq!(user.xp.get(), 75);
        assert_eq!(user.level, 12);
    }

    #[test]
    fn only_football_has_draw_odds() {
        let c = StaticCatalog::demo();
        for g in &c.games {
            let odds = g.odds.unwrap();
            assert_eq!(odds.draw.is_some(), g.sport == "futebol", "{}", g.title);
        }
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let c = StaticCatalog::from_json("{}").unwrap();
        assert!(c.games.is_empty());
        assert!(c.banners.is_empty());
        assert!(c.user.is_none());
        assert_eq!(c.site.carousel_interval_ms, 6_000);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = StaticCatalog::from_json("{\"games\": 3}").unwrap_err();
        assert!(err.to_string().starts_with("invalid catalog json"));
    }

    #[test]
    fn handle_looks_up_sport_by_slug() {
        let handle = CatalogHandle::new(StaticCatalog::demo());
        assert_eq!(handle.sport("tenis").map(|s| s.name), Some("Tênis".into()));
        assert!(handle.sport("xadrez").is_none());
    }
}
