use serde::{Deserialize, Serialize};

/// Whole percentage, always within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub fn new(value: i64) -> Self {
        Percentage(value.clamp(0, 100) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<i64> for Percentage {
    fn from(value: i64) -> Self {
        Percentage::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub avatar: String,
    pub level: u32,
    pub xp: Percentage,
    pub balance: f64,
}

impl UserProfile {
    /// First character of the name, used as avatar fallback.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Odds {
    pub home: f64,
    /// Absent for sports without a draw result.
    #[serde(default)]
    pub draw: Option<f64>,
    pub away: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub title: String,
    pub league: String,
    pub date: String, // dd/mm/yyyy
    pub time: String, // hh:mm
    #[serde(rename = "minBet")]
    pub min_bet: f64,
    #[serde(default)]
    pub odds: Option<Odds>,
    #[serde(default = "default_sport")]
    pub sport: String, // SportCategory::id
}

fn default_sport() -> String {
    "futebol".into()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub color: String, // tailwind gradient stops
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportCategory {
    pub id: String,
    pub name: String,
}

impl SportCategory {
    pub fn path(&self) -> String {
        format!("/esportes/{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    #[serde(rename = "brandPrimary")]
    pub brand_primary: String,
    #[serde(rename = "brandAccent")]
    pub brand_accent: String,
    pub tagline: String,
    #[serde(rename = "contactEmail")]
    pub contact_email: String,
    #[serde(rename = "contactPhone")]
    pub contact_phone: String,
    #[serde(rename = "serviceHours")]
    pub service_hours: String,
    #[serde(rename = "carouselIntervalMs", default = "default_carousel_interval")]
    pub carousel_interval_ms: u32,
}

fn default_carousel_interval() -> u32 {
    6_000
}

impl Default for SiteInfo {
    fn default() -> Self {
        SiteInfo {
            brand_primary: "BetSport".into(),
            brand_accent: "BR".into(),
            tagline: String::new(),
            contact_email: String::new(),
            contact_phone: String::new(),
            service_hours: String::new(),
            carousel_interval_ms: default_carousel_interval(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_is_clamped() {
        assert_eq!(Percentage::new(-5).get(), 0);
        assert_eq!(Percentage::new(75).get(), 75);
        assert_eq!(Percentage::new(180).get(), 100);
    }

    #[test]
    fn percentage_clamps_when_deserialized() {
        let p: Percentage = serde_json::from_str("250").unwrap();
        assert_eq!(p.get(), 100);
    }

    #[test]
    fn sport_path_uses_slug() {
        let s = SportCategory {
            id: "volei".into(),
            name: "Vôlei".into(),
        };
        assert_eq!(s.path(), "/esportes/volei");
    }

    #[test]
    fn initial_of_empty_name_is_empty() {
        let mut u = UserProfile {
            name: "João Silva".into(),
            avatar: String::new(),
            level: 1,
            xp: Percentage::new(0),
            balance: 0.0,
        };
        assert_eq!(u.initial(), "J");
        u.name.clear();
        assert_eq!(u.initial(), "");
    }
}
