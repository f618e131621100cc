pub mod auth;
pub mod dashboard;
pub mod info;
pub mod landing;
pub mod not_found;
pub mod sport;

pub use auth::{Login, Register};
pub use dashboard::{
    Affiliates, DashboardHome, Gamification, History, MyPools, Settings, Support, Wallet,
};
pub use info::{About, Contact, Faq, Privacy, ResponsibleGaming, Terms};
pub use landing::Landing;
pub use not_found::NotFound;
pub use sport::Sport;
