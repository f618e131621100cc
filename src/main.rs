use dioxus::prelude::*;

mod app;
mod catalog;
mod components;
mod layouts;
mod pages;
mod route;
mod shared;
mod state;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "server")]
    {
        // RUST_LOG may come from .env
        dotenvy::dotenv().ok();
        backend::init_tracing();
    }
    dioxus::launch(app::App);
}
