use dioxus::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::route::Route;
use crate::shared::types::Banner;
use crate::state::carousel::Carousel;

fn dot_class(current: bool) -> &'static str {
    if current {
        "h-2 w-6 rounded-full bg-green-400 transition-all"
    } else {
        "h-2 w-2 rounded-full bg-white/50 transition-all"
    }
}

#[allow(non_snake_case)]
#[component]
pub fn BannerCarousel(banners: Vec<Banner>, interval_ms: u32) -> Element {
    let len = banners.len();
    let mut carousel = use_signal(|| Carousel::new(len));

    // Props can swap the slide list under a mounted carousel
    use_effect(use_reactive!(|len| {
        if carousel.peek().len() != len {
            carousel.write().resize(len);
        }
    }));

    // Auto-advance on the web only
    #[cfg(feature = "web")]
    {
        use gloo_timers::callback::Interval;

        let ticker: Signal<Option<Interval>> = use_signal(|| None);

        use_drop({
            let mut ticker = ticker.clone();
            move || {
                if let Some(h) = ticker.write().take() {
                    h.cancel();
                }
            }
        });

        use_effect(use_reactive!(|len, interval_ms| {
            let mut ticker = ticker.clone();
            if let Some(prev) = ticker.write().take() {
                prev.cancel();
            }
            if len > 1 && interval_ms > 0 {
                let handle = Interval::new(interval_ms, move || {
                    carousel.write().next();
                });
                ticker.set(Some(handle));
            }
        }));
    }

    // the signal catches up in the effect above; render from the fitted copy
    let Some(index) = carousel.read().resized(len).current() else {
        return rsx! { Fragment {} };
    };
    let Some(banner) = banners.get(index).cloned() else {
        return rsx! { Fragment {} };
    };

    rsx! {
        div { class: "relative w-full",
            div {
                key: "{banner.id}",
                class: "relative overflow-hidden rounded-xl h-[300px] md:h-[400px] w-full animate-fade-up",
                div { class: "absolute inset-0 bg-gradient-to-r from-black/60 to-transparent z-10" }
                div { class: "absolute inset-0 bg-gradient-to-r {banner.color} mix-blend-overlay" }
                img { class: "w-full h-full object-cover", src: "{banner.image}", alt: "{banner.title}" }
                div { class: "absolute bottom-0 left-0 right-0 p-6 md:p-8 z-20",
                    h2 { class: "text-2xl md:text-4xl font-bold text-white mb-2", "{banner.title}" }
                    p { class: "text-lg md:text-xl text-gray-200 mb-4", "{banner.description}" }
                    Link { to: Route::Register {},
                        Button { class: "bg-green-500 hover:bg-green-600 text-white", "Apostar Agora" }
                    }
                }
            }
            if banners.len() > 1 {
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    class: "absolute left-4 top-1/2 -translate-y-1/2 z-30 rounded-full bg-black/30 hover:bg-black/50 text-white",
                    onclick: move |_| carousel.write().prev(),
                    Icon { kind: IconKind::ChevronLeft }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    class: "absolute right-4 top-1/2 -translate-y-1/2 z-30 rounded-full bg-black/30 hover:bg-black/50 text-white",
                    onclick: move |_| carousel.write().next(),
                    Icon { kind: IconKind::ChevronRight }
                }
                div { class: "absolute bottom-3 left-1/2 -translate-x-1/2 z-30 flex gap-2",
                    for i in 0..banners.len() {
                        button {
                            key: "{i}",
                            r#type: "button",
                            class: dot_class(i == index),
                            onclick: move |_| carousel.write().go_to(i),
                        }
                    }
                }
            }
        }
    }
}
