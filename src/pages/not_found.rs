use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::route::Route;

#[allow(non_snake_case)]
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    // once per missing path, not once per render
    let reported = use_hook(|| Rc::new(RefCell::new(None::<String>)));
    if reported.borrow().as_deref() != Some(path.as_str()) {
        warn!("[router] no route for {path}");
        *reported.borrow_mut() = Some(path.clone());
    }

    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4 bg-background text-center p-4",
            h1 { class: "text-5xl font-bold text-green-400", "404" }
            p { class: "text-muted-foreground", "A página {path} não existe." }
            Link { to: Route::Landing {}, class: "text-green-500 hover:text-green-400", "Voltar para a página inicial" }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use dioxus::logger::tracing::{self, span, Event, Level, Metadata, Subscriber};

    use crate::route::testing::Harness;
    use crate::route::Route;

    /// Counts warnings raised from this crate.
    struct Warnings(Arc<AtomicUsize>);

    impl Subscriber for Warnings {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }
        fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }
        fn record(&self, _: &span::Id, _: &span::Record<'_>) {}
        fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}
        fn event(&self, event: &Event<'_>) {
            let meta = event.metadata();
            if *meta.level() == Level::WARN && meta.target().starts_with("betsport_rs") {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
        fn enter(&self, _: &span::Id) {}
        fn exit(&self, _: &span::Id) {}
    }

    fn missing(path: &str) -> Route {
        Route::NotFound {
            segments: vec![path.to_string()],
        }
    }

    #[test]
    fn missing_path_is_logged_once_per_path() {
        let hits = Arc::new(AtomicUsize::new(0));
        let dispatch = tracing::Dispatch::new(Warnings(hits.clone()));

        tracing::dispatcher::with_default(&dispatch, || {
            let mut h = Harness::mount();
            h.navigate(missing("boloes"));
            assert_eq!(hits.load(Ordering::SeqCst), 1);

            h.rerender_everything();
            h.rerender_everything();
            assert_eq!(hits.load(Ordering::SeqCst), 1);

            h.navigate(missing("apostas"));
            assert_eq!(hits.load(Ordering::SeqCst), 2);
        });
    }
}
