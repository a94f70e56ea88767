use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use portal_modal::utils::{ModalCallbacks, Settings, Style};
use portal_modal::{use_modal_with_callbacks, Modal};

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to init logger: {}", e);
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Load settings from disk on startup
    let settings = use_signal(|| {
        Settings::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings: {}", e);
            Settings::default()
        })
    });

    let open_count = use_signal(|| 0usize);

    let config = settings.read().modal_config("demo-modal");
    let modal = use_modal_with_callbacks(
        config,
        ModalCallbacks::default()
            .on_open(move || {
                let mut open_count = open_count;
                *open_count.write() += 1;
                tracing::info!("Modal opened");
            })
            .on_close(|| tracing::info!("Modal closed")),
    );

    let open_modal = modal.clone();
    let close_modal = modal.clone();
    let duration = modal.transition().duration_ms;

    rsx! {
        div {
            id: "root",
            style: "min-height: 200vh; padding: 24px; font-family: sans-serif;",

            h1 { "Portal modal" }
            p { "Transition: {duration}ms, opened {open_count} times" }

            button {
                onclick: move |_| open_modal.open_modal(),
                "Open modal"
            }

            Modal {
                modal,
                style_modal: Style::new()
                    .with("background-color", "white")
                    .with("border-radius", "8px")
                    .with("padding", "16px 24px"),

                h2 { "Hello from the portal" }
                p { "Click the backdrop or the button to close." }
                button {
                    onclick: move |_| close_modal.close_modal(),
                    "Close"
                }
            }
        }
    }
}
