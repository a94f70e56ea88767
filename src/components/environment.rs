use crate::utils::{EvalDocument, ModalEnvironment, Scheduler, Task};
use dioxus::core::{provide_root_context, spawn_forever};
use dioxus::prelude::*;
use std::rc::Rc;
use std::time::Duration;

/// Runs deferred modal work as Dioxus tasks
#[derive(Clone, Copy, Debug, Default)]
pub struct DioxusScheduler;

impl Scheduler for DioxusScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        // Tasks only hold weak controller references, so outliving the
        // scheduling component is harmless.
        spawn_forever(async move {
            sleep(delay).await;
            task();
        });
    }
}

#[cfg(not(feature = "web"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(feature = "web")]
async fn sleep(delay: Duration) {
    let script = format!(
        "await new Promise(resolve => setTimeout(resolve, {})); return true;",
        delay.as_millis()
    );
    if let Err(e) = document::eval(&script).join::<bool>().await {
        tracing::warn!("Timer failed: {:?}", e);
    }
}

/// The environment shared by every modal in the app. Created on first use
/// and provided at the root, unless an ancestor already provides one.
pub fn use_modal_environment() -> ModalEnvironment {
    use_hook(|| {
        if let Some(env) = try_consume_context::<ModalEnvironment>() {
            return env;
        }
        let env = default_environment();
        provide_root_context(env.clone());
        env
    })
}

fn default_environment() -> ModalEnvironment {
    #[cfg(feature = "web")]
    {
        match crate::utils::WebDocument::new() {
            Ok(document) => {
                return ModalEnvironment::new(Rc::new(document), Rc::new(DioxusScheduler));
            }
            Err(e) => tracing::warn!("Falling back to eval document: {}", e),
        }
    }

    let document = Rc::new(EvalDocument::new());
    let measured = document.clone();
    spawn_forever(async move {
        measured.refresh_metrics().await;
    });
    ModalEnvironment::new(document, Rc::new(DioxusScheduler))
}
