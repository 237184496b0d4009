//! Export Button Component
//!
//! Snapshots the rendered card, rasterizes it off the UI thread and saves
//! the PNG into the downloads directory.

use dioxus::prelude::*;
use memorial_core::export::SETTLE_DELAY;
use memorial_core::{
    DirectorySink, Document, ExportButton, ExportError, ExportJob, SilhouetteRasterizer,
};

use crate::context::use_app_config;

#[component]
pub fn ExportControl(doc: Signal<Document>) -> Element {
    let config = use_app_config();
    let mut button = use_signal(ExportButton::new);
    let mut saved_to: Signal<Option<String>> = use_signal(|| None);

    let on_export = move |_| {
        if let Err(e) = button.write().begin() {
            tracing::debug!("Export ignored: {}", e);
            return;
        }
        let downloads = config.downloads_dir.clone();

        spawn(async move {
            // Let the last render settle before capturing
            tokio::time::sleep(SETTLE_DELAY).await;

            let timestamp = chrono::Utc::now().timestamp_millis();
            let prepared = ExportJob::prepare(&doc.read(), timestamp);
            let result = match prepared {
                Ok(job) => {
                    let sink = DirectorySink::new(downloads);
                    tokio::task::spawn_blocking(move || job.run(&SilhouetteRasterizer, &sink))
                        .await
                        .unwrap_or_else(|e| Err(ExportError::Rasterize(e.to_string())))
                }
                Err(e) => Err(e),
            };

            let revert_after = match result {
                Ok(path) => {
                    saved_to.set(Some(path.display().to_string()));
                    button.write().succeed()
                }
                Err(e) => {
                    tracing::error!("Export failed: {}", e);
                    saved_to.set(None);
                    button.write().fail()
                }
            };

            tokio::time::sleep(revert_after).await;
            button.write().revert();
        });
    };

    let state = button.read();

    rsx! {
        div { class: "export-control",
            button {
                class: "btn-export",
                disabled: state.is_disabled(),
                onclick: on_export,
                "{state.label()}"
            }
            if let Some(path) = saved_to() {
                p { class: "export-path", "Saved to {path}" }
            }
        }
    }
}
