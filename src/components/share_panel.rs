//! Share Button Component
//!
//! Tries the desktop share channels in order: the native share sheet, the
//! system clipboard, then a dialog with the text to copy by hand.

use dioxus::prelude::*;
use memorial_core::designer::ids;
use memorial_core::{share_design, Document, ShareChannel, ShareError, ShareMessage};

use crate::context::use_app_config;

/// What the share dialog is showing.
#[derive(Clone, Debug, PartialEq)]
pub enum ShareDialog {
    /// The message went to the clipboard
    Copied,
    /// Nothing could take the message; show it for manual copying
    Manual(String),
}

/// The webview exposes no native share sheet on desktop.
struct NativeShareSheet;

impl ShareChannel for NativeShareSheet {
    fn name(&self) -> &'static str {
        "native-share"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn deliver(&self, _message: &ShareMessage) -> Result<(), ShareError> {
        Err(ShareError::Unavailable("native-share"))
    }
}

/// Copies the full share text with arboard.
struct ClipboardChannel {
    dialog: Signal<Option<ShareDialog>>,
}

impl ShareChannel for ClipboardChannel {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn deliver(&self, message: &ShareMessage) -> Result<(), ShareError> {
        let failed = |e: arboard::Error| ShareError::Failed {
            channel: "clipboard",
            reason: e.to_string(),
        };
        let mut clipboard = arboard::Clipboard::new().map_err(failed)?;
        clipboard.set_text(message.full_text()).map_err(failed)?;

        let mut dialog = self.dialog;
        dialog.set(Some(ShareDialog::Copied));
        Ok(())
    }
}

/// Last resort: show the text in a dialog.
struct PromptChannel {
    dialog: Signal<Option<ShareDialog>>,
}

impl ShareChannel for PromptChannel {
    fn name(&self) -> &'static str {
        "prompt"
    }

    fn deliver(&self, message: &ShareMessage) -> Result<(), ShareError> {
        let mut dialog = self.dialog;
        dialog.set(Some(ShareDialog::Manual(message.full_text())));
        Ok(())
    }
}

#[component]
pub fn ShareControl(doc: Signal<Document>) -> Element {
    let config = use_app_config();
    let mut dialog: Signal<Option<ShareDialog>> = use_signal(|| None);

    let on_share = move |_| {
        let message = {
            let d = doc.read();
            ShareMessage::compose(
                d.value_of(ids::INPUT_NAME),
                d.value_of(ids::INPUT_EPITAPH),
                &config.designer_url(),
            )
        };

        let native = NativeShareSheet;
        let clipboard = ClipboardChannel { dialog };
        let prompt = PromptChannel { dialog };
        share_design(&message, &[&native, &clipboard, &prompt]);
    };

    rsx! {
        button { class: "btn-share", onclick: on_share, "🔗 Share Design" }

        if let Some(current) = dialog() {
            div { class: "share-overlay", onclick: move |_| dialog.set(None),
                div {
                    class: "share-dialog",
                    role: "dialog",
                    onclick: move |e| e.stop_propagation(),
                    match current {
                        ShareDialog::Copied => rsx! {
                            p { "✅ Share link copied to clipboard!" }
                            p { class: "share-hint", "Paste it anywhere to share your design." }
                        },
                        ShareDialog::Manual(text) => rsx! {
                            p { "Copy this text to share your design:" }
                            textarea { class: "share-text", readonly: true, rows: "4", value: "{text}" }
                        },
                    }
                    button { class: "btn-close", onclick: move |_| dialog.set(None), "Close" }
                }
            }
        }
    }
}
