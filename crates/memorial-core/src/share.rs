//! Sharing a design through whatever channel the platform offers.
//!
//! Channels are tried strictly in the order given (native share sheet,
//! clipboard, manual copy prompt); an unavailable or failing channel
//! falls through to the next one. Sharing never reports an error to the
//! user.

use crate::error::ShareError;

pub const SHARE_TITLE: &str = "🪦 My Memorial Design";
pub const DEFAULT_NAME: &str = "Memorial";
pub const DEFAULT_EPITAPH: &str = "Rest in Peace";

/// A composed share message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareMessage {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareMessage {
    /// Compose the message for a design. Empty name or epitaph fall back to defaults.
    pub fn compose(name: &str, epitaph: &str, url: &str) -> Self {
        let name = if name.is_empty() { DEFAULT_NAME } else { name };
        let epitaph = if epitaph.is_empty() { DEFAULT_EPITAPH } else { epitaph };
        Self {
            title: SHARE_TITLE.to_string(),
            text: format!(
                "🪦 Check out my eternal memorial: \"{}\" - \"{}\" 🎃 Created with the Eldritch Eclipse Memorial Designer!",
                name, epitaph
            ),
            url: url.to_string(),
        }
    }

    /// Text and URL on separate lines, for channels that take plain text.
    pub fn full_text(&self) -> String {
        format!("{}\n{}", self.text, self.url)
    }
}

/// A way of handing a share message to the user or the platform.
pub trait ShareChannel {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Feature detection; unavailable channels are skipped without trying.
    fn is_available(&self) -> bool {
        true
    }

    fn deliver(&self, message: &ShareMessage) -> Result<(), ShareError>;
}

/// Which channel, if any, took the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Delivered(&'static str),
    Undelivered,
}

/// Try each channel in order until one delivers.
pub fn share_design(message: &ShareMessage, channels: &[&dyn ShareChannel]) -> ShareOutcome {
    for channel in channels {
        if !channel.is_available() {
            tracing::debug!(channel = channel.name(), "share channel unavailable");
            continue;
        }
        match channel.deliver(message) {
            Ok(()) => {
                tracing::info!(channel = channel.name(), "design shared");
                return ShareOutcome::Delivered(channel.name());
            }
            Err(e) => {
                tracing::warn!(channel = channel.name(), "share failed, falling through: {}", e);
            }
        }
    }
    tracing::warn!("no share channel delivered");
    ShareOutcome::Undelivered
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeChannel {
        name: &'static str,
        available: bool,
        fails: bool,
        received: RefCell<Vec<ShareMessage>>,
    }

    impl FakeChannel {
        fn new(name: &'static str, available: bool, fails: bool) -> Self {
            Self {
                name,
                available,
                fails,
                received: RefCell::new(Vec::new()),
            }
        }
    }

    impl ShareChannel for FakeChannel {
        fn name(&self) -> &'static str {
            self.name
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn deliver(&self, message: &ShareMessage) -> Result<(), ShareError> {
            self.received.borrow_mut().push(message.clone());
            if self.fails {
                Err(ShareError::Failed {
                    channel: self.name,
                    reason: "denied".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_compose_uses_defaults_for_blank_fields() {
        let msg = ShareMessage::compose("", "", "http://localhost/designer");
        assert!(msg.text.contains("\"Memorial\""));
        assert!(msg.text.contains("\"Rest in Peace\""));
        assert_eq!(msg.title, SHARE_TITLE);
    }

    #[test]
    fn test_compose_embeds_name_and_epitaph() {
        let msg = ShareMessage::compose("Jane", "Gone too soon", "http://x");
        assert_eq!(
            msg.text,
            "🪦 Check out my eternal memorial: \"Jane\" - \"Gone too soon\" 🎃 Created with the Eldritch Eclipse Memorial Designer!"
        );
        assert_eq!(msg.full_text(), format!("{}\nhttp://x", msg.text));
    }

    #[test]
    fn test_first_available_channel_wins() {
        let native = FakeChannel::new("native", true, false);
        let clipboard = FakeChannel::new("clipboard", true, false);
        let msg = ShareMessage::compose("a", "b", "c");

        let outcome = share_design(&msg, &[&native, &clipboard]);
        assert_eq!(outcome, ShareOutcome::Delivered("native"));
        assert!(clipboard.received.borrow().is_empty());
    }

    #[test]
    fn test_falls_through_unavailable_and_failing() {
        let native = FakeChannel::new("native", false, false);
        let clipboard = FakeChannel::new("clipboard", true, true);
        let prompt = FakeChannel::new("prompt", true, false);
        let msg = ShareMessage::compose("a", "b", "c");

        let outcome = share_design(&msg, &[&native, &clipboard, &prompt]);
        assert_eq!(outcome, ShareOutcome::Delivered("prompt"));
        assert!(native.received.borrow().is_empty());
        assert_eq!(clipboard.received.borrow().len(), 1);
        assert_eq!(prompt.received.borrow().len(), 1);
    }

    #[test]
    fn test_no_channel_is_not_an_error() {
        let msg = ShareMessage::compose("a", "b", "c");
        assert_eq!(share_design(&msg, &[]), ShareOutcome::Undelivered);
    }
}
