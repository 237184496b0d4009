//! Hand-off from the landing page registration to the designer.

use std::time::Duration;

/// Value of the `from` query parameter set by the registration success link.
pub const REGISTRATION_SOURCE: &str = "registration";

pub const WELCOME_TEXT: &str =
    "🎉 Welcome, Registered Guest! Design your eternal memorial below. 🪦";
pub const WELCOME_DELAY: Duration = Duration::from_millis(500);
pub const WELCOME_DURATION: Duration = Duration::from_secs(5);

/// Where a designer visit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Referral {
    Registration,
    #[default]
    Direct,
}

impl Referral {
    /// From the value of the `from` parameter.
    pub fn from_param(from: &str) -> Self {
        if from == REGISTRATION_SOURCE {
            Referral::Registration
        } else {
            Referral::Direct
        }
    }

    /// From a raw query string, with or without the leading `?`.
    pub fn from_query(query: &str) -> Self {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "from")
            .map(|(_, value)| Self::from_param(value))
            .unwrap_or_default()
    }

    pub fn shows_welcome(self) -> bool {
        self == Referral::Registration
    }
}

/// Path of the designer as linked from the registration success message.
pub fn designer_link() -> String {
    format!("/designer?from={}", REGISTRATION_SOURCE)
}
