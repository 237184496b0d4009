//! Landing page registration form: validation and submit states.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$").expect("valid email regex")
});

pub const NAME_ERROR: &str = "Please enter your name, mortal.";
pub const EMAIL_ERROR: &str = "Please enter a valid email address.";
pub const SUCCESS_MESSAGE: &str =
    "Your place at the Eclipse is secured. We will summon you when the night falls.";

pub const SUBMIT_LABEL: &str = "Confirm Registration";
pub const SUBMITTING_LABEL: &str = "Securing Ritual...";
pub const CONFIRMED_LABEL: &str = "CONFIRMED";

/// Simulated round trip between submit and confirmation.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// How long the confirmed label stays before the submit label returns.
pub const LABEL_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Whether `email` looks like an address. Surrounding whitespace is ignored.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// Which fields failed validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: bool,
    pub email: bool,
}

impl FieldErrors {
    pub fn any(&self) -> bool {
        self.name || self.email
    }
}

/// A validated registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
}

/// Validate both fields, reporting every failing field at once.
pub fn validate(name: &str, email: &str) -> Result<Registration, FieldErrors> {
    let errors = FieldErrors {
        name: name.trim().is_empty(),
        email: !is_valid_email(email),
    };
    if errors.any() {
        return Err(errors);
    }
    Ok(Registration {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Confirmed,
}

/// Result of pressing submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Inline errors are showing; nothing else changed.
    Rejected(FieldErrors),
    /// Accepted; call [`RegistrationForm::complete`] after [`SUBMIT_DELAY`].
    Submitting(Registration),
}

/// State of the registration form as the page renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    errors: FieldErrors,
    success_visible: bool,
    phase: SubmitPhase,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            errors: FieldErrors::default(),
            success_visible: false,
            phase: SubmitPhase::Idle,
        }
    }

    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            SubmitPhase::Idle => SUBMIT_LABEL,
            SubmitPhase::Submitting => SUBMITTING_LABEL,
            SubmitPhase::Confirmed => CONFIRMED_LABEL,
        }
    }

    /// Disabled (and aria-busy) while the submission is in flight.
    pub fn is_busy(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Press submit: clear previous feedback, then validate.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors = FieldErrors::default();
        self.success_visible = false;

        match validate(&self.name, &self.email) {
            Ok(registration) => {
                self.phase = SubmitPhase::Submitting;
                tracing::info!(name = %registration.name, "registration submitted");
                SubmitOutcome::Submitting(registration)
            }
            Err(errors) => {
                self.errors = errors;
                tracing::debug!(?errors, "registration rejected");
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    /// Finish a submission: confirm, show success and clear both fields.
    ///
    /// Returns the delay before [`reset_label`](Self::reset_label).
    pub fn complete(&mut self) -> Duration {
        self.phase = SubmitPhase::Confirmed;
        self.success_visible = true;
        self.name.clear();
        self.email.clear();
        LABEL_RESET_DELAY
    }

    /// Put the submit label back once the confirmation has been seen.
    pub fn reset_label(&mut self) {
        if self.phase == SubmitPhase::Confirmed {
            self.phase = SubmitPhase::Idle;
        }
    }
}
