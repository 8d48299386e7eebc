//! Fluent-backed message lookup
//!
//! Each [`Translator`] owns one Fluent bundle built from the locale's
//! embedded `.ftl` resource.
//!
//! ```rust
//! use i18n::{Locale, Translator};
//!
//! let t = Translator::new(Locale::En).unwrap();
//! assert_eq!(t.tr("login-title"), "Log in");
//! assert_eq!(t.tr_arg("parking-free", "count", 14), "Free spots: 14");
//! ```

use fluent::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use thiserror::Error;

use crate::lang::Locale;

/// Every message id the screens use. Each bundled locale must define all of them.
pub const MESSAGE_IDS: &[&str] = &[
    "login-title",
    "login-submit",
    "login-register",
    "field-email",
    "field-password",
    "field-confirm-password",
    "register-title",
    "register-submit",
    "nav-back",
    "parking-title",
    "parking-free",
    "parking-spot",
    "parking-row",
];

/// Translator errors
#[derive(Debug, Error)]
pub enum TranslatorError {
    /// The embedded resource failed to parse
    #[error("Failed to parse {locale} resource: {message}")]
    Parse {
        /// Locale whose resource is broken
        locale: Locale,
        /// First parser error
        message: String,
    },

    /// The resource could not be added to the bundle
    #[error("Failed to load {0} resource")]
    Bundle(Locale),

    /// The message id is not defined or has no value
    #[error("Missing message: {0}")]
    MissingMessage(String),
}

/// Result type for translator operations
pub type Result<T> = std::result::Result<T, TranslatorError>;

fn resource_source(locale: Locale) -> &'static str {
    match locale {
        Locale::Kk => include_str!("../locales/kk/main.ftl"),
        Locale::En => include_str!("../locales/en/main.ftl"),
    }
}

/// Message formatter for one locale
pub struct Translator {
    locale: Locale,
    bundle: FluentBundle<FluentResource>,
}

impl Translator {
    /// Build a translator for `locale`
    pub fn new(locale: Locale) -> Result<Self> {
        let resource = FluentResource::try_new(resource_source(locale).to_string()).map_err(
            |(_, errors)| TranslatorError::Parse {
                locale,
                message: errors
                    .first()
                    .map(|e| e.to_string())
                    .unwrap_or_default(),
            },
        )?;

        let mut bundle = FluentBundle::new(vec![locale.langid()]);
        // Plain text output; the shell renders to a terminal.
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|_| TranslatorError::Bundle(locale))?;

        Ok(Self { locale, bundle })
    }

    /// Locale of this translator
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Whether `id` is defined
    pub fn has_message(&self, id: &str) -> bool {
        self.bundle.has_message(id)
    }

    /// Format a message with optional arguments
    pub fn try_format(&self, id: &str, args: Option<&FluentArgs>) -> Result<String> {
        let pattern = self
            .bundle
            .get_message(id)
            .and_then(|msg| msg.value())
            .ok_or_else(|| TranslatorError::MissingMessage(id.to_string()))?;

        let mut errors = vec![];
        let value = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(id, ?errors, "Message formatted with errors");
        }
        Ok(value.into_owned())
    }

    /// Format a message, falling back to the id itself when it is missing
    pub fn tr(&self, id: &str) -> String {
        self.tr_with(id, None)
    }

    /// Format a message with a single named argument
    pub fn tr_arg<'a>(
        &self,
        id: &str,
        name: &'a str,
        value: impl Into<FluentValue<'a>>,
    ) -> String {
        let mut args = FluentArgs::new();
        args.set(name, value);
        self.tr_with(id, Some(&args))
    }

    fn tr_with(&self, id: &str, args: Option<&FluentArgs>) -> String {
        match self.try_format(id, args) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(locale = %self.locale, error = %e, "Falling back to message id");
                id.to_string()
            }
        }
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &self.locale)
            .finish()
    }
}
