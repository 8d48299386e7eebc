//! Internationalization for Sala
//!
//! This crate provides the user-visible strings of every screen, with
//! language negotiation and Fluent message formatting. Kazakh is the
//! default locale; English is bundled as a second one.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lang;
pub mod translator;

pub use lang::Locale;
pub use translator::{Translator, TranslatorError};
