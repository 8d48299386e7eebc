//! User interface for Sala
//!
//! This crate provides the UI layer: screens, navigation, theming, design
//! tokens and the application controller that connects them to the parking
//! store.
//!
//! # Spot colors
//!
//! - Selected: blue (#0000FF)
//! - Occupied: red (#FF0000)
//! - Free accessible: amber (#FBC02D)
//! - Free regular: green (#4CAF50)
//!
//! # Modules
//!
//! - [`app`] - Application controller
//! - [`theme`] - Theme provider and spot palette
//! - [`tokens`] - Design tokens (spacing, sizing, radii)
//! - [`components`] - UI component library
//! - [`screens`] - Application screens
//! - [`navigation`] - Navigation framework
//!
//! # Example
//!
//! ```rust
//! use app_ui::app::{Action, SalaApp};
//! use app_ui::navigation::Route;
//! use app_ui::theme::ThemeName;
//! use i18n::Locale;
//!
//! let mut app = SalaApp::new(Locale::Kk, ThemeName::Light).unwrap();
//! app.handle(Action::SubmitLogin).unwrap();
//! assert_eq!(app.route(), Route::ParkingLot);
//!
//! app.handle(Action::Tap(3)).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod components;
pub mod navigation;
pub mod screens;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use app::{Action, AppError, SalaApp};

pub use theme::{
    get_theme, light_theme, dark_theme, Theme, ThemeName, ThemeState, ThemeColors, SpotPalette,
    SpotTreatment,
};

pub use tokens::{spacing, sizing, radius};

pub use navigation::{
    Route, NavigationStack, NavigationState, NavigationAnimation, StackEntry,
    PendingNavigation,
};

pub use screens::Screen;
