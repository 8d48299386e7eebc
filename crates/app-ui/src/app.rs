//! Application controller
//!
//! [`SalaApp`] ties navigation, the entry forms and the parking store
//! together. The shell feeds it [`Action`]s and renders whatever
//! [`SalaApp::render`] returns.
//!
//! A parking store exists only while the parking screen is on top of the
//! stack: entering the screen seeds a fresh store from the registry, leaving
//! it closes and drops the store.

use app_state::store::{ParkingStore, StoreError};
use i18n::{Locale, Translator, TranslatorError};
use parking_core::auth::{LoginForm, RegisterForm};
use parking_core::spots::SpotId;
use thiserror::Error;

use crate::components::parse_activate_handler;
use crate::navigation::{NavigationState, Route};
use crate::screens::{handlers, LoginScreen, ParkingLotScreen, RegisterScreen, Screen};
use crate::theme::{ThemeName, ThemeState};

/// Application errors
#[derive(Debug, Error)]
pub enum AppError {
    /// The parking store rejected a gesture
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Translations failed to load
    #[error(transparent)]
    Translator(#[from] TranslatorError),

    /// The action does not apply to the current screen
    #[error("{action} is not available on {route:?}")]
    WrongScreen {
        /// Action name
        action: &'static str,
        /// Current route
        route: Route,
    },
}

/// Result type for application actions
pub type Result<T> = std::result::Result<T, AppError>;

/// User actions the shell forwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Type into the email field
    SetEmail(String),
    /// Type into the password field
    SetPassword(String),
    /// Type into the password confirmation field (registration only)
    SetConfirmPassword(String),
    /// Press the login button
    SubmitLogin,
    /// Press the register button on the login screen
    OpenRegister,
    /// Press the register button on the registration screen
    SubmitRegister,
    /// Go back
    Back,
    /// Tap a parking spot
    Tap(SpotId),
}

impl Action {
    /// Action for a component event handler
    ///
    /// `value` carries the new text for field handlers, which need one.
    pub fn from_handler(handler: &str, value: Option<String>) -> Option<Action> {
        if let Some(id) = parse_activate_handler(handler) {
            return Some(Action::Tap(id));
        }

        let action = match (handler, value) {
            (handlers::EMAIL, Some(v)) => Action::SetEmail(v),
            (handlers::PASSWORD, Some(v)) => Action::SetPassword(v),
            (handlers::CONFIRM_PASSWORD, Some(v)) => Action::SetConfirmPassword(v),
            (handlers::LOGIN, _) => Action::SubmitLogin,
            (handlers::OPEN_REGISTER, _) => Action::OpenRegister,
            (handlers::REGISTER, _) => Action::SubmitRegister,
            (handlers::BACK, _) => Action::Back,
            _ => return None,
        };
        Some(action)
    }

    fn name(&self) -> &'static str {
        match self {
            Action::SetEmail(_) => "email",
            Action::SetPassword(_) => "password",
            Action::SetConfirmPassword(_) => "confirm",
            Action::SubmitLogin => "login",
            Action::OpenRegister => "register",
            Action::SubmitRegister => "submit",
            Action::Back => "back",
            Action::Tap(_) => "tap",
        }
    }
}

/// The whole application
pub struct SalaApp {
    navigation: NavigationState,
    theme: ThemeState,
    translator: Translator,
    login: LoginForm,
    register: RegisterForm,
    parking: Option<ParkingStore>,
}

impl SalaApp {
    /// Create the app on the login screen
    pub fn new(locale: Locale, theme: ThemeName) -> Result<Self> {
        Ok(Self {
            navigation: NavigationState::new(),
            theme: ThemeState::new(theme),
            translator: Translator::new(locale)?,
            login: LoginForm::new(),
            register: RegisterForm::new(),
            parking: None,
        })
    }

    /// Current route
    pub fn route(&self) -> Route {
        self.navigation.current_route()
    }

    /// Parking store of the active parking screen
    pub fn parking(&self) -> Option<&ParkingStore> {
        self.parking.as_ref()
    }

    /// Active translator
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Handle one action
    ///
    /// Returns `Ok(false)` for a back press at the root screen.
    pub fn handle(&mut self, action: Action) -> Result<bool> {
        let route = self.route();
        let wrong = || AppError::WrongScreen {
            action: action.name(),
            route,
        };

        match (&action, route) {
            (Action::SetEmail(v), Route::Login) => self.login.set_email(v.clone()),
            (Action::SetPassword(v), Route::Login) => self.login.set_password(v.clone()),
            (Action::SetEmail(v), Route::Register) => self.register.set_email(v.clone()),
            (Action::SetPassword(v), Route::Register) => self.register.set_password(v.clone()),
            (Action::SetConfirmPassword(v), Route::Register) => {
                self.register.set_confirm_password(v.clone())
            }
            (Action::SubmitLogin, Route::Login) => {
                let intent = self.login.submit();
                self.navigation.apply_intent(intent);
            }
            (Action::OpenRegister, Route::Login) => {
                let intent = self.login.open_registration();
                self.navigation.apply_intent(intent);
            }
            (Action::SubmitRegister, Route::Register) => {
                let intent = self.register.submit();
                self.navigation.apply_intent(intent);
            }
            (Action::Back, _) => {
                if !self.navigation.go_back() {
                    return Ok(false);
                }
            }
            (Action::Tap(id), Route::ParkingLot) => {
                let store = self.parking.as_ref().ok_or(StoreError::Closed)?;
                store.activate(*id)?;
            }
            _ => return Err(wrong()),
        }

        self.sync_screen_lifecycle();
        Ok(true)
    }

    /// Build the current screen
    pub fn render(&self) -> Screen {
        match self.route() {
            Route::Login => Screen::Login(LoginScreen::build(&self.login, &self.translator)),
            Route::Register => {
                Screen::Register(RegisterScreen::build(&self.register, &self.translator))
            }
            Route::ParkingLot => {
                let state = self
                    .parking
                    .as_ref()
                    .map(|store| store.snapshot())
                    .unwrap_or_default();
                Screen::ParkingLot(ParkingLotScreen::build(
                    &state,
                    self.theme.current_theme(),
                    &self.translator,
                ))
            }
        }
    }

    fn sync_screen_lifecycle(&mut self) {
        let Some(pending) = self.navigation.complete_navigation() else {
            return;
        };

        if pending.from == Route::ParkingLot {
            if let Some(store) = self.parking.take() {
                store.close();
            }
        }
        if pending.to == Route::ParkingLot {
            self.parking = Some(ParkingStore::new());
        }
    }
}
