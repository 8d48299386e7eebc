//! Screen models
//!
//! Each screen is built from application state plus the active theme and
//! translator, and is fully described by components from
//! [`crate::components`].

use crate::components::{Button, ButtonVariant, Input, InputType, SpotRow, SpotTile, Text};
use crate::navigation::Route;
use crate::theme::Theme;
use crate::tokens::spacing;
use i18n::Translator;
use parking_core::auth::{LoginForm, RegisterForm};
use parking_core::selection::SelectionState;
use serde::{Deserialize, Serialize};

/// Handler names routed back from entry screens
pub mod handlers {
    /// Email field changed
    pub const EMAIL: &str = "email";
    /// Password field changed
    pub const PASSWORD: &str = "password";
    /// Confirmation field changed
    pub const CONFIRM_PASSWORD: &str = "confirm_password";
    /// Login submitted
    pub const LOGIN: &str = "login";
    /// Registration screen requested
    pub const OPEN_REGISTER: &str = "open_register";
    /// Registration submitted
    pub const REGISTER: &str = "register";
    /// Back
    pub const BACK: &str = "back";
}

/// Login entry screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginScreen {
    /// Heading
    pub title: Text,
    /// Gap between stacked fields
    pub field_gap: f32,
    /// Email field
    pub email: Input,
    /// Password field
    pub password: Input,
    /// Submit button
    pub submit: Button,
    /// Registration button
    pub register: Button,
}

impl LoginScreen {
    /// Build from form state
    pub fn build(form: &LoginForm, t: &Translator) -> Self {
        let creds = form.credentials();
        Self {
            title: Text::headline(t.tr(Route::Login.title_key())),
            field_gap: spacing::SPACE_SM,
            email: Input::new(t.tr("field-email"), creds.email.clone())
                .with_type(InputType::Email)
                .on_change(handlers::EMAIL),
            password: Input::new(t.tr("field-password"), creds.password.clone())
                .with_type(InputType::Password)
                .on_change(handlers::PASSWORD),
            submit: Button::new(t.tr("login-submit")).on_press(handlers::LOGIN),
            register: Button::new(t.tr("login-register")).on_press(handlers::OPEN_REGISTER),
        }
    }
}

/// Registration screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterScreen {
    /// Heading
    pub title: Text,
    /// Gap between stacked fields
    pub field_gap: f32,
    /// Email field
    pub email: Input,
    /// Password field
    pub password: Input,
    /// Password confirmation field
    pub confirm_password: Input,
    /// Submit button
    pub submit: Button,
    /// Back button
    pub back: Button,
}

impl RegisterScreen {
    /// Build from form state
    pub fn build(form: &RegisterForm, t: &Translator) -> Self {
        let creds = form.credentials();
        Self {
            title: Text::headline(t.tr(Route::Register.title_key())),
            field_gap: spacing::SPACE_SM,
            email: Input::new(t.tr("field-email"), creds.email.clone())
                .with_type(InputType::Email)
                .on_change(handlers::EMAIL),
            password: Input::new(t.tr("field-password"), creds.password.clone())
                .with_type(InputType::Password)
                .on_change(handlers::PASSWORD),
            confirm_password: Input::new(
                t.tr("field-confirm-password"),
                form.confirm_password(),
            )
            .with_type(InputType::Password)
            .on_change(handlers::CONFIRM_PASSWORD),
            submit: Button::new(t.tr("register-submit")).on_press(handlers::REGISTER),
            back: Button::new(t.tr("nav-back"))
                .with_variant(ButtonVariant::Ghost)
                .on_press(handlers::BACK),
        }
    }
}

/// Parking lot occupancy screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingLotScreen {
    /// Heading
    pub title: Text,
    /// Free-spot counter
    pub free: Text,
    /// Rows in order of first appearance
    pub rows: Vec<SpotRow>,
    /// Gap between rows
    pub row_gap: f32,
    /// Screen padding
    pub padding: f32,
}

impl ParkingLotScreen {
    /// Build from the current selection state
    pub fn build(state: &SelectionState, theme: &Theme, t: &Translator) -> Self {
        let selection = state.selection();
        let rows = state
            .rows()
            .into_iter()
            .map(|(row, spots)| {
                let tiles = spots
                    .into_iter()
                    .map(|spot| {
                        SpotTile::new(spot, selection, theme)
                            .with_label(t.tr_arg("parking-spot", "id", spot.id))
                    })
                    .collect();
                SpotRow::new(row, t.tr_arg("parking-row", "row", row), tiles)
            })
            .collect();

        Self {
            title: Text::headline(t.tr(Route::ParkingLot.title_key())),
            free: Text::caption(t.tr_arg("parking-free", "count", state.available_count())),
            rows,
            row_gap: spacing::SPACE_ROW,
            padding: spacing::SPACE_LG,
        }
    }

    /// Find a tile by spot id
    pub fn tile(&self, id: parking_core::SpotId) -> Option<&SpotTile> {
        self.rows
            .iter()
            .flat_map(|row| row.tiles.iter())
            .find(|tile| tile.spot_id == id)
    }
}

/// Any renderable screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    /// Login
    Login(LoginScreen),
    /// Registration
    Register(RegisterScreen),
    /// Parking lot
    ParkingLot(ParkingLotScreen),
}

impl Screen {
    /// Route this screen belongs to
    pub fn route(&self) -> Route {
        match self {
            Screen::Login(_) => Route::Login,
            Screen::Register(_) => Route::Register,
            Screen::ParkingLot(_) => Route::ParkingLot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::light_theme;
    use i18n::Locale;
    use parking_core::SpotId;

    fn kk() -> Translator {
        Translator::new(Locale::Kk).unwrap()
    }

    #[test]
    fn test_login_screen_labels() {
        let screen = LoginScreen::build(&LoginForm::new(), &kk());
        assert_eq!(screen.title.content, "Кіру");
        assert_eq!(screen.email.label, "Электрондық пошта");
        assert_eq!(screen.password.label, "Құпия сөз");
        assert_eq!(screen.submit.label, "Кіру");
        assert_eq!(screen.register.label, "Тіркелу");
        assert_eq!(screen.register.on_press.as_deref(), Some(handlers::OPEN_REGISTER));
    }

    #[test]
    fn test_login_screen_reflects_form() {
        let mut form = LoginForm::new();
        form.set_email("a@b.kz");
        let screen = LoginScreen::build(&form, &kk());
        assert_eq!(screen.email.value, "a@b.kz");
        assert!(screen.password.is_empty());
    }

    #[test]
    fn test_register_screen() {
        let mut form = RegisterForm::new();
        form.set_confirm_password("pw");
        let t = Translator::new(Locale::En).unwrap();
        let screen = RegisterScreen::build(&form, &t);
        assert_eq!(screen.title.content, "Sign up");
        assert_eq!(screen.confirm_password.value, "pw");
        assert_eq!(screen.back.on_press.as_deref(), Some(handlers::BACK));
    }

    #[test]
    fn test_parking_screen_layout() {
        let state = SelectionState::initial();
        let screen = ParkingLotScreen::build(&state, &light_theme(), &kk());

        assert_eq!(screen.title.content, "Yessenov University Тұрағы");
        assert_eq!(screen.free.content, "Бос орындар: 14");
        assert_eq!(screen.rows.len(), 3);
        for (i, row) in screen.rows.iter().enumerate() {
            assert_eq!(row.row, i as u32 + 1);
            assert_eq!(row.label, format!("{}-қатар", i + 1));
            assert_eq!(row.tiles.len(), 7);
        }
        assert_eq!(screen.tile(15).unwrap().label.as_deref(), Some("Орын 15"));
    }

    #[test]
    fn test_parking_screen_after_selection() {
        let state = SelectionState::initial().activate(3).unwrap();
        let screen = ParkingLotScreen::build(&state, &light_theme(), &kk());

        assert_eq!(screen.tile(3).unwrap().background, "#0000FF");
        let clickable: Vec<SpotId> = screen
            .rows
            .iter()
            .flat_map(|r| r.tiles.iter())
            .filter(|t| t.clickable)
            .map(|t| t.spot_id)
            .collect();
        assert_eq!(clickable, vec![3]);
    }

    #[test]
    fn test_screen_route() {
        let screen = Screen::Login(LoginScreen::build(&LoginForm::new(), &kk()));
        assert_eq!(screen.route(), Route::Login);
    }
}
