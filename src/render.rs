//! Plain-text rendering of screens
//!
//! Tiles are drawn as `[id mark]` where the mark encodes the tile treatment:
//! `*` selected, `x` occupied, `D` free accessible, a blank free regular.
//! Tiles that accept taps are drawn with square brackets, inert ones with
//! parentheses.

use app_ui::components::{Button, Input, SpotTile, Text};
use app_ui::screens::{LoginScreen, ParkingLotScreen, RegisterScreen, Screen};
use app_ui::theme::SpotTreatment;
use std::fmt::Write;

fn mark(treatment: SpotTreatment) -> char {
    match treatment {
        SpotTreatment::Selected => '*',
        SpotTreatment::Unavailable => 'x',
        SpotTreatment::AvailableDisabled => 'D',
        SpotTreatment::AvailableRegular => ' ',
    }
}

/// Draw one tile
pub fn tile(tile: &SpotTile) -> String {
    let (open, close) = if tile.clickable { ('[', ']') } else { ('(', ')') };
    format!("{}{:>2}{}{}", open, tile.spot_id, mark(tile.treatment), close)
}

fn text(out: &mut String, text: &Text) {
    let _ = writeln!(out, "{}", text.content);
}

fn input(out: &mut String, input: &Input) {
    let _ = writeln!(out, "{}: {}", input.label, input.value);
}

fn button(out: &mut String, button: &Button) {
    let _ = writeln!(out, "< {} >", button.label);
}

fn login(out: &mut String, screen: &LoginScreen) {
    text(out, &screen.title);
    out.push('\n');
    input(out, &screen.email);
    input(out, &screen.password);
    out.push('\n');
    button(out, &screen.submit);
    button(out, &screen.register);
}

fn register(out: &mut String, screen: &RegisterScreen) {
    text(out, &screen.title);
    out.push('\n');
    input(out, &screen.email);
    input(out, &screen.password);
    input(out, &screen.confirm_password);
    out.push('\n');
    button(out, &screen.submit);
    button(out, &screen.back);
}

fn parking(out: &mut String, screen: &ParkingLotScreen) {
    text(out, &screen.title);
    text(out, &screen.free);
    out.push('\n');
    for row in &screen.rows {
        let tiles: Vec<String> = row.tiles.iter().map(tile).collect();
        let _ = writeln!(out, "{}", tiles.join(" "));
    }
}

/// Draw a whole screen
pub fn screen(screen: &Screen) -> String {
    let mut out = String::new();
    match screen {
        Screen::Login(s) => login(&mut out, s),
        Screen::Register(s) => register(&mut out, s),
        Screen::ParkingLot(s) => parking(&mut out, s),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_ui::theme::light_theme;
    use i18n::{Locale, Translator};
    use parking_core::selection::SelectionState;

    #[test]
    fn test_parking_rows() {
        let t = Translator::new(Locale::En).unwrap();
        let state = SelectionState::initial();
        let drawn = screen(&Screen::ParkingLot(ParkingLotScreen::build(
            &state,
            &light_theme(),
            &t,
        )));

        let lines: Vec<&str> = drawn.lines().collect();
        assert_eq!(lines[0], "Yessenov University Parking");
        assert_eq!(lines[1], "Free spots: 14");
        assert_eq!(lines[3], "[ 1D] ( 2x) [ 3 ] [ 4 ] ( 5x) [ 6 ] [ 7 ]");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_selected_tile_marker() {
        let t = Translator::new(Locale::En).unwrap();
        let state = SelectionState::initial().activate(3).unwrap();
        let parking = ParkingLotScreen::build(&state, &light_theme(), &t);
        assert_eq!(tile(parking.tile(3).unwrap()), "[ 3*]");
        assert_eq!(tile(parking.tile(4).unwrap()), "( 4 )");
    }

    #[test]
    fn test_login_screen() {
        let t = Translator::new(Locale::Kk).unwrap();
        let drawn = screen(&Screen::Login(LoginScreen::build(
            &parking_core::auth::LoginForm::new(),
            &t,
        )));
        assert!(drawn.starts_with("Кіру\n"));
        assert!(drawn.contains("< Тіркелу >"));
    }
}
