//! Shell command parsing

use app_ui::app::Action;
use app_ui::components::activate_handler;
use app_ui::screens::handlers;
use parking_core::spots::SpotId;
use thiserror::Error;

/// Command parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Empty line
    #[error("Empty command")]
    Empty,

    /// Unrecognized command word
    #[error("Unknown command: {0}")]
    Unknown(String),

    /// A required argument is missing
    #[error("Missing argument for {0}")]
    MissingArgument(&'static str),

    /// `tap` argument is not a spot id
    #[error("Invalid spot id: {0}")]
    InvalidSpot(String),
}

/// One shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward to the app
    Action(Action),
    /// Re-render the current screen
    Show,
    /// List commands
    Help,
    /// Exit
    Quit,
}

/// Help text listing every command
pub const HELP: &str = "\
email <text>     set the email field
password <text>  set the password field
confirm <text>   set the password confirmation (registration)
login            press the login button
register         open registration (on login screen) or submit it
submit           submit the current entry form
back             go back
tap <id>         tap a parking spot
show             redraw the screen
help             this list
quit             exit";

/// Parse a line. `on_register` decides what `register` and `submit` mean.
pub fn parse_command(line: &str, on_register: bool) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let text_arg = |name: &'static str| {
        if rest.is_empty() {
            Err(CommandError::MissingArgument(name))
        } else {
            Ok(rest.to_string())
        }
    };

    // Words map onto the handler names the screens attach to components.
    let (handler, value) = match word.to_lowercase().as_str() {
        "" => return Err(CommandError::Empty),
        "email" => (handlers::EMAIL.to_string(), Some(text_arg("email")?)),
        "password" => (handlers::PASSWORD.to_string(), Some(text_arg("password")?)),
        "confirm" => (
            handlers::CONFIRM_PASSWORD.to_string(),
            Some(text_arg("confirm")?),
        ),
        "login" => (handlers::LOGIN.to_string(), None),
        "register" | "submit" if on_register => (handlers::REGISTER.to_string(), None),
        "register" => (handlers::OPEN_REGISTER.to_string(), None),
        "submit" => (handlers::LOGIN.to_string(), None),
        "back" => (handlers::BACK.to_string(), None),
        "tap" => {
            let arg = text_arg("tap")?;
            let id: SpotId = arg.parse().map_err(|_| CommandError::InvalidSpot(arg))?;
            (activate_handler(id), None)
        }
        "show" => return Ok(Command::Show),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Action::from_handler(&handler, value)
        .map(Command::Action)
        .ok_or(CommandError::Unknown(handler))
}
