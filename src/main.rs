use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use app_ui::app::{AppError, SalaApp};
use app_ui::navigation::Route;
use app_ui::theme::ThemeName;
use clap::Parser;
use i18n::Locale;
use sala::command::HELP;
use sala::config::env_language_tags;
use sala::{parse_command, render, AppConfig, Command};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "sala", version, about = "Parking lot occupancy selector")]
struct Cli {
    /// JSON config file
    #[arg(short = 'c', long = "config", env = "SALA_CONFIG")]
    config: Option<PathBuf>,

    /// UI language (kk, en); defaults to the system locale
    #[arg(long = "locale")]
    locale: Option<Locale>,

    /// Color theme (light, dark)
    #[arg(long = "theme")]
    theme: Option<ThemeName>,
}

fn init_tracing(default_filter: &str) {
    let env = std::env::var("SALA_LOG").unwrap_or_else(|_| default_filter.to_string());
    let filter = tracing_subscriber::EnvFilter::from_str(&env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    }
    .with_overrides(cli.locale, cli.theme);

    init_tracing(&config.log);
    let locale = config.resolve_locale(&env_language_tags());
    info!(%locale, theme = %config.theme, "Starting");

    let mut app = SalaApp::new(locale, config.theme).context("creating app")?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", render::screen(&app.render()));
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let on_register = app.route() == Route::Register;

        match parse_command(&line, on_register) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Show) => print!("{}", render::screen(&app.render())),
            Ok(Command::Action(action)) => match app.handle(action) {
                Ok(true) => print!("\n{}", render::screen(&app.render())),
                Ok(false) => break,
                Err(e @ AppError::Store(_)) => println!("! {}", e),
                Err(e) => println!("! {} (type 'help')", e),
            },
            Err(e) => println!("! {} (type 'help')", e),
        }
        stdout.flush().context("flushing stdout")?;
    }

    info!("Bye");
    Ok(())
}
