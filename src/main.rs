use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};
use typetick::{
    app::App,
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    language::Language,
    logging,
    prompt::PromptGenerator,
    runtime::{CrosstermEventSource, Runner},
    session::{Command, SessionConfig, SessionState},
    ui::{Renderer, Theme},
};

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// minimal timed typing test for the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A timed typing test: type the prompt until the clock runs out, then see your speed and accuracy."
)]
pub struct Cli {
    /// number of words to use in test
    #[clap(short = 'w', long)]
    number_of_words: Option<usize>,

    /// number of seconds to run test
    #[clap(short = 's', long)]
    number_of_secs: Option<u64>,

    /// bundled word list to pull words from
    #[clap(short = 'l', long)]
    language: Option<String>,

    /// JSON word file to pull words from instead of a bundled list
    #[clap(long, value_name = "PATH", conflicts_with = "language")]
    words: Option<PathBuf>,

    /// custom prompt to use
    #[clap(short = 'p', long)]
    prompt: Option<String>,

    /// prompt characters per line before wrapping at the next space
    #[clap(long)]
    wrap_width: Option<usize>,

    /// read settings from this file instead of the per-user config
    #[clap(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Overlay command line flags on the stored settings
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(n) = self.number_of_words {
            config.number_of_words = n;
        }
        if let Some(secs) = self.number_of_secs {
            config.time_limit_secs = secs;
        }
        if let Some(ref language) = self.language {
            config.language = language.clone();
        }
        if let Some(width) = self.wrap_width {
            config.wrap_width = width;
        }
        config
    }

    fn load_language(&self, config: &Config) -> typetick::Result<Language> {
        match self.words {
            Some(ref path) => Language::from_path(path),
            None => Language::bundled(&config.language),
        }
    }
}

fn startup(cli: &Cli, store: &impl ConfigStore) -> typetick::Result<App> {
    let config = cli.apply_to(store.load());
    config.validate()?;
    tracing::info!(?config, "effective settings");

    build_app(cli, &config)
}

fn build_app(cli: &Cli, config: &Config) -> typetick::Result<App> {
    if cli.prompt.as_deref() == Some("") {
        return Err(typetick::Error::ConfigInvalid {
            message: "custom prompt must not be empty".to_string(),
        });
    }

    // A custom prompt never touches the word source
    let prompt = match cli.prompt {
        Some(ref prompt) => prompt.clone(),
        None => {
            let language = cli.load_language(config)?;
            PromptGenerator::new(config.number_of_words).generate(&language)?
        }
    };

    let session = SessionState::new(
        &prompt,
        &SessionConfig {
            time_limit_secs: config.time_limit_secs,
        },
    );

    Ok(App::new(
        session,
        Renderer::new(Theme::default(), config.wrap_width),
    ))
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Err(err) = logging::init(&AppDirs::log_dir()) {
        eprintln!("warning: {err}");
    }

    let store = cli
        .config
        .as_ref()
        .map(FileConfigStore::with_path)
        .unwrap_or_default();

    let mut app = match startup(&cli, &store) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("startup failed: {err}");
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::InvalidValue, format!("failed to start: {err}"))
                .exit();
        }
    };

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result?;

    // The alternate screen is gone; leave the results behind in the shell.
    if let Some(summary) = app.summary() {
        println!("{summary}");
    }

    Ok(())
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let mut runner = Runner::new(CrosstermEventSource::new(), TICK_INTERVAL);

    if let Command::Tick = app.init() {
        runner.schedule_tick();
    }

    terminal.draw(|f| ui(app, f))?;

    while let Some(event) = runner.step() {
        match app.dispatch(&event) {
            Command::Quit => break,
            Command::Tick => runner.schedule_tick(),
            Command::None => {}
        }

        terminal.draw(|f| ui(app, f))?;
    }

    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
