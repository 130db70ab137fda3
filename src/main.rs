mod ai;
mod config;
mod debug;
mod game;
mod game_modes;
mod ui;

use std::io::{self, Stdout};
use std::path::PathBuf;

use anyhow::Context;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use config::InputSampling;
use game::{InputSampler, KeyMap};
use game_modes::GameMode;

/// Parsed command line
#[derive(Debug, Default)]
struct CliArgs {
    demo: bool,
    debug: bool,
    config_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args)?;

    debug::init(cli.debug).context("failed to open debug log")?;
    info!(?cli, "Reflex Pong starting");

    let config = config::load_config(cli.config_path.as_deref())?;
    let keymap = KeyMap::from_config(&config.keybindings)?;
    let mode = if cli.demo {
        GameMode::Demo
    } else {
        GameMode::VersusAi
    };

    // Setup terminal
    enable_raw_mode()?;
    let (mut terminal, sampling) = match setup_terminal(config.input.sampling) {
        Ok(setup) => setup,
        Err(e) => {
            // Don't leave the shell in raw mode or on the alternate screen
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    };

    // Run game
    let input = InputSampler::new(keymap, sampling);
    let result = game_modes::run_game_vs_ai(&mut terminal, &config, input, mode);

    // Restore terminal even if the game failed
    let restored = restore_terminal(&mut terminal, sampling);

    if let Err(ref e) = result {
        warn!(error = %e, "game ended with an error");
    }
    if let Err(ref e) = restored {
        warn!(error = %e, "terminal restore incomplete");
    }
    result?;
    restored?;
    Ok(())
}

/// Parse command line arguments
fn parse_args(args: &[String]) -> anyhow::Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--demo" | "-d" => cli.demo = true,
            "--debug" => cli.debug = true,
            "--config" | "-c" => {
                let path = rest
                    .next()
                    .context("--config requires a path to a TOML file")?;
                cli.config_path = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other => {
                print_usage(&args[0]);
                anyhow::bail!("unknown argument: {}", other);
            }
        }
    }

    Ok(cli)
}

fn print_usage(program: &str) {
    println!("Reflex Pong - terminal Pong against a reflex AI");
    println!();
    println!("Usage:");
    println!("  {}                      # Play against the AI", program);
    println!("  {} --demo               # Watch the AI play itself", program);
    println!("  {} --config <path>      # Use a specific config file", program);
    println!("  {} --debug              # Log to {}", program, debug::log_file_path().display());
    println!();
    println!(
        "Config: {} (created on first run)",
        config::loader::get_config_path().display()
    );
}

/// Turn on key release reporting for per-tick sampling, falling back to
/// per-event sampling on terminals that cannot report releases.
fn enable_input_sampling(stdout: &mut Stdout, requested: InputSampling) -> InputSampling {
    if requested == InputSampling::PerEvent {
        return requested;
    }

    match supports_keyboard_enhancement() {
        Ok(true) => {
            let flags = KeyboardEnhancementFlags::REPORT_EVENT_TYPES;
            match execute!(stdout, PushKeyboardEnhancementFlags(flags)) {
                Ok(()) => InputSampling::PerTick,
                Err(e) => {
                    warn!(error = %e, "could not enable key release events, sampling per event");
                    InputSampling::PerEvent
                }
            }
        }
        Ok(false) => {
            warn!("terminal does not report key releases, sampling per event");
            InputSampling::PerEvent
        }
        Err(e) => {
            warn!(error = %e, "keyboard enhancement query failed, sampling per event");
            InputSampling::PerEvent
        }
    }
}

/// Everything after raw mode: alternate screen, key release reporting, backend
fn setup_terminal(
    requested: InputSampling,
) -> io::Result<(Terminal<CrosstermBackend<Stdout>>, InputSampling)> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let sampling = enable_input_sampling(&mut stdout, requested);
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, sampling))
}

/// Undo the terminal setup. Every step runs even if an earlier one fails;
/// the first failure is returned.
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    sampling: InputSampling,
) -> io::Result<()> {
    let flags = if sampling == InputSampling::PerTick {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
    } else {
        Ok(())
    };
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();

    first_failure([flags, raw, screen, cursor])
}

fn first_failure(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().collect()
}
