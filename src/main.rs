use std::panic;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::{LevelFilter, info};
use trail_snake::clock::FrameLimiter;
use trail_snake::config::{FRAMES_PER_SECOND, RestartPolicy, Settings};
use trail_snake::error::AppError;
use trail_snake::game::GameState;
use trail_snake::logging::init_file_logger;
use trail_snake::renderer;
use trail_snake::terminal_runtime::{TerminalSession, restore_terminal};
use trail_snake::ui::hud::HudInfo;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Settings file to read instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for apple placement and spawn direction.
    #[arg(long)]
    seed: Option<u64>,

    /// Spawn a fresh snake when restarting a lost round.
    #[arg(long)]
    respawn: bool,

    /// Write the log here instead of the platform cache directory.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log turns and apples as well as round changes.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let settings = apply_cli(Settings::load(cli.config.as_deref())?, &cli);

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::from(settings.log_level)
    };
    init_file_logger(&settings.log_path(), level)?;
    install_panic_hook();

    info!(
        "starting session (restart policy {:?}, seed {:?})",
        settings.restart_policy, settings.seed
    );

    let mut session = TerminalSession::enter()?;
    let best_score = run(&mut session, &settings)?;
    drop(session);

    info!("session ended, best score {best_score}");
    Ok(())
}

fn apply_cli(mut settings: Settings, cli: &Cli) -> Settings {
    if cli.respawn {
        settings.restart_policy = RestartPolicy::Respawn;
    }
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if cli.log_file.is_some() {
        settings.log_file.clone_from(&cli.log_file);
    }
    settings
}

fn run(session: &mut TerminalSession, settings: &Settings) -> Result<u32, AppError> {
    let mut state = match settings.seed {
        Some(seed) => GameState::new_with_seed(settings.restart_policy, seed),
        None => GameState::new(settings.restart_policy),
    };
    let hud_info = HudInfo {
        restart_policy: state.restart_policy(),
    };
    let mut limiter = FrameLimiter::new(FRAMES_PER_SECOND);
    let mut elapsed = Duration::ZERO;

    loop {
        let inputs = session.poll_inputs(Duration::ZERO)?;
        let snapshot = state.frame(&inputs, elapsed);
        if snapshot.quit {
            return Ok(snapshot.best_score);
        }

        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &snapshot, &hud_info))?;

        elapsed = limiter.wait();
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
