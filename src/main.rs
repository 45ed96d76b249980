use color_eyre::eyre::{Result, eyre};
use lotto_cart::{
    Error,
    app::App,
    catalog::GameCatalog,
    money::BrlFormatter,
};
use rand::{SeedableRng, rngs::StdRng};
use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};
use tracing::info;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::EnvFilter;

mod ui;

// Keeps the non-blocking writer alive for the whole process.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

struct CliArgs {
    games_path: PathBuf,
    log_dir: PathBuf,
    seed: Option<u64>,
}

fn print_usage_and_exit() -> ! {
    println!(
        "Usage: lotto-cart [--games <path>] [--log-dir <path>] [--seed <n>]\n\
         \n\
         Flags:\n\
           --games <path>    Catalog document to load (default games.json)\n\
           --log-dir <path>  Directory for rolling log files (default logs)\n\
           --seed <n>        Seed the random-complete generator for reproducible picks"
    );
    std::process::exit(0);
}

fn parse_cli_args() -> Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let mut games_path: Option<PathBuf> = None;
    let mut log_dir: Option<PathBuf> = None;
    let mut seed: Option<u64> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--games" => {
                let path = args
                    .next()
                    .ok_or_else(|| eyre!("--games requires a path argument"))?;
                if games_path.is_some() {
                    return Err(eyre!("--games may only be specified once"));
                }
                games_path = Some(PathBuf::from(path));
            }
            "--log-dir" => {
                let path = args
                    .next()
                    .ok_or_else(|| eyre!("--log-dir requires a path argument"))?;
                if log_dir.is_some() {
                    return Err(eyre!("--log-dir may only be specified once"));
                }
                log_dir = Some(PathBuf::from(path));
            }
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| eyre!("--seed requires a number argument"))?;
                if seed.is_some() {
                    return Err(eyre!("--seed may only be specified once"));
                }
                seed = Some(value.parse()?);
            }
            "--help" | "-h" => print_usage_and_exit(),
            other => return Err(eyre!("Unknown argument: {other}")),
        }
    }

    Ok(CliArgs {
        games_path: games_path.unwrap_or_else(|| PathBuf::from("games.json")),
        log_dir: log_dir.unwrap_or_else(|| PathBuf::from("logs")),
        seed,
    })
}

fn init_logging(dir: &Path) {
    let file = rolling::daily(dir, "lotto-cart.log");
    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    let _ = LOG_GUARD.set(guard);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = parse_cli_args()?;
    init_logging(&args.log_dir);
    info!("starting lotto-cart");

    // The catalog load is the only async boundary; nothing below runs until
    // it succeeds.
    let catalog = GameCatalog::load(&args.games_path).await?;
    info!(games = catalog.list().len(), "catalog loaded");

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut ui_state = ui::UiState::default();
    ui::terminal_enter(&mut ui_state)?;
    let mut app = App::new(catalog, ui_state, rng, BrlFormatter);
    let res = run_loop(&mut app).await;
    ui::terminal_exit()?;
    res
}

async fn run_loop(app: &mut App<ui::UiState, StdRng>) -> Result<()> {
    ui::draw(app.view_mut())?;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            ev = ui::next_event(app.view_mut()) => {
                match ev? {
                    ui::UserEvent::Quit => break,
                    ui::UserEvent::SelectGame(id) => app.switch_game(id)?,
                    ui::UserEvent::ToggleNumber(n) => app.toggle_number(n)?,
                    ui::UserEvent::RandomComplete => {
                        app.complete_randomly()?;
                        app.view_mut().set_status("Surprise picks filled in");
                    }
                    ui::UserEvent::ClearSelection => {
                        app.clear_selection();
                        app.view_mut().set_status("Selection cleared");
                    }
                    ui::UserEvent::AddToCart => match app.add_to_cart() {
                        Ok(id) => app.view_mut().set_status(format!("Bet {id} added to cart")),
                        Err(Error::IncompleteSelection { selected, required }) => {
                            app.view_mut().set_status(format!(
                                "Pick {required} numbers to add this bet ({selected} selected)"
                            ));
                        }
                        Err(e) => return Err(e.into()),
                    },
                    ui::UserEvent::RemoveEntry(id) => {
                        app.remove_entry(id)?;
                        app.view_mut().set_status(format!("Bet {id} removed"));
                    }
                    ui::UserEvent::Redraw => {}
                }
                ui::draw(app.view_mut())?;
            }
        }
    }
    Ok(())
}
