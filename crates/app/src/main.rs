use std::fmt;
use std::sync::{Arc, Mutex};

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::info;

use catalog::{Catalog, ConfigError, DirectoryImages, ImageSource};
use services::{GameRng, GameService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    game: Arc<Mutex<GameService>>,
}

impl UiApp for DesktopApp {
    fn game(&self) -> Arc<Mutex<GameService>> {
        Arc::clone(&self.game)
    }
}

struct Args {
    manifest_path: String,
    images_dir: String,
    seed: Option<u64>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--config <manifest.json>] [--images <dir>] [--seed <u64>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --config image_config.json");
    eprintln!("  --images images");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  BIRDSEYE_CONFIG, BIRDSEYE_IMAGES");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut manifest_path = std::env::var("BIRDSEYE_CONFIG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "image_config.json".into());
        let mut images_dir = std::env::var("BIRDSEYE_IMAGES")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "images".into());
        let mut seed = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    manifest_path = require_value(args, "--config")?;
                }
                "--images" => {
                    images_dir = require_value(args, "--images")?;
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            manifest_path,
            images_dir,
            seed,
        })
    }
}

fn build_game(args: &Args) -> Result<GameService, ConfigError> {
    let images = DirectoryImages::open(&args.images_dir)?;
    let catalog = Catalog::load(&args.manifest_path, &images)?;
    info!(
        entries = catalog.len(),
        images = images.len(),
        "game data loaded"
    );

    let service = GameService::new(catalog, Arc::new(images));
    Ok(match args.seed {
        Some(seed) => service.with_rng(GameRng::seeded(seed)),
        None => service,
    })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Catalog problems are fatal at startup; the game cannot run without
    // its manifest and images.
    let game = build_game(&args)?;

    let app = DesktopApp {
        game: Arc::new(Mutex::new(game)),
    };
    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Bird's Eye View")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt().with_env_filter("info").init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
