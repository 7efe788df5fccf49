//! lithos-tools library crate
//!
//! Support code for the two helper binaries that sit next to the `lithos`
//! game build: `texture` (greyscale block texture generation and PPM output)
//! and `launcher` (finding and running a prebuilt game executable). The
//! binaries under `src/bin/` call `gen_texture()` and `run_game()`.
//!
//! Public API
//!
//! - `gen_texture()` — entrypoint for the `gen-texture` binary.
//! - `run_game()` — entrypoint for the `run-game` binary.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod launcher;
pub mod texture;

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::texture::{BLOCK_SIZE, NoiseRange, generate_block_texture, generate_noise};

/// Generate the greyscale block texture used by the game.
#[derive(Parser, Debug)]
#[command(
    name = "gen-texture",
    author,
    version,
    about,
    long_about = None,
    after_help = "Run with no arguments to write the 16x16 block texture to \
                  assets/textures/block.ppm. The options only exist for testing and tooling."
)]
struct TextureCli {
    /// Output file (its directory must already exist)
    #[arg(short = 'o', long = "output", default_value = texture::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Seed the noise for reproducible output
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Read the file back and check its contents after writing
    #[arg(long = "verify", action = ArgAction::SetTrue)]
    verify: bool,
}

/// Find a prebuilt lithos executable and run it.
///
/// Only the build type is parsed here. Everything after it, including `--`,
/// `-h` and `--help`, belongs to the game and is forwarded untouched.
#[derive(Parser, Debug)]
#[command(
    name = "run-game",
    author,
    version,
    about,
    long_about = None,
    override_usage = "run-game <BUILD_TYPE> [ARGS]...",
    after_help = "Any arguments after BUILD_TYPE are passed to the game unchanged."
)]
struct LaunchCli {
    /// Build configuration, e.g. debug or release
    build_type: String,
}

/// Split argv into the part the launcher parses (program name and build type)
/// and the arguments forwarded to the game.
fn split_launch_args(argv: Vec<OsString>) -> (Vec<OsString>, Vec<OsString>) {
    let mut own = argv;
    let forwarded = if own.len() > 2 { own.split_off(2) } else { Vec::new() };
    (own, forwarded)
}

/// Run the `gen-texture` CLI.
///
/// Writes a 16x16 grey noise image to `assets/textures/block.ppm` (or
/// `--output`). Any failure, including a missing output directory, is printed
/// to stderr and exits with code 1.
pub fn gen_texture() {
    let cli = TextureCli::parse();

    let pixmap = match cli.seed {
        Some(seed) => generate_noise(
            BLOCK_SIZE,
            BLOCK_SIZE,
            NoiseRange::default(),
            &mut StdRng::seed_from_u64(seed),
        )
        .unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }),
        None => generate_block_texture(),
    };

    if let Err(e) = texture::write_ppm(&pixmap, &cli.output) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    if cli.verify
        && let Err(e) = texture::verify_ppm(&cli.output, NoiseRange::default())
    {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    println!(
        "Wrote {} ({}x{})",
        cli.output.display(),
        pixmap.width,
        pixmap.height
    );
}

/// Run the `run-game` CLI.
///
/// Usage: `run-game <build_type> [extra args...]`. Exits with the game's own
/// exit code, 1 when the executable cannot be found or the build type is
/// missing, and 0 when the user interrupts the game with Ctrl+C.
pub fn run_game() {
    let (own, forwarded) = split_launch_args(std::env::args_os().collect());
    let cli = match LaunchCli::try_parse_from(own) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Usage problems go to stdout with exit code 1.
            print!("{}", e);
            std::process::exit(1);
        }
    };

    let interrupted = launcher::install_interrupt_handler().unwrap_or_else(|e| {
        eprintln!("warning: {}", e);
        Arc::new(AtomicBool::new(false))
    });

    let code = launcher::run(Path::new(""), &cli.build_type, &forwarded, &interrupted);
    std::process::exit(code);
}
