//! Rubik's Cube
//!
//! An animated 3x3x3 cube. Slices turn one quarter turn at a time; a turn
//! must finish animating before the next is accepted. Runs either as an
//! interactive 3D viewer or headless, printing the cube's faces after a
//! move sequence.

mod visualization;

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use rubik::notation::{self, Move};
use rubik::{facelets, Clock, Cube, ManualClock};

/// Turns slices of an animated Rubik's cube.
#[derive(Parser)]
#[command(name = "rubik")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How long each quarter turn animates, in milliseconds.
    #[arg(long, global = true, default_value_t = 500)]
    duration_ms: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive 3D viewer.
    View,
    /// Apply a move sequence headlessly and print the resulting faces.
    Play {
        /// Whitespace-separated moves, e.g. "R U R' U'".
        moves: String,
    },
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_module(
            "rubik",
            if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Warn
            },
        )
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let duration = Duration::from_millis(cli.duration_ms);

    match cli.command {
        Some(Command::Play { moves }) => match notation::parse_moves(&moves) {
            Ok(moves) => {
                print!("{}", run_play(&moves, duration));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Invalid moves: {}", e);
                ExitCode::from(2)
            }
        },
        Some(Command::View) | None => {
            println!("Controls: R M L U E D F S B turn, Shift reverses, arrows tilt, Home resets");
            visualization::display(Cube::new().with_move_duration(duration));
            ExitCode::SUCCESS
        }
    }
}

/// Plays `moves` on a fresh cube, settling each before the next.
fn play(moves: &[Move], duration: Duration) -> Cube<ManualClock> {
    let (cube, clock) = Cube::manual();
    let mut cube = cube.with_move_duration(duration);
    for &mv in moves {
        cube.apply(mv);
        clock.advance(duration);
        cube.tick(clock.now());
    }
    cube
}

/// Plays `moves` and formats the net plus a solved marker.
fn run_play(moves: &[Move], duration: Duration) -> String {
    let cube = play(moves, duration);
    let mut output = format!("Moves: {}\n\n", notation::format_moves(moves));
    output.push_str(&facelets::format_net(&cube));
    output.push_str(if facelets::is_solved(&cube) {
        "\nSolved\n"
    } else {
        "\nNot solved\n"
    });
    output
}
