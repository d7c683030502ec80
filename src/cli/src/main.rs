#![warn(clippy::pedantic)]

mod config;
mod view;

use std::{io, path::PathBuf};

use clap::{Parser, Subcommand};
use cube_model::{Cube, CubeController, CubeEvent, CubeView, format_moves, parse_moves};
use env_logger::TimestampPrecision;
use log::{LevelFilter, debug};
use owo_colors::OwoColorize;

use crate::view::TerminalView;

/// Turn a 3x3x3 cube from the terminal
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The view configuration file to use, in TOML format. Defaults to
    /// `twisty/config.toml` in the platform's config directory.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a solved cube.
    Show,
    /// Apply a move sequence to a solved cube and print the result.
    Apply {
        /// The move sequence to apply, e.g. "R U' F2".
        sequence: String,
        /// Print the cube after every quarter turn.
        #[arg(long)]
        trace: bool,
    },
    /// Turn the cube interactively, one move sequence per line.
    Repl,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let view_config = config::load(cli.config.as_deref())?;
    let mut view = TerminalView::new(view_config);

    match cli.command {
        Commands::Show => {
            view.render(Cube::new().grid());
        }
        Commands::Apply { sequence, trace } => {
            run_apply(&mut view, &sequence, trace)?;
        }
        Commands::Repl => {
            run_repl(view)?;
        }
    }

    Ok(())
}

fn run_apply(view: &mut TerminalView, sequence: &str, trace: bool) -> color_eyre::Result<()> {
    let turns = parse_moves(sequence)?;
    debug!("Applying {}", format_moves(&turns));

    let mut cube = Cube::new();
    let events = cube.events();
    cube.apply(&turns);

    if trace {
        let mut turns = turns.iter();
        for event in events.try_iter() {
            match event {
                CubeEvent::Changed(grid) => {
                    if let Some(turn) = turns.next() {
                        println!("{}", turn.bold());
                    }
                    view.render(&grid);
                }
                CubeEvent::Solved => view.solved(),
            }
        }
    } else {
        view.render(cube.grid());
        if cube.is_solved() {
            view.solved();
        }
    }

    Ok(())
}

fn run_repl(view: TerminalView) -> color_eyre::Result<()> {
    eprintln!("Enter moves such as `R U R' U'`; `exit` to quit");

    let mut controller = CubeController::new(Cube::new(), view);

    loop {
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        let input = input.trim();
        if input == "exit" || input == "quit" {
            break;
        }

        match parse_moves(input) {
            Ok(turns) => {
                for turn in turns {
                    controller.request_turn(turn.face, turn.clockwise);
                }
            }
            Err(e) => eprintln!("{}", e.red()),
        }
    }

    Ok(())
}
