//! Command line perft runner.
//!
//! Usage:
//! `cargo run --release --bin perft -- --depth 5`
//! `cargo run --release --bin perft -- --fen "<FEN>" --depth 3 --divide`

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{debug, info};

use mailbox_chess::game_state::board_state::BoardState;
use mailbox_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use mailbox_chess::move_generation::perft::{perft, perft_detailed, perft_divide};

#[derive(Parser, Debug)]
#[command(author, version, about = "Count legal move paths from a position", long_about = None)]
struct Args {
    /// Position to search from
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    /// Number of plies to enumerate
    #[arg(short, long, default_value_t = 4)]
    depth: u8,

    /// Print the node count below each root move
    #[arg(long)]
    divide: bool,

    /// Classify leaf moves (captures, en passant, castles, promotions, checks)
    #[arg(long, conflicts_with = "divide")]
    detailed: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .init();

    let state = match BoardState::from_fen(&args.fen) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    debug!("position:\n{state}");

    let started = Instant::now();
    let nodes = if args.divide {
        let divide = perft_divide(&state, args.depth);
        for (mv, count) in &divide {
            println!("{mv}: {count}");
        }
        println!();
        divide.iter().map(|(_, count)| count).sum()
    } else if args.detailed {
        let counts = perft_detailed(&state, args.depth);
        println!("captures={}", counts.captures);
        println!("en_passant={}", counts.en_passant);
        println!("castles={}", counts.castles);
        println!("promotions={}", counts.promotions);
        println!("checks={}", counts.checks);
        counts.nodes
    } else {
        perft(&state, args.depth)
    };
    let elapsed = started.elapsed();

    println!("nodes={nodes}");
    let nps = (nodes as f64 / elapsed.as_secs_f64().max(1e-9)) as u64;
    info!("depth {} in {} ms ({nps} nodes/s)", args.depth, elapsed.as_millis());

    ExitCode::SUCCESS
}
