//! Console tic-tac-toe. Input and output live here; for the game
//! engine itself, see the library crate.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe::{
    Game, GameStatus, HumanPlayer, InputClosed, Marker, RandomBot, Seat, SessionRecorder,
    StdinInput, TurnError, render::render,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board stays clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let first = Seat::new(
        Marker::X,
        Box::new(HumanPlayer::new("Player 1", Marker::X, StdinInput)),
    );
    let second = if cli.solo {
        info!(seed = ?cli.seed, "single-player mode, bot plays O");
        let bot = match cli.seed {
            Some(seed) => RandomBot::seeded("Bot 1", seed),
            None => RandomBot::new("Bot 1"),
        };
        Seat::new(Marker::O, Box::new(bot))
    } else {
        Seat::new(
            Marker::O,
            Box::new(HumanPlayer::new("Player 2", Marker::O, StdinInput)),
        )
    };

    let recorder = if cli.no_logs {
        None
    } else {
        Some(SessionRecorder::new(&cli.logs)?)
    };

    let mut game = Game::new(first, second);

    let status = loop {
        let frame = render(game.board());
        print!("{frame}");
        if let Some(recorder) = &recorder {
            recorder.append_board(&frame)?;
        }

        match game.play_turn() {
            Ok(GameStatus::InProgress) => {}
            Ok(status) => break status,
            // Illegal or malformed moves leave the state untouched;
            // the same player just gets prompted again.
            Err(TurnError::Rejected(err)) => println!("{err}"),
            Err(TurnError::Source(err)) => {
                if err.downcast_ref::<InputClosed>().is_some() {
                    return Err(err);
                }
                println!("{err}");
            }
        }
    };

    let frame = render(game.board());
    print!("{frame}");
    match status {
        GameStatus::Won(marker) => println!("Player {marker} wins!"),
        GameStatus::Draw => println!("It's a draw!"),
        GameStatus::InProgress => unreachable!("loop only breaks on terminal status"),
    }

    if let Some(recorder) = &recorder {
        recorder.append_board(&frame)?;
        recorder.record_outcome(status)?;
        recorder.save_moves(game.history(), status)?;
        let tally = recorder.tally()?;
        debug!(?tally, "session totals");
        println!(
            "X: {} wins, O: {} wins, draws: {}, games: {}",
            tally.x_wins,
            tally.o_wins,
            tally.draws,
            tally.games()
        );
    }

    Ok(())
}
