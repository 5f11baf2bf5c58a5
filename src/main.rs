#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use othello::{
    coord_to_string, init_logging, print_board, print_score, CliPlayer, GameEvent, GameSession,
    GameStatus, MoveSelector, Outcome, Player, RandomAi, AI_MOVE_DELAY_MS,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::time::{sleep, Duration};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play as Black against the random-move computer opponent.
    Play {
        #[arg(long, help = "Fix RNG seed for a reproducible opponent (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play both sides to completion.
    Auto {
        #[arg(long, help = "Fix RNG seed for a reproducible game (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn report_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::Pass(player) => println!("{} has no move and passes.", player),
            GameEvent::GameOver { score, outcome } => {
                println!(
                    "\nGame over. Black: {}  White: {}",
                    score.black, score.white
                );
                match outcome {
                    Outcome::BlackWin => println!("Black wins!"),
                    Outcome::WhiteWin => println!("White wins!"),
                    Outcome::Tie => println!("It's a tie!"),
                }
            }
        }
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (opponent will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let mut human = CliPlayer::new();
            let mut ai = RandomAi::new();
            let mut session = GameSession::new();

            while !session.is_finished() {
                let player = session.current_player();
                let selected = match player {
                    Player::Black => {
                        print_board(session.board(), Some(player));
                        print_score(session.board());
                        human.select_move(&mut rng, session.board(), player)
                    }
                    Player::White => {
                        println!("White is thinking...");
                        sleep(Duration::from_millis(AI_MOVE_DELAY_MS)).await;
                        ai.select_move(&mut rng, session.board(), player)
                    }
                };
                let Some((r, c)) = selected else { break };
                log::debug!("{} plays {}", player, coord_to_string(r, c));
                if player == Player::White {
                    println!("White plays {}.", coord_to_string(r, c));
                }
                match session.play(r, c) {
                    Ok(events) => report_events(&events),
                    Err(e) => println!("Move rejected: {}", e),
                }
            }
            print_board(session.board(), None);
        }
        Commands::Auto { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let mut ai = RandomAi::new();
            let mut session = GameSession::new();

            while !session.is_finished() {
                let player = session.current_player();
                let Some((r, c)) = ai.select_move(&mut rng, session.board(), player) else {
                    break;
                };
                println!("{} plays {}", player, coord_to_string(r, c));
                let events = session.play(r, c).map_err(|e| anyhow::anyhow!(e))?;
                report_events(&events);
            }
            print_board(session.board(), None);
            if let GameStatus::Finished(outcome) = session.status() {
                log::info!("Final outcome: {:?}", outcome);
            }
        }
    }
    Ok(())
}
