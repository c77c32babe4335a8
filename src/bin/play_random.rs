use clap::Parser;
use pegsol::game::stalemate::legal_jumps;
use pegsol::game::{Event, GameState, GameStatus};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Plays uniformly random legal captures from a fresh board until the game
/// ends. Smoke-tests the engine end to end; it is not a solver.
#[derive(Parser, Debug)]
#[command(about = "Play random peg solitaire games", long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print every capture
    #[arg(long)]
    verbose: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut wins = 0usize;

    for game_idx in 0..args.games {
        let mut state = GameState::new_game();
        let mut captures = 0usize;
        while state.status() == GameStatus::Ongoing {
            let jumps = legal_jumps(state.board());
            if jumps.is_empty() {
                break;
            }
            let jump = jumps[rng.gen_range(0..jumps.len())];
            match state.attempt_jump(jump.origin, jump.dest) {
                Event::Captured { remaining, .. } => {
                    captures += 1;
                    if args.verbose {
                        println!("game {game_idx}: {} -> {}, {remaining} pegs left", jump.origin, jump.dest);
                    }
                }
                other => panic!("legal jump rejected: {other:?}"),
            }
        }
        if state.status() == GameStatus::Won {
            wins += 1;
        }
        println!(
            "game {game_idx}: {:?} after {captures} captures, {} pegs left",
            state.status(),
            state.pegs()
        );
    }
    println!("{wins}/{} games solved", args.games);
}
