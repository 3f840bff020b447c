#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::collections::HashSet;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use harpoon::{
    init_logging, print_known_board, print_probability_board, serve_session, Coord, Feedback,
    FilePatternStore, GameSession, MemoryPatternStore, PatternStore, SessionState,
    TcpLineTransport, BOARD_SIZE, DEFAULT_LEARNING_RATE, DEFAULT_PATTERNS_PATH, FLEET_LENGTHS,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};
#[cfg(feature = "std")]
use tokio::net::TcpListener;

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
    /// Host the targeting engine and wait for game clients.
    Serve {
        #[arg(long, default_value = "127.0.0.1:12345")]
        bind: String,
        #[arg(long, default_value = DEFAULT_PATTERNS_PATH)]
        patterns: PathBuf,
        #[arg(long, default_value_t = DEFAULT_LEARNING_RATE)]
        learning_rate: f64,
        #[arg(long, help = "Fix RNG seed for reproducible fallback picks")]
        seed: Option<u64>,
    },
    /// Play a self-contained game against a randomly placed hidden fleet.
    Demo {
        #[arg(long, help = "Fix RNG seed for a reproducible game")]
        seed: Option<u64>,
        #[arg(long, help = "Persist learned patterns to this file")]
        patterns: Option<PathBuf>,
        #[arg(long, help = "Print the board and probability map every turn")]
        verbose: bool,
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
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            bind,
            patterns,
            learning_rate,
            seed,
        } => {
            let listener = TcpListener::bind(&bind).await?;
            println!("Waiting for game clients on {}...", bind);
            let mut games: u64 = 0;
            loop {
                let (stream, addr) = listener.accept().await?;
                println!("Game client connected from {}", addr);
                let store = Box::new(FilePatternStore::new(&patterns));
                let mut session =
                    GameSession::new(BOARD_SIZE, store).map_err(|e| anyhow::anyhow!(e))?;
                session.set_learning_rate(learning_rate);
                let mut rng = make_rng(seed.map(|s| s.wrapping_add(games)));
                let mut transport = TcpLineTransport::new(stream);
                if let Err(e) = serve_session(&mut session, &mut transport, &mut rng).await {
                    eprintln!("Session ended with an error: {}", e);
                }
                games += 1;
            }
        }
        Commands::Demo {
            seed,
            patterns,
            verbose,
        } => {
            let store: Box<dyn PatternStore> = match patterns {
                Some(path) => Box::new(FilePatternStore::new(path)),
                None => Box::new(MemoryPatternStore::new()),
            };
            run_demo(store, make_rng(seed), verbose)
        }
    }
}

/// Place the standard fleet on a hidden board by rejection sampling.
#[cfg(feature = "std")]
fn place_hidden_fleet(rng: &mut SmallRng, size: usize) -> anyhow::Result<Vec<HashSet<Coord>>> {
    let mut occupied: HashSet<Coord> = HashSet::new();
    let mut ships = Vec::new();
    for &len in FLEET_LENGTHS.iter() {
        let mut attempts = 0;
        loop {
            attempts += 1;
            if attempts > 100 {
                anyhow::bail!("unable to place hidden fleet");
            }
            let horizontal: bool = rng.random();
            let (max_r, max_c) = if horizontal {
                (size, size - len + 1)
            } else {
                (size - len + 1, size)
            };
            let r = rng.random_range(0..max_r);
            let c = rng.random_range(0..max_c);
            let cells: Vec<Coord> = (0..len)
                .map(|k| {
                    if horizontal {
                        Coord::new(r, c + k)
                    } else {
                        Coord::new(r + k, c)
                    }
                })
                .collect();
            if cells.iter().any(|p| occupied.contains(p)) {
                continue;
            }
            occupied.extend(cells.iter().copied());
            ships.push(cells.into_iter().collect::<HashSet<_>>());
            break;
        }
    }
    Ok(ships)
}

#[cfg(feature = "std")]
fn run_demo(store: Box<dyn PatternStore>, mut rng: SmallRng, verbose: bool) -> anyhow::Result<()> {
    let mut ships = place_hidden_fleet(&mut rng, BOARD_SIZE)?;
    let mut session = GameSession::new(BOARD_SIZE, store).map_err(|e| anyhow::anyhow!(e))?;
    let mut shots = 0u32;

    loop {
        let target = session.next_target(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
        shots += 1;

        let feedback = match ships.iter().position(|s| s.contains(&target)) {
            None => Feedback::Miss,
            Some(i) => {
                ships[i].remove(&target);
                if !ships[i].is_empty() {
                    Feedback::Hit
                } else if ships.iter().all(|s| s.is_empty()) {
                    Feedback::LastShipSunk
                } else {
                    Feedback::HitAndSunk
                }
            }
        };

        println!("shot {:>3}: {} -> {}", shots, target, feedback.as_str());
        session
            .apply_feedback(target, feedback)
            .map_err(|e| anyhow::anyhow!(e))?;

        if verbose {
            print_known_board(session.board());
            print_probability_board(session.probability_map());
        }
        if session.state() == SessionState::Finished {
            break;
        }
    }

    println!("\nAll ships sunk in {} shots.", shots);
    Ok(())
}
