use std::path::PathBuf;

use clap::Parser;
use concentration::{DeckFactory, DEFAULT_DECK_SIZE};
use judge::{
    play_game, say_goodbye, GameConfig, GameResult, Player, PlayerConfig, Recorder,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to the config JSON files of players. All players share one table.
    #[clap(num_args(1..), value_delimiter = ' ', required = true)]
    player_configs: Vec<PathBuf>,

    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Cards per game, a multiple of twice the number of figures
    #[arg(short, long, default_value_t = DEFAULT_DECK_SIZE)]
    deck_size: usize,

    /// Abandon a game after this many turns [default: 10 turns per card]
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Stop as soon as one player makes an illegal move
    #[arg(short, long, default_value_t = false)]
    stop_on_illegal_move: bool,

    /// Record the game's interactions as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct Score {
    wins: Vec<usize>,
    pairs: Vec<usize>,
    illegal_moves: Vec<usize>,
    ties: usize,
    abandoned: usize,
    finished: usize,
    attempts: usize,
}

impl Score {
    fn new(num_players: usize) -> Self {
        Self {
            wins: vec![0; num_players],
            pairs: vec![0; num_players],
            illegal_moves: vec![0; num_players],
            ..Self::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let mut factory = DeckFactory::default();
    factory.check_deck_size(args.deck_size)?;
    let config = GameConfig {
        num_cards: args.deck_size,
        max_attempts: args.max_attempts.unwrap_or(10 * args.deck_size),
    };

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let player_configs = args
        .player_configs
        .iter()
        .map(|path| PlayerConfig::load(path))
        .collect::<Result<Vec<PlayerConfig>, anyhow::Error>>()?;
    let mut players = player_configs
        .iter()
        .map(Player::from_config)
        .collect::<Result<Vec<Player>, anyhow::Error>>()?;
    let player_names: Vec<String> = players.iter().map(|p| p.name.clone()).collect();

    let mut score = Score::new(players.len());
    for game_idx in 0..args.num_games {
        let game_result = play_game(&mut rng, &mut factory, &mut players, &config, &mut recorder)?;
        match &game_result {
            GameResult::Finished { pairs, attempts } => {
                score.finished += 1;
                score.attempts += attempts;
                for (total, num_pairs) in score.pairs.iter_mut().zip(pairs) {
                    *total += num_pairs;
                }
                match game_result.winner() {
                    Some(player_idx) => {
                        debug!(winner = player_names[player_idx], game_idx, attempts);
                        score.wins[player_idx] += 1;
                    }
                    None => {
                        debug!(game_idx, attempts, "Tie");
                        score.ties += 1;
                    }
                }
            }
            GameResult::Abandoned { attempts } => {
                warn!(game_idx, attempts, "Game abandoned, nobody cleared the table");
                score.abandoned += 1;
            }
            GameResult::IllegalMoveByPlayer { player_idx, err } => {
                info!(
                    player = player_names[*player_idx],
                    game_idx, "Illegal move by player"
                );
                let mut err_dyn = err as &dyn std::error::Error;
                while let Some(src_err) = err_dyn.source() {
                    info!("{}", err_dyn);
                    err_dyn = src_err;
                }
                info!("{}", err_dyn);
                score.illegal_moves[*player_idx] += 1;
                if args.stop_on_illegal_move {
                    break;
                }
            }
        }
    }

    for player in players.iter_mut() {
        say_goodbye(player)?;
    }

    print_results(&player_names, &score);
    Ok(())
}

fn print_results(player_names: &[String], score: &Score) {
    eprintln!("End result:");
    for (player_idx, name) in player_names.iter().enumerate() {
        let paren = if score.illegal_moves[player_idx] > 0 {
            format!(" ({} illegal moves)", score.illegal_moves[player_idx])
        } else {
            String::new()
        };
        eprintln!(
            "- {} wins, {} pairs by {}{}",
            score.wins[player_idx], score.pairs[player_idx], name, paren
        );
    }
    if player_names.len() > 1 {
        eprintln!("- {} ties", score.ties);
    }
    if score.abandoned > 0 {
        eprintln!("- {} games abandoned", score.abandoned);
    }
    if score.finished > 0 {
        eprintln!(
            "- {:.1} turns per finished game",
            score.attempts as f32 / score.finished as f32
        );
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
