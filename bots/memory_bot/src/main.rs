mod strategy;

use clap::Parser;
use concentration::{CardView, RevealedCard};
use concentration_bot_utils::{Bot, FigureMemory, FigureMemoryWrapper};
use rand::{rngs::StdRng, SeedableRng};
use strategy::MemoryBot;
use tracing::debug;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);
    let seed = args.seed.unwrap_or_else(rand::random);
    debug!(seed);
    FigureMemoryWrapper::new(MemoryBot {
        rng: StdRng::seed_from_u64(seed),
        memory: FigureMemory::new(),
    })
    .run()
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

impl Bot for MemoryBot {
    fn new_game(&mut self, num_cards: usize) {
        debug!(num_cards, "New game");
    }

    fn pick_card(&mut self, cards: &[CardView]) -> usize {
        self.choose_card(cards)
    }

    fn turn_result(&mut self, revealed: [RevealedCard; 2], cards_are_equal: bool) {
        debug!(
            first = revealed[0].index,
            second = revealed[1].index,
            cards_are_equal,
            known = self.memory.len()
        );
    }
}
