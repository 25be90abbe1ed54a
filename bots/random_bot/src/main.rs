use clap::Parser;
use concentration::{CardState, CardView};
use concentration_bot_utils::Bot;
use rand::{rngs::StdRng, seq::IteratorRandom, SeedableRng};

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let rng = StdRng::seed_from_u64(seed);

    RandomBot { rng }.run()
}

/// Turns over any face-down card. Remembers nothing.
struct RandomBot {
    rng: StdRng,
}

impl Bot for RandomBot {
    fn new_game(&mut self, _num_cards: usize) {}

    fn pick_card(&mut self, cards: &[CardView]) -> usize {
        cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.state == CardState::Hidden)
            .map(|(index, _)| index)
            .choose(&mut self.rng)
            // Nothing left to pick; let the judge handle it.
            .unwrap_or(0)
    }
}
