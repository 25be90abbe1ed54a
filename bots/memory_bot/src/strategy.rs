use concentration::{CardState, CardView};
use concentration_bot_utils::{FigureMemory, HasFigureMemory};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use tracing::debug;

/// Plays pairs it has already seen, explores unknown cards otherwise.
pub struct MemoryBot {
    pub rng: StdRng,
    pub memory: FigureMemory,
}

impl HasFigureMemory for MemoryBot {
    fn get_memory(&mut self) -> &mut FigureMemory {
        &mut self.memory
    }
}

fn is_hidden(cards: &[CardView], index: usize) -> bool {
    cards
        .get(index)
        .map_or(false, |card| card.state == CardState::Hidden)
}

impl MemoryBot {
    pub fn choose_card(&mut self, cards: &[CardView]) -> usize {
        let face_up = cards
            .iter()
            .position(|card| card.state == CardState::Flipped);

        match face_up {
            // Second card of the turn
            Some(first) => {
                if let Some(figure) = cards[first].figure {
                    if let Some(partner) = self.memory.partner_of(first, figure) {
                        if is_hidden(cards, partner) {
                            debug!(first, partner, "Completing a known pair");
                            return partner;
                        }
                    }
                }
            }
            // First card of the turn
            None => {
                if let Some((a, b)) = self.memory.known_pair() {
                    if is_hidden(cards, a) && is_hidden(cards, b) {
                        debug!(a, b, "Playing a known pair");
                        return a;
                    }
                }
            }
        }
        self.explore(cards)
    }

    /// A face-down card whose figure has not been seen yet, if there is one.
    fn explore(&mut self, cards: &[CardView]) -> usize {
        let hidden = move || (0..cards.len()).filter(move |&index| is_hidden(cards, index));
        hidden()
            .filter(|&index| self.memory.figure_at(index).is_none())
            .choose(&mut self.rng)
            .or_else(|| hidden().choose(&mut self.rng))
            // Nothing left to pick; let the judge handle it.
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use concentration::{Board, CardId, DeckFactory, Figure};
    use rand::SeedableRng;

    use super::*;

    fn bot() -> MemoryBot {
        MemoryBot {
            rng: StdRng::seed_from_u64(0),
            memory: FigureMemory::new(),
        }
    }

    fn hidden(id: u64) -> CardView {
        CardView {
            id: CardId(id),
            state: CardState::Hidden,
            figure: None,
        }
    }

    #[test]
    fn plays_known_pair_first() {
        let mut bot = bot();
        bot.memory.remember(1, Figure::Star);
        bot.memory.remember(3, Figure::Star);
        let cards: Vec<CardView> = (1..=4).map(hidden).collect();
        assert_eq!(bot.choose_card(&cards), 1);
    }

    #[test]
    fn completes_pair_for_face_up_card() {
        let mut bot = bot();
        bot.memory.remember(2, Figure::Arrow);
        let mut cards: Vec<CardView> = (1..=4).map(hidden).collect();
        cards[0].state = CardState::Flipped;
        cards[0].figure = Some(Figure::Arrow);
        assert_eq!(bot.choose_card(&cards), 2);
    }

    #[test]
    fn explores_unknown_cards() {
        let mut bot = bot();
        bot.memory.remember(0, Figure::Arrow);
        bot.memory.remember(1, Figure::Star);
        let cards: Vec<CardView> = (1..=3).map(hidden).collect();
        for _ in 0..10 {
            assert_eq!(bot.choose_card(&cards), 2);
        }
    }

    #[test]
    fn never_picks_an_unavailable_card() {
        let mut factory = DeckFactory::default();
        let mut board = Board::new(factory.generate_deck(16));
        let mut bot = bot();
        while !board.is_solved() {
            for _ in 0..2 {
                let view = board.view();
                bot.memory.observe(&view);
                let index = bot.choose_card(&view);
                board.flip(index).unwrap();
            }
            let outcome = board.resolve();
            let [first, second] = [outcome.flipped_cards[0], outcome.flipped_cards[1]];
            let index_of = |id: CardId| board.cards().iter().position(|card| card.id == id).unwrap();
            bot.memory.record_turn(
                [
                    concentration::RevealedCard {
                        index: index_of(first.id),
                        figure: first.figure,
                    },
                    concentration::RevealedCard {
                        index: index_of(second.id),
                        figure: second.figure,
                    },
                ],
                outcome.cards_are_equal,
            );
        }
    }
}
