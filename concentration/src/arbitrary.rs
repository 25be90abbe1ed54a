use quickcheck::{Arbitrary, Gen};

use crate::{Card, CardId, Figure, FIGURES};

/// A table in any state, including states a well-behaved host never
/// produces, like three unresolved face-up cards.
#[derive(Clone, Debug)]
pub struct Table {
    pub cards: Vec<Card>,
}

impl Arbitrary for Table {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_cards = usize::arbitrary(g) % 20;
        let cards = (1..=num_cards as u64)
            .map(|id| {
                // Bias towards face-down cards so that exactly two candidates comes up often
                let is_flipped = u8::arbitrary(g) % 4 == 0;
                let keep_flipped = is_flipped && bool::arbitrary(g);
                Card {
                    id: CardId(id),
                    figure: Figure::arbitrary(g),
                    is_flipped,
                    keep_flipped,
                }
            })
            .collect();
        Table { cards }
    }
}

impl Arbitrary for Figure {
    fn arbitrary(g: &mut Gen) -> Self {
        // Only a few figures, so that equal pairs are common
        *g.choose(&FIGURES[..3]).unwrap()
    }
}
