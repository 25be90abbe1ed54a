use serde::{Deserialize, Serialize};

use crate::{Card, Figure};

/// The result of [`flipped_cards_are_the_same()`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlipOutcome<F = Figure> {
    /// Either empty, or the two candidate cards in table order.
    pub flipped_cards: Vec<Card<F>>,
    pub cards_are_equal: bool,
}

impl<F> FlipOutcome<F> {
    /// Nothing to judge (yet).
    pub fn undecided() -> Self {
        Self {
            flipped_cards: Vec::new(),
            cards_are_equal: false,
        }
    }

    pub fn is_decided(&self) -> bool {
        !self.flipped_cards.is_empty()
    }
}

/// The cards that are face-up but not locked.
pub fn candidates<'a, F>(cards: &'a [Card<F>]) -> impl Iterator<Item = &'a Card<F>> {
    cards.iter().filter(|card| card.is_candidate())
}

/// Checks whether the player just turned over a pair.
///
/// Only gives a verdict when exactly two cards are [candidates](Card::is_candidate);
/// with fewer there is nothing to compare yet, and more is a state the
/// caller should never let happen, so it is not judged either. Nothing is
/// mutated: locking or hiding the cards afterwards is up to the caller, see
/// [`Board::resolve()`](crate::Board::resolve).
pub fn flipped_cards_are_the_same<F: Copy + PartialEq>(cards: &[Card<F>]) -> FlipOutcome<F> {
    let mut flipped = candidates(cards);
    match (flipped.next(), flipped.next(), flipped.next()) {
        (Some(first), Some(second), None) => FlipOutcome {
            flipped_cards: vec![*first, *second],
            cards_are_equal: first.figure == second.figure,
        },
        _ => FlipOutcome::undecided(),
    }
}
