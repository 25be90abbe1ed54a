use crate::{
    candidates, flipped_cards_are_the_same, Card, CardView, Figure, FlipOutcome, IllegalFlip,
};

/// A dealt deck lying on the table.
///
/// The cards keep their positions for the whole game; players refer to
/// them by index. This is where the card lifecycle is enforced: a card can
/// only be turned over while it is face-down, at most two cards are
/// face-up and unresolved at any time, and [`Self::resolve()`] either locks
/// both or turns both back.
#[derive(Clone, Debug)]
pub struct Board<F = Figure> {
    cards: Vec<Card<F>>,
}

impl<F: Copy + PartialEq> Board<F> {
    pub fn new(cards: Vec<Card<F>>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card<F>] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of face-up cards that are waiting to be resolved.
    pub fn num_face_up(&self) -> usize {
        candidates(&self.cards).count()
    }

    /// Whether the card at `index` may be turned over right now, ignoring
    /// how many cards are already face-up.
    pub fn is_selectable(&self, index: usize) -> bool {
        self.cards
            .get(index)
            .map_or(false, |card| !card.is_flipped && !card.keep_flipped)
    }

    /// Indices of all cards that may be turned over.
    pub fn selectable(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cards.len()).filter(move |&index| self.is_selectable(index))
    }

    /// Turns over the card at `index`.
    pub fn flip(&mut self, index: usize) -> Result<&Card<F>, IllegalFlip> {
        let num_face_up = self.num_face_up();
        let num_cards = self.cards.len();
        let card = self
            .cards
            .get_mut(index)
            .ok_or(IllegalFlip::OutOfBounds { index, num_cards })?;
        if card.keep_flipped {
            return Err(IllegalFlip::AlreadyLocked { index });
        }
        if card.is_flipped {
            return Err(IllegalFlip::AlreadyFaceUp { index });
        }
        if num_face_up >= 2 {
            return Err(IllegalFlip::TooManyFaceUp);
        }
        card.is_flipped = true;
        Ok(&*card)
    }

    /// Judges the face-up cards and applies the verdict.
    ///
    /// A pair is locked, a mismatch is turned face-down again. When there
    /// is nothing to judge, the board is left as it is. The returned
    /// outcome shows the cards as they were before the verdict was applied.
    pub fn resolve(&mut self) -> FlipOutcome<F> {
        let outcome = flipped_cards_are_the_same(&self.cards);
        if outcome.is_decided() {
            for card in self.cards.iter_mut().filter(|card| card.is_candidate()) {
                if outcome.cards_are_equal {
                    card.keep_flipped = true;
                } else {
                    card.is_flipped = false;
                }
            }
        }
        outcome
    }

    /// Number of pairs found so far.
    pub fn locked_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.keep_flipped).count() / 2
    }

    /// All cards are locked.
    pub fn is_solved(&self) -> bool {
        self.cards.iter().all(|card| card.keep_flipped)
    }

    /// What a player is allowed to see: figures of face-down cards are left out.
    pub fn view(&self) -> Vec<CardView<F>> {
        self.cards.iter().map(CardView::from).collect()
    }
}
