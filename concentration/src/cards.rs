use serde::{Deserialize, Serialize};

use crate::Figure;

/// Identifies a card for as long as the [`DeckFactory`](crate::DeckFactory)
/// that created it is alive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One tile on the table.
///
/// The figure type is generic so that hosts can bring their own symbols;
/// it defaults to [`Figure`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card<F = Figure> {
    pub id: CardId,
    pub figure: F,
    /// Whether the card is currently shown face-up.
    pub is_flipped: bool,
    /// Whether the card has been matched and stays face-up for the rest of the game.
    pub keep_flipped: bool,
}

/// Where a [`Card`] is in its lifecycle.
///
/// `Hidden → Flipped → Locked`, or back from `Flipped` to `Hidden` after a mismatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardState {
    Hidden,
    Flipped,
    Locked,
}

impl<F> Card<F> {
    /// A card that is face-down and not matched yet.
    pub fn face_down(id: CardId, figure: F) -> Self {
        Self {
            id,
            figure,
            is_flipped: false,
            keep_flipped: false,
        }
    }

    pub fn state(&self) -> CardState {
        if self.keep_flipped {
            CardState::Locked
        } else if self.is_flipped {
            CardState::Flipped
        } else {
            CardState::Hidden
        }
    }

    /// Face-up and not locked, i.e. waiting to be compared.
    pub fn is_candidate(&self) -> bool {
        self.is_flipped && !self.keep_flipped
    }
}

impl<F: std::fmt::Display> std::fmt::Display for Card<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.id, self.figure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_follows_flags() {
        let mut card = Card::face_down(CardId(3), Figure::Star);
        assert_eq!(card.state(), CardState::Hidden);
        assert!(!card.is_candidate());

        card.is_flipped = true;
        assert_eq!(card.state(), CardState::Flipped);
        assert!(card.is_candidate());

        card.keep_flipped = true;
        assert_eq!(card.state(), CardState::Locked);
        assert!(!card.is_candidate());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let card = Card::face_down(CardId(1), Figure::InvertedTriangle);
        let json = serde_json::to_value(card).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "figure": "invertedTriangle",
                "isFlipped": false,
                "keepFlipped": false,
            })
        );
        let back: Card = serde_json::from_value(json).unwrap();
        assert_eq!(back, card);
    }
}
