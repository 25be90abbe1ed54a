use concentration::{Board, RevealedCard};

use crate::error::IllegalMove;

/// Summarizes the outcome of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player found a pair and may go again.
    Match,
    /// The cards were turned back, the next player's turn.
    Mismatch,
    /// The last pair was found.
    GameEnded,
}

/// Turns over one card chosen by the current player.
pub fn reveal_card(
    board: &mut Board,
    pick_idx: usize,
    index: usize,
) -> Result<RevealedCard, IllegalMove> {
    let card = board
        .flip(index)
        .map_err(|err| IllegalMove { pick_idx, err })?;
    Ok(RevealedCard {
        index,
        figure: card.figure,
    })
}

/// Judges the two face-up cards and locks or hides them.
pub fn finish_turn(board: &mut Board) -> TurnOutcome {
    let outcome = board.resolve();
    debug_assert!(outcome.is_decided(), "finish_turn called without two face-up cards");
    if !outcome.cards_are_equal {
        TurnOutcome::Mismatch
    } else if board.is_solved() {
        TurnOutcome::GameEnded
    } else {
        TurnOutcome::Match
    }
}

#[cfg(test)]
mod tests {
    use concentration::{Card, DeckFactory, Figure, IllegalFlip};

    use super::*;

    fn board_from(figures: &[Figure]) -> Board {
        let mut factory = DeckFactory::default();
        Board::new(
            figures
                .iter()
                .map(|&figure| Card {
                    figure,
                    ..factory.next_card()
                })
                .collect(),
        )
    }

    #[test]
    fn full_game() {
        let mut board = board_from(&[Figure::Star, Figure::Arrow, Figure::Arrow, Figure::Star]);

        let first = reveal_card(&mut board, 0, 0).unwrap();
        assert_eq!(first.figure, Figure::Star);
        reveal_card(&mut board, 1, 1).unwrap();
        assert_eq!(finish_turn(&mut board), TurnOutcome::Mismatch);

        reveal_card(&mut board, 0, 1).unwrap();
        reveal_card(&mut board, 1, 2).unwrap();
        assert_eq!(finish_turn(&mut board), TurnOutcome::Match);

        reveal_card(&mut board, 0, 3).unwrap();
        reveal_card(&mut board, 1, 0).unwrap();
        assert_eq!(finish_turn(&mut board), TurnOutcome::GameEnded);
    }

    #[test]
    fn illegal_pick_reports_position_in_turn() {
        let mut board = board_from(&[Figure::Star, Figure::Star]);
        reveal_card(&mut board, 0, 1).unwrap();
        let err = reveal_card(&mut board, 1, 1).unwrap_err();
        assert_eq!(err.pick_idx, 1);
        assert_eq!(err.err, IllegalFlip::AlreadyFaceUp { index: 1 });
        assert_eq!(
            err.to_string(),
            "The second card picked this turn could not be turned over"
        );
    }
}
