use std::cmp::Ordering;

use concentration::{
    visualize_cards, Board, DeckFactory, Okay, PickCardResponse, Request, RevealedCard,
};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

use crate::error::IllegalMove;
use crate::player::{perform_request, Participant};
use crate::recording::Recorder;
use crate::turn::{finish_turn, reveal_card, TurnOutcome};

/// Cards per row when logging the table.
const BOARD_COLUMNS: usize = 4;

pub struct GameConfig {
    /// Cards dealt per game.
    pub num_cards: usize,
    /// A game is abandoned when no one has cleared the table after this many turns.
    pub max_attempts: usize,
}

#[derive(Debug)]
pub enum GameResult {
    Finished {
        /// Pairs found by each player.
        pairs: Vec<usize>,
        /// Turns taken by all players together.
        attempts: usize,
    },
    IllegalMoveByPlayer {
        player_idx: usize,
        err: IllegalMove,
    },
    Abandoned {
        attempts: usize,
    },
}

impl GameResult {
    /// The player with the most pairs, or `None` on a tie or when the game did not finish.
    pub fn winner(&self) -> Option<usize> {
        let GameResult::Finished { pairs, .. } = self else {
            return None;
        };
        let mut winner = None;
        let mut best = 0;
        for (player_idx, &num_pairs) in pairs.iter().enumerate() {
            match num_pairs.cmp(&best) {
                Ordering::Greater => {
                    best = num_pairs;
                    winner = Some(player_idx);
                }
                Ordering::Equal => winner = None,
                Ordering::Less => {}
            }
        }
        winner
    }
}

/// Plays one game with all players sharing the same table.
///
/// Finding a pair earns another turn. Returns an error on communication
/// failure or when `config.num_cards` cannot form a clearable table,
/// not when an illegal move is played.
pub fn play_game<P: Participant>(
    rng: &mut StdRng,
    factory: &mut DeckFactory,
    players: &mut [P],
    config: &GameConfig,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameResult> {
    if players.is_empty() {
        anyhow::bail!("A game needs at least one player");
    }
    factory.check_deck_size(config.num_cards)?;
    let mut board = Board::new(factory.shuffled_deck(config.num_cards, rng));
    trace!("Dealt cards:\n{}", visualize_cards(board.cards(), BOARD_COLUMNS));

    // Inform the players about the new game, so that they can reset their state
    for player in players.iter_mut() {
        let _: Okay = perform_request(
            player,
            recorder,
            &Request::NewGame {
                num_cards: config.num_cards,
            },
        )?;
    }

    let game_result = play_turns(rng, &mut board, players, config, recorder)?;
    debug!(
        "Final table:\n{}",
        visualize_cards(board.cards(), BOARD_COLUMNS)
    );

    if let Some(rec) = recorder {
        rec.write_game_recording()?;
    }
    Ok(game_result)
}

fn play_turns<P: Participant>(
    rng: &mut StdRng,
    board: &mut Board,
    players: &mut [P],
    config: &GameConfig,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameResult> {
    // Randomly pick a starting player
    let mut current_player_idx = rng.gen_range(0..players.len());
    let mut pairs = vec![0; players.len()];
    let mut attempts = 0;

    while !board.is_solved() {
        if attempts >= config.max_attempts {
            return Ok(GameResult::Abandoned { attempts });
        }

        let mut revealed = Vec::with_capacity(2);
        for pick_idx in 0..2 {
            let req = Request::PickCard {
                cards: board.view(),
            };
            let PickCardResponse(index) =
                perform_request(&mut players[current_player_idx], recorder, &req)?;
            match reveal_card(board, pick_idx, index) {
                Ok(card) => revealed.push(card),
                Err(err) => {
                    return Ok(GameResult::IllegalMoveByPlayer {
                        player_idx: current_player_idx,
                        err,
                    })
                }
            }
        }
        let revealed = [revealed[0], revealed[1]];
        attempts += 1;

        let outcome = finish_turn(board);
        trace!(
            player_idx = current_player_idx,
            ?outcome,
            "Turn {}:\n{}",
            attempts,
            visualize_cards(board.cards(), BOARD_COLUMNS)
        );
        notify_players(players, recorder, revealed, outcome != TurnOutcome::Mismatch)?;

        match outcome {
            TurnOutcome::Match | TurnOutcome::GameEnded => {
                pairs[current_player_idx] += 1;
            }
            TurnOutcome::Mismatch => {
                current_player_idx = (current_player_idx + 1) % players.len();
            }
        }
    }

    Ok(GameResult::Finished { pairs, attempts })
}

fn notify_players<P: Participant>(
    players: &mut [P],
    recorder: &mut Option<Recorder>,
    revealed: [RevealedCard; 2],
    cards_are_equal: bool,
) -> anyhow::Result<()> {
    let req = Request::TurnResult {
        revealed,
        cards_are_equal,
    };
    for player in players.iter_mut() {
        let _: Okay = perform_request(player, recorder, &req)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use concentration::{CardState, DeckError, Figure, IllegalFlip};
    use rand::SeedableRng;

    use super::*;

    /// Answers requests in-process, using the same wire format as a real bot.
    struct InProcess<B> {
        name: String,
        strategy: B,
        pending: Option<String>,
    }

    trait Strategy {
        fn pick_card(&mut self, req: &Request) -> usize;
        fn observe(&mut self, _req: &Request) {}
    }

    impl<B: Strategy> InProcess<B> {
        fn new(name: &str, strategy: B) -> Self {
            Self {
                name: String::from(name),
                strategy,
                pending: None,
            }
        }
    }

    impl<B: Strategy> Participant for InProcess<B> {
        fn name(&self) -> &str {
            &self.name
        }

        fn send_line(&mut self, line: &str) -> anyhow::Result<()> {
            let req: Request = serde_json::from_str(line)?;
            let response = match &req {
                Request::PickCard { .. } => {
                    serde_json::to_string(&PickCardResponse(self.strategy.pick_card(&req)))?
                }
                Request::Bye => return Ok(()),
                _ => {
                    self.strategy.observe(&req);
                    serde_json::to_string(&Okay())?
                }
            };
            self.pending = Some(response);
            Ok(())
        }

        fn read_line(&mut self) -> anyhow::Result<String> {
            self.pending
                .take()
                .ok_or_else(|| anyhow::anyhow!("Nothing to read"))
        }
    }

    /// Always turns over the two leftmost face-down cards.
    struct Leftmost;

    impl Strategy for Leftmost {
        fn pick_card(&mut self, req: &Request) -> usize {
            let Request::PickCard { cards } = req else {
                unreachable!()
            };
            cards
                .iter()
                .position(|card| card.state == CardState::Hidden)
                .unwrap()
        }
    }

    /// Remembers every revealed figure and never forgets.
    #[derive(Default)]
    struct Elephant {
        seen: BTreeMap<usize, Figure>,
    }

    impl Strategy for Elephant {
        fn pick_card(&mut self, req: &Request) -> usize {
            let Request::PickCard { cards } = req else {
                unreachable!()
            };
            let hidden = |index: &usize| cards[*index].state == CardState::Hidden;
            if let Some(face_up) = cards.iter().position(|card| card.state == CardState::Flipped) {
                let figure = cards[face_up].figure.unwrap();
                if let Some((&partner, _)) = self
                    .seen
                    .iter()
                    .find(|&(index, &seen)| seen == figure && hidden(index))
                {
                    return partner;
                }
            }
            (0..cards.len())
                .find(|index| hidden(index) && !self.seen.contains_key(index))
                .or_else(|| (0..cards.len()).find(hidden))
                .unwrap()
        }

        fn observe(&mut self, req: &Request) {
            match req {
                Request::NewGame { .. } => self.seen.clear(),
                Request::TurnResult { revealed, .. } => {
                    for card in revealed {
                        self.seen.insert(card.index, card.figure);
                    }
                }
                _ => {}
            }
        }
    }

    /// Picks a card that does not exist.
    struct OutOfBounds;

    impl Strategy for OutOfBounds {
        fn pick_card(&mut self, _req: &Request) -> usize {
            99
        }
    }

    fn config() -> GameConfig {
        GameConfig {
            num_cards: 16,
            max_attempts: 200,
        }
    }

    #[test]
    fn two_players_clear_the_table() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut factory = DeckFactory::default();
        let mut players = [
            InProcess::new("a", Elephant::default()),
            InProcess::new("b", Elephant::default()),
        ];
        for _ in 0..5 {
            match play_game(&mut rng, &mut factory, &mut players, &config(), &mut None).unwrap() {
                GameResult::Finished { pairs, attempts } => {
                    assert_eq!(pairs.iter().sum::<usize>(), 8);
                    assert!(attempts >= 8);
                }
                other => panic!("game did not finish: {:?}", other),
            }
        }
        // Every game was dealt from the same factory.
        assert_eq!(factory.issued(), 5 * 16);
    }

    #[test]
    fn solo_game_wins() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut factory = DeckFactory::default();
        let mut players = [InProcess::new("solo", Elephant::default())];
        let result =
            play_game(&mut rng, &mut factory, &mut players, &config(), &mut None).unwrap();
        assert_eq!(result.winner(), Some(0));
    }

    #[test]
    fn stuck_game_is_abandoned() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut factory = DeckFactory::default();
        let mut players = [InProcess::new("stubborn", Leftmost)];
        let config = GameConfig {
            num_cards: 16,
            max_attempts: 30,
        };
        let mut result = None;
        // Leftmost repeats the same two cards after its first mismatch.
        for _ in 0..5 {
            let game = play_game(&mut rng, &mut factory, &mut players, &config, &mut None).unwrap();
            if let GameResult::Abandoned { attempts } = game {
                result = Some(attempts);
                break;
            }
        }
        assert_eq!(result, Some(30));
    }

    #[test]
    fn illegal_pick_ends_the_game() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut factory = DeckFactory::default();
        let mut players = [InProcess::new("cheater", OutOfBounds)];
        match play_game(&mut rng, &mut factory, &mut players, &config(), &mut None).unwrap() {
            GameResult::IllegalMoveByPlayer { player_idx, err } => {
                assert_eq!(player_idx, 0);
                assert_eq!(err.pick_idx, 0);
                assert_eq!(
                    err.err,
                    IllegalFlip::OutOfBounds {
                        index: 99,
                        num_cards: 16
                    }
                );
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn unclearable_table_is_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut factory = DeckFactory::default();
        let mut players = [InProcess::new("a", Leftmost)];
        for num_cards in [0, 3, 8] {
            let config = GameConfig {
                num_cards,
                max_attempts: 100,
            };
            let err = play_game(&mut rng, &mut factory, &mut players, &config, &mut None)
                .unwrap_err();
            assert!(err.downcast_ref::<DeckError>().is_some(), "{}", err);
        }
        // Nothing was dealt and nobody was asked for a card.
        assert_eq!(factory.issued(), 0);
        assert!(players[0].pending.is_none());
    }

    #[test]
    fn solved_table_asks_for_no_more_picks() {
        let mut board = Board::new(Vec::new());
        let mut players = [InProcess::new("a", OutOfBounds)];
        let result = play_turns(
            &mut StdRng::seed_from_u64(6),
            &mut board,
            &mut players,
            &config(),
            &mut None,
        )
        .unwrap();
        match result {
            GameResult::Finished { pairs, attempts } => {
                assert_eq!(pairs, vec![0]);
                assert_eq!(attempts, 0);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn winner_needs_most_pairs() {
        let finished = |pairs: Vec<usize>| GameResult::Finished { pairs, attempts: 10 };
        assert_eq!(finished(vec![3, 5]).winner(), Some(1));
        assert_eq!(finished(vec![4, 4]).winner(), None);
        assert_eq!(finished(vec![5, 2, 1]).winner(), Some(0));
        assert_eq!(GameResult::Abandoned { attempts: 3 }.winner(), None);
    }
}
