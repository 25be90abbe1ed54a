use std::collections::BTreeMap;

use crate::Bot;
use concentration::{CardState, CardView, Figure, RevealedCard};

/// The figures of unmatched cards that have been seen face-up so far,
/// keyed by their position on the table.
///
/// This can be automatically updated by implementing [`HasFigureMemory`] for your bot
/// and wrapping it in a [`FigureMemoryWrapper`].
#[derive(Clone, Debug, Default)]
pub struct FigureMemory {
    known: BTreeMap<usize, Figure>,
}

impl FigureMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.known.clear();
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    pub fn remember(&mut self, index: usize, figure: Figure) {
        self.known.insert(index, figure);
    }

    pub fn forget(&mut self, index: usize) {
        self.known.remove(&index);
    }

    pub fn figure_at(&self, index: usize) -> Option<Figure> {
        self.known.get(&index).copied()
    }

    /// Another position known to hold `figure`.
    pub fn partner_of(&self, index: usize, figure: Figure) -> Option<usize> {
        self.known
            .iter()
            .find(|&(&other, &other_figure)| other != index && other_figure == figure)
            .map(|(&other, _)| other)
    }

    /// Two positions known to hold the same figure, lowest first.
    pub fn known_pair(&self) -> Option<(usize, usize)> {
        let mut first_seen = BTreeMap::new();
        for (&index, &figure) in &self.known {
            if let Some(&other) = first_seen.get(&figure) {
                return Some((other, index));
            }
            first_seen.insert(figure, index);
        }
        None
    }

    /// Updates the memory from the table: matched cards are forgotten,
    /// face-up ones remembered.
    pub fn observe(&mut self, cards: &[CardView]) {
        for (index, card) in cards.iter().enumerate() {
            match (card.state, card.figure) {
                (CardState::Locked, _) => self.forget(index),
                (CardState::Flipped, Some(figure)) => self.remember(index, figure),
                _ => {}
            }
        }
    }

    pub fn record_turn(&mut self, revealed: [RevealedCard; 2], cards_are_equal: bool) {
        for RevealedCard { index, figure } in revealed {
            if cards_are_equal {
                self.forget(index);
            } else {
                self.remember(index, figure);
            }
        }
    }
}

/// Implement this trait on your bot to allow it to be used with a [`FigureMemoryWrapper`].
///
/// Basically the same as `DerefMut<Target=FigureMemory>`
pub trait HasFigureMemory {
    fn get_memory(&mut self) -> &mut FigureMemory;
}

/// Automatically keeps the [`FigureMemory`] of your bot up to date.
pub struct FigureMemoryWrapper<T>
where
    T: HasFigureMemory,
{
    bot: T,
}

impl<T> FigureMemoryWrapper<T>
where
    T: HasFigureMemory,
{
    pub fn new(bot: T) -> Self {
        Self { bot }
    }
}

impl<T: HasFigureMemory + Bot> Bot for FigureMemoryWrapper<T> {
    fn new_game(&mut self, num_cards: usize) {
        self.bot.get_memory().clear();
        self.bot.new_game(num_cards);
    }

    fn pick_card(&mut self, cards: &[CardView]) -> usize {
        self.bot.get_memory().observe(cards);
        self.bot.pick_card(cards)
    }

    fn turn_result(&mut self, revealed: [RevealedCard; 2], cards_are_equal: bool) {
        self.bot.get_memory().record_turn(revealed, cards_are_equal);
        self.bot.turn_result(revealed, cards_are_equal);
    }
}
