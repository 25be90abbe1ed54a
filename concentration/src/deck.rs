use crate::{shuffle, Card, CardId, DeckError, Figure, IndexSource, FIGURES};

/// The number of cards on the table in a regular game, a 4x4 grid.
pub const DEFAULT_DECK_SIZE: usize = 16;

/// Creates cards with unique ids.
///
/// The id counter lives as long as the factory, so cards from different
/// decks dealt by the same factory never share an id. Figures are handed
/// out round-robin by id, which means any run of consecutive cards whose
/// length is a multiple of the number of figures contains every figure
/// equally often.
#[derive(Clone, Debug)]
pub struct DeckFactory<F = Figure> {
    /// The id of the last card created, 0 before the first.
    id: u64,
    figures: Vec<F>,
}

impl<F: Copy> DeckFactory<F> {
    pub fn new(figures: impl IntoIterator<Item = F>) -> Result<Self, DeckError> {
        let figures: Vec<F> = figures.into_iter().collect();
        if figures.is_empty() {
            return Err(DeckError::NoFigures);
        }
        Ok(Self { id: 0, figures })
    }

    pub fn figures(&self) -> &[F] {
        &self.figures
    }

    /// How many cards this factory has created so far.
    pub fn issued(&self) -> u64 {
        self.id
    }

    /// Creates the next card. The first card gets id 1.
    ///
    /// ```
    /// # use concentration::{CardId, DeckFactory, Figure};
    /// let mut factory = DeckFactory::default();
    /// let card = factory.next_card();
    /// assert_eq!(card.id, CardId(1));
    /// assert_eq!(card.figure, Figure::Circle);
    /// assert!(!card.is_flipped && !card.keep_flipped);
    /// ```
    pub fn next_card(&mut self) -> Card<F> {
        self.id += 1;
        let figure = self.figures[(self.id % self.figures.len() as u64) as usize];
        Card::face_down(CardId(self.id), figure)
    }

    /// Creates `size` cards, in the order they were created.
    ///
    /// Use [`Self::check_deck_size()`] first if every figure needs a partner.
    pub fn generate_deck(&mut self, size: usize) -> Vec<Card<F>> {
        (0..size).map(|_| self.next_card()).collect()
    }

    /// Whether a deck of `size` cards from this factory can be cleared completely,
    /// i.e. contains every figure a positive, even number of times.
    pub fn check_deck_size(&self, size: usize) -> Result<(), DeckError> {
        let num_figures = self.figures.len();
        if size == 0 || size % (2 * num_figures) != 0 {
            return Err(DeckError::UnpairedDeckSize { size, num_figures });
        }
        Ok(())
    }

    /// Creates `size` cards and shuffles them.
    pub fn shuffled_deck<S: IndexSource + ?Sized>(
        &mut self,
        size: usize,
        source: &mut S,
    ) -> Vec<Card<F>> {
        let mut deck = self.generate_deck(size);
        shuffle(&mut deck, source);
        deck
    }

    /// A shuffled deck of [`DEFAULT_DECK_SIZE`] cards.
    pub fn shuffle_cards<S: IndexSource + ?Sized>(&mut self, source: &mut S) -> Vec<Card<F>> {
        self.shuffled_deck(DEFAULT_DECK_SIZE, source)
    }
}

impl Default for DeckFactory<Figure> {
    fn default() -> Self {
        Self {
            id: 0,
            figures: FIGURES.to_vec(),
        }
    }
}
