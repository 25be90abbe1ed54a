use crate::{Card, CardState};

/// Draws the table as a grid with `columns` cards per row.
///
/// Face-down cards are drawn as `🂠`, unresolved face-up cards with their
/// figure, and matched cards with their figure in brackets.
///
/// ```
/// # use concentration::{visualize_cards, DeckFactory};
/// let mut factory = DeckFactory::default();
/// let mut cards = factory.generate_deck(4);
/// cards[1].is_flipped = true;
/// assert_eq!(
///     visualize_cards(&cards, 2),
///     "╭────────╮\n│ 🂠   ▲  │\n│ 🂠   🂠  │\n╰────────╯"
/// );
/// ```
pub fn visualize_cards<F: std::fmt::Display>(cards: &[Card<F>], columns: usize) -> String {
    let columns = columns.max(1);
    let mut result = String::from("╭");
    for _ in 0..columns {
        result += "────";
    }
    result += "╮";

    for row in cards.chunks(columns) {
        result += "\n│";
        for card in row {
            result += &match card.state() {
                CardState::Hidden => String::from(" 🂠  "),
                CardState::Flipped => format!(" {}  ", card.figure),
                CardState::Locked => format!("[{}] ", card.figure),
            };
        }
        for _ in row.len()..columns {
            result += "    ";
        }
        result += "│";
    }

    result += "\n╰";
    for _ in 0..columns {
        result += "────";
    }
    result += "╯";
    result
}
