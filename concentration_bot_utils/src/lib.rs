mod figure_memory;
pub use figure_memory::*;

use concentration::{CardView, Okay, PickCardResponse, Request, RevealedCard};

/// A trait to simplify writing bots.
pub trait Bot {
    fn new_game(&mut self, num_cards: usize);
    /// Returns the index of the card to turn over.
    fn pick_card(&mut self, cards: &[CardView]) -> usize;
    /// Called after every turn, including the opponents' turns.
    fn turn_result(&mut self, _revealed: [RevealedCard; 2], _cards_are_equal: bool) {}

    fn run(&mut self) -> anyhow::Result<()> {
        // Communication happens through stdin/stdout.
        // Stderr can be used for logging.
        let mut stdin = std::io::stdin().lock();
        let mut stdout = std::io::stdout().lock();
        let mut buf = String::new();

        loop {
            // Read the next line into buf
            buf.clear(); // because stdin.read_line() appends to the buffer
            use std::io::BufRead;
            let num_bytes_read = stdin.read_line(&mut buf)?;
            if num_bytes_read == 0 {
                // 0 bytes read means EOF - the judge has exited.
                break Ok(());
            }

            let req = serde_json::from_str::<Request>(buf.trim_end())?;

            match req {
                Request::NewGame { num_cards } => {
                    self.new_game(num_cards);
                    serde_json::to_writer(&mut stdout, &Okay())?;
                }
                Request::PickCard { cards } => serde_json::to_writer(
                    &mut stdout,
                    &PickCardResponse(self.pick_card(&cards)),
                )?,
                Request::TurnResult {
                    revealed,
                    cards_are_equal,
                } => {
                    self.turn_result(revealed, cards_are_equal);
                    serde_json::to_writer(&mut stdout, &Okay())?;
                }
                Request::Bye => break Ok(()),
            }
            use std::io::Write;
            writeln!(stdout)?;
            stdout.flush()?;
        }
    }
}
