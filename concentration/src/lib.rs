pub use board::*;
pub use cards::*;
pub use deck::*;
pub use errors::*;
pub use figures::*;
pub use matching::*;
pub use protocol_types::*;
pub use shuffle::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod cards;
mod deck;
mod errors;
mod figures;
mod matching;
mod protocol_types;
mod shuffle;
mod visualization;
