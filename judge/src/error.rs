use concentration::IllegalFlip;

#[derive(Debug)]
/// Error type for one turn.
pub struct IllegalMove {
    /// Whether it was the first (0) or second (1) card of the turn.
    pub pick_idx: usize,
    pub err: IllegalFlip,
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.err)
    }
}

fn ordinal_number(num: usize) -> &'static str {
    match num {
        0 => "first",
        1 => "second",
        _ => panic!("ordinal_number called with {}", num),
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The {} card picked this turn could not be turned over",
            ordinal_number(self.pick_idx)
        )
    }
}
