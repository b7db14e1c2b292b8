//! TUI interaction modes

/// The current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Navigation between panes and rows
    Normal,
    /// Command entry mode (activated with :)
    Command,
    /// A bookmark is picked up and waiting to be dropped (activated with m)
    Move,
}

impl Mode {
    /// Returns a short code for the status bar.
    pub fn short_code(&self) -> &'static str {
        match self {
            Mode::Normal => "NOR",
            Mode::Command => "CMD",
            Mode::Move => "MOV",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_codes_are_distinct() {
        let codes = [Mode::Normal, Mode::Command, Mode::Move].map(|m| m.short_code());
        assert_eq!(codes, ["NOR", "CMD", "MOV"]);
    }
}
