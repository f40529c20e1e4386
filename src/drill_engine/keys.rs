/// A keyboard event, reduced to what the drill routes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    ArrowUp,
    ArrowDown,
    /// Any single printable character, including digits.
    Char(char),
    Other,
}

impl Key {
    /// Map a DOM-style key identifier (`"Enter"`, `"ArrowUp"`, `"3"`, ...).
    pub fn parse(name: &str) -> Key {
        match name {
            "Enter"     => Key::Enter,
            "ArrowUp"   => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }

    /// 1-based digit value for `'1'..='9'`.
    pub fn digit(self) -> Option<usize> {
        match self {
            Key::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize),
            _ => None,
        }
    }
}

/// Whether the drill consumed a key or the host should apply its default
/// behaviour (text editing in free-text mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    PassThrough,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_character_keys() {
        assert_eq!(Key::parse("Enter"), Key::Enter);
        assert_eq!(Key::parse("ArrowUp"), Key::ArrowUp);
        assert_eq!(Key::parse("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::parse("7"), Key::Char('7'));
        assert_eq!(Key::parse("ż"), Key::Char('ż'));
        assert_eq!(Key::parse("Tab"), Key::Other);
        assert_eq!(Key::parse(""), Key::Other);
    }

    #[test]
    fn digits_are_one_based_and_exclude_zero() {
        assert_eq!(Key::Char('1').digit(), Some(1));
        assert_eq!(Key::Char('9').digit(), Some(9));
        assert_eq!(Key::Char('0').digit(), None);
        assert_eq!(Key::Char('a').digit(), None);
        assert_eq!(Key::Enter.digit(), None);
    }
}
