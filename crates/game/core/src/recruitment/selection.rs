//! Parsing of selection input lines.

use super::SelectionError;

/// Sentinel that ends recruitment. Compared after trimming and lowercasing.
pub const START_COMMAND: &str = "start";

/// One line of selection input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionInput {
    /// The start command.
    Start,
    /// Comma-separated tokens, trimmed, in input order. Empty tokens are kept
    /// so they can be reported.
    Picks(Vec<String>),
}

impl SelectionInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.to_lowercase() == START_COMMAND {
            return Self::Start;
        }
        Self::Picks(line.split(',').map(|token| token.trim().to_owned()).collect())
    }
}

/// Resolves a 1-based token against a pool of `pool_size` candidates and
/// returns the 0-based position.
pub fn parse_index(token: &str, pool_size: usize) -> Result<usize, SelectionError> {
    let index: i64 = token
        .trim()
        .parse()
        .map_err(|_| SelectionError::NotANumber)?;

    usize::try_from(index)
        .ok()
        .filter(|&index| (1..=pool_size).contains(&index))
        .map(|index| index - 1)
        .ok_or(SelectionError::OutOfRange {
            index,
            max: pool_size,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_case_folded_and_trimmed() {
        assert_eq!(SelectionInput::parse("start"), SelectionInput::Start);
        assert_eq!(SelectionInput::parse("  START \n"), SelectionInput::Start);
        assert_eq!(SelectionInput::parse("Start"), SelectionInput::Start);
        assert_ne!(SelectionInput::parse("start now"), SelectionInput::Start);
    }

    #[test]
    fn picks_are_split_on_commas() {
        assert_eq!(
            SelectionInput::parse("1, 3,x,,5"),
            SelectionInput::Picks(vec![
                "1".into(),
                "3".into(),
                "x".into(),
                "".into(),
                "5".into()
            ])
        );
        assert_eq!(
            SelectionInput::parse(""),
            SelectionInput::Picks(vec!["".into()])
        );
    }

    #[test]
    fn indices_are_one_based() {
        assert_eq!(parse_index("1", 5), Ok(0));
        assert_eq!(parse_index(" 5 ", 5), Ok(4));
        assert_eq!(
            parse_index("0", 5),
            Err(SelectionError::OutOfRange { index: 0, max: 5 })
        );
        assert_eq!(
            parse_index("6", 5),
            Err(SelectionError::OutOfRange { index: 6, max: 5 })
        );
        assert_eq!(
            parse_index("-2", 5),
            Err(SelectionError::OutOfRange { index: -2, max: 5 })
        );
        assert_eq!(parse_index("two", 5), Err(SelectionError::NotANumber));
        assert_eq!(parse_index("", 5), Err(SelectionError::NotANumber));
    }
}
