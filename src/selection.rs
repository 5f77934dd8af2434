/// Token that ends the session without choosing a recipe
pub const EXIT_TOKEN: &str = "n";

/// The outcome of one line typed at the selection prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 0-based index into the results
    Index(usize),
    Exit,
    /// Not a number in `1..=len`; ask again without complaint
    Retry,
}

impl Selection {
    /// Validate a 1-based choice against a result list of length `len`.
    ///
    /// Only `1..=len` is accepted.
    pub fn parse(input: &str, len: usize) -> Self {
        let input = input.trim();
        if input == EXIT_TOKEN {
            return Selection::Exit;
        }

        match input.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => Selection::Index(n - 1),
            _ => Selection::Retry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_exactly_one_through_len() {
        let len = 7;
        for n in 1..=len {
            assert_eq!(Selection::parse(&n.to_string(), len), Selection::Index(n - 1));
        }
    }

    #[test]
    fn test_upper_bound_is_inclusive() {
        assert_eq!(Selection::parse("12", 12), Selection::Index(11));
        assert_eq!(Selection::parse("13", 12), Selection::Retry);
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        assert_eq!(Selection::parse("0", 5), Selection::Retry);
        assert_eq!(Selection::parse("-1", 5), Selection::Retry);
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(Selection::parse("two", 5), Selection::Retry);
        assert_eq!(Selection::parse("", 5), Selection::Retry);
        assert_eq!(Selection::parse("1.5", 5), Selection::Retry);
        assert_eq!(Selection::parse("99999999999999999999999", 5), Selection::Retry);
    }

    #[test]
    fn test_exit_token() {
        assert_eq!(Selection::parse("n", 5), Selection::Exit);
        assert_eq!(Selection::parse(" n\n", 5), Selection::Exit);
        assert_eq!(Selection::parse("N", 5), Selection::Retry);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(Selection::parse(" 3 \n", 5), Selection::Index(2));
    }

    #[test]
    fn test_empty_results_accept_nothing() {
        assert_eq!(Selection::parse("1", 0), Selection::Retry);
    }
}
