//! Paging through a result list.
//!
//! [`ResultBrowser`] owns the results for one session and tracks the offset
//! of the page on screen. Each navigation command either moves the offset by
//! one page, is rejected at a boundary, or confirms the current view.

use crate::model::Recipe;

/// A single navigation command typed while browsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    /// `f`
    Forward,
    /// `b`
    Back,
    /// Empty line
    Confirm,
    Invalid(String),
}

impl NavCommand {
    /// Parse a line of input; surrounding whitespace is ignored
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "" => NavCommand::Confirm,
            "f" => NavCommand::Forward,
            "b" => NavCommand::Back,
            other => NavCommand::Invalid(other.to_string()),
        }
    }
}

/// What happened when a command was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Moved,
    /// Forward was rejected; the offset is unchanged
    LastPage,
    /// Back was rejected; the offset is unchanged
    FirstPage,
    /// Unrecognised input; the offset is unchanged
    Invalid(String),
    /// Browsing is over
    Confirmed,
}

#[derive(Debug)]
pub struct ResultBrowser {
    results: Vec<Recipe>,
    page_size: usize,
    offset: usize,
}

impl ResultBrowser {
    /// `page_size` must be positive
    pub fn new(results: Vec<Recipe>, page_size: usize) -> Self {
        debug_assert!(page_size > 0);
        ResultBrowser {
            results,
            page_size,
            offset: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Hand the results over once browsing is done
    pub fn into_results(self) -> Vec<Recipe> {
        self.results
    }

    /// The recipes on the current page
    pub fn page(&self) -> &[Recipe] {
        let end = (self.offset + self.page_size).min(self.results.len());
        &self.results[self.offset..end]
    }

    /// The current page paired with 1-based numbers that run across pages
    pub fn numbered_page(&self) -> impl Iterator<Item = (usize, &Recipe)> {
        let first = self.offset + 1;
        self.page()
            .iter()
            .enumerate()
            .map(move |(idx, recipe)| (first + idx, recipe))
    }

    pub fn apply(&mut self, command: NavCommand) -> Transition {
        match command {
            NavCommand::Forward => {
                // The next page must start on an existing entry
                if self.offset + self.page_size >= self.results.len() {
                    return Transition::LastPage;
                }
                self.offset += self.page_size;
                Transition::Moved
            }
            NavCommand::Back => match self.offset.checked_sub(self.page_size) {
                Some(offset) => {
                    self.offset = offset;
                    Transition::Moved
                }
                None => Transition::FirstPage,
            },
            NavCommand::Confirm => Transition::Confirmed,
            NavCommand::Invalid(input) => Transition::Invalid(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(n: usize) -> Vec<Recipe> {
        (1..=n).map(|i| Recipe::new(format!("Recipe {}", i))).collect()
    }

    fn numbers(browser: &ResultBrowser) -> Vec<usize> {
        browser.numbered_page().map(|(n, _)| n).collect()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(NavCommand::parse("f"), NavCommand::Forward);
        assert_eq!(NavCommand::parse(" b \n"), NavCommand::Back);
        assert_eq!(NavCommand::parse(""), NavCommand::Confirm);
        assert_eq!(NavCommand::parse("   "), NavCommand::Confirm);
        assert_eq!(
            NavCommand::parse("F"),
            NavCommand::Invalid("F".to_string())
        );
        assert_eq!(
            NavCommand::parse("forward"),
            NavCommand::Invalid("forward".to_string())
        );
    }

    #[test]
    fn test_first_page() {
        let browser = ResultBrowser::new(results(12), 5);
        assert_eq!(browser.offset(), 0);
        assert_eq!(numbers(&browser), vec![1, 2, 3, 4, 5]);
        assert_eq!(browser.page()[0].name, "Recipe 1");
    }

    #[test]
    fn test_twelve_results_stop_at_last_page() {
        let mut browser = ResultBrowser::new(results(12), 5);

        assert_eq!(browser.apply(NavCommand::Forward), Transition::Moved);
        assert_eq!(browser.offset(), 5);
        assert_eq!(numbers(&browser), vec![6, 7, 8, 9, 10]);

        assert_eq!(browser.apply(NavCommand::Forward), Transition::Moved);
        assert_eq!(browser.offset(), 10);
        assert_eq!(numbers(&browser), vec![11, 12]);

        assert_eq!(browser.apply(NavCommand::Forward), Transition::LastPage);
        assert_eq!(browser.offset(), 10);
        assert_eq!(numbers(&browser), vec![11, 12]);
    }

    #[test]
    fn test_back_on_first_page_is_rejected() {
        let mut browser = ResultBrowser::new(results(3), 5);
        assert_eq!(browser.apply(NavCommand::Back), Transition::FirstPage);
        assert_eq!(browser.offset(), 0);
    }

    #[test]
    fn test_forward_then_back_is_inverse() {
        let mut browser = ResultBrowser::new(results(17), 5);
        browser.apply(NavCommand::Forward);
        let before = browser.offset();

        assert_eq!(browser.apply(NavCommand::Forward), Transition::Moved);
        assert_eq!(browser.apply(NavCommand::Back), Transition::Moved);
        assert_eq!(browser.offset(), before);
    }

    #[test]
    fn test_single_page_forward_rejected() {
        let mut browser = ResultBrowser::new(results(4), 5);
        assert_eq!(browser.apply(NavCommand::Forward), Transition::LastPage);
        assert_eq!(browser.offset(), 0);
        assert_eq!(numbers(&browser), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_exact_multiple_never_shows_empty_page() {
        let mut browser = ResultBrowser::new(results(10), 5);
        assert_eq!(browser.apply(NavCommand::Forward), Transition::Moved);
        assert_eq!(browser.offset(), 5);
        assert_eq!(numbers(&browser), vec![6, 7, 8, 9, 10]);

        assert_eq!(browser.apply(NavCommand::Forward), Transition::LastPage);
        assert_eq!(browser.offset(), 5);
        assert_eq!(browser.apply(NavCommand::Back), Transition::Moved);
        assert_eq!(browser.offset(), 0);
    }

    #[test]
    fn test_empty_results_have_empty_page() {
        let mut browser = ResultBrowser::new(Vec::new(), 5);
        assert!(browser.is_empty());
        assert!(browser.page().is_empty());
        assert_eq!(browser.apply(NavCommand::Forward), Transition::LastPage);
        assert_eq!(browser.offset(), 0);
    }

    #[test]
    fn test_offset_stays_in_bounds_under_any_sequence() {
        let commands = [
            NavCommand::Forward,
            NavCommand::Forward,
            NavCommand::Back,
            NavCommand::Forward,
            NavCommand::Forward,
            NavCommand::Forward,
            NavCommand::Forward,
            NavCommand::Back,
            NavCommand::Back,
            NavCommand::Back,
            NavCommand::Back,
            NavCommand::Back,
        ];
        for n in 1..=23 {
            let mut browser = ResultBrowser::new(results(n), 5);
            for command in commands.iter().cloned() {
                browser.apply(command);
                assert!(browser.offset() < n);
                assert_eq!(browser.offset() % 5, 0);
            }
        }
    }

    #[test]
    fn test_invalid_and_confirm_leave_offset() {
        let mut browser = ResultBrowser::new(results(12), 5);
        browser.apply(NavCommand::Forward);

        assert_eq!(
            browser.apply(NavCommand::Invalid("x".to_string())),
            Transition::Invalid("x".to_string())
        );
        assert_eq!(browser.offset(), 5);
        assert_eq!(browser.apply(NavCommand::Confirm), Transition::Confirmed);
        assert_eq!(browser.offset(), 5);
    }

    #[test]
    fn test_order_is_preserved() {
        let browser = ResultBrowser::new(results(3), 5);
        let names: Vec<&str> = browser.page().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Recipe 1", "Recipe 2", "Recipe 3"]);
        assert_eq!(browser.into_results().len(), 3);
    }
}
