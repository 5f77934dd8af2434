//! The interactive search session.
//!
//! A session walks through four states: it prompts for a query, pages
//! through the results, asks for a final choice and then finishes. Each call
//! to [`Session::step`] performs exactly one transition, reading at most one
//! line of input.

use crate::browser::{NavCommand, ResultBrowser, Transition};
use crate::display::{DisplaySettings, ImageRenderer};
use crate::error::Result;
use crate::model::Recipe;
use crate::selection::Selection;
use crate::sources::RecipeSource;
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::thread;

/// Line-oriented terminal used by a session
pub trait Terminal {
    /// Read one line, or `None` once input is exhausted
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Terminal backed by the process's stdin and stdout
pub struct StdTerminal {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdTerminal {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for StdTerminal {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = self.stdout.lock();
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Chosen(Recipe),
    /// The user typed the exit token at the selection prompt
    Declined,
    NoResults { query: String },
    /// Input ended before the session finished
    InputClosed,
}

#[derive(Debug)]
pub enum SessionState {
    Prompting,
    Paginating(ResultBrowser),
    Selecting(Vec<Recipe>),
    Done(SessionOutcome),
}

pub struct Session<T: Terminal, R: ImageRenderer> {
    terminal: T,
    renderer: R,
    settings: DisplaySettings,
}

impl<T: Terminal, R: ImageRenderer> Session<T, R> {
    pub fn new(terminal: T, renderer: R, settings: DisplaySettings) -> Self {
        Self {
            terminal,
            renderer,
            settings,
        }
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Drive the session from the first prompt to completion.
    ///
    /// Fetch failures end the session with an error; bad navigation or
    /// selection input never does.
    pub fn run(&mut self, source: &dyn RecipeSource) -> Result<SessionOutcome> {
        let mut state = SessionState::Prompting;
        loop {
            state = match self.step(state, source)? {
                SessionState::Done(outcome) => return Ok(outcome),
                next => next,
            };
        }
    }

    /// Perform a single transition
    pub fn step(&mut self, state: SessionState, source: &dyn RecipeSource) -> Result<SessionState> {
        match state {
            SessionState::Prompting => self.prompt_query(source),
            SessionState::Paginating(browser) => self.paginate(browser),
            SessionState::Selecting(results) => self.select(results),
            done @ SessionState::Done(_) => Ok(done),
        }
    }

    fn prompt_query(&mut self, source: &dyn RecipeSource) -> Result<SessionState> {
        self.terminal.write_line(
            "what kind of food are you looking for? enter one or more words separated by spaces",
        )?;

        let Some(line) = self.terminal.read_line()? else {
            return Ok(SessionState::Done(SessionOutcome::InputClosed));
        };
        let query = line.trim();
        if query.is_empty() {
            return Ok(SessionState::Prompting);
        }

        let recipes = source.fetch_recipes(query)?;
        if recipes.is_empty() {
            self.terminal.write_line(&format!(
                "no results found for search query '{}', exiting",
                query
            ))?;
            return Ok(SessionState::Done(SessionOutcome::NoResults {
                query: query.to_string(),
            }));
        }

        info!(
            "found {} recipes from {} for '{}'",
            recipes.len(),
            source.source_name(),
            query
        );
        self.terminal.write_line(&format!(
            "found {} total recipe recommendations",
            recipes.len()
        ))?;

        Ok(SessionState::Paginating(ResultBrowser::new(
            recipes,
            self.settings.page_size,
        )))
    }

    fn paginate(&mut self, mut browser: ResultBrowser) -> Result<SessionState> {
        for (number, recipe) in browser.numbered_page() {
            self.terminal.write_line(&format!("{}. {}", number, recipe))?;
        }
        self.terminal.write_line(
            "hit 'f' to go the next page of results, 'b' to go back, or enter if you've found a recipe you like",
        )?;

        let Some(line) = self.terminal.read_line()? else {
            return Ok(SessionState::Done(SessionOutcome::InputClosed));
        };

        match browser.apply(NavCommand::parse(&line)) {
            Transition::Moved => {}
            Transition::LastPage => {
                self.notice("cannot go forward, this is the last page")?
            }
            Transition::FirstPage => {
                self.notice("cannot go back, this is the first page")?
            }
            Transition::Invalid(input) => self.terminal.write_line(&format!(
                "'{}' is not a valid choice, please enter 'f', 'b', or just press enter",
                input
            ))?,
            Transition::Confirmed => {
                return Ok(SessionState::Selecting(browser.into_results()))
            }
        }

        Ok(SessionState::Paginating(browser))
    }

    fn select(&mut self, mut results: Vec<Recipe>) -> Result<SessionState> {
        self.terminal
            .write_line("find something good? enter the recipe number or 'n' for no")?;

        let Some(line) = self.terminal.read_line()? else {
            return Ok(SessionState::Done(SessionOutcome::InputClosed));
        };

        match Selection::parse(&line, results.len()) {
            Selection::Retry => Ok(SessionState::Selecting(results)),
            Selection::Exit => {
                self.terminal.write_line("that's fair. exiting.")?;
                Ok(SessionState::Done(SessionOutcome::Declined))
            }
            Selection::Index(idx) => {
                let recipe = results.swap_remove(idx);
                self.show_detail(&recipe)?;
                Ok(SessionState::Done(SessionOutcome::Chosen(recipe)))
            }
        }
    }

    fn show_detail(&mut self, recipe: &Recipe) -> Result<()> {
        self.terminal.write_line("you chose:")?;
        for line in recipe.detail_lines() {
            self.terminal.write_line(&line)?;
        }

        if recipe.has_jpeg_image() {
            match self.renderer.render(&recipe.image_url) {
                Ok(art) => self.terminal.write_line(art.trim_end())?,
                Err(e) => warn!("{}", e),
            }
        }

        self.terminal.write_line("")?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> io::Result<()> {
        self.terminal.write_line(message)?;
        if !self.settings.notice_pause.is_zero() {
            thread::sleep(self.settings.notice_pause);
        }
        Ok(())
    }
}
