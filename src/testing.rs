//! Testing utilities for foody
//!
//! In-memory stand-ins for the terminal, a recipe source and the image
//! renderer, so sessions can be driven from a script.

use crate::display::ImageRenderer;
use crate::error::{FoodyError, Result};
use crate::model::Recipe;
use crate::session::Terminal;
use crate::sources::RecipeSource;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

/// Terminal that replays scripted input lines and records everything written
///
/// # Examples
/// ```
/// # use foody::session::Terminal;
/// # use foody::testing::ScriptedTerminal;
/// let mut terminal = ScriptedTerminal::new(&["pasta"]);
/// assert_eq!(terminal.read_line().unwrap(), Some("pasta\n".to_string()));
/// assert_eq!(terminal.read_line().unwrap(), None);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| format!("{}\n", l)).collect(),
            output: Vec::new(),
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    pub fn count_containing(&self, needle: &str) -> usize {
        self.output
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }
}

impl Terminal for ScriptedTerminal {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}

/// Source that returns a fixed list (or a fixed error) and remembers queries
pub struct StaticSource {
    recipes: Vec<Recipe>,
    error: Option<fn() -> FoodyError>,
    queries: RefCell<Vec<String>>,
}

impl StaticSource {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            error: None,
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(error: fn() -> FoodyError) -> Self {
        Self {
            recipes: Vec::new(),
            error: Some(error),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl RecipeSource for StaticSource {
    fn source_name(&self) -> &str {
        "static"
    }

    fn fetch_recipes(&self, query: &str) -> Result<Vec<Recipe>> {
        self.queries.borrow_mut().push(query.to_string());
        match self.error {
            Some(error) => Err(error()),
            None => Ok(self.recipes.clone()),
        }
    }
}

/// Renderer that records the URLs it was asked to draw
#[derive(Debug, Default)]
pub struct StubRenderer {
    rendered: RefCell<Vec<String>>,
    fail: bool,
}

impl StubRenderer {
    pub fn failing() -> Self {
        Self {
            rendered: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    pub fn rendered(&self) -> Vec<String> {
        self.rendered.borrow().clone()
    }
}

impl ImageRenderer for StubRenderer {
    fn render(&self, image_url: &str) -> Result<String> {
        self.rendered.borrow_mut().push(image_url.to_string());
        if self.fail {
            return Err(FoodyError::Render("stub renderer failure".to_string()));
        }
        Ok(format!("[art for {}]\n", image_url))
    }
}
