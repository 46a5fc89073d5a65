//! The text interface a match is driven through.

use std::collections::VecDeque;
use std::io;

/// Line-oriented input and text output for one match.
pub trait Console {
    /// Shows `prompt` and blocks for the next line of input.
    ///
    /// Returns `Ok(None)` once input is exhausted. The line terminator is not
    /// included.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Displays a board dump or a status/error message.
    fn show(&mut self, text: &str) -> io::Result<()>;
}

/// Console fed from a fixed list of lines; records what it was asked to show.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    prompts: Vec<String>,
    shown: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that will answer prompts with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Prompts issued so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Texts shown so far.
    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        self.shown.push(text.to_string());
        Ok(())
    }
}
