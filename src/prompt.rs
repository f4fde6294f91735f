//! Interactive terminal input.
//!
//! Asks for the number of people, their names and what each one spent,
//! re-prompting until every answer is valid.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::Cents;
use crate::model::{Config, Group, GroupError};

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input ended before all answers were given")]
    UnexpectedEof,

    #[error("failed to talk to the terminal: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Group(#[from] GroupError),
}

/// Question/answer loop over any line-based input and output.
pub struct Prompter<'a, R, W> {
    config: &'a Config,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Prompter<'a, R, W> {
    pub fn new(config: &'a Config, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
        }
    }

    /// Ask every question and build the resulting group.
    pub fn read_group(&mut self) -> Result<Group, PromptError> {
        let count = self.read_count()?;
        let names = self.read_names(count)?;
        let spends = self.read_spends(&names)?;

        let mut group = Group::new(*self.config);
        for (name, spent) in names.into_iter().zip(spends) {
            group.add(name, spent)?;
        }
        Ok(group)
    }

    /// Number of participants, within `[2, max_people]`.
    pub fn read_count(&mut self) -> Result<usize, PromptError> {
        loop {
            write!(
                self.output,
                "Enter the number of people (up to {}): ",
                self.config.max_people
            )?;
            let line = self.read_line()?;

            // a blank answer counts as zero people
            let answer = match line.trim() {
                "" => "0",
                text => text,
            };
            let message = match answer.parse::<i64>() {
                Err(_) => "Please enter a valid number.",
                Ok(n) if n < Config::MIN_PEOPLE as i64 => "That is too few.",
                Ok(n) if n > self.config.max_people as i64 => "That is too many.",
                Ok(n) => return Ok(n as usize),
            };
            debug!(input = line.trim(), "rejected participant count");
            writeln!(self.output, "{message}")?;
        }
    }

    /// One name per participant. Longer input is cut to `max_name_len`
    /// characters; blank names are asked again.
    pub fn read_names(&mut self, count: usize) -> Result<Vec<String>, PromptError> {
        writeln!(
            self.output,
            "\nWhat are their names? (up to {} characters)",
            self.config.max_name_len
        )?;

        let mut names = Vec::with_capacity(count);
        for i in 1..=count {
            loop {
                write!(self.output, "Person {i}: ")?;
                let line = self.read_line()?;
                let name: String = line.trim().chars().take(self.config.max_name_len).collect();
                if name.is_empty() {
                    writeln!(self.output, "Please enter a name.")?;
                    continue;
                }
                names.push(name);
                break;
            }
        }
        Ok(names)
    }

    /// What each named participant spent, as a non-negative decimal.
    pub fn read_spends(&mut self, names: &[String]) -> Result<Vec<Cents>, PromptError> {
        writeln!(self.output, "\nHow much did each person spend?")?;

        let mut spends = Vec::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            loop {
                write!(self.output, "{}. {name:>10}: ", i + 1)?;
                let line = self.read_line()?;
                match line.parse::<Cents>() {
                    Ok(spent) if spent.is_negative() => {
                        debug!(name = %name, input = line.trim(), "rejected negative amount");
                        writeln!(self.output, "Amount cannot be negative.")?;
                    }
                    Ok(spent) => {
                        spends.push(spent);
                        break;
                    }
                    Err(e) => {
                        debug!(name = %name, reason = %e, "rejected amount");
                        writeln!(self.output, "Please enter a valid number.")?;
                    }
                }
            }
        }
        Ok(spends)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, PromptError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::UnexpectedEof);
        }
        Ok(line)
    }
}
