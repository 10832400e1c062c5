//! Interactive prompt loop.
//!
//! The shell reads one line at a time. A line is either a command (`help`,
//! `add`, `list`, `show <name>`, `exit`/`quit`/`q`, matched case-insensitively)
//! or symptom text to identify. Input and output are generic so the loop can
//! be driven from tests.

use std::io::{BufRead, Write};

use anyhow::Result;
use symptom_match::{Identifier, Similarity};
use symptom_model::{DiseaseCatalog, DiseaseRecord, ModelError};
use symptom_store::RecordStore;
use tracing::{debug, error, info};

use crate::logging::redact_value;
use crate::render::{write_matches, write_name_list, write_record};

const PROMPT: &str = "\nSymptoms> ";
const SHOW_PREFIX: &str = "show ";

pub struct Shell<'a, S, R, W> {
    store: &'a dyn RecordStore,
    catalog: DiseaseCatalog,
    identifier: Identifier<S>,
    input: R,
    output: W,
}

impl<'a, S, R, W> Shell<'a, S, R, W>
where
    S: Similarity,
    R: BufRead,
    W: Write,
{
    /// Loads the catalog from `store`; the store is written again only by `add`.
    pub fn new(
        store: &'a dyn RecordStore,
        identifier: Identifier<S>,
        input: R,
        output: W,
    ) -> Result<Self> {
        let catalog = store.load()?;
        Ok(Self {
            store,
            catalog,
            identifier,
            input,
            output,
        })
    }

    /// Runs until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Disease Identification System")?;
        writeln!(
            self.output,
            "Enter symptoms separated by commas (e.g. fever, cough). Type 'help' for options."
        )?;
        loop {
            let Some(line) = self.prompt(PROMPT)? else {
                writeln!(self.output, "\nExiting.")?;
                break;
            };
            if line.is_empty() {
                continue;
            }
            let command = line.to_lowercase();
            match command.as_str() {
                "exit" | "quit" | "q" => {
                    writeln!(self.output, "Goodbye.")?;
                    break;
                }
                "help" => self.help()?,
                "add" => self.add()?,
                "list" => write_name_list(&mut self.output, &self.catalog)?,
                _ => {
                    if let Some(name) = show_target(&line) {
                        self.show(name)?;
                    } else {
                        self.identify(&line)?;
                    }
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn help(&mut self) -> Result<()> {
        writeln!(self.output, "Commands: help | add | list | show <disease> | exit")?;
        writeln!(self.output, "Or enter symptoms to identify possible diseases.")?;
        Ok(())
    }

    fn show(&mut self, name: &str) -> Result<()> {
        match self.catalog.get(name) {
            Some(record) => write_record(&mut self.output, name, record)?,
            None => writeln!(self.output, "Not found.")?,
        }
        Ok(())
    }

    fn identify(&mut self, query: &str) -> Result<()> {
        let results = self.identifier.identify(&self.catalog, query);
        debug!(
            query = %redact_value(query),
            results = results.len(),
            "identify"
        );
        write_matches(&mut self.output, &results)?;
        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Disease name: ")? else {
            return Ok(());
        };
        if name.is_empty() {
            writeln!(self.output, "Name required.")?;
            return Ok(());
        }
        if self.catalog.contains(&name) {
            writeln!(self.output, "Disease already exists.")?;
            return Ok(());
        }
        let symptoms = self
            .prompt("Symptoms (comma-separated): ")?
            .unwrap_or_default();
        let description = self.prompt("Short description: ")?.unwrap_or_default();
        let treatment = self
            .prompt("Common treatment/advice: ")?
            .unwrap_or_default();
        let record = DiseaseRecord::new(
            DiseaseRecord::parse_symptom_list(&symptoms),
            description,
            treatment,
        );

        let mut updated = self.catalog.clone();
        match updated.insert(name.as_str(), record) {
            Ok(()) => {}
            Err(ModelError::DuplicateName(_)) => {
                writeln!(self.output, "Disease already exists.")?;
                return Ok(());
            }
            Err(ModelError::EmptyName) => {
                writeln!(self.output, "Name required.")?;
                return Ok(());
            }
        }
        if let Err(err) = self.store.save(&updated) {
            error!(error = %format!("{err:#}"), "failed to save catalog");
            writeln!(self.output, "error: {err:#}")?;
            return Ok(());
        }
        self.catalog = updated;
        info!(disease = %name, "disease added");
        writeln!(self.output, "Added '{name}' to database.")?;
        Ok(())
    }

    /// Writes `label`, then reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Name argument of a `show <name>` line, with the name's case preserved.
fn show_target(line: &str) -> Option<&str> {
    let prefix = line.get(..SHOW_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(SHOW_PREFIX) {
        return None;
    }
    Some(line[SHOW_PREFIX.len()..].trim())
}
