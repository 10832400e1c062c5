use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use symptom_match::{IdentifyOptions, Identifier, Scorer};
use symptom_model::DiseaseRecord;
use symptom_store::RecordStore;
use tracing::{debug, info, info_span};

use crate::cli::{AddArgs, IdentifyArgs, ListArgs, ShellArgs, ShowArgs, SimilarityArg};
use crate::logging::redact_value;
use crate::render::{catalog_table, write_confidence_lines, write_name_list, write_record};
use crate::shell::Shell;

/// Outcome of a `show` lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOutcome {
    Found,
    NotFound,
}

impl IdentifyArgs {
    pub fn options(&self) -> IdentifyOptions {
        IdentifyOptions::default()
            .with_top_n(self.top)
            .with_min_confidence(self.min_confidence)
    }
}

impl ShellArgs {
    pub fn options(&self) -> IdentifyOptions {
        IdentifyOptions::default()
            .with_top_n(self.top)
            .with_min_confidence(self.min_confidence)
    }
}

fn identifier(similarity: SimilarityArg, options: IdentifyOptions) -> Identifier<SimilarityArg> {
    Identifier::with_scorer(Scorer::with_similarity(similarity), options)
}

/// Non-interactive identify: one `name: confidence%` line per result.
///
/// With no symptom arguments the query is read from `input` after an
/// `Enter symptoms: ` prompt.
pub fn run_identify<R: BufRead, W: Write>(
    store: &dyn RecordStore,
    similarity: SimilarityArg,
    args: &IdentifyArgs,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let query = if args.symptoms.is_empty() {
        write!(out, "Enter symptoms: ")?;
        out.flush()?;
        let mut line = String::new();
        input.read_line(&mut line).context("read symptoms")?;
        line.trim().to_string()
    } else {
        args.symptoms.join(" ")
    };

    let span = info_span!("identify", similarity = ?similarity);
    let _guard = span.enter();
    let catalog = store.load()?;
    let results = identifier(similarity, args.options()).identify_with_scores(&catalog, &query);
    debug!(
        query = %redact_value(&query),
        records = catalog.len(),
        results = results.len(),
        "identify complete"
    );
    write_confidence_lines(out, &results, args.explain)?;
    Ok(())
}

pub fn run_list<W: Write>(store: &dyn RecordStore, args: &ListArgs, out: &mut W) -> Result<()> {
    let catalog = store.load()?;
    if args.long {
        writeln!(out, "{}", catalog_table(&catalog))?;
    } else {
        write_name_list(out, &catalog)?;
    }
    Ok(())
}

pub fn run_show<W: Write>(
    store: &dyn RecordStore,
    args: &ShowArgs,
    out: &mut W,
) -> Result<ShowOutcome> {
    let catalog = store.load()?;
    let name = args.name.join(" ");
    match catalog.get(&name) {
        Some(record) => {
            write_record(out, &name, record)?;
            Ok(ShowOutcome::Found)
        }
        None => {
            writeln!(out, "Not found.")?;
            Ok(ShowOutcome::NotFound)
        }
    }
}

pub fn run_add<W: Write>(store: &dyn RecordStore, args: &AddArgs, out: &mut W) -> Result<()> {
    let mut catalog = store.load()?;
    let name = args.name.trim();
    let record = DiseaseRecord::new(
        DiseaseRecord::parse_symptom_list(&args.symptoms),
        args.description.trim(),
        args.treatment.trim(),
    );
    catalog.insert(name, record)?;
    store.save(&catalog)?;
    info!(disease = %name, records = catalog.len(), "disease added");
    writeln!(out, "Added '{name}' to database.")?;
    Ok(())
}

/// Flushes `out` and turns a command result into a process exit code.
///
/// Errors, including a failed flush, are printed to stderr and give 1.
pub fn finish<W: Write>(result: Result<i32>, out: &mut W) -> i32 {
    let result = result.and_then(|code| {
        out.flush().context("flush output")?;
        Ok(code)
    });
    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

pub fn run_shell<R: BufRead, W: Write>(
    store: &dyn RecordStore,
    similarity: SimilarityArg,
    args: &ShellArgs,
    input: R,
    output: W,
) -> Result<()> {
    let mut shell = Shell::new(store, identifier(similarity, args.options()), input, output)?;
    shell.run()
}
