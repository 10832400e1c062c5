//! Scripted sessions against the interactive shell.

use std::io::Cursor;

use symptom_cli::cli::{ShellArgs, SimilarityArg};
use symptom_cli::commands::run_shell;
use symptom_cli::render::NO_MATCHES;
use anyhow::{Result, bail};
use symptom_model::DiseaseCatalog;
use symptom_store::{MemoryStore, RecordStore};

fn session(store: &dyn RecordStore, script: &str) -> String {
    let args = ShellArgs {
        top: 5,
        min_confidence: 0.05,
    };
    let mut output = Vec::new();
    run_shell(
        store,
        SimilarityArg::Indel,
        &args,
        Cursor::new(script.to_string()),
        &mut output,
    )
    .expect("shell session");
    String::from_utf8(output).expect("utf8 output")
}

fn seeded() -> MemoryStore {
    MemoryStore::with_defaults().expect("default catalog")
}

#[test]
fn symptoms_are_identified() {
    let output = session(&seeded(), "fever, cough, chills\nexit\n");
    assert!(output.contains("Top matches:"));
    let flu = output.find("- Influenza (66.7%)").expect("influenza listed");
    let cold = output.find("- Common Cold (25.0%)").expect("cold listed");
    assert!(flu < cold);
    assert!(output.contains("    Treatment: Antivirals if early, rest, fluids, symptomatic care."));
    assert!(output.trim_end().ends_with("Goodbye."));
}

#[test]
fn unknown_symptoms_print_hint() {
    let output = session(&seeded(), "xyz123\nquit\n");
    assert!(output.contains(NO_MATCHES));
}

#[test]
fn end_of_input_exits() {
    let output = session(&seeded(), "");
    assert!(output.contains("Disease Identification System"));
    assert!(output.trim_end().ends_with("Exiting."));
}

#[test]
fn commands_are_case_insensitive() {
    let output = session(&seeded(), "HELP\nList\nQ\n");
    assert!(output.contains("Commands: help | add | list | show <disease> | exit"));
    let cold = output.find("- Common Cold").expect("listed");
    let gastro = output.find("- Gastroenteritis").expect("listed");
    let migraine = output.find("- Migraine").expect("listed");
    assert!(cold < gastro && gastro < migraine);
}

#[test]
fn show_uses_exact_name() {
    let output = session(&seeded(), "SHOW Migraine\nshow migraine\nexit\n");
    assert!(output.contains("Migraine\n  Symptoms: headache, nausea, sensitivity to light, sensitivity to sound"));
    assert!(output.contains("Not found."));
}

#[test]
fn blank_lines_are_ignored() {
    let output = session(&seeded(), "\n   \nexit\n");
    assert!(!output.contains(NO_MATCHES));
    assert!(output.contains("Goodbye."));
}

#[test]
fn add_persists_and_is_matchable() {
    let store = seeded();
    let script = "add\nHay Fever\nsneezing, itchy eyes, , runny nose\nSeasonal allergy.\nAntihistamines.\nitchy eyes\nexit\n";
    let output = session(&store, script);
    assert!(output.contains("Added 'Hay Fever' to database."));
    assert!(output.contains("- Hay Fever ("));

    let catalog = store.load().expect("load");
    let record = catalog.get("Hay Fever").expect("persisted");
    assert_eq!(record.symptoms, vec!["sneezing", "itchy eyes", "runny nose"]);
    assert_eq!(record.treatment, "Antihistamines.");
    assert_eq!(catalog.names().last(), Some("Hay Fever"));
}

#[test]
fn add_rejects_missing_and_duplicate_names() {
    let store = seeded();
    let output = session(&store, "add\n\nadd\nInfluenza\nexit\n");
    assert!(output.contains("Name required."));
    assert!(output.contains("Disease already exists."));
    assert_eq!(store.load().expect("load").len(), 4);
}

/// Serves the default catalog but refuses every write.
struct ReadOnlyStore;

impl RecordStore for ReadOnlyStore {
    fn load(&self) -> Result<DiseaseCatalog> {
        symptom_store::default_catalog()
    }

    fn save(&self, _catalog: &DiseaseCatalog) -> Result<()> {
        bail!("catalog is read-only")
    }
}

#[test]
fn failed_save_keeps_catalog_unchanged() {
    let script = "add\nHay Fever\nsneezing\nSeasonal allergy.\nAntihistamines.\nlist\nshow Hay Fever\nexit\n";
    let output = session(&ReadOnlyStore, script);
    assert!(output.contains("error: catalog is read-only"));
    assert!(!output.contains("Added 'Hay Fever' to database."));
    assert!(!output.contains("- Hay Fever"));
    assert!(output.contains("Not found."));
    assert!(output.trim_end().ends_with("Goodbye."));
}
