//! Non-interactive subcommands against a file-backed catalog.

use std::fs;
use std::io::{self, Cursor, Write};
use std::path::PathBuf;

use symptom_cli::cli::{AddArgs, IdentifyArgs, ListArgs, ShowArgs, SimilarityArg};
use symptom_cli::commands::{ShowOutcome, finish, run_add, run_identify, run_list, run_show};
use symptom_store::{JsonFileStore, RecordStore};

fn temp_db() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("symptom_cli_{}_{stamp}", std::process::id()));
    dir.join("diseases.json")
}

fn cleanup(db: &PathBuf) {
    if let Some(dir) = db.parent() {
        let _ = fs::remove_dir_all(dir);
    }
}

fn identify_args(symptoms: &[&str], explain: bool) -> IdentifyArgs {
    IdentifyArgs {
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        top: 10,
        min_confidence: 0.05,
        explain,
    }
}

fn identify_output(store: &JsonFileStore, args: &IdentifyArgs, stdin: &str) -> String {
    let mut out = Vec::new();
    run_identify(
        store,
        SimilarityArg::Indel,
        args,
        Cursor::new(stdin.to_string()),
        &mut out,
    )
    .expect("identify");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn identify_prints_confidence_lines() {
    let db = temp_db();
    let store = JsonFileStore::new(&db);
    // Arguments are joined with spaces, so commas travel with the words.
    let output = identify_output(&store, &identify_args(&["fever,", "cough,", "chills"], false), "");
    insta::assert_snapshot!(output.trim_end(), @r"
    Influenza: 66.7%
    Common Cold: 25.0%
    Gastroenteritis: 25.0%
    ");
    assert!(db.exists(), "first run seeds the catalog file");
    cleanup(&db);
}

#[test]
fn identify_reads_stdin_when_no_arguments() {
    let db = temp_db();
    let store = JsonFileStore::new(&db);
    let output = identify_output(&store, &identify_args(&[], false), "headche\n");
    assert!(output.starts_with("Enter symptoms: "));
    assert!(output.contains("Migraine: 32.0%"));
    assert!(output.contains("Influenza: 22.9%"));
    cleanup(&db);
}

#[test]
fn identify_explains_scores() {
    let db = temp_db();
    let store = JsonFileStore::new(&db);
    let output = identify_output(&store, &identify_args(&["headche;", "nausea"], true), "");
    assert!(output.contains("Migraine: 60.0%\n    headche: ~headache (93%); nausea: exact"));
    cleanup(&db);
}

#[test]
fn identify_with_no_matches_prints_nothing() {
    let db = temp_db();
    let store = JsonFileStore::new(&db);
    let output = identify_output(&store, &identify_args(&["xyz123"], false), "");
    assert_eq!(output, "");
    cleanup(&db);
}

#[test]
fn add_then_show_and_list() {
    let db = temp_db();
    let store = JsonFileStore::new(&db);

    let mut out = Vec::new();
    let args = AddArgs {
        name: "  Hay Fever ".to_string(),
        symptoms: "sneezing, itchy eyes,".to_string(),
        description: "Seasonal allergy.".to_string(),
        treatment: "Antihistamines.".to_string(),
    };
    run_add(&store, &args, &mut out).expect("add");
    assert_eq!(String::from_utf8(out).unwrap(), "Added 'Hay Fever' to database.\n");

    let mut out = Vec::new();
    let outcome = run_show(
        &store,
        &ShowArgs {
            name: vec!["Hay".to_string(), "Fever".to_string()],
        },
        &mut out,
    )
    .expect("show");
    assert_eq!(outcome, ShowOutcome::Found);
    insta::assert_snapshot!(String::from_utf8(out).unwrap().trim_end(), @r"
    Hay Fever
      Symptoms: sneezing, itchy eyes
      Description: Seasonal allergy.
      Treatment: Antihistamines.
    ");

    let mut out = Vec::new();
    run_list(&store, &ListArgs { long: false }, &mut out).expect("list");
    insta::assert_snapshot!(String::from_utf8(out).unwrap().trim_end(), @r"
    - Common Cold
    - Gastroenteritis
    - Hay Fever
    - Influenza
    - Migraine
    ");

    cleanup(&db);
}

#[test]
fn add_rejects_duplicates_without_writing() {
    let db = temp_db();
    let store = JsonFileStore::new(&db);
    let before = store.load().expect("seed");

    let args = AddArgs {
        name: "Migraine".to_string(),
        symptoms: "aura".to_string(),
        description: String::new(),
        treatment: String::new(),
    };
    let error = run_add(&store, &args, &mut Vec::new()).expect_err("duplicate");
    assert!(error.to_string().contains("Migraine"));
    assert_eq!(store.load().expect("reload"), before);

    cleanup(&db);
}

#[test]
fn show_missing_disease() {
    let db = temp_db();
    let store = JsonFileStore::new(&db);
    let mut out = Vec::new();
    let outcome = run_show(
        &store,
        &ShowArgs {
            name: vec!["migraine".to_string()],
        },
        &mut out,
    )
    .expect("show");
    assert_eq!(outcome, ShowOutcome::NotFound);
    assert_eq!(String::from_utf8(out).unwrap(), "Not found.\n");
    cleanup(&db);
}

#[test]
fn long_list_renders_table() {
    let db = temp_db();
    let store = JsonFileStore::new(&db);
    let mut out = Vec::new();
    run_list(&store, &ListArgs { long: true }, &mut out).expect("list");
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Disease"));
    assert!(text.contains("Gastroenteritis"));
    cleanup(&db);
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }
}

#[test]
fn finish_keeps_command_exit_code() {
    let mut out = Vec::new();
    assert_eq!(finish(Ok(0), &mut out), 0);
    assert_eq!(finish(Ok(1), &mut out), 1);
    assert_eq!(finish(Err(anyhow::anyhow!("store unavailable")), &mut out), 1);
}

#[test]
fn finish_fails_when_output_cannot_be_flushed() {
    assert_eq!(finish(Ok(0), &mut BrokenPipe), 1);
}
