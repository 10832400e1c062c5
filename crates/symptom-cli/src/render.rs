//! Text rendering for records and match results.

use std::io::{self, Write};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use symptom_match::ScoredMatch;
use symptom_model::{DiseaseCatalog, DiseaseRecord, MatchResult};

pub const NO_MATCHES: &str =
    "No likely matches found. Try different symptom wording or add the disease with 'add'.";

/// Full record view used by `show`.
pub fn write_record<W: Write>(out: &mut W, name: &str, record: &DiseaseRecord) -> io::Result<()> {
    writeln!(out, "{name}")?;
    writeln!(out, "  Symptoms: {}", record.symptom_summary())?;
    writeln!(out, "  Description: {}", record.description)?;
    writeln!(out, "  Treatment: {}", record.treatment)
}

/// Detailed result list printed by the interactive shell.
pub fn write_matches<W: Write>(out: &mut W, results: &[MatchResult]) -> io::Result<()> {
    if results.is_empty() {
        return writeln!(out, "{NO_MATCHES}");
    }
    writeln!(out, "Top matches:")?;
    for result in results {
        writeln!(out, "- {} ({:.1}%)", result.name, result.confidence_percent)?;
        writeln!(out, "    Symptoms: {}", result.record.symptom_summary())?;
        writeln!(out, "    Description: {}", result.record.description)?;
        writeln!(out, "    Treatment: {}", result.record.treatment)?;
    }
    Ok(())
}

/// One `name: confidence%` line per result, optionally with the score breakdown.
pub fn write_confidence_lines<W: Write>(
    out: &mut W,
    results: &[ScoredMatch],
    explain: bool,
) -> io::Result<()> {
    for scored in results {
        writeln!(
            out,
            "{}: {:.1}%",
            scored.result.name, scored.result.confidence_percent
        )?;
        if explain {
            writeln!(out, "    {}", scored.score.explain())?;
        }
    }
    Ok(())
}

/// Alphabetical `- name` listing.
pub fn write_name_list<W: Write>(out: &mut W, catalog: &DiseaseCatalog) -> io::Result<()> {
    for name in catalog.sorted_names() {
        writeln!(out, "- {name}")?;
    }
    Ok(())
}

/// Alphabetical table of every record.
pub fn catalog_table(catalog: &DiseaseCatalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Disease"),
        header_cell("Symptoms"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for name in catalog.sorted_names() {
        let Some(record) = catalog.get(name) else {
            continue;
        };
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(record.symptom_summary()),
            Cell::new(&record.description),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn record_view() {
        let record = DiseaseRecord::new(
            vec!["fever".to_string(), "rash".to_string()],
            "Made up.",
            "Rest.",
        );
        let text = render(|out| write_record(out, "Spots", &record));
        insta::assert_snapshot!(text.trim_end(), @r"
        Spots
          Symptoms: fever, rash
          Description: Made up.
          Treatment: Rest.
        ");
    }

    #[test]
    fn empty_results_print_hint() {
        let text = render(|out| write_matches(out, &[]));
        assert_eq!(text.trim_end(), NO_MATCHES);
    }

    #[test]
    fn percentages_keep_one_decimal() {
        let results = vec![MatchResult {
            name: "Flu".to_string(),
            confidence_percent: 25.0,
            record: DiseaseRecord::with_symptoms(["fever"]),
        }];
        let text = render(|out| write_matches(out, &results));
        assert!(text.contains("- Flu (25.0%)"));
    }

    #[test]
    fn table_lists_every_record() {
        let mut catalog = DiseaseCatalog::new();
        catalog
            .insert("Zeta", DiseaseRecord::with_symptoms(["a"]))
            .unwrap();
        catalog
            .insert("Alpha", DiseaseRecord::with_symptoms(["b"]))
            .unwrap();
        let rendered = catalog_table(&catalog).to_string();
        let alpha = rendered.find("Alpha").unwrap();
        let zeta = rendered.find("Zeta").unwrap();
        assert!(alpha < zeta);
    }
}
