//! Build script to generate embedded game data
//!
//! Reads the tab-separated bank and association files and generates Rust source
//! code with const tables.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Thematic banks: base, word, difficulty, category
    generate_table(
        "data/thematic_banks.tsv",
        &Path::new(&out_dir).join("thematic.rs"),
        "THEMATIC_ENTRIES",
        "Curated thematic word banks as (base, word, difficulty, category) rows",
        "(&str, &str, &str, &str)",
        |fields| {
            format!(
                "(\"{}\", \"{}\", \"{}\", \"{}\")",
                fields[0], fields[1], fields[2], fields[3]
            )
        },
    );

    // Pairwise associations: source, target, rarity, strength
    generate_table(
        "data/associations.tsv",
        &Path::new(&out_dir).join("associations.rs"),
        "ASSOCIATION_ENTRIES",
        "Directed word associations as (source, target, rarity, strength) rows",
        "(&str, &str, f64, f64)",
        |fields| {
            format!(
                "(\"{}\", \"{}\", {:?}, {:?})",
                fields[0],
                fields[1],
                parse_unit(fields[2]),
                parse_unit(fields[3])
            )
        },
    );

    // Rebuild if data files change
    println!("cargo:rerun-if-changed=data/thematic_banks.tsv");
    println!("cargo:rerun-if-changed=data/associations.tsv");
}

fn parse_unit(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .unwrap_or_else(|e| panic!("Invalid number '{raw}': {e}"))
}

fn generate_table(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
    row_type: &str,
    render_row: impl Fn(&[&str]) -> String,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<Vec<&str>> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.split('\t').map(str::trim).collect::<Vec<_>>())
        .collect();

    for (i, fields) in rows.iter().enumerate() {
        assert!(
            fields.len() == 4,
            "{input_path}: row {} has {} fields, expected 4",
            i + 1,
            fields.len()
        );
    }

    let count = rows.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated game data").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[{row_type}] = &[").unwrap();

    for fields in &rows {
        writeln!(output, "    {},", render_row(fields)).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of rows in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
