//! Build script to generate the embedded word list and pattern vocabulary
//!
//! Reads the data files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/words.txt",
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Default practice word list",
    );

    generate_vocabulary(
        "data/patterns.txt",
        &Path::new(&out_dir).join("patterns.rs"),
        "PATTERNS",
        "Default pattern vocabulary as (pattern, declared length) pairs",
    );

    // Rebuild if the data files change
    println!("cargo:rerun-if-changed=data/words.txt");
    println!("cargo:rerun-if-changed=data/patterns.txt");
}

/// Non-empty, non-comment lines of a data file
fn data_lines(input_path: &str) -> Vec<String> {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let words = data_lines(input_path);
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in &words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

fn generate_vocabulary(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let lines = data_lines(input_path);

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated pattern vocabulary").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, usize)] = &[").unwrap();

    for line in &lines {
        let mut parts = line.split_whitespace();
        let pattern = parts
            .next()
            .unwrap_or_else(|| panic!("Missing pattern in {input_path}: {line}"));
        let length: usize = parts
            .next()
            .map_or(Ok(pattern.chars().count()), str::parse)
            .unwrap_or_else(|e| panic!("Invalid length in {input_path}: {line} ({e})"));
        writeln!(output, "    ({pattern:?}, {length}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", lines.len()).unwrap();
}
