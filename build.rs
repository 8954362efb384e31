//! Build script to embed the word lists
//!
//! Turns each newline-delimited list under `data/` into a `&[&str]` const in
//! `OUT_DIR`, skipping blank lines and lowercasing entries.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

struct WordList {
    source: &'static str,
    target: &'static str,
    const_name: &'static str,
    doc: &'static str,
}

const LISTS: [WordList; 2] = [
    WordList {
        source: "data/answers.txt",
        target: "answers.rs",
        const_name: "ANSWERS",
        doc: "Words eligible to be hidden targets",
    },
    WordList {
        source: "data/allowed.txt",
        target: "allowed.rs",
        const_name: "ALLOWED",
        doc: "Words accepted as guesses (answers included)",
    },
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    for list in &LISTS {
        generate_word_list(list, &Path::new(&out_dir).join(list.target));
        println!("cargo:rerun-if-changed={}", list.source);
    }
}

fn generate_word_list(list: &WordList, output_path: &Path) {
    let content = fs::read_to_string(list.source)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", list.source));

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_ascii_lowercase())
        .filter(|line| !line.is_empty())
        .collect();

    for word in &words {
        assert!(
            word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase()),
            "{}: '{word}' is not a five-letter word",
            list.source
        );
    }

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    let mut emit = || -> std::io::Result<()> {
        writeln!(output, "// Generated from {}", list.source)?;
        writeln!(output)?;
        writeln!(output, "/// {}", list.doc)?;
        writeln!(output, "pub const {}: &[&str] = &[", list.const_name)?;
        for word in &words {
            writeln!(output, "    \"{word}\",")?;
        }
        writeln!(output, "];")?;
        writeln!(output)?;
        writeln!(output, "/// Number of words in {}", list.const_name)?;
        writeln!(output, "pub const {}_COUNT: usize = {};", list.const_name, words.len())
    };
    emit().unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}
