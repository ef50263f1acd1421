//! Build script to embed the fallback word list
//!
//! Turns data/fallback.txt into a const array the crate includes at compile time.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("fallback.rs");

    let content = fs::read_to_string("data/fallback.txt")
        .unwrap_or_else(|e| panic!("Failed to read data/fallback.txt: {e}"));
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect();

    let mut output = fs::File::create(&out_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", out_path.display()));

    writeln!(
        output,
        "/// Fallback words used to pad the answer pool to its target size"
    )
    .unwrap();
    writeln!(output, "pub const FALLBACK: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in FALLBACK").unwrap();
    writeln!(output, "pub const FALLBACK_COUNT: usize = {};", words.len()).unwrap();

    println!("cargo:rerun-if-changed=data/fallback.txt");
}
