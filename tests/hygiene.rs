//! Source budgets for the WASM build: anything that can panic takes every
//! page behavior down with it, so production code carries none.

use std::fs;
use std::path::Path;

/// (pattern, allowed occurrences across `src/`)
const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("let _ =", 0),
    ("#[allow(dead_code)]", 0),
    // Browser lookups where an error only ever means "absent": storage
    // reads, node casts, viewport width, selector lists, digit parsing.
    (".ok()", 5),
];

/// Production text of every non-test source file. Inline fake modules sit
/// at the end of a file behind `#[cfg(test)] pub(crate) mod` and are cut.
fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    for entry in fs::read_dir(dir).into_iter().flatten().flatten() {
        let path = entry.path();
        let name = path.to_string_lossy().into_owned();
        if path.is_dir() {
            production_sources(&path, out);
        } else if name.ends_with(".rs") && !name.ends_with("_test.rs") {
            let text = fs::read_to_string(&path).unwrap_or_default();
            let cut = text.find("#[cfg(test)]\npub(crate) mod").unwrap_or(text.len());
            out.push((name, text[..cut].to_owned()));
        }
    }
}

#[test]
fn production_sources_stay_within_budgets() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(files.len() > 10, "sources not found; run from the crate root");

    let mut over = Vec::new();
    for &(pattern, max) in BUDGETS {
        let hits: Vec<(&str, usize)> = files
            .iter()
            .map(|(path, text)| (path.as_str(), text.lines().filter(|line| line.contains(pattern)).count()))
            .filter(|(_, n)| *n > 0)
            .collect();
        let count: usize = hits.iter().map(|(_, n)| n).sum();
        if count > max {
            let hits: Vec<String> = hits.iter().map(|(path, n)| format!("{path}: {n}")).collect();
            over.push(format!("{pattern} found {count}, max {max}\n  {}", hits.join("\n  ")));
        }
    }
    assert!(over.is_empty(), "budgets exceeded:\n{}", over.join("\n"));
}

