use std::fs::{self};

use bodmas::{error::ErrorKind, evaluate};
use walkdir::WalkDir;

/// One `expression = expected` line from a ```` ```bodmas ```` block.
enum Expected {
    Value(f64),
    Error(ErrorKind),
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in extract_example_lines(&content) {
            count += 1;
            let (src, expected) = parse_example(&line).unwrap_or_else(|| {
                                                          panic!("Malformed example in {path:?}: {line}")
                                                      });
            match (evaluate(src), expected) {
                (Ok(value), Expected::Value(expected)) => {
                    assert!((value - expected).abs() <= 1e-9 * expected.abs().max(1.0),
                            "{path:?}: {src} evaluated to {value}, expected {expected}");
                },
                (Err(e), Expected::Error(kind)) => {
                    assert_eq!(e.kind(), kind, "{path:?}: {src} failed with {e}");
                },
                (Ok(value), Expected::Error(kind)) => {
                    panic!("{path:?}: {src} evaluated to {value}, expected {kind}")
                },
                (Err(e), Expected::Value(expected)) => {
                    panic!("{path:?}: {src} failed with {e}, expected {expected}")
                },
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_example_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```bodmas") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines
}

fn parse_example(line: &str) -> Option<(&str, Expected)> {
    let (src, expected) = line.rsplit_once(" = ")?;
    let expected = match expected.trim() {
        "InvalidExpression" => Expected::Error(ErrorKind::InvalidExpression),
        "DivisionByZero" => Expected::Error(ErrorKind::DivisionByZero),
        "NumericParseFailure" => Expected::Error(ErrorKind::NumericParseFailure),
        value => Expected::Value(value.parse().ok()?),
    };
    Some((src.trim(), expected))
}
