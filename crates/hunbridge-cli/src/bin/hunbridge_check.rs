// hunbridge-check: Check spelling of words.
//
// Reports whether each word is correctly spelled:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//
// Usage:
//   hunbridge-check [-d LANG_OR_PATH] [-i WORD]... [OPTIONS] [--] [WORD...]
//
// Options:
//   -d, --dict LANG_OR_PATH   Dictionary language name or .dic/.aff path
//   -i, --ignore WORD         Accept WORD for this run (repeatable)
//   -s, --suggest             Also print suggestions for misspelled words
//   --json                    Print the result as JSON
//   -h, --help                Print help

use std::io::{self, Write};

use hunbridge_batch::{BatchRequest, Operation, OperationResult};

fn main() {
    hunbridge_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (ignore, args) =
        hunbridge_cli::take_values(&args, "-i", "--ignore").unwrap_or_else(|e| hunbridge_cli::fatal(&e));
    let common = hunbridge_cli::parse_common(&args).unwrap_or_else(|e| hunbridge_cli::fatal(&e));

    if common.help {
        println!("hunbridge-check: Check spelling of words.");
        println!();
        println!("Usage: hunbridge-check [-d LANG_OR_PATH] [-i WORD]... [OPTIONS] [--] [WORD...]");
        println!();
        println!("If WORD arguments are given, checks each word.");
        println!("Otherwise reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!();
        println!("Options:");
        println!("  -d, --dict LANG_OR_PATH   Dictionary language name or .dic/.aff path");
        println!(
            "                            (default: {})",
            hunbridge_cli::DEFAULT_DICTIONARY
        );
        println!("  -i, --ignore WORD         Accept WORD for this run (repeatable)");
        println!("  -s, --suggest             Also print suggestions for misspelled words");
        println!("  --json                    Print the result as JSON");
        println!("  -h, --help                Print this help");
        return;
    }

    let show_suggestions = hunbridge_cli::has_flag(&common.rest, "-s", "--suggest");

    let paths = hunbridge_cli::resolve_dictionary(common.dict.as_deref())
        .unwrap_or_else(|e| hunbridge_cli::fatal(&e));
    let words = hunbridge_cli::collect_words(&common.rest);

    let processor = hunbridge_batch::default_processor();
    let request = BatchRequest::new(Operation::Check, &paths.affix, &paths.dictionary)
        .with_words(words.iter().cloned())
        .with_ignore(ignore);
    let result = processor
        .run(&request)
        .unwrap_or_else(|e| hunbridge_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if common.json {
        if let Err(e) = hunbridge_cli::write_json(&mut out, &result) {
            hunbridge_cli::fatal(&format!("failed to write output: {e}"));
        }
        let _ = out.flush();
        return;
    }

    let OperationResult::Check(flags) = result else {
        hunbridge_cli::fatal("check returned an unexpected result");
    };

    let misspelled: Vec<&String> = words
        .iter()
        .zip(&flags)
        .filter(|(_, ok)| !**ok)
        .map(|(w, _)| w)
        .collect();
    let suggestions = if show_suggestions && !misspelled.is_empty() {
        processor
            .suggest(&paths.affix, &paths.dictionary, &misspelled)
            .unwrap_or_else(|e| hunbridge_cli::fatal(&e.to_string()))
    } else {
        Vec::new()
    };
    let mut suggestions = suggestions.into_iter();

    for (word, ok) in words.iter().zip(&flags) {
        if *ok {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            for suggestion in suggestions.next().unwrap_or_default() {
                let _ = writeln!(out, "S: {suggestion}");
            }
        }
    }
    let _ = out.flush();
}
