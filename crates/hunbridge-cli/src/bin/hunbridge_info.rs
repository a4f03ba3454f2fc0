// hunbridge-info: Describe a dictionary.
//
// Prints the dictionary path, the encoding it declares and its extra word
// characters.
//
// Usage:
//   hunbridge-info [-d LANG_OR_PATH] [--json]

use std::io::{self, Write};

use hunbridge_batch::{BatchRequest, Operation, OperationResult};

fn main() {
    hunbridge_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let common = hunbridge_cli::parse_common(&args).unwrap_or_else(|e| hunbridge_cli::fatal(&e));

    if common.help {
        println!("hunbridge-info: Describe a dictionary.");
        println!();
        println!("Usage: hunbridge-info [-d LANG_OR_PATH] [--json]");
        println!();
        println!("Options:");
        println!("  -d, --dict LANG_OR_PATH   Dictionary language name or .dic/.aff path");
        println!(
            "                            (default: {})",
            hunbridge_cli::DEFAULT_DICTIONARY
        );
        println!("  --json                    Print the result as JSON");
        println!("  -h, --help                Print this help");
        return;
    }

    let paths = hunbridge_cli::resolve_dictionary(common.dict.as_deref())
        .unwrap_or_else(|e| hunbridge_cli::fatal(&e));
    let request = BatchRequest::new(Operation::Info, paths.affix, paths.dictionary);
    let result = hunbridge_batch::default_processor()
        .run(&request)
        .unwrap_or_else(|e| hunbridge_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let written = match &result {
        _ if common.json => hunbridge_cli::write_json(&mut out, &result),
        OperationResult::Info(info) => writeln!(
            out,
            "dictionary: {}\nencoding: {}\nwordchars: {}",
            info.dictionary.display(),
            info.encoding,
            info.word_chars
        ),
        _ => hunbridge_cli::fatal("info returned an unexpected result"),
    };
    if let Err(e) = written.and_then(|()| out.flush()) {
        hunbridge_cli::fatal(&format!("failed to write output: {e}"));
    }
}
