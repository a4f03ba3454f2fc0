// hunbridge-suggest: Spelling suggestions for words.
//
// Usage:
//   hunbridge-suggest [-d LANG_OR_PATH] [--json] [--] [WORD...]
//
// Options:
//   -d, --dict LANG_OR_PATH   Dictionary language name or .dic/.aff path
//   --json                    Print the result as JSON
//   -h, --help                Print help

use hunbridge_core::Operation;

fn main() {
    hunbridge_cli::run_list_tool(Operation::Suggest, print_help);
}

fn print_help() {
    println!("hunbridge-suggest: Spelling suggestions for words.");
    println!();
    println!("Usage: hunbridge-suggest [-d LANG_OR_PATH] [--json] [--] [WORD...]");
    println!();
    println!("If WORD arguments are given, processes each word.");
    println!("Otherwise reads words from stdin (one per line).");
    println!("Prints each word followed by its suggestions, or 'word: (none)'.");
    println!();
    println!("Options:");
    println!("  -d, --dict LANG_OR_PATH   Dictionary language name or .dic/.aff path");
    println!("                            (default: {})", hunbridge_cli::DEFAULT_DICTIONARY);
    println!("  --json                    Print the result as JSON");
    println!("  -h, --help                Print this help");
}
