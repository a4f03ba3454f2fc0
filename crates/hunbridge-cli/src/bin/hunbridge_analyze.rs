// hunbridge-analyze: Morphological analysis of words.
//
// Usage:
//   hunbridge-analyze [-d LANG_OR_PATH] [--json] [--] [WORD...]
//
// Options:
//   -d, --dict LANG_OR_PATH   Dictionary language name or .dic/.aff path
//   --json                    Print the result as JSON
//   -h, --help                Print help

use hunbridge_core::Operation;

fn main() {
    hunbridge_cli::run_list_tool(Operation::Analyze, print_help);
}

fn print_help() {
    println!("hunbridge-analyze: Morphological analysis of words.");
    println!();
    println!("Usage: hunbridge-analyze [-d LANG_OR_PATH] [--json] [--] [WORD...]");
    println!();
    println!("If WORD arguments are given, processes each word.");
    println!("Otherwise reads words from stdin (one per line).");
    println!("Prints each word followed by its analyses, or 'word: (none)'.");
    println!();
    println!("Options:");
    println!("  -d, --dict LANG_OR_PATH   Dictionary language name or .dic/.aff path");
    println!("                            (default: {})", hunbridge_cli::DEFAULT_DICTIONARY);
    println!("  --json                    Print the result as JSON");
    println!("  -h, --help                Print this help");
}
