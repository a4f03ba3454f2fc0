// hunbridge-cli: shared utilities for CLI tools.

use std::io::{self, BufRead, Write};
use std::process;

use hunbridge_batch::{BatchRequest, DictionaryPaths, OperationResult};
use hunbridge_core::Operation;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Dictionary used when no `-d` argument is given.
pub const DEFAULT_DICTIONARY: &str = "en_US";

/// Environment variable holding the log filter (`warn` when unset).
pub const LOG_ENV: &str = "HUNBRIDGE_LOG";

/// Everything after this argument is a word, even if it starts with `-`.
pub const END_OF_OPTIONS: &str = "--";

/// Tool-specific switches left in [`CommonArgs::rest`]; never taken as words.
pub const TOOL_FLAGS: &[&str] = &["-s", "--suggest", "--paths"];

/// Options shared by every tool.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommonArgs {
    /// `-d`/`--dict`: language name or path to a `.dic`/`.aff` file.
    pub dict: Option<String>,
    /// `--json`: print the batch result as JSON.
    pub json: bool,
    /// `-h`/`--help`.
    pub help: bool,
    /// Everything not consumed above, in order.
    pub rest: Vec<String>,
}

/// Install a stderr log subscriber filtered by `HUNBRIDGE_LOG`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(io::stderr)
            .with_target(true)
            .with_level(true)
            .with_filter(filter),
    );
    if subscriber.try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Split the shared options from the tool-specific arguments.
pub fn parse_common(args: &[String]) -> Result<CommonArgs, String> {
    let (dict, args) = take_values(args, "-d", "--dict")?;
    let mut common = CommonArgs {
        dict: dict.into_iter().last(),
        ..CommonArgs::default()
    };
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            END_OF_OPTIONS => {
                common.rest.push(arg);
                common.rest.extend(args.by_ref());
            }
            "--json" => common.json = true,
            "-h" | "--help" => common.help = true,
            _ => common.rest.push(arg),
        }
    }
    Ok(common)
}

/// Remove every `SHORT VALUE`, `LONG VALUE` and `LONG=VALUE` occurrence
/// before [`END_OF_OPTIONS`].
///
/// Returns `(values, remaining_args)`.
pub fn take_values(
    args: &[String],
    short: &str,
    long: &str,
) -> Result<(Vec<String>, Vec<String>), String> {
    let mut values = Vec::new();
    let mut remaining = Vec::new();
    let mut iter = args.iter();
    let long_eq = format!("{long}=");

    while let Some(arg) = iter.next() {
        if arg == END_OF_OPTIONS {
            remaining.push(arg.clone());
            remaining.extend(iter.by_ref().cloned());
        } else if let Some(val) = arg.strip_prefix(&long_eq) {
            values.push(val.to_string());
        } else if arg == short || arg == long {
            match iter.next() {
                Some(val) => values.push(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((values, remaining))
}

/// Resolve `-d` (or [`DEFAULT_DICTIONARY`]) to an affix/dictionary pair.
pub fn resolve_dictionary(dict: Option<&str>) -> Result<DictionaryPaths, String> {
    hunbridge_batch::find_dictionary(dict.unwrap_or(DEFAULT_DICTIONARY)).map_err(|e| e.to_string())
}

fn split_options(args: &[String]) -> (&[String], &[String]) {
    match args.iter().position(|a| a == END_OF_OPTIONS) {
        Some(i) => (&args[..i], &args[i + 1..]),
        None => (args, &[]),
    }
}

/// Whether `short` or `long` appears before [`END_OF_OPTIONS`].
pub fn has_flag(args: &[String], short: &str, long: &str) -> bool {
    let (options, _) = split_options(args);
    options.iter().any(|a| a == short || a == long)
}

/// The word arguments: everything except [`TOOL_FLAGS`] before
/// [`END_OF_OPTIONS`], and everything after it.
pub fn word_args(args: &[String]) -> Vec<String> {
    let (options, operands) = split_options(args);
    options
        .iter()
        .filter(|a| !TOOL_FLAGS.contains(&a.as_str()))
        .chain(operands)
        .cloned()
        .collect()
}

/// Words from the command line, or from stdin (one per line) when none
/// were given. Blank lines are skipped.
pub fn collect_words(args: &[String]) -> Vec<String> {
    let words = word_args(args);
    if !words.is_empty() {
        return words;
    }
    read_words(io::stdin().lock())
}

pub fn read_words(input: impl BufRead) -> Vec<String> {
    let mut words = Vec::new();
    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    words
}

/// Print `result` as pretty JSON.
pub fn write_json(out: &mut impl Write, result: &OperationResult) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)
}

/// `word:` followed by one indented line per entry, or `word: (none)`.
pub fn write_lists(out: &mut impl Write, words: &[String], lists: &[Vec<String>]) -> io::Result<()> {
    for (word, list) in words.iter().zip(lists) {
        if list.is_empty() {
            writeln!(out, "{word}: (none)")?;
        } else {
            writeln!(out, "{word}:")?;
            for entry in list {
                writeln!(out, "  {entry}")?;
            }
        }
    }
    Ok(())
}

/// Shared body of the suggest, analyze and stem tools.
///
/// `print_help` is called instead of running anything when `-h` is given.
pub fn run_list_tool(operation: Operation, print_help: fn()) {
    init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let common = parse_common(&args).unwrap_or_else(|e| fatal(&e));
    if common.help {
        print_help();
        return;
    }

    let paths = resolve_dictionary(common.dict.as_deref()).unwrap_or_else(|e| fatal(&e));
    let words = collect_words(&common.rest);
    let request =
        BatchRequest::new(operation, paths.affix, paths.dictionary).with_words(words.iter().cloned());
    let result = hunbridge_batch::default_processor()
        .run(&request)
        .unwrap_or_else(|e| fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let written = if common.json {
        write_json(&mut out, &result)
    } else {
        write_lists(&mut out, &words, result.lists().unwrap_or_default())
    };
    if let Err(e) = written.and_then(|()| out.flush()) {
        fatal(&format!("failed to write output: {e}"));
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
