// hunbridge-list: List installed dictionaries.
//
// Prints the language name of every affix/dictionary pair found in the
// search path, one per line, followed by the directories searched when
// --paths is given.
//
// Usage:
//   hunbridge-list [--paths] [--json]

use std::io::{self, Write};

fn main() {
    hunbridge_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let common = hunbridge_cli::parse_common(&args).unwrap_or_else(|e| hunbridge_cli::fatal(&e));

    if common.help {
        println!("hunbridge-list: List installed dictionaries.");
        println!();
        println!("Usage: hunbridge-list [--paths] [--json]");
        println!();
        println!("Dictionaries are searched for in DICPATH, HUNBRIDGE_DICT_PATH,");
        println!("~/.hunspell, the system dictionary directories and the current directory.");
        println!();
        println!("Options:");
        println!("  --paths     Also print the directories searched");
        println!("  --json      Print the result as JSON");
        println!("  -h, --help  Print this help");
        return;
    }

    let show_paths = hunbridge_cli::has_flag(&common.rest, "--paths", "--paths");
    let dirs = hunbridge_batch::dictionary::search_paths();
    let names = hunbridge_batch::dictionary::list_dictionaries_in(&dirs);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let written = if common.json {
        let value = if show_paths {
            let searched: Vec<String> = dirs.iter().map(|d| d.display().to_string()).collect();
            serde_json::json!({ "dictionaries": names, "searched": searched })
        } else {
            serde_json::json!(names)
        };
        serde_json::to_writer_pretty(&mut out, &value)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(out))
    } else {
        write_plain(&mut out, &names, show_paths.then_some(dirs.as_slice()))
    };
    if let Err(e) = written.and_then(|()| out.flush()) {
        hunbridge_cli::fatal(&format!("failed to write output: {e}"));
    }
}

fn write_plain(
    out: &mut impl Write,
    names: &[String],
    searched: Option<&[std::path::PathBuf]>,
) -> io::Result<()> {
    for name in names {
        writeln!(out, "{name}")?;
    }
    if let Some(dirs) = searched {
        writeln!(out)?;
        writeln!(out, "searched:")?;
        for dir in dirs {
            writeln!(out, "  {}", dir.display())?;
        }
    }
    Ok(())
}
