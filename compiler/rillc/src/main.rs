//! Rill interpreter CLI.

use rillc::commands::{dump_file, run_file, RunOptions};
use rillc::{init_tracing, EXIT_USAGE_ERROR};

fn main() {
    let mut args: Vec<String> = std::env::args().collect();

    let trace_tree = args.iter().any(|a| a == "--trace-tree");
    args.retain(|a| a != "--trace-tree");
    init_tracing(trace_tree);

    let Some(command) = args.get(1) else {
        print_usage();
        return;
    };

    let status = match command.as_str() {
        "run" => match parse_run_args(&args[2..]) {
            Ok((path, options)) => run_file(&path, &options),
            Err(message) => usage_error(&message, "rill run <program.json> [--entry <fn>] [--max-depth <n>]"),
        },
        "dump" => match args.get(2) {
            Some(path) => dump_file(path),
            None => usage_error("missing program path", "rill dump <program.json>"),
        },
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("rill {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            {
                run_file(command, &RunOptions::default())
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                EXIT_USAGE_ERROR
            }
        }
    };

    if status != 0 {
        std::process::exit(status);
    }
}

fn parse_run_args(args: &[String]) -> Result<(String, RunOptions), String> {
    let mut options = RunOptions::default();
    let mut path = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--entry" => {
                let name = iter.next().ok_or("--entry needs a function name")?;
                options.entry = Some(name.clone());
            }
            "--max-depth" => {
                let depth = iter.next().ok_or("--max-depth needs a number")?;
                let depth = depth
                    .parse()
                    .map_err(|_| format!("invalid --max-depth value `{depth}`"))?;
                options.max_depth = Some(depth);
            }
            other if other.starts_with('-') => return Err(format!("unknown option `{other}`")),
            other if path.is_none() => path = Some(other.to_string()),
            other => return Err(format!("unexpected argument `{other}`")),
        }
    }

    let path = path.ok_or("missing program path")?;
    Ok((path, options))
}

fn usage_error(message: &str, usage: &str) -> i32 {
    eprintln!("error: {message}");
    eprintln!("Usage: {usage}");
    EXIT_USAGE_ERROR
}

fn print_usage() {
    println!("Rill interpreter");
    println!();
    println!("Usage: rill <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <program.json>   Evaluate a program");
    println!("  dump <program.json>  Print a program in source form");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --entry <fn>         Call <fn> after the top level and print its result");
    println!("  --max-depth <n>      Limit nested function calls (default 1024)");
    println!();
    println!("Global options:");
    println!("  --trace-tree         Render RUST_LOG output as a call tree");
}
