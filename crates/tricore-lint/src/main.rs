//! CLI entry point for the TriCore assembly checker.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use log::{debug, LevelFilter};
use thiserror as _;
use tricore_lint::{check_document, check_instruction, parse_dialect, preprocess, LintConfig};
use tricore_tables as _;
#[cfg(test)]
use {proptest as _, rstest as _, tempfile as _};
#[cfg(feature = "serde")]
use serde as _;

const USAGE_TEXT: &str = "\
Usage: tricore-lint <command> [options]

Commands:
  check <input>... [--dialect <name>] [--verbose]  Check assembly source files
  line  <instruction>                              Match one instruction line

Options:
  -d, --dialect <name>  Assembler dialect: gnu (default) or tasking
  -v, --verbose         Log scan details to stderr
  -h, --help            Show this help message

Examples:
  tricore-lint check boot.S startup.S
  tricore-lint check --dialect tasking cstart.src
  tricore-lint line \"ld.w %d4,[%a14]-4\"
";

const EXIT_DIAGNOSTICS: i32 = 1;
const EXIT_USAGE: i32 = 2;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Check(CheckArgs),
    Line(String),
}

#[derive(Debug, PartialEq, Eq)]
struct CheckArgs {
    inputs: Vec<PathBuf>,
    config: LintConfig,
    verbose: bool,
}

#[derive(Debug)]
enum ParseResult {
    Command(Command),
    Help,
}

fn parse_args(mut args: impl Iterator<Item = OsString>) -> Result<ParseResult, String> {
    let first = args.next().ok_or_else(|| "missing command".to_string())?;

    if first == "--help" || first == "-h" {
        return Ok(ParseResult::Help);
    }

    let command_str = first.to_string_lossy().to_string();

    match command_str.as_str() {
        "check" => parse_check_args(args)
            .map(Command::Check)
            .map(ParseResult::Command),
        "line" => parse_line_args(args)
            .map(Command::Line)
            .map(ParseResult::Command),
        other => Err(format!("unknown command: {other}")),
    }
}

#[allow(clippy::while_let_on_iterator)]
fn parse_check_args(mut args: impl Iterator<Item = OsString>) -> Result<CheckArgs, String> {
    let mut inputs = Vec::new();
    let mut config = LintConfig::default();
    let mut verbose = false;

    while let Some(arg) = args.next() {
        if arg == "--help" || arg == "-h" {
            return Err(USAGE_TEXT.to_string());
        }

        if arg == "--verbose" || arg == "-v" {
            verbose = true;
            continue;
        }

        if arg == "--dialect" || arg == "-d" {
            let value = args
                .next()
                .ok_or_else(|| "missing value for --dialect".to_string())?;
            let dialect = parse_dialect(&value.to_string_lossy()).map_err(|e| e.to_string())?;
            config = LintConfig::with_dialect(dialect);
            continue;
        }

        if arg.to_string_lossy().starts_with('-') {
            return Err(format!("unknown option: {}", arg.to_string_lossy()));
        }

        inputs.push(PathBuf::from(arg));
    }

    if inputs.is_empty() {
        return Err("missing input path".to_string());
    }
    Ok(CheckArgs {
        inputs,
        config,
        verbose,
    })
}

fn parse_line_args(args: impl Iterator<Item = OsString>) -> Result<String, String> {
    let words: Vec<String> = args
        .map(|arg| arg.to_string_lossy().to_string())
        .collect();
    if words.first().is_some_and(|word| word == "--help" || word == "-h") {
        return Err(USAGE_TEXT.to_string());
    }
    if words.is_empty() {
        return Err("missing instruction text".to_string());
    }
    Ok(words.join(" "))
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .format_timestamp(None)
        .init();
}

fn run_check(args: &CheckArgs) -> Result<(), i32> {
    let mut failed = false;
    let mut total = 0;

    for input in &args.inputs {
        let source = match fs::read_to_string(input) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("error: failed to read {}: {e}", input.display());
                failed = true;
                continue;
            }
        };

        debug!("checking {} ({} bytes)", input.display(), source.len());
        let report = check_document(&source, &args.config);
        for diagnostic in report.iter() {
            eprintln!("{}", diagnostic.format_for_stderr(input));
        }
        total += report.len();
    }

    println!(
        "Checked {} file(s) ({} dialect): {total} diagnostic(s)",
        args.inputs.len(),
        args.config.dialect.name()
    );

    if failed || total > 0 {
        Err(EXIT_DIAGNOSTICS)
    } else {
        Ok(())
    }
}

fn run_line(text: &str) -> Result<(), i32> {
    let normalized = preprocess(text);
    match check_instruction(normalized.trim()) {
        Ok(checked) => {
            debug!("parsed operand codes: {}", checked.instruction.ops());
            println!(
                "{} {} {}",
                checked.variant.name, checked.variant.args, checked.variant.format
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("error: {e}");
            Err(EXIT_DIAGNOSTICS)
        }
    }
}

fn main() {
    let exit_code = match parse_args(env::args_os().skip(1)) {
        Ok(ParseResult::Help) => {
            println!("{USAGE_TEXT}");
            0
        }
        Ok(ParseResult::Command(Command::Check(args))) => {
            init_logging(args.verbose);
            match run_check(&args) {
                Ok(()) => 0,
                Err(code) => code,
            }
        }
        Ok(ParseResult::Command(Command::Line(text))) => {
            init_logging(false);
            match run_line(&text) {
                Ok(()) => 0,
                Err(code) => code,
            }
        }
        Err(error) => {
            if error.starts_with("Usage:") {
                println!("{error}");
                0
            } else {
                eprintln!("error: {error}");
                eprintln!("{USAGE_TEXT}");
                EXIT_USAGE
            }
        }
    };

    std::process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tricore_lint::Dialect;

    fn os_args(args: &[&str]) -> impl Iterator<Item = OsString> {
        args.iter()
            .map(OsString::from)
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn parses_check_command() {
        let result = parse_check_args(os_args(&[
            "boot.S",
            "--dialect",
            "tasking",
            "start.S",
            "--verbose",
        ]))
        .expect("valid check args should parse");

        assert_eq!(
            result,
            CheckArgs {
                inputs: vec![PathBuf::from("boot.S"), PathBuf::from("start.S")],
                config: LintConfig::with_dialect(Dialect::Tasking),
                verbose: true,
            }
        );
    }

    #[test]
    fn check_defaults_to_gnu_dialect() {
        let result = parse_check_args(os_args(&["boot.S", "-v"])).expect("short flags");
        assert_eq!(result.config.dialect, Dialect::Gnu);
        assert!(result.verbose);
    }

    #[test]
    fn rejects_unknown_dialect() {
        let error = parse_check_args(os_args(&["boot.S", "-d", "armasm"]))
            .expect_err("unknown dialect should fail");
        assert!(error.contains("unknown dialect"));
    }

    #[test]
    fn rejects_missing_dialect_value() {
        let error = parse_check_args(os_args(&["boot.S", "--dialect"]))
            .expect_err("missing value should fail");
        assert!(error.contains("missing value"));
    }

    #[test]
    fn check_requires_an_input() {
        let error = parse_check_args(std::iter::empty()).expect_err("missing input should fail");
        assert!(error.contains("missing input"));
    }

    #[test]
    fn check_rejects_unknown_options() {
        let error = parse_check_args(os_args(&["--fix", "boot.S"]))
            .expect_err("unknown option should fail");
        assert!(error.contains("unknown option"));
    }

    #[test]
    fn line_joins_remaining_words() {
        let result = parse_args(os_args(&["line", "mov", "%d2,", "%d1"])).expect("line command");
        match result {
            ParseResult::Command(Command::Line(text)) => assert_eq!(text, "mov %d2, %d1"),
            _ => panic!("expected line command"),
        }
    }

    #[test]
    fn line_requires_text() {
        let error = parse_line_args(std::iter::empty()).expect_err("missing text should fail");
        assert!(error.contains("missing instruction"));
    }

    #[test]
    fn parses_help_flag() {
        let result = parse_args(os_args(&["--help"])).expect("help should parse without error");
        assert!(matches!(result, ParseResult::Help));
    }

    #[test]
    fn rejects_unknown_command() {
        let error =
            parse_args(os_args(&["build"])).expect_err("unknown command should fail parse");
        assert!(error.contains("unknown command"));
    }

    #[test]
    fn run_line_reports_errors_with_exit_code() {
        assert_eq!(run_line("mov %d18, 32"), Err(EXIT_DIAGNOSTICS));
        assert_eq!(run_line("  mov   %d2,  %d1  # copy"), Ok(()));
    }
}
