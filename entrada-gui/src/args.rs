//! Command-line argument parsing.

use std::error::Error;

/// Parsed command-line argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg {
    Help,
    Version,
}

/// Parse command-line arguments (including the program name at
/// args[0]). The application takes no options besides help/version.
pub fn parse_args(args: &[String]) -> Result<Option<Arg>, Box<dyn Error>> {
    match args {
        [] | [_] => Ok(None),
        [_, arg] if arg == "--help" || arg == "-h" => Ok(Some(Arg::Help)),
        [_, arg] if arg == "--version" || arg == "-v" => Ok(Some(Arg::Version)),
        [_, arg, ..] => Err(format!("unknown argument '{}'", arg).into()),
    }
}

pub const HELP: &str = r#"
Usage: entrada [OPTIONS]

Options:
    -v, --version       Display entrada version
    -h, --help          Print help
"#;
