// Command line parsing for `quicksight-deploy <env>`
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;

pub const USAGE: &str = "Usage: quicksight-deploy <env>\nExample: quicksight-deploy dev";

#[derive(Debug, Parser, PartialEq)]
#[command(
    name = "quicksight-deploy",
    version,
    about = "Deploy the QuickSight template and dashboard for one environment"
)]
pub struct Cli {
    /// Environment name; selects config/<env>.json (e.g. dev, prod)
    pub env: String,
}

#[derive(Debug)]
pub enum Invocation {
    Deploy(Cli),
    /// Wrong number of arguments
    Usage,
    /// --help / --version
    Info(clap::Error),
}

pub fn parse_args<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Invocation::Deploy(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => Invocation::Info(e),
        Err(_) => Invocation::Usage,
    }
}

/// Resolve the command line into a deployment, or the exit status to stop with.
/// Wrong arity writes the usage text and yields 1.
pub fn dispatch<I, T, W>(args: I, out: &mut W) -> Result<Cli, u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    match parse_args(args) {
        Invocation::Deploy(cli) => Ok(cli),
        Invocation::Usage => {
            let _ = writeln!(out, "{}", USAGE);
            Err(1)
        }
        Invocation::Info(e) => {
            let _ = write!(out, "{}", e);
            Err(0)
        }
    }
}
