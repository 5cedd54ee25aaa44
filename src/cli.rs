use clap::Parser;
use std::path::PathBuf;

/// Verbosity levels for log output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum VerbosityLevel {
    /// Only show errors
    Quiet,
    /// Show startup and warnings
    #[default]
    Normal,
    /// Show per-request information
    Verbose,
    /// Show all available debugging information
    Debug,
}

impl VerbosityLevel {
    /// Default `tracing` filter directive for this level
    pub fn filter_directive(self) -> &'static str {
        match self {
            VerbosityLevel::Quiet => "error",
            VerbosityLevel::Normal => "info",
            VerbosityLevel::Verbose => "iris_xml=debug,info",
            VerbosityLevel::Debug => "debug",
        }
    }
}

/// Serve a flower measurement dataset as filtered XML
#[derive(Parser, Debug, Clone)]
#[command(name = "iris-xml")]
#[command(about = "Serve a JSON flower dataset as filtered XML over HTTP")]
#[command(version)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Path to the input JSON file
    #[arg(short = 'i', long = "input", env = "IRIS_XML_INPUT")]
    pub input: PathBuf,

    /// Host to bind
    #[arg(short = 'h', long = "host", env = "IRIS_XML_HOST")]
    pub host: String,

    /// Port to bind
    #[arg(short = 'p', long = "port", env = "IRIS_XML_PORT")]
    pub port: u16,

    /// Enable verbose output (repeat for debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Enable quiet mode (errors only)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Quiet mode",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Explicit tracing filter, e.g. "iris_xml=trace"
    #[arg(long = "log-filter")]
    pub log_filter: Option<String>,

    /// Print help
    #[arg(long = "help", action = clap::ArgAction::Help)]
    pub help: Option<bool>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        if self.quiet {
            VerbosityLevel::Quiet
        } else {
            match self.verbose {
                0 => VerbosityLevel::Normal,
                1 => VerbosityLevel::Verbose,
                _ => VerbosityLevel::Debug,
            }
        }
    }
}
