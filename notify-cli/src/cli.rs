use std::ffi::OsString;

use clap::Parser;

/// Number of positional arguments a deal alert needs.
pub const ALERT_ARGS: usize = 3;

/// Send a DealDrip alert to Telegram and email.
///
/// Prints a machine-readable marker line on stdout (`NOTIFICATION_SUCCESS`,
/// `NOTIFICATION_FAILED` or `NOTIFICATION_ERROR`) for the calling process.
#[derive(Parser, Debug)]
#[command(name = "send-notification", author, version, about, long_about = None)]
pub struct Args {
    /// TITLE MESSAGE PRODUCT_URL; arguments after the third are ignored.
    /// Flags are only recognized before the first of these.
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub positionals: Vec<String>,

    /// Send a timestamped test notification instead of a deal alert
    #[arg(long, conflicts_with = "positionals")]
    pub test: bool,

    /// Exit with status 2 when no channel delivered and 1 on unexpected errors
    #[arg(long)]
    pub strict_exit: bool,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// What the command was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Send {
        title: String,
        message: String,
        product_url: String,
    },
    Test,
}

impl Args {
    /// Parses the command line, falling back to plain positionals whenever
    /// there are at least three raw arguments that clap cannot read as
    /// flags followed by three positionals. A title such as `--test` or
    /// `--help` is then delivered as text instead of changing the mode.
    pub fn parse_argv<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let raw = argv.get(1..).unwrap_or_default();

        match Self::try_parse_from(&argv) {
            Ok(args) if raw.len() >= ALERT_ARGS && args.positionals.len() < ALERT_ARGS => {
                Ok(Self::positional_only(raw))
            }
            Ok(args) => Ok(args),
            Err(_) if raw.len() >= ALERT_ARGS => Ok(Self::positional_only(raw)),
            Err(e) => Err(e),
        }
    }

    fn positional_only(raw: &[OsString]) -> Self {
        Self {
            positionals: raw
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
            test: false,
            strict_exit: false,
            verbose: false,
            quiet: false,
        }
    }

    /// `None` when fewer than three positional arguments were given.
    pub fn invocation(&self) -> Option<Invocation> {
        if self.test {
            return Some(Invocation::Test);
        }
        match self.positionals.as_slice() {
            [title, message, product_url, ..] => Some(Invocation::Send {
                title: title.clone(),
                message: message.clone(),
                product_url: product_url.clone(),
            }),
            _ => None,
        }
    }
}
