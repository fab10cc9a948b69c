//! Command-line options.

use salad_diagnostic::FormatOptions;

/// Options accepted by `salad-lines`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// `--width=<n>`; falls back to `COLUMNS` when absent.
    pub width: Option<usize>,
    /// `-h` / `--help`.
    pub help: bool,
}

impl CliConfig {
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions { width: self.width }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    #[error("invalid width '{0}': expected a positive integer")]
    InvalidWidth(String),
    #[error("unexpected argument '{0}'")]
    Unexpected(String),
}

/// Parse arguments, program name excluded.
pub fn parse_args<I, S>(args: I) -> Result<CliConfig, ArgError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut config = CliConfig::default();
    for arg in args {
        let arg = arg.as_ref();
        if let Some(width) = arg.strip_prefix("--width=") {
            let width = width
                .parse()
                .ok()
                .filter(|&w: &usize| w > 0)
                .ok_or_else(|| ArgError::InvalidWidth(width.to_owned()))?;
            config.width = Some(width);
        } else if arg == "-h" || arg == "--help" {
            config.help = true;
        } else {
            return Err(ArgError::Unexpected(arg.to_owned()));
        }
    }
    Ok(config)
}
