//! Command line parsing
//!
//! The only accepted option is `-p <port>` / `--port <port>`. Anything else is an error
//! and the caller is expected to exit with status 1 before binding a listener.

use std::ffi::OsString;

/// Parsed command line arguments
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Listen port override, `None` keeps the configured default
    pub port: Option<u16>,
}

impl CliArgs {
    /// Parse an explicit argument list, without the program name.
    pub fn parse_from<I>(args: I) -> Result<Self, lexopt::Error>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        use lexopt::prelude::*;

        let mut parser = lexopt::Parser::from_args(args);
        let mut parsed = Self::default();

        while let Some(arg) = parser.next()? {
            match arg {
                Short('p') | Long("port") => {
                    parsed.port = Some(parser.value()?.parse()?);
                }
                _ => return Err(arg.unexpected()),
            }
        }

        Ok(parsed)
    }
}
