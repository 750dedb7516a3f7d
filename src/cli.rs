use clap::Parser;

/// Transit TUI - a terminal-based transport roster
#[derive(Parser)]
#[command(name = "transit-tui")]
#[command(about = "Manage vehicles, drivers and passengers from the terminal")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging (debug level).
    ///
    /// Logs go to stderr so they never interleave with the interface.
    /// `RUST_LOG` still takes precedence when set.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_args() {
        let result = Cli::try_parse_from(["transit-tui"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["transit-tui", "--verbose"]).unwrap();
        assert!(cli.verbose);
        let cli = Cli::try_parse_from(["transit-tui", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["transit-tui", "--frobnicate"]).is_err());
    }
}
