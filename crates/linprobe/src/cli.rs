//! Clap CLI definitions for the `linprobe` command.

use clap::Parser;

use linprobe_config::Overrides;

/// linprobe -- end-to-end check of the Linear GraphQL API.
#[derive(Parser, Debug)]
#[command(
    name = "linprobe",
    about = "Exercise the Linear GraphQL API end to end",
    long_about = "Resolves a team, lists its workflow states, probes issue search, then creates, \
                  updates, comments on and deletes a throwaway test issue.\n\n\
                  Requires LINEAR_API_KEY and LINEAR_TEAM_ID in the environment.",
    version
)]
pub struct Cli {
    /// Enable verbose/debug output.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Seconds to wait between creating and updating the test issue.
    #[arg(long, value_name = "SECS")]
    pub update_delay: Option<u64>,

    /// Seconds to wait before deleting the test issue (Ctrl+C keeps it).
    #[arg(long, value_name = "SECS")]
    pub delete_delay: Option<u64>,

    /// Leave the test issue in place instead of deleting it.
    #[arg(long)]
    pub keep_issue: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// The configuration layer contributed by command-line flags.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            update_delay_secs: self.update_delay,
            delete_delay_secs: self.delete_delay,
            keep_issue: self.keep_issue.then_some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_become_overrides() {
        let cli = Cli::parse_from(["linprobe", "--delete-delay", "0", "--keep-issue"]);
        let o = cli.overrides();
        assert_eq!(o.delete_delay_secs, Some(0));
        assert_eq!(o.update_delay_secs, None);
        assert_eq!(o.keep_issue, Some(true));
    }

    #[test]
    fn absent_keep_flag_does_not_override() {
        let cli = Cli::parse_from(["linprobe", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.overrides().keep_issue, None);
    }
}
