use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "summoner potential analyzer")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Analyze one player and print the result
    Analyze {
        /// Riot ID (`name#tag`) or a legacy summoner name
        summoner_input: String,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        let cli = Cli::parse_from(["summoner_potential", "serve"]);
        assert_eq!(cli.command, Command::Serve { port: 3000 });

        let cli = Cli::parse_from(["summoner_potential", "analyze", "Faker#KR1", "--json"]);
        assert_eq!(
            cli.command,
            Command::Analyze {
                summoner_input: "Faker#KR1".to_string(),
                json: true
            }
        );
    }
}
