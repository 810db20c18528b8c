use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "flex-reviews moderation backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the review API server
    Serve {
        /// Port number (optional, defaults to 3001)
        #[arg(short, long, default_value_t = 3001)]
        port: u16,
    },
}
