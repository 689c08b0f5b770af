use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Seasonal revenue chart generator")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn command(self) -> Command {
        self.command.unwrap_or_default()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Synthesize the revenue dataset and render the annotated chart
    Render,
}

impl Default for Command {
    fn default() -> Self {
        Command::Render
    }
}
