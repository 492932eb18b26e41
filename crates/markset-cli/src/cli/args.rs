use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "markset",
    version,
    about = "Test-marker registry for the mobile suite — list and inspect the markers tests are tagged with"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every registered marker
    List(ListArgs),
    /// Show one marker by its registry name
    Show(ShowArgs),
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Emit JSON instead of the plain listing
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Registry name of the marker (e.g. "wallet")
    pub name: String,

    /// Emit JSON instead of the plain listing
    #[arg(long)]
    pub json: bool,
}
