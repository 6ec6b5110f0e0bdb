pub mod add;
pub mod behavior;
pub mod delete;
pub mod find;
pub mod list;

use clap::{ArgAction, Parser};
use handset_common::config::Config;

#[derive(Parser)]
#[command(name = "handset")]
#[command(about = "An interactive smartphone inventory.")]
#[command(version)]
pub struct CommandLine {
    /// Do not print the start-up banner
    #[arg(long)]
    pub no_banner: bool,
    /// Print less: -q hides headers, -qq also hides menu listings
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            no_color: self.no_color,
        }
    }
}
