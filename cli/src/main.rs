mod commands;
mod menu;
mod session;
mod terminal;

use std::io;

use commands::CommandLine;
use handset_common::config::Config;
use session::Session;
use terminal::{logging, print, prompt::Prompt};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.to_config();

    logging::init_logging()?;
    print::initialize(&cfg);
    print::banner(cfg.no_banner, cfg.quiet);

    let mut session = Session::new(Prompt::new(io::stdin().lock()), &cfg);
    session.run()?;

    print::end_of_program();
    Ok(())
}
