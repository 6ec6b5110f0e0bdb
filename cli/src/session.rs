use std::io::BufRead;

use handset_common::config::Config;
use handset_common::{failure, notice};
use handset_core::inventory::Inventory;

use crate::commands::{add, behavior, delete, find, list};
use crate::menu::{self, MainMenu};
use crate::terminal::prompt::{Prompt, is_unreadable_line};

/// The interactive read-eval loop over one inventory.
///
/// Errors of a single command are reported and the loop carries on; the loop ends
/// on the exit item or when the input is closed.
pub struct Session<'a, R> {
    inventory: Inventory,
    prompt: Prompt<R>,
    cfg: &'a Config,
}

impl<'a, R: BufRead> Session<'a, R> {
    pub fn new(prompt: Prompt<R>, cfg: &'a Config) -> Self {
        Self {
            inventory: Inventory::new(),
            prompt,
            cfg,
        }
    }

    #[cfg(test)]
    pub(crate) fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            menu::show::<MainMenu>("main menu", self.cfg);
            let line: String = match self.prompt.ask("Your choice") {
                Ok(Some(line)) => line,
                Ok(None) => return Ok(()),
                Err(err) if is_unreadable_line(&err) => {
                    notice!("{err:#}");
                    continue;
                }
                Err(err) => return Err(err),
            };

            let choice: MainMenu = match line.parse() {
                Ok(choice) => choice,
                Err(e) => {
                    notice!("{e}");
                    continue;
                }
            };

            if choice == MainMenu::Exit {
                return Ok(());
            }

            if let Err(err) = self.dispatch(choice) {
                failure!("{err:#}");
            }
        }
    }

    fn dispatch(&mut self, choice: MainMenu) -> anyhow::Result<()> {
        match choice {
            MainMenu::AddPhone => add::add(&mut self.inventory, &mut self.prompt),
            MainMenu::ListPhones => {
                list::list(&self.inventory, self.cfg);
                Ok(())
            }
            MainMenu::FindPhones => find::find(&self.inventory, &mut self.prompt, self.cfg),
            MainMenu::Behavior => behavior::behavior(&mut self.inventory, &mut self.prompt, self.cfg),
            MainMenu::DeletePhone => delete::delete(&mut self.inventory, &mut self.prompt),
            MainMenu::Exit => Ok(()),
        }
    }
}
