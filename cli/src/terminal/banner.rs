use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
           _                     _          _
          | |__   __ _ _ __   __| |___  ___| |_
          | '_ \ / _` | '_ \ / _` / __|/ _ \ __|
          | | | | (_| | | | | (_| \__ \  __/ |_
          |_| |_|\__,_|_| |_|\__,_|___/\___|\__|
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green().bold()));
}
