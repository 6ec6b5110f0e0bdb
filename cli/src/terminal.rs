pub mod banner;
#[cfg(test)]
pub mod capture;
pub mod colors;
pub mod format;
pub mod logging;
pub mod print;
pub mod prompt;
