#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Skips the start-up banner.
    pub no_banner: bool,
    /// Quiet level.
    ///
    /// `1` hides the banner and section headers, `2` also hides the menu listings
    /// so only prompts and results are printed.
    pub quiet: u8,
    /// Disables ANSI colours in every printed line.
    pub no_color: bool,
}
