use crate::pass::DEFAULT_LENGTH;
use crate::pass::charset::Classes;

/// Parsed command-line state. Defaults mirror the generator's: lower,
/// upper, and number classes on, symbols off, 22 characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliFlags {
    pub classes: Classes,
    pub length: usize,
    pub help: bool,
}

impl Default for CliFlags {
    fn default() -> Self {
        CliFlags {
            classes: Classes::default(),
            length: DEFAULT_LENGTH,
            help: false,
        }
    }
}
