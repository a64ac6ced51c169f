use super::{Greeter, Language};

/// 英語のグリーター
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishGreeter;

impl EnglishGreeter {
    pub const MESSAGE: &'static str = "Hello World!";

    pub fn new() -> Self {
        Self
    }
}

impl Greeter for EnglishGreeter {
    fn language(&self) -> Language {
        Language::English
    }

    fn message(&self) -> &'static str {
        Self::MESSAGE
    }
}
