use super::{Greeter, Language};

/// スペイン語のグリーター
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanishGreeter;

impl SpanishGreeter {
    pub const MESSAGE: &'static str = "Hola Mundo!";

    pub fn new() -> Self {
        Self
    }
}

impl Greeter for SpanishGreeter {
    fn language(&self) -> Language {
        Language::Spanish
    }

    fn message(&self) -> &'static str {
        Self::MESSAGE
    }
}
