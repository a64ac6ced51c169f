pub mod cli;
pub mod error;
pub mod greeter;
pub mod logging;

pub use error::{GreeterError, GreeterResult};
pub use greeter::{
    create_greeter, get_greeter_factory, greeting_line, write_greeting, EnglishGreeter, Greeter,
    GreeterFactory, GreeterHandle, Language, SelectorInfo, SpanishGreeter,
};
