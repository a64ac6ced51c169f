use mockall::automock;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{GreeterError, GreeterResult};

pub mod english;
pub mod factory;
pub mod spanish;

pub use english::EnglishGreeter;
pub use factory::{create_greeter, get_greeter_factory, GreeterFactory, SelectorInfo};
pub use spanish::SpanishGreeter;

/// グリーターの言語（バリアントの識別子）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    /// 登録されている全言語
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    /// ファクトリーに渡すセレクタ文字列
    pub const fn selector(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
        }
    }

    /// 固定の挨拶文（改行なし）
    pub const fn greeting(&self) -> &'static str {
        match self {
            Self::English => EnglishGreeter::MESSAGE,
            Self::Spanish => SpanishGreeter::MESSAGE,
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::English => "英語の挨拶",
            Self::Spanish => "スペイン語の挨拶",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for Language {
    type Err = GreeterError;

    /// 完全一致のみ（大文字小文字を区別、トリムなし）
    fn from_str(selector: &str) -> GreeterResult<Self> {
        Self::ALL
            .into_iter()
            .find(|language| language.selector() == selector)
            .ok_or_else(|| GreeterError::invalid_selector(selector))
    }
}

/// 挨拶を出力するトレイト
#[automock]
pub trait Greeter: Send + Sync {
    /// このグリーターの言語
    fn language(&self) -> Language;

    /// 固定の挨拶文（改行なし）
    fn message(&self) -> &'static str;

    /// 挨拶を1行、標準出力に書き込む
    fn greet(&self) {
        print!("{}", greeting_line(self.message()));
    }
}

/// ファクトリーが返す共有ハンドル
pub type GreeterHandle = Arc<dyn Greeter>;

/// 挨拶文を改行付きの1行にする
pub fn greeting_line(message: &str) -> String {
    format!("{message}\n")
}

/// 任意の出力先に挨拶を1行書き込む
pub fn write_greeting(greeter: &dyn Greeter, out: &mut dyn Write) -> io::Result<()> {
    out.write_all(greeting_line(greeter.message()).as_bytes())
}
