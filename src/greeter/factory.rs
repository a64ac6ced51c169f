// グリーター作成ファクトリー

use serde::Serialize;
use std::sync::Arc;

use super::{EnglishGreeter, GreeterHandle, Language, SpanishGreeter};
use crate::error::GreeterResult;

/// セレクタ一覧の表示用情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorInfo {
    pub selector: &'static str,
    pub greeting: &'static str,
    pub description: &'static str,
}

impl From<Language> for SelectorInfo {
    fn from(language: Language) -> Self {
        Self {
            selector: language.selector(),
            greeting: language.greeting(),
            description: language.description(),
        }
    }
}

/// グリーターファクトリー
#[derive(Debug, Default)]
pub struct GreeterFactory;

impl GreeterFactory {
    pub fn new() -> Self {
        Self
    }

    /// セレクタからグリーターを作成
    ///
    /// セレクタは `"English"` と `"Spanish"` の完全一致のみ受け付ける。
    /// それ以外は `GreeterError::InvalidSelector` を返し、空のハンドルは返さない。
    pub fn create(&self, selector: &str) -> GreeterResult<GreeterHandle> {
        let language: Language = selector.parse().map_err(|error| {
            tracing::warn!(selector, "unknown greeter selector");
            error
        })?;

        tracing::debug!(%language, "creating greeter");
        Ok(Self::create_for(language))
    }

    /// 言語から直接グリーターを作成（失敗しない）
    pub fn create_for(language: Language) -> GreeterHandle {
        match language {
            Language::English => Arc::new(EnglishGreeter::new()),
            Language::Spanish => Arc::new(SpanishGreeter::new()),
        }
    }

    /// 利用可能なセレクタの一覧を取得
    pub fn available_selectors(&self) -> Vec<&'static str> {
        Language::ALL.iter().map(Language::selector).collect()
    }

    /// セレクタの説明を取得
    pub fn get_description(&self, selector: &str) -> Option<&'static str> {
        selector
            .parse::<Language>()
            .ok()
            .map(|language| language.description())
    }

    pub fn selector_infos(&self) -> Vec<SelectorInfo> {
        Language::ALL.into_iter().map(SelectorInfo::from).collect()
    }
}

/// グローバルファクトリーのシングルトン
static GLOBAL_FACTORY: std::sync::OnceLock<GreeterFactory> = std::sync::OnceLock::new();

/// グローバルグリーターファクトリーを取得
pub fn get_greeter_factory() -> &'static GreeterFactory {
    GLOBAL_FACTORY.get_or_init(GreeterFactory::new)
}

/// 便利関数：セレクタからグリーターを作成
pub fn create_greeter(selector: &str) -> GreeterResult<GreeterHandle> {
    get_greeter_factory().create(selector)
}
