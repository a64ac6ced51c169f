// グリーター生成のエラー型定義

use thiserror::Error;

use crate::greeter::Language;

/// グリーター生成時のエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GreeterError {
    #[error("無効なセレクタ: '{selector}' (利用可能: English, Spanish)")]
    InvalidSelector { selector: String },
}

impl GreeterError {
    /// 無効セレクタエラーの作成
    pub fn invalid_selector(selector: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
        }
    }

    /// 拒否されたセレクタ文字列を取得
    pub fn selector(&self) -> &str {
        match self {
            Self::InvalidSelector { selector } => selector,
        }
    }

    /// 大文字小文字や前後の空白だけが違う場合、正しいセレクタを提案する
    ///
    /// マッチング自体は完全一致のままで、これはヒント表示専用。
    pub fn suggestion(&self) -> Option<&'static str> {
        let trimmed = self.selector().trim();
        Language::ALL
            .iter()
            .map(|language| language.selector())
            .find(|candidate| candidate.eq_ignore_ascii_case(trimmed))
    }
}

/// グリーター操作の結果型
pub type GreeterResult<T> = std::result::Result<T, GreeterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selector_display() {
        let error = GreeterError::invalid_selector("French");
        let message = error.to_string();

        assert!(message.contains("無効なセレクタ"));
        assert!(message.contains("'French'"));
        assert!(message.contains("English"));
        assert!(message.contains("Spanish"));
    }

    #[test]
    fn test_selector_accessor() {
        let error = GreeterError::invalid_selector("");
        assert_eq!(error.selector(), "");
    }

    #[test]
    fn test_suggestion_for_case_variants() {
        assert_eq!(
            GreeterError::invalid_selector("english").suggestion(),
            Some("English")
        );
        assert_eq!(
            GreeterError::invalid_selector(" SPANISH ").suggestion(),
            Some("Spanish")
        );
    }

    #[test]
    fn test_no_suggestion_for_unrelated_input() {
        assert_eq!(GreeterError::invalid_selector("French").suggestion(), None);
        assert_eq!(GreeterError::invalid_selector("").suggestion(), None);
    }
}
