use anyhow::Result;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// 検証に失敗したファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyFailure {
    Missing { path: PathBuf },
    Unreadable { path: PathBuf, reason: String },
    Mismatch { path: PathBuf, actual: String },
}

impl fmt::Display for VerifyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { path } => write!(f, "file {} does not exist", path.display()),
            Self::Unreadable { path, reason } => {
                write!(f, "cannot read {}: {reason}", path.display())
            }
            Self::Mismatch { path, actual } => write!(
                f,
                "contents of {} do not match expected text (got {actual:?})",
                path.display()
            ),
        }
    }
}

/// ファイルの存在と内容を検証し、失敗したものを返す
///
/// 存在チェックを先に全ファイル分行い、その後に内容チェックを行う。
/// 空の `equals` は内容チェックなしとして扱う。存在しないと報告済みのファイルは内容チェックしない。
pub fn verify_files(files: &[PathBuf], exists: bool, equals: Option<&str>) -> Vec<VerifyFailure> {
    let mut failures = Vec::new();
    let mut missing = Vec::new();

    if exists {
        missing.extend(files.iter().filter(|path| !path.exists()));
        failures.extend(
            missing
                .iter()
                .map(|path| VerifyFailure::Missing { path: path.to_path_buf() }),
        );
    }

    if let Some(expected) = equals.filter(|text| !text.is_empty()) {
        failures.extend(
            files
                .iter()
                .filter(|path| !missing.contains(path))
                .filter_map(|path| check_contents(path, expected)),
        );
    }

    failures
}

fn check_contents(path: &Path, expected: &str) -> Option<VerifyFailure> {
    match fs::read_to_string(path) {
        Ok(actual) if actual == expected => None,
        Ok(actual) => Some(VerifyFailure::Mismatch {
            path: path.to_path_buf(),
            actual,
        }),
        Err(error) => Some(VerifyFailure::Unreadable {
            path: path.to_path_buf(),
            reason: error.to_string(),
        }),
    }
}

/// Verify generated files; returns `false` if any check failed
pub fn execute_verify(files: &[PathBuf], exists: bool, equals: Option<&str>) -> Result<bool> {
    if !exists && equals.map_or(true, str::is_empty) {
        tracing::warn!("verify called without --exists or --equals; nothing to check");
    }

    let failures = verify_files(files, exists, equals);
    for failure in &failures {
        eprintln!("Error: {failure}");
    }

    tracing::debug!(checked = files.len(), failed = failures.len(), "verification finished");
    Ok(failures.is_empty())
}
