use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::greeter::{create_greeter, write_greeting, Greeter};

/// 挨拶を `repeat` 回書き込む
pub fn write_repeated(greeter: &dyn Greeter, repeat: usize, out: &mut dyn Write) -> io::Result<()> {
    for _ in 0..repeat {
        write_greeting(greeter, out)?;
    }
    out.flush()
}

/// `Greeter::greet` を `repeat` 回呼び出す（標準出力）
pub fn greet_repeated(greeter: &dyn Greeter, repeat: usize) {
    for _ in 0..repeat {
        greeter.greet();
    }
}

/// Create a greeter by selector and print its greeting
pub fn execute_greet(selector: &str, repeat: usize, output: Option<PathBuf>) -> Result<()> {
    if repeat == 0 {
        anyhow::bail!("--repeat must be at least 1");
    }

    let greeter = create_greeter(selector).map_err(|error| match error.suggestion() {
        Some(candidate) => anyhow::anyhow!("{error} (もしかして: {candidate})"),
        None => anyhow::Error::new(error),
    })?;

    tracing::info!(language = %greeter.language(), repeat, "greeting");

    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("出力ファイルを作成できません: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_repeated(greeter.as_ref(), repeat, &mut writer)
                .with_context(|| format!("出力ファイルへの書き込みに失敗: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "greeting written to file");
        }
        None => {
            greet_repeated(greeter.as_ref(), repeat);
            io::stdout().flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greeter::MockGreeter;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_repeated_calls_message_each_time() {
        let mut mock_greeter = MockGreeter::new();
        mock_greeter
            .expect_message()
            .times(3)
            .return_const("Hello World!");

        let mut buffer = Vec::new();
        write_repeated(&mock_greeter, 3, &mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Hello World!\nHello World!\nHello World!\n"
        );
    }

    #[test]
    fn test_greet_repeated_calls_greet_each_time() {
        let mut mock_greeter = MockGreeter::new();
        mock_greeter.expect_greet().times(3).return_const(());
        mock_greeter.expect_message().never();

        greet_repeated(&mock_greeter, 3);
    }

    #[test]
    fn test_execute_greet_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("greeting.txt");

        execute_greet("Spanish", 2, Some(output.clone())).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "Hola Mundo!\nHola Mundo!\n");
    }

    #[test]
    fn test_execute_greet_invalid_selector() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("greeting.txt");

        let error = execute_greet("German", 1, Some(output.clone())).unwrap_err();

        assert!(error.to_string().contains("無効なセレクタ"));
        assert!(!output.exists());
    }

    #[test]
    fn test_execute_greet_suggests_canonical_selector() {
        let error = execute_greet("english", 1, None).unwrap_err();
        assert!(error.to_string().contains("もしかして: English"));
    }

    #[test]
    fn test_execute_greet_rejects_zero_repeat() {
        assert!(execute_greet("English", 0, None).is_err());
    }
}
