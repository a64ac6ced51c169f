use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "greeter_factory")]
#[command(about = "Print a language-specific greeting chosen by selector")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a greeter and print its greeting
    Greet {
        /// Greeter selector (English or Spanish, case-sensitive)
        selector: String,

        /// Number of times to print the greeting
        #[arg(short = 'n', long, default_value = "1")]
        repeat: usize,

        /// Write the greeting to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List available selectors
    List {
        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Check generated files for existence and/or exact contents
    Verify {
        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Fail if any file does not exist
        #[arg(long)]
        exists: bool,

        /// Fail if any file's contents differ from this text
        #[arg(long)]
        equals: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_greet_defaults() {
        let cli = Cli::try_parse_from(["greeter_factory", "greet", "English"]).unwrap();

        assert!(!cli.verbose);
        match cli.command {
            Commands::Greet {
                selector,
                repeat,
                output,
            } => {
                assert_eq!(selector, "English");
                assert_eq!(repeat, 1);
                assert!(output.is_none());
            }
            _ => panic!("expected greet command"),
        }
    }

    #[test]
    fn test_parse_verify_flags() {
        let cli = Cli::try_parse_from([
            "greeter_factory",
            "-v",
            "verify",
            "a.txt",
            "b.txt",
            "--exists",
            "--equals",
            "Hello World!\n",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Verify {
                files,
                exists,
                equals,
            } => {
                assert_eq!(files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
                assert!(exists);
                assert_eq!(equals.as_deref(), Some("Hello World!\n"));
            }
            _ => panic!("expected verify command"),
        }
    }

    #[test]
    fn test_verify_requires_files() {
        assert!(Cli::try_parse_from(["greeter_factory", "verify", "--exists"]).is_err());
    }
}
