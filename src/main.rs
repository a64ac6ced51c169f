use clap::Parser;
use std::io;

use greeter_factory::cli::{execute_greet, execute_list, execute_verify, Cli, Commands};
use greeter_factory::logging;

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let result = match cli.command {
        Commands::Greet {
            selector,
            repeat,
            output,
        } => execute_greet(&selector, repeat, output).map(|()| true),
        Commands::List { json } => execute_list(json, &mut io::stdout().lock()).map(|()| true),
        Commands::Verify {
            files,
            exists,
            equals,
        } => execute_verify(&files, exists, equals.as_deref()),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("❌ エラー: {error:#}");
            std::process::exit(1);
        }
    }
}
