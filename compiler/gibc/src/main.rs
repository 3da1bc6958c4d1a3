//! Gibbous front-end CLI.

use clap::{Parser, Subcommand};
use gibc::commands::{lex_file, OutputFormat};
use gibc::tracing_setup::init_tracing;

#[derive(Parser)]
#[command(name = "gib", version, about = "Gibbous language front end")]
struct Cli {
    /// Log filter, e.g. `debug` or `gib_lexer=trace` (overrides GIB_LOG and RUST_LOG)
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Tokenize a file and display the tokens
    Lex {
        /// Source file, or `-` for standard input
        file: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match cli.command {
        Command::Lex { file, format } => match lex_file(&file, format) {
            Ok(out) => print!("{out}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        },
    }
}
