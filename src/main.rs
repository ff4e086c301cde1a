use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod cli_commands;

/// Read and write geometries in WKT
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Input {
    /// WKT text of the geometry
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    wkt: Option<String>,

    /// Read the WKT text from this file instead
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a geometry and show some details about it
    Show {
        #[command(flatten)]
        input: Input,
    },
    /// Parse a geometry and write it back in canonical form
    Normalize {
        #[command(flatten)]
        input: Input,

        /// Save the result to this file instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Show { input } => cli_commands::read_input(input.wkt, input.file.as_deref())
            .and_then(cli_commands::parse_show_detail),
        Command::Normalize { input, output } => {
            cli_commands::read_input(input.wkt, input.file.as_deref())
                .and_then(|txt| cli_commands::normalize(txt, output.as_deref()))
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
