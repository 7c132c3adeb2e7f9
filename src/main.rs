use clap::Parser;
use colored::Colorize;
use postman_bdd::{
    Result,
    cli::{Cli, Commands, GenerateArgs},
    commands::{self, GenerateCommandArgs},
    generators::GenerateOptions,
    telemetry,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Generate(GenerateArgs::default()));
    let failure = command.failure_message();

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Run aborted");
            println!("\n{} {}: {}", "✗".red(), failure, e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Generate(args) => {
            commands::execute_generate(GenerateCommandArgs {
                collection_path: args.collection.as_deref(),
                output_root: &args.output_dir,
                options: args.options(),
            })?;
        }
        Commands::List {
            collection,
            group_by,
        } => {
            let options = GenerateOptions {
                group_naming: group_by,
                ..Default::default()
            };
            commands::execute_list(&collection, &options)?;
        }
    }

    Ok(())
}
