use crate::generators::{GenerateOptions, GroupNaming, Locale, ServiceConfig, ServiceWriteMode};
use crate::scaffold::DEFAULT_OUTPUT_ROOT;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "postman-bdd")]
#[command(version)]
#[command(
    about = "Scaffold BDD scenarios, step definitions and service stubs from a Postman collection",
    long_about = None
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Defaults to `generate` with an interactive prompt for the collection
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate feature, step and service files from a collection
    Generate(GenerateArgs),

    /// List the folders and requests of a collection
    List {
        /// Path to the Postman collection (.json)
        #[arg(short, long)]
        collection: PathBuf,

        /// How service groups are named
        #[arg(long, value_enum, default_value_t = GroupNaming::Endpoint)]
        group_by: GroupNaming,
    },
}

impl Commands {
    /// Prefix of the message printed when the command fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            Commands::Generate(_) => "Error during test generation",
            Commands::List { .. } => "Error while listing collection",
        }
    }
}

#[derive(Args, Clone)]
pub struct GenerateArgs {
    /// Path to the Postman collection (.json); prompted for if omitted
    #[arg(short, long)]
    pub collection: Option<PathBuf>,

    /// Root directory for specs/, steps/ and services/
    #[arg(short = 'O', long, default_value = DEFAULT_OUTPUT_ROOT)]
    pub output_dir: PathBuf,

    /// Language of the generated Gherkin
    #[arg(long, value_enum, default_value_t = Locale::Pt)]
    pub locale: Locale,

    /// How service groups are named
    #[arg(long, value_enum, default_value_t = GroupNaming::Endpoint)]
    pub group_by: GroupNaming,

    /// How service files are written
    #[arg(long, value_enum, default_value_t = ServiceWriteMode::Render)]
    pub service_mode: ServiceWriteMode,

    /// Default base URL of the generated service classes
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path appended to the base URL by generated service methods
    #[arg(long)]
    pub path_suffix: Option<String>,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            collection: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            locale: Locale::default(),
            group_by: GroupNaming::default(),
            service_mode: ServiceWriteMode::default(),
            base_url: None,
            path_suffix: None,
        }
    }
}

impl GenerateArgs {
    pub fn options(&self) -> GenerateOptions {
        let defaults = ServiceConfig::default();
        GenerateOptions {
            locale: self.locale,
            group_naming: self.group_by,
            service_mode: self.service_mode,
            service: ServiceConfig {
                base_url: self.base_url.clone().unwrap_or(defaults.base_url),
                path_suffix: self.path_suffix.clone().unwrap_or(defaults.path_suffix),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_prompt() {
        let cli = Cli::try_parse_from(["postman-bdd"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_generate_flags_map_to_options() {
        let cli = Cli::try_parse_from([
            "postman-bdd",
            "-vv",
            "generate",
            "--collection",
            "petstore.json",
            "--locale",
            "en",
            "--group-by",
            "folder",
            "--service-mode",
            "append",
            "--base-url",
            "https://qa.example.com",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Some(Commands::Generate(args)) = cli.command else {
            panic!("expected generate subcommand");
        };

        assert_eq!(args.collection, Some(PathBuf::from("petstore.json")));
        assert_eq!(args.output_dir, PathBuf::from("test/features"));

        let options = args.options();
        assert_eq!(options.locale, Locale::En);
        assert_eq!(options.group_naming, GroupNaming::Folder);
        assert_eq!(options.service_mode, ServiceWriteMode::Append);
        assert_eq!(options.service.base_url, "https://qa.example.com");
        assert_eq!(options.service.path_suffix, "/2020");
    }

    #[test]
    fn test_rejects_unknown_locale() {
        let result = Cli::try_parse_from(["postman-bdd", "generate", "--locale", "fr"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_failure_message_names_the_command() {
        let list = Cli::try_parse_from(["postman-bdd", "list", "-c", "x.json"]).unwrap();
        assert_eq!(
            list.command.unwrap().failure_message(),
            "Error while listing collection"
        );

        let generate = Cli::try_parse_from(["postman-bdd", "generate"]).unwrap();
        assert_eq!(
            generate.command.unwrap().failure_message(),
            "Error during test generation"
        );
    }
}
