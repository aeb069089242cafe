use crate::{
    constants::{exit_codes, verbosity, DEFAULT_GO_VERSION},
    mode::Mode,
    template::DbDriver,
};
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Go project scaffolding tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub ui: UiArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new Go project.
    New(NewArgs),
    /// Show version information.
    Version,
}

/// Flags that control how results are presented.
#[derive(Args, Debug, Clone, Default)]
pub struct UiArgs {
    /// Emit a single JSON document instead of console text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Force interactive output, even outside a terminal.
    #[arg(long, global = true)]
    pub interactive: bool,

    /// Pin the output mode.
    #[arg(long = "output-mode", value_enum, default_value_t = Mode::Auto, global = true)]
    pub output_mode: Mode,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Arguments of `new`.
#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Project name; also the name of the created directory.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Go module path. Defaults to the project name.
    #[arg(short, long = "module", value_name = "PATH")]
    pub module: Option<String>,

    /// Database driver the project is wired for.
    #[arg(long = "db", value_enum, default_value_t = DbDriver::Postgres)]
    pub db: DbDriver,

    /// Go version written to go.mod.
    #[arg(long = "go-version", default_value = DEFAULT_GO_VERSION)]
    pub go_version: String,

    /// Directory in which the project directory is created.
    #[arg(short, long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Write into the project directory even if it already exists.
    #[arg(short, long)]
    pub force: bool,
}

impl NewArgs {
    pub fn module_name(&self) -> &str {
        self.module.as_deref().unwrap_or(&self.name)
    }

    pub fn project_root(&self) -> PathBuf {
        self.output_dir.join(&self.name)
    }
}

/// Parse command line arguments, printing help when required input is missing.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument
            || e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_new() {
        let cli = Cli::parse_from(["gostarter", "new", "shop"]);
        let Commands::New(args) = cli.command else {
            panic!("expected new command");
        };
        assert_eq!(args.name, "shop");
        assert_eq!(args.module_name(), "shop");
        assert_eq!(args.db, DbDriver::Postgres);
        assert_eq!(args.go_version, DEFAULT_GO_VERSION);
        assert_eq!(args.project_root(), PathBuf::from(".").join("shop"));
        assert!(!args.force);
        assert_eq!(cli.ui.output_mode, Mode::Auto);
    }

    #[test]
    fn parses_full_feature_flags() {
        let cli = Cli::parse_from([
            "gostarter",
            "new",
            "shop",
            "--module",
            "github.com/acme/shop",
            "--db",
            "sqlite",
            "--go-version",
            "1.23",
            "--output-dir",
            "out",
            "--force",
            "--json",
            "--no-color",
            "--interactive",
            "--output-mode",
            "tui",
            "-vv",
        ]);
        assert!(cli.ui.json);
        assert!(cli.ui.no_color);
        assert!(cli.ui.interactive);
        assert_eq!(cli.ui.output_mode, Mode::Tui);
        assert_eq!(cli.ui.verbose, 2);
        let Commands::New(args) = cli.command else {
            panic!("expected new command");
        };
        assert_eq!(args.module_name(), "github.com/acme/shop");
        assert_eq!(args.db, DbDriver::Sqlite);
        assert_eq!(args.go_version, "1.23");
        assert_eq!(args.project_root(), PathBuf::from("out").join("shop"));
        assert!(args.force);
    }

    #[test]
    fn global_flags_work_before_subcommand() {
        let cli = Cli::parse_from(["gostarter", "--json", "version"]);
        assert!(cli.ui.json);
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn rejects_unknown_driver() {
        let result = Cli::try_parse_from(["gostarter", "new", "shop", "--db", "oracle"]);
        assert!(result.is_err());
    }

    #[test]
    fn verifies_command_definition() {
        Cli::command().debug_assert();
    }
}
