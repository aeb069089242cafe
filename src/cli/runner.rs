use crate::{
    cli::{Cli, Commands, NewArgs, UiArgs},
    constants::{DEFAULT_GO_VERSION, VERSION},
    error::Result,
    generator::Generator,
    ioutils::get_output_dir,
    mode::{detect_mode, UiConfig},
    output::{for_mode, Output, Section, Table, Theme},
    template::{TemplateData, TemplateEngine},
    validation::{validate_go_version, validate_module_path, validate_project_name},
};
use chrono::Datelike;
use log::{debug, warn};
use std::io;

/// Main CLI runner that dispatches subcommands
pub struct Runner {
    cli: Cli,
}

impl Runner {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Executes the selected command, writing results to stdout
    pub fn run(self) -> Result<()> {
        let mut output = build_output(&self.cli.ui, io::stdout());
        match &self.cli.command {
            Commands::New(args) => run_new(args, output.as_mut()),
            Commands::Version => run_version(output.as_mut()),
        }
    }
}

/// Picks the output mode once and builds the matching output over `writer`.
pub fn build_output<'a, W: io::Write + 'a>(ui: &UiArgs, writer: W) -> Box<dyn Output + 'a> {
    let config = UiConfig::from_env(ui.json, ui.interactive, ui.no_color, ui.output_mode);
    let mode = detect_mode(&config);
    debug!("Using {mode} output");
    for_mode(mode, writer, Theme::new(config.color_enabled()))
}

/// Builds the template data for `args`, validating user input.
pub fn template_data(args: &NewArgs, year: i32) -> Result<TemplateData> {
    validate_project_name(&args.name)?;
    validate_module_path(args.module_name())?;
    validate_go_version(&args.go_version)?;
    Ok(TemplateData::new(&args.name, args.module_name(), args.db, &args.go_version, year))
}

/// Generates a new project as described by `args`.
pub fn run_new(args: &NewArgs, output: &mut dyn Output) -> Result<()> {
    let data = template_data(args, chrono::Local::now().year())?;
    let project_root = get_output_dir(args.project_root(), args.force)?;
    if project_root.exists() {
        warn!("Writing into existing directory {}", project_root.display());
    }

    let engine = TemplateEngine::new();
    Generator::new(&engine).generate(output, &data, &project_root)?;
    Ok(())
}

/// Reports version information.
pub fn run_version(output: &mut dyn Output) -> Result<()> {
    let template_count = TemplateEngine::new().template_names().len().to_string();
    output.title(&format!("gostarter {VERSION}"));
    output.table(
        Table::new(["Component", "Value"])
            .with_row(["gostarter", VERSION])
            .with_row(["default Go version", DEFAULT_GO_VERSION])
            .with_row(["bundled templates", template_count.as_str()]),
    );
    output.section(Section::new("Usage", "gostarter new <NAME> [--db postgres|mysql|sqlite]"));
    output.flush()
}

/// Main entry point for CLI execution
pub fn run(cli: Cli) -> Result<()> {
    Runner::new(cli).run()
}
