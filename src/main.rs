// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use fichatecnica::app_config::{self, Config};
use fichatecnica::frontend::{ArgsForm, Frontend, PromptForm};
use fichatecnica::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the PDF and TXT files from a record file and/or field assignments (default command)
    Generate(GenerateArgs),

    /// Fill in the form interactively, one prompt per field (a lone "-" clears a field)
    Fill,

    /// Validate a record without generating files
    Validate(RecordArgs),

    /// Generate shell completions for fichatecnica
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args, Debug, Clone)]
struct CommonArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,

    /// Output directory (overrides the configuration)
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// Open the generated files with the system viewer
    #[arg(long, global = true)]
    open: bool,
}

#[derive(clap::Args, Debug, Clone)]
struct RecordArgs {
    /// JSON file mapping field names to values
    #[arg(short, long, value_name = "FILE")]
    record: Option<PathBuf>,

    /// Field assignment, e.g. --set "Nome do ficheiro=Livro Teste" (repeatable)
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE")]
    assignments: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
struct GenerateArgs {
    #[command(flatten)]
    record: RecordArgs,
}

/// Ficha Técnica - editorial technical sheet generator
///
/// Collects the editorial metadata of a book project, validates it and writes
/// a PDF and a plain-text ficha técnica for the print shop.
#[derive(Parser, Debug)]
#[command(name = "fichatecnica")]
#[command(version)]
#[command(about = "Editorial technical sheet (ficha técnica) generator")]
#[command(long_about = "fichatecnica writes a PDF and a TXT technical sheet for the print shop.

EXAMPLES:
    fichatecnica --record livro.json                          # Generate from a JSON record
    fichatecnica -s \"Nome do ficheiro=Livro Teste\" -s \"Email=a@b.com\" -s \"Telefone=912345678\"
    fichatecnica fill                                          # Interactive form
    fichatecnica validate --record livro.json                  # Check a record only
    fichatecnica --open --record livro.json                    # Open the files afterwards
    fichatecnica completions bash > fichatecnica.bash          # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.

OUTPUT:
    FichasTecnicas/Ficha_Técnica_<Nome_do_ficheiro>.pdf
    FichasTecnicas/Ficha_Técnica_<Nome_do_ficheiro>.txt")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    record: RecordArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // Initialize the logger once with trace as the ceiling; the effective
    // level is applied with set_max_level after the config is loaded
    if let Err(e) = CustomLogger::init(LevelFilter::Trace) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    log::set_max_level(LevelFilter::Info);

    match run(CommandLineOptions::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the command succeeded
fn run(cli: CommandLineOptions) -> Result<bool> {
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "fichatecnica", &mut std::io::stdout());
            Ok(true)
        }
        Some(Commands::Generate(args)) => {
            let controller = build_controller(&cli.common)?;
            let mut form = ArgsForm::new(args.record.record, args.record.assignments);
            run_frontend(&controller, &mut form)
        }
        Some(Commands::Fill) => {
            let controller = build_controller(&cli.common)?;
            let stdin = std::io::stdin();
            let mut form = PromptForm::new(stdin.lock(), std::io::stdout());
            run_frontend(&controller, &mut form)
        }
        Some(Commands::Validate(args)) => {
            let controller = build_controller(&cli.common)?;
            let mut form = ArgsForm::new(args.record, args.assignments);
            let record = form.collect(controller.fields())?;
            match controller.validate(&record) {
                Ok(()) => {
                    info!("Record is valid");
                    Ok(true)
                }
                Err(reason) => {
                    warn!("{}", reason);
                    Ok(false)
                }
            }
        }
        None => {
            // Default behavior - generate from the top-level record arguments
            if cli.record.record.is_none() && cli.record.assignments.is_empty() {
                return Err(anyhow!(
                    "Nothing to generate: pass --record or --set, or use the 'fill' command"
                ));
            }
            let controller = build_controller(&cli.common)?;
            let mut form = ArgsForm::new(cli.record.record, cli.record.assignments);
            run_frontend(&controller, &mut form)
        }
    }
}

fn run_frontend(controller: &Controller, frontend: &mut dyn Frontend) -> Result<bool> {
    let submission = controller.run(frontend)?;
    Ok(submission.is_exported())
}

fn build_controller(options: &CommonArgs) -> Result<Controller> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
    if let Some(output_dir) = &options.output_dir {
        config.output_dir = output_dir.clone();
    }
    if options.open {
        config.open_after_export = true;
    }

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    Controller::with_config(config)
}
