//! botgen-java - Project scaffolding for Bot Builder Java bots

use anyhow::Result;
use botgen_core::tui::CreateArgs;
use botgen_core::{AnswerSet, GenerationReport, GeneratorConfig, TemplateFetcher};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bot Builder Java generator configuration
#[derive(Clone)]
pub struct BotgenJavaConfig;

impl GeneratorConfig for BotgenJavaConfig {
    fn display_name(&self) -> &'static str {
        "Bot Builder Java"
    }

    fn template_dir_env(&self) -> &'static str {
        "BOTGEN_TEMPLATE_DIR"
    }

    fn docs_url(&self) -> &'static str {
        "https://aka.ms/bot-framework-java"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install botgen-java --force"
    }

    fn next_steps(&self, report: &GenerationReport, _answers: &AnswerSet) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(report.root.as_path()) {
            steps.push(format!("cd {}", report.root.display()));
        }

        steps.push("mvn package".to_string());
        steps.push("java -jar target/*.jar".to_string());
        steps.push("Connect Bot Framework Emulator to http://localhost:3978/api/messages".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "botgen-java")]
#[command(about = "CLI for scaffolding Bot Builder Java bots")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new bot project
    Create(CliCreateArgs),
    /// List the available templates
    List(ListArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Local directory to use for templates instead of the bundled ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Name of the bot
    #[arg(long = "bot-name")]
    pub bot_name: Option<String>,

    /// Fully qualified package name (e.g. com.example.bot)
    #[arg(long = "package-name")]
    pub package_name: Option<String>,

    /// Template name to use
    #[arg(short, long)]
    pub template: Option<String>,

    /// Directory to generate into (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Skip the Java/Maven availability check
    #[arg(long = "skip-runtime-check")]
    pub skip_runtime_check: bool,

    /// Accept defaults for every answer not given as a flag (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            template_dir: args.template_dir,
            bot_name: args.bot_name,
            package_name: args.package_name,
            template: args.template,
            directory: args.directory,
            skip_runtime_check: args.skip_runtime_check,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Local directory containing templates (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

async fn create(config: &BotgenJavaConfig, args: CreateArgs) -> Result<()> {
    let result = botgen_core::run(config, args, CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = BotgenJavaConfig;

    match args.command {
        Some(Command::Create(create_args)) => create(&config, create_args.into()).await,
        Some(Command::List(list_args)) => {
            let fetcher = match list_args.template_dir {
                Some(dir) => TemplateFetcher::from_local(dir),
                None => TemplateFetcher::from_config(&config),
            };
            botgen_core::templates::print_catalog(&fetcher).await
        }
        // No subcommand provided, default to create behavior (interactive mode)
        None => create(&config, CreateArgs::default()).await,
    }
}
