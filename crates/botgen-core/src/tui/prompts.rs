//! Charm-style CLI prompts using cliclack

use crate::answers::{
    or_default, AnswerSet, AnswerSource, PresetAnswers, TemplateChoice, DEFAULT_BOT_NAME,
    DEFAULT_PACKAGE_NAME,
};
use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::materializer::{GenerationReport, Materializer};
use crate::runtime::check;
use crate::templates::{version, HandlebarsCopier, TemplateFetcher, TemplateSource};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Local directory to use for templates instead of the bundled ones
    pub template_dir: Option<PathBuf>,

    /// Bot name (skips the prompt)
    pub bot_name: Option<String>,

    /// Package name (skips the prompt)
    pub package_name: Option<String>,

    /// Template name to use (skips the prompt)
    pub template: Option<String>,

    /// Directory to generate into (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Skip the Java/Maven availability check
    pub skip_runtime_check: bool,

    /// Accept defaults for every answer not given as a flag
    pub yes: bool,
}

impl CreateArgs {
    fn preset(&self) -> PresetAnswers {
        PresetAnswers {
            bot_name: self.bot_name.clone(),
            package_name: self.package_name.clone(),
            template: self.template.clone(),
        }
    }
}

/// Interactive answer source; answers already given as flags are not asked again
#[derive(Debug, Clone, Default)]
pub struct PromptAnswers {
    preset: PresetAnswers,
}

impl PromptAnswers {
    pub fn new(preset: PresetAnswers) -> Self {
        Self { preset }
    }
}

impl AnswerSource for PromptAnswers {
    fn collect(&self, choices: &[TemplateChoice]) -> Result<AnswerSet> {
        let bot_name = match &self.preset.bot_name {
            Some(name) => given("Bot name", name)?,
            None => ask_text("What's the name of your bot?", DEFAULT_BOT_NAME)?,
        };

        let package_name = match &self.preset.package_name {
            Some(name) => given("Package name", name)?,
            None => ask_text(
                "What's the fully qualified package name of your bot?",
                DEFAULT_PACKAGE_NAME,
            )?,
        };

        let template = match &self.preset.template {
            Some(template) => given("Template", template)?,
            None => ask_template(choices)?,
        };

        Ok(AnswerSet {
            bot_name,
            package_name,
            template,
        })
    }
}

fn given(label: &str, value: &str) -> Result<String> {
    cliclack::log::info(format!("{}: {}", label, value))?;
    Ok(value.to_string())
}

fn ask_text(prompt: &str, default: &str) -> Result<String> {
    let input: String = cliclack::input(prompt)
        .placeholder(default)
        .default_input(default)
        .interact()
        .map_err(GeneratorError::from_prompt)?;

    Ok(or_default(Some(&input), default))
}

fn ask_template(choices: &[TemplateChoice]) -> Result<String> {
    if choices.is_empty() {
        anyhow::bail!("No templates found.");
    }

    // Build select prompt - use indices to avoid borrow issues
    let mut select = cliclack::select("Which template would you like to use?");
    for (idx, choice) in choices.iter().enumerate() {
        select = select.item(idx, choice.label(), "");
    }

    let selected_idx: usize = select.interact().map_err(GeneratorError::from_prompt)?;

    Ok(choices[selected_idx].label())
}

/// Run the CLI with interactive prompts
pub async fn run<C: GeneratorConfig>(config: &C, args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Setup template fetcher
    let fetcher = setup_fetcher(config, &args.template_dir)?;

    // Step 2: Collect answers
    let choices = load_choices(&fetcher).await?;
    let answers = if args.yes {
        let answers = args.preset().collect(&choices)?;
        cliclack::log::info(format!(
            "Using bot name '{}', package '{}', template '{}'",
            answers.bot_name,
            answers.package_name,
            answers.template_key()
        ))?;
        answers
    } else {
        PromptAnswers::new(args.preset()).collect(&choices)?
    };

    // Step 3: Create project
    let destination = destination_dir(&args);
    let report = create_project(&fetcher, &answers, &destination).await?;

    // Check version compatibility against the manifest the project was built from
    if let Some(warning) = version_warning(config, &report, cli_version) {
        cliclack::log::warning(warning)?;
    }

    // Step 4: Check runtimes (advisory)
    if args.skip_runtime_check {
        cliclack::log::info("Skipping runtime check")?;
    } else {
        check_runtimes()?;
    }

    // Step 5: Show next steps
    print_next_steps(config, &report, &answers)?;

    Ok(())
}

fn version_warning<C: GeneratorConfig>(
    config: &C,
    report: &GenerationReport,
    cli_version: &str,
) -> Option<String> {
    version::check_compatibility(cli_version, &report.template, config.upgrade_command())
}

fn setup_fetcher<C: GeneratorConfig>(
    config: &C,
    template_dir: &Option<PathBuf>,
) -> Result<TemplateFetcher> {
    let fetcher = match template_dir {
        Some(path) => TemplateFetcher::from_local(path.clone()),
        None => TemplateFetcher::from_config(config),
    };

    if let TemplateSource::Local(path) = fetcher.source() {
        cliclack::log::info(format!("Using local templates from {}", path.display()))?;
    }

    Ok(fetcher)
}

async fn load_choices(fetcher: &TemplateFetcher) -> Result<Vec<TemplateChoice>> {
    let spinner = cliclack::spinner();
    spinner.start("Loading templates...");

    match fetcher.template_choices().await {
        Ok(choices) if choices.is_empty() => {
            spinner.stop("Failed to load templates");
            anyhow::bail!("No templates found.");
        }
        Ok(choices) => {
            spinner.stop(format!("{} template(s) available", choices.len()));
            Ok(choices)
        }
        Err(e) => {
            spinner.stop("Failed to load templates");
            Err(e)
        }
    }
}

fn destination_dir(args: &CreateArgs) -> PathBuf {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    }
}

async fn create_project(
    fetcher: &TemplateFetcher,
    answers: &AnswerSet,
    destination: &Path,
) -> Result<GenerationReport> {
    let report = Materializer::new(fetcher, HandlebarsCopier::new())
        .materialize(answers, destination)
        .await?;

    cliclack::log::success(format!(
        "Created {} files in {}",
        report.files.len(),
        report.root.display()
    ))?;

    Ok(report)
}

fn check_runtimes() -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    let runtimes = check::check_runtimes();
    let runtime_info: Vec<String> = runtimes
        .iter()
        .map(|r| {
            if r.available {
                format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown"))
            } else {
                format!("{} (not installed)", r.name)
            }
        })
        .collect();
    spinner.stop(format!("Detected runtimes: {}", runtime_info.join(", ")));

    let missing = check::missing_hints(&runtimes);
    if !missing.is_empty() {
        cliclack::log::warning(format!(
            "The generated bot needs these to build and run:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        ))?;
    }

    Ok(())
}

fn print_next_steps<C: GeneratorConfig>(
    config: &C,
    report: &GenerationReport,
    answers: &AnswerSet,
) -> Result<()> {
    let steps = config.next_steps(report, answers);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro(format!("Docs: {}", config.docs_url()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_answers_skip_given_flags() {
        let preset = PresetAnswers {
            bot_name: Some("My Bot".to_string()),
            package_name: Some("com.example".to_string()),
            template: Some("echo".to_string()),
        };
        // Nothing is left to ask, so no terminal interaction happens
        let answers = PromptAnswers::new(preset).collect(&[]).unwrap();
        assert_eq!(answers.bot_name, "My Bot");
        assert_eq!(answers.package_name, "com.example");
        assert_eq!(answers.template_key(), "echo");
    }

    #[test]
    fn test_destination_dir() {
        let cwd = std::env::current_dir().unwrap();

        assert_eq!(destination_dir(&CreateArgs::default()), cwd);

        let relative = CreateArgs {
            directory: Some(PathBuf::from("bots")),
            ..Default::default()
        };
        assert_eq!(destination_dir(&relative), cwd.join("bots"));

        let absolute_dir = std::env::temp_dir();
        let absolute = CreateArgs {
            directory: Some(absolute_dir.clone()),
            ..Default::default()
        };
        assert_eq!(destination_dir(&absolute), absolute_dir);
    }

    #[derive(Clone)]
    struct TestConfig;

    impl GeneratorConfig for TestConfig {
        fn display_name(&self) -> &'static str {
            "Test"
        }

        fn template_dir_env(&self) -> &'static str {
            "BOTGEN_TEST_TEMPLATE_DIR"
        }

        fn docs_url(&self) -> &'static str {
            "https://example.com/docs"
        }

        fn upgrade_command(&self) -> &'static str {
            "cargo install botgen-test --force"
        }

        fn next_steps(&self, _report: &GenerationReport, _answers: &AnswerSet) -> Vec<String> {
            Vec::new()
        }
    }

    #[tokio::test]
    async fn test_version_warning_uses_generated_template() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = TemplateFetcher::bundled();
        let answers = PresetAnswers {
            template: Some("echo".to_string()),
            ..Default::default()
        }
        .collect(&[])
        .unwrap();

        let mut report = Materializer::new(&fetcher, HandlebarsCopier::new())
            .materialize(&answers, dir.path())
            .await
            .unwrap();
        assert_eq!(report.template.name, "echo");
        assert!(version_warning(&TestConfig, &report, "99.0.0").is_none());

        report.template.version = "99.0.0".to_string();
        let warning = version_warning(&TestConfig, &report, "0.1.0").unwrap();
        assert!(warning.contains("cargo install botgen-test --force"));
    }

    #[test]
    fn test_create_args_preset() {
        let args = CreateArgs {
            bot_name: Some("Weather".to_string()),
            yes: true,
            ..Default::default()
        };
        let preset = args.preset();
        assert_eq!(preset.bot_name.as_deref(), Some("Weather"));
        assert!(preset.package_name.is_none());
        assert!(!preset.is_complete());
    }
}
