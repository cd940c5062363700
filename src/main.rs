//! fledge's main application entry point.
//! Collects answers from every source, runs the generation and the post-generation hooks.

use fledge::{
    cli::{get_args, Args},
    config::{find_config_file, load_answers, load_answers_from_stdin, Answers, ProjectConfig},
    error::{default_error_handler, Error, Result},
    hooks::{confirm_hook_execution, run_hooks},
    logger::init_logger,
    materializer::WriteAction,
    orchestrator::Orchestrator,
    prompt::{complete_answers, DialoguerPrompter},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Merges answers by precedence: flags, stdin, config file, then interactive prompts.
fn collect_answers(args: &Args) -> Result<Answers> {
    let config_file = match &args.config {
        Some(path) => Some(path.clone()),
        None => std::env::current_dir().ok().and_then(find_config_file),
    };
    let mut answers = match config_file {
        Some(path) => load_answers(path)?,
        None => Answers::default(),
    };
    if args.stdin {
        answers = answers.merge(load_answers_from_stdin()?);
    }
    answers = answers.merge(args.answers());

    if args.non_interactive {
        if answers.project_name.is_none() {
            return Err(Error::ConfigError(
                "project_name is required in non-interactive mode".to_string(),
            ));
        }
        return Ok(answers);
    }
    complete_answers(&DialoguerPrompter::new(), answers)
}

/// Main application logic execution.
///
/// # Flow
/// 1. Collects and validates the answers
/// 2. Generates the project
/// 3. Prints what was written and every warning
/// 4. Runs the post-generation hooks after confirmation
fn run(args: Args) -> Result<()> {
    let answers = collect_answers(&args)?;
    let config = ProjectConfig::from_answers(&answers)?;

    let report = Orchestrator::new().run(&config, &args.output_dir, args.force)?;
    for file in &report.written {
        if file.action != WriteAction::Unchanged {
            println!(
                "{}: '{}'",
                file.action,
                report.project_root.join(&file.path).display()
            );
        }
    }
    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }

    let prompter = DialoguerPrompter::new();
    let execute_hooks = !args.non_interactive || args.skip_hooks_check;
    if execute_hooks
        && confirm_hook_execution(&prompter, &answers.post_generate, args.skip_hooks_check)?
    {
        for warning in run_hooks(&report.project_root, &answers.post_generate) {
            eprintln!("warning: {warning}");
        }
    }

    println!(
        "Project generation completed successfully in {}.",
        report.project_root.display()
    );
    Ok(())
}
