//! Interactive questions for the answers no other source provided.

use crate::config::{Answers, Architecture, Module, StateManagement};
use crate::error::{Error, Result};
use dialoguer::{Confirm, Input, MultiSelect, Select};

/// Features suggested when the user is asked interactively
const DEFAULT_FEATURES: &str = "Home";

/// Source of interactive answers.
pub trait Prompter {
    fn text(&self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Returns the index of the chosen item.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Returns the indices of the chosen items.
    fn multi_select(&self, prompt: &str, items: &[&str], defaults: &[bool]) -> Result<Vec<usize>>;

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompts backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_error(e: dialoguer::Error) -> Error {
    Error::PromptError(e.to_string())
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(prompt_error)
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn multi_select(&self, prompt: &str, items: &[&str], defaults: &[bool]) -> Result<Vec<usize>> {
        MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .defaults(defaults)
            .interact()
            .map_err(prompt_error)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }
}

fn choose<T: Copy>(
    prompter: &dyn Prompter,
    prompt: &str,
    all: &[T],
    label: fn(&T) -> &'static str,
) -> Result<T> {
    let items: Vec<&str> = all.iter().map(label).collect();
    let index = prompter.select(prompt, &items, 0)?;
    all.get(index)
        .copied()
        .ok_or_else(|| Error::PromptError(format!("no choice at index {index}")))
}

/// Asks for every answer that is still missing. Answers already present are kept as is.
///
/// # Errors
/// * `Error::PromptError` if the terminal interaction fails
pub fn complete_answers(prompter: &dyn Prompter, answers: Answers) -> Result<Answers> {
    let mut answers = answers;

    if answers
        .project_name
        .as_deref()
        .map_or(true, |name| name.trim().is_empty())
    {
        answers.project_name = Some(prompter.text("Project name", Some("my_app"))?);
    }
    if answers.architecture.is_none() {
        let architecture = choose(
            prompter,
            "Architecture",
            &Architecture::ALL,
            Architecture::label,
        )?;
        answers.architecture = Some(architecture.label().to_string());
    }
    if answers.state_management.is_none() {
        let state = choose(
            prompter,
            "State management",
            &StateManagement::ALL,
            StateManagement::label,
        )?;
        answers.state_management = Some(state.label().to_string());
    }
    if answers.features.is_none() {
        let raw = prompter.text("Features (comma separated)", Some(DEFAULT_FEATURES))?;
        answers.features = Some(
            raw.split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(String::from)
                .collect(),
        );
    }
    if answers.modules.is_none() {
        let items: Vec<&str> = Module::ALL.iter().map(Module::label).collect();
        let chosen = prompter.multi_select("Modules", &items, &[false; Module::ALL.len()])?;
        answers.modules = Some(
            chosen
                .into_iter()
                .filter_map(|i| Module::ALL.get(i))
                .map(|m| m.label().to_string())
                .collect(),
        );
    }
    Ok(answers)
}
