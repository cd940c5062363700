//! Command-line interface implementation for fledge.
//! Provides argument parsing and help text formatting using clap.

use crate::config::Answers;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for fledge.
#[derive(Parser, Debug)]
#[command(author, version, about = "fledge: Flutter project scaffolding tool", long_about = None)]
pub struct Args {
    /// Directory the project directory is created in
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// JSON or YAML file with answers (defaults to fledge.json/fledge.yml/fledge.yaml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project name, a valid Dart package name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Architecture: "Clean Architecture", MVVM, MVC or Feature-Driven
    #[arg(short, long)]
    pub architecture: Option<String>,

    /// State management: BLoC, Provider, Riverpod, GetX, MobX, Redux or Default
    #[arg(short = 'm', long)]
    pub state_management: Option<String>,

    /// Feature to generate (repeatable)
    #[arg(long = "feature", value_name = "NAME")]
    pub features: Vec<String>,

    /// Module to add (repeatable)
    #[arg(long = "module", value_name = "NAME")]
    pub modules: Vec<String>,

    /// Get answers from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Regenerate into an existing project directory
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Never prompt; missing answers take their defaults
    #[arg(long)]
    pub non_interactive: bool,

    /// Skip confirmation prompts when executing hooks.
    /// This will automatically execute the post_generate commands of the configuration
    /// without asking for confirmation first.
    #[arg(long)]
    pub skip_hooks_check: bool,
}

impl Args {
    /// Answers given as flags. Repeatable flags that were not used count as not given.
    pub fn answers(&self) -> Answers {
        Answers {
            project_name: self.name.clone(),
            architecture: self.architecture.clone(),
            state_management: self.state_management.clone(),
            features: (!self.features.is_empty()).then(|| self.features.clone()),
            modules: (!self.modules.is_empty()).then(|| self.modules.clone()),
            post_generate: Vec::new(),
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// Every argument has a default, so clap only exits on malformed input or for
/// `--help`/`--version`.
pub fn get_args() -> Args {
    Args::parse()
}
