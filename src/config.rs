//! Project configuration for fledge.
//! Turns loosely typed answers (config file, stdin, flags, prompts) into a validated,
//! immutable [`ProjectConfig`].

use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use cruet::Inflector;
use indexmap::IndexSet;
use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

fn project_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z_][a-z0-9_]*$").expect("static regex"))
}

/// Returns true when `name` is usable as a Dart package name.
pub fn is_valid_project_name(name: &str) -> bool {
    project_name_regex().is_match(name)
}

/// Lowercases and strips everything but ASCII letters and digits, so that
/// "Feature-Driven", "feature_driven" and "Feature Driven" compare equal.
fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Source layout strategy of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Architecture {
    CleanArchitecture,
    Mvvm,
    Mvc,
    FeatureDriven,
}

impl Architecture {
    pub const ALL: [Architecture; 4] =
        [Self::CleanArchitecture, Self::Mvvm, Self::Mvc, Self::FeatureDriven];

    pub fn label(&self) -> &'static str {
        match self {
            Self::CleanArchitecture => "Clean Architecture",
            Self::Mvvm => "MVVM",
            Self::Mvc => "MVC",
            Self::FeatureDriven => "Feature-Driven",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::CleanArchitecture => "clean_architecture",
            Self::Mvvm => "mvvm",
            Self::Mvc => "mvc",
            Self::FeatureDriven => "feature_driven",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "cleanarchitecture" | "clean" => Some(Self::CleanArchitecture),
            "mvvm" => Some(Self::Mvvm),
            "mvc" => Some(Self::Mvc),
            "featuredriven" | "featurefirst" => Some(Self::FeatureDriven),
            _ => None,
        }
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Application-level state management library of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StateManagement {
    Bloc,
    Provider,
    Riverpod,
    GetX,
    MobX,
    Redux,
    /// No external state container: explicit controller objects passed by constructor.
    Default,
}

impl StateManagement {
    pub const ALL: [StateManagement; 7] = [
        Self::Bloc,
        Self::Provider,
        Self::Riverpod,
        Self::GetX,
        Self::MobX,
        Self::Redux,
        Self::Default,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bloc => "BLoC",
            Self::Provider => "Provider",
            Self::Riverpod => "Riverpod",
            Self::GetX => "GetX",
            Self::MobX => "MobX",
            Self::Redux => "Redux",
            Self::Default => "Default",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Bloc => "bloc",
            Self::Provider => "provider",
            Self::Riverpod => "riverpod",
            Self::GetX => "getx",
            Self::MobX => "mobx",
            Self::Redux => "redux",
            Self::Default => "default",
        }
    }

    /// Parses a state management name. Unknown names fall back to [`StateManagement::Default`].
    pub fn parse(value: &str) -> Self {
        match normalize(value).as_str() {
            "bloc" | "cubit" => Self::Bloc,
            "provider" => Self::Provider,
            "riverpod" => Self::Riverpod,
            "getx" | "get" => Self::GetX,
            "mobx" => Self::MobX,
            "redux" => Self::Redux,
            other => {
                debug!(
                    "State management '{}' is not recognized, using Default",
                    other
                );
                Self::Default
            }
        }
    }
}

impl std::fmt::Display for StateManagement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Optional cross-cutting capability of the generated project.
///
/// The declaration order is the order modules are generated and integrated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Module {
    ThemeManager,
    Localization,
    PushNotification,
    NetworkLayer,
    Routing,
    ErrorHandling,
}

impl Module {
    pub const ALL: [Module; 6] = [
        Self::ThemeManager,
        Self::Localization,
        Self::PushNotification,
        Self::NetworkLayer,
        Self::Routing,
        Self::ErrorHandling,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ThemeManager => "Theme Manager",
            Self::Localization => "Localization",
            Self::PushNotification => "Push Notification",
            Self::NetworkLayer => "Network Layer",
            Self::Routing => "Routing",
            Self::ErrorHandling => "Error Handling",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::ThemeManager => "theme_manager",
            Self::Localization => "localization",
            Self::PushNotification => "push_notification",
            Self::NetworkLayer => "network_layer",
            Self::Routing => "routing",
            Self::ErrorHandling => "error_handling",
        }
    }

    /// Directory under `lib/core` owned by the module generator.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::ThemeManager => "theme",
            Self::Localization => "localization",
            Self::PushNotification => "notifications",
            Self::NetworkLayer => "network",
            Self::Routing => "routing",
            Self::ErrorHandling => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "thememanager" | "theme" | "theming" => Some(Self::ThemeManager),
            "localization" | "localisation" | "l10n" | "i18n" => Some(Self::Localization),
            "pushnotification" | "pushnotifications" | "notifications" => {
                Some(Self::PushNotification)
            }
            "networklayer" | "network" | "networking" => Some(Self::NetworkLayer),
            "routing" | "router" => Some(Self::Routing),
            "errorhandling" | "errors" => Some(Self::ErrorHandling),
            _ => None,
        }
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A vertical slice of the generated application with its derived identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Name as entered by the user, e.g. "User Profile"
    pub name: String,
    /// Directory, file and route key, e.g. "user_profile"
    pub snake: String,
    /// Class name prefix, e.g. "UserProfile"
    pub pascal: String,
    /// Message key prefix, e.g. "userProfile"
    pub camel: String,
    /// Route path, e.g. "/user_profile"
    pub route: String,
}

impl Feature {
    /// Derives the identifiers of a feature, `None` when nothing usable remains.
    pub fn new(name: &str) -> Option<Self> {
        let name = name.trim();
        let snake: String = name
            .to_snake_case()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        let snake = snake.trim_matches('_').to_string();
        if snake.is_empty() {
            return None;
        }
        let snake = if snake.starts_with(|c: char| c.is_ascii_digit()) {
            format!("feature_{snake}")
        } else {
            snake
        };

        Some(Self {
            name: name.to_string(),
            pascal: snake.to_pascal_case(),
            camel: snake.to_camel_case(),
            route: format!("/{snake}"),
            snake,
        })
    }
}

/// Validated, immutable description of the project to generate.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    name: String,
    architecture: Architecture,
    state_management: StateManagement,
    features: Vec<Feature>,
    modules: IndexSet<Module>,
}

impl ProjectConfig {
    /// Builds a configuration, rejecting invalid project names.
    ///
    /// Features keep their first-seen order and are deduplicated by their snake name.
    /// Modules are kept in declaration order regardless of input order.
    pub fn new<I, S, M>(
        name: &str,
        architecture: Architecture,
        state_management: StateManagement,
        features: I,
        modules: M,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        M: IntoIterator<Item = Module>,
    {
        if !is_valid_project_name(name) {
            return Err(Error::InvalidProjectName {
                name: name.to_string(),
            });
        }

        let mut seen = IndexSet::new();
        let mut resolved = Vec::new();
        for raw in features {
            match Feature::new(raw.as_ref()) {
                Some(feature) => {
                    if seen.insert(feature.snake.clone()) {
                        resolved.push(feature);
                    } else {
                        debug!("Ignoring duplicate feature '{}'", feature.name);
                    }
                }
                None => debug!("Ignoring blank feature name '{}'", raw.as_ref()),
            }
        }

        let requested: IndexSet<Module> = modules.into_iter().collect();
        let modules = Module::ALL
            .into_iter()
            .filter(|m| requested.contains(m))
            .collect();

        Ok(Self {
            name: name.to_string(),
            architecture,
            state_management,
            features: resolved,
            modules,
        })
    }

    /// Resolves answers into a configuration.
    ///
    /// Only the project name is mandatory. Unknown architectures fall back to Clean
    /// Architecture and unknown modules are dropped, both with a warning.
    pub fn from_answers(answers: &Answers) -> Result<Self> {
        let name = answers
            .project_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| Error::ConfigError("project_name is required".to_string()))?;

        let architecture = match answers.architecture.as_deref() {
            None => Architecture::CleanArchitecture,
            Some(raw) => Architecture::parse(raw).unwrap_or_else(|| {
                warn!(
                    "Unknown architecture '{}', using {}",
                    raw,
                    Architecture::CleanArchitecture
                );
                Architecture::CleanArchitecture
            }),
        };

        let state_management = answers
            .state_management
            .as_deref()
            .map(StateManagement::parse)
            .unwrap_or(StateManagement::Default);

        let mut modules = Vec::new();
        for raw in answers.modules.iter().flatten() {
            match Module::parse(raw) {
                Some(module) => modules.push(module),
                None => warn!("Unknown module '{}' ignored", raw),
            }
        }

        Self::new(
            name,
            architecture,
            state_management,
            answers.features.iter().flatten(),
            modules,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn architecture(&self) -> Architecture {
        self.architecture
    }

    pub fn state_management(&self) -> StateManagement {
        self.state_management
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn modules(&self) -> impl Iterator<Item = Module> + '_ {
        self.modules.iter().copied()
    }

    pub fn has_module(&self, module: Module) -> bool {
        self.modules.contains(&module)
    }

    /// A router file is generated for Feature-Driven projects or when Routing is selected.
    pub fn has_router(&self) -> bool {
        self.architecture == Architecture::FeatureDriven || self.has_module(Module::Routing)
    }

    /// Human readable application title, e.g. "Demo App" for `demo_app`.
    pub fn title(&self) -> String {
        self.name.to_title_case()
    }
}

/// Raw answers as they come from a config file, stdin, flags or prompts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Answers {
    pub project_name: Option<String>,
    pub architecture: Option<String>,
    pub state_management: Option<String>,
    pub features: Option<Vec<String>>,
    pub modules: Option<Vec<String>>,
    /// Shell commands executed in the project root after generation
    pub post_generate: Vec<String>,
}

impl Answers {
    /// Overlays `other` on top of `self`: every value present in `other` wins.
    pub fn merge(self, other: Answers) -> Answers {
        Answers {
            project_name: other.project_name.or(self.project_name),
            architecture: other.architecture.or(self.architecture),
            state_management: other.state_management.or(self.state_management),
            features: other.features.or(self.features),
            modules: other.modules.or(self.modules),
            post_generate: if other.post_generate.is_empty() {
                self.post_generate
            } else {
                other.post_generate
            },
        }
    }
}

/// Parses answers, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML answers
pub fn parse_answers(content: &str) -> Result<Answers> {
    if content.trim().is_empty() {
        return Ok(Answers::default());
    }
    match serde_json::from_str(content) {
        Ok(answers) => Ok(answers),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads answers from a config file.
pub fn load_answers<P: AsRef<Path>>(path: P) -> Result<Answers> {
    let path = path.as_ref();
    debug!("Loading answers from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("cannot read '{}': {}", path.display(), e))
    })?;
    parse_answers(&content)
}

/// Reads answers piped to stdin, JSON or YAML.
pub fn load_answers_from_stdin() -> Result<Answers> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_answers(&buffer)
}

/// Returns the first of [`CONFIG_FILES`] that exists in `dir`.
pub fn find_config_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|file| dir.as_ref().join(file))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_identifiers() {
        let feature = Feature::new("User Profile").unwrap();
        assert_eq!(feature.snake, "user_profile");
        assert_eq!(feature.pascal, "UserProfile");
        assert_eq!(feature.camel, "userProfile");
        assert_eq!(feature.route, "/user_profile");

        assert!(Feature::new("   ").is_none());
        assert_eq!(Feature::new("2fa").unwrap().snake, "feature_2fa");
    }

    #[test]
    fn test_modules_follow_declaration_order() {
        let config = ProjectConfig::new(
            "app",
            Architecture::Mvc,
            StateManagement::Bloc,
            Vec::<String>::new(),
            [Module::ErrorHandling, Module::ThemeManager, Module::ThemeManager],
        )
        .unwrap();
        let modules: Vec<_> = config.modules().collect();
        assert_eq!(modules, vec![Module::ThemeManager, Module::ErrorHandling]);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Feature-Driven"), "featuredriven");
        assert_eq!(normalize("Theme Manager"), "thememanager");
    }
}
