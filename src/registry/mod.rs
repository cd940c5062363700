//! Template registry: the catalog of file templates and package dependencies, keyed by
//! what they are generated for and which variant of the configuration selects them.

mod catalog;

use crate::config::{Architecture, Module, StateManagement};
use crate::error::Result;
use crate::manifest::Dependency;
use crate::renderer::TemplateRenderer;
use crate::workspace::{GeneratedFile, Owner};
use indexmap::IndexMap;
use std::path::PathBuf;

/// What a template set is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateModule {
    App,
    Manifest,
    Feature,
    Router,
    ReduxStore,
    Theme,
    Localization,
    PushNotification,
    Network,
    Routing,
    ErrorHandling,
}

impl TemplateModule {
    pub fn key(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Manifest => "manifest",
            Self::Feature => "feature",
            Self::Router => "router",
            Self::ReduxStore => "redux_store",
            Self::Theme => "theme",
            Self::Localization => "localization",
            Self::PushNotification => "push_notification",
            Self::Network => "network",
            Self::Routing => "routing",
            Self::ErrorHandling => "error_handling",
        }
    }
}

impl From<Module> for TemplateModule {
    fn from(module: Module) -> Self {
        match module {
            Module::ThemeManager => Self::Theme,
            Module::Localization => Self::Localization,
            Module::PushNotification => Self::PushNotification,
            Module::NetworkLayer => Self::Network,
            Module::Routing => Self::Routing,
            Module::ErrorHandling => Self::ErrorHandling,
        }
    }
}

/// Which configuration value selects a template set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Always applies
    Common,
    State(StateManagement),
    Architecture(Architecture),
}

impl Variant {
    fn key(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::State(state) => state.key(),
            Self::Architecture(architecture) => architecture.key(),
        }
    }
}

/// A file template: both the path and the body are MiniJinja templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: &'static str,
    pub body: &'static str,
}

/// One branch of the registry.
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    /// Branch id such as `theme/bloc`, recorded as the owner branch of rendered files
    pub id: String,
    pub files: Vec<TemplateFile>,
    pub dependencies: Vec<Dependency>,
    pub dev_dependencies: Vec<Dependency>,
}

impl TemplateSet {
    pub fn new(module: TemplateModule, variant: Variant) -> Self {
        Self {
            id: format!("{}/{}", module.key(), variant.key()),
            ..Default::default()
        }
    }

    pub fn file(mut self, path: &'static str, body: &'static str) -> Self {
        self.files.push(TemplateFile { path, body });
        self
    }

    pub fn dependency(mut self, name: &str, version: &str) -> Self {
        self.dependencies.push(Dependency::version(name, version));
        self
    }

    pub fn sdk_dependency(mut self, name: &str, sdk: &str) -> Self {
        self.dependencies.push(Dependency::sdk(name, sdk));
        self
    }

    pub fn dev_dependency(mut self, name: &str, version: &str) -> Self {
        self.dev_dependencies.push(Dependency::version(name, version));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dependencies.is_empty() && self.dev_dependencies.is_empty()
    }

    /// Renders every file of the set against `context`.
    ///
    /// A path that renders to an empty string is skipped, which lets a template opt out
    /// of a configuration.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if a path or body template fails to render
    pub fn render(
        &self,
        renderer: &dyn TemplateRenderer,
        context: &serde_json::Value,
        generator: &str,
    ) -> Result<Vec<GeneratedFile>> {
        let mut out = Vec::with_capacity(self.files.len());
        for file in &self.files {
            let path = renderer.render(file.path, context)?;
            let path = path.trim();
            if path.is_empty() {
                continue;
            }
            out.push(GeneratedFile {
                path: PathBuf::from(path),
                content: renderer.render(file.body, context)?,
                owner: Owner::new(generator, self.id.clone()),
            });
        }
        Ok(out)
    }
}

/// Catalog of template sets keyed by `(TemplateModule, Variant)`.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    sets: IndexMap<(TemplateModule, Variant), TemplateSet>,
}

impl TemplateRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The registry with every built-in template.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        catalog::register_all(&mut registry);
        registry
    }

    pub fn register(&mut self, module: TemplateModule, variant: Variant, set: TemplateSet) {
        self.sets.insert((module, variant), set);
    }

    pub fn get(&self, module: TemplateModule, variant: Variant) -> Option<&TemplateSet> {
        self.sets.get(&(module, variant))
    }

    /// The branch for `state`, falling back to the Default branch.
    pub fn select(&self, module: TemplateModule, state: StateManagement) -> Option<&TemplateSet> {
        self.get(module, Variant::State(state))
            .or_else(|| self.get(module, Variant::State(StateManagement::Default)))
    }

    pub fn common(&self, module: TemplateModule) -> Option<&TemplateSet> {
        self.get(module, Variant::Common)
    }

    pub fn for_architecture(
        &self,
        module: TemplateModule,
        architecture: Architecture,
    ) -> Option<&TemplateSet> {
        self.get(module, Variant::Architecture(architecture))
    }

    /// The sets that apply to `module` under `state`: common first, then the state branch.
    pub fn applicable(&self, module: TemplateModule, state: StateManagement) -> Vec<&TemplateSet> {
        self.common(module)
            .into_iter()
            .chain(self.select(module, state))
            .collect()
    }

    pub fn branches(
        &self,
        module: TemplateModule,
    ) -> impl Iterator<Item = (&Variant, &TemplateSet)> {
        self.sets
            .iter()
            .filter(move |((m, _), _)| *m == module)
            .map(|((_, v), set)| (v, set))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MiniJinjaRenderer;

    #[test]
    fn test_select_falls_back_to_default() {
        let mut registry = TemplateRegistry::empty();
        let variant = Variant::State(StateManagement::Default);
        let default = TemplateSet::new(TemplateModule::Theme, variant).file("lib/a.dart", "a");
        registry.register(TemplateModule::Theme, variant, default);

        let selected = registry
            .select(TemplateModule::Theme, StateManagement::Bloc)
            .unwrap();
        assert_eq!(selected.id, "theme/default");
    }

    #[test]
    fn test_render_skips_empty_paths() {
        let set = TemplateSet::new(TemplateModule::App, Variant::Common)
            .file("{% if flag %}lib/a.dart{% endif %}", "a")
            .file("lib/{{ name }}.dart", "// {{ name }}\n");
        let context = serde_json::json!({"flag": false, "name": "b"});
        let files = set
            .render(&MiniJinjaRenderer::new(), &context, "app")
            .unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, PathBuf::from("lib/b.dart"));
        assert_eq!(files[0].content, "// b\n");
        assert_eq!(files[0].owner, Owner::new("app", "app/common"));
    }
}
