//! Per-module generators.
//!
//! A generator owns a subtree of the project: it records its directories, renders the
//! registry branches that apply to the configuration into owned files and appends its
//! packages to the manifest. Generators never touch files owned by another generator.

mod app;
mod feature;
mod layout;
mod localization;
mod module;
mod redux;
mod router;

pub use app::AppGenerator;
pub use feature::{page_path, FeatureGenerator};
pub use layout::LayoutGenerator;
pub use localization::{arb_bundle, LocalizationGenerator};
pub use module::ModuleGenerator;
pub use redux::ReduxStoreGenerator;
pub use router::{default_route_feature, RouterGenerator};

use crate::config::{Feature, Module, ProjectConfig};
use crate::constants::{versions, DART_SDK_CONSTRAINT, SUPPORTED_LOCALES};
use crate::error::Result;
use crate::manifest::Section;
use crate::registry::{TemplateRegistry, TemplateSet};
use crate::renderer::TemplateRenderer;
use crate::source::Package;
use crate::strategy::StateWiring;
use crate::workspace::Workspace;
use log::debug;
use serde::Serialize;

/// Everything a pipeline step reads; steps write only to the [`Workspace`].
pub struct GenerationContext<'a> {
    pub config: &'a ProjectConfig,
    pub registry: &'a TemplateRegistry,
    pub renderer: &'a dyn TemplateRenderer,
    pub wiring: &'a dyn StateWiring,
    pub package: Package,
}

/// A feature as seen by templates: its identifiers plus the location of its page.
#[derive(Debug, Serialize)]
pub struct FeatureContext<'a> {
    #[serde(flatten)]
    pub feature: &'a Feature,
    /// Page file under `lib/`
    pub page: String,
}

#[derive(Debug, Serialize)]
struct TemplateContext<'a> {
    project_name: &'a str,
    title: String,
    architecture: &'static str,
    architecture_label: &'static str,
    state_management: &'static str,
    state_management_label: &'static str,
    modules: Vec<&'static str>,
    features: Vec<FeatureContext<'a>>,
    default_feature: Option<FeatureContext<'a>>,
    has_theme: bool,
    has_localization: bool,
    has_push_notification: bool,
    has_network: bool,
    has_routing: bool,
    has_error_handling: bool,
    has_router: bool,
    supported_locales: &'static [&'static str],
    dart_sdk: &'static str,
    flutter_lints: &'static str,
}

impl<'a> GenerationContext<'a> {
    pub fn new(
        config: &'a ProjectConfig,
        registry: &'a TemplateRegistry,
        renderer: &'a dyn TemplateRenderer,
        wiring: &'a dyn StateWiring,
    ) -> Self {
        Self {
            config,
            registry,
            renderer,
            wiring,
            package: Package::new(config.name()),
        }
    }

    pub fn feature_context<'f>(&self, feature: &'f Feature) -> FeatureContext<'f> {
        FeatureContext {
            feature,
            page: page_path(self.config.architecture(), feature),
        }
    }

    /// The values every template can use.
    pub fn template_context(&self) -> Result<serde_json::Value> {
        let config = self.config;
        let context = TemplateContext {
            project_name: config.name(),
            title: config.title(),
            architecture: config.architecture().key(),
            architecture_label: config.architecture().label(),
            state_management: config.state_management().key(),
            state_management_label: config.state_management().label(),
            modules: config.modules().map(|m| m.label()).collect(),
            features: config.features().iter().map(|f| self.feature_context(f)).collect(),
            default_feature: default_route_feature(config.features())
                .map(|f| self.feature_context(f)),
            has_theme: config.has_module(Module::ThemeManager),
            has_localization: config.has_module(Module::Localization),
            has_push_notification: config.has_module(Module::PushNotification),
            has_network: config.has_module(Module::NetworkLayer),
            has_routing: config.has_module(Module::Routing),
            has_error_handling: config.has_module(Module::ErrorHandling),
            has_router: config.has_router(),
            supported_locales: &SUPPORTED_LOCALES,
            dart_sdk: DART_SDK_CONSTRAINT,
            flutter_lints: versions::FLUTTER_LINTS,
        };
        Ok(serde_json::to_value(context)?)
    }

    /// The common context with the keys of `extra` added on top.
    pub fn template_context_with(&self, extra: serde_json::Value) -> Result<serde_json::Value> {
        let mut context = self.template_context()?;
        if let (Some(base), serde_json::Value::Object(extra)) = (context.as_object_mut(), extra) {
            base.extend(extra);
        }
        Ok(context)
    }

    /// Renders `set` into files owned by `generator` and appends its packages to the manifest.
    ///
    /// Returns the number of files added.
    pub fn apply_set(
        &self,
        ws: &mut Workspace,
        generator: &str,
        set: &TemplateSet,
        context: &serde_json::Value,
    ) -> Result<usize> {
        debug!("{}: applying {}", generator, set.id);
        let mut added = 0;
        for file in set.render(self.renderer, context, generator)? {
            if ws.add_file(file) {
                added += 1;
            }
        }
        ws.add_dependencies(generator, Section::Dependencies, &set.dependencies);
        ws.add_dependencies(generator, Section::DevDependencies, &set.dev_dependencies);
        Ok(added)
    }
}

/// A pipeline step producing owned files.
pub trait Generator {
    fn name(&self) -> &str;

    fn generate(&self, ctx: &GenerationContext<'_>, ws: &mut Workspace) -> Result<()>;
}

/// The generator of a module's own subtree.
pub fn generator_for(module: Module) -> Box<dyn Generator> {
    match module {
        Module::Localization => Box::new(LocalizationGenerator::new()),
        other => Box::new(ModuleGenerator::new(other)),
    }
}
