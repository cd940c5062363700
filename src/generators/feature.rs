use super::{GenerationContext, Generator};
use crate::config::{Architecture, Feature};
use crate::error::{Error, Result};
use crate::registry::TemplateModule;
use crate::workspace::Workspace;

/// Location of a feature's page under `lib/`.
pub fn page_path(architecture: Architecture, feature: &Feature) -> String {
    let dir = match architecture {
        Architecture::CleanArchitecture => "presentation/pages",
        Architecture::Mvvm | Architecture::Mvc => "views",
        Architecture::FeatureDriven => "screens",
    };
    format!("features/{snake}/{dir}/{snake}_page.dart", snake = feature.snake)
}

/// Directories of a feature subtree, relative to the feature root.
fn feature_dirs(architecture: Architecture) -> &'static [&'static str] {
    match architecture {
        Architecture::CleanArchitecture => &[
            "data/datasources",
            "data/models",
            "data/repositories",
            "domain/entities",
            "domain/repositories",
            "domain/usecases",
            "presentation/pages",
            "presentation/widgets",
        ],
        Architecture::Mvvm => &["models", "views", "view_models"],
        Architecture::Mvc => &["models", "views", "controllers"],
        Architecture::FeatureDriven => &["screens", "widgets", "services"],
    }
}

/// One vertical slice under `lib/features/<snake>`.
pub struct FeatureGenerator {
    feature: Feature,
    name: String,
}

impl FeatureGenerator {
    pub fn new(feature: Feature) -> Self {
        let name = format!("feature:{}", feature.snake);
        Self { feature, name }
    }
}

impl Generator for FeatureGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn generate(&self, ctx: &GenerationContext<'_>, ws: &mut Workspace) -> Result<()> {
        let architecture = ctx.config.architecture();
        let root = format!("lib/features/{}", self.feature.snake);
        for dir in feature_dirs(architecture) {
            ws.ensure_dir(format!("{root}/{dir}"));
        }

        let set = ctx
            .registry
            .for_architecture(TemplateModule::Feature, architecture)
            .ok_or_else(|| {
                Error::TemplateError(format!("no feature templates for {architecture}"))
            })?;
        let context = ctx.template_context_with(serde_json::json!({
            "feature": ctx.feature_context(&self.feature),
        }))?;
        ctx.apply_set(ws, self.name(), set, &context)?;
        Ok(())
    }
}
