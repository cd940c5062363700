use super::{GenerationContext, Generator};
use crate::config::Module;
use crate::error::Result;
use crate::registry::TemplateModule;
use crate::workspace::Workspace;
use log::debug;

/// Generator of a module subtree under `lib/core/<dir>`: the module's common templates,
/// then the branch selected by the state management.
pub struct ModuleGenerator {
    module: Module,
}

impl ModuleGenerator {
    pub fn new(module: Module) -> Self {
        Self { module }
    }

    pub fn dir(&self) -> String {
        format!("lib/core/{}", self.module.dir_name())
    }
}

impl Generator for ModuleGenerator {
    fn name(&self) -> &str {
        TemplateModule::from(self.module).key()
    }

    fn generate(&self, ctx: &GenerationContext<'_>, ws: &mut Workspace) -> Result<()> {
        ws.ensure_dir(self.dir());

        let context = ctx.template_context()?;
        let sets = ctx
            .registry
            .applicable(
                TemplateModule::from(self.module),
                ctx.config.state_management(),
            );
        let mut files = 0;
        for set in sets {
            files += ctx.apply_set(ws, self.name(), set, &context)?;
        }
        debug!("{}: {} files", self.module, files);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Architecture, ProjectConfig, StateManagement};
    use crate::registry::TemplateRegistry;
    use crate::renderer::MiniJinjaRenderer;
    use crate::strategy::wiring_for;

    #[test]
    fn test_missing_manifest_keeps_files() {
        let config = ProjectConfig::new(
            "demo_app",
            Architecture::Mvvm,
            StateManagement::Bloc,
            ["Home"],
            [Module::ThemeManager],
        )
        .unwrap();
        let registry = TemplateRegistry::builtin();
        let renderer = MiniJinjaRenderer::new();
        let wiring = wiring_for(config.state_management());
        let ctx = GenerationContext::new(&config, &registry, &renderer, wiring.as_ref());
        let mut ws = Workspace::new("/tmp/demo_app");

        ModuleGenerator::new(Module::ThemeManager)
            .generate(&ctx, &mut ws)
            .unwrap();

        assert!(ws.has_dir("lib/core/theme"));
        assert!(ws.has_file("lib/core/theme/app_theme.dart"));
        assert!(ws.has_file("lib/core/theme/cubit/theme_cubit.dart"));
        assert!(ws
            .warnings()
            .iter()
            .any(|w| w.contains("pubspec.yaml not found")));
    }
}
