use super::{GenerationContext, Generator};
use crate::constants::{ENTRY_POINT_PATH, ROOT_WIDGET, ROOT_WIDGET_PATH};
use crate::error::{Error, Result};
use crate::registry::TemplateModule;
use crate::source::{EntryPoint, RootWidget};
use crate::workspace::Workspace;
use log::{debug, info};

/// The application shell: manifest, root widget, entry point and project files.
pub struct AppGenerator;

impl AppGenerator {
    fn manifest(&self, ctx: &GenerationContext<'_>, ws: &mut Workspace) -> Result<()> {
        if ws.load_manifest()? {
            info!("Using existing manifest");
            return Ok(());
        }
        let set = ctx
            .registry
            .common(TemplateModule::Manifest)
            .ok_or_else(|| Error::TemplateError("no manifest template registered".to_string()))?;
        let context = ctx.template_context()?;
        let manifest = set
            .files
            .first()
            .ok_or_else(|| Error::TemplateError(format!("{} has no files", set.id)))?;
        ws.create_manifest(&ctx.renderer.render(manifest.body, &context)?);
        debug!("Created a fresh manifest");
        Ok(())
    }

    fn root_widget(&self, ctx: &GenerationContext<'_>) -> RootWidget {
        let mut root = RootWidget::new(ROOT_WIDGET);
        root.add_import(ctx.package.import("core/constants/app_constants.dart"));
        root.set_app_arg("title", "AppConstants.appName");
        root.set_app_arg("debugShowCheckedModeBanner", "false");
        root.set_app_arg("theme", "ThemeData.light()");
        root.set_app_arg("darkTheme", "ThemeData.dark()");
        root
    }
}

impl Generator for AppGenerator {
    fn name(&self) -> &str {
        "app"
    }

    fn generate(&self, ctx: &GenerationContext<'_>, ws: &mut Workspace) -> Result<()> {
        self.manifest(ctx, ws)?;

        let context = ctx.template_context()?;
        let state = ctx.config.state_management();
        for set in ctx.registry.applicable(TemplateModule::App, state) {
            ctx.apply_set(ws, self.name(), set, &context)?;
        }

        ws.set_root_widget(self.root_widget(ctx));
        ws.set_entry_point(EntryPoint::new(ROOT_WIDGET, &ctx.package.import(ROOT_WIDGET_PATH)));
        if ctx.wiring.uses_store() {
            ws.enable_redux_store();
        }
        if let Some(mut shared) = ws.shared_files() {
            ctx.wiring.wire_app(&ctx.package, &mut shared);
        }
        debug!("Created {} and {}", ROOT_WIDGET_PATH, ENTRY_POINT_PATH);
        Ok(())
    }
}
