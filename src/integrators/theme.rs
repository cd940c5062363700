use super::{patch_shared, Integrator};
use crate::error::Result;
use crate::generators::GenerationContext;
use crate::strategy::THEME;
use crate::workspace::Workspace;

/// Replaces the framework default themes with `AppTheme` and threads the theme mode.
pub struct ThemeIntegrator;

impl Integrator for ThemeIntegrator {
    fn name(&self) -> &str {
        "theme integration"
    }

    fn integrate(&self, ctx: &GenerationContext<'_>, ws: &mut Workspace) -> Result<()> {
        patch_shared(ws, self.name(), |shared| {
            shared
                .root
                .add_import(ctx.package.import("core/theme/app_theme.dart"));
            shared.root.set_app_arg("theme", "AppTheme.lightTheme");
            shared.root.set_app_arg("darkTheme", "AppTheme.darkTheme");
            ctx.wiring.wire_state(&THEME, &ctx.package, shared);
        });
        Ok(())
    }
}
