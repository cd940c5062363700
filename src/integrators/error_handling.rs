use super::{patch_shared, Integrator};
use crate::error::Result;
use crate::generators::GenerationContext;
use crate::workspace::Workspace;

/// Routes framework and zone errors to `ErrorHandler`.
pub struct ErrorHandlingIntegrator;

impl Integrator for ErrorHandlingIntegrator {
    fn name(&self) -> &str {
        "error handling integration"
    }

    fn integrate(&self, ctx: &GenerationContext<'_>, ws: &mut Workspace) -> Result<()> {
        patch_shared(ws, self.name(), |shared| {
            shared
                .entry
                .add_import(ctx.package.import("core/error/error_handler.dart"));
            shared
                .entry
                .guard_zone("ErrorHandler.onFlutterError", "ErrorHandler.onZoneError");
            ctx.wiring.wire_error_observer(&ctx.package, shared);
        });
        Ok(())
    }
}
