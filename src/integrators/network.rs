use super::{patch_shared, Integrator};
use crate::error::Result;
use crate::generators::GenerationContext;
use crate::strategy::API_CLIENT;
use crate::workspace::Workspace;

/// Makes the `ApiClient` available to the widget tree.
pub struct NetworkIntegrator;

impl Integrator for NetworkIntegrator {
    fn name(&self) -> &str {
        "network integration"
    }

    fn integrate(&self, ctx: &GenerationContext<'_>, ws: &mut Workspace) -> Result<()> {
        patch_shared(ws, self.name(), |shared| {
            ctx.wiring.wire_service(&API_CLIENT, &ctx.package, shared);
        });
        Ok(())
    }
}
