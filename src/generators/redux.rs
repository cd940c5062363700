use super::{GenerationContext, Generator};
use crate::error::{Error, Result};
use crate::registry::TemplateModule;
use crate::workspace::{ReduxSlice, Workspace};

/// `lib/core/store`: `AppState` composed from the slices the module wirings registered.
///
/// Runs after every integration so the set of slices is final.
pub struct ReduxStoreGenerator;

impl Generator for ReduxStoreGenerator {
    fn name(&self) -> &str {
        "redux_store"
    }

    fn generate(&self, ctx: &GenerationContext<'_>, ws: &mut Workspace) -> Result<()> {
        let slices: Vec<ReduxSlice> = match ws.redux_store() {
            Some(store) => store.slices().cloned().collect(),
            None => {
                ws.warn("Redux store is not enabled, skipping lib/core/store");
                return Ok(());
            }
        };

        ws.ensure_dir("lib/core/store");
        let set = ctx
            .registry
            .common(TemplateModule::ReduxStore)
            .ok_or_else(|| Error::TemplateError("no redux store templates".to_string()))?;
        let context = ctx.template_context_with(serde_json::json!({ "slices": slices }))?;
        ctx.apply_set(ws, self.name(), set, &context)?;
        Ok(())
    }
}
