use super::{GenerationContext, Generator};
use crate::error::Result;
use crate::workspace::Workspace;

/// Directories every generated project has.
pub const BASE_DIRS: [&str; 5] = ["lib", "lib/app", "lib/core", "lib/core/constants", "test"];

/// Base directory layout; feature and module subtrees are added by their generators.
pub struct LayoutGenerator;

impl Generator for LayoutGenerator {
    fn name(&self) -> &str {
        "layout"
    }

    fn generate(&self, ctx: &GenerationContext<'_>, ws: &mut Workspace) -> Result<()> {
        for dir in BASE_DIRS {
            ws.ensure_dir(dir);
        }
        if !ctx.config.features().is_empty() {
            ws.ensure_dir("lib/features");
        }
        Ok(())
    }
}
