use super::{GenerationContext, Generator};
use crate::config::Feature;
use crate::constants::ROUTER_PATH;
use crate::error::{Error, Result};
use crate::registry::TemplateModule;
use crate::workspace::Workspace;

/// Features that can take the `/` route, most preferred first.
const DEFAULT_ROUTE_PREFERENCE: [&str; 3] = ["authentication", "dashboard", "home"];

/// The feature shown at `/`: Authentication, else Dashboard, else Home. `None` means
/// the app falls back to a welcome placeholder.
pub fn default_route_feature(features: &[Feature]) -> Option<&Feature> {
    DEFAULT_ROUTE_PREFERENCE
        .iter()
        .find_map(|snake| features.iter().find(|feature| feature.snake == *snake))
}

/// `lib/app/app_router.dart` with one route per feature.
pub struct RouterGenerator;

impl Generator for RouterGenerator {
    fn name(&self) -> &str {
        "router"
    }

    fn generate(&self, ctx: &GenerationContext<'_>, ws: &mut Workspace) -> Result<()> {
        let set = ctx
            .registry
            .common(TemplateModule::Router)
            .ok_or_else(|| Error::TemplateError(format!("no template for {ROUTER_PATH}")))?;
        let context = ctx.template_context()?;
        ctx.apply_set(ws, self.name(), set, &context)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(names: &[&str]) -> Vec<Feature> {
        names.iter().filter_map(|name| Feature::new(name)).collect()
    }

    #[test]
    fn test_default_route_priority() {
        let all = features(&["Home", "Dashboard", "Authentication"]);
        assert_eq!(default_route_feature(&all).unwrap().snake, "authentication");
        let some = features(&["Settings", "Home", "Dashboard"]);
        assert_eq!(default_route_feature(&some).unwrap().snake, "dashboard");
        let home = features(&["Settings", "Home"]);
        assert_eq!(default_route_feature(&home).unwrap().snake, "home");
        assert!(default_route_feature(&features(&["Settings"])).is_none());
    }
}
