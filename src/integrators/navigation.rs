use super::{patch_shared, Integrator};
use crate::config::{Module, StateManagement};
use crate::constants::ROUTER_PATH;
use crate::error::Result;
use crate::generators::{default_route_feature, page_path, GenerationContext};
use crate::workspace::Workspace;

/// Decides what the app widget shows first.
///
/// * `go_router` (Routing selected): the `.router` constructor fed by `AppRouter.router`
/// * router file without Routing (Feature-Driven): named routes from `AppRouter.routes`
/// * no router: `home:` is the default feature page, or a placeholder screen
pub struct NavigationIntegrator;

impl Integrator for NavigationIntegrator {
    fn name(&self) -> &str {
        "navigation"
    }

    fn integrate(&self, ctx: &GenerationContext<'_>, ws: &mut Workspace) -> Result<()> {
        let config = ctx.config;
        if config.has_router() && !ws.has_file(ROUTER_PATH) {
            ws.warn(format!("'{ROUTER_PATH}' not found, skipping {}", self.name()));
            return Ok(());
        }

        patch_shared(ws, self.name(), |shared| {
            let root = &mut *shared.root;
            if config.has_router() {
                root.add_import(ctx.package.import(ROUTER_PATH));
                if !config.has_module(Module::Routing) {
                    root.set_app_arg("initialRoute", "AppRouter.initialRoute");
                    root.set_app_arg("routes", "AppRouter.routes");
                } else if config.state_management() == StateManagement::GetX {
                    // GetMaterialApp.router takes the router's parts, not a RouterConfig.
                    root.use_router_constructor();
                    root.set_app_arg(
                        "routeInformationParser",
                        "AppRouter.router.routeInformationParser",
                    );
                    root.set_app_arg("routerDelegate", "AppRouter.router.routerDelegate");
                    root.set_app_arg(
                        "routeInformationProvider",
                        "AppRouter.router.routeInformationProvider",
                    );
                } else {
                    root.use_router_constructor();
                    root.set_app_arg("routerConfig", "AppRouter.router");
                }
                return;
            }

            match default_route_feature(config.features()) {
                Some(feature) => {
                    root.add_import(ctx.package.import(&page_path(config.architecture(), feature)));
                    root.set_app_arg("home", &format!("const {}Page()", feature.pascal));
                }
                None => root.set_app_arg(
                    "home",
                    &format!(
                        "const Scaffold(\n  body: Center(child: Text('Welcome to {}')),\n)",
                        config.title()
                    ),
                ),
            }
        });
        Ok(())
    }
}
