use super::{ServiceSlice, StateSlice, StateWiring};
use crate::config::StateManagement;
use crate::source::{Package, ProviderFamily, ProviderRegistration};
use crate::workspace::SharedFiles;

const PROVIDER: &str = "package:provider/provider.dart";

/// `ChangeNotifier` holders registered with `ChangeNotifierProvider`, read through `Consumer`.
pub struct ProviderWiring;

impl StateWiring for ProviderWiring {
    fn state(&self) -> StateManagement {
        StateManagement::Provider
    }

    fn wire_state(&self, slice: &StateSlice, package: &Package, shared: &mut SharedFiles<'_>) {
        let holder = slice.class("Provider");
        let holder_var = slice.instance("Provider");
        let import = package.import(&slice.path(&format!("{}_provider.dart", slice.noun)));

        shared.entry.add_import(PROVIDER);
        shared.entry.add_import(import.clone());
        shared.entry.register_provider(
            slice.noun,
            ProviderRegistration::new(
                ProviderFamily::Provider,
                format!("ChangeNotifierProvider<{holder}>"),
                format!("(_) => {holder}()"),
            ),
        );

        shared.root.add_import(PROVIDER);
        shared.root.add_import(import);
        shared.root.add_builder(
            &format!("consumer:{}", slice.noun),
            &format!(
                "Consumer<{holder}>(\n  builder: (context, {holder_var}, _) => {{child}},\n)"
            ),
        );
        shared
            .root
            .set_app_arg(slice.value, &format!("{holder_var}.{}", slice.value));
    }

    fn wire_service(
        &self,
        service: &ServiceSlice,
        package: &Package,
        shared: &mut SharedFiles<'_>,
    ) {
        shared.entry.add_import(PROVIDER);
        shared.entry.add_import(package.import(service.path));
        shared.entry.register_provider(
            service.instance,
            ProviderRegistration::new(
                ProviderFamily::Provider,
                format!("Provider<{}>", service.class),
                format!("(_) => {}()", service.class),
            ),
        );
    }
}
