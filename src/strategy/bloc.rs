use super::{ServiceSlice, StateSlice, StateWiring};
use crate::config::StateManagement;
use crate::source::{Package, ProviderFamily, ProviderRegistration};
use crate::workspace::SharedFiles;

const FLUTTER_BLOC: &str = "package:flutter_bloc/flutter_bloc.dart";

/// One cubit per slice, provided above the app and read through `BlocBuilder`.
pub struct BlocWiring;

impl StateWiring for BlocWiring {
    fn state(&self) -> StateManagement {
        StateManagement::Bloc
    }

    fn wire_state(&self, slice: &StateSlice, package: &Package, shared: &mut SharedFiles<'_>) {
        let cubit = slice.class("Cubit");
        let state = slice.class("State");
        let state_var = slice.instance("State");
        let import = package.import(&slice.path(&format!("cubit/{}_cubit.dart", slice.noun)));

        shared.entry.add_import(FLUTTER_BLOC);
        shared.entry.add_import(import.clone());
        shared.entry.register_provider(
            slice.noun,
            ProviderRegistration::new(
                ProviderFamily::Bloc,
                format!("BlocProvider<{cubit}>"),
                format!("(_) => {cubit}()"),
            ),
        );

        shared.root.add_import(FLUTTER_BLOC);
        shared.root.add_import(import);
        shared.root.add_builder(
            &format!("bloc:{}", slice.noun),
            &format!(
                "BlocBuilder<{cubit}, {state}>(\n  builder: (context, {state_var}) => {{child}},\n)"
            ),
        );
        shared
            .root
            .set_app_arg(slice.value, &format!("{state_var}.{}", slice.value));
    }

    fn wire_service(
        &self,
        service: &ServiceSlice,
        package: &Package,
        shared: &mut SharedFiles<'_>,
    ) {
        shared.entry.add_import(FLUTTER_BLOC);
        shared.entry.add_import(package.import(service.path));
        shared.entry.register_provider(
            service.instance,
            ProviderRegistration::new(
                ProviderFamily::Repository,
                format!("RepositoryProvider<{}>", service.class),
                format!("(_) => {}()", service.class),
            ),
        );
    }

    fn wire_error_observer(&self, package: &Package, shared: &mut SharedFiles<'_>) {
        shared.entry.add_import(FLUTTER_BLOC);
        shared
            .entry
            .add_import(package.import("core/error/app_bloc_observer.dart"));
        shared
            .entry
            .add_setup("Bloc.observer = const AppBlocObserver();");
    }
}
