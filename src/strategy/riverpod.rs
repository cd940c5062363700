use super::{ServiceSlice, StateSlice, StateWiring};
use crate::config::StateManagement;
use crate::source::Package;
use crate::workspace::SharedFiles;

const FLUTTER_RIVERPOD: &str = "package:flutter_riverpod/flutter_riverpod.dart";

/// Global providers under one `ProviderScope`; the root widget watches them through `ref`.
pub struct RiverpodWiring;

impl StateWiring for RiverpodWiring {
    fn state(&self) -> StateManagement {
        StateManagement::Riverpod
    }

    fn wire_app(&self, _package: &Package, shared: &mut SharedFiles<'_>) {
        shared.entry.add_import(FLUTTER_RIVERPOD);
        shared.entry.add_scope("ProviderScope", &[]);
    }

    fn wire_state(&self, slice: &StateSlice, package: &Package, shared: &mut SharedFiles<'_>) {
        shared.root.require_ref();
        shared.root.add_import(FLUTTER_RIVERPOD);
        let notifier = slice.path(&format!("{}_notifier.dart", slice.noun));
        shared.root.add_import(package.import(&notifier));
        shared.root.add_binding(format!(
            "final {value} = ref.watch({value}Provider);",
            value = slice.value
        ));
        shared.root.set_app_arg(slice.value, slice.value);
    }

    // `apiClientProvider` is global and read through `ref` where needed.
    fn wire_service(
        &self,
        _service: &ServiceSlice,
        _package: &Package,
        _shared: &mut SharedFiles<'_>,
    ) {
    }

    fn wire_error_observer(&self, package: &Package, shared: &mut SharedFiles<'_>) {
        shared
            .entry
            .add_import(package.import("core/error/app_provider_observer.dart"));
        shared
            .entry
            .add_scope(
                "ProviderScope",
                &[("observers", "[const AppProviderObserver()]")],
            );
    }
}
