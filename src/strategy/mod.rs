//! State management strategies.
//!
//! Every way the generated app can hold state is one [`StateWiring`] implementation.
//! The implementation is looked up once per run; module integrators describe *what*
//! they need wired (a [`StateSlice`] or a [`ServiceSlice`]) and the strategy decides
//! *how* it appears in the entry point and the root widget.

mod bloc;
mod default;
mod getx;
mod mobx;
mod provider;
mod redux;
mod riverpod;

pub use bloc::BlocWiring;
pub use default::DefaultWiring;
pub use getx::GetXWiring;
pub use mobx::MobXWiring;
pub use provider::ProviderWiring;
pub use redux::ReduxWiring;
pub use riverpod::RiverpodWiring;

use crate::config::{Module, StateManagement};
use crate::source::Package;
use crate::workspace::SharedFiles;
use cruet::Inflector;

/// A piece of app-level state a module contributes to the root app widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSlice {
    pub module: Module,
    /// Lowercase noun naming the state holder, e.g. `theme` for `ThemeCubit`
    pub noun: &'static str,
    /// Directory of the holder under `lib/`
    pub dir: &'static str,
    /// Getter on the holder and named argument of the app widget
    pub value: &'static str,
    /// Dart type of the value
    pub ty: &'static str,
    pub initial: Option<&'static str>,
    /// Async method restoring persisted state, for holders created in `main`
    pub restore: Option<&'static str>,
}

impl StateSlice {
    /// `class("Cubit")` is `ThemeCubit` for the theme slice.
    pub fn class(&self, suffix: &str) -> String {
        format!("{}{}", self.noun.to_pascal_case(), suffix)
    }

    /// `instance("Cubit")` is `themeCubit` for the theme slice.
    pub fn instance(&self, suffix: &str) -> String {
        format!("{}{}", self.noun, suffix)
    }

    /// Path under `lib/` of a file in the slice's directory.
    pub fn path(&self, file: &str) -> String {
        format!("{}/{}", self.dir, file)
    }
}

pub const THEME: StateSlice = StateSlice {
    module: Module::ThemeManager,
    noun: "theme",
    dir: "core/theme",
    value: "themeMode",
    ty: "ThemeMode",
    initial: Some("ThemeMode.system"),
    restore: Some("load"),
};

pub const LOCALE: StateSlice = StateSlice {
    module: Module::Localization,
    noun: "locale",
    dir: "core/localization",
    value: "locale",
    ty: "Locale?",
    initial: None,
    restore: None,
};

/// A service object a module makes available to the widget tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSlice {
    pub module: Module,
    pub class: &'static str,
    pub instance: &'static str,
    /// Path under `lib/` of the file declaring `class`
    pub path: &'static str,
}

pub const API_CLIENT: ServiceSlice = ServiceSlice {
    module: Module::NetworkLayer,
    class: "ApiClient",
    instance: "apiClient",
    path: "core/network/api_client.dart",
};

/// How one state management choice wires modules into the shared files.
pub trait StateWiring {
    fn state(&self) -> StateManagement;

    /// Whether the app keeps a single Redux-style store that slices are folded into.
    fn uses_store(&self) -> bool {
        false
    }

    /// Wiring every app using this state management gets, whatever modules are selected.
    fn wire_app(&self, _package: &Package, _shared: &mut SharedFiles<'_>) {}

    /// Creates the holder of `slice` and feeds its value into the app widget.
    fn wire_state(&self, slice: &StateSlice, package: &Package, shared: &mut SharedFiles<'_>);

    /// Makes `service` reachable from the widget tree.
    fn wire_service(
        &self,
        service: &ServiceSlice,
        package: &Package,
        shared: &mut SharedFiles<'_>,
    ) {
        pass_by_constructor(service, package, shared);
    }

    /// Hooks the state container's own error reporting into the error handler.
    fn wire_error_observer(&self, _package: &Package, _shared: &mut SharedFiles<'_>) {}
}

/// Creates the service in `main` and hands it to the root widget as a constructor argument.
pub(crate) fn pass_by_constructor(
    service: &ServiceSlice,
    package: &Package,
    shared: &mut SharedFiles<'_>,
) {
    let import = package.import(service.path);
    shared.entry.add_import(import.clone());
    shared
        .entry
        .add_setup(format!("final {} = {}();", service.instance, service.class));
    shared
        .entry
        .pass_root_argument(service.instance, service.instance);
    shared.root.add_import(import);
    shared.root.add_param(service.instance, service.class);
}

/// Looks up the wiring of `state`.
pub fn wiring_for(state: StateManagement) -> Box<dyn StateWiring> {
    match state {
        StateManagement::Bloc => Box::new(BlocWiring),
        StateManagement::Provider => Box::new(ProviderWiring),
        StateManagement::Riverpod => Box::new(RiverpodWiring),
        StateManagement::GetX => Box::new(GetXWiring),
        StateManagement::MobX => Box::new(MobXWiring),
        StateManagement::Redux => Box::new(ReduxWiring),
        StateManagement::Default => Box::new(DefaultWiring),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{EntryPoint, RootWidget};

    fn wire(state: StateManagement, slice: &StateSlice) -> (EntryPoint, RootWidget) {
        let package = Package::new("demo_app");
        let mut entry = EntryPoint::new("App", &package.import("app/app.dart"));
        let mut root = RootWidget::new("App");
        let mut store = crate::workspace::ReduxStore::default();
        let wiring = wiring_for(state);
        {
            let mut shared = SharedFiles {
                entry: &mut entry,
                root: &mut root,
                store: Some(&mut store),
            };
            wiring.wire_app(&package, &mut shared);
            wiring.wire_state(slice, &package, &mut shared);
        }
        (entry, root)
    }

    #[test]
    fn test_lookup_matches_state() {
        for state in StateManagement::ALL {
            assert_eq!(wiring_for(state).state(), state);
        }
        assert!(wiring_for(StateManagement::Redux).uses_store());
        assert!(!wiring_for(StateManagement::Bloc).uses_store());
    }

    #[test]
    fn test_slice_names() {
        assert_eq!(THEME.class("Cubit"), "ThemeCubit");
        assert_eq!(LOCALE.instance("Controller"), "localeController");
        assert_eq!(
            THEME.path("cubit/theme_cubit.dart"),
            "core/theme/cubit/theme_cubit.dart"
        );
    }

    #[test]
    fn test_every_state_threads_theme_mode() {
        for state in StateManagement::ALL {
            let (_, root) = wire(state, &THEME);
            assert!(
                root.app_arg("themeMode").is_some(),
                "{state} does not set themeMode"
            );
        }
    }

    #[test]
    fn test_provider_theme_uses_only_provider_symbols() {
        let (entry, root) = wire(StateManagement::Provider, &THEME);
        let text = format!("{}{}", entry.render(), root.render());
        assert!(text.contains("ThemeProvider"));
        let foreign_symbols = [
            "ThemeCubit",
            "Get.find",
            "ref.watch",
            "Observer(",
            "StoreConnector",
            "ThemeController",
        ];
        for foreign in foreign_symbols {
            assert!(!text.contains(foreign), "found {foreign}");
        }
    }

    #[test]
    fn test_default_theme_is_explicit_controller() {
        let (entry, root) = wire(StateManagement::Default, &THEME);
        let main = entry.render();
        assert!(main.contains("final themeController = ThemeController();"));
        assert!(main.contains("await themeController.load();"));
        assert!(main.contains("App(themeController: themeController)"));
        let app = root.render();
        assert!(app.contains("ThemeMode _themeMode = ThemeMode.system;"));
        assert!(app.contains("themeMode: _themeMode,"));
    }
}
