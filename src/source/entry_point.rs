//! Model of `lib/main.dart`.

use super::{indent, list_literal, named_call, ImportSet, PatchStage};
use indexmap::{IndexMap, IndexSet};

/// Provider wrappers that can be merged into one multi-wrapper.
///
/// Families render outermost first in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProviderFamily {
    /// `RepositoryProvider` / `MultiRepositoryProvider`
    Repository,
    /// `BlocProvider` / `MultiBlocProvider`
    Bloc,
    /// Any `package:provider` provider / `MultiProvider`
    Provider,
}

impl ProviderFamily {
    const ALL: [ProviderFamily; 3] = [Self::Repository, Self::Bloc, Self::Provider];

    fn multi_callee(&self) -> &'static str {
        match self {
            Self::Repository => "MultiRepositoryProvider",
            Self::Bloc => "MultiBlocProvider",
            Self::Provider => "MultiProvider",
        }
    }
}

/// A provider wrapping the root widget, e.g. `BlocProvider<ThemeCubit>(create: ...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRegistration {
    pub family: ProviderFamily,
    /// Constructor including type arguments, e.g. `BlocProvider<ThemeCubit>`
    pub constructor: String,
    /// Value of the `create:` argument, e.g. `(_) => ThemeCubit()`
    pub create: String,
}

impl ProviderRegistration {
    pub fn new<C: Into<String>, F: Into<String>>(
        family: ProviderFamily,
        constructor: C,
        create: F,
    ) -> Self {
        Self {
            family,
            constructor: constructor.into(),
            create: create.into(),
        }
    }

    fn as_list_item(&self) -> String {
        format!("{}(create: {})", self.constructor, self.create)
    }

    fn wrapping(&self, child: &str) -> String {
        named_call(
            &self.constructor,
            &[
                ("create".to_string(), self.create.clone()),
                ("child".to_string(), child.to_string()),
            ],
        )
    }
}

/// A wrapper outside every provider, such as `ProviderScope` or `StoreProvider`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Scope {
    callee: String,
    args: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ZoneGuard {
    on_flutter_error: String,
    on_zone_error: String,
}

/// The process entry point of the generated application.
#[derive(Debug, Clone)]
pub struct EntryPoint {
    imports: ImportSet,
    setup: IndexSet<String>,
    is_async: bool,
    zone_guard: Option<ZoneGuard>,
    providers: IndexMap<String, ProviderRegistration>,
    scopes: Vec<Scope>,
    root_class: String,
    root_args: IndexMap<String, String>,
    stage: PatchStage,
}

impl EntryPoint {
    /// Creates an entry point that runs `root_class`, imported from `root_import`.
    pub fn new(root_class: &str, root_import: &str) -> Self {
        let mut imports = ImportSet::new();
        imports.insert("package:flutter/material.dart");
        imports.insert(root_import);
        Self {
            imports,
            setup: IndexSet::new(),
            is_async: false,
            zone_guard: None,
            providers: IndexMap::new(),
            scopes: Vec::new(),
            root_class: root_class.to_string(),
            root_args: IndexMap::new(),
            stage: PatchStage::Untouched,
        }
    }

    pub fn stage(&self) -> PatchStage {
        self.stage
    }

    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    pub fn add_import<S: Into<String>>(&mut self, uri: S) -> bool {
        self.stage.advance(PatchStage::ImportsPatched);
        self.imports.insert(uri)
    }

    /// Appends a statement executed after `WidgetsFlutterBinding.ensureInitialized()`.
    pub fn add_setup<S: Into<String>>(&mut self, statement: S) -> bool {
        self.setup.insert(statement.into())
    }

    /// Like [`EntryPoint::add_setup`] for statements that `await`; makes `main` async.
    pub fn add_async_setup<S: Into<String>>(&mut self, statement: S) -> bool {
        self.is_async = true;
        self.add_setup(statement)
    }

    pub fn setup(&self) -> impl Iterator<Item = &str> {
        self.setup.iter().map(String::as_str)
    }

    pub fn is_async(&self) -> bool {
        self.is_async || self.zone_guard.is_some()
    }

    /// Registers a provider under `key`. A key registered twice keeps the first registration.
    pub fn register_provider<K: Into<String>>(
        &mut self,
        key: K,
        registration: ProviderRegistration,
    ) -> bool {
        self.stage.advance(PatchStage::WrapperEstablished);
        let key = key.into();
        if self.providers.contains_key(&key) {
            return false;
        }
        self.providers.insert(key, registration);
        true
    }

    pub fn providers(&self) -> impl Iterator<Item = &ProviderRegistration> {
        self.providers.values()
    }

    /// Adds an outer wrapper. Scopes are identified by callee; a second call with the same
    /// callee only merges its arguments.
    pub fn add_scope(&mut self, callee: &str, args: &[(&str, &str)]) {
        self.stage.advance(PatchStage::WrapperEstablished);
        let index = match self.scopes.iter().position(|scope| scope.callee == callee) {
            Some(index) => index,
            None => {
                self.scopes.push(Scope {
                    callee: callee.to_string(),
                    args: IndexMap::new(),
                });
                self.scopes.len() - 1
            }
        };
        for (name, value) in args {
            self.scopes[index]
                .args
                .insert((*name).to_string(), (*value).to_string());
        }
    }

    pub fn has_scope(&self, callee: &str) -> bool {
        self.scopes.iter().any(|scope| scope.callee == callee)
    }

    /// Runs the whole body inside `runZonedGuarded` and installs a framework error handler.
    pub fn guard_zone(&mut self, on_flutter_error: &str, on_zone_error: &str) {
        self.stage.advance(PatchStage::WrapperEstablished);
        self.imports.insert("dart:async");
        self.zone_guard = Some(ZoneGuard {
            on_flutter_error: on_flutter_error.to_string(),
            on_zone_error: on_zone_error.to_string(),
        });
    }

    /// Passes a named argument to the root widget constructor.
    pub fn pass_root_argument(&mut self, name: &str, value: &str) {
        self.stage.advance(PatchStage::FieldsThreaded);
        self.root_args.insert(name.to_string(), value.to_string());
    }

    pub fn root_invocation(&self) -> String {
        if self.root_args.is_empty() {
            return format!("const {}()", self.root_class);
        }
        let args = self
            .root_args
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", self.root_class, args)
    }

    /// Builds the expression passed to `runApp`.
    ///
    /// Each provider family with a single registration renders its single wrapper; two or
    /// more registrations of a family render the family's multi-wrapper.
    pub fn app_expression(&self) -> String {
        let mut expr = self.root_invocation();

        for family in ProviderFamily::ALL.iter().rev() {
            let members: Vec<&ProviderRegistration> = self
                .providers
                .values()
                .filter(|p| p.family == *family)
                .collect();
            expr = match members.as_slice() {
                [] => expr,
                [single] => single.wrapping(&expr),
                many => named_call(
                    family.multi_callee(),
                    &[
                        (
                            "providers".to_string(),
                            list_literal(
                                &many.iter().map(|p| p.as_list_item()).collect::<Vec<_>>(),
                            ),
                        ),
                        ("child".to_string(), expr),
                    ],
                ),
            };
        }

        for scope in self.scopes.iter().rev() {
            let mut args: Vec<(String, String)> = scope
                .args
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            args.push(("child".to_string(), expr));
            expr = named_call(&scope.callee, &args);
        }

        expr
    }

    fn body(&self) -> String {
        let mut lines = vec!["WidgetsFlutterBinding.ensureInitialized();".to_string()];
        if let Some(guard) = &self.zone_guard {
            lines.push(format!("FlutterError.onError = {};", guard.on_flutter_error));
        }
        lines.extend(self.setup.iter().cloned());

        let app = self.app_expression();
        if app.contains('\n') {
            lines.push(format!("runApp(\n{},\n);", indent(&app, 2)));
        } else {
            lines.push(format!("runApp({app});"));
        }
        lines.join("\n")
    }

    pub fn render(&self) -> String {
        let mut out = self.imports.render();
        out.push('\n');

        match &self.zone_guard {
            Some(guard) => {
                out.push_str("void main() {\n");
                out.push_str("  runZonedGuarded(\n");
                out.push_str("    () async {\n");
                out.push_str(&indent(&self.body(), 6));
                out.push_str("\n    },\n");
                out.push_str(&format!("    {},\n", guard.on_zone_error));
                out.push_str("  );\n");
                out.push_str("}\n");
            }
            None => {
                if self.is_async {
                    out.push_str("Future<void> main() async {\n");
                } else {
                    out.push_str("void main() {\n");
                }
                out.push_str(&indent(&self.body(), 2));
                out.push_str("\n}\n");
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> EntryPoint {
        EntryPoint::new("App", "package:demo_app/app/app.dart")
    }

    #[test]
    fn test_bare_entry_point() {
        let rendered = entry().render();
        assert!(rendered.contains("void main() {\n  WidgetsFlutterBinding.ensureInitialized();"));
        assert!(rendered.contains("  runApp(const App());\n}"));
        assert_eq!(entry().stage(), PatchStage::Untouched);
    }

    #[test]
    fn test_single_provider_renders_single_wrapper() {
        let mut entry = entry();
        entry.register_provider(
            "theme",
            ProviderRegistration::new(
                ProviderFamily::Bloc,
                "BlocProvider<ThemeCubit>",
                "(_) => ThemeCubit()",
            ),
        );
        let rendered = entry.render();
        assert!(rendered.contains(concat!(
            "BlocProvider<ThemeCubit>(\n",
            "      create: (_) => ThemeCubit(),\n",
            "      child: const App(),"
        )));
        assert!(!rendered.contains("MultiBlocProvider"));
    }

    #[test]
    fn test_second_provider_converts_to_multi_wrapper() {
        let mut entry = entry();
        entry.register_provider(
            "theme",
            ProviderRegistration::new(
                ProviderFamily::Bloc,
                "BlocProvider<ThemeCubit>",
                "(_) => ThemeCubit()",
            ),
        );
        entry.register_provider(
            "locale",
            ProviderRegistration::new(
                ProviderFamily::Bloc,
                "BlocProvider<LocaleCubit>",
                "(_) => LocaleCubit()",
            ),
        );
        let app = entry.app_expression();
        assert!(app.starts_with("MultiBlocProvider(\n  providers: [\n"));
        assert!(app.contains("    BlocProvider<ThemeCubit>(create: (_) => ThemeCubit()),\n"));
        assert!(app.contains("    BlocProvider<LocaleCubit>(create: (_) => LocaleCubit()),\n"));
        assert!(app.ends_with("  child: const App(),\n)"));
    }

    #[test]
    fn test_duplicate_provider_key_is_ignored() {
        let mut entry = entry();
        let registration = ProviderRegistration::new(
            ProviderFamily::Provider,
            "ChangeNotifierProvider<ThemeProvider>",
            "(_) => ThemeProvider()",
        );
        assert!(entry.register_provider("theme", registration.clone()));
        assert!(!entry.register_provider("theme", registration));
        assert_eq!(entry.providers().count(), 1);
    }

    #[test]
    fn test_scopes_wrap_outside_providers() {
        let mut entry = entry();
        entry.register_provider(
            "api",
            ProviderRegistration::new(
                ProviderFamily::Provider,
                "Provider<ApiClient>",
                "(_) => ApiClient()",
            ),
        );
        entry.add_scope("ProviderScope", &[]);
        entry.add_scope("ProviderScope", &[("observers", "[AppProviderObserver()]")]);
        let app = entry.app_expression();
        assert!(app.starts_with(concat!(
            "ProviderScope(\n",
            "  observers: [AppProviderObserver()],\n",
            "  child: Provider<ApiClient>("
        )));
    }

    #[test]
    fn test_async_setup_and_root_arguments() {
        let mut entry = entry();
        entry.add_setup("final themeController = ThemeController();");
        entry.add_async_setup("await Firebase.initializeApp();");
        entry.add_async_setup("await Firebase.initializeApp();");
        entry.pass_root_argument("themeController", "themeController");
        let rendered = entry.render();
        assert!(rendered.contains("Future<void> main() async {"));
        assert_eq!(
            rendered.matches("await Firebase.initializeApp();").count(),
            1
        );
        assert!(rendered.contains("runApp(App(themeController: themeController));"));
        assert_eq!(entry.stage(), PatchStage::FieldsThreaded);
    }

    #[test]
    fn test_zone_guard() {
        let mut entry = entry();
        entry.guard_zone("ErrorHandler.onFlutterError", "ErrorHandler.onZoneError");
        let rendered = entry.render();
        assert!(rendered.contains("import 'dart:async';"));
        assert!(rendered.contains(concat!(
            "  runZonedGuarded(\n",
            "    () async {\n",
            "      WidgetsFlutterBinding.ensureInitialized();\n",
            "      FlutterError.onError = ErrorHandler.onFlutterError;"
        )));
        assert!(rendered.contains("    ErrorHandler.onZoneError,\n  );\n}\n"));
    }
}
