use fledge::source::{
    nest, EntryPoint, Package, PatchStage, ProviderFamily, ProviderRegistration, RootWidget,
};

#[test]
fn test_package_import_strips_lib() {
    let package = Package::new("demo_app");
    assert_eq!(
        package.import("lib/app/app.dart"),
        "package:demo_app/app/app.dart"
    );
    assert_eq!(
        package.import("core/theme/app_theme.dart"),
        "package:demo_app/core/theme/app_theme.dart"
    );
}

#[test]
fn test_import_injection_is_idempotent() {
    let mut root = RootWidget::new("App");
    assert!(root.add_import("package:demo_app/core/theme/app_theme.dart"));
    assert!(!root.add_import("package:demo_app/core/theme/app_theme.dart"));
    let rendered = root.render();
    assert_eq!(
        rendered.matches("import 'package:demo_app/core/theme/app_theme.dart';").count(),
        1
    );
    assert_eq!(root.stage(), PatchStage::ImportsPatched);
}

#[test]
fn test_setup_is_deduplicated_and_async_switches_main() {
    let mut entry = EntryPoint::new("App", "package:demo_app/app/app.dart");
    entry.add_setup("final notificationService = NotificationService();");
    entry.add_setup("final notificationService = NotificationService();");
    entry.add_async_setup("await Firebase.initializeApp();");
    let rendered = entry.render();
    assert!(rendered.contains("Future<void> main() async {"));
    assert_eq!(rendered.matches("final notificationService").count(), 1);
    assert!(
        rendered
            .find("WidgetsFlutterBinding.ensureInitialized();")
            .unwrap()
            < rendered.find("await Firebase.initializeApp();").unwrap()
    );
}

#[test]
fn test_families_merge_independently() {
    let mut entry = EntryPoint::new("App", "package:demo_app/app/app.dart");
    entry.register_provider(
        "apiClient",
        ProviderRegistration::new(
            ProviderFamily::Repository,
            "RepositoryProvider<ApiClient>",
            "(_) => ApiClient()",
        ),
    );
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
    assert!(app.starts_with("RepositoryProvider<ApiClient>("));
    assert!(app.contains("MultiBlocProvider("));
    assert!(!app.contains("MultiRepositoryProvider"));
}

#[test]
fn test_zone_guard_wraps_main() {
    let mut entry = EntryPoint::new("App", "package:demo_app/app/app.dart");
    entry.guard_zone("ErrorHandler.onFlutterError", "ErrorHandler.onZoneError");
    let rendered = entry.render();
    assert!(rendered.contains("import 'dart:async';"));
    assert!(rendered.contains("  runZonedGuarded(\n    () async {"));
    assert!(rendered.contains("FlutterError.onError = ErrorHandler.onFlutterError;"));
    assert!(rendered.contains("    ErrorHandler.onZoneError,\n  );"));
}

#[test]
fn test_nest_splices_child() {
    assert_eq!(
        nest("Outer(child: {child})", "Inner()"),
        "Outer(child: Inner())"
    );
}
