//! Common constants used throughout the fledge application.

/// Answer files looked up in the current directory when `--config` is not given
pub const CONFIG_FILES: [&str; 3] = ["fledge.json", "fledge.yml", "fledge.yaml"];

/// Paths listed in this file are never overwritten on a re-run
pub const IGNORE_FILE: &str = ".fledgeignore";

/// Dependency manifest of the generated project
pub const MANIFEST_FILE: &str = "pubspec.yaml";

/// Localization generator configuration of the generated project
pub const L10N_FILE: &str = "l10n.yaml";

/// Locales a localized project ships resource bundles for, the first is the template locale
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "es"];

/// Name of the root application widget class
pub const ROOT_WIDGET: &str = "App";

/// Entry point file, relative to the project root
pub const ENTRY_POINT_PATH: &str = "lib/main.dart";

/// Root widget file, relative to the project root
pub const ROOT_WIDGET_PATH: &str = "lib/app/app.dart";

/// Router file, relative to the project root
pub const ROUTER_PATH: &str = "lib/app/app_router.dart";

/// Dart SDK constraint written into a fresh manifest
pub const DART_SDK_CONSTRAINT: &str = ">=3.3.0 <4.0.0";

/// Versions of every package a generated manifest can reference.
pub mod versions {
    pub const FLUTTER_BLOC: &str = "^8.1.6";
    pub const BLOC: &str = "^8.1.4";
    pub const EQUATABLE: &str = "^2.0.5";
    pub const PROVIDER: &str = "^6.1.2";
    pub const FLUTTER_RIVERPOD: &str = "^2.5.1";
    pub const GET: &str = "^4.6.6";
    pub const MOBX: &str = "^2.3.3";
    pub const FLUTTER_MOBX: &str = "^2.2.1";
    pub const MOBX_CODEGEN: &str = "^2.6.1";
    pub const BUILD_RUNNER: &str = "^2.4.9";
    pub const REDUX: &str = "^5.0.0";
    pub const FLUTTER_REDUX: &str = "^0.10.0";
    pub const SHARED_PREFERENCES: &str = "^2.2.3";
    pub const INTL: &str = "^0.19.0";
    pub const FIREBASE_CORE: &str = "^2.31.0";
    pub const FIREBASE_MESSAGING: &str = "^14.9.2";
    pub const FLUTTER_LOCAL_NOTIFICATIONS: &str = "^17.1.2";
    pub const DIO: &str = "^5.4.3";
    pub const CONNECTIVITY_PLUS: &str = "^6.0.3";
    pub const GO_ROUTER: &str = "^14.1.0";
    pub const FLUTTER_LINTS: &str = "^4.0.0";
}
