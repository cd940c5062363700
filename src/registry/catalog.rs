//! Built-in template sets.

use super::{TemplateModule, TemplateRegistry, TemplateSet, Variant};
use crate::config::{Architecture, StateManagement};
use crate::constants::{versions, L10N_FILE, MANIFEST_FILE};

macro_rules! template {
    ($path:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $path))
    };
}

macro_rules! feature_file {
    ($path:literal) => {
        concat!("lib/features/{{ feature.snake }}/", $path)
    };
}

const FEATURE_PAGE: &str = template!("feature/page.dart.j2");

pub(super) fn register_all(registry: &mut TemplateRegistry) {
    register_manifest(registry);
    register_app(registry);
    register_features(registry);
    register_router(registry);
    register_redux_store(registry);
    register_theme(registry);
    register_localization(registry);
    register_push_notification(registry);
    register_network(registry);
    register_routing(registry);
    register_error_handling(registry);
}

fn state(module: TemplateModule, state: StateManagement) -> (Variant, TemplateSet) {
    let variant = Variant::State(state);
    (variant, TemplateSet::new(module, variant))
}

fn common(module: TemplateModule) -> TemplateSet {
    TemplateSet::new(module, Variant::Common)
}

fn register_manifest(registry: &mut TemplateRegistry) {
    let module = TemplateModule::Manifest;
    registry.register(
        module,
        Variant::Common,
        common(module).file(MANIFEST_FILE, template!("manifest/pubspec.yaml.j2")),
    );
}

fn register_app(registry: &mut TemplateRegistry) {
    let module = TemplateModule::App;
    registry.register(
        module,
        Variant::Common,
        common(module)
            .file(
                "analysis_options.yaml",
                template!("app/analysis_options.yaml.j2"),
            )
            .file(".gitignore", template!("app/gitignore.j2"))
            .file("README.md", template!("app/README.md.j2"))
            .file(
                "lib/core/constants/app_constants.dart",
                template!("app/app_constants.dart.j2"),
            )
            .file(
                "test/app_constants_test.dart",
                template!("app/app_constants_test.dart.j2"),
            ),
    );

    for sm in StateManagement::ALL {
        let (variant, set) = state(module, sm);
        let set = match sm {
            StateManagement::Bloc => set
                .dependency("flutter_bloc", versions::FLUTTER_BLOC)
                .dependency("equatable", versions::EQUATABLE),
            StateManagement::Provider => set.dependency("provider", versions::PROVIDER),
            StateManagement::Riverpod => {
                set.dependency("flutter_riverpod", versions::FLUTTER_RIVERPOD)
            }
            StateManagement::GetX => set.dependency("get", versions::GET),
            StateManagement::MobX => set
                .dependency("mobx", versions::MOBX)
                .dependency("flutter_mobx", versions::FLUTTER_MOBX)
                .dev_dependency("build_runner", versions::BUILD_RUNNER)
                .dev_dependency("mobx_codegen", versions::MOBX_CODEGEN),
            StateManagement::Redux => set
                .dependency("redux", versions::REDUX)
                .dependency("flutter_redux", versions::FLUTTER_REDUX),
            StateManagement::Default => set,
        };
        registry.register(module, variant, set);
    }
}

fn register_features(registry: &mut TemplateRegistry) {
    let module = TemplateModule::Feature;
    for architecture in Architecture::ALL {
        let variant = Variant::Architecture(architecture);
        let set = TemplateSet::new(module, variant).file("lib/{{ feature.page }}", FEATURE_PAGE);
        let set = match architecture {
            Architecture::CleanArchitecture => set
                .file(
                    feature_file!("domain/entities/{{ feature.snake }}_entity.dart"),
                    template!("feature/clean_architecture/entity.dart.j2"),
                )
                .file(
                    feature_file!("domain/repositories/{{ feature.snake }}_repository.dart"),
                    template!("feature/clean_architecture/repository.dart.j2"),
                )
                .file(
                    feature_file!("domain/usecases/get_{{ feature.snake }}.dart"),
                    template!("feature/clean_architecture/usecase.dart.j2"),
                )
                .file(
                    feature_file!("data/models/{{ feature.snake }}_model.dart"),
                    template!("feature/clean_architecture/model.dart.j2"),
                )
                .file(
                    feature_file!("data/repositories/{{ feature.snake }}_repository_impl.dart"),
                    template!("feature/clean_architecture/repository_impl.dart.j2"),
                ),
            Architecture::Mvvm => set
                .file(
                    feature_file!("models/{{ feature.snake }}_model.dart"),
                    template!("feature/mvvm/model.dart.j2"),
                )
                .file(
                    feature_file!("view_models/{{ feature.snake }}_view_model.dart"),
                    template!("feature/mvvm/view_model.dart.j2"),
                ),
            Architecture::Mvc => set
                .file(
                    feature_file!("models/{{ feature.snake }}_model.dart"),
                    template!("feature/mvc/model.dart.j2"),
                )
                .file(
                    feature_file!("controllers/{{ feature.snake }}_controller.dart"),
                    template!("feature/mvc/controller.dart.j2"),
                ),
            Architecture::FeatureDriven => set.file(
                feature_file!("services/{{ feature.snake }}_service.dart"),
                template!("feature/feature_driven/service.dart.j2"),
            ),
        };
        registry.register(module, variant, set);
    }
}

fn register_router(registry: &mut TemplateRegistry) {
    let module = TemplateModule::Router;
    registry.register(
        module,
        Variant::Common,
        common(module).file(crate::constants::ROUTER_PATH, template!("router/app_router.dart.j2")),
    );
}

fn register_redux_store(registry: &mut TemplateRegistry) {
    let module = TemplateModule::ReduxStore;
    registry.register(
        module,
        Variant::Common,
        common(module)
            .file(
                "lib/core/store/app_state.dart",
                template!("redux_store/app_state.dart.j2"),
            )
            .file(
                "lib/core/store/app_reducer.dart",
                template!("redux_store/app_reducer.dart.j2"),
            )
            .file(
                "lib/core/store/store.dart",
                template!("redux_store/store.dart.j2"),
            ),
    );
}

fn register_theme(registry: &mut TemplateRegistry) {
    let module = TemplateModule::Theme;
    registry.register(
        module,
        Variant::Common,
        common(module)
            .file(
                "lib/core/theme/app_colors.dart",
                template!("theme/common/app_colors.dart.j2"),
            )
            .file(
                "lib/core/theme/app_theme.dart",
                template!("theme/common/app_theme.dart.j2"),
            )
            .file(
                "lib/core/theme/theme_preferences.dart",
                template!("theme/common/theme_preferences.dart.j2"),
            )
            .dependency("shared_preferences", versions::SHARED_PREFERENCES),
    );

    for sm in StateManagement::ALL {
        let (variant, set) = state(module, sm);
        let set = match sm {
            StateManagement::Bloc => set
                .file(
                    "lib/core/theme/cubit/theme_cubit.dart",
                    template!("theme/bloc/theme_cubit.dart.j2"),
                )
                .file(
                    "lib/core/theme/cubit/theme_state.dart",
                    template!("theme/bloc/theme_state.dart.j2"),
                ),
            StateManagement::Provider => set.file(
                "lib/core/theme/theme_provider.dart",
                template!("theme/provider/theme_provider.dart.j2"),
            ),
            StateManagement::Riverpod => set.file(
                "lib/core/theme/theme_notifier.dart",
                template!("theme/riverpod/theme_notifier.dart.j2"),
            ),
            StateManagement::GetX => set.file(
                "lib/core/theme/theme_controller.dart",
                template!("theme/getx/theme_controller.dart.j2"),
            ),
            StateManagement::MobX => set.file(
                "lib/core/theme/theme_store.dart",
                template!("theme/mobx/theme_store.dart.j2"),
            ),
            StateManagement::Redux => set
                .file(
                    "lib/core/theme/redux/theme_actions.dart",
                    template!("theme/redux/theme_actions.dart.j2"),
                )
                .file(
                    "lib/core/theme/redux/theme_reducer.dart",
                    template!("theme/redux/theme_reducer.dart.j2"),
                ),
            StateManagement::Default => set.file(
                "lib/core/theme/theme_controller.dart",
                template!("theme/default/theme_controller.dart.j2"),
            ),
        };
        registry.register(module, variant, set);
    }
}

fn register_localization(registry: &mut TemplateRegistry) {
    let module = TemplateModule::Localization;
    registry.register(
        module,
        Variant::Common,
        common(module)
            .file(L10N_FILE, template!("localization/common/l10n.yaml.j2"))
            .file(
                "lib/core/localization/supported_locales.dart",
                template!("localization/common/supported_locales.dart.j2"),
            )
            .sdk_dependency("flutter_localizations", "flutter")
            .dependency("intl", versions::INTL),
    );

    for sm in StateManagement::ALL {
        let (variant, set) = state(module, sm);
        let set = match sm {
            StateManagement::Bloc => set
                .file(
                    "lib/core/localization/cubit/locale_cubit.dart",
                    template!("localization/bloc/locale_cubit.dart.j2"),
                )
                .file(
                    "lib/core/localization/cubit/locale_state.dart",
                    template!("localization/bloc/locale_state.dart.j2"),
                ),
            StateManagement::Provider => set.file(
                "lib/core/localization/locale_provider.dart",
                template!("localization/provider/locale_provider.dart.j2"),
            ),
            StateManagement::Riverpod => set.file(
                "lib/core/localization/locale_notifier.dart",
                template!("localization/riverpod/locale_notifier.dart.j2"),
            ),
            StateManagement::GetX => set.file(
                "lib/core/localization/locale_controller.dart",
                template!("localization/getx/locale_controller.dart.j2"),
            ),
            StateManagement::MobX => set.file(
                "lib/core/localization/locale_store.dart",
                template!("localization/mobx/locale_store.dart.j2"),
            ),
            StateManagement::Redux => set
                .file(
                    "lib/core/localization/redux/locale_actions.dart",
                    template!("localization/redux/locale_actions.dart.j2"),
                )
                .file(
                    "lib/core/localization/redux/locale_reducer.dart",
                    template!("localization/redux/locale_reducer.dart.j2"),
                ),
            StateManagement::Default => set.file(
                "lib/core/localization/locale_controller.dart",
                template!("localization/default/locale_controller.dart.j2"),
            ),
        };
        registry.register(module, variant, set);
    }
}

fn register_push_notification(registry: &mut TemplateRegistry) {
    let module = TemplateModule::PushNotification;
    registry.register(
        module,
        Variant::Common,
        common(module)
            .file(
                "lib/core/notifications/notification_service.dart",
                template!("push_notification/common/notification_service.dart.j2"),
            )
            .file(
                "lib/core/notifications/notification_payload.dart",
                template!("push_notification/common/notification_payload.dart.j2"),
            )
            .dependency("firebase_core", versions::FIREBASE_CORE)
            .dependency("firebase_messaging", versions::FIREBASE_MESSAGING)
            .dependency(
                "flutter_local_notifications",
                versions::FLUTTER_LOCAL_NOTIFICATIONS,
            ),
    );
}

fn register_network(registry: &mut TemplateRegistry) {
    let module = TemplateModule::Network;
    registry.register(
        module,
        Variant::Common,
        common(module)
            .file(
                "lib/core/network/api_client.dart",
                template!("network/common/api_client.dart.j2"),
            )
            .file(
                "lib/core/network/api_endpoints.dart",
                template!("network/common/api_endpoints.dart.j2"),
            )
            .file(
                "lib/core/network/api_exception.dart",
                template!("network/common/api_exception.dart.j2"),
            )
            .file(
                "lib/core/network/network_info.dart",
                template!("network/common/network_info.dart.j2"),
            )
            .dependency("dio", versions::DIO)
            .dependency("connectivity_plus", versions::CONNECTIVITY_PLUS),
    );

    let (variant, set) = state(module, StateManagement::Riverpod);
    registry.register(
        module,
        variant,
        set.file(
            "lib/core/network/api_client_provider.dart",
            template!("network/riverpod/api_client_provider.dart.j2"),
        ),
    );
}

fn register_routing(registry: &mut TemplateRegistry) {
    let module = TemplateModule::Routing;
    registry.register(
        module,
        Variant::Common,
        common(module)
            .file(
                "lib/core/routing/route_names.dart",
                template!("routing/common/route_names.dart.j2"),
            )
            .dependency("go_router", versions::GO_ROUTER),
    );
}

fn register_error_handling(registry: &mut TemplateRegistry) {
    let module = TemplateModule::ErrorHandling;
    registry.register(
        module,
        Variant::Common,
        common(module)
            .file(
                "lib/core/error/error_handler.dart",
                template!("error_handling/common/error_handler.dart.j2"),
            )
            .file(
                "lib/core/error/exceptions.dart",
                template!("error_handling/common/exceptions.dart.j2"),
            )
            .file(
                "lib/core/error/failures.dart",
                template!("error_handling/common/failures.dart.j2"),
            ),
    );

    let (variant, set) = state(module, StateManagement::Bloc);
    registry.register(
        module,
        variant,
        set.file(
            "lib/core/error/app_bloc_observer.dart",
            template!("error_handling/bloc/app_bloc_observer.dart.j2"),
        ),
    );

    let (variant, set) = state(module, StateManagement::Riverpod);
    registry.register(
        module,
        variant,
        set.file(
            "lib/core/error/app_provider_observer.dart",
            template!("error_handling/riverpod/app_provider_observer.dart.j2"),
        ),
    );
}
