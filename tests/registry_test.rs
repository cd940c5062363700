use fledge::config::{Architecture, StateManagement};
use fledge::registry::{TemplateModule, TemplateRegistry, Variant};
use std::collections::HashSet;

#[test]
fn test_state_branches_are_distinct_and_non_empty() {
    let registry = TemplateRegistry::builtin();
    for module in [TemplateModule::Theme, TemplateModule::Localization] {
        let mut ids = HashSet::new();
        for state in StateManagement::ALL {
            let set = registry.select(module, state).unwrap();
            assert!(!set.files.is_empty(), "{} is empty", set.id);
            assert_eq!(set.id, format!("{}/{}", module.key(), state.key()));
            assert!(ids.insert(set.id.clone()));
        }
        assert_eq!(ids.len(), StateManagement::ALL.len());
    }
}

#[test]
fn test_every_state_selects_an_app_branch() {
    let registry = TemplateRegistry::builtin();
    for state in StateManagement::ALL {
        assert!(registry.select(TemplateModule::App, state).is_some());
    }
    let bloc = registry
        .select(TemplateModule::App, StateManagement::Bloc)
        .unwrap();
    assert!(bloc.dependencies.iter().any(|d| d.name == "flutter_bloc"));
    let default = registry
        .select(TemplateModule::App, StateManagement::Default)
        .unwrap();
    assert!(default.is_empty());
}

#[test]
fn test_unregistered_state_branch_is_absent() {
    let registry = TemplateRegistry::builtin();
    assert!(registry
        .select(TemplateModule::Network, StateManagement::Bloc)
        .is_none());
    let applicable = registry.applicable(TemplateModule::Network, StateManagement::Bloc);
    assert_eq!(applicable.len(), 1);
    assert_eq!(applicable[0].id, "network/common");

    let applicable = registry.applicable(TemplateModule::Network, StateManagement::Riverpod);
    let ids: Vec<&str> = applicable.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["network/common", "network/riverpod"]);
}

#[test]
fn test_every_architecture_has_a_feature_branch() {
    let registry = TemplateRegistry::builtin();
    for architecture in Architecture::ALL {
        let set = registry
            .for_architecture(TemplateModule::Feature, architecture)
            .unwrap();
        assert!(set.files.iter().any(|f| f.path == "lib/{{ feature.page }}"));
    }
    assert_eq!(
        registry.branches(TemplateModule::Feature).count(),
        Architecture::ALL.len()
    );
}

#[test]
fn test_common_branches() {
    let registry = TemplateRegistry::builtin();
    let theme = registry.common(TemplateModule::Theme).unwrap();
    assert!(theme
        .dependencies
        .iter()
        .any(|d| d.name == "shared_preferences"));
    let routing = registry.common(TemplateModule::Routing).unwrap();
    assert!(routing.dependencies.iter().any(|d| d.name == "go_router"));
    assert!(registry
        .get(TemplateModule::Router, Variant::Common)
        .is_some());
}
