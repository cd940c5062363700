use fledge::config::{
    find_config_file, is_valid_project_name, load_answers, parse_answers, Answers,
    Architecture, Module, ProjectConfig, StateManagement,
};
use fledge::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_project_name_predicate() {
    assert!(is_valid_project_name("my_app"));
    assert!(is_valid_project_name("_private"));
    assert!(is_valid_project_name("app2"));
    assert!(!is_valid_project_name("MyApp"));
    assert!(!is_valid_project_name("1app"));
    assert!(!is_valid_project_name("my-app"));
    assert!(!is_valid_project_name(""));
}

#[test]
fn test_invalid_name_is_fatal() {
    let result = ProjectConfig::new(
        "MyApp",
        Architecture::Mvc,
        StateManagement::Default,
        Vec::<String>::new(),
        [],
    );
    assert!(matches!(result, Err(Error::InvalidProjectName { .. })));
}

#[test]
fn test_lenient_parsing() {
    assert_eq!(
        Architecture::parse("Clean Architecture"),
        Some(Architecture::CleanArchitecture)
    );
    assert_eq!(
        Architecture::parse("feature_driven"),
        Some(Architecture::FeatureDriven)
    );
    assert_eq!(Architecture::parse("mvvm"), Some(Architecture::Mvvm));
    assert_eq!(Architecture::parse("hexagonal"), None);

    assert_eq!(StateManagement::parse("BLoC"), StateManagement::Bloc);
    assert_eq!(StateManagement::parse("GetX"), StateManagement::GetX);
    assert_eq!(StateManagement::parse("signals"), StateManagement::Default);

    assert_eq!(Module::parse("Theme Manager"), Some(Module::ThemeManager));
    assert_eq!(Module::parse("network-layer"), Some(Module::NetworkLayer));
    assert_eq!(Module::parse("analytics"), None);
}

#[test]
fn test_from_answers_defaults_and_fallbacks() {
    let answers = Answers {
        project_name: Some("demo_app".to_string()),
        architecture: Some("Onion".to_string()),
        state_management: Some("Unknown".to_string()),
        features: Some(vec!["Home".into(), "home".into(), "  ".into(), "User Profile".into()]),
        modules: Some(vec!["Routing".into(), "Analytics".into(), "Theme Manager".into()]),
        post_generate: Vec::new(),
    };
    let config = ProjectConfig::from_answers(&answers).unwrap();

    assert_eq!(config.architecture(), Architecture::CleanArchitecture);
    assert_eq!(config.state_management(), StateManagement::Default);
    let features: Vec<&str> = config.features().iter().map(|f| f.snake.as_str()).collect();
    assert_eq!(features, vec!["home", "user_profile"]);
    let modules: Vec<Module> = config.modules().collect();
    assert_eq!(modules, vec![Module::ThemeManager, Module::Routing]);
    assert!(config.has_router());
    assert_eq!(config.title(), "Demo App");
}

#[test]
fn test_missing_project_name() {
    let result = ProjectConfig::from_answers(&Answers::default());
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_name_with_surrounding_whitespace_is_rejected() {
    assert!(!is_valid_project_name(" my_app "));
    let answers = Answers {
        project_name: Some(" my_app ".to_string()),
        ..Default::default()
    };
    let result = ProjectConfig::from_answers(&answers);
    assert!(matches!(result, Err(Error::InvalidProjectName { name }) if name == " my_app "));

    let blank = Answers {
        project_name: Some("   ".to_string()),
        ..Default::default()
    };
    assert!(matches!(ProjectConfig::from_answers(&blank), Err(Error::ConfigError(_))));
}

#[test]
fn test_router_only_for_feature_driven_or_routing() {
    let mvc = ProjectConfig::new(
        "app",
        Architecture::Mvc,
        StateManagement::Bloc,
        ["Home"],
        [],
    )
    .unwrap();
    assert!(!mvc.has_router());
    let fd = ProjectConfig::new(
        "app",
        Architecture::FeatureDriven,
        StateManagement::Bloc,
        ["Home"],
        [],
    )
    .unwrap();
    assert!(fd.has_router());
}

#[test]
fn test_parse_answers_json_then_yaml() {
    let json = r#"{"project_name": "demo_app", "modules": ["Routing"]}"#;
    let answers = parse_answers(json).unwrap();
    assert_eq!(answers.project_name.as_deref(), Some("demo_app"));
    assert_eq!(answers.modules, Some(vec!["Routing".to_string()]));

    let yaml = concat!(
        "project_name: demo_app\n",
        "state_management: Riverpod\n",
        "post_generate:\n",
        "  - flutter pub get\n",
    );
    let answers = parse_answers(yaml).unwrap();
    assert_eq!(answers.state_management.as_deref(), Some("Riverpod"));
    assert_eq!(answers.post_generate, vec!["flutter pub get".to_string()]);

    assert!(parse_answers("project_name: [unclosed").is_err());
    assert_eq!(parse_answers("  \n").unwrap(), Answers::default());
}

#[test]
fn test_merge_precedence() {
    let file = Answers {
        project_name: Some("from_file".into()),
        architecture: Some("MVC".into()),
        post_generate: vec!["flutter pub get".into()],
        ..Default::default()
    };
    let flags = Answers {
        project_name: Some("from_flags".into()),
        ..Default::default()
    };
    let merged = file.merge(flags);

    assert_eq!(merged.project_name.as_deref(), Some("from_flags"));
    assert_eq!(merged.architecture.as_deref(), Some("MVC"));
    assert_eq!(merged.post_generate, vec!["flutter pub get".to_string()]);
}

#[test]
fn test_find_and_load_config_file() {
    let tmp = TempDir::new().unwrap();
    assert!(find_config_file(tmp.path()).is_none());

    fs::write(tmp.path().join("fledge.yaml"), "project_name: from_yaml\n").unwrap();
    fs::write(
        tmp.path().join("fledge.json"),
        r#"{"project_name": "from_json"}"#,
    )
    .unwrap();
    let found = find_config_file(tmp.path()).unwrap();
    assert_eq!(found, tmp.path().join("fledge.json"));
    assert_eq!(
        load_answers(found).unwrap().project_name.as_deref(),
        Some("from_json")
    );

    assert!(load_answers(tmp.path().join("missing.json")).is_err());
}
