use fledge::config::{Architecture, Module, ProjectConfig, StateManagement};
use fledge::constants::{ENTRY_POINT_PATH, ROOT_WIDGET, ROOT_WIDGET_PATH};
use fledge::generators::GenerationContext;
use fledge::integrators::{integrator_for, Integrator, NavigationIntegrator};
use fledge::registry::TemplateRegistry;
use fledge::renderer::MiniJinjaRenderer;
use fledge::source::RootWidget;
use fledge::strategy::wiring_for;
use fledge::workspace::Workspace;
use test_log::test;

fn config(state: StateManagement) -> ProjectConfig {
    ProjectConfig::new(
        "demo_app",
        Architecture::Mvc,
        state,
        ["Home"],
        [Module::ThemeManager],
    )
    .unwrap()
}

#[test]
fn test_integrators_skip_without_shared_files() {
    let config = config(StateManagement::Bloc);
    let registry = TemplateRegistry::builtin();
    let renderer = MiniJinjaRenderer::new();
    let wiring = wiring_for(config.state_management());
    let ctx = GenerationContext::new(&config, &registry, &renderer, wiring.as_ref());

    let mut integrators: Vec<Box<dyn Integrator>> =
        Module::ALL.into_iter().filter_map(integrator_for).collect();
    integrators.push(Box::new(NavigationIntegrator));

    for integrator in &integrators {
        let mut ws = Workspace::new("/tmp/demo_app");
        integrator.integrate(&ctx, &mut ws).unwrap();

        assert_eq!(
            ws.warnings(),
            [format!("'{ROOT_WIDGET_PATH}' not found, skipping {}", integrator.name())]
        );
        assert!(ws.entry_point().is_none());
        assert!(ws.root_widget().is_none());
        assert_eq!(ws.files().count(), 0);
        assert_eq!(ws.dirs().count(), 0);
        assert!(ws.manifest().is_none());
    }
}

#[test]
fn test_missing_entry_point_leaves_root_widget_alone() {
    let config = config(StateManagement::Provider);
    let registry = TemplateRegistry::builtin();
    let renderer = MiniJinjaRenderer::new();
    let wiring = wiring_for(config.state_management());
    let ctx = GenerationContext::new(&config, &registry, &renderer, wiring.as_ref());

    let mut ws = Workspace::new("/tmp/demo_app");
    ws.set_root_widget(RootWidget::new(ROOT_WIDGET));
    let before = ws.root_widget().unwrap().render();

    let theme = integrator_for(Module::ThemeManager).unwrap();
    theme.integrate(&ctx, &mut ws).unwrap();

    assert_eq!(
        ws.warnings(),
        [format!("'{ENTRY_POINT_PATH}' not found, skipping {}", theme.name())]
    );
    assert_eq!(ws.root_widget().unwrap().render(), before);
    assert!(ws.entry_point().is_none());
}
