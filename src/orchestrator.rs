//! Generation runs: planning the task graph, executing it and writing the result.

use crate::config::{Module, ProjectConfig};
use crate::constants::IGNORE_FILE;
use crate::error::{Error, Result};
use crate::generators::{
    generator_for, AppGenerator, FeatureGenerator, GenerationContext, Generator,
    LayoutGenerator, ReduxStoreGenerator, RouterGenerator,
};
use crate::ignore::parse_ignore_file;
use crate::integrators::{integrator_for, Integrator, NavigationIntegrator};
use crate::materializer::{materialize, WriteAction, WrittenFile};
use crate::pipeline::{Task, TaskGraph};
use crate::registry::TemplateRegistry;
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use crate::strategy::wiring_for;
use crate::workspace::Workspace;
use indexmap::IndexSet;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Outcome of a generation run.
#[derive(Debug)]
pub struct GenerationReport {
    pub project_root: PathBuf,
    /// Files that were created, updated or already up to date
    pub written: Vec<WrittenFile>,
    /// Existing files left alone because `.fledgeignore` lists them
    pub protected: Vec<PathBuf>,
    pub warnings: Vec<String>,
    /// Tasks that completed, in execution order
    pub executed: Vec<Task>,
}

impl GenerationReport {
    pub fn created(&self) -> impl Iterator<Item = &WrittenFile> {
        self.written
            .iter()
            .filter(|file| file.action == WriteAction::Created)
    }
}

/// A workspace assembled in memory, before anything is written.
#[derive(Debug)]
pub struct Build {
    pub workspace: Workspace,
    pub executed: Vec<Task>,
    /// Tasks that failed or were skipped because a task they depend on did not complete
    pub incomplete: Vec<Task>,
}

/// The tasks generating `config`, with their ordering constraints.
pub fn plan(config: &ProjectConfig) -> TaskGraph {
    let mut graph = TaskGraph::new();
    let features: Vec<Task> = config
        .features()
        .iter()
        .map(|f| Task::Feature(f.snake.clone()))
        .collect();
    let modules: Vec<Module> = config.modules().collect();
    let integrated: Vec<Module> = modules
        .iter()
        .copied()
        .filter(|m| integrator_for(*m).is_some())
        .collect();

    graph.add_task(Task::Layout);
    graph.add_task(Task::App);
    for feature in &features {
        graph.add_task(feature.clone());
    }
    if config.has_router() {
        graph.add_task(Task::Router);
    }
    for module in &modules {
        graph.add_task(Task::Module(*module));
    }
    for module in &integrated {
        graph.add_task(Task::Integrate(*module));
    }
    graph.add_task(Task::Navigation);
    if wiring_for(config.state_management()).uses_store() {
        graph.add_task(Task::ReduxStore);
    }

    graph.add_edge(&Task::Layout, &Task::App);
    for feature in &features {
        graph.add_edge(&Task::Layout, feature);
        graph.add_edge(feature, &Task::Router);
        graph.add_edge(feature, &Task::Navigation);
    }
    graph.add_edge(&Task::App, &Task::Router);
    graph.add_edge(&Task::App, &Task::Navigation);
    graph.add_edge(&Task::Router, &Task::Navigation);
    for module in &modules {
        graph.add_edge(&Task::App, &Task::Module(*module));
    }
    for module in &integrated {
        let integrate = Task::Integrate(*module);
        graph.add_edge(&Task::App, &integrate);
        graph.add_edge(&Task::Module(*module), &integrate);
        graph.add_edge(&integrate, &Task::ReduxStore);
    }
    let localization = Task::Integrate(Module::Localization);
    graph.add_edge(&Task::Integrate(Module::ThemeManager), &localization);
    graph.add_edge(&Task::Integrate(Module::NetworkLayer), &localization);
    graph.add_edge(&Task::App, &Task::ReduxStore);
    graph
}

/// Runs generation runs against the built-in templates.
pub struct Orchestrator {
    registry: TemplateRegistry,
    renderer: Box<dyn TemplateRenderer>,
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Orchestrator {
    pub fn new() -> Self {
        Self::with_registry(TemplateRegistry::builtin())
    }

    pub fn with_registry(registry: TemplateRegistry) -> Self {
        Self {
            registry,
            renderer: Box::new(MiniJinjaRenderer::new()),
        }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    fn run_task(&self, task: &Task, ctx: &GenerationContext<'_>, ws: &mut Workspace) -> Result<()> {
        match task {
            Task::Layout => LayoutGenerator.generate(ctx, ws),
            Task::App => AppGenerator.generate(ctx, ws),
            Task::Feature(snake) => {
                let feature = ctx
                    .config
                    .features()
                    .iter()
                    .find(|f| &f.snake == snake)
                    .ok_or_else(|| Error::PipelineError(format!("unknown feature '{snake}'")))?;
                FeatureGenerator::new(feature.clone()).generate(ctx, ws)
            }
            Task::Router => RouterGenerator.generate(ctx, ws),
            Task::Module(module) => generator_for(*module).generate(ctx, ws),
            Task::Integrate(module) => match integrator_for(*module) {
                Some(integrator) => integrator.integrate(ctx, ws),
                None => Ok(()),
            },
            Task::Navigation => NavigationIntegrator.integrate(ctx, ws),
            Task::ReduxStore => ReduxStoreGenerator.generate(ctx, ws),
        }
    }

    /// Assembles the project for `config` in memory, rooted at `project_root`.
    ///
    /// A failing task is recorded as a warning; the tasks depending on it are skipped and
    /// every other task still runs.
    ///
    /// # Errors
    /// * `Error::PipelineError` if the task graph has a cycle
    pub fn build<P: AsRef<Path>>(&self, config: &ProjectConfig, project_root: P) -> Result<Build> {
        let graph = plan(config);
        let order = graph.execution_order()?;
        debug!(
            "Execution order: {}",
            order
                .iter()
                .map(Task::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );

        let wiring = wiring_for(config.state_management());
        let ctx = GenerationContext::new(config, &self.registry, &*self.renderer, &*wiring);
        let mut ws = Workspace::new(project_root);
        let mut executed = Vec::new();
        let mut incomplete: IndexSet<Task> = IndexSet::new();

        for task in order {
            if let Some(blocker) = graph
                .dependencies_of(&task)
                .into_iter()
                .find(|dep| incomplete.contains(*dep))
            {
                ws.warn(format!("skipping {task}: {blocker} did not complete"));
                incomplete.insert(task);
                continue;
            }
            debug!("Running {}", task);
            match self.run_task(&task, &ctx, &mut ws) {
                Ok(()) => executed.push(task),
                Err(e) => {
                    ws.warn(format!("{task} failed: {e}"));
                    incomplete.insert(task);
                }
            }
        }

        Ok(Build {
            workspace: ws,
            executed,
            incomplete: incomplete.into_iter().collect(),
        })
    }

    /// Generates `config` into `<output_dir>/<project name>`.
    ///
    /// # Errors
    /// * `Error::OutputDirectoryExistsError` if the project directory exists and `force`
    ///   is not set
    /// * `Error::IgnoreError` if `.fledgeignore` has an invalid pattern
    /// * errors of [`Orchestrator::build`]
    pub fn run<P: AsRef<Path>>(
        &self,
        config: &ProjectConfig,
        output_dir: P,
        force: bool,
    ) -> Result<GenerationReport> {
        let project_root = output_dir.as_ref().join(config.name());
        if project_root.exists() && !force {
            return Err(Error::OutputDirectoryExistsError {
                output_dir: project_root.display().to_string(),
            });
        }

        let protected = parse_ignore_file(project_root.join(IGNORE_FILE))?;
        let Build {
            mut workspace,
            executed,
            ..
        } = self.build(config, &project_root)?;
        let written = materialize(&mut workspace, &protected)?;
        info!("Generated {} in {}", config.name(), project_root.display());

        let protected = written
            .iter()
            .filter(|file| file.action == WriteAction::Protected)
            .map(|file| file.path.clone())
            .collect();
        Ok(GenerationReport {
            project_root,
            written,
            protected,
            warnings: workspace.warnings().to_vec(),
            executed,
        })
    }
}
