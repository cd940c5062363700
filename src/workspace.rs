//! In-memory project tree assembled by the pipeline before anything touches disk.

use crate::constants::{ENTRY_POINT_PATH, MANIFEST_FILE, ROOT_WIDGET_PATH};
use crate::error::{Error, Result};
use crate::manifest::{Dependency, Manifest, Section};
use crate::source::{EntryPoint, RootWidget};
use indexmap::{IndexMap, IndexSet};
use log::{debug, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The generator and registry branch a file came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub generator: String,
    pub branch: String,
}

impl Owner {
    pub fn new<G: Into<String>, B: Into<String>>(generator: G, branch: B) -> Self {
        Self {
            generator: generator.into(),
            branch: branch.into(),
        }
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.generator, self.branch)
    }
}

/// A file produced by exactly one generator, with a path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
    pub owner: Owner,
}

/// A field of the generated Redux `AppState`, contributed by a module's wiring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReduxSlice {
    /// `AppState` field, e.g. `themeMode`
    pub field: String,
    /// Dart type, e.g. `ThemeMode`
    pub ty: String,
    /// Initial value expression, e.g. `ThemeMode.system`
    pub initial: String,
    /// Reducer function folding actions into the field, e.g. `themeReducer`
    pub reducer: String,
    /// Import URI of the reducer
    pub import: String,
}

/// Slices the Redux store generator composes into `AppState`.
#[derive(Debug, Clone, Default)]
pub struct ReduxStore {
    slices: IndexMap<String, ReduxSlice>,
}

impl ReduxStore {
    pub fn add_slice(&mut self, slice: ReduxSlice) -> bool {
        if self.slices.contains_key(&slice.field) {
            return false;
        }
        self.slices.insert(slice.field.clone(), slice);
        true
    }

    pub fn slices(&self) -> impl Iterator<Item = &ReduxSlice> {
        self.slices.values()
    }
}

/// Mutable access to both shared Dart files at once, plus the Redux store when enabled.
pub struct SharedFiles<'a> {
    pub entry: &'a mut EntryPoint,
    pub root: &'a mut RootWidget,
    pub store: Option<&'a mut ReduxStore>,
}

/// The project being generated.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    dirs: IndexSet<PathBuf>,
    files: IndexMap<PathBuf, GeneratedFile>,
    entry_point: Option<EntryPoint>,
    root_widget: Option<RootWidget>,
    manifest: Option<Manifest>,
    manifest_is_new: bool,
    redux_store: Option<ReduxStore>,
    warnings: Vec<String>,
}

impl Workspace {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            dirs: IndexSet::new(),
            files: IndexMap::new(),
            entry_point: None,
            root_widget: None,
            manifest: None,
            manifest_is_new: false,
            redux_store: None,
            warnings: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Logs a warning and keeps it for the generation report.
    pub fn warn<S: Into<String>>(&mut self, message: S) {
        let message = message.into();
        warn!("{}", message);
        self.warnings.push(message);
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Records a directory, relative to the project root, that must exist afterwards.
    pub fn ensure_dir<P: AsRef<Path>>(&mut self, dir: P) {
        self.dirs.insert(dir.as_ref().to_path_buf());
    }

    pub fn dirs(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }

    pub fn has_dir<P: AsRef<Path>>(&self, dir: P) -> bool {
        self.dirs.contains(dir.as_ref())
    }

    /// Adds a file. A path already owned by another generator is refused with a warning;
    /// the same owner may replace its own file.
    pub fn add_file(&mut self, file: GeneratedFile) -> bool {
        if let Some(existing) = self.files.get(&file.path) {
            if existing.owner.generator != file.owner.generator {
                let message = format!(
                    "'{}' is owned by {}, refusing to let {} overwrite it",
                    file.path.display(),
                    existing.owner,
                    file.owner
                );
                self.warn(message);
                return false;
            }
        }
        debug!("Staged '{}' from {}", file.path.display(), file.owner);
        self.files.insert(file.path.clone(), file);
        true
    }

    pub fn file<P: AsRef<Path>>(&self, path: P) -> Option<&GeneratedFile> {
        self.files.get(path.as_ref())
    }

    pub fn has_file<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        self.files.contains_key(path)
            || (path == Path::new(ENTRY_POINT_PATH) && self.entry_point.is_some())
            || (path == Path::new(ROOT_WIDGET_PATH) && self.root_widget.is_some())
    }

    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.values()
    }

    pub fn set_entry_point(&mut self, entry_point: EntryPoint) {
        self.entry_point = Some(entry_point);
    }

    pub fn entry_point(&self) -> Option<&EntryPoint> {
        self.entry_point.as_ref()
    }

    pub fn entry_point_mut(&mut self) -> Option<&mut EntryPoint> {
        self.entry_point.as_mut()
    }

    pub fn set_root_widget(&mut self, root_widget: RootWidget) {
        self.root_widget = Some(root_widget);
    }

    pub fn root_widget(&self) -> Option<&RootWidget> {
        self.root_widget.as_ref()
    }

    pub fn root_widget_mut(&mut self) -> Option<&mut RootWidget> {
        self.root_widget.as_mut()
    }

    /// The first shared file that has not been created yet, if any.
    pub fn missing_shared_file(&self) -> Option<&'static str> {
        if self.root_widget.is_none() {
            Some(ROOT_WIDGET_PATH)
        } else if self.entry_point.is_none() {
            Some(ENTRY_POINT_PATH)
        } else {
            None
        }
    }

    pub fn shared_files(&mut self) -> Option<SharedFiles<'_>> {
        match (self.entry_point.as_mut(), self.root_widget.as_mut()) {
            (Some(entry), Some(root)) => {
                Some(SharedFiles {
                    entry,
                    root,
                    store: self.redux_store.as_mut(),
                })
            }
            _ => None,
        }
    }

    pub fn enable_redux_store(&mut self) {
        self.redux_store.get_or_insert_with(ReduxStore::default);
    }

    pub fn redux_store(&self) -> Option<&ReduxStore> {
        self.redux_store.as_ref()
    }

    pub fn redux_store_mut(&mut self) -> Option<&mut ReduxStore> {
        self.redux_store.as_mut()
    }

    pub fn manifest(&self) -> Option<&Manifest> {
        self.manifest.as_ref()
    }

    pub fn manifest_mut(&mut self) -> Option<&mut Manifest> {
        self.manifest.as_mut()
    }

    /// Installs a manifest created during this run.
    pub fn create_manifest(&mut self, content: &str) {
        self.manifest = Some(Manifest::parse(content));
        self.manifest_is_new = true;
    }

    /// Loads `pubspec.yaml` from the project root on disk, if there is one.
    ///
    /// # Errors
    /// * `Error::IoError` if the file exists but cannot be read
    pub fn load_manifest(&mut self) -> Result<bool> {
        let path = self.root.join(MANIFEST_FILE);
        if !path.is_file() {
            return Ok(false);
        }
        debug!("Loading existing manifest {}", path.display());
        let content = std::fs::read_to_string(&path).map_err(Error::IoError)?;
        self.manifest = Some(Manifest::parse(&content));
        self.manifest_is_new = false;
        Ok(true)
    }

    /// Adds dependencies to the manifest, warning and doing nothing when there is none.
    pub fn add_dependencies(&mut self, requester: &str, section: Section, deps: &[Dependency]) {
        if deps.is_empty() {
            return;
        }
        match self.manifest.as_mut() {
            Some(manifest) => {
                for dep in deps {
                    if manifest.add_dependency(section, dep) {
                        debug!("{}: added {} to {}", requester, dep.name, section.key());
                    }
                }
            }
            None => self.warn(format!(
                "{MANIFEST_FILE} not found, skipping {} for {}",
                section.key(),
                requester
            )),
        }
    }

    /// Every file to write: owned files followed by the rendered shared files.
    ///
    /// The manifest is only included when it was created or changed during this run.
    pub fn rendered_files(&self) -> Vec<GeneratedFile> {
        let mut out: Vec<GeneratedFile> = self.files.values().cloned().collect();
        if let Some(root_widget) = &self.root_widget {
            out.push(GeneratedFile {
                path: PathBuf::from(ROOT_WIDGET_PATH),
                content: root_widget.render(),
                owner: Owner::new("app", "app/root_widget"),
            });
        }
        if let Some(entry_point) = &self.entry_point {
            out.push(GeneratedFile {
                path: PathBuf::from(ENTRY_POINT_PATH),
                content: entry_point.render(),
                owner: Owner::new("app", "app/entry_point"),
            });
        }
        if let Some(manifest) = &self.manifest {
            if self.manifest_is_new || manifest.is_modified() {
                out.push(GeneratedFile {
                    path: PathBuf::from(MANIFEST_FILE),
                    content: manifest.render(),
                    owner: Owner::new("app", "app/manifest"),
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, generator: &str) -> GeneratedFile {
        GeneratedFile {
            path: PathBuf::from(path),
            content: String::new(),
            owner: Owner::new(generator, format!("{generator}/common")),
        }
    }

    #[test]
    fn test_ownership_is_exclusive() {
        let mut ws = Workspace::new("/tmp/x");
        assert!(ws.add_file(file("lib/core/theme/app_theme.dart", "theme")));
        assert!(ws.add_file(file("lib/core/theme/app_theme.dart", "theme")));
        assert!(!ws.add_file(file("lib/core/theme/app_theme.dart", "network")));
        assert_eq!(ws.warnings().len(), 1);
    }

    #[test]
    fn test_missing_manifest_warns() {
        let mut ws = Workspace::new("/tmp/x");
        ws.add_dependencies(
            "theme",
            Section::Dependencies,
            &[Dependency::version("a", "^1.0.0")],
        );
        assert_eq!(ws.warnings().len(), 1);
        assert!(ws.warnings()[0].contains("pubspec.yaml not found"));
    }

    #[test]
    fn test_unchanged_loaded_manifest_is_not_rendered() {
        let mut ws = Workspace::new("/tmp/x");
        ws.manifest = Some(Manifest::parse("name: x\n"));
        assert!(ws.rendered_files().is_empty());
        ws.add_dependencies(
            "theme",
            Section::Dependencies,
            &[Dependency::version("a", "^1.0.0")],
        );
        assert_eq!(ws.rendered_files().len(), 1);
    }
}
