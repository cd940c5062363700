//! Writes a workspace to disk.

use crate::error::{Error, Result};
use crate::workspace::Workspace;
use globset::GlobSet;
use log::debug;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to a file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    Created,
    Updated,
    /// Content on disk already matched
    Unchanged,
    /// Listed in the ignore file and already present
    Protected,
}

impl fmt::Display for WriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Created => "Created",
            Self::Updated => "Updated",
            Self::Unchanged => "Unchanged",
            Self::Protected => "Protected",
        };
        f.write_str(name)
    }
}

/// A file the materializer handled, with a path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub action: WriteAction,
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(path, content).map_err(Error::IoError)
}

/// Writes every directory and file of `ws` below its root.
///
/// Existing files matching `protected` are left alone. A file that cannot be written
/// is reported as a warning of the workspace and does not stop the others.
///
/// # Errors
/// * `Error::IoError` if the project root itself cannot be created
pub fn materialize(ws: &mut Workspace, protected: &GlobSet) -> Result<Vec<WrittenFile>> {
    let root = ws.root().to_path_buf();
    fs::create_dir_all(&root).map_err(Error::IoError)?;

    let dirs: Vec<PathBuf> = ws.dirs().map(Path::to_path_buf).collect();
    for dir in dirs {
        if let Err(e) = fs::create_dir_all(root.join(&dir)) {
            ws.warn(format!("cannot create directory '{}': {}", dir.display(), e));
        }
    }

    let mut written = Vec::new();
    for file in ws.rendered_files() {
        let target = root.join(&file.path);
        let action = if !target.exists() {
            WriteAction::Created
        } else if protected.is_match(&file.path) {
            WriteAction::Protected
        } else {
            match fs::read(&target) {
                Ok(current) if current == file.content.as_bytes() => WriteAction::Unchanged,
                Ok(_) => WriteAction::Updated,
                Err(e) => {
                    ws.warn(format!("cannot read '{}': {}", file.path.display(), e));
                    continue;
                }
            }
        };

        if matches!(action, WriteAction::Created | WriteAction::Updated) {
            if let Err(e) = write_file(&target, &file.content) {
                ws.warn(format!("cannot write '{}': {}", file.path.display(), e));
                continue;
            }
        }
        debug!("{}: '{}' ({})", action, file.path.display(), file.owner);
        written.push(WrittenFile {
            path: file.path,
            action,
        });
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::{GeneratedFile, Owner};
    use globset::{Glob, GlobSetBuilder};
    use tempfile::TempDir;

    fn staged(root: &Path) -> Workspace {
        let mut ws = Workspace::new(root);
        ws.ensure_dir("lib/features");
        ws.add_file(GeneratedFile {
            path: PathBuf::from("README.md"),
            content: "# demo\n".to_string(),
            owner: Owner::new("app", "app/common"),
        });
        ws
    }

    #[test]
    fn test_created_then_unchanged() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("demo");

        let first = materialize(&mut staged(&root), &GlobSet::empty()).unwrap();
        assert_eq!(first[0].action, WriteAction::Created);
        assert!(root.join("lib/features").is_dir());

        let second = materialize(&mut staged(&root), &GlobSet::empty()).unwrap();
        assert_eq!(second[0].action, WriteAction::Unchanged);
    }

    #[test]
    fn test_protected_file_is_kept() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("demo");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("README.md"), "mine\n").unwrap();

        let mut builder = GlobSetBuilder::new();
        builder.add(Glob::new("README.md").unwrap());
        let protected = builder.build().unwrap();

        let written = materialize(&mut staged(&root), &protected).unwrap();
        assert_eq!(written[0].action, WriteAction::Protected);
        assert_eq!(
            fs::read_to_string(root.join("README.md")).unwrap(),
            "mine\n"
        );
    }

    #[test]
    fn test_protected_binary_file_is_kept() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("demo");
        fs::create_dir_all(&root).unwrap();
        let notes = b"notes \xff\xfe latin1\n";
        fs::write(root.join("README.md"), notes).unwrap();

        let mut builder = GlobSetBuilder::new();
        builder.add(Glob::new("README.md").unwrap());
        let protected = builder.build().unwrap();

        let written = materialize(&mut staged(&root), &protected).unwrap();
        assert_eq!(written[0].action, WriteAction::Protected);
        assert_eq!(fs::read(root.join("README.md")).unwrap(), notes);
    }

    #[test]
    fn test_non_utf8_file_is_updated() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("demo");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("README.md"), b"\xff\xfe").unwrap();

        let written = materialize(&mut staged(&root), &GlobSet::empty()).unwrap();
        assert_eq!(written[0].action, WriteAction::Updated);
        assert_eq!(
            fs::read_to_string(root.join("README.md")).unwrap(),
            "# demo\n"
        );
    }
}
