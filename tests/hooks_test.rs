use fledge::error::Result;
use fledge::hooks::{confirm_hook_execution, run_hook, run_hooks};
use fledge::prompt::Prompter;
use std::cell::Cell;
use tempfile::TempDir;

struct ConfirmOnly {
    answer: bool,
    asked: Cell<bool>,
}

impl Prompter for ConfirmOnly {
    fn text(&self, _prompt: &str, _default: Option<&str>) -> Result<String> {
        unreachable!()
    }
    fn select(&self, _prompt: &str, _items: &[&str], _default: usize) -> Result<usize> {
        unreachable!()
    }
    fn multi_select(
        &self,
        _prompt: &str,
        _items: &[&str],
        _defaults: &[bool],
    ) -> Result<Vec<usize>> {
        unreachable!()
    }
    fn confirm(&self, _prompt: &str, _default: bool) -> Result<bool> {
        self.asked.set(true);
        Ok(self.answer)
    }
}

#[test]
fn test_confirm_hook_execution() {
    let commands = vec!["flutter pub get".to_string()];

    let prompter = ConfirmOnly {
        answer: false,
        asked: Cell::new(false),
    };
    assert!(!confirm_hook_execution(&prompter, &commands, false).unwrap());
    assert!(prompter.asked.get());

    let prompter = ConfirmOnly {
        answer: false,
        asked: Cell::new(false),
    };
    assert!(confirm_hook_execution(&prompter, &commands, true).unwrap());
    assert!(!prompter.asked.get());

    let prompter = ConfirmOnly {
        answer: true,
        asked: Cell::new(false),
    };
    assert!(!confirm_hook_execution(&prompter, &[], false).unwrap());
    assert!(!prompter.asked.get());
}

#[cfg(unix)]
#[test]
fn test_run_hook_in_project_root() {
    let temp_dir = TempDir::new().unwrap();
    run_hook(temp_dir.path(), "touch hooked").unwrap();
    assert!(temp_dir.path().join("hooked").exists());
}

#[cfg(unix)]
#[test]
fn test_failing_hook_is_a_warning() {
    let temp_dir = TempDir::new().unwrap();
    assert!(run_hook(temp_dir.path(), "exit 3").is_err());

    let warnings = run_hooks(
        temp_dir.path(),
        &["exit 3".to_string(), "touch after".to_string()],
    );
    assert_eq!(warnings.len(), 1);
    assert!(temp_dir.path().join("after").exists());
}
