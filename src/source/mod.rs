//! Structured models of the shared Dart files.
//!
//! The entry point and the root widget receive contributions from several pipeline
//! steps. Instead of re-opening rendered text and splicing into it, every step edits
//! one of these models and the final text is rendered exactly once.

pub mod entry_point;
pub mod root_widget;

pub use entry_point::{EntryPoint, ProviderFamily, ProviderRegistration};
pub use root_widget::{Listener, RootWidget, StateField};

use indexmap::IndexSet;

/// How far the integrators have taken a shared file.
///
/// Stages only move forward; recording an earlier stage than the current one is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum PatchStage {
    #[default]
    Untouched,
    ImportsPatched,
    WrapperEstablished,
    FieldsThreaded,
}

impl PatchStage {
    pub fn advance(&mut self, to: PatchStage) {
        if to > *self {
            *self = to;
        }
    }
}

/// Builds `package:` import URIs for files under the generated project's `lib/`.
#[derive(Debug, Clone)]
pub struct Package {
    name: String,
}

impl Package {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `core/theme/app_theme.dart` becomes `package:<name>/core/theme/app_theme.dart`.
    pub fn import(&self, lib_path: &str) -> String {
        format!("package:{}/{}", self.name, lib_path.trim_start_matches("lib/"))
    }
}

/// Ordered, duplicate-free set of import URIs.
///
/// Rendering groups `dart:` imports first, then `package:` imports, then relative ones,
/// each group sorted, so the output does not depend on the order contributions arrived in.
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    uris: IndexSet<String>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the import was already present.
    pub fn insert<S: Into<String>>(&mut self, uri: S) -> bool {
        self.uris.insert(uri.into())
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.uris.contains(uri)
    }

    pub fn len(&self) -> usize {
        self.uris.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.uris.iter().map(String::as_str)
    }

    pub fn render(&self) -> String {
        let mut groups: [Vec<&str>; 3] = Default::default();
        for uri in &self.uris {
            let group = if uri.starts_with("dart:") {
                0
            } else if uri.starts_with("package:") {
                1
            } else {
                2
            };
            groups[group].push(uri);
        }

        groups
            .iter_mut()
            .filter(|group| !group.is_empty())
            .map(|group| {
                group.sort_unstable();
                group
                    .iter()
                    .map(|uri| format!("import '{uri}';\n"))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Indents every non-empty line of `text` by `spaces`.
pub fn indent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a Dart constructor or function call with one named argument per line.
///
/// Multi-line argument values keep their own relative indentation.
pub fn named_call(callee: &str, args: &[(String, String)]) -> String {
    if args.is_empty() {
        return format!("{callee}()");
    }
    let mut out = format!("{callee}(\n");
    for (name, value) in args {
        out.push_str(&indent(&format!("{name}: {value},"), 2));
        out.push('\n');
    }
    out.push(')');
    out
}

/// Renders a Dart list literal with one element per line.
pub fn list_literal(items: &[String]) -> String {
    let mut out = String::from("[\n");
    for item in items {
        out.push_str(&indent(&format!("{item},"), 2));
        out.push('\n');
    }
    out.push(']');
    out
}

/// Places `child` into `template` at the `{child}` marker.
///
/// Continuation lines of `child` are indented to the marker line's indentation so the
/// nested expression lines up with its parent.
pub fn nest(template: &str, child: &str) -> String {
    let marker_line = template
        .lines()
        .find(|line| line.contains("{child}"))
        .unwrap_or("");
    let pad = marker_line.len() - marker_line.trim_start().len();

    let mut lines = child.lines();
    let mut spliced = lines.next().unwrap_or("").to_string();
    for line in lines {
        spliced.push('\n');
        if !line.is_empty() {
            spliced.push_str(&" ".repeat(pad));
        }
        spliced.push_str(line);
    }
    template.replace("{child}", &spliced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_set_is_idempotent() {
        let mut imports = ImportSet::new();
        assert!(imports.insert("package:flutter/material.dart"));
        assert!(!imports.insert("package:flutter/material.dart"));
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_import_set_groups_and_sorts() {
        let mut imports = ImportSet::new();
        imports.insert("package:z/z.dart");
        imports.insert("dart:async");
        imports.insert("package:a/a.dart");
        assert_eq!(
            imports.render(),
            "import 'dart:async';\n\nimport 'package:a/a.dart';\nimport 'package:z/z.dart';\n"
        );
    }

    #[test]
    fn test_patch_stage_only_moves_forward() {
        let mut stage = PatchStage::default();
        stage.advance(PatchStage::WrapperEstablished);
        stage.advance(PatchStage::ImportsPatched);
        assert_eq!(stage, PatchStage::WrapperEstablished);
    }

    #[test]
    fn test_named_call() {
        let rendered = named_call(
            "Outer",
            &[("child".to_string(), named_call("Inner", &[("a".into(), "1".into())]))],
        );
        assert_eq!(rendered, "Outer(\n  child: Inner(\n    a: 1,\n  ),\n)");
    }

    #[test]
    fn test_nest_aligns_continuation_lines() {
        let template = "Obx(\n  () => {child},\n)";
        let rendered = nest(template, "MaterialApp(\n  title: 'x',\n)");
        assert_eq!(
            rendered,
            "Obx(\n  () => MaterialApp(\n    title: 'x',\n  ),\n)"
        );
    }

    #[test]
    fn test_package_import() {
        let package = Package::new("demo_app");
        assert_eq!(
            package.import("core/theme/app_theme.dart"),
            "package:demo_app/core/theme/app_theme.dart"
        );
        assert_eq!(
            package.import("lib/app/app.dart"),
            "package:demo_app/app/app.dart"
        );
    }
}
