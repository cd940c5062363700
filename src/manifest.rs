//! Editing of the generated project's `pubspec.yaml`.
//!
//! The manifest is kept as text so comments and layout written by the user or by
//! `flutter create` survive. Edits are line based but key aware: a dependency counts as
//! present when its name appears as a direct key of the section, not merely as a
//! substring somewhere in the file.

use regex::Regex;
use std::sync::OnceLock;

fn key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\s+)([A-Za-z0-9_-]+)\s*:").expect("static regex"))
}

/// Top level manifest sections that hold packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dependencies,
    DevDependencies,
}

impl Section {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::DevDependencies => "dev_dependencies",
        }
    }
}

/// Where a package comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencySource {
    /// A hosted version constraint such as `^8.1.6`
    Version(String),
    /// An SDK package such as `flutter_localizations: {sdk: flutter}`
    Sdk(String),
}

/// A package entry of a manifest section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    pub source: DependencySource,
}

impl Dependency {
    pub fn version(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            source: DependencySource::Version(version.to_string()),
        }
    }

    pub fn sdk(name: &str, sdk: &str) -> Self {
        Self {
            name: name.to_string(),
            source: DependencySource::Sdk(sdk.to_string()),
        }
    }

    fn lines(&self, indent: &str) -> Vec<String> {
        match &self.source {
            DependencySource::Version(version) => vec![format!("{indent}{}: {version}", self.name)],
            DependencySource::Sdk(sdk) => {
                vec![format!("{indent}{}:", self.name), format!("{indent}{indent}sdk: {sdk}")]
            }
        }
    }
}

/// A `pubspec.yaml` being edited.
#[derive(Debug, Clone)]
pub struct Manifest {
    original: String,
    lines: Vec<String>,
    modified: bool,
}

/// Line range of a top level section: the header line and the end (exclusive) of its body.
struct SectionRange {
    header: usize,
    end: usize,
}

fn is_top_level(line: &str) -> bool {
    !line.trim().is_empty() && !line.starts_with(char::is_whitespace) && !line.starts_with('#')
}

/// Key of a section header line with an empty value, e.g. `dependencies: # runtime`.
fn header_key(line: &str) -> Option<&str> {
    let line = match line.find(" #") {
        Some(comment) => &line[..comment],
        None => line,
    };
    line.trim_end().strip_suffix(':').map(str::trim_end)
}

impl Manifest {
    pub fn parse(content: &str) -> Self {
        Self {
            original: content.to_string(),
            lines: content.lines().map(str::to_string).collect(),
            modified: false,
        }
    }

    /// Whether any edit changed the manifest since it was parsed.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    fn section(&self, key: &str) -> Option<SectionRange> {
        let header = self.lines.iter().position(|line| {
            is_top_level(line) && header_key(line) == Some(key)
        })?;
        let end = self.lines[header + 1..]
            .iter()
            .position(|line| is_top_level(line))
            .map(|offset| header + 1 + offset)
            .unwrap_or(self.lines.len());
        Some(SectionRange { header, end })
    }

    /// Indentation of the direct children of a section, two spaces when it has none yet.
    fn child_indent(&self, range: &SectionRange) -> String {
        self.lines[range.header + 1..range.end]
            .iter()
            .find_map(|line| key_regex().captures(line).map(|c| c[1].to_string()))
            .unwrap_or_else(|| "  ".to_string())
    }

    fn child_keys(&self, range: &SectionRange) -> Vec<String> {
        let indent = self.child_indent(range);
        self.lines[range.header + 1..range.end]
            .iter()
            .filter_map(|line| key_regex().captures(line))
            .filter(|c| c[1] == *indent)
            .map(|c| c[2].to_string())
            .collect()
    }

    /// Index right after the last non-blank line of the section.
    fn insertion_point(&self, range: &SectionRange) -> usize {
        (range.header + 1..range.end)
            .rev()
            .find(|i| !self.lines[*i].trim().is_empty())
            .map(|i| i + 1)
            .unwrap_or(range.header + 1)
    }

    pub fn dependencies(&self, section: Section) -> Vec<String> {
        self.section(section.key())
            .map(|range| self.child_keys(&range))
            .unwrap_or_default()
    }

    pub fn has_dependency(&self, section: Section, name: &str) -> bool {
        self.dependencies(section).iter().any(|key| key == name)
    }

    /// Appends `dependency` at the end of `section` unless the key is already present.
    ///
    /// A missing section is created at the end of the file. Returns whether the manifest
    /// changed.
    pub fn add_dependency(&mut self, section: Section, dependency: &Dependency) -> bool {
        if self.has_dependency(section, &dependency.name) {
            return false;
        }

        match self.section(section.key()) {
            Some(range) => {
                let indent = self.child_indent(&range);
                let at = self.insertion_point(&range);
                for (offset, line) in dependency.lines(&indent).into_iter().enumerate() {
                    self.lines.insert(at + offset, line);
                }
            }
            None => {
                if self.lines.last().is_some_and(|l| !l.trim().is_empty()) {
                    self.lines.push(String::new());
                }
                self.lines.push(format!("{}:", section.key()));
                self.lines.extend(dependency.lines("  "));
            }
        }
        self.modified = true;
        true
    }

    /// Sets `key: value` directly under the `flutter:` section unless `key` is present.
    pub fn set_flutter_option(&mut self, key: &str, value: &str) -> bool {
        match self.section("flutter") {
            Some(range) => {
                if self.child_keys(&range).iter().any(|k| k == key) {
                    return false;
                }
                let indent = self.child_indent(&range);
                self.lines.insert(range.header + 1, format!("{indent}{key}: {value}"));
            }
            None => {
                if self.lines.last().is_some_and(|l| !l.trim().is_empty()) {
                    self.lines.push(String::new());
                }
                self.lines.push("flutter:".to_string());
                self.lines.push(format!("  {key}: {value}"));
            }
        }
        self.modified = true;
        true
    }

    /// The manifest text; byte-identical to the parsed input when nothing changed.
    pub fn render(&self) -> String {
        if !self.modified {
            return self.original.clone();
        }
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}
