//! fledge generates Flutter application skeletons.
//! A project configuration (architecture, state management, features and modules) is
//! turned into a task graph of generators and integrators that assemble the project in
//! memory before it is written to disk.

/// Command-line interface module for the fledge application
pub mod cli;

/// Project configuration and answer sources
/// Supports JSON and YAML formats (fledge.json, fledge.yml, fledge.yaml)
pub mod config;

/// Common constants: file names, locales and package versions
pub mod constants;

/// Error types and handling for the fledge application
pub mod error;

/// Per-module generators producing owned files
pub mod generators;

/// Post-generation shell commands
pub mod hooks;

/// File protection patterns
/// Processes .fledgeignore files to keep hand-edited files on re-runs
pub mod ignore;

/// Cross-file integrators editing the entry point and the root widget
pub mod integrators;

pub mod logger;

/// `pubspec.yaml` editing
pub mod manifest;

/// Writes the assembled workspace to disk
pub mod materializer;

/// Plans, executes and writes a generation run
pub mod orchestrator;

/// Task graph and execution order
pub mod pipeline;

/// User input and interaction handling
pub mod prompt;

/// Template catalog and variant selection
pub mod registry;

/// Template rendering
pub mod renderer;

/// Structured models of the shared Dart files
pub mod source;

/// State management strategies
pub mod strategy;

/// In-memory project tree
pub mod workspace;
