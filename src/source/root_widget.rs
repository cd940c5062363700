//! Model of `lib/app/app.dart`, the root application widget.

use super::{indent, named_call, nest, ImportSet, PatchStage};
use indexmap::{IndexMap, IndexSet};

/// A `final` constructor parameter of the root widget (`required this.<name>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorParam {
    pub name: String,
    pub ty: String,
}

/// A mutable field of the root widget's `State` class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateField {
    pub name: String,
    pub ty: String,
    pub initializer: Option<String>,
}

/// Keeps a state field in sync with a `Listenable` handed to the root widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listener {
    /// Listenable expression, e.g. `widget.themeController`
    pub source: String,
    /// Name of the generated callback, e.g. `_onThemeChanged`
    pub handler: String,
    /// Assignments run on registration and inside `setState` on every notification
    pub updates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Builder {
    id: String,
    template: String,
}

/// The root application widget.
#[derive(Debug, Clone)]
pub struct RootWidget {
    class_name: String,
    imports: ImportSet,
    needs_ref: bool,
    params: IndexMap<String, ConstructorParam>,
    fields: IndexMap<String, StateField>,
    listeners: IndexMap<String, Listener>,
    bindings: IndexSet<String>,
    builders: Vec<Builder>,
    app_base: String,
    app_router: bool,
    app_args: IndexMap<String, String>,
    stage: PatchStage,
}

impl RootWidget {
    pub fn new(class_name: &str) -> Self {
        let mut imports = ImportSet::new();
        imports.insert("package:flutter/material.dart");
        Self {
            class_name: class_name.to_string(),
            imports,
            needs_ref: false,
            params: IndexMap::new(),
            fields: IndexMap::new(),
            listeners: IndexMap::new(),
            bindings: IndexSet::new(),
            builders: Vec::new(),
            app_base: "MaterialApp".to_string(),
            app_router: false,
            app_args: IndexMap::new(),
            stage: PatchStage::Untouched,
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn stage(&self) -> PatchStage {
        self.stage
    }

    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    pub fn add_import<S: Into<String>>(&mut self, uri: S) -> bool {
        self.stage.advance(PatchStage::ImportsPatched);
        self.imports.insert(uri)
    }

    /// Whether the widget keeps mutable state and renders as a `StatefulWidget`.
    pub fn is_stateful(&self) -> bool {
        !self.fields.is_empty() || !self.listeners.is_empty()
    }

    /// Makes `build` receive a Riverpod `WidgetRef`.
    pub fn require_ref(&mut self) {
        self.needs_ref = true;
    }

    /// Replaces the framework app widget, e.g. `GetMaterialApp` instead of `MaterialApp`.
    pub fn set_app_base(&mut self, base: &str) {
        self.app_base = base.to_string();
    }

    /// Switches the app widget to its `.router` constructor.
    pub fn use_router_constructor(&mut self) {
        self.app_router = true;
    }

    pub fn app_constructor(&self) -> String {
        if self.app_router {
            format!("{}.router", self.app_base)
        } else {
            self.app_base.clone()
        }
    }

    /// Sets a named argument of the app widget. An existing argument keeps its position.
    pub fn set_app_arg(&mut self, name: &str, value: &str) {
        self.stage.advance(PatchStage::FieldsThreaded);
        self.app_args.insert(name.to_string(), value.to_string());
    }

    pub fn remove_app_arg(&mut self, name: &str) -> Option<String> {
        self.app_args.shift_remove(name)
    }

    pub fn app_arg(&self, name: &str) -> Option<&str> {
        self.app_args.get(name).map(String::as_str)
    }

    pub fn add_param(&mut self, name: &str, ty: &str) {
        self.stage.advance(PatchStage::FieldsThreaded);
        self.params
            .entry(name.to_string())
            .or_insert_with(|| ConstructorParam {
                name: name.to_string(),
                ty: ty.to_string(),
            });
    }

    pub fn params(&self) -> impl Iterator<Item = &ConstructorParam> {
        self.params.values()
    }

    pub fn add_field(&mut self, field: StateField) {
        self.stage.advance(PatchStage::FieldsThreaded);
        self.fields.entry(field.name.clone()).or_insert(field);
    }

    pub fn fields(&self) -> impl Iterator<Item = &StateField> {
        self.fields.values()
    }

    pub fn add_listener(&mut self, listener: Listener) {
        self.stage.advance(PatchStage::FieldsThreaded);
        self.listeners
            .entry(listener.handler.clone())
            .or_insert(listener);
    }

    /// Adds a statement at the top of `build`, e.g. `final themeMode = ref.watch(...);`.
    pub fn add_binding<S: Into<String>>(&mut self, statement: S) -> bool {
        self.bindings.insert(statement.into())
    }

    /// Wraps the app widget in a builder. `template` must contain a `{child}` marker.
    ///
    /// Builders nest in registration order, the first one outermost. A builder id
    /// registered twice is kept once.
    pub fn add_builder(&mut self, id: &str, template: &str) -> bool {
        self.stage.advance(PatchStage::WrapperEstablished);
        if self.builders.iter().any(|b| b.id == id) {
            return false;
        }
        self.builders.push(Builder {
            id: id.to_string(),
            template: template.to_string(),
        });
        true
    }

    pub fn has_builder(&self, id: &str) -> bool {
        self.builders.iter().any(|b| b.id == id)
    }

    /// The expression returned from `build`.
    pub fn build_expression(&self) -> String {
        let args: Vec<(String, String)> = self
            .app_args
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let mut expr = named_call(&self.app_constructor(), &args);
        for builder in self.builders.iter().rev() {
            expr = nest(&builder.template, &expr);
        }
        expr
    }

    fn constructor(&self) -> String {
        if self.params.is_empty() {
            return format!("const {}({{super.key}});", self.class_name);
        }
        let mut out = format!("const {}({{\n  super.key,\n", self.class_name);
        for param in self.params.values() {
            out.push_str(&format!("  required this.{},\n", param.name));
        }
        out.push_str("});");
        out
    }

    fn param_fields(&self) -> String {
        self.params
            .values()
            .map(|param| format!("final {} {};", param.ty, param.name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn build_method(&self, with_ref: bool) -> String {
        let signature = if with_ref {
            "Widget build(BuildContext context, WidgetRef ref) {"
        } else {
            "Widget build(BuildContext context) {"
        };
        let mut body: Vec<String> = self.bindings.iter().cloned().collect();
        body.push(format!("return {};", self.build_expression()));
        format!("@override\n{signature}\n{}\n}}", indent(&body.join("\n"), 2))
    }

    fn widget_class(&self, superclass: &str, members: &[String]) -> String {
        let mut sections = vec![self.constructor()];
        if !self.params.is_empty() {
            sections.push(self.param_fields());
        }
        sections.extend(members.iter().cloned());
        format!(
            "class {} extends {} {{\n{}\n}}\n",
            self.class_name,
            superclass,
            indent(&sections.join("\n\n"), 2)
        )
    }

    fn state_class(&self, superclass: &str) -> String {
        let state_name = format!("_{}State", self.class_name);
        let mut sections = Vec::new();

        if !self.fields.is_empty() {
            sections.push(
                self.fields
                    .values()
                    .map(|field| match &field.initializer {
                        Some(init) => format!("{} {} = {};", field.ty, field.name, init),
                        None => format!("{} {};", field.ty, field.name),
                    })
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }

        if !self.listeners.is_empty() {
            let mut init = vec!["super.initState();".to_string()];
            let mut dispose = Vec::new();
            for listener in self.listeners.values() {
                init.extend(listener.updates.iter().map(|u| format!("{u};")));
                init.push(format!("{}.addListener({});", listener.source, listener.handler));
                dispose.push(format!("{}.removeListener({});", listener.source, listener.handler));
            }
            dispose.push("super.dispose();".to_string());

            sections.push(format!(
                "@override\nvoid initState() {{\n{}\n}}",
                indent(&init.join("\n"), 2)
            ));
            sections.push(format!(
                "@override\nvoid dispose() {{\n{}\n}}",
                indent(&dispose.join("\n"), 2)
            ));
            for listener in self.listeners.values() {
                let updates = listener
                    .updates
                    .iter()
                    .map(|u| format!("{u};"))
                    .collect::<Vec<_>>()
                    .join("\n");
                sections.push(format!(
                    "void {}() {{\n  setState(() {{\n{}\n  }});\n}}",
                    listener.handler,
                    indent(&updates, 4)
                ));
            }
        }

        sections.push(self.build_method(false));

        format!(
            "class {} extends {}<{}> {{\n{}\n}}\n",
            state_name,
            superclass,
            self.class_name,
            indent(&sections.join("\n\n"), 2)
        )
    }

    pub fn render(&self) -> String {
        let mut out = self.imports.render();
        out.push('\n');

        if self.is_stateful() {
            let (widget, state) = if self.needs_ref {
                ("ConsumerStatefulWidget", "ConsumerState")
            } else {
                ("StatefulWidget", "State")
            };
            let create = format!(
                "@override\n{state}<{name}> createState() => _{name}State();",
                name = self.class_name
            );
            out.push_str(&self.widget_class(widget, &[create]));
            out.push('\n');
            out.push_str(&self.state_class(state));
        } else if self.needs_ref {
            out.push_str(&self.widget_class("ConsumerWidget", &[self.build_method(true)]));
        } else {
            out.push_str(&self.widget_class("StatelessWidget", &[self.build_method(false)]));
        }
        out
    }
}
