use super::{StateSlice, StateWiring};
use crate::config::StateManagement;
use crate::source::{Listener, Package, StateField};
use crate::workspace::SharedFiles;

/// No state library: an explicit controller per slice is created in `main`, passed to
/// the root widget, and mirrored into the widget's own state through a listener.
pub struct DefaultWiring;

impl StateWiring for DefaultWiring {
    fn state(&self) -> StateManagement {
        StateManagement::Default
    }

    fn wire_state(&self, slice: &StateSlice, package: &Package, shared: &mut SharedFiles<'_>) {
        let controller = slice.class("Controller");
        let controller_var = slice.instance("Controller");
        let import = package.import(&slice.path(&format!("{}_controller.dart", slice.noun)));
        let field = format!("_{}", slice.value);

        shared.entry.add_import(import.clone());
        shared
            .entry
            .add_setup(format!("final {controller_var} = {controller}();"));
        if let Some(restore) = slice.restore {
            shared
                .entry
                .add_async_setup(format!("await {controller_var}.{restore}();"));
        }
        shared
            .entry
            .pass_root_argument(&controller_var, &controller_var);

        shared.root.add_import(import);
        shared.root.add_param(&controller_var, &controller);
        shared.root.add_field(StateField {
            name: field.clone(),
            ty: slice.ty.to_string(),
            initializer: slice.initial.map(str::to_string),
        });
        shared.root.add_listener(Listener {
            source: format!("widget.{controller_var}"),
            handler: format!("_on{}Changed", slice.class("")),
            updates: vec![format!("{field} = widget.{controller_var}.{}", slice.value)],
        });
        shared.root.set_app_arg(slice.value, &field);
    }
}
