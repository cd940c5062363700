use super::{StateSlice, StateWiring};
use crate::config::StateManagement;
use crate::source::Package;
use crate::workspace::SharedFiles;

const FLUTTER_MOBX: &str = "package:flutter_mobx/flutter_mobx.dart";

/// Stores created in `main`, passed to the root widget and observed by an `Observer`.
pub struct MobXWiring;

impl StateWiring for MobXWiring {
    fn state(&self) -> StateManagement {
        StateManagement::MobX
    }

    fn wire_state(&self, slice: &StateSlice, package: &Package, shared: &mut SharedFiles<'_>) {
        let store = slice.class("Store");
        let store_var = slice.instance("Store");
        let import = package.import(&slice.path(&format!("{}_store.dart", slice.noun)));

        shared.entry.add_import(import.clone());
        shared
            .entry
            .add_setup(format!("final {store_var} = {store}();"));
        shared.entry.pass_root_argument(&store_var, &store_var);

        shared.root.add_import(FLUTTER_MOBX);
        shared.root.add_import(import);
        shared.root.add_param(&store_var, &store);
        shared
            .root
            .add_builder("observer", "Observer(\n  builder: (_) => {child},\n)");
        shared
            .root
            .set_app_arg(slice.value, &format!("{store_var}.{}", slice.value));
    }
}
