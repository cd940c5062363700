use super::{StateSlice, StateWiring};
use crate::config::StateManagement;
use crate::source::Package;
use crate::workspace::{ReduxSlice, SharedFiles};

const FLUTTER_REDUX: &str = "package:flutter_redux/flutter_redux.dart";
const APP_STATE: &str = "core/store/app_state.dart";

/// One store for the whole app; every slice becomes a field of `AppState`.
pub struct ReduxWiring;

impl StateWiring for ReduxWiring {
    fn state(&self) -> StateManagement {
        StateManagement::Redux
    }

    fn uses_store(&self) -> bool {
        true
    }

    fn wire_app(&self, package: &Package, shared: &mut SharedFiles<'_>) {
        shared.entry.add_import(FLUTTER_REDUX);
        shared.entry.add_import(package.import(APP_STATE));
        shared
            .entry
            .add_import(package.import("core/store/store.dart"));
        shared.entry.add_setup("final store = createStore();");
        shared
            .entry
            .add_scope("StoreProvider<AppState>", &[("store", "store")]);
    }

    fn wire_state(&self, slice: &StateSlice, package: &Package, shared: &mut SharedFiles<'_>) {
        if let Some(store) = shared.store.as_deref_mut() {
            store.add_slice(ReduxSlice {
                field: slice.value.to_string(),
                ty: slice.ty.to_string(),
                initial: slice.initial.unwrap_or("null").to_string(),
                reducer: format!("{}Reducer", slice.noun),
                import: package.import(&slice.path(&format!("redux/{}_reducer.dart", slice.noun))),
            });
        }

        shared.root.add_import(FLUTTER_REDUX);
        shared.root.add_import(package.import(APP_STATE));
        shared.root.add_builder(
            &format!("redux:{}", slice.noun),
            &format!(
                concat!(
                    "StoreConnector<AppState, {ty}>(\n",
                    "  converter: (store) => store.state.{value},\n",
                    "  builder: (context, {value}) => {{child}},\n",
                    ")"
                ),
                ty = slice.ty,
                value = slice.value
            ),
        );
        shared.root.set_app_arg(slice.value, slice.value);
    }
}
