use super::{ServiceSlice, StateSlice, StateWiring};
use crate::config::StateManagement;
use crate::source::Package;
use crate::workspace::SharedFiles;

const GET: &str = "package:get/get.dart";

/// Controllers registered with `Get.put` in `main`, observed by a single `Obx`.
pub struct GetXWiring;

impl StateWiring for GetXWiring {
    fn state(&self) -> StateManagement {
        StateManagement::GetX
    }

    fn wire_app(&self, _package: &Package, shared: &mut SharedFiles<'_>) {
        shared.root.add_import(GET);
        shared.root.set_app_base("GetMaterialApp");
    }

    fn wire_state(&self, slice: &StateSlice, package: &Package, shared: &mut SharedFiles<'_>) {
        let controller = slice.class("Controller");
        let controller_var = slice.instance("Controller");
        let import = package.import(&slice.path(&format!("{}_controller.dart", slice.noun)));

        shared.entry.add_import(GET);
        shared.entry.add_import(import.clone());
        shared.entry.add_setup(format!("Get.put({controller}());"));

        shared.root.add_import(GET);
        shared.root.add_import(import);
        shared
            .root
            .add_binding(format!("final {controller_var} = Get.find<{controller}>();"));
        shared.root.add_builder("obx", "Obx(\n  () => {child},\n)");
        shared
            .root
            .set_app_arg(
                slice.value,
                &format!("{controller_var}.{}.value", slice.value),
            );
    }

    fn wire_service(
        &self,
        service: &ServiceSlice,
        package: &Package,
        shared: &mut SharedFiles<'_>,
    ) {
        shared.entry.add_import(GET);
        shared.entry.add_import(package.import(service.path));
        shared
            .entry
            .add_setup(format!("Get.put({}());", service.class));
    }
}
