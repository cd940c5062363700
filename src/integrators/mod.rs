//! Cross-file integrators.
//!
//! Integrators wire a module into the two shared files, the entry point and the root
//! widget. They edit the structured models held by the workspace, so every edit is
//! idempotent and the order integrators run in only matters where the pipeline says so.

mod error_handling;
mod localization;
mod navigation;
mod network;
mod push_notification;
mod theme;

pub use error_handling::ErrorHandlingIntegrator;
pub use localization::LocalizationIntegrator;
pub use navigation::NavigationIntegrator;
pub use network::NetworkIntegrator;
pub use push_notification::PushNotificationIntegrator;
pub use theme::ThemeIntegrator;

use crate::config::Module;
use crate::error::Result;
use crate::generators::GenerationContext;
use crate::workspace::{SharedFiles, Workspace};
use log::debug;

/// A pipeline step editing the shared files.
pub trait Integrator {
    fn name(&self) -> &str;

    fn integrate(&self, ctx: &GenerationContext<'_>, ws: &mut Workspace) -> Result<()>;
}

/// The integrator of `module`, `None` for modules that only generate their own files.
pub fn integrator_for(module: Module) -> Option<Box<dyn Integrator>> {
    match module {
        Module::ThemeManager => Some(Box::new(ThemeIntegrator)),
        Module::Localization => Some(Box::new(LocalizationIntegrator)),
        Module::PushNotification => Some(Box::new(PushNotificationIntegrator)),
        Module::NetworkLayer => Some(Box::new(NetworkIntegrator)),
        Module::ErrorHandling => Some(Box::new(ErrorHandlingIntegrator)),
        Module::Routing => None,
    }
}

/// Runs `apply` on the shared files, or warns and skips when one of them does not exist.
///
/// Returns whether `apply` ran.
pub(crate) fn patch_shared<F>(ws: &mut Workspace, step: &str, apply: F) -> bool
where
    F: FnOnce(&mut SharedFiles<'_>),
{
    if let Some(missing) = ws.missing_shared_file() {
        ws.warn(format!("'{missing}' not found, skipping {step}"));
        return false;
    }
    match ws.shared_files() {
        Some(mut shared) => {
            apply(&mut shared);
            debug!(
                "{}: entry point {:?}, root widget {:?}",
                step,
                shared.entry.stage(),
                shared.root.stage()
            );
            true
        }
        None => false,
    }
}
