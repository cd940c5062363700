use super::{patch_shared, Integrator};
use crate::error::Result;
use crate::generators::GenerationContext;
use crate::workspace::Workspace;

/// Initializes Firebase and the notification service before the app starts.
pub struct PushNotificationIntegrator;

impl Integrator for PushNotificationIntegrator {
    fn name(&self) -> &str {
        "push notification integration"
    }

    fn integrate(&self, ctx: &GenerationContext<'_>, ws: &mut Workspace) -> Result<()> {
        patch_shared(ws, self.name(), |shared| {
            let entry = &mut *shared.entry;
            entry.add_import("package:firebase_core/firebase_core.dart");
            entry.add_import(ctx.package.import("core/notifications/notification_service.dart"));
            entry.add_async_setup("await Firebase.initializeApp();");
            entry.add_setup("final notificationService = NotificationService();");
            entry.add_async_setup("await notificationService.initialize();");
        });
        Ok(())
    }
}
