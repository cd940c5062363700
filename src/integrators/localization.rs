use super::{patch_shared, Integrator};
use crate::error::Result;
use crate::generators::GenerationContext;
use crate::strategy::LOCALE;
use crate::workspace::Workspace;

/// Generated `AppLocalizations`, shipped by `flutter gen-l10n`
const APP_LOCALIZATIONS: &str = "package:flutter_gen/gen_l10n/app_localizations.dart";

/// Registers the localization delegates and threads the selected locale.
pub struct LocalizationIntegrator;

impl Integrator for LocalizationIntegrator {
    fn name(&self) -> &str {
        "localization integration"
    }

    fn integrate(&self, ctx: &GenerationContext<'_>, ws: &mut Workspace) -> Result<()> {
        patch_shared(ws, self.name(), |shared| {
            shared.root.add_import(APP_LOCALIZATIONS);
            shared
                .root
                .set_app_arg(
                    "localizationsDelegates",
                    "AppLocalizations.localizationsDelegates",
                );
            shared
                .root
                .set_app_arg("supportedLocales", "AppLocalizations.supportedLocales");
            ctx.wiring.wire_state(&LOCALE, &ctx.package, shared);
        });
        Ok(())
    }
}
