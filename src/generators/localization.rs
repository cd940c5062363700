use super::{GenerationContext, Generator, ModuleGenerator};
use crate::config::{Module, ProjectConfig};
use crate::constants::{MANIFEST_FILE, SUPPORTED_LOCALES};
use crate::error::Result;
use crate::workspace::{GeneratedFile, Owner, Workspace};
use std::path::PathBuf;

/// Directory of the ARB resource bundles
const ARB_DIR: &str = "lib/l10n";

fn welcome_message(locale: &str) -> &'static str {
    match locale {
        "es" => "Bienvenido",
        _ => "Welcome",
    }
}

/// Builds the ARB bundle of `locale`: the app title, a welcome message and one title
/// message per feature. The first supported locale is the template and carries the
/// message descriptions.
pub fn arb_bundle(config: &ProjectConfig, locale: &str) -> Result<String> {
    let is_template = SUPPORTED_LOCALES.first() == Some(&locale);
    let mut messages = serde_json::Map::new();
    messages.insert("@@locale".into(), locale.into());
    messages.insert("appTitle".into(), config.title().into());
    if is_template {
        messages.insert(
            "@appTitle".into(),
            serde_json::json!({ "description": "The application title" }),
        );
    }
    messages.insert("welcome".into(), welcome_message(locale).into());
    for feature in config.features() {
        let key = format!("page{}Title", feature.pascal);
        messages.insert(key.clone(), feature.name.clone().into());
        if is_template {
            messages.insert(
                format!("@{key}"),
                serde_json::json!({ "description": format!("Title of the {} page", feature.name) }),
            );
        }
    }
    let mut out = serde_json::to_string_pretty(&serde_json::Value::Object(messages))?;
    out.push('\n');
    Ok(out)
}

/// The localization module: templates, one ARB bundle per supported locale and the
/// manifest switch enabling code generation.
pub struct LocalizationGenerator {
    inner: ModuleGenerator,
}

impl LocalizationGenerator {
    pub fn new() -> Self {
        Self {
            inner: ModuleGenerator::new(Module::Localization),
        }
    }
}

impl Default for LocalizationGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for LocalizationGenerator {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn generate(&self, ctx: &GenerationContext<'_>, ws: &mut Workspace) -> Result<()> {
        self.inner.generate(ctx, ws)?;

        ws.ensure_dir(ARB_DIR);
        for locale in SUPPORTED_LOCALES {
            ws.add_file(GeneratedFile {
                path: PathBuf::from(format!("{ARB_DIR}/app_{locale}.arb")),
                content: arb_bundle(ctx.config, locale)?,
                owner: Owner::new(self.name(), "localization/arb"),
            });
        }

        match ws.manifest_mut() {
            Some(manifest) => {
                manifest.set_flutter_option("generate", "true");
            }
            None => ws.warn(format!(
                "{MANIFEST_FILE} not found, skipping flutter generate flag for {}",
                self.name()
            )),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Architecture, StateManagement};

    #[test]
    fn test_arb_bundles() {
        let config = ProjectConfig::new(
            "demo_app",
            Architecture::CleanArchitecture,
            StateManagement::Default,
            ["User Profile"],
            [Module::Localization],
        )
        .unwrap();

        let en: serde_json::Value =
            serde_json::from_str(&arb_bundle(&config, "en").unwrap()).unwrap();
        assert_eq!(en["@@locale"], "en");
        assert_eq!(en["appTitle"], "Demo App");
        assert_eq!(en["pageUserProfileTitle"], "User Profile");
        assert!(en.get("@pageUserProfileTitle").is_some());

        let es = arb_bundle(&config, "es").unwrap();
        assert!(es.starts_with(concat!(
            "{\n  \"@@locale\": \"es\",\n",
            "  \"appTitle\": \"Demo App\",\n",
            "  \"welcome\": \"Bienvenido\""
        )));
        assert!(!es.contains("\"@appTitle\""));
    }

    #[test]
    fn test_feature_keys_do_not_shadow_app_messages() {
        let config = ProjectConfig::new(
            "demo_app",
            Architecture::Mvc,
            StateManagement::Default,
            ["App", "Welcome"],
            [Module::Localization],
        )
        .unwrap();

        let en: serde_json::Value =
            serde_json::from_str(&arb_bundle(&config, "en").unwrap()).unwrap();
        assert_eq!(en["appTitle"], "Demo App");
        assert_eq!(en["welcome"], "Welcome");
        assert_eq!(en["pageAppTitle"], "App");
        assert_eq!(en["pageWelcomeTitle"], "Welcome");
    }
}
