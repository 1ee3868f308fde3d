use std::path::PathBuf;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use store::config::DEFAULT_API_BASE_URL;
use store::ClinicConfig;

/// Per-user settings file, e.g. `~/.config/clinic/clinic.toml` on Linux.
fn user_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("clinic").join(ClinicConfig::filename()))
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("api.base_url", DEFAULT_API_BASE_URL)?
        .set_default("ui.page_size", 10)?
        .set_default("ui.currency", "$")
}

fn environment() -> Environment {
    Environment::with_prefix("CLINIC")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Startup configuration, lowest priority first: built-in defaults, the
/// per-user `clinic.toml`, a `clinic.toml` in the working directory, then
/// `CLINIC_*` variables (`CLINIC_API__BASE_URL`, `CLINIC_UI__PAGE_SIZE`, ...).
pub fn load() -> Result<ClinicConfig, ConfigError> {
    let mut builder = defaults()?;
    if let Some(path) = user_file() {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
    }
    builder
        .add_source(
            File::with_name(ClinicConfig::filename())
                .format(FileFormat::Toml)
                .required(false),
        )
        .add_source(environment())
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::{remove_var, set_var};

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            [api]
            base_url = "https://clinic.example/api"

            [payroll]
            tax_rate = 0.2
        "#;
        let settings: ClinicConfig = defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.api.base_url, "https://clinic.example/api");
        assert_eq!(settings.payroll.tax_rate, 0.2);
        assert_eq!(settings.ui.page_size, 10);
        assert_eq!(settings.payroll.standard_hours, 160.0);
    }

    #[test]
    fn test_environment_overrides() {
        set_var("CLINIC_API__BASE_URL", "http://10.0.0.5:9000/api");
        set_var("CLINIC_UI__PAGE_SIZE", "25");
        let built = defaults()
            .unwrap()
            .add_source(environment())
            .build()
            .and_then(|c| c.try_deserialize::<ClinicConfig>());
        remove_var("CLINIC_API__BASE_URL");
        remove_var("CLINIC_UI__PAGE_SIZE");

        let settings = built.unwrap();
        assert_eq!(settings.api.base_url, "http://10.0.0.5:9000/api");
        assert_eq!(settings.ui.page_size, 25);
        assert_eq!(settings.ui.currency, "$");
    }
}
