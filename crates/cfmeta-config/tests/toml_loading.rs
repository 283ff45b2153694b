//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directory and env vars.

use cfmeta_config::{CfmetaConfig, ConfigError, PROJECT_CONFIG};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[output]
indent = 2
include_failed = true

[check]
fail_on_diagnostics = false
",
        )?;

        let config: CfmetaConfig = Figment::from(Serialized::defaults(CfmetaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.output.indent, 2);
        assert!(config.output.include_failed);
        assert!(!config.check.fail_on_diagnostics);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[output]\ninclude_failed = true\n")?;

        let config: CfmetaConfig = Figment::from(Serialized::defaults(CfmetaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.output.indent, 4);
        assert!(config.output.include_failed);
        assert!(config.check.fail_on_diagnostics);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".cfmeta")).expect("create .cfmeta");
        jail.create_file(PROJECT_CONFIG, "[output]\nindent = 8\n")?;

        let config = CfmetaConfig::load().expect("config loads");
        assert_eq!(config.output.indent, 8);
        Ok(())
    });
}

#[test]
fn out_of_range_project_value_fails_load() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".cfmeta")).expect("create .cfmeta");
        jail.create_file(PROJECT_CONFIG, "[output]\nindent = 64\n")?;

        let result = CfmetaConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn malformed_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".cfmeta")).expect("create .cfmeta");
        jail.create_file(PROJECT_CONFIG, "[output]\nindent = \"wide\"\n")?;

        let result = CfmetaConfig::load();
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
