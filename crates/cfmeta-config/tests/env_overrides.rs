use cfmeta_config::{CfmetaConfig, PROJECT_CONFIG};
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn env_vars_map_to_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("CFMETA_OUTPUT__INDENT", "2");
        jail.set_env("CFMETA_CHECK__FAIL_ON_DIAGNOSTICS", "false");

        let config = CfmetaConfig::load().expect("config loads");
        assert_eq!(config.output.indent, 2);
        assert!(!config.check.fail_on_diagnostics);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".cfmeta")).expect("create .cfmeta");
        jail.create_file(PROJECT_CONFIG, "[output]\nindent = 8\ninclude_failed = true\n")?;
        jail.set_env("CFMETA_OUTPUT__INDENT", "3");

        let config = CfmetaConfig::load().expect("config loads");
        assert_eq!(config.output.indent, 3);
        assert!(config.output.include_failed);
        Ok(())
    });
}
