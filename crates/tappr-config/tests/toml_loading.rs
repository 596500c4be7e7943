//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use tappr_config::TapprConfig;

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
question_count = 7
session_ttl_hours = 24
"#,
        )?;

        let config: TapprConfig = Figment::from(Serialized::defaults(TapprConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.question_count, 7);
        assert_eq!(config.general.session_ttl_hours, 24);
        // Unset sections keep their defaults.
        assert_eq!(config.database.path, "tappr.db");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "from-toml.db"
"#,
        )?;
        jail.set_env("TAPPR_DATABASE__PATH", "from-env.db");
        jail.set_env("TAPPR_GENERAL__QUESTION_COUNT", "3");

        let config: TapprConfig = Figment::from(Serialized::defaults(TapprConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("TAPPR_").split("__"))
            .extract()?;

        assert_eq!(config.database.path, "from-env.db");
        assert_eq!(config.general.question_count, 3);
        Ok(())
    });
}
