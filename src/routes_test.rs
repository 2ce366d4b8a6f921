use super::*;

#[test]
fn leptos_config_failure_converts_and_names_its_source() {
    fn load() -> Result<(), RouterError> {
        let missing: Result<(), LeptosConfigError> = Err(LeptosConfigError::ConfigSectionNotFound);
        missing?;
        Ok(())
    }
    let err = load().unwrap_err();
    assert!(matches!(err, RouterError::LeptosConfig(LeptosConfigError::ConfigSectionNotFound)));
    assert_eq!(
        err.to_string(),
        "leptos configuration: package.metadata.leptos section missing from Cargo.toml"
    );
}

#[test]
fn env_failure_keeps_its_detail() {
    let err = RouterError::from(LeptosConfigError::EnvVarError("LEPTOS_SITE_ADDR".to_owned()));
    assert_eq!(err.to_string(), "leptos configuration: Config Error: LEPTOS_SITE_ADDR");
}
