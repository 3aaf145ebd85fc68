use nexus_config::NexusConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &NexusConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &NexusConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.api.is_customized() && has_env_prefix(&env_keys, "NEXUS_API") {
        warnings.push(
            "API config appears default while NEXUS_API* env vars exist. Use double underscores (example: NEXUS_API__BASE_URL)."
                .to_string(),
        );
    }

    // NEXUS_AUTH__TOKEN feeds the token store, not the [auth] section.
    let auth_keys = env_keys
        .iter()
        .filter(|key| key.as_str() != nexus_auth::token_store::TOKEN_ENV_VAR)
        .cloned()
        .collect::<Vec<_>>();
    if !config.auth.is_customized() && has_env_prefix(&auth_keys, "NEXUS_AUTH") {
        warnings.push(
            "Auth config appears default while NEXUS_AUTH* env vars exist. Use double underscores (example: NEXUS_AUTH__LOGIN_URL)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
