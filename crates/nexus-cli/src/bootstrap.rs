use anyhow::Context;
use nexus_config::NexusConfig;

/// Read `.env`, then the layered TOML and `NEXUS_*` configuration.
pub fn load_config() -> anyhow::Result<NexusConfig> {
    NexusConfig::load_with_dotenv().context("failed to load nexus configuration")
}
