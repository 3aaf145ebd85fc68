//! `.env` loading. Kept in its own test binary because dotenvy writes into
//! the process environment, which `Jail` does not restore.

use figment::Jail;
use nexus_config::NexusConfig;
use std::path::PathBuf;

#[test]
fn dotenv_file_feeds_env_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "NEXUS_GENERAL__DOWNLOAD_DIR=tests-out\n")?;

        let config = NexusConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.general.download_dir, PathBuf::from("tests-out"));
        Ok(())
    });
}
