//! Runtime settings with TOML file support.
//!
//! Precedence, highest first: CLI flag or environment variable, then the
//! config file, then the built-in default. The master key and the asset
//! issuer have no default; the issuer is checksum-validated here so a
//! typo fails at startup instead of on the first trustline.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use lumen_crypto::{parse_address, parse_keypair};
use lumen_types::{AssetCode, CreditAsset, Keypair, Network};
use serde::Deserialize;

use crate::Cli;

const DEFAULT_ASSET_CODE: &str = "USDC";
const DEFAULT_LISTEN_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: &str = "info";

/// File-level settings. Every field is optional; anything missing falls
/// through to the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub network: Option<String>,
    pub master_key: Option<String>,
    pub asset_code: Option<String>,
    pub asset_issuer: Option<String>,
    pub horizon_url: Option<String>,
    pub listen_port: Option<u16>,
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Load settings from a TOML file. Unknown keys are an error, so a
    /// misspelled setting cannot silently fall back to a default.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

/// Fully resolved and validated settings.
pub struct Settings {
    pub network: Network,
    pub master: Keypair,
    pub asset: CreditAsset,
    pub node_url: String,
    pub listen_port: u16,
    pub log_level: String,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("network", &self.network)
            .field("master", &"<redacted>")
            .field("asset", &self.asset)
            .field("node_url", &self.node_url)
            .field("listen_port", &self.listen_port)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Settings {
    /// Merge CLI values over the file base, fill defaults, and validate
    /// every key before any network traffic happens.
    pub fn resolve(cli: Cli, file: FileConfig) -> Result<Settings> {
        let network: Network = cli
            .network
            .or(file.network)
            .unwrap_or_else(|| "testnet".to_string())
            .parse()
            .context("invalid network")?;

        let master = cli
            .master_key
            .or(file.master_key)
            .context("a master key is required (--master-key or LUMEN_MASTER_KEY)")?;
        let master = parse_keypair(&master).context("invalid master key")?;

        let code = cli
            .asset_code
            .or(file.asset_code)
            .unwrap_or_else(|| DEFAULT_ASSET_CODE.to_string());
        let code = AssetCode::new(code).context("invalid asset code")?;
        let issuer = cli
            .asset_issuer
            .or(file.asset_issuer)
            .context("an asset issuer is required (--asset-issuer or LUMEN_ASSET_ISSUER)")?;
        let issuer = parse_address(&issuer).context("invalid asset issuer address")?;

        let node_url = cli
            .horizon_url
            .or(file.horizon_url)
            .unwrap_or_else(|| network.node_url().to_string());
        let listen_port = cli
            .listen_port
            .or(file.listen_port)
            .unwrap_or(DEFAULT_LISTEN_PORT);
        let log_level = cli
            .log_level
            .or(file.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Settings {
            network,
            master,
            asset: CreditAsset { code, issuer },
            node_url,
            listen_port,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use lumen_crypto::{encode_seed, generate_keypair};

    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            network: None,
            master_key: None,
            asset_code: None,
            asset_issuer: None,
            horizon_url: None,
            listen_port: None,
            log_level: None,
            config: None,
        }
    }

    fn master_secret() -> String {
        encode_seed(generate_keypair().seed.as_bytes())
    }

    fn issuer_address() -> String {
        generate_keypair().address.to_string()
    }

    #[test]
    fn defaults_fill_everything_but_the_credentials() {
        let cli = Cli {
            master_key: Some(master_secret()),
            asset_issuer: Some(issuer_address()),
            ..bare_cli()
        };

        let settings = Settings::resolve(cli, FileConfig::default()).unwrap();

        assert_eq!(settings.network, Network::Testnet);
        assert_eq!(settings.asset.code.as_str(), "USDC");
        assert_eq!(settings.node_url, Network::Testnet.node_url());
        assert_eq!(settings.listen_port, 8080);
        assert_eq!(settings.log_level, "info");
        assert!(matches!(settings.master, Keypair::Full(_)));
    }

    #[test]
    fn cli_values_override_the_file() {
        let cli = Cli {
            network: Some("public".into()),
            master_key: Some(master_secret()),
            asset_issuer: Some(issuer_address()),
            listen_port: Some(9090),
            ..bare_cli()
        };
        let file = FileConfig {
            network: Some("testnet".into()),
            listen_port: Some(3000),
            log_level: Some("debug".into()),
            ..FileConfig::default()
        };

        let settings = Settings::resolve(cli, file).unwrap();

        assert_eq!(settings.network, Network::Public);
        assert_eq!(settings.listen_port, 9090);
        // Untouched by the CLI, so the file wins over the default.
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn file_supplies_what_the_cli_omits() {
        let file = FileConfig {
            master_key: Some(master_secret()),
            asset_code: Some("EURT".into()),
            asset_issuer: Some(issuer_address()),
            horizon_url: Some("http://127.0.0.1:8000".into()),
            ..FileConfig::default()
        };

        let settings = Settings::resolve(bare_cli(), file).unwrap();

        assert_eq!(settings.asset.code.as_str(), "EURT");
        assert_eq!(settings.node_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn a_missing_master_key_fails_resolution() {
        let cli = Cli {
            asset_issuer: Some(issuer_address()),
            ..bare_cli()
        };

        let err = Settings::resolve(cli, FileConfig::default()).unwrap_err();
        assert!(err.to_string().contains("master key is required"));
    }

    #[test]
    fn a_missing_issuer_fails_resolution() {
        let cli = Cli {
            master_key: Some(master_secret()),
            ..bare_cli()
        };

        let err = Settings::resolve(cli, FileConfig::default()).unwrap_err();
        assert!(err.to_string().contains("asset issuer is required"));
    }

    #[test]
    fn an_issuer_checksum_typo_is_caught_at_startup() {
        let mut issuer = issuer_address();
        let flipped = if issuer.ends_with('A') { 'B' } else { 'A' };
        issuer.pop();
        issuer.push(flipped);

        let cli = Cli {
            master_key: Some(master_secret()),
            asset_issuer: Some(issuer),
            ..bare_cli()
        };

        let err = Settings::resolve(cli, FileConfig::default()).unwrap_err();
        assert!(err.to_string().contains("invalid asset issuer address"));
    }

    #[test]
    fn an_unknown_network_name_fails_resolution() {
        let cli = Cli {
            network: Some("mainnet".into()),
            master_key: Some(master_secret()),
            asset_issuer: Some(issuer_address()),
            ..bare_cli()
        };

        assert!(Settings::resolve(cli, FileConfig::default()).is_err());
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let toml = r#"
            network = "testnet"
            asset_isser = "oops"
        "#;

        assert!(toml::from_str::<FileConfig>(toml).is_err());
    }
}
