use crate::domain::channel::ChannelEndpoint;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CHANNELS: &[(&str, &str)] = &[
    ("2999637", "PFQPJQSYJ2C7UPUA"),
    ("2999638", "9GVJ7I9FYVXZJZVA"),
    ("2999639", "ANMIEHA84AAWBPAN"),
    ("2999642", "NILAJ1NOP4YQIEFW"),
    ("2999643", "L4R9O4OH4RBT6ORV"),
    ("2999644", "M5W0QKQJJT65FK52"),
    ("2999645", "JNULQDROSJOOPU08"),
    ("2999649", "GPIU77SPCCTVFU6M"),
    ("2999651", "ZOMAJTNSSBDUG7MX"),
    ("2999652", "XV2R0CRHV51AGG8O"),
    ("2982770", "S2CGQJ8V23UMYPS4"),
    ("2999657", "8YGJZ12W88R23OJ0"),
    ("2999660", "2VXFAGHM2YKFS5HG"),
    ("2999661", "SJ9KGROXAAGC3QRT"),
    ("2999663", "HJ15NA9W214TBDP1"),
    ("2999925", "VCOT9GK1S03R588N"),
    ("2982804", "PWPPGP8ADJB8ZYZI"),
    ("2999930", "CTAR92U1X687H3Y2"),
    ("2999931", "PXR7J9ZODHSCBXFI"),
    ("2999956", "K1Y443I5V3YK3QU6"),
    ("2999958", "HCKQAR76APFD6DPO"),
    ("2999959", "3CVOOJ1QB4MPLWLX"),
    ("2999960", "1RCYMLAPISX1ZFGD"),
    ("2999994", "LJ64V1Z5FHJM9RQ5"),
    ("2999996", "XVJS12245V522652"),
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid config: {0}")]
    Validation(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub thingspeak: ThingSpeakSettings,
    #[serde(default)]
    pub poll: PollSettings,
    #[serde(default = "default_channels")]
    pub channels: Vec<ChannelConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThingSpeakSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_results")]
    pub results: u32,
}

impl Default for ThingSpeakSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            results: default_results(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollSettings {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChannelConfig {
    pub channel_id: String,
    pub api_key: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_base_url() -> String {
    "https://api.thingspeak.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_results() -> u32 {
    1
}

fn default_interval_secs() -> u64 {
    30
}

fn default_channels() -> Vec<ChannelConfig> {
    DEFAULT_CHANNELS
        .iter()
        .map(|(channel_id, api_key)| ChannelConfig {
            channel_id: channel_id.to_string(),
            api_key: api_key.to_string(),
        })
        .collect()
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channels.is_empty() {
            return Err(ConfigError::Validation(
                "at least one channel must be configured".to_string(),
            ));
        }
        for (index, channel) in self.channels.iter().enumerate() {
            if channel.channel_id.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "channels[{}].channel_id must not be empty",
                    index
                )));
            }
            if channel.api_key.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "channels[{}].api_key must not be empty",
                    index
                )));
            }
        }
        if self.poll.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "poll.interval_secs must be greater than 0".to_string(),
            ));
        }
        if self.thingspeak.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "thingspeak.request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.thingspeak.results == 0 {
            return Err(ConfigError::Validation(
                "thingspeak.results must be greater than 0".to_string(),
            ));
        }
        if self.thingspeak.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "thingspeak.base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn endpoints(&self) -> Vec<ChannelEndpoint> {
        self.channels
            .iter()
            .map(|c| ChannelEndpoint::new(c.channel_id.clone(), c.api_key.clone()))
            .collect()
    }
}

/// Load `config/dashboard.*` (optional) with `DASHBOARD__*` environment overrides.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    let app_config: AppConfig = settings.try_deserialize()?;
    app_config.validate()?;
    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = from_toml("");
        assert_eq!(config.channels.len(), 25);
        assert_eq!(config.poll.interval_secs, 30);
        assert_eq!(config.thingspeak.results, 1);
        assert_eq!(config.thingspeak.base_url, "https://api.thingspeak.com");
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoints()[0], ChannelEndpoint::new("2999637", "PFQPJQSYJ2C7UPUA"));
    }

    #[test]
    fn test_overrides() {
        let config = from_toml(
            r#"
            [poll]
            interval_secs = 5

            [[channels]]
            channel_id = "1"
            api_key = "abc"
            "#,
        );
        assert_eq!(config.poll.interval_secs, 5);
        assert_eq!(config.endpoints(), vec![ChannelEndpoint::new("1", "abc")]);
    }

    #[test]
    fn test_validation_rejects_blank_api_key() {
        let config = from_toml(
            r#"
            [[channels]]
            channel_id = "1"
            api_key = " "
            "#,
        );
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("channels[0].api_key"));
    }

    #[test]
    fn test_validation_rejects_zero_interval() {
        let config = from_toml("[poll]\ninterval_secs = 0\n");
        assert!(config.validate().is_err());
    }
}
