use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::ops::RangeInclusive;

use crate::models::order::OrderId;

pub const ENV_PREFIX: &str = "FREIGHTCORE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    pub order_id_min: OrderId,
    pub order_id_max: OrderId,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            log_format: LogFormat::Pretty,
            order_id_min: 1000,
            order_id_max: 9999,
        }
    }
}

impl Config {
    /// Defaults, overridden by `FREIGHTCORE_*` variables (a `.env` file is
    /// loaded first when present).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let defaults = Config::default();
        let config: Config = ::config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_format", "pretty")?
            .set_default("order_id_min", i64::from(defaults.order_id_min))?
            .set_default("order_id_max", i64::from(defaults.order_id_max))?
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.order_id_min > self.order_id_max {
            anyhow::bail!(
                "order_id_min ({}) must not exceed order_id_max ({})",
                self.order_id_min,
                self.order_id_max
            );
        }
        Ok(())
    }

    pub fn order_id_range(&self) -> RangeInclusive<OrderId> {
        self.order_id_min..=self.order_id_max
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid host {:?}: {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
