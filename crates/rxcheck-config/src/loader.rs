use anyhow::{anyhow, Result};
use config::{Config, Environment, File, FileFormat};
use std::path::{Path, PathBuf};

use crate::AppConfig;

/// 默认的环境变量前缀，例如 `RXCHECK__SERVER__PORT=9000`
pub const DEFAULT_ENV_PREFIX: &str = "RXCHECK";

/// 配置加载器
///
/// 优先级：环境变量 > 配置文件 > 默认值
pub struct ConfigLoader {
    config_path: PathBuf,
    env_prefix: String,
}

impl ConfigLoader {
    /// 创建配置加载器
    pub fn new<P: AsRef<Path>>(config_path: P) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// 使用其他环境变量前缀
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// 加载并验证配置
    ///
    /// 配置文件不存在时使用默认值
    pub fn load(&self) -> Result<AppConfig> {
        let mut builder = Config::builder();

        if self.config_path.exists() {
            builder = builder.add_source(File::new(
                self.config_path
                    .to_str()
                    .ok_or_else(|| anyhow!("Invalid config path"))?,
                FileFormat::Toml,
            ));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }
}
