use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{ConfigError, ConfigResult};

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub max_log_file_size: u64,
    pub max_log_files: usize,
    /// 路径生产线程与消费者之间的通道容量，0 表示逐条交接
    pub path_stream_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            log_file: "graphsearch".to_string(),
            max_log_file_size: 100 * 1024 * 1024, // 100MB
            max_log_files: 5,
            path_stream_buffer: 0,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        // flexi_logger 也接受 "info, mymodule=debug" 形式，这里只校验第一段
        let level = self
            .log_level
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "未知的日志级别: {}",
                self.log_level
            )));
        }
        if self.log_file.is_empty() {
            return Err(ConfigError::Validation("日志文件名不能为空".to_string()));
        }
        if self.max_log_files == 0 {
            return Err(ConfigError::Validation("max_log_files 必须大于 0".to_string()));
        }
        Ok(())
    }
}
