use std::io::{self, IsTerminal};

use crate::config::config::Cli;
use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，持有配置來源的適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            paths: self.cli.paths.clone(),
            // 進度條畫在 stderr，非終端機時關閉
            show_progress: io::stderr().is_terminal(),
        })
    }
}
