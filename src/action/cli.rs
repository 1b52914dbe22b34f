use std::io;

use clap::Parser;

use crate::config::config::Cli;
use crate::config::ports::{ConfigPort, ConversionPort};
use crate::facade::conversion_facade::ConversionAdapter;
use crate::models::conversion::BatchSummary;
use crate::service::config_service::{CliConfigAdapter, ConfigService};

pub fn process_cli_mode() -> io::Result<BatchSummary> {
    let cli = Cli::parse();
    process_cli(cli, &ConversionAdapter)
}

pub fn process_cli(cli: Cli, conversion_port: &dyn ConversionPort) -> io::Result<BatchSummary> {
    let config_port: Box<dyn ConfigPort> = Box::new(CliConfigAdapter::new(cli));
    let config_service = ConfigService::new(config_port);
    let config = config_service.get_config()?;
    log::debug!("實際使用的配置：{:?}", config);

    conversion_port.execute(config)
}
