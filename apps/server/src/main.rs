use anyhow::Context;
use taco::domain::config::ApiConfig;
use taco::kernel::config::load_config;
use taco_logger::{Logger, parse_level};
use taco_server::Server;

fn init_logger(cfg: &ApiConfig) -> anyhow::Result<Logger> {
    let logging = &cfg.logging;
    let mut builder = Logger::builder(env!("CARGO_PKG_NAME")).level(parse_level(&logging.level)?);

    if let Some(filter) = &logging.filter {
        builder = builder.env_filter(filter);
    }
    if let Some(path) = &logging.path {
        builder = builder.path(path).json(logging.json);
    }

    builder.init().context("Failed to initialize logging")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg)?;

    Server::builder().config(cfg).build()?.run().await
}
