//! `tracing` の購読者を初期化する。

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// ログの出力形式。
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}

/// `RUST_LOG`（未設定なら `info`）で絞り込み、標準エラーへ出力する。
pub fn init(format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
    .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}
