use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` 優先，沒有設定時使用 crate 的預設等級
fn model_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "klaviyo_models=debug,info"
    } else {
        "klaviyo_models=info"
    }
}

/// 終端機用的精簡格式
///
/// 日誌寫到 stderr，stdout 留給序列化輸出。
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(model_filter(default_directive(verbose)))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// 每行一筆 JSON，給收集日誌的系統使用
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(model_filter(default_directive(false)))
        .with(fmt::layer().with_writer(std::io::stderr).json())
        .init();
}
