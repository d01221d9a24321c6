//! 日志初始化

use tracing::{Level, debug};

/// 安装全局 fmt subscriber
///
/// 日志写到 stderr，stdout 留给 headless 模式的采样输出。
/// 重复调用时保留已安装的 subscriber。
pub fn init(level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = installed {
        debug!(error = %e, ?level, "已存在全局 subscriber，跳过日志初始化");
    }
}
