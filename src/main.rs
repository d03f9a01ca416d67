// ==========================================
// 应急资源调度系统 - 控制台主入口
// ==========================================
// 用法: emergency-dispatch [CONFIG_PATH]
// ==========================================

use anyhow::{Context, Result};
use emergency_dispatch::config::ConfigManager;
use emergency_dispatch::{logging, AllocationEngine, UserConsole};
use std::io;
use std::path::PathBuf;

fn main() -> Result<()> {
    // 命令行第一个参数为配置文件路径（可选）
    let explicit = std::env::args_os().nth(1).map(PathBuf::from);

    let manager = ConfigManager::load(explicit.as_deref()).context("加载配置失败")?;

    // 初始化日志系统
    logging::init(&manager.config().log_level);

    tracing::info!("==================================================");
    tracing::info!("{}", emergency_dispatch::APP_NAME);
    tracing::info!("系统版本: {}", emergency_dispatch::VERSION);
    tracing::info!("配置来源: {:?}", manager.source());
    tracing::info!("==================================================");

    let config = manager.into_config();
    let stdin = io::stdin();
    let mut console = UserConsole::new(
        &config,
        AllocationEngine::new(),
        stdin.lock(),
        io::stdout(),
    );
    console.run()?;

    tracing::info!("控制台已退出");
    Ok(())
}
