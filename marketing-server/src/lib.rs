//! Marketing Server - 餐厅营销平台的模拟数据层
//!
//! # 架构概述
//!
//! - **数据仓库** (`store`): 进程内状态, 启动时载入种子数据
//! - **服务门面** (`service`): 带模拟延迟和取消的异步 API
//! - **内容生成** (`generator`): fixture / LLM 两种可插拔实现
//! - **HTTP API** (`api`): 统一响应格式的 REST 接口
//!
//! # 模块结构
//!
//! ```text
//! marketing-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── store/         # 内存数据仓库和种子数据
//! ├── service/       # 服务门面和延迟模拟
//! ├── generator/     # 内容生成器
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志
//! ```

pub mod api;
pub mod core;
pub mod generator;
pub mod service;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use generator::{ContentGenerator, ContentRequest, GeneratedPayload};
pub use service::{ConnectionInfo, MarketingService};
pub use store::{AppStore, StoreEvent};

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    __  ___           __        __  _
   /  |/  /___ ______/ /_____  / /_(_)___  ____ _
  / /|_/ / __ `/ ___/ //_/ _ \/ __/ / __ \/ __ `/
 / /  / / /_/ / /  / ,< /  __/ /_/ / / / / /_/ /
/_/  /_/\__,_/_/  /_/|_|\___/\__/_/_/ /_/\__, /
                                        /____/
    "#
    );
}

/// 加载 `.env`、读取配置并初始化日志
///
/// Must run inside the tokio runtime when `LOG_DIR` is set.
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )?;
    Ok(config)
}
