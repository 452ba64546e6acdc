use crate::core::{Config, Result, ServerError};
use crate::service::MarketingService;
use crate::store::AppStore;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 克隆成本极低 (内部均为 Arc)。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | AppStore | 内存数据仓库 |
/// | service | MarketingService | 营销服务门面 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub store: AppStore,
    pub service: MarketingService,
}

impl ServerState {
    pub fn new(config: Config, store: AppStore, service: MarketingService) -> Self {
        Self {
            config,
            store,
            service,
        }
    }

    /// 初始化服务器状态
    ///
    /// Seeds the store and wires the content generator chosen by `config`.
    pub fn initialize(config: &Config) -> Result<Self> {
        let store = AppStore::seeded();
        let service = MarketingService::from_config(config, store.clone())
            .map_err(|e| ServerError::Config(e.message))?;

        tracing::info!(
            generator = %config.content_generator.as_str(),
            policy = %config.missing_reference_policy.as_str(),
            api_latency_ms = config.latency.api.as_millis() as u64,
            "Server state initialized"
        );
        Ok(Self::new(config.clone(), store, service))
    }

    pub fn service(&self) -> &MarketingService {
        &self.service
    }
}
