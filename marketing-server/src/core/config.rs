use std::str::FromStr;
use std::time::Duration;

use crate::core::ServerError;

/// 缺失引用时的处理策略
///
/// Applies to menu mutations that name a category or item id that does not
/// exist. `Ignore` keeps the store untouched and reports success; `Reject`
/// surfaces a not-found error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingReferencePolicy {
    #[default]
    Ignore,
    Reject,
}

impl MissingReferencePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Reject => "reject",
        }
    }
}

impl FromStr for MissingReferencePolicy {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "reject" => Ok(Self::Reject),
            other => Err(ServerError::Config(format!(
                "unknown MISSING_REFERENCE_POLICY '{other}' (expected ignore|reject)"
            ))),
        }
    }
}

/// 内容生成器类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GeneratorKind {
    /// Deterministic canned payloads
    #[default]
    Fixture,
    /// OpenAI-compatible chat completion endpoint
    Llm,
}

impl GeneratorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixture => "fixture",
            Self::Llm => "llm",
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixture" => Ok(Self::Fixture),
            "llm" => Ok(Self::Llm),
            other => Err(ServerError::Config(format!(
                "unknown CONTENT_GENERATOR '{other}' (expected fixture|llm)"
            ))),
        }
    }
}

/// LLM 生成器配置
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Base URL, `/chat/completions` is appended
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1".into(),
            api_key: None,
            model: "gpt-4o-mini".into(),
            timeout_ms: 30000,
        }
    }
}

/// 模拟网络延迟
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyConfig {
    /// Ordinary reads and writes
    pub api: Duration,
    /// Content generation
    pub generation: Duration,
    /// Uniform random extra delay in `0..=jitter`
    pub jitter: Duration,
}

impl LatencyConfig {
    /// No simulated delay at all (tests, benchmarks)
    pub const fn none() -> Self {
        Self {
            api: Duration::ZERO,
            generation: Duration::ZERO,
            jitter: Duration::ZERO,
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            api: Duration::from_millis(500),
            generation: Duration::from_millis(2000),
            jitter: Duration::ZERO,
        }
    }
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志目录 (未设置则仅输出到控制台) |
/// | API_LATENCY_MS | 500 | 普通请求模拟延迟 |
/// | GENERATION_LATENCY_MS | 2000 | 内容生成模拟延迟 |
/// | LATENCY_JITTER_MS | 0 | 随机附加延迟上限 |
/// | MISSING_REFERENCE_POLICY | ignore | ignore / reject |
/// | CONTENT_GENERATOR | fixture | fixture / llm |
/// | LLM_API_URL | https://api.openai.com/v1 | LLM 接口地址 |
/// | LLM_API_KEY | - | LLM 接口密钥 |
/// | LLM_MODEL | gpt-4o-mini | 模型名称 |
/// | LLM_TIMEOUT_MS | 30000 | LLM 请求超时 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 API_LATENCY_MS=0 cargo run -p marketing-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// development | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub latency: LatencyConfig,
    pub missing_reference_policy: MissingReferencePolicy,
    pub content_generator: GeneratorKind,
    pub llm: LlmConfig,
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_millis(key: &str, default: u64) -> Duration {
    Duration::from_millis(env_parse(key, default))
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// Unset or unparsable numeric values fall back to defaults; unknown
    /// policy or generator names are errors.
    pub fn from_env() -> Result<Self, ServerError> {
        let llm_defaults = LlmConfig::default();
        let config = Self {
            http_port: env_parse("HTTP_PORT", 3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            latency: LatencyConfig {
                api: env_millis("API_LATENCY_MS", 500),
                generation: env_millis("GENERATION_LATENCY_MS", 2000),
                jitter: env_millis("LATENCY_JITTER_MS", 0),
            },
            missing_reference_policy: match std::env::var("MISSING_REFERENCE_POLICY") {
                Ok(v) => v.parse()?,
                Err(_) => MissingReferencePolicy::default(),
            },
            content_generator: match std::env::var("CONTENT_GENERATOR") {
                Ok(v) => v.parse()?,
                Err(_) => GeneratorKind::default(),
            },
            llm: LlmConfig {
                api_url: std::env::var("LLM_API_URL").unwrap_or(llm_defaults.api_url),
                api_key: std::env::var("LLM_API_KEY").ok().filter(|k| !k.is_empty()),
                model: std::env::var("LLM_MODEL").unwrap_or(llm_defaults.model),
                timeout_ms: env_parse("LLM_TIMEOUT_MS", llm_defaults.timeout_ms),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// 检查配置组合是否有效
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.content_generator == GeneratorKind::Llm && self.llm.api_key.is_none() {
            return Err(ServerError::Config(
                "CONTENT_GENERATOR=llm requires LLM_API_KEY".into(),
            ));
        }
        if self.llm.api_url.trim().is_empty() {
            return Err(ServerError::Config("LLM_API_URL must not be empty".into()));
        }
        Ok(())
    }

    /// 测试用配置: 无延迟、fixture 生成器
    pub fn for_tests() -> Self {
        Self {
            http_port: 0,
            environment: "test".into(),
            log_level: "debug".into(),
            log_dir: None,
            latency: LatencyConfig::none(),
            missing_reference_policy: MissingReferencePolicy::Ignore,
            content_generator: GeneratorKind::Fixture,
            llm: LlmConfig::default(),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
