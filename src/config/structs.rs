use serde::{Deserialize, Serialize};

use crate::errors::{Result, TshortError};
use crate::services::id_generator::MAX_ID_LEN;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，例如 `TSHORT__SERVER__PORT=9999`
pub const ENV_PREFIX: &str = "TSHORT";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - server: 监听地址、端口、worker 数量
/// - database: 存储连接与重试参数
/// - shortener: 短链接生成参数
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub shortener: ShortenerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值。
    /// 显式指定的配置文件必须存在，默认的 `config.toml` 可以缺省。
    pub fn load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let (path, required) = match path {
            Some(p) => (p, true),
            None => (DEFAULT_CONFIG_PATH, false),
        };

        let settings = Config::builder()
            .add_source(File::with_name(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| TshortError::configuration(format!("Failed to build config: {}", e)))?;

        let config: StaticConfig = settings.try_deserialize().map_err(|e| {
            TshortError::configuration(format!("Failed to deserialize config: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// 校验配置中会直接影响核心逻辑的取值
    pub fn validate(&self) -> Result<()> {
        let hash_len = self.shortener.hash_len;
        if hash_len == 0 || hash_len > MAX_ID_LEN {
            return Err(TshortError::configuration(format!(
                "shortener.hash_len must be between 1 and {}, got {}",
                MAX_ID_LEN, hash_len
            )));
        }

        if !matches!(self.shortener.public_scheme.as_str(), "http" | "https") {
            return Err(TshortError::configuration(format!(
                "shortener.public_scheme must be 'http' or 'https', got '{}'",
                self.shortener.public_scheme
            )));
        }

        if self.database.pool_size == 0 {
            return Err(TshortError::configuration(
                "database.pool_size must be at least 1",
            ));
        }

        if self.database.resolve_url().is_empty() {
            return Err(TshortError::configuration(
                "database.database_url is empty and database.host is not set",
            ));
        }

        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TshortError::serialization(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_cpu_count")]
    pub cpu_count: usize,
}

/// 数据库连接配置
///
/// `database_url` 优先；为空时用 host/port/name/user/password 拼出 PostgreSQL 连接串。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_database_pool_size")]
    pub pool_size: u32,
    /// 单次存储操作超时（毫秒）
    #[serde(default = "default_database_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
    #[serde(default = "default_retry_max_delay_ms")]
    pub retry_max_delay_ms: u64,
}

impl DatabaseConfig {
    /// 得到最终使用的数据库连接串
    pub fn resolve_url(&self) -> String {
        if !self.database_url.is_empty() {
            return self.database_url.clone();
        }

        let Some(host) = self.host.as_deref().filter(|h| !h.is_empty()) else {
            return String::new();
        };

        let credentials = match (self.user.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) => format!("{}:{}@", user, pass),
            (Some(user), None) => format!("{}@", user),
            _ => String::new(),
        };
        let port = self.port.map(|p| format!(":{}", p)).unwrap_or_default();
        let name = self.name.as_deref().unwrap_or("tshort");

        format!(
            "postgres://{}{}{}/{}?sslmode=disable",
            credentials, host, port, name
        )
    }
}

/// 短链接生成配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenerConfig {
    /// 标识符的起始长度 L0
    #[serde(default = "default_hash_len")]
    pub hash_len: usize,
    /// 返回给调用方的短链接所使用的协议
    #[serde(default = "default_public_scheme")]
    pub public_scheme: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_cpu_count() -> usize {
    num_cpus::get()
}

fn default_database_url() -> String {
    "tshort.db".to_string()
}

fn default_database_pool_size() -> u32 {
    10
}

fn default_database_timeout_ms() -> u64 {
    5000
}

fn default_retry_count() -> u32 {
    1
}

fn default_retry_base_delay_ms() -> u64 {
    50
}

fn default_retry_max_delay_ms() -> u64 {
    500
}

fn default_hash_len() -> usize {
    6
}

fn default_public_scheme() -> String {
    "http".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            cpu_count: default_cpu_count(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            host: None,
            port: None,
            name: None,
            user: None,
            password: None,
            pool_size: default_database_pool_size(),
            timeout_ms: default_database_timeout_ms(),
            retry_count: default_retry_count(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
            retry_max_delay_ms: default_retry_max_delay_ms(),
        }
    }
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            hash_len: default_hash_len(),
            public_scheme: default_public_scheme(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
