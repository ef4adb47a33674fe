use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

#[derive(Debug, Clone)]
pub enum TshortError {
    Configuration(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    StoreUnavailable(String),
    CollisionExhausted(String),
    NotFound(String),
    Validation(String),
    Serialization(String),
    FileOperation(String),
}

impl TshortError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            TshortError::Configuration(_) => "E001",
            TshortError::DatabaseConfig(_) => "E002",
            TshortError::DatabaseConnection(_) => "E003",
            TshortError::StoreUnavailable(_) => "E004",
            TshortError::CollisionExhausted(_) => "E005",
            TshortError::NotFound(_) => "E006",
            TshortError::Validation(_) => "E007",
            TshortError::Serialization(_) => "E008",
            TshortError::FileOperation(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            TshortError::Configuration(_) => "Configuration Error",
            TshortError::DatabaseConfig(_) => "Database Configuration Error",
            TshortError::DatabaseConnection(_) => "Database Connection Error",
            TshortError::StoreUnavailable(_) => "Store Unavailable",
            TshortError::CollisionExhausted(_) => "Collision Exhausted",
            TshortError::NotFound(_) => "Resource Not Found",
            TshortError::Validation(_) => "Validation Error",
            TshortError::Serialization(_) => "Serialization Error",
            TshortError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            TshortError::Configuration(msg)
            | TshortError::DatabaseConfig(msg)
            | TshortError::DatabaseConnection(msg)
            | TshortError::StoreUnavailable(msg)
            | TshortError::CollisionExhausted(msg)
            | TshortError::NotFound(msg)
            | TshortError::Validation(msg)
            | TshortError::Serialization(msg)
            | TshortError::FileOperation(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于启动失败时的终端提示）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TshortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TshortError {}

// 便捷的构造函数
impl TshortError {
    pub fn configuration<T: Into<String>>(msg: T) -> Self {
        TshortError::Configuration(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        TshortError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        TshortError::DatabaseConnection(msg.into())
    }

    pub fn store_unavailable<T: Into<String>>(msg: T) -> Self {
        TshortError::StoreUnavailable(msg.into())
    }

    pub fn collision_exhausted<T: Into<String>>(msg: T) -> Self {
        TshortError::CollisionExhausted(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        TshortError::NotFound(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        TshortError::Validation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        TshortError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        TshortError::FileOperation(msg.into())
    }
}

// 存储层之外抛出的 DbErr 一律视为存储不可用
impl From<sea_orm::DbErr> for TshortError {
    fn from(err: sea_orm::DbErr) -> Self {
        TshortError::StoreUnavailable(err.to_string())
    }
}

impl From<std::io::Error> for TshortError {
    fn from(err: std::io::Error) -> Self {
        TshortError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TshortError {
    fn from(err: serde_json::Error) -> Self {
        TshortError::Serialization(err.to_string())
    }
}

impl ResponseError for TshortError {
    fn status_code(&self) -> StatusCode {
        match self {
            TshortError::NotFound(_) => StatusCode::NOT_FOUND,
            TshortError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // 5xx 不向调用方暴露内部细节
        let body = match self {
            TshortError::NotFound(_) => "Not Found".to_string(),
            TshortError::Validation(msg) => format!("Bad Request: {}", msg),
            _ => "Internal Server Error".to_string(),
        };

        HttpResponse::build(status)
            .insert_header(("Content-Type", "text/plain; charset=utf-8"))
            .body(body)
    }
}

pub type Result<T> = std::result::Result<T, TshortError>;
