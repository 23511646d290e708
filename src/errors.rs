//! 错误类型
//!
//! 解析和格式化本身不会失败；这里的错误只来自外围协作方：
//! 文件读写、持久化记录的反序列化、后台解析任务和配置。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("后台解析任务失败: {0}")]
    Worker(String),

    #[error("无效的配置: {0}")]
    InvalidConfig(String),
}

pub type ScriptResult<T> = Result<T, ScriptError>;
