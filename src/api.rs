//! 异步 API
//!
//! 给界面层调用的接口：解析放到阻塞线程池，文件读写走 tokio::fs，
//! 失败以 success/message 的形式返回，不会 panic。

use log::{debug, error};
use crate::errors::{ScriptError, ScriptResult};
use crate::models::{Conf, Script};
use crate::parser::FountainParser;
use crate::pdf::normalize_pdf_text;
use crate::writer::FountainWriter;

/// 导入结果
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub success: bool,
    pub message: String,
    pub script: Option<Script>,
}

/// 导出结果
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub success: bool,
    pub message: String,
    pub file_path: Option<String>,
}

/// 在后台线程解析文本
pub async fn parse_script_text(text: String, config: Option<Conf>) -> ScriptResult<Script> {
    let conf = config.unwrap_or_default();
    tokio::task::spawn_blocking(move || FountainParser::new(conf).parse(&text))
        .await
        .map_err(|e| ScriptError::Worker(e.to_string()))
}

/// 解析文本并返回剧本的 JSON，失败时返回 "{}"
pub async fn parse_fountain_text(text: String, config: Option<Conf>) -> String {
    match parse_script_text(text, config).await {
        Ok(script) => script.to_json().unwrap_or_else(|_| "{}".to_string()),
        Err(e) => {
            error!("解析失败: {}", e);
            "{}".to_string()
        }
    }
}

/// 导入 Fountain 文件
pub async fn import_script_file(path: String, config: Option<Conf>) -> ImportResult {
    import_file(path, config, false).await
}

/// 导入由 PDF 转出的文本文件
pub async fn import_pdf_text_file(path: String, config: Option<Conf>) -> ImportResult {
    import_file(path, config, true).await
}

async fn import_file(path: String, config: Option<Conf>, from_pdf: bool) -> ImportResult {
    let text = match tokio::fs::read_to_string(&path).await {
        Ok(text) => text,
        Err(e) => {
            return ImportResult {
                success: false,
                message: format!("读取文件失败: {}", ScriptError::from(e)),
                script: None,
            }
        }
    };
    let text = if from_pdf { normalize_pdf_text(&text) } else { text };

    match parse_script_text(text, config).await {
        Ok(script) => {
            debug!("导入 {}: {} 个场景", path, script.scenes().len());
            ImportResult {
                success: true,
                message: "导入成功".to_string(),
                script: Some(script),
            }
        }
        Err(e) => ImportResult {
            success: false,
            message: format!("导入失败: {}", e),
            script: None,
        },
    }
}

/// 把剧本导出为 Fountain 文件
pub async fn export_script_file(
    script: &Script,
    output_path: String,
    config: Option<Conf>,
) -> ExportResult {
    let conf = config.unwrap_or_default();
    let text = FountainWriter::new(&conf).write(script);

    match tokio::fs::write(&output_path, text).await {
        Ok(_) => ExportResult {
            success: true,
            message: "Fountain文件导出成功".to_string(),
            file_path: Some(output_path),
        },
        Err(e) => ExportResult {
            success: false,
            message: format!("导出失败: {}", ScriptError::from(e)),
            file_path: None,
        },
    }
}
