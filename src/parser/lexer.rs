use log::trace;
use crate::utils::{is_blank_line, LEXER_REGEX};

/// 规范化原始文本：统一换行符，去掉行首缩进，把独占一行的 boneyard 标记隔离成单独的块
pub fn normalize(script: &str) -> String {
    let text = LEXER_REGEX["line_endings"].replace_all(script, "\n");
    let text = LEXER_REGEX["leading_whitespace"].replace_all(&text, "");
    let text = LEXER_REGEX["boneyard_marker"].replace_all(&text, "\n\n$1\n\n");
    text.into_owned()
}

/// 按空行把文本切成块。块首尾不含空行，只含空白的行算空行
pub fn split_blocks(script: &str) -> Vec<String> {
    let normalized = normalize(script);
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in normalized.split('\n') {
        if is_blank_line(line) {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    trace!("切分出 {} 个块", blocks.len());
    blocks
}
