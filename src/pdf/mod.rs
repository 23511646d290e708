//! PDF 导入适配
//!
//! PDF 本身由外部工具转成纯文本，这里只把转出来的文本整理成解析器能处理的样子。

use crate::models::{Conf, Script};
use crate::parser::FountainParser;

const NO_BREAK_SPACE: char = '\u{00A0}';

/// 不换行空格换成普通空格，每行去掉首尾空白并以换行结尾
pub fn normalize_pdf_text(text: &str) -> String {
    let mut buffer = String::with_capacity(text.len());
    for line in text.lines() {
        buffer.push_str(line.replace(NO_BREAK_SPACE, " ").trim());
        buffer.push('\n');
    }
    buffer
}

pub fn parse_pdf_text(text: &str) -> Script {
    parse_pdf_text_with(text, &Conf::default())
}

pub fn parse_pdf_text_with(text: &str, conf: &Conf) -> Script {
    FountainParser::new(conf.clone()).parse(&normalize_pdf_text(text))
}
