pub mod fountain_constants;

pub use fountain_constants::{FountainConstants, BLOCK_REGEX, LEXER_REGEX, TOKEN_REGEX};

/// 文本是否以强制换行标记（两个空格）结尾
pub fn ends_with_line_break(text: &str) -> bool {
    text.ends_with(FountainConstants::HARD_LINE_BREAK)
}

/// 只含空白字符的行视为空行
pub fn is_blank_line(text: &str) -> bool {
    text.trim().is_empty()
}

/// 标题页键名规范化：去空白、小写、空格换成下划线
pub fn normalize_title_key(key: &str) -> String {
    key.trim().to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_title_key() {
        assert_eq!(normalize_title_key("Draft Date"), "draft_date");
        assert_eq!(normalize_title_key(" TITLE "), "title");
    }

    #[test]
    fn test_ends_with_line_break() {
        assert!(ends_with_line_break("JOHN  "));
        assert!(!ends_with_line_break("JOHN "));
    }
}
