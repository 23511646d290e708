use std::collections::HashMap;
use lazy_static::lazy_static;
use regex::Regex;

pub struct FountainConstants;

impl FountainConstants {
    /// 标题页可识别的字段（不区分大小写）
    pub const TITLE_KEYS: [&'static str; 10] = [
        "title",
        "credit",
        "author",
        "authors",
        "source",
        "notes",
        "draft date",
        "date",
        "contact",
        "copyright",
    ];

    /// 行末两个空格表示强制换行
    pub const HARD_LINE_BREAK: &'static str = "  ";

    /// 强调标记 -> HTML 标签，按替换顺序排列
    pub fn emphasis_tags() -> [(&'static str, &'static str); 3] {
        [("bold", "b"), ("italic", "i"), ("underline", "u")]
    }
}

fn title_key_alternation() -> String {
    FountainConstants::TITLE_KEYS.join("|")
}

lazy_static! {
    // 词法阶段正则
    pub static ref LEXER_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        map.insert("line_endings", Regex::new(r"\r\n|\r").unwrap());
        map.insert("leading_whitespace", Regex::new(r"(?m)^(?:\t| {2})[ \t]*").unwrap());
        map.insert("boneyard_marker", Regex::new(r"(?m)^[ \t]*(/\*|\*/)[ \t]*$").unwrap());
        map
    };

    // 块级分类正则，均针对整个块匹配
    pub static ref BLOCK_REGEX: HashMap<&'static str, Regex> = {
        let keys = title_key_alternation();
        let mut map = HashMap::new();
        map.insert("title_page", Regex::new(&format!(r"(?is)^({}):(.+)$", keys)).unwrap());
        map.insert("title_page_line", Regex::new(&format!(r"(?i)^({}):(.*)$", keys)).unwrap());
        map.insert("scene_heading", Regex::new(r"(?i)^((?:\*{0,3}_?)?(?:int|ext|est|i/e)[. ].+)$|^\.([^.\n].*)$").unwrap());
        map.insert("scene_number", Regex::new(r"\s*#([^#\n]+)#\s*$").unwrap());
        map.insert("character", Regex::new(r"^([A-Z*_]+[0-9A-Z (._\-')]*)(\^?)\n((?s:.+))$").unwrap());
        map.insert("parenthetical", Regex::new(r"^\(.+\)$").unwrap());
        map.insert("centered", Regex::new(r"^> *.+ *<(?:\n.+)*$").unwrap());
        map.insert("transition", Regex::new(r"^(?:(?:FADE (?:TO BLACK|OUT)|CUT TO BLACK)\.|.+ TO:)$|^> *.+$").unwrap());
        map.insert("section", Regex::new(r"^#+ *.*$").unwrap());
        map.insert("synopsis", Regex::new(r"^=(?:[^=\n].*)?$").unwrap());
        map.insert("note", Regex::new(r"^\[\[[^\[\n].*\]\]$").unwrap());
        map.insert("boneyard", Regex::new(r"^(?:/\*|\*/)$").unwrap());
        map.insert("page_break", Regex::new(r"^={3,}$").unwrap());
        map.insert("line_break", Regex::new(r"^ {2}$").unwrap());
        map
    };

    // 行内强调正则
    pub static ref TOKEN_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        map.insert("bold", Regex::new(r"\*\*([^*]+)\*\*").unwrap());
        map.insert("italic", Regex::new(r"\*([^*]+)\*").unwrap());
        map.insert("underline", Regex::new(r"_([^_]+)_").unwrap());
        map
    };
}
