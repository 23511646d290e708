pub mod models;
pub mod utils;
pub mod parser;
pub mod writer;
pub mod pdf;
pub mod api;
pub mod errors;

pub use models::{
    Actor,
    Line,
    Scene,
    Script,
    TitleField,
    ScriptToken,
    TokenType,
    DualSide,
    Conf
};

pub use parser::{
    FountainParser,
    ParseOutput,
    classify_block,
    generate_html,
    render_emphasis_html
};

pub use writer::FountainWriter;

pub use errors::{ScriptError, ScriptResult};

pub use api::{
    ImportResult,
    ExportResult,
    parse_script_text,
    parse_fountain_text,
    import_script_file,
    import_pdf_text_file,
    export_script_file
};

/// 解析Fountain格式文本
///
/// 任何输入都会得到一个剧本，无法识别的内容按动作处理。
pub fn parse(script: &str) -> Script {
    parse_with(script, &Conf::default())
}

/// 使用指定配置解析
pub fn parse_with(script: &str, config: &Conf) -> Script {
    FountainParser::new(config.clone()).parse(script)
}

/// 把剧本格式化为Fountain文本
pub fn format(script: &Script) -> String {
    format_with(script, &Conf::default())
}

pub fn format_with(script: &Script, config: &Conf) -> String {
    FountainWriter::new(config).write(script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let script = parse("INT. ROOM - DAY\n\nHello, world!");
        assert_eq!(script.scenes().len(), 1);
        assert_eq!(format(&script), "INT. ROOM - DAY\n\nHello, world!\n\n");
    }
}
