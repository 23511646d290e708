use crate::models::{Script, TitleField};
use crate::utils::{FountainConstants, TOKEN_REGEX};

/// 转义 HTML 特殊字符
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// 行内强调转 HTML：先转义，再依次处理 **粗体**、*斜体*、_下划线_，换行转成 <br>
pub fn render_emphasis_html(text: &str) -> String {
    let mut html = escape_html(text);
    for (style, tag) in FountainConstants::emphasis_tags() {
        let template = format!("<{tag}>${{1}}</{tag}>");
        html = TOKEN_REGEX[style]
            .replace_all(&html, template.as_str())
            .into_owned();
    }
    html.replace('\n', "<br>")
}

// 生成HTML预览
pub fn generate_html(script: &Script) -> String {
    let mut buffer = String::new();

    for field in TitleField::ALL {
        if let Some(value) = script.title_field(field) {
            let class = field.label().to_lowercase().replace(' ', "-");
            buffer.push_str(&format!("<div class=\"title-{}\">{}</div>\n", class, render_emphasis_html(value)));
        }
    }

    for scene in script.scenes() {
        buffer.push_str(&format!("<div class=\"scene-heading\">{}</div>\n", escape_html(scene.name())));
        for line in scene.lines() {
            if line.is_action() {
                buffer.push_str(&format!("<div class=\"action\">{}</div>\n", line.line_html()));
            } else {
                buffer.push_str(&format!("<div class=\"character\">{}</div>\n", escape_html(line.actor().name())));
                buffer.push_str(&format!("<div class=\"dialogue\">{}</div>\n", line.line_html()));
            }
        }
    }
    buffer
}
