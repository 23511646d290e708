use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use crate::models::actor::Actor;
use crate::parser::text_processor::render_emphasis_html;

fn default_enabled() -> bool {
    true
}

/// 场景中的一行：某个角色的一段对白，或 ACTION 的一段叙述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    actor: Actor,
    /// 原始文本，可能包含强调标记和换行（多段对白/括号提示）
    #[serde(rename = "line")]
    text: String,
    /// 在所属场景中的显示顺序
    pub order: usize,
    /// 朗读时是否包含该行，不持久化
    #[serde(skip, default = "default_enabled")]
    pub enabled: bool,
    /// 渲染后的 HTML 缓存，修改文本时失效
    #[serde(skip)]
    html: OnceCell<String>,
}

impl Line {
    pub fn new(actor: Actor, text: impl Into<String>) -> Self {
        Line {
            actor,
            text: text.into(),
            order: 0,
            enabled: true,
            html: OnceCell::new(),
        }
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn set_actor(&mut self, actor: Actor) {
        self.actor = actor;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.html = OnceCell::new();
    }

    pub fn is_action(&self) -> bool {
        self.actor.is_action()
    }

    /// 把 **粗体**、*斜体*、_下划线_ 转成 HTML，结果按当前文本缓存
    pub fn line_html(&self) -> &str {
        self.html.get_or_init(|| render_emphasis_html(&self.text))
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.actor == other.actor && self.text == other.text
    }
}

impl Eq for Line {}
