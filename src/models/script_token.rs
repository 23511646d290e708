use serde::{Deserialize, Serialize};

/// token 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Title,
    SceneHeading,
    DualDialogueBegin,
    DialogueBegin,
    Character,
    Dialogue,
    Parenthetical,
    DialogueEnd,
    DualDialogueEnd,
    Action,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Title => "title",
            TokenType::SceneHeading => "scene_heading",
            TokenType::DualDialogueBegin => "dual_dialogue_begin",
            TokenType::DialogueBegin => "dialogue_begin",
            TokenType::Character => "character",
            TokenType::Dialogue => "dialogue",
            TokenType::Parenthetical => "parenthetical",
            TokenType::DialogueEnd => "dialogue_end",
            TokenType::DualDialogueEnd => "dual_dialogue_end",
            TokenType::Action => "action",
        }
    }
}

/// 双对白中的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DualSide {
    Left,
    Right,
}

impl DualSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            DualSide::Left => "left",
            DualSide::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptToken {
    pub token_type: TokenType,
    /// 文本内容，标记类 token 为空
    pub text: String,
    /// 来源块的序号
    pub block: usize,
    /// 标题页字段名（规范化后），仅 title token 有效
    pub key: Option<String>,
    /// 场景编号，仅场景标题有效
    pub number: Option<String>,
    /// 双对白位置，仅 dialogue_begin 有效
    pub dual: Option<DualSide>,
    /// 是否属于一组双对白
    pub is_dual_dialogue: bool,
}

impl ScriptToken {
    pub fn new(token_type: TokenType, text: impl Into<String>, block: usize) -> Self {
        ScriptToken {
            token_type,
            text: text.into(),
            block,
            key: None,
            number: None,
            dual: None,
            is_dual_dialogue: false,
        }
    }

    // 不带文本的标记 token
    pub fn marker(token_type: TokenType, block: usize) -> Self {
        ScriptToken::new(token_type, String::new(), block)
    }

    pub fn title(key: impl Into<String>, value: impl Into<String>, block: usize) -> Self {
        ScriptToken {
            key: Some(key.into()),
            ..ScriptToken::new(TokenType::Title, value, block)
        }
    }

    pub fn scene_heading(text: impl Into<String>, number: Option<String>, block: usize) -> Self {
        ScriptToken {
            number,
            ..ScriptToken::new(TokenType::SceneHeading, text, block)
        }
    }

    // 检查token类型是否匹配
    pub fn is_type(&self, types: &[TokenType]) -> bool {
        types.contains(&self.token_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_type_names_match_serde() {
        let token = ScriptToken::marker(TokenType::DualDialogueBegin, 3);
        let json = serde_json::to_string(&token).unwrap();
        assert!(json.contains(&format!("\"{}\"", TokenType::DualDialogueBegin.as_str())));
        assert_eq!(serde_json::to_string(&DualSide::Left).unwrap(), format!("\"{}\"", DualSide::Left.as_str()));
    }

    #[test]
    fn test_title_token() {
        let token = ScriptToken::title("draft_date", "2003", 0);
        assert!(token.is_type(&[TokenType::Title]));
        assert_eq!(token.key.as_deref(), Some("draft_date"));
        assert!(!token.is_dual_dialogue);
    }
}
