use serde::{Deserialize, Serialize};
use crate::errors::{ScriptError, ScriptResult};
use crate::utils::{ends_with_line_break, BLOCK_REGEX};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// 是否识别双对白（角色行末尾的 ^）
    pub use_dual_dialogue: bool,
    /// 导出时是否写出标题页
    pub print_title_page: bool,
    /// 导出时给缺少 INT./EXT. 标记的场景名加的前缀
    pub default_scene_prefix: String,
    /// 解析出的剧本的默认朗读声音
    pub default_voice: Option<String>,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            use_dual_dialogue: true,
            print_title_page: true,
            default_scene_prefix: "INT. ".to_string(),
            default_voice: None,
        }
    }
}

impl Conf {
    /// 从 JSON 读取配置，缺少的字段取默认值
    pub fn from_json(json: &str) -> ScriptResult<Conf> {
        let conf: Conf = serde_json::from_str(json)?;
        conf.validate()?;
        Ok(conf)
    }

    /// 场景前缀单独使用或加上名字后都必须是合法的场景标题，否则导出的文本无法还原场景。
    /// from_json 会调用；直接构造的配置由 FountainWriter::new 检查
    pub fn validate(&self) -> ScriptResult<()> {
        let prefix = self.default_scene_prefix.to_uppercase();
        let re = &BLOCK_REGEX["scene_heading"];
        let valid = re.is_match(&prefix)
            && re.is_match(&format!("{}X", prefix))
            && !ends_with_line_break(&prefix);
        if !valid {
            return Err(ScriptError::InvalidConfig(format!(
                "default_scene_prefix {:?} 不能构成场景标题",
                self.default_scene_prefix
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let conf = Conf::from_json(r#"{"use_dual_dialogue": false}"#).unwrap();
        assert!(!conf.use_dual_dialogue);
        assert!(conf.print_title_page);
        assert_eq!(conf.default_scene_prefix, "INT. ");
    }

    #[test]
    fn test_bad_scene_prefix_is_rejected() {
        let result = Conf::from_json(r#"{"default_scene_prefix": "SCENE "}"#);
        assert!(matches!(result, Err(ScriptError::InvalidConfig(_))));
        assert!(Conf::from_json(r#"{"default_scene_prefix": "INT."}"#).is_err());

        let conf = Conf::from_json(r#"{"default_scene_prefix": "EXT. "}"#).unwrap();
        assert_eq!(conf.default_scene_prefix, "EXT. ");
        assert!(Conf::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Conf::from_json("{not json").is_err());
    }
}
