use log::warn;
use crate::models::{Conf, Scene, Script, TitleField};
use crate::utils::{ends_with_line_break, BLOCK_REGEX};

/// 把剧本写回 Fountain 文本。输出重新解析后场景数、角色数、行数保持不变
pub struct FountainWriter<'a> {
    conf: &'a Conf,
    scene_prefix: String,
}

impl<'a> FountainWriter<'a> {
    /// 场景前缀不合法时改用默认前缀
    pub fn new(conf: &'a Conf) -> Self {
        let scene_prefix = match conf.validate() {
            Ok(()) => conf.default_scene_prefix.to_uppercase(),
            Err(e) => {
                warn!("{}，改用默认场景前缀", e);
                Conf::default().default_scene_prefix
            }
        };
        FountainWriter { conf, scene_prefix }
    }

    pub fn write(&self, script: &Script) -> String {
        let mut buffer = String::new();

        if self.conf.print_title_page {
            self.write_title_page(script, &mut buffer);
        }

        for scene in script.scenes() {
            self.write_scene(scene, &mut buffer);
        }

        buffer
    }

    fn write_title_page(&self, script: &Script, buffer: &mut String) {
        let mut written = false;
        for field in TitleField::ALL {
            let Some(value) = script.title_field(field) else {
                continue;
            };
            if value.trim().is_empty() {
                continue;
            }
            buffer.push_str(field.label());
            buffer.push_str(": ");
            buffer.push_str(value);
            buffer.push('\n');
            written = true;
        }
        if written {
            buffer.push('\n');
        }
    }

    fn write_scene(&self, scene: &Scene, buffer: &mut String) {
        buffer.push_str(&self.scene_heading(scene.name()));
        buffer.push_str("\n\n");

        for line in scene.lines() {
            let cue = line.actor().name();
            if !line.is_action() && !cue.is_empty() {
                buffer.push_str(&cue.to_uppercase());
                buffer.push('\n');
            }
            buffer.push_str(line.text());
            buffer.push_str("\n\n");
        }
    }

    /// 场景名大写；本身已是合法场景标题的原样输出，否则去掉行尾空白后加上前缀
    pub fn scene_heading(&self, name: &str) -> String {
        let upper = name.to_uppercase();
        if BLOCK_REGEX["scene_heading"].is_match(&upper) && !ends_with_line_break(&upper) {
            upper
        } else {
            format!("{}{}", self.scene_prefix, upper.trim_end())
        }
    }
}
