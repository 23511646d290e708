use std::collections::BTreeMap;
use log::debug;
use crate::models::{Actor, Line, Scene, Script, ScriptToken, TitleField, TokenType};

/// 把 token 序列折叠成剧本
///
/// 同一段对白里的对白和括号提示合并成一行，用换行连接；
/// 在第一个场景标题之前出现的内容归入一个无名场景。
pub struct ScriptAssembler {
    script: Script,
    current_scene: Option<usize>,
    current_actor: Option<Actor>,
    // 当前对白段是否已经生成了行
    line_open: bool,
    title_values: BTreeMap<TitleField, Vec<String>>,
}

impl ScriptAssembler {
    pub fn new() -> Self {
        ScriptAssembler {
            script: Script::default(),
            current_scene: None,
            current_actor: None,
            line_open: false,
            title_values: BTreeMap::new(),
        }
    }

    pub fn assemble(mut self, tokens: &[ScriptToken]) -> Script {
        for token in tokens {
            self.fold(token);
        }
        self.finish()
    }

    fn fold(&mut self, token: &ScriptToken) {
        match token.token_type {
            TokenType::Title => {
                // 未知的键名直接忽略
                if let Some(field) = token.key.as_deref().and_then(TitleField::from_key) {
                    self.title_values
                        .entry(field)
                        .or_default()
                        .push(token.text.clone());
                }
            }
            TokenType::SceneHeading => {
                let index = self.script.add_scene(Scene::new(token.text.clone()));
                self.current_scene = Some(index);
                self.line_open = false;
            }
            TokenType::DialogueBegin => {
                self.ensure_scene();
                self.line_open = false;
            }
            TokenType::Character => {
                self.current_actor = Some(self.script.actor_or_insert(token.text.trim()));
            }
            TokenType::Dialogue | TokenType::Parenthetical => self.push_dialogue(&token.text),
            TokenType::DialogueEnd => {
                self.line_open = false;
                self.current_actor = None;
            }
            TokenType::DualDialogueBegin | TokenType::DualDialogueEnd => {}
            TokenType::Action => {
                self.line_open = false;
                self.ensure_scene().add_action(token.text.clone());
            }
        }
    }

    fn ensure_scene(&mut self) -> &mut Scene {
        let index = match self.current_scene {
            Some(index) => index,
            None => {
                let index = self.script.add_scene(Scene::new(""));
                self.current_scene = Some(index);
                index
            }
        };
        &mut self.script.scenes_mut()[index]
    }

    fn push_dialogue(&mut self, text: &str) {
        // 没有角色的对白归 ACTION
        let actor = self.current_actor.clone().unwrap_or_else(Actor::action);
        let line_open = self.line_open;
        let scene = self.ensure_scene();

        if line_open {
            if let Some(line) = scene.last_line_mut() {
                let joined = format!("{}\n{}", line.text(), text);
                line.set_text(joined);
                return;
            }
        }

        scene.add_line(Line::new(actor, text));
        self.line_open = true;
    }

    fn finish(mut self) -> Script {
        for (field, values) in std::mem::take(&mut self.title_values) {
            self.script.set_title_field(field, values.join(" "));
        }
        debug!(
            "组装完成: 标题 {:?}, {} 个场景",
            self.script.name(),
            self.script.scenes().len()
        );
        self.script
    }
}

impl Default for ScriptAssembler {
    fn default() -> Self {
        Self::new()
    }
}
