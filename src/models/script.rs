use std::collections::HashMap;
use log::error;
use serde::{Deserialize, Deserializer, Serialize};
use crate::errors::ScriptResult;
use crate::models::actor::Actor;
use crate::models::scene::Scene;

/// 标题页字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TitleField {
    Title,
    Credit,
    Author,
    Source,
    DraftDate,
    Contact,
    Notes,
    Copyright,
}

impl TitleField {
    /// 写出标题页时的顺序
    pub const ALL: [TitleField; 8] = [
        TitleField::Title,
        TitleField::Credit,
        TitleField::Author,
        TitleField::Source,
        TitleField::DraftDate,
        TitleField::Contact,
        TitleField::Notes,
        TitleField::Copyright,
    ];

    /// 由规范化后的键名（小写、空格换成下划线）得到字段
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "title" => Some(TitleField::Title),
            "credit" => Some(TitleField::Credit),
            "author" | "authors" => Some(TitleField::Author),
            "source" => Some(TitleField::Source),
            "draft_date" | "date" => Some(TitleField::DraftDate),
            "contact" => Some(TitleField::Contact),
            "notes" => Some(TitleField::Notes),
            "copyright" => Some(TitleField::Copyright),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TitleField::Title => "Title",
            TitleField::Credit => "Credit",
            TitleField::Author => "Author",
            TitleField::Source => "Source",
            TitleField::DraftDate => "Draft date",
            TitleField::Contact => "Contact",
            TitleField::Notes => "Notes",
            TitleField::Copyright => "Copyright",
        }
    }
}

// ACTION 必须存在并且排在第一位
fn deserialize_actors<'de, D>(deserializer: D) -> Result<Vec<Actor>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut actors: Vec<Actor> = Vec::deserialize(deserializer)?;
    actors.retain(|a| !a.is_action());
    actors.insert(0, Actor::action());
    Ok(actors)
}

fn default_actors() -> Vec<Actor> {
    vec![Actor::action()]
}

/// 剧本：标题页信息、角色、场景以及朗读用的声音分配
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub name: String,
    #[serde(default)]
    pub credit: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub draft_date: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default = "default_actors", deserialize_with = "deserialize_actors")]
    actors: Vec<Actor>,
    #[serde(default)]
    scenes: Vec<Scene>,
    /// 角色名 -> 声音标识
    #[serde(default)]
    pub actor_voices: HashMap<String, String>,
    #[serde(default)]
    all_voices: Vec<String>,
    #[serde(default)]
    pub default_voice: Option<String>,
}

impl Script {
    pub fn new(name: impl Into<String>) -> Self {
        Script {
            name: name.into(),
            credit: None,
            author: None,
            source: None,
            draft_date: None,
            contact: None,
            notes: None,
            copyright: None,
            actors: default_actors(),
            scenes: Vec::new(),
            actor_voices: HashMap::new(),
            all_voices: Vec::new(),
            default_voice: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn title_field(&self, field: TitleField) -> Option<&str> {
        match field {
            TitleField::Title => Some(self.name.as_str()).filter(|n| !n.is_empty()),
            TitleField::Credit => self.credit.as_deref(),
            TitleField::Author => self.author.as_deref(),
            TitleField::Source => self.source.as_deref(),
            TitleField::DraftDate => self.draft_date.as_deref(),
            TitleField::Contact => self.contact.as_deref(),
            TitleField::Notes => self.notes.as_deref(),
            TitleField::Copyright => self.copyright.as_deref(),
        }
    }

    pub fn set_title_field(&mut self, field: TitleField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TitleField::Title => self.name = value,
            TitleField::Credit => self.credit = Some(value),
            TitleField::Author => self.author = Some(value),
            TitleField::Source => self.source = Some(value),
            TitleField::DraftDate => self.draft_date = Some(value),
            TitleField::Contact => self.contact = Some(value),
            TitleField::Notes => self.notes = Some(value),
            TitleField::Copyright => self.copyright = Some(value),
        }
    }

    // ---- 角色 ----

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn has_actor(&self, actor: &Actor) -> bool {
        self.actors.contains(actor)
    }

    /// 添加角色，同名角色已存在时返回 false
    pub fn add_actor(&mut self, actor: Actor) -> bool {
        if self.has_actor(&actor) {
            return false;
        }
        self.actors.push(actor);
        true
    }

    /// 按名字取已有角色，没有则新建
    pub fn actor_or_insert(&mut self, name: &str) -> Actor {
        if let Some(actor) = self.actors.iter().find(|a| a.name() == name) {
            return actor.clone();
        }
        let actor = Actor::new(name);
        self.actors.push(actor.clone());
        actor
    }

    /// 删除角色，该角色的台词改归 ACTION。ACTION 本身和最后一个角色不能删除
    pub fn remove_actor(&mut self, actor: &Actor) -> bool {
        if self.actors.len() <= 1 || actor.is_action() {
            return false;
        }
        let Some(pos) = self.actors.iter().position(|a| a == actor) else {
            return false;
        };
        self.actors.remove(pos);

        let replacement = self.actors[0].clone();
        for scene in &mut self.scenes {
            for line in scene.lines_mut() {
                if line.actor() == actor {
                    line.set_actor(replacement.clone());
                }
            }
        }
        self.actor_voices.remove(actor.name());
        true
    }

    // ---- 场景 ----

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn scenes_mut(&mut self) -> &mut [Scene] {
        &mut self.scenes
    }

    pub fn scene(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    pub fn scene_mut(&mut self, index: usize) -> Option<&mut Scene> {
        self.scenes.get_mut(index)
    }

    /// 追加场景并返回它的编号
    pub fn add_scene(&mut self, mut scene: Scene) -> usize {
        let number = self.scenes.len();
        scene.set_number(number);
        self.scenes.push(scene);
        number
    }

    pub fn remove_scene(&mut self, index: usize) -> Option<Scene> {
        if index >= self.scenes.len() {
            return None;
        }
        let removed = self.scenes.remove(index);
        for (i, scene) in self.scenes.iter_mut().enumerate() {
            scene.set_number(i);
        }
        Some(removed)
    }

    pub fn line_count(&self) -> usize {
        self.scenes.iter().map(|s| s.lines().len()).sum()
    }

    // ---- 声音 ----

    pub fn assign_voice(&mut self, actor: &str, voice: impl Into<String>) {
        self.actor_voices.insert(actor.to_string(), voice.into());
    }

    /// 角色的声音，没有单独分配时用默认声音
    pub fn voice_for(&self, actor: &str) -> Option<&str> {
        self.actor_voices
            .get(actor)
            .map(String::as_str)
            .or(self.default_voice.as_deref())
    }

    pub fn add_voice(&mut self, voice: impl Into<String>) {
        let voice = voice.into();
        if !self.all_voices.contains(&voice) {
            self.all_voices.push(voice);
        }
    }

    pub fn all_voices(&self) -> &[String] {
        &self.all_voices
    }

    pub fn set_default_voice(&mut self, voice: Option<String>) {
        self.default_voice = voice;
    }

    // ---- 持久化 ----

    pub fn to_json(&self) -> ScriptResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> ScriptResult<Script> {
        Ok(serde_json::from_str(json)?)
    }

    /// 损坏的记录不致命：记录错误并返回一个占位剧本
    pub fn from_json_or_placeholder(json: &str) -> Script {
        match Script::from_json(json) {
            Ok(script) => script,
            Err(e) => {
                error!("剧本记录反序列化失败，使用占位剧本: {}", e);
                Script::new("Error")
            }
        }
    }
}

impl Default for Script {
    fn default() -> Self {
        Script::new("")
    }
}
