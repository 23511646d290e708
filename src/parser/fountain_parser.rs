use std::time::Instant;
use log::{debug, trace, warn};
use serde::Serialize;
use crate::models::{Conf, DualSide, Script, ScriptToken, TokenType};
use crate::parser::assembler::ScriptAssembler;
use crate::parser::lexer::split_blocks;
use crate::utils::{ends_with_line_break, normalize_title_key, BLOCK_REGEX};

/// 已识别但不产生 token 的块类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedKind {
    Centered,
    Transition,
    Section,
    Synopsis,
    Note,
    Boneyard,
    PageBreak,
    LineBreak,
}

impl ReservedKind {
    pub const ALL: [ReservedKind; 8] = [
        ReservedKind::Centered,
        ReservedKind::Transition,
        ReservedKind::Section,
        ReservedKind::Synopsis,
        ReservedKind::Note,
        ReservedKind::Boneyard,
        ReservedKind::PageBreak,
        ReservedKind::LineBreak,
    ];

    fn regex_key(&self) -> &'static str {
        match self {
            ReservedKind::Centered => "centered",
            ReservedKind::Transition => "transition",
            ReservedKind::Section => "section",
            ReservedKind::Synopsis => "synopsis",
            ReservedKind::Note => "note",
            ReservedKind::Boneyard => "boneyard",
            ReservedKind::PageBreak => "page_break",
            ReservedKind::LineBreak => "line_break",
        }
    }
}

/// 对白块中的一段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialoguePart {
    Dialogue(String),
    Parenthetical(String),
}

/// 块的分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// (规范化键名, 值)，按出现顺序
    TitlePage(Vec<(String, String)>),
    SceneHeading { text: String, number: Option<String> },
    Dialogue { character: String, dual: bool, parts: Vec<DialoguePart> },
    Reserved(ReservedKind),
    Action(String),
}

impl BlockKind {
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::TitlePage(_) => "title_page",
            BlockKind::SceneHeading { .. } => "scene_heading",
            BlockKind::Dialogue { .. } => "dialogue",
            BlockKind::Reserved(_) => "reserved",
            BlockKind::Action(_) => "action",
        }
    }
}

/// 分类规则，按优先级排列，第一个命中的规则决定块的类别；都不命中则为 action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRule {
    TitlePage,
    SceneHeading,
    Dialogue,
    Reserved,
}

impl BlockRule {
    pub const PRECEDENCE: [BlockRule; 4] = [
        BlockRule::TitlePage,
        BlockRule::SceneHeading,
        BlockRule::Dialogue,
        BlockRule::Reserved,
    ];

    pub fn apply(&self, block: &str) -> Option<BlockKind> {
        match self {
            BlockRule::TitlePage => match_title_page(block),
            BlockRule::SceneHeading => match_scene_heading(block),
            BlockRule::Dialogue => match_dialogue(block),
            BlockRule::Reserved => match_reserved(block).map(BlockKind::Reserved),
        }
    }
}

/// 对单个块分类
pub fn classify_block(block: &str) -> BlockKind {
    BlockRule::PRECEDENCE
        .iter()
        .find_map(|rule| rule.apply(block))
        .unwrap_or_else(|| BlockKind::Action(block.to_string()))
}

// 标题页：块以 "键: 值" 开头。没有键的续行并入上一个键
fn match_title_page(block: &str) -> Option<BlockKind> {
    if !BLOCK_REGEX["title_page"].is_match(block) {
        return None;
    }

    let mut fields = Vec::new();
    let mut open_key: Option<String> = None;
    for line in block.lines() {
        let (key, value) = match BLOCK_REGEX["title_page_line"].captures(line) {
            Some(caps) => {
                let key = normalize_title_key(&caps[1]);
                open_key = Some(key.clone());
                (key, caps[2].trim().to_string())
            }
            None => match &open_key {
                Some(key) => (key.clone(), line.trim().to_string()),
                None => continue,
            },
        };
        if !value.is_empty() {
            fields.push((key, value));
        }
    }
    Some(BlockKind::TitlePage(fields))
}

// 场景标题：单行，INT/EXT/EST/I/E 开头或以单个句点强制
fn match_scene_heading(block: &str) -> Option<BlockKind> {
    let caps = BLOCK_REGEX["scene_heading"].captures(block)?;
    let text = caps.get(1).or_else(|| caps.get(2))?.as_str();
    if ends_with_line_break(text) {
        return None;
    }

    let (text, number) = match BLOCK_REGEX["scene_number"].captures(text) {
        Some(num) => {
            let start = num.get(0).map_or(text.len(), |m| m.start());
            (&text[..start], Some(num[1].trim().to_string()))
        }
        None => (text, None),
    };

    Some(BlockKind::SceneHeading {
        text: text.to_string(),
        number,
    })
}

// 角色行 + 紧跟的对白行
fn match_dialogue(block: &str) -> Option<BlockKind> {
    let caps = BLOCK_REGEX["character"].captures(block)?;
    let cue = &caps[1];
    if ends_with_line_break(cue) {
        return None;
    }

    let mut parts = Vec::new();
    let mut speech: Vec<&str> = Vec::new();
    for line in caps[3].split('\n') {
        if BLOCK_REGEX["parenthetical"].is_match(line.trim()) {
            if !speech.is_empty() {
                parts.push(DialoguePart::Dialogue(speech.join("\n")));
                speech.clear();
            }
            parts.push(DialoguePart::Parenthetical(line.to_string()));
        } else {
            speech.push(line);
        }
    }
    if !speech.is_empty() {
        parts.push(DialoguePart::Dialogue(speech.join("\n")));
    }

    Some(BlockKind::Dialogue {
        character: cue.trim().to_string(),
        dual: !caps[2].is_empty(),
        parts,
    })
}

fn match_reserved(block: &str) -> Option<ReservedKind> {
    ReservedKind::ALL
        .iter()
        .copied()
        .find(|kind| BLOCK_REGEX[kind.regex_key()].is_match(block))
}

#[derive(Debug, Clone, Serialize)]
pub struct ParseOutput {
    pub script: Script,
    pub tokens: Vec<ScriptToken>,
    pub block_count: usize,
    /// 解析耗时（毫秒）
    pub parse_time: u64,
}

/// 按文档顺序单遍扫描块并生成 token，再交给 ScriptAssembler 组装成剧本
pub struct FountainParser {
    conf: Conf,
    tokens: Vec<ScriptToken>,
    block_count: usize,
    /// 最近一段普通对白，等下一个块决定它是否成为双对白的左侧
    pending_dialogue: Option<Vec<ScriptToken>>,
}

impl FountainParser {
    pub fn new(conf: Conf) -> Self {
        FountainParser {
            conf,
            tokens: Vec::new(),
            block_count: 0,
            pending_dialogue: None,
        }
    }

    pub fn conf(&self) -> &Conf {
        &self.conf
    }

    /// 文本 -> token 序列（文档顺序）
    pub fn tokenize(&mut self, script: &str) -> Vec<ScriptToken> {
        self.tokens.clear();
        self.pending_dialogue = None;

        let blocks = split_blocks(script);
        self.block_count = blocks.len();
        for (index, block) in blocks.iter().enumerate() {
            let kind = classify_block(block);
            trace!("块 {} 分类为 {}", index, kind.name());
            self.push_block(index, kind);
        }
        self.flush_pending();

        std::mem::take(&mut self.tokens)
    }

    /// 文本 -> 剧本。任何输入都会得到一个合法的剧本
    pub fn parse(&mut self, script: &str) -> Script {
        let tokens = self.tokenize(script);
        self.assemble(&tokens)
    }

    pub fn parse_output(&mut self, script: &str) -> ParseOutput {
        let start = Instant::now();
        let tokens = self.tokenize(script);
        let result = self.assemble(&tokens);

        ParseOutput {
            script: result,
            tokens,
            block_count: self.block_count,
            parse_time: start.elapsed().as_millis() as u64,
        }
    }

    fn assemble(&self, tokens: &[ScriptToken]) -> Script {
        let mut script = ScriptAssembler::new().assemble(tokens);
        if self.conf.default_voice.is_some() {
            script.set_default_voice(self.conf.default_voice.clone());
        }
        debug!(
            "解析完成: {} 个块, {} 个token, {} 个场景, {} 个角色, {} 行",
            self.block_count,
            tokens.len(),
            script.scenes().len(),
            script.actors().len(),
            script.line_count()
        );
        script
    }

    fn push_block(&mut self, block: usize, kind: BlockKind) {
        match kind {
            BlockKind::TitlePage(fields) => {
                self.flush_pending();
                for (key, value) in fields {
                    self.tokens.push(ScriptToken::title(key, value, block));
                }
            }
            BlockKind::SceneHeading { text, number } => {
                self.flush_pending();
                self.tokens.push(ScriptToken::scene_heading(text, number, block));
            }
            BlockKind::Dialogue { character, dual, parts } => {
                let dual = dual && self.conf.use_dual_dialogue;
                self.push_dialogue(block, character, dual, parts);
            }
            // 不产生 token，也不打断双对白配对
            BlockKind::Reserved(_) => {}
            BlockKind::Action(text) => {
                self.flush_pending();
                self.tokens.push(ScriptToken::new(TokenType::Action, text, block));
            }
        }
    }

    fn push_dialogue(&mut self, block: usize, character: String, dual: bool, parts: Vec<DialoguePart>) {
        let mut group = Vec::with_capacity(parts.len() + 3);
        group.push(ScriptToken::marker(TokenType::DialogueBegin, block));
        group.push(ScriptToken::new(TokenType::Character, character, block));
        for part in parts {
            group.push(match part {
                DialoguePart::Dialogue(text) => ScriptToken::new(TokenType::Dialogue, text, block),
                DialoguePart::Parenthetical(text) => ScriptToken::new(TokenType::Parenthetical, text, block),
            });
        }
        group.push(ScriptToken::marker(TokenType::DialogueEnd, block));

        if !dual {
            self.flush_pending();
            self.pending_dialogue = Some(group);
            return;
        }

        match self.pending_dialogue.take() {
            Some(left) => {
                self.tokens.push(ScriptToken::marker(TokenType::DualDialogueBegin, block));
                self.tokens.extend(mark_dual(left, DualSide::Left));
                self.tokens.extend(mark_dual(group, DualSide::Right));
                self.tokens.push(ScriptToken::marker(TokenType::DualDialogueEnd, block));
            }
            None => {
                warn!("第 {} 块的双对白标记前面没有可配对的对白，按普通对白处理", block);
                self.tokens.extend(group);
            }
        }
    }

    fn flush_pending(&mut self) {
        if let Some(group) = self.pending_dialogue.take() {
            self.tokens.extend(group);
        }
    }
}

impl Default for FountainParser {
    fn default() -> Self {
        Self::new(Conf::default())
    }
}

fn mark_dual(group: Vec<ScriptToken>, side: DualSide) -> impl Iterator<Item = ScriptToken> {
    group.into_iter().map(move |mut token| {
        token.is_dual_dialogue = true;
        if token.token_type == TokenType::DialogueBegin {
            token.dual = Some(side);
        }
        token
    })
}
