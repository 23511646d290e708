use std::fmt;
use serde::{Deserialize, Serialize};

/// 非对白叙述文本（action）所使用的哨兵角色名
pub const ACTION_NAME: &str = "ACTION";

/// 角色。名字是唯一的身份标识（区分大小写）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    name: String,
}

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Actor { name: name.into() }
    }

    /// ACTION 哨兵角色
    pub fn action() -> Self {
        Actor::new(ACTION_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_action(&self) -> bool {
        self.name == ACTION_NAME
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
