pub mod actor;
pub mod line;
pub mod scene;
pub mod script;
pub mod script_token;
pub mod conf;

pub use actor::{Actor, ACTION_NAME};
pub use line::Line;
pub use scene::Scene;
pub use script::{Script, TitleField};
pub use script_token::{ScriptToken, TokenType, DualSide};
pub use conf::Conf;
