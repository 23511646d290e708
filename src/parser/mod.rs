pub mod lexer;
pub mod fountain_parser;
pub mod assembler;
pub mod text_processor;

pub use lexer::{normalize, split_blocks};
pub use fountain_parser::{
    classify_block,
    BlockKind,
    BlockRule,
    DialoguePart,
    FountainParser,
    ParseOutput,
    ReservedKind
};
pub use assembler::ScriptAssembler;
pub use text_processor::{escape_html, generate_html, render_emphasis_html};
