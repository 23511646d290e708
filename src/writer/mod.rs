pub mod fountain_writer;

pub use fountain_writer::FountainWriter;
