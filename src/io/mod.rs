//! Entity-stream IO: the thin dispatcher over the codec core.

pub mod reader;
pub mod writer;

pub use reader::EntityStreamReader;
pub use writer::{write_store, TagWriter};
