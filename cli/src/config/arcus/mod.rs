//! The Arcus entry format: a line-oriented list of quoted key/value pairs.
//!
//! ```text
//! {
//! "neovim",
//! "sudo pacman -S --noconfirm neovim"
//! },
//! {
//! "EDITOR",
//! "nvim"
//! }
//! ```
//!
//! - [`line_reader`] pulls delimiter-bounded lines from a byte stream
//! - [`trim`] strips edge-anchored runs of one character
//! - [`parser`] drives both and assembles entries
//! - [`store`] owns the committed pairs and the allocation seam

pub mod line_reader;
pub mod parser;
pub mod store;
pub mod trim;

pub use line_reader::{Line, read_line};
pub use parser::{Diagnostic, EntryParser, Parsed, State, parse};
pub use store::{AllocError, Allocator, Pair, PairList, SystemAllocator};
pub use trim::{Edge, peel, strip_run, trim};
