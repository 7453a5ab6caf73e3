//! Block-aware assembly of key/value entries from an Arcus stream.
//!
//! The format is positional: after the first opening marker every content
//! line alternates between key and value, and a lone `}` ends the whole
//! parse. Markers must match byte-for-byte; a marker with stray whitespace
//! or a trailing `\r` is treated as content.
use std::fmt;
use std::io::Read;

use super::line_reader::read_line;
use super::store::{Allocator, Pair, PairList, SystemAllocator};
use super::trim::{Edge, peel};

/// Layers removed from a key line, outermost first.
const KEY_LAYERS: [(char, Edge); 5] = [
    (' ', Edge::Front),
    ('"', Edge::Front),
    (' ', Edge::Back),
    (',', Edge::Back),
    ('"', Edge::Back),
];

/// Layers removed from a value line. Values keep trailing commas.
const VALUE_LAYERS: [(char, Edge); 4] = [
    (' ', Edge::Front),
    ('"', Edge::Front),
    (' ', Edge::Back),
    ('"', Edge::Back),
];

/// Where the parser is relative to the entry block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No opening marker seen yet; content is ignored.
    Outside,
    /// Content lines are collected into entries.
    InsideBlock,
    /// The closing marker was seen; nothing further is read.
    Done,
}

/// Something the parser tolerated rather than rejected.
///
/// Diagnostics never change which pairs are committed. Line numbers are
/// 1-based and count every line read, blank ones included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A content line before any opening marker was discarded.
    IgnoredLine {
        /// Line of the discarded content.
        line: usize,
    },
    /// A `},` marker arrived while a key still waited for its value; the
    /// key will be paired with the next content line.
    KeyAcrossMarker {
        /// Line of the marker.
        line: usize,
        /// The waiting key.
        key: String,
    },
    /// Parsing ended with a key that never received a value.
    UnpairedKey {
        /// Line the key was read from.
        line: usize,
        /// The discarded key.
        key: String,
    },
    /// Storage for a completed entry could not be reserved; it was dropped.
    DroppedEntry {
        /// Line of the entry's value.
        line: usize,
        /// Key of the dropped entry.
        key: String,
    },
    /// The stream failed before its end.
    ReadFailed {
        /// Last line read successfully.
        line: usize,
        /// Error reported by the stream.
        message: String,
    },
}

impl Diagnostic {
    /// The line this diagnostic refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::IgnoredLine { line }
            | Self::KeyAcrossMarker { line, .. }
            | Self::UnpairedKey { line, .. }
            | Self::DroppedEntry { line, .. }
            | Self::ReadFailed { line, .. } => *line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IgnoredLine { .. } => write!(f, "content before the opening '{{' was ignored"),
            Self::KeyAcrossMarker { key, .. } => {
                write!(f, "key '{key}' has no value before the next entry marker")
            }
            Self::UnpairedKey { key, .. } => write!(f, "key '{key}' has no value and was dropped"),
            Self::DroppedEntry { key, .. } => {
                write!(f, "entry '{key}' was dropped: out of memory")
            }
            Self::ReadFailed { message, .. } => write!(f, "read failed: {message}"),
        }
    }
}

/// Everything produced by one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    /// Committed pairs, in file order.
    pub pairs: PairList,
    /// Tolerated irregularities, in the order they were met.
    pub diagnostics: Vec<Diagnostic>,
}

/// Line-driven state machine that assembles entries.
///
/// Feed it lines with [`feed`](Self::feed) and collect the result with
/// [`finish`](Self::finish), or hand it a whole stream with
/// [`parse`](Self::parse).
pub struct EntryParser<'a> {
    alloc: &'a dyn Allocator,
    state: State,
    line: usize,
    pending_key: Option<(usize, String)>,
    pairs: PairList,
    diagnostics: Vec<Diagnostic>,
}

impl fmt::Debug for EntryParser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryParser")
            .field("state", &self.state)
            .field("line", &self.line)
            .field("pending_key", &self.pending_key)
            .field("pairs", &self.pairs.len())
            .finish_non_exhaustive()
    }
}

impl Default for EntryParser<'_> {
    fn default() -> Self {
        Self::new(&SystemAllocator)
    }
}

impl<'a> EntryParser<'a> {
    /// A parser in the [`State::Outside`] state that grows its storage
    /// through `alloc`.
    #[must_use]
    pub fn new(alloc: &'a dyn Allocator) -> Self {
        Self {
            alloc,
            state: State::Outside,
            line: 0,
            pending_key: None,
            pairs: PairList::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Process one line (without its delimiter) and return the new state.
    ///
    /// Lines fed after [`State::Done`] are not looked at.
    pub fn feed(&mut self, line: &[u8]) -> State {
        if self.state == State::Done {
            return self.state;
        }
        self.line += 1;

        match line {
            b"" => {}
            b"{" | b"}," => self.open(line == b"},"),
            b"}" => self.close(),
            content => self.content(content),
        }
        self.state
    }

    /// Consume `stream` until the closing marker or its end, then return
    /// what was collected.
    ///
    /// The stream is dropped (closed) exactly once before returning, however
    /// parsing ended. `None` stands for a stream that could not be opened
    /// and yields an empty result.
    pub fn parse<R: Read>(mut self, stream: Option<R>) -> Parsed {
        let Some(mut stream) = stream else {
            tracing::debug!("no stream to parse");
            return self.finish();
        };

        loop {
            match read_line(&mut stream, b'\n', true, self.alloc) {
                Ok(Some(line)) => {
                    if self.feed(line.as_bytes()) == State::Done {
                        break;
                    }
                }
                Ok(None) => break,
                Err(err) => {
                    self.diagnostics.push(Diagnostic::ReadFailed {
                        line: self.line,
                        message: err.to_string(),
                    });
                    break;
                }
            }
        }
        drop(stream);

        self.finish()
    }

    /// Stop parsing and return the committed pairs.
    ///
    /// A key still waiting for its value is dropped and reported.
    #[must_use]
    pub fn finish(mut self) -> Parsed {
        self.discard_pending();
        tracing::debug!(
            entries = self.pairs.len(),
            diagnostics = self.diagnostics.len(),
            "parse finished"
        );
        Parsed {
            pairs: self.pairs,
            diagnostics: self.diagnostics,
        }
    }

    fn open(&mut self, continuation: bool) {
        match self.state {
            State::Outside => {
                tracing::trace!(line = self.line, "entry block opened");
                self.state = State::InsideBlock;
            }
            State::InsideBlock => {
                if continuation && let Some((_, key)) = &self.pending_key {
                    self.diagnostics.push(Diagnostic::KeyAcrossMarker {
                        line: self.line,
                        key: key.clone(),
                    });
                }
            }
            State::Done => {}
        }
    }

    fn close(&mut self) {
        tracing::trace!(line = self.line, "entry block closed");
        self.discard_pending();
        self.state = State::Done;
    }

    fn content(&mut self, raw: &[u8]) {
        if self.state != State::InsideBlock {
            self.diagnostics
                .push(Diagnostic::IgnoredLine { line: self.line });
            return;
        }

        let mut text = String::from_utf8_lossy(raw).into_owned();
        match self.pending_key.take() {
            None => {
                peel(&mut text, &KEY_LAYERS);
                self.pending_key = Some((self.line, text));
            }
            Some((_, key)) => {
                peel(&mut text, &VALUE_LAYERS);
                self.commit(Pair { key, value: text });
            }
        }
    }

    fn commit(&mut self, pair: Pair) {
        if let Err((err, pair)) = self.pairs.try_push(pair, self.alloc) {
            tracing::debug!(line = self.line, key = %pair.key, "dropping entry: {err}");
            self.diagnostics.push(Diagnostic::DroppedEntry {
                line: self.line,
                key: pair.key,
            });
        }
    }

    fn discard_pending(&mut self) {
        if let Some((line, key)) = self.pending_key.take() {
            self.diagnostics.push(Diagnostic::UnpairedKey { line, key });
        }
    }
}

/// Parse a whole stream with the system allocator.
///
/// # Examples
///
/// ```
/// use arcus_cli::config::arcus::parse;
///
/// let input = "{\n\"pkgA\",\n\"echo A\"\n},\n{\n\"pkgB\",\n\"echo B\"\n}\n";
/// let parsed = parse(input.as_bytes());
/// assert_eq!(parsed.pairs.len(), 2);
/// assert_eq!(parsed.pairs.get(1).unwrap().value, "echo B");
/// ```
pub fn parse<R: Read>(stream: R) -> Parsed {
    EntryParser::new(&SystemAllocator).parse(Some(stream))
}
