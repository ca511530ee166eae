//! Bounded scrollback for the terminal widget.
//!
//! Output arrives from the socket as arbitrary text chunks; the widget
//! renders them in order inside one `<pre>`. Chunks carry a stable id so
//! the view can key them, and the buffer drops its oldest chunks once
//! the cap is reached.

use std::collections::VecDeque;

/// One chunk of terminal output (or locally echoed input).
#[derive(Clone, Debug, PartialEq)]
pub struct Chunk {
    /// Stable per-buffer id for keyed rendering.
    pub id: usize,
    /// Raw text, written verbatim.
    pub text: String,
}

/// Fixed-capacity scrollback buffer.
#[derive(Clone, Debug)]
pub struct Scrollback {
    chunks: VecDeque<Chunk>,
    capacity: usize,
    next_id: usize,
}

impl Scrollback {
    /// Creates an empty buffer holding at most `capacity` chunks.
    pub fn new(capacity: usize) -> Self {
        Self {
            chunks: VecDeque::with_capacity(capacity.min(64)),
            capacity: capacity.max(1),
            next_id: 0,
        }
    }

    /// Appends a chunk, evicting the oldest when full.
    pub fn push(&mut self, text: impl Into<String>) {
        if self.chunks.len() == self.capacity {
            self.chunks.pop_front();
        }
        self.chunks.push_back(Chunk {
            id: self.next_id,
            text: text.into(),
        });
        self.next_id = self.next_id.wrapping_add(1);
    }

    /// Drops all chunks. Ids keep increasing across a clear.
    pub fn clear(&mut self) {
        self.chunks.clear();
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Chunks in arrival order, cloned for rendering.
    pub fn to_vec(&self) -> Vec<Chunk> {
        self.chunks.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut sb = Scrollback::new(10);
        sb.push("$ ");
        sb.push("ls\r");
        sb.push("total 0\r\n");
        let texts: Vec<String> = sb.to_vec().into_iter().map(|c| c.text).collect();
        assert_eq!(texts, vec!["$ ", "ls\r", "total 0\r\n"]);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut sb = Scrollback::new(3);
        for i in 0..5 {
            sb.push(format!("chunk{}", i));
        }
        assert_eq!(sb.len(), 3);
        let texts: Vec<String> = sb.to_vec().into_iter().map(|c| c.text).collect();
        assert_eq!(texts, vec!["chunk2", "chunk3", "chunk4"]);
    }

    #[test]
    fn test_ids_are_unique_and_monotonic() {
        let mut sb = Scrollback::new(2);
        sb.push("a");
        sb.push("b");
        sb.push("a"); // same text, new id
        let ids: Vec<usize> = sb.to_vec().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_clear_keeps_id_sequence() {
        let mut sb = Scrollback::new(4);
        sb.push("a");
        sb.clear();
        assert!(sb.is_empty());
        sb.push("b");
        assert_eq!(sb.to_vec()[0].id, 1);
    }
}
