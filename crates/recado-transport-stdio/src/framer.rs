//! Byte-to-line framing with a bounded partial-line buffer.

/// Splits an incoming byte stream into complete lines.
///
/// Everything before the last line break in the accumulated bytes is a
/// complete message; the remainder is retained for the next push. The
/// retained partial is capped at [`LineFramer::MAX_LINE_BYTES`]: an
/// oversized line is discarded in full, and input is skipped until the
/// next line break restores framing.
#[derive(Default)]
pub struct LineFramer {
    pending: Vec<u8>,
    discarding: bool,
}

/// Result of feeding one chunk of bytes into the framer.
pub struct Push {
    /// Complete lines, in input order, line breaks stripped.
    pub lines: Vec<String>,
    /// Bytes dropped because a line exceeded the cap.
    pub discarded: usize,
}

impl LineFramer {
    /// Maximum length of a buffered partial line. A request envelope is
    /// a few hundred bytes; this bounds memory against a peer that
    /// never sends a line break.
    pub const MAX_LINE_BYTES: usize = 64 * 1024;

    /// Creates an empty framer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one chunk and returns the complete lines it closed.
    pub fn push(&mut self, bytes: &[u8]) -> Push {
        let mut lines = Vec::new();
        let mut discarded = 0;

        self.pending.extend_from_slice(bytes);

        while let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
            let rest = self.pending.split_off(pos + 1);
            let mut segment = std::mem::replace(&mut self.pending, rest);
            segment.pop(); // the line break itself

            if self.discarding {
                // Tail of an oversized line; the break restores framing.
                discarded += segment.len();
                self.discarding = false;
            } else {
                lines.push(String::from_utf8_lossy(&segment).into_owned());
            }
        }

        if self.pending.len() > Self::MAX_LINE_BYTES {
            discarded += self.pending.len();
            self.pending.clear();
            self.discarding = true;
        }

        Push { lines, discarded }
    }

    /// Takes whatever partial line is still buffered (used at EOF).
    pub fn take_pending(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            None
        } else {
            let bytes = std::mem::take(&mut self.pending);
            Some(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}
