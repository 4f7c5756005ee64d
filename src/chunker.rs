//! Fixed-window overlapping chunker for document text.
//!
//! Splits text into windows of `window` characters starting every `stride`
//! characters. With the defaults (window 500, stride 400) consecutive chunks
//! share a 100-character overlap so that sentences cut by one boundary stay
//! whole in the neighboring chunk.

use crate::errors::Error;

/// Default chunk window in characters.
pub const DEFAULT_WINDOW: usize = 500;
/// Default chunk stride in characters.
pub const DEFAULT_STRIDE: usize = 400;

/// Chunking parameters, validated at construction.
#[derive(Debug, Clone, Copy)]
pub struct ChunkPolicy {
    window: usize,
    stride: usize,
}

impl Default for ChunkPolicy {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            stride: DEFAULT_STRIDE,
        }
    }
}

/// One chunk of a document, tagged with its emission index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 0-based position in emission order.
    pub index: usize,
    /// The chunk text, at most `window` characters.
    pub text: String,
}

impl ChunkPolicy {
    /// Create a policy with the given window and stride (both in characters).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidChunking` if either value is zero, or if the
    /// stride exceeds the window (text between windows would never be
    /// emitted). A stride equal to the window is allowed and tiles the text
    /// without overlap.
    pub fn new(window: usize, stride: usize) -> Result<Self, Error> {
        if window == 0 {
            return Err(Error::InvalidChunking(
                "window must be greater than 0".to_string(),
            ));
        }
        if stride == 0 {
            return Err(Error::InvalidChunking(
                "stride must be greater than 0".to_string(),
            ));
        }
        if stride > window {
            return Err(Error::InvalidChunking(format!(
                "stride {} exceeds window {} (text between windows would be skipped)",
                stride, window
            )));
        }
        Ok(Self { window, stride })
    }

    /// Chunk window in characters.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Chunk stride in characters.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Split `text` into overlapping chunks.
    ///
    /// Windows are counted in characters, so multi-byte text never splits
    /// inside a character. A text of L characters yields exactly
    /// `ceil(L / stride)` chunks; the final chunk may be shorter than the
    /// window. Empty text yields no chunks.
    ///
    /// # Example
    ///
    /// ```
    /// use muisti::chunker::ChunkPolicy;
    ///
    /// let policy = ChunkPolicy::new(5, 4).unwrap();
    /// let chunks = policy.chunk("abcdefghij");
    ///
    /// assert_eq!(chunks.len(), 3);
    /// assert_eq!(chunks[0].text, "abcde");
    /// assert_eq!(chunks[1].text, "efghi");
    /// assert_eq!(chunks[2].text, "ij");
    /// ```
    #[must_use]
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        if text.is_empty() {
            return vec![];
        }

        let chars: Vec<char> = text.chars().collect();
        let mut chunks = Vec::with_capacity(chars.len().div_ceil(self.stride));

        let mut start = 0;
        let mut index = 0;
        while start < chars.len() {
            let end = (start + self.window).min(chars.len());
            chunks.push(Chunk {
                index,
                text: chars[start..end].iter().collect(),
            });
            start += self.stride;
            index += 1;
        }

        chunks
    }
}
