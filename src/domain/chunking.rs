//! Sliding-window text chunking

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Configuration for chunking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Target chunk size in characters
    pub chunk_size: usize,
    /// Overlap between consecutive chunks in characters
    pub chunk_overlap: usize,
}

impl ChunkingConfig {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    /// Validate the configuration. Overlap must stay below the chunk size
    /// or the window would never advance.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.chunk_size == 0 {
            return Err(DomainError::configuration(
                "chunk_size must be greater than 0",
            ));
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(DomainError::configuration(
                "chunk_overlap must be less than chunk_size",
            ));
        }

        Ok(())
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            chunk_overlap: 50,
        }
    }
}

/// Split text into overlapping fixed-size windows.
///
/// The window advances by `chunk_size - chunk_overlap` characters each
/// step, so consecutive chunks share up to `chunk_overlap` characters.
/// Each window is trimmed and empty windows are dropped. Windows are
/// measured in characters, never splitting inside a code point.
///
/// The scan stops at the window that reaches the end of the text. A
/// final stride landing inside that window does not emit an extra
/// chunk, since it would hold only characters already covered; the
/// count is therefore always `ceil((len - overlap) / stride)`.
pub fn chunk(text: &str, config: &ChunkingConfig) -> Result<Vec<String>, DomainError> {
    config.validate()?;

    let chars: Vec<char> = text.chars().collect();
    let step = config.chunk_size - config.chunk_overlap;

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let end = (start + config.chunk_size).min(chars.len());
        let window: String = chars[start..end].iter().collect();
        let trimmed = window.trim();

        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }

        if end >= chars.len() {
            break;
        }

        start += step;
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let chunks = chunk("", &ChunkingConfig::default()).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        let chunks = chunk("   \n\t  ", &ChunkingConfig::default()).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_short_text_single_chunk() {
        let chunks = chunk("  Hello, World!  ", &ChunkingConfig::default()).unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], "Hello, World!");
    }

    #[test]
    fn test_chunk_count_formula() {
        // ceil((L - O) / (C - O)) chunks for text longer than the window
        let text = "x".repeat(1200);
        let config = ChunkingConfig::new(500, 50);

        let chunks = chunk(&text, &config).unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 500);
        assert_eq!(chunks[1].len(), 500);
        // tail window: 1200 - 900 = 300 characters
        assert_eq!(chunks[2].len(), 300);
    }

    #[test]
    fn test_no_pure_overlap_tail_chunk() {
        // The stride after the second window (start 900) lands inside
        // it; everything past 900 is already covered, so no third
        // chunk is emitted.
        let text = "x".repeat(950);
        let config = ChunkingConfig::new(500, 50);

        let chunks = chunk(&text, &config).unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].len(), 500);
    }

    #[test]
    fn test_consecutive_chunks_overlap() {
        let text: String = ('a'..='z').cycle().take(20).collect();
        let config = ChunkingConfig::new(10, 4);

        let chunks = chunk(&text, &config).unwrap();

        for pair in chunks.windows(2) {
            let tail = &pair[0][pair[0].len() - 4..];
            assert!(pair[1].starts_with(tail));
        }
    }

    #[test]
    fn test_non_overlapping_portions_reconstruct_source() {
        // No whitespace, so trimming cannot alter the windows
        let text: String = ('a'..='z').cycle().take(1000).collect();
        let config = ChunkingConfig::new(100, 20);

        let chunks = chunk(&text, &config).unwrap();
        assert_eq!(chunks.len(), 13);

        let mut rebuilt = chunks[0].clone();
        for c in &chunks[1..] {
            rebuilt.push_str(&c[config.chunk_overlap..]);
        }
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_overlap_equal_to_size_rejected() {
        let config = ChunkingConfig::new(100, 100);
        let result = chunk("some text", &config);

        assert!(matches!(
            result,
            Err(DomainError::Configuration { .. })
        ));
    }

    #[test]
    fn test_overlap_greater_than_size_rejected() {
        let config = ChunkingConfig::new(50, 80);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let config = ChunkingConfig::new(0, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_multibyte_text() {
        let text = "é".repeat(700);
        let config = ChunkingConfig::new(500, 50);

        let chunks = chunk(&text, &config).unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 500);
        assert_eq!(chunks[1].chars().count(), 250);
    }
}
