//! Paragraph-preserving text chunking

/// Separator between paragraphs
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Splits text into bounded chunks without breaking paragraphs
///
/// Paragraphs are accumulated greedily; a chunk is closed as soon as adding
/// the next paragraph would reach `max_chunk_size` characters. A single
/// paragraph longer than the limit becomes its own oversized chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChunker {
    max_chunk_size: usize,
    overlap: usize,
}

impl TextChunker {
    /// Default maximum chunk size (characters)
    pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1000;

    /// Default requested overlap (characters)
    pub const DEFAULT_OVERLAP: usize = 100;

    /// Create a new text chunker
    pub fn new(max_chunk_size: usize) -> Self {
        Self {
            max_chunk_size,
            overlap: Self::DEFAULT_OVERLAP,
        }
    }

    /// Set the requested overlap
    ///
    /// The value is recorded but not applied: consecutive chunks never
    /// share text.
    pub fn with_overlap(mut self, overlap: usize) -> Self {
        self.overlap = overlap;
        self
    }

    /// Maximum chunk size (characters)
    pub fn max_chunk_size(&self) -> usize {
        self.max_chunk_size
    }

    /// Requested overlap (characters)
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Chunk the given text
    ///
    /// Chunks are trimmed; chunks that are empty after trimming are dropped,
    /// so empty or blank input yields no chunks.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current_chunk = String::new();
        let mut current_len = 0;

        for paragraph in text.split(PARAGRAPH_SEPARATOR) {
            let paragraph_len = paragraph.chars().count();

            if current_len + paragraph_len >= self.max_chunk_size {
                push_trimmed(&mut chunks, &current_chunk);
                current_chunk.clear();
                current_len = 0;
            }

            current_chunk.push_str(paragraph);
            current_chunk.push_str(PARAGRAPH_SEPARATOR);
            current_len += paragraph_len + PARAGRAPH_SEPARATOR.len();
        }

        push_trimmed(&mut chunks, &current_chunk);
        chunks
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_CHUNK_SIZE)
    }
}

fn push_trimmed(chunks: &mut Vec<String>, chunk: &str) {
    let trimmed = chunk.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_empty_text() {
        let chunker = TextChunker::default();
        assert!(chunker.chunk("").is_empty());
        assert!(chunker.chunk("  \n\n \n\n").is_empty());
    }

    #[test]
    fn test_short_text_is_single_trimmed_chunk() {
        let chunker = TextChunker::new(100);
        let text = "\n First paragraph.\n\nSecond paragraph.\n\n";
        let chunks = chunker.chunk(text);
        assert_eq!(chunks, vec![text.trim().to_string()]);
    }

    #[test]
    fn test_paragraphs_are_combined_until_limit() {
        let chunker = TextChunker::new(50);
        let text = "First paragraph here.\n\nSecond paragraph here.\n\nThird paragraph here.";
        let chunks = chunker.chunk(text);

        assert_eq!(
            chunks,
            vec![
                "First paragraph here.\n\nSecond paragraph here.".to_string(),
                "Third paragraph here.".to_string(),
            ]
        );
    }

    #[test]
    fn test_boundary_reaching_limit_closes_chunk() {
        // 10 + 2 separator chars buffered; next paragraph of 8 reaches 20
        let chunker = TextChunker::new(20);
        let chunks = chunker.chunk("aaaaaaaaaa\n\nbbbbbbbb");
        assert_eq!(chunks, vec!["aaaaaaaaaa".to_string(), "bbbbbbbb".to_string()]);

        // One character less stays in the same chunk
        let chunks = chunker.chunk("aaaaaaaaaa\n\nbbbbbbb");
        assert_eq!(chunks, vec!["aaaaaaaaaa\n\nbbbbbbb".to_string()]);
    }

    #[test]
    fn test_oversized_paragraph_is_never_split() {
        let chunker = TextChunker::new(20);
        let long = "a".repeat(100);
        let text = format!("short\n\n{}\n\ntail", long);
        let chunks = chunker.chunk(&text);

        assert_eq!(chunks, vec!["short".to_string(), long, "tail".to_string()]);
    }

    #[test]
    fn test_lengths_are_counted_in_characters() {
        // 7 + 5 characters stay below 13; in bytes it would be 12 + 10
        let chunker = TextChunker::new(13);
        let chunks = chunker.chunk("ééééé\n\nààààà");
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn test_overlap_is_recorded_not_applied() {
        let chunker = TextChunker::new(60).with_overlap(20);
        assert_eq!(chunker.overlap(), 20);

        let text = format!("{}\n\n{}", words(10), words(10));
        let chunks = chunker.chunk(&text);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks.join("\n\n"), text);
    }

    #[test]
    fn test_defaults() {
        let chunker = TextChunker::default();
        assert_eq!(chunker.max_chunk_size(), 1000);
        assert_eq!(chunker.overlap(), 100);
    }

    fn paragraphs(text: &str) -> Vec<String> {
        text.split(PARAGRAPH_SEPARATOR)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }

    proptest! {
        #[test]
        fn prop_chunks_reconstruct_paragraphs(
            parts in proptest::collection::vec("[a-z \n]{0,60}", 0..20),
            max in 10usize..200,
        ) {
            let text = parts.join(PARAGRAPH_SEPARATOR);
            let chunks = TextChunker::new(max).chunk(&text);

            let rebuilt: Vec<String> = chunks.iter().flat_map(|c| paragraphs(c)).collect();
            prop_assert_eq!(rebuilt, paragraphs(&text));
        }

        #[test]
        fn prop_chunks_respect_size_bound(
            parts in proptest::collection::vec("[a-z ]{0,120}", 0..20),
            max in 10usize..200,
        ) {
            let text = parts.join(PARAGRAPH_SEPARATOR);
            for chunk in TextChunker::new(max).chunk(&text) {
                let single_paragraph = !chunk.contains(PARAGRAPH_SEPARATOR);
                prop_assert!(chunk.chars().count() < max || single_paragraph);
                prop_assert!(!chunk.is_empty());
            }
        }
    }
}
