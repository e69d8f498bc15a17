// src/application/ports/util.rs

/// Turns free text into a lowercase, ASCII, hyphen-separated token sequence.
/// Implementations must be deterministic and leave an existing slug unchanged.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
