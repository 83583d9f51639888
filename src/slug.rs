//! Identifier slugs for categories, articles and sections.
//!
//! A slug is lowercase and made only of word characters and single dashes:
//!
//! - `"STM32"` → `"stm32"`
//! - `"Getting Started"` → `"getting-started"`
//! - `"snake_case  name"` → `"snake-case-name"`
//! - `"C++ / Rust!"` → `"c-rust"`
//!
//! Characters that are neither word characters, whitespace nor dashes are
//! dropped before separators are collapsed, so `"a ! b"` and `"a b"` both
//! become `"a-b"`.

/// Normalize arbitrary text into an identifier-safe token.
///
/// - Lowercases the input
/// - Drops everything except alphanumerics, whitespace, `_` and `-`
/// - Turns each run of whitespace, `_` and `-` into a single dash
/// - Never emits a leading or trailing dash
///
/// Applying it twice gives the same result as applying it once.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_dash = false;

    for c in lowered.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '_' || c == '-' {
            pending_dash = true;
        }
        // anything else is dropped without acting as a separator
    }

    slug
}
