use unicode_categories::UnicodeCategories;

/// A Bert normalizer.
///
/// Normalization is deterministic and idempotent, normalizing an already normalized sequence
/// doesn't change it.
#[derive(Clone, Copy, Debug)]
pub struct Normalizer {
    clean_text: bool,
    lowercase: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl Normalizer {
    pub(crate) fn new(clean_text: bool, lowercase: bool) -> Self {
        Self {
            clean_text,
            lowercase,
        }
    }

    /// Removes control characters and replaces all sorts of whitespace by ` `.
    fn clean(c: char) -> Option<char> {
        match c {
            '\0' | '\u{fffd}' => None,
            // these are technically control characters but we count them as whitespace
            '\t' | '\n' | '\r' => Some(' '),
            c if c.is_other() => None,
            c if c.is_whitespace() => Some(' '),
            c => Some(c),
        }
    }

    pub(crate) fn normalize(&self, sequence: impl AsRef<str>) -> String {
        let sequence = sequence.as_ref();
        let mut normalized = String::with_capacity(sequence.len());
        for c in sequence.chars() {
            let c = if self.clean_text {
                match Self::clean(c) {
                    Some(c) => c,
                    None => continue,
                }
            } else {
                c
            };
            if self.lowercase {
                normalized.extend(c.to_lowercase());
            } else {
                normalized.push(c);
            }
        }

        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        let normalizer = Normalizer::new(true, false);
        assert_eq!(
            normalizer.normalize("Hey\tyou\r\n\u{0}there\u{200b}\u{fffd}!\u{a0}"),
            "Hey you  there! ",
        );
    }

    #[test]
    fn test_lowercase() {
        let normalizer = Normalizer::new(false, true);
        assert_eq!(normalizer.normalize("HeLLo WÖRLD"), "hello wörld");
        assert_eq!(normalizer.normalize("a\tb"), "a\tb");
    }

    #[test]
    fn test_inert() {
        let normalizer = Normalizer::new(false, false);
        assert_eq!(normalizer.normalize("Hey\tYou"), "Hey\tYou");
    }

    #[test]
    fn test_idempotent() {
        let normalizer = Normalizer::default();
        for sequence in &["", "  ", "Hello, World!", "İstanbul\u{85}Straße\t\u{7}ΣΑΣ"] {
            let normalized = normalizer.normalize(sequence);
            assert_eq!(normalizer.normalize(&normalized), normalized);
        }
    }
}
