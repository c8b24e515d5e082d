use unicode_categories::UnicodeCategories;

/// A Bert pre-tokenizer.
///
/// Splits a sequence into words on whitespace and isolates punctuation.
#[derive(Clone, Copy, Debug, Default)]
pub struct PreTokenizer;

impl PreTokenizer {
    fn is_punctuation(c: char) -> bool {
        c.is_ascii_punctuation() || c.is_punctuation()
    }

    /// Pushes the parts of the word with every punctuation char isolated.
    fn isolate_punctuation<'s>(word: &'s str, words: &mut Vec<&'s str>) {
        let mut start = 0;
        for (idx, c) in word.char_indices() {
            if Self::is_punctuation(c) {
                if start < idx {
                    words.push(&word[start..idx]);
                }
                start = idx + c.len_utf8();
                words.push(&word[idx..start]);
            }
        }
        if start < word.len() {
            words.push(&word[start..]);
        }
    }

    /// Pre-tokenizes the sequence.
    pub(crate) fn pre_tokenize<'s>(&self, sequence: &'s str) -> Vec<&'s str> {
        let mut words = Vec::new();
        for word in sequence.split(char::is_whitespace) {
            Self::isolate_punctuation(word, &mut words);
        }

        words
    }
}
