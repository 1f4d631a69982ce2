//! Document tokenizer.

/// Turns a document into normalized tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, document: &str) -> Vec<String>;
}

/// Lower-cases the document and splits on the single space character only.
///
/// `\r\n` counts as one space. Tabs, lone newlines and runs of spaces are left
/// in place, so `"a  b"` yields an empty token between `a` and `b`; those fail
/// length validation downstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceTokenizer;

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, document: &str) -> Vec<String> {
        document
            .replace("\r\n", " ")
            .to_lowercase()
            .split(' ')
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits() {
        let tokens = SpaceTokenizer.tokenize("Foo BAR baz");
        assert_eq!(tokens, vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn crlf_is_a_single_space() {
        let tokens = SpaceTokenizer.tokenize("good\r\nday");
        assert_eq!(tokens, vec!["good", "day"]);
    }

    #[test]
    fn only_single_space_separates() {
        assert_eq!(SpaceTokenizer.tokenize("a  b"), vec!["a", "", "b"]);
        assert_eq!(SpaceTokenizer.tokenize("a\tb"), vec!["a\tb"]);
        assert_eq!(SpaceTokenizer.tokenize(""), vec![""]);
    }

    #[test]
    fn idempotent_on_normalized_input() {
        let doc = "already lower case words";
        let once = SpaceTokenizer.tokenize(doc);
        let twice = SpaceTokenizer.tokenize(&once.join(" "));
        assert_eq!(once, twice);
    }
}
