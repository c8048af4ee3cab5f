use crate::types::Token;

/// Rule-based tokenization for a blank language pipeline: whitespace split,
/// leading/trailing punctuation peeled into their own tokens, and (for
/// English) clitic suffixes split off the way full tokenizers do
/// (`don't` -> `do` + `n't`, `it's` -> `it` + `'s`).
pub fn tokenize_blank(text: &str, split_clitics: bool) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    for chunk in text.split_whitespace() {
        let before = tokens.len();
        for piece in split_chunk(chunk, split_clitics) {
            tokens.push(Token::new(piece, false));
        }
        if tokens.len() > before {
            if let Some(last) = tokens.last_mut() {
                last.ws = true;
            }
        }
    }
    if !text.ends_with(char::is_whitespace) {
        if let Some(last) = tokens.last_mut() {
            last.ws = false;
        }
    }
    tokens
}

fn split_chunk(chunk: &str, split_clitics: bool) -> Vec<String> {
    let mut out = Vec::new();
    let mut core = chunk;

    while let Some(c) = core.chars().next() {
        if !is_opening_punct(c) {
            break;
        }
        out.push(c.to_string());
        core = &core[c.len_utf8()..];
    }

    let mut trailing = Vec::new();
    while let Some(c) = core.chars().last() {
        if !is_trailing_punct(c) {
            break;
        }
        trailing.push(c.to_string());
        core = &core[..core.len() - c.len_utf8()];
    }

    if !core.is_empty() {
        let split_at = if split_clitics {
            clitic_split_pos(core)
        } else {
            None
        };
        match split_at {
            Some(pos) => {
                out.push(core[..pos].to_string());
                out.push(core[pos..].to_string());
            }
            None => out.push(core.to_string()),
        }
    }

    trailing.reverse();
    out.extend(trailing);
    out
}

fn is_opening_punct(c: char) -> bool {
    matches!(c, '(' | '[' | '{' | '"' | '\'' | '“' | '‘' | '«' | '¿' | '¡')
}

fn is_trailing_punct(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | '!'
            | '?'
            | ';'
            | ':'
            | '…'
            | '"'
            | '\''
            | '”'
            | '’'
            | '»'
            | ')'
            | ']'
            | '}'
            | '%'
    )
}

/// Byte position of a clitic suffix, if the word carries one. Comparison is
/// ASCII-case-insensitive, so byte lengths line up and the split position is
/// always a char boundary.
fn clitic_split_pos(word: &str) -> Option<usize> {
    const SUFFIXES: [&str; 14] = [
        "n't", "n’t", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'s", "’s", "'d", "’d", "'m",
        "’m",
    ];
    for suffix in SUFFIXES {
        if word.len() > suffix.len() {
            let pos = word.len() - suffix.len();
            if word.is_char_boundary(pos) && word[pos..].eq_ignore_ascii_case(suffix) {
                return Some(pos);
            }
        }
    }
    None
}

/// Punctuation sentencizer: a sentence closes at a terminator token
/// (`.` `!` `?` `…`), absorbing any immediately following terminators or
/// closing quotes/brackets. Trailing tokens without a terminator form a
/// final sentence.
pub fn split_sentences(tokens: &[Token]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < tokens.len() {
        if is_terminator(&tokens[i].text) {
            let mut end = i + 1;
            while end < tokens.len()
                && (is_terminator(&tokens[end].text) || is_closer(&tokens[end].text))
            {
                end += 1;
            }
            spans.push((start, end));
            start = end;
            i = end;
        } else {
            i += 1;
        }
    }
    if start < tokens.len() {
        spans.push((start, tokens.len()));
    }
    spans
}

fn is_terminator(text: &str) -> bool {
    matches!(text, "." | "!" | "?" | "…")
}

fn is_closer(text: &str) -> bool {
    matches!(text, "\"" | "'" | "”" | "’" | ")" | "]" | "}" | "»")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::span_text;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn splits_trailing_punctuation() {
        let tokens = tokenize_blank("Hello world.", true);
        assert_eq!(texts(&tokens), ["Hello", "world", "."]);
        assert!(tokens[0].ws);
        assert!(!tokens[1].ws);
        assert!(!tokens[2].ws);
    }

    #[test]
    fn splits_negation_clitic() {
        let tokens = tokenize_blank("don't stop", true);
        assert_eq!(texts(&tokens), ["do", "n't", "stop"]);
        assert!(!tokens[0].ws);
        assert!(tokens[1].ws);
    }

    #[test]
    fn splits_possessive_and_curly_apostrophe() {
        assert_eq!(texts(&tokenize_blank("it's", true)), ["it", "'s"]);
        assert_eq!(texts(&tokenize_blank("we’ll", true)), ["we", "’ll"]);
        assert_eq!(texts(&tokenize_blank("CAN'T", true)), ["CA", "N'T"]);
    }

    #[test]
    fn clitics_kept_whole_without_english_rules() {
        assert_eq!(texts(&tokenize_blank("don't", false)), ["don't"]);
    }

    #[test]
    fn peels_quotes_and_brackets() {
        let tokens = tokenize_blank("\"Hi!\" (yes)", true);
        assert_eq!(texts(&tokens), ["\"", "Hi", "!", "\"", "(", "yes", ")"]);
    }

    #[test]
    fn stacked_trailing_punctuation_keeps_source_order() {
        assert_eq!(texts(&tokenize_blank("(end.)", true)), ["(", "end", ".", ")"]);
        assert_eq!(texts(&tokenize_blank("wait...", true)), ["wait", ".", ".", "."]);
    }

    #[test]
    fn punctuation_only_chunk_survives() {
        assert_eq!(texts(&tokenize_blank("- ...", true)), ["-", ".", ".", "."]);
    }

    #[test]
    fn whitespace_flags_reconstruct_the_text() {
        let tokens = tokenize_blank("Hello world. Goodbye.", true);
        assert_eq!(span_text(&tokens, 0, tokens.len()), "Hello world. Goodbye.");
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(tokenize_blank("", true).is_empty());
        assert!(tokenize_blank("   ", true).is_empty());
    }

    #[test]
    fn sentences_close_at_terminators() {
        let tokens = tokenize_blank("First one. Second? Third", true);
        let spans = split_sentences(&tokens);
        assert_eq!(spans, vec![(0, 3), (3, 5), (5, 6)]);
        assert_eq!(span_text(&tokens, 3, 5), "Second?");
    }

    #[test]
    fn sentence_absorbs_closing_quote_and_stacked_terminators() {
        let tokens = tokenize_blank("\"Stop!\" Now", true);
        // " Stop ! " Now
        let spans = split_sentences(&tokens);
        assert_eq!(spans, vec![(0, 4), (4, 5)]);

        let tokens = tokenize_blank("What?! Next", true);
        let spans = split_sentences(&tokens);
        assert_eq!(spans, vec![(0, 3), (3, 4)]);
    }

    #[test]
    fn unterminated_tail_is_its_own_sentence() {
        let tokens = tokenize_blank("no punctuation here", true);
        assert_eq!(split_sentences(&tokens), vec![(0, 3)]);
    }

    #[test]
    fn no_tokens_no_sentences() {
        assert!(split_sentences(&[]).is_empty());
    }
}
