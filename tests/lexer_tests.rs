//! Lexer/Tokenizer tests for sparkfmt
//!
//! Tests for the SQL tokenization layer.

use pretty_assertions::assert_eq;
use sparkfmt::parser::lexer::{tokenize, Token};

/// Token kinds without spans
fn kinds(input: &str) -> Vec<Token> {
    tokenize(input)
        .expect("should tokenize")
        .into_iter()
        .map(|t| t.token)
        .collect()
}

fn word(w: &str) -> Token {
    Token::Word(w.to_string())
}

mod words {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn words_keep_their_case() {
        assert_eq!(kinds("SeLeCt"), vec![word("SeLeCt"), Token::Eof]);
    }

    #[test]
    fn keyword_check_ignores_case() {
        let tokens = kinds("select");
        assert!(tokens[0].is_keyword("SELECT"));
        assert!(!tokens[0].is_keyword("FROM"));
    }

    #[test]
    fn backtick_identifier_holds_inner_text() {
        assert_eq!(
            kinds("`my col`"),
            vec![Token::QuotedIdentifier("my col".into()), Token::Eof]
        );
    }

    #[test]
    fn doubled_backtick_stays_in_identifier() {
        assert_eq!(
            kinds("`a``b`"),
            vec![Token::QuotedIdentifier("a``b".into()), Token::Eof]
        );
    }

    #[test]
    fn non_ascii_words() {
        assert_eq!(kinds("café"), vec![word("café"), Token::Eof]);
    }
}

mod literals {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn string_keeps_its_quotes() {
        assert_eq!(
            kinds("'hello'"),
            vec![Token::StringLiteral("'hello'".into()), Token::Eof]
        );
        assert_eq!(
            kinds("\"hello\""),
            vec![Token::StringLiteral("\"hello\"".into()), Token::Eof]
        );
    }

    #[test]
    fn escaped_quote_does_not_end_string() {
        assert_eq!(
            kinds(r"'it\'s'"),
            vec![Token::StringLiteral(r"'it\'s'".into()), Token::Eof]
        );
    }

    #[test]
    fn doubled_quote_does_not_end_string() {
        assert_eq!(
            kinds("'It''s'"),
            vec![Token::StringLiteral("'It''s'".into()), Token::Eof]
        );
    }

    #[test]
    fn empty_string_ends_at_second_quote() {
        assert_eq!(
            kinds("'' x"),
            vec![Token::StringLiteral("''".into()), word("x"), Token::Eof]
        );
    }

    #[test]
    fn raw_string_keeps_prefix() {
        assert_eq!(
            kinds(r"r'\d+'"),
            vec![Token::StringLiteral(r"r'\d+'".into()), Token::Eof]
        );
    }

    #[test]
    fn numbers_as_written() {
        assert_eq!(
            kinds("42 1.5e10 10L 2BD .5 3.14F"),
            vec![
                Token::Number("42".into()),
                Token::Number("1.5e10".into()),
                Token::Number("10L".into()),
                Token::Number("2BD".into()),
                Token::Number(".5".into()),
                Token::Number("3.14F".into()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn suffix_followed_by_letters_is_a_word() {
        assert_eq!(
            kinds("1days"),
            vec![Token::Number("1".into()), word("days"), Token::Eof]
        );
    }

    #[test]
    fn hex_literal_is_word_then_string() {
        assert_eq!(
            kinds("X'1F'"),
            vec![word("X"), Token::StringLiteral("'1F'".into()), Token::Eof]
        );
    }
}

mod operators {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn multi_char_operators() {
        assert_eq!(
            kinds("<=> <> != == => -> :: || <= >="),
            vec![
                Token::NullSafeEq,
                Token::NotEq,
                Token::BangEq,
                Token::DoubleEq,
                Token::FatArrow,
                Token::Arrow,
                Token::DoubleColon,
                Token::Concat,
                Token::LtEq,
                Token::GtEq,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn closing_angle_brackets_stay_separate() {
        assert_eq!(
            kinds("array<int>>"),
            vec![
                word("array"),
                Token::Lt,
                word("int"),
                Token::Gt,
                Token::Gt,
                Token::Eof
            ]
        );
    }

    #[test]
    fn punctuation() {
        assert_eq!(
            kinds("a[0].b, c;"),
            vec![
                word("a"),
                Token::LBracket,
                Token::Number("0".into()),
                Token::RBracket,
                Token::Dot,
                word("b"),
                Token::Comma,
                word("c"),
                Token::Semicolon,
                Token::Eof,
            ]
        );
    }
}

mod comments_and_hints {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            kinds("select -- trailing\n 1 /* block */"),
            vec![word("select"), Token::Number("1".into()), Token::Eof]
        );
    }

    #[test]
    fn hint_delimiters() {
        assert_eq!(
            kinds("/*+ BROADCAST(t) */"),
            vec![
                Token::HintStart,
                word("BROADCAST"),
                Token::LParen,
                word("t"),
                Token::RParen,
                Token::HintEnd,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn star_slash_outside_hint() {
        assert_eq!(kinds("a */ b"), vec![word("a"), Token::Star, Token::Slash, word("b"), Token::Eof]);
    }
}

mod spans {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn byte_ranges() {
        let tokens = tokenize("a, b").expect("should tokenize");
        let ranges: Vec<_> = tokens.iter().map(|t| (t.start, t.end)).collect();
        assert_eq!(ranges, vec![(0, 1), (1, 2), (3, 4), (4, 4)]);
    }

    #[test]
    fn empty_input_is_just_eof() {
        assert_eq!(kinds(""), vec![Token::Eof]);
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unterminated_string() {
        let err = tokenize("select 'abc").expect_err("should fail");
        assert_eq!(err.span(), Some((7, 1)));
        assert_eq!(err.to_string(), "Unterminated string literal");
    }

    #[test]
    fn unterminated_comment() {
        let err = tokenize("select /* abc").expect_err("should fail");
        assert_eq!(err.to_string(), "Unterminated comment");
    }

    #[test]
    fn unterminated_hint() {
        let err = tokenize("select /*+ BROADCAST(t) a").expect_err("should fail");
        assert_eq!(err.to_string(), "Unterminated hint");
    }

    #[test]
    fn unterminated_backtick() {
        assert!(tokenize("`abc").is_err());
    }

    #[test]
    fn unexpected_character() {
        let err = tokenize("select #").expect_err("should fail");
        assert_eq!(err.to_string(), "Unexpected character '#'");
        assert_eq!(err.span(), Some((7, 1)));
    }
}

mod describe {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn descriptions_for_messages() {
        assert_eq!(Token::Eof.describe(), "end of input");
        assert_eq!(word("x").describe(), "'x'");
        assert_eq!(Token::Comma.describe(), "','");
        assert_eq!(Token::StringLiteral("'s'".into()).describe(), "'s'");
    }
}
