use word_profiler::{NoiseReason, TaggedToken, TokenFilter, TokenFilterConfig};

fn tokens(pairs: &[(&str, &str)]) -> Vec<TaggedToken> {
    pairs.iter().map(|&pair| TaggedToken::from(pair)).collect()
}

#[cfg(test)]
mod default_token_filter_tests {
    use super::*;

    #[test]
    fn test_filter_empty_tokens() {
        let filter = TokenFilter::default();
        assert_eq!(filter.filter(&[]), Vec::<TaggedToken>::new());
    }

    #[test]
    fn test_filter_drops_single_characters() {
        let filter = TokenFilter::default();

        let input = tokens(&[("a", "n"), ("的", "ude1"), ("", "n"), ("ok", "n")]);
        assert_eq!(filter.filter(&input), tokens(&[("ok", "n")]));
    }

    #[test]
    fn test_filter_measures_trimmed_length() {
        let filter = TokenFilter::default();

        let input = tokens(&[("  x  ", "n"), ("   ", "n"), (" ab ", "n")]);
        assert_eq!(filter.filter(&input), tokens(&[(" ab ", "n")]));
    }

    #[test]
    fn test_filter_keeps_ideographic_space_in_length() {
        let filter = TokenFilter::default();

        // U+3000 is not trimmed, so the token is two characters long
        let input = tokens(&[("\u{3000}的", "n"), ("\t的\r\n", "n")]);
        assert_eq!(filter.filter(&input), tokens(&[("\u{3000}的", "n")]));
    }

    #[test]
    fn test_filter_counts_characters_not_bytes() {
        let filter = TokenFilter::default();

        // A single CJK character is three UTF-8 bytes but still one character
        let input = tokens(&[("字", "n"), ("文本", "n")]);
        assert_eq!(filter.filter(&input), tokens(&[("文本", "n")]));
    }

    #[test]
    fn test_filter_drops_punctuation_tags() {
        let filter = TokenFilter::default();

        let input = tokens(&[("……", "w"), ("--", "wp"), ("«»", "wyz"), ("word", "n")]);
        assert_eq!(filter.filter(&input), tokens(&[("word", "n")]));
    }

    #[test]
    fn test_filter_drops_generic_symbol_tag() {
        let filter = TokenFilter::default();

        let input = tokens(&[("HanLP", "nx"), ("nxt", "nxt"), ("name", "nr")]);
        assert_eq!(filter.filter(&input), tokens(&[("nxt", "nxt"), ("name", "nr")]));
    }

    #[test]
    fn test_filter_preserves_order() {
        let filter = TokenFilter::default();

        let input = tokens(&[
            ("zeta", "n"),
            (",", "w"),
            ("alpha", "n"),
            ("b", "n"),
            ("zeta", "n"),
            ("mid", "v"),
        ]);
        assert_eq!(
            filter.filter(&input),
            tokens(&[("zeta", "n"), ("alpha", "n"), ("zeta", "n"), ("mid", "v")])
        );
    }

    #[test]
    fn test_filter_is_a_subsequence_without_short_tokens() {
        let filter = TokenFilter::default();

        let input = tokens(&[
            ("一", "m"),
            ("profile", "n"),
            ("!", "w"),
            ("ab", "x"),
            ("c", "n"),
            ("code", "nx"),
            ("words", "n"),
        ]);
        let output = filter.filter(&input);

        let mut remaining = input.iter();
        for kept in &output {
            assert!(kept.text.trim().chars().count() > 1);
            assert!(
                remaining.any(|token| token == kept),
                "{:?} is out of order or not from the input",
                kept
            );
        }
    }

    #[test]
    fn test_noise_reason_reports_first_matching_rule() {
        let filter = TokenFilter::default();

        assert_eq!(
            filter.noise_reason(&TaggedToken::new(",", "w")),
            Some(NoiseReason::TooShort)
        );
        assert_eq!(
            filter.noise_reason(&TaggedToken::new("……", "w")),
            Some(NoiseReason::Punctuation)
        );
        assert_eq!(
            filter.noise_reason(&TaggedToken::new("HanLP", "nx")),
            Some(NoiseReason::GenericSymbol)
        );
        assert_eq!(filter.noise_reason(&TaggedToken::new("HanLP", "n")), None);
    }
}

#[cfg(test)]
mod custom_token_filter_tests {
    use super::*;

    #[test]
    fn test_custom_markers() {
        let filter = TokenFilter::new(TokenFilterConfig {
            max_noise_length: 1,
            punctuation_tag_prefix: "PUNCT",
            generic_symbol_tag: "SYM",
        });

        let input = tokens(&[("--", "PUNCT"), ("$$", "SYM"), ("well", "w"), ("fine", "nx")]);
        assert_eq!(filter.filter(&input), tokens(&[("well", "w"), ("fine", "nx")]));
    }

    #[test]
    fn test_custom_noise_length() {
        let filter = TokenFilter::new(TokenFilterConfig {
            max_noise_length: 3,
            ..*TokenFilter::default().config()
        });

        let input = tokens(&[("the", "n"), ("quick", "n"), ("fox", "n")]);
        assert_eq!(filter.filter(&input), tokens(&[("quick", "n")]));
    }
}
