use super::*;

mod normalize_tests {
    use super::*;

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize("Senior RUST Developer, Kubernetes!"),
            "senior rust developer kubernetes"
        );
    }

    #[test]
    fn test_normalize_punctuation_becomes_separator() {
        assert_eq!(normalize("node.js/react"), "node react");
    }

    #[test]
    fn test_normalize_collapses_line_breaks() {
        assert_eq!(
            normalize("python\r\n\r\nsql\n\tdocker"),
            "python sql docker"
        );
    }

    #[test]
    fn test_normalize_drops_stop_words_and_short_tokens() {
        assert_eq!(
            normalize("I have 5 years of experience with Go and AWS"),
            "years experience aws"
        );
    }

    #[test]
    fn test_normalize_removes_non_ascii_letters() {
        assert_eq!(normalize("café résumé naïve"), "caf sum");
    }

    #[test]
    fn test_normalize_only_noise() {
        assert_eq!(normalize("a an the -- !! 42"), "");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let text = "Distributed systems, backend APIs; 2019-2024.";
        assert_eq!(normalize(text), normalize(text));
    }

    #[test]
    fn test_normalize_keeps_digits() {
        assert_eq!(normalize("python3 s3 2024"), "python3 2024");
    }

    #[test]
    fn test_stop_word_lookup() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("yourselves"));
        assert!(!is_stop_word("rust"));
    }
}

mod sentence_tests {
    use super::*;

    #[test]
    fn test_split_on_terminal_punctuation() {
        let text = "Built distributed storage engines. Led a team of six engineers! \
                    Did you ship on time? Yes, every quarter release.";
        let sentences = split_sentences(text);
        assert_eq!(
            sentences,
            vec![
                "Built distributed storage engines.",
                "Led a team of six engineers!",
                "Did you ship on time?",
                "Yes, every quarter release.",
            ]
        );
    }

    #[test]
    fn test_split_requires_whitespace_after_punctuation() {
        let text = "Worked on version 2.5 of the platform team tooling.";
        assert_eq!(split_sentences(text), vec![text]);
    }

    #[test]
    fn test_split_drops_short_segments() {
        let text = "Hi. Designed payment reconciliation pipelines. Ok.";
        assert_eq!(
            split_sentences(text),
            vec!["Designed payment reconciliation pipelines."]
        );
    }

    #[test]
    fn test_split_keeps_segment_at_minimum_length() {
        let exact = "a".repeat(MIN_SENTENCE_CHARS - 1);
        let text = format!("{exact}. tiny");
        assert_eq!(split_sentences(&text), vec![format!("{exact}.")]);
    }

    #[test]
    fn test_split_drops_segment_below_minimum_length() {
        let short = "a".repeat(MIN_SENTENCE_CHARS - 2);
        let text = format!("{short}. Designed payment reconciliation pipelines.");
        assert_eq!(format!("{short}.").chars().count(), MIN_SENTENCE_CHARS - 1);
        assert_eq!(
            split_sentences(&text),
            vec!["Designed payment reconciliation pipelines."]
        );
    }

    #[test]
    fn test_split_fallback_to_prefix() {
        assert_eq!(split_sentences("Short. Text."), vec!["Short. Text."]);
    }

    #[test]
    fn test_split_fallback_truncates() {
        let text = "x".repeat(500);
        let sentences = split_sentences(&text);
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].chars().count(), FALLBACK_SNIPPET_CHARS);
    }

    #[test]
    fn test_split_empty_text() {
        assert_eq!(split_sentences(""), vec![String::new()]);
    }

    #[test]
    fn test_split_newline_boundary() {
        let text = "Maintained Kafka consumers in production.\n\nOwned the on-call rotation for search.";
        assert_eq!(
            split_sentences(text),
            vec![
                "Maintained Kafka consumers in production.",
                "Owned the on-call rotation for search.",
            ]
        );
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }
}
