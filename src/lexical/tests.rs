use super::*;

const REFERENCE: &str = "Seeking a backend engineer with distributed systems experience.";

fn scenario() -> Vec<Document> {
    vec![
        Document::new(
            "A.txt",
            "Backend engineer, 5 years distributed systems and databases.",
        ),
        Document::new("B.txt", "Graphic designer skilled in Photoshop."),
    ]
}

fn keywords(record: &ScoreRecord) -> &[String] {
    match &record.evidence {
        Evidence::Keywords(items) => items,
        other => panic!("expected keyword evidence, got {other:?}"),
    }
}

mod vectorizer_tests {
    use super::*;

    #[test]
    fn test_fit_builds_unigrams_and_bigrams() {
        let (space, rows) = TfidfVectorizer::new(100).fit_transform(&["rust tokio async"]);
        assert_eq!(rows.len(), 1);
        assert_eq!(space.len(), 5);
        for term in ["async", "rust", "rust tokio", "tokio", "tokio async"] {
            assert!(space.idf(term).is_some(), "missing {term}");
        }
        assert_eq!(space.term(0), Some("async"));
    }

    #[test]
    fn test_idf_is_smoothed() {
        let docs = ["rust python", "rust", "go"];
        let (space, _) = TfidfVectorizer::new(100).fit_transform(&docs);
        let n = 3.0f64;
        let rust = space.idf("rust").expect("rust in vocabulary");
        let python = space.idf("python").expect("python in vocabulary");
        assert!((rust - (((1.0 + n) / (1.0 + 2.0)).ln() + 1.0)).abs() < 1e-12);
        assert!((python - (((1.0 + n) / (1.0 + 1.0)).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_rows_are_l2_normalized() {
        let (_, rows) =
            TfidfVectorizer::new(100).fit_transform(&["kafka kafka flink", "flink spark", ""]);
        assert!((rows[0].norm() - 1.0).abs() < 1e-12);
        assert!((rows[1].norm() - 1.0).abs() < 1e-12);
        assert!(rows[2].is_zero());
    }

    #[test]
    fn test_term_frequency_raises_weight() {
        let (space, rows) = TfidfVectorizer::new(100).fit_transform(&["kafka kafka flink"]);
        let kafka = space.index_of("kafka").expect("kafka in vocabulary");
        let flink = space.index_of("flink").expect("flink in vocabulary");
        assert!(rows[0].weight(kafka) > rows[0].weight(flink));
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let docs = ["rust rust rust go go java", "rust go"];
        let (space, _) = TfidfVectorizer::new(2).fit_transform(&docs);
        assert_eq!(space.len(), 2);
        assert!(space.idf("rust").is_some());
        assert!(space.idf("go").is_some());
        assert!(space.idf("java").is_none());
    }

    #[test]
    fn test_max_features_ties_alphabetical() {
        let (space, _) = TfidfVectorizer::new(1).fit_transform(&["zeta alpha"]);
        assert_eq!(space.len(), 1);
        assert_eq!(space.term(0), Some("alpha"));
    }

    #[test]
    fn test_empty_corpus_vocabulary() {
        let (space, rows) = TfidfVectorizer::new(100).fit_transform(&["", ""]);
        assert!(space.is_empty());
        assert!(rows.iter().all(SparseVector::is_zero));
    }

    #[test]
    fn test_transform_matches_fitted_row() {
        let docs = ["backend engineer rust", "frontend engineer react"];
        let (space, rows) = TfidfVectorizer::new(100).fit_transform(&docs);
        assert_eq!(space.transform(docs[0]), rows[0]);
    }

    #[test]
    fn test_transform_ignores_unknown_terms() {
        let (space, _) = TfidfVectorizer::new(100).fit_transform(&["rust"]);
        assert!(space.transform("cobol fortran").is_zero());
    }

    #[test]
    fn test_sparse_cosine() {
        let (_, rows) =
            TfidfVectorizer::new(100).fit_transform(&["rust go", "rust go", "haskell", ""]);
        assert!((rows[0].cosine(&rows[1]) - 1.0).abs() < 1e-12);
        assert_eq!(rows[0].cosine(&rows[2]), 0.0);
        assert_eq!(rows[0].cosine(&rows[3]), 0.0);
    }

    #[test]
    fn test_top_terms_order_and_bound() {
        let (space, rows) =
            TfidfVectorizer::new(100).fit_transform(&["kafka kafka kafka flink flink spark"]);
        let top = rows[0].top_terms(2);
        assert_eq!(top.len(), 2);
        assert_eq!(space.term(top[0].0), Some("kafka"));
        assert!(top[0].1 >= top[1].1);
    }
}

mod scorer_tests {
    use super::*;

    #[test]
    fn test_strategy() {
        assert_eq!(LexicalScorer::default().strategy(), Strategy::Lexical);
        assert_eq!(LexicalScorer::default().max_features(), 20_000);
    }

    #[test]
    fn test_empty_candidate_set() {
        assert!(LexicalScorer::default().score_lexical(REFERENCE, &[]).is_empty());
    }

    #[test]
    fn test_backend_engineer_scenario() {
        let records = LexicalScorer::default().score_lexical(REFERENCE, &scenario());
        let (a, b) = (&records[0], &records[1]);

        assert_eq!(a.candidate, "A.txt");
        assert_eq!(b.candidate, "B.txt");
        assert!(a.score > b.score);
        assert_eq!(b.score, 0.0);

        let expected = ["backend", "engineer", "distributed", "systems"];
        let a_keywords = keywords(a);
        assert!(!a_keywords.is_empty());
        for keyword in a_keywords {
            assert!(
                expected.iter().any(|t| keyword.contains(t)),
                "unexpected keyword {keyword}"
            );
        }
        assert!(keywords(b).is_empty());
    }

    #[test]
    fn test_scenario_keywords_in_weight_order() {
        let records = LexicalScorer::default().score_lexical(REFERENCE, &scenario());
        assert_eq!(
            keywords(&records[0]),
            [
                "engineer years",
                "systems databases",
                "years distributed",
                "backend",
                "backend engineer",
            ]
        );
    }

    #[test]
    fn test_self_similarity() {
        let docs = vec![Document::new("self.txt", REFERENCE)];
        let records = LexicalScorer::default().score_lexical(REFERENCE, &docs);
        assert!((records[0].score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_candidate_scores_zero() {
        let docs = vec![
            Document::new("empty.pdf", ""),
            Document::new("noise.txt", "a an the !!! 42"),
        ];
        let records = LexicalScorer::default().score_lexical(REFERENCE, &docs);
        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(record.score, 0.0);
            assert!(record.evidence.is_empty());
        }
    }

    #[test]
    fn test_empty_reference_scores_zero() {
        let records = LexicalScorer::default().score_lexical("", &scenario());
        assert!(records.iter().all(|r| r.score == 0.0 && r.evidence.is_empty()));
    }

    #[test]
    fn test_keyword_evidence_bounded() {
        let reference = "rust tokio axum serde kafka postgres redis docker kubernetes terraform";
        let docs = vec![Document::new(
            "full.txt",
            "Rust tokio axum serde kafka postgres redis docker kubernetes terraform",
        )];
        let records = LexicalScorer::default().score_lexical(reference, &docs);
        assert_eq!(records[0].evidence.len(), MAX_KEYWORD_EVIDENCE);
    }

    #[test]
    fn test_scores_in_unit_range() {
        let docs = vec![
            Document::new("one.txt", "Rust systems programming, distributed storage."),
            Document::new("two.txt", "Backend engineer for payments."),
            Document::new("three.txt", "Chef with pastry experience."),
        ];
        for record in LexicalScorer::default().score_lexical(REFERENCE, &docs) {
            assert!((0.0..=1.0 + 1e-12).contains(&record.score));
        }
    }

    #[test]
    fn test_deterministic() {
        let scorer = LexicalScorer::default();
        assert_eq!(
            scorer.score_lexical(REFERENCE, &scenario()),
            scorer.score_lexical(REFERENCE, &scenario())
        );
    }

    #[test]
    fn test_overlaps_reference_both_directions() {
        let tokens: HashSet<&str> = ["mysql", "engineer"].into_iter().collect();
        assert!(overlaps_reference("sql", &tokens));
        assert!(overlaps_reference("engineering", &tokens));
        assert!(overlaps_reference("senior engineer", &tokens));
        assert!(!overlaps_reference("designer", &tokens));
    }
}
