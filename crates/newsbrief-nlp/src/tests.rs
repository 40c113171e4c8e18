//! Pipeline tests for the NLP layer

#[cfg(test)]
mod tests {
    use crate::{NlpToolkit, Tokenizer};
    use newsbrief_domain::{Corpus, MAX_BULLET_ITEMS, SALIENT_TERM_LIMIT};

    const CELTICS: &str = "The Boston Celtics won the championship. It was a historic win for the team. Click here for more photos. READ MORE at https://example.com.";

    #[test]
    fn test_celtics_scenario() {
        let generator = NlpToolkit::embedded().bullet_generator().unwrap();
        let report = generator.generate(CELTICS);
        assert_eq!(report.to_string(), "- The Boston Celtics won the championship.");
    }

    #[test]
    fn test_celtics_scenario_with_pinned_classifier() {
        // Only the first sentence is reported as mentioning an entity
        let generator = NlpToolkit::embedded()
            .bullet_generator_with(|s: &str| s.contains("Boston Celtics"))
            .unwrap();
        let report = generator.generate(CELTICS);
        assert_eq!(report.len(), 1);
        assert_eq!(report.to_string(), "- The Boston Celtics won the championship.");
    }

    #[test]
    fn test_empty_corpus_gives_empty_output() {
        let generator = NlpToolkit::embedded().bullet_generator().unwrap();
        assert_eq!(generator.generate("").to_string(), "");

        let mut corpus = Corpus::new();
        corpus.push_article("https://a.example", "");
        corpus.push_article("https://b.example", "");
        assert!(generator.summarize(&corpus).is_empty());
    }

    #[test]
    fn test_salient_sentence_without_entity_is_dropped() {
        let generator = NlpToolkit::embedded().bullet_generator().unwrap();
        let report = generator.generate("the championship was decided late. the championship ended.");
        assert!(report.is_empty());
    }

    #[test]
    fn test_capitalized_sentences_without_entity_are_dropped() {
        let generator = NlpToolkit::embedded().bullet_generator().unwrap();
        let report = generator.generate(
            "The Boston Celtics won the championship. \
             Fans cheered the win for the team. \
             Tickets for the championship sold out. \
             Officials said the championship was close.",
        );
        assert_eq!(report.to_string(), "- The Boston Celtics won the championship.");
    }

    #[test]
    fn test_report_is_capped_and_ordered() {
        let generator = NlpToolkit::embedded().bullet_generator().unwrap();
        let corpus: String = (0..30)
            .map(|i| format!("Game {} went to the Boston Celtics in overtime. ", i))
            .collect();
        let report = generator.generate(&corpus);

        assert_eq!(report.len(), MAX_BULLET_ITEMS);
        let lines: Vec<&str> = report.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(lines[0], "Game 0 went to the Boston Celtics in overtime.");
        assert_eq!(lines[9], "Game 9 went to the Boston Celtics in overtime.");
    }

    #[test]
    fn test_mixed_article_summary() {
        let article = "\
            Jaylen Brown scored 40 points as the Boston Celtics beat the Miami Heat on Sunday. \
            The win gave Boston a 2-0 lead in the series. \
            It was a strong night for the team. \
            Subscribe to our newsletter for more. \
            READ MORE: Brown reflects on the Celtics season. \
            Coach Joe Mazzulla praised Brown after the game, see https://example.com/celtics. \
            Brown said the Celtics played with real toughness.";
        let generator = NlpToolkit::embedded().bullet_generator().unwrap();
        let report = generator.generate(article);
        let text = report.to_string();

        assert!(text.contains("- Jaylen Brown scored 40 points"));
        assert!(text.contains("- Brown said the Celtics played with real toughness."));
        assert!(!text.contains("strong night"));
        assert!(!text.to_lowercase().contains("read more"));
        assert!(!text.contains("http"));
    }

    #[test]
    fn test_toolkit_tokenizer_matches_default() {
        let toolkit = NlpToolkit::embedded();
        let text = "The Celtics won't stop winning, say fans in Boston.";
        assert_eq!(toolkit.tokenizer().normalize(text), Tokenizer::default().normalize(text));
    }

    #[test]
    fn test_salient_limit_constant() {
        let toolkit = NlpToolkit::embedded();
        let corpus: String = (0..200).map(|i| format!("uniqueterm{} ", i)).collect();
        let salient = crate::FrequencyRanker::new(toolkit.tokenizer()).salient_terms(&corpus);
        assert_eq!(salient.len(), SALIENT_TERM_LIMIT);
    }
}

#[cfg(test)]
mod proptests {
    use crate::NlpToolkit;
    use newsbrief_domain::{SalientTerms, MAX_BULLET_ITEMS, SALIENT_TERM_LIMIT};
    use proptest::prelude::*;

    const VOCAB: &[&str] = &[
        "Boston", "Celtics", "won", "the", "championship", "Brown", "scored", "points", "READ",
        "MORE", "read", "more", "https://example.com", "http://x.io/a", "team", "It", "was",
        "historic", "Miami", "Heat", "fans", "cheered", "Mr.", "Smith", "in", "a", "game",
        "Tatum", "said", "click", "here", "photos", "Sunday", "40", "U.S.", "NBA",
    ];
    const ENDINGS: &[&str] = &[".", "!", "?", ","];

    const OPENERS: &[&str] = &[
        "Tickets", "Prices", "Injuries", "Scientists", "Officials", "Fans", "Players", "Critics",
        "Residents", "Voters",
    ];
    const COMMON: &[&str] = &[
        "the", "championship", "sold", "out", "said", "team", "season", "game", "was", "close",
        "quickly", "late", "final", "won", "for", "new", "evidence",
    ];

    fn plain_prose_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(
            (
                prop::sample::select(OPENERS),
                prop::collection::vec(prop::sample::select(COMMON), 1..10),
            ),
            1..20,
        )
        .prop_map(|sentences| {
            sentences
                .into_iter()
                .map(|(opener, words)| format!("{} {}. ", opener, words.join(" ")))
                .collect()
        })
    }

    fn corpus_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(
            (
                prop::collection::vec(prop::sample::select(VOCAB), 1..12),
                prop::sample::select(ENDINGS),
            ),
            0..40,
        )
        .prop_map(|sentences| {
            sentences
                .into_iter()
                .map(|(words, end)| format!("{}{} ", words.join(" "), end))
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Property: output is capped and every line carries the marker
        #[test]
        fn test_output_shape(corpus in corpus_strategy()) {
            let generator = NlpToolkit::embedded().bullet_generator().unwrap();
            let output = generator.generate(&corpus).to_string();
            let lines: Vec<&str> = output.lines().collect();
            prop_assert!(lines.len() <= MAX_BULLET_ITEMS);
            for line in &lines {
                prop_assert!(line.starts_with("- "));
            }
        }

        /// Property: no promotional text or raw URLs reach the output
        #[test]
        fn test_output_has_no_boilerplate(corpus in corpus_strategy()) {
            let generator = NlpToolkit::embedded().bullet_generator().unwrap();
            let output = generator.generate(&corpus).to_string();
            let url = regex::Regex::new(r"http\S+").unwrap();
            for line in output.lines() {
                prop_assert!(!line.to_uppercase().contains("READ MORE"));
                prop_assert!(!url.is_match(line));
            }
        }

        /// Property: every reported sentence contains a salient term
        #[test]
        fn test_output_contains_salient_term(corpus in corpus_strategy()) {
            let toolkit = NlpToolkit::embedded();
            let generator = toolkit.bullet_generator().unwrap();
            let salient: SalientTerms = crate::FrequencyRanker::new(toolkit.tokenizer()).salient_terms(&corpus);
            prop_assert!(salient.len() <= SALIENT_TERM_LIMIT);
            for item in generator.generate(&corpus).items() {
                prop_assert!(salient.find_in(&item.text).is_some());
            }
        }

        /// Property: ordinary prose with no names yields no bullets
        #[test]
        fn test_plain_prose_has_no_bullets(corpus in plain_prose_strategy()) {
            let generator = NlpToolkit::embedded().bullet_generator().unwrap();
            prop_assert!(generator.generate(&corpus).is_empty());
        }

        /// Property: identical input gives identical output
        #[test]
        fn test_generation_is_deterministic(corpus in corpus_strategy()) {
            let first = NlpToolkit::embedded().bullet_generator().unwrap().generate(&corpus);
            let second = NlpToolkit::embedded().bullet_generator().unwrap().generate(&corpus);
            prop_assert_eq!(first, second);
        }
    }
}
