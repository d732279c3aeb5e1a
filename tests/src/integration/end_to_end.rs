//! # End-to-End Flow Tests
//!
//! Builds real filters, runs query batches through the service with
//! automatic strategy selection, and checks the selector's behavior over
//! the whole (query size, filter size) grid.

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use gcs_filters::{
        FilterParams, FilterQueryApi, GcsFilter, MatchService, MatchStrategy, MatcherConfig,
        MatcherConfigBuilder,
    };

    const KEY: [u8; 16] = [0xC3; 16];

    fn build_filter(count: usize, seed: u64) -> (GcsFilter, Vec<Vec<u8>>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let elements: Vec<Vec<u8>> = (0..count)
            .map(|_| (0..20).map(|_| rng.gen::<u8>()).collect())
            .collect();
        let refs: Vec<&[u8]> = elements.iter().map(|e| e.as_slice()).collect();
        let filter = GcsFilter::build(KEY, FilterParams::default(), &refs).unwrap();
        (filter, elements)
    }

    #[test]
    fn test_no_false_negatives_through_service() {
        let service = MatchService::new(MatcherConfig::default()).unwrap();
        let (filter, elements) = build_filter(500, 1);

        for element in &elements {
            assert!(
                service.match_item(&filter, element).unwrap(),
                "member must match"
            );
        }

        let refs: Vec<&[u8]> = elements.iter().map(|e| e.as_slice()).collect();
        assert!(service.match_any(&filter, &refs).unwrap());
        assert_eq!(service.matching_items(&filter, &refs).unwrap().len(), refs.len());
    }

    #[test]
    fn test_non_members_rarely_match() {
        let service = MatchService::new(MatcherConfig::default()).unwrap();
        let (filter, _) = build_filter(100, 2);

        // With M = 784931 the expected false-positive rate over 10k probes
        // is ~0.013; more than a handful would mean something is broken.
        let mut rng = StdRng::seed_from_u64(99);
        let mut hits = 0usize;
        for _ in 0..10_000 {
            let probe: Vec<u8> = (0..24).map(|_| rng.gen::<u8>()).collect();
            if service.match_item(&filter, &probe).unwrap() {
                hits += 1;
            }
        }
        assert!(hits <= 3, "unexpected false-positive count: {hits}");
    }

    #[test]
    fn test_selection_grid_is_total() {
        let service = MatchService::new(MatcherConfig::default()).unwrap();

        for n in [1usize, 10, 100, 1000, 10_000] {
            for q in [1usize, 10, 100, 1000, 10_000, 100_000, 1_000_000] {
                let est = service.select_strategy(q, n);
                assert!(
                    matches!(est.strategy, MatchStrategy::Zip | MatchStrategy::Hash),
                    "q={q} n={n}"
                );
                assert!(est.confidence > 0.0 && est.confidence <= 1.0, "q={q} n={n}");
            }
        }
    }

    #[test]
    fn test_selection_trend_over_batch_size() {
        let service = MatchService::new(MatcherConfig::default()).unwrap();

        // For a fixed filter, growing batches eventually flip the selector
        // from the lazy walk to the one-time materialization, and the flip
        // is monotone: once Hash wins it keeps winning.
        let n = 1000;
        let mut seen_hash = false;
        for q in [1usize, 10, 100, 1000, 10_000, 100_000, 1_000_000] {
            match service.select_strategy(q, n).strategy {
                MatchStrategy::Hash => seen_hash = true,
                MatchStrategy::Zip => {
                    assert!(!seen_hash, "selector flipped back to Zip at q={q}")
                }
                MatchStrategy::Block => unreachable!("non-empty sizes"),
            }
        }
        assert!(seen_hash, "Hash must win for huge batches");
    }

    #[test]
    fn test_custom_calibration_changes_selection() {
        let service = MatchService::new(MatcherConfig::default()).unwrap();

        // Making the query sort catastrophically expensive flips a batch
        // the default calibration gives to Zip...
        assert_eq!(service.select_strategy(10, 1000).strategy, MatchStrategy::Zip);
        let sort_heavy = MatchService::new(
            MatcherConfigBuilder::new().sort_weight(10_000.0).build().unwrap(),
        )
        .unwrap();
        assert_eq!(
            sort_heavy.select_strategy(10, 1000).strategy,
            MatchStrategy::Hash
        );

        // ...while catastrophic insert cost flips one the default gives to
        // Hash.
        assert_eq!(
            service.select_strategy(100, 1000).strategy,
            MatchStrategy::Hash
        );
        let insert_heavy = MatchService::new(
            MatcherConfigBuilder::new()
                .insert_weight(1_000_000.0)
                .build()
                .unwrap(),
        )
        .unwrap();
        assert_eq!(
            insert_heavy.select_strategy(100, 1000).strategy,
            MatchStrategy::Zip
        );
    }

    #[test]
    fn test_results_identical_across_configs() {
        // Different calibrations may pick different strategies, but the
        // answers must not move.
        let (filter, elements) = build_filter(300, 3);
        let refs: Vec<&[u8]> = elements.iter().map(|e| e.as_slice()).collect();

        let default_service = MatchService::new(MatcherConfig::default()).unwrap();
        let skewed_service = MatchService::new(
            MatcherConfigBuilder::new()
                .insert_weight(100_000.0)
                .build()
                .unwrap(),
        )
        .unwrap();

        let a = default_service.matching_items(&filter, &refs).unwrap();
        let b = skewed_service.matching_items(&filter, &refs).unwrap();
        assert_eq!(a, b);
    }
}
