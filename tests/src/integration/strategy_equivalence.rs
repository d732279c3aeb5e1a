//! # Strategy Equivalence Tests
//!
//! The selector is only allowed to change which matcher runs, never what it
//! answers. These tests drive both matchers over the same real encoded
//! filters - not synthetic value lists - across randomized element and
//! query sets, and check the answers agree item by item.

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use gcs_filters::{
        hash_match_all, hash_match_any, zip_match_all, zip_match_any, DecodeError, FilterError,
        FilterParams, GcsFilter, GolombEntries,
    };

    const KEY: [u8; 16] = [0x5A; 16];

    fn random_elements(rng: &mut StdRng, count: usize) -> Vec<Vec<u8>> {
        (0..count)
            .map(|_| {
                let len = rng.gen_range(4..40);
                (0..len).map(|_| rng.gen::<u8>()).collect()
            })
            .collect()
    }

    fn build(elements: &[Vec<u8>]) -> GcsFilter {
        let refs: Vec<&[u8]> = elements.iter().map(|e| e.as_slice()).collect();
        GcsFilter::build(KEY, FilterParams::default(), &refs).unwrap()
    }

    #[test]
    fn test_matchers_agree_on_random_batches() {
        let mut rng = StdRng::seed_from_u64(2024);

        for (n, q) in [(1usize, 1usize), (10, 50), (100, 10), (500, 500)] {
            let elements = random_elements(&mut rng, n);
            let filter = build(&elements);

            // Half the queries are members, half are fresh random items.
            let mut queries: Vec<Vec<u8>> = Vec::with_capacity(q);
            for i in 0..q {
                if i % 2 == 0 && !elements.is_empty() {
                    queries.push(elements[i % elements.len()].clone());
                } else {
                    queries.push(random_elements(&mut rng, 1).remove(0));
                }
            }

            let reduced: Vec<u64> = queries.iter().map(|item| filter.reduce_item(item)).collect();

            for item_value in &reduced {
                let zip =
                    zip_match_any(GolombEntries::for_filter(&filter), vec![*item_value]).unwrap();
                let hash =
                    hash_match_any(GolombEntries::for_filter(&filter), &[*item_value]).unwrap();
                assert_eq!(zip, hash, "n={n} q={q} value={item_value}");
            }

            let zip_batch =
                zip_match_any(GolombEntries::for_filter(&filter), reduced.clone()).unwrap();
            let hash_batch =
                hash_match_any(GolombEntries::for_filter(&filter), &reduced).unwrap();
            assert_eq!(zip_batch, hash_batch, "n={n} q={q} batch");

            let zip_all =
                zip_match_all(GolombEntries::for_filter(&filter), reduced.clone()).unwrap();
            let hash_all = hash_match_all(GolombEntries::for_filter(&filter), &reduced).unwrap();
            assert_eq!(zip_all, hash_all, "n={n} q={q} enumeration");
        }
    }

    #[test]
    fn test_matchers_agree_on_empty_intersection() {
        let mut rng = StdRng::seed_from_u64(7);
        let filter = build(&random_elements(&mut rng, 100));

        // Values the filter cannot contain.
        let outside: Vec<u64> = (0..50).map(|i| filter.domain_bound() + i).collect();

        let zip = zip_match_any(GolombEntries::for_filter(&filter), outside.clone()).unwrap();
        let hash = hash_match_any(GolombEntries::for_filter(&filter), &outside).unwrap();
        assert!(!zip);
        assert_eq!(zip, hash);
    }

    #[test]
    fn test_matchers_agree_on_full_intersection() {
        let mut rng = StdRng::seed_from_u64(11);
        let elements = random_elements(&mut rng, 200);
        let filter = build(&elements);

        let members: Vec<u64> = elements.iter().map(|e| filter.reduce_item(e)).collect();

        assert!(zip_match_any(GolombEntries::for_filter(&filter), members.clone()).unwrap());
        assert!(hash_match_any(GolombEntries::for_filter(&filter), &members).unwrap());

        // Every member value enumerates under both strategies.
        let mut expected = members.clone();
        expected.sort_unstable();
        expected.dedup();
        let zip_all = zip_match_all(GolombEntries::for_filter(&filter), members.clone()).unwrap();
        let hash_all = hash_match_all(GolombEntries::for_filter(&filter), &members).unwrap();
        assert_eq!(zip_all, expected);
        assert_eq!(hash_all, expected);
    }

    #[test]
    fn test_truncated_stream_errors_from_both_matchers() {
        let mut rng = StdRng::seed_from_u64(23);
        let filter = build(&random_elements(&mut rng, 64));

        let data = filter.data();
        let cut = &data[..data.len() / 3];
        let p = filter.params().p;

        // A query beyond every decodable entry drives the merge walk into
        // the damaged region.
        let past_everything = vec![u64::MAX];
        let zip = zip_match_any(
            GolombEntries::new(cut, filter.len(), p),
            past_everything.clone(),
        );
        assert!(matches!(
            zip,
            Err(FilterError::Decode(DecodeError::Truncated { .. }))
        ));

        // The hash matcher materializes everything and needs no such help.
        let hash = hash_match_any(GolombEntries::new(cut, filter.len(), p), &past_everything);
        assert!(matches!(
            hash,
            Err(FilterError::Decode(DecodeError::Truncated { .. }))
        ));
    }
}
