use std::collections::BTreeSet;

use proptest::prelude::*;

use prizeline::dataset::{self, BundledSource, Category, Dataset, Recipient, Record};
use prizeline::search::{filter, filter_indices, highlight};
use prizeline::stats::aggregate;

fn bundled() -> Dataset {
    tokio_test::block_on(dataset::load(&BundledSource)).expect("bundled dataset decodes")
}

fn all() -> BTreeSet<Category> {
    Category::ALL.into_iter().collect()
}

fn only(categories: &[Category]) -> BTreeSet<Category> {
    categories.iter().copied().collect()
}

#[test]
fn physics_and_einstein_narrow_to_one_record() {
    let data = bundled();

    let physics = filter(&data, &only(&[Category::Physics]), "");
    assert_eq!(physics.len(), 6);

    let result = filter(&data, &only(&[Category::Physics]), "einstein");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].period, "1921");

    let shares = aggregate(result.iter().copied());
    assert_eq!(shares[Category::Physics.index()].count, 1);
    assert_eq!(shares[Category::Physics.index()].percentage, 100.0);
    for share in shares.iter().filter(|s| s.category != Category::Physics) {
        assert_eq!(share.count, 0);
        assert_eq!(share.percentage, 0.0);
    }

    let name = result[0].recipients()[0].full_name();
    let segments = highlight(&name, "einstein");
    assert_eq!(segments.len(), 2);
    assert_eq!((segments[0].text, segments[0].matched), ("Albert ", false));
    assert_eq!((segments[1].text, segments[1].matched), ("Einstein", true));
}

#[test]
fn query_matches_names_and_motivations() {
    let data = bundled();

    let curie: Vec<&str> = filter(&data, &all(), "curie")
        .iter()
        .map(|r| r.period.as_str())
        .collect();
    assert_eq!(curie, vec!["1911", "1903"]);

    // Motivation-only match.
    let radio = filter(&data, &all(), "radio");
    assert_eq!(radio.len(), 1);
    assert_eq!(radio[0].period, "1903");

    // Shared motivation on a record whose recipients do not mention it.
    let laser = filter(&data, &all(), "LASER");
    assert_eq!(laser.len(), 1);
    assert_eq!(laser[0].period, "2018");

    // Organization without a last name.
    let red_cross = filter(&data, &all(), "  red cross  ");
    assert_eq!(red_cross.len(), 1);
    assert_eq!(red_cross[0].period, "1917");
}

#[test]
fn same_person_in_two_categories() {
    let data = bundled();
    let pauling = filter(&data, &all(), "pauling");
    let categories: Vec<&str> = pauling.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(categories, vec!["peace", "chemistry"]);

    let peace_only = filter(&data, &only(&[Category::Peace]), "pauling");
    assert_eq!(peace_only.len(), 1);
}

#[test]
fn empty_selection_yields_nothing() {
    let data = bundled();
    assert!(filter(&data, &BTreeSet::new(), "").is_empty());
    assert!(filter_indices(&data, &BTreeSet::new(), "curie").is_empty());

    let shares = aggregate(filter(&data, &BTreeSet::new(), ""));
    assert_eq!(shares.len(), 6);
    assert!(shares.iter().all(|s| s.count == 0 && s.percentage == 0.0));
}

#[test]
fn metacharacters_are_literal() {
    let data = bundled();
    let dotted = filter(&data, &all(), ".");
    assert_eq!(dotted.len(), 7);
    assert!(filter(&data, &all(), "(").is_empty());
    assert!(filter(&data, &all(), ".*").is_empty());

    let segments = highlight("3.14 is pi", ".");
    let matched: Vec<&str> = segments.iter().filter(|s| s.matched).map(|s| s.text).collect();
    assert_eq!(matched, vec!["."]);
}

#[test]
fn full_distribution_of_bundled_data() {
    let data = bundled();
    let shares = aggregate(&data);
    let counts: Vec<usize> = shares.iter().map(|s| s.count).collect();
    assert_eq!(counts, vec![6, 4, 4, 4, 11, 3]);

    let total: f64 = shares.iter().map(|s| s.percentage).sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert!((shares[Category::Peace.index()].percentage - 34.375).abs() < 1e-9);
}

const CATEGORY_VALUES: [&str; 7] = [
    "physics",
    "chemistry",
    "medicine",
    "literature",
    "peace",
    "economics",
    "astronomy",
];

fn recipient_strategy() -> impl Strategy<Value = Recipient> {
    (
        "[A-Za-z]{1,8}",
        proptest::option::of("[A-Za-z]{1,8}"),
        "[a-z ]{0,16}",
        1u8..4,
    )
        .prop_map(|(first, last, motivation, share)| Recipient {
            id: first.clone(),
            first_name: first,
            last_name: last,
            motivation,
            share_fraction: share.to_string(),
        })
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        1901u16..2024,
        0usize..CATEGORY_VALUES.len(),
        proptest::option::of("[a-z ]{0,16}"),
        proptest::option::of(proptest::collection::vec(recipient_strategy(), 0..3)),
    )
        .prop_map(|(year, category, shared, recipients)| Record {
            period: year.to_string(),
            category: CATEGORY_VALUES[category].to_string(),
            shared_motivation: shared,
            recipients,
        })
}

fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    proptest::collection::vec(record_strategy(), 0..40).prop_map(Dataset::from_records)
}

fn selection_strategy() -> impl Strategy<Value = BTreeSet<Category>> {
    proptest::collection::btree_set(
        proptest::sample::select(Category::ALL.to_vec()),
        0..=Category::ALL.len(),
    )
}

proptest! {
    #[test]
    fn filter_keeps_dataset_order(
        data in dataset_strategy(),
        selected in selection_strategy(),
        query in "[a-zA-Z .]{0,4}",
    ) {
        let indices = filter_indices(&data, &selected, &query);
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));

        let records = filter(&data, &selected, &query);
        prop_assert_eq!(records.len(), indices.len());
        for (record, index) in records.iter().zip(&indices) {
            prop_assert_eq!(*record, &data.records()[*index]);
            let category = record.known_category();
            prop_assert!(category.is_some_and(|c| selected.contains(&c)));
        }
    }

    #[test]
    fn filter_is_idempotent(
        data in dataset_strategy(),
        selected in selection_strategy(),
        query in "[a-z ]{0,3}",
    ) {
        let once: Vec<Record> = filter(&data, &selected, &query).into_iter().cloned().collect();
        let narrowed = Dataset::from_records(once.clone());
        let twice: Vec<Record> = filter(&narrowed, &selected, &query).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn repeated_calls_agree_and_leave_dataset_untouched(
        data in dataset_strategy(),
        selected in selection_strategy(),
        query in "[a-zA-Z .]{0,4}",
    ) {
        let before = data.clone();

        let first = filter(&data, &selected, &query);
        let second = filter(&data, &selected, &query);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(aggregate(first.iter().copied()), aggregate(second.iter().copied()));
        prop_assert_eq!(aggregate(&data), aggregate(&data));
        prop_assert_eq!(
            filter_indices(&data, &selected, &query),
            filter_indices(&data, &selected, &query)
        );

        prop_assert_eq!(&data, &before);
    }

    #[test]
    fn aggregate_counts_known_categories(data in dataset_strategy()) {
        let shares = aggregate(&data);
        prop_assert_eq!(shares.len(), 6);

        let known = data.iter().filter(|r| r.known_category().is_some()).count();
        let counted: usize = shares.iter().map(|s| s.count).sum();
        prop_assert_eq!(counted, known);

        let total: f64 = shares.iter().map(|s| s.percentage).sum();
        prop_assert!(total <= 100.0 + 1e-9);
        if !data.is_empty() && known == data.len() {
            prop_assert!((total - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn highlight_reassembles_text(
        text in "[a-zA-Z .()*+?]{0,24}",
        query in "[a-zA-Z .()*+?]{0,4}",
    ) {
        let segments = highlight(&text, &query);
        prop_assert!(!segments.is_empty());

        let joined: String = segments.iter().map(|s| s.text).collect();
        prop_assert_eq!(joined, text.clone());

        if query.trim().is_empty() {
            prop_assert_eq!(segments.len(), 1);
            prop_assert!(!segments[0].matched);
        }
        for segment in segments.iter().filter(|s| s.matched) {
            prop_assert_eq!(segment.text.to_lowercase(), query.to_lowercase());
        }
    }
}
