use jtrace::config::TraceConfig;
use jtrace::render::{format_args, truncate};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn joined_len(items: &[String]) -> usize {
    items.iter().map(|s| s.chars().count()).sum()
}

fn config_with_max_length(max: Option<usize>) -> TraceConfig {
    TraceConfig::builder()
        .include_args(true)
        .args_max_length(max)
        .expect("valid max length")
        .build()
}

#[test]
fn arguments_within_budget_are_unchanged() {
    let args = strings(&["abcdefgh", "xy"]);
    assert_eq!(truncate(&args, 10), Some(args.clone()));
}

#[test]
fn long_argument_is_shortened_first() {
    let args = strings(&["abcdefgh", "xy"]);
    assert_eq!(truncate(&args, 6), Some(strings(&["a...", "xy"])));
}

#[test]
fn spare_budget_flows_to_the_long_argument() {
    let args = strings(&["a", "bbbbbbbbbb", "cc"]);
    assert_eq!(truncate(&args, 9), Some(strings(&["a", "bbb...", "cc"])));
}

#[test]
fn remainder_goes_to_the_first_long_arguments() {
    let args = strings(&["aaaaaaaaaa", "bbbbbbbbbb"]);
    assert_eq!(truncate(&args, 11), Some(strings(&["aaa...", "bb..."])));
}

#[test]
fn recursion_keeps_remainder_on_the_long_subset() {
    let args = strings(&["xxxxxxxxxx", "yyyyyyyyyy", "z"]);
    assert_eq!(
        truncate(&args, 10),
        Some(strings(&["xx...", "y...", "z"]))
    );
}

#[test]
fn zero_average_gives_up() {
    let args = strings(&["abcd", "efgh", "ijkl"]);
    assert_eq!(truncate(&args, 2), None);
}

#[test]
fn budget_smaller_than_ellipsis_gives_up() {
    let args = strings(&["abcdefgh", "xy"]);
    assert_eq!(truncate(&args, 4), None);
}

#[test]
fn truncation_never_splits_a_character() {
    let args = strings(&["ééééééé"]);
    assert_eq!(truncate(&args, 5), Some(strings(&["éé..."])));
}

#[test]
fn result_never_exceeds_the_budget() {
    let samples = [
        strings(&["abcdefgh", "xy"]),
        strings(&["a", "bbbbbbbbbb", "cc", "dddddd"]),
        strings(&["'hello world'", "42", "null", "App\\Model\\User"]),
        strings(&["", "x", "yyyyyyyyyyyyyyyyyyyyyyy"]),
    ];
    for args in &samples {
        for max in 0..40 {
            if let Some(result) = truncate(args, max) {
                assert_eq!(result.len(), args.len());
                assert!(
                    joined_len(&result) <= max,
                    "{args:?} truncated to {result:?} exceeds {max}"
                );
            }
        }
    }
}

#[test]
fn arguments_within_the_average_are_never_shortened() {
    let args = strings(&["ab", "cccccccccccccccc", "d", "eeeeeeeeeeee"]);
    for max in 4..30 {
        let avg = max / args.len();
        let Some(result) = truncate(&args, max) else {
            continue;
        };
        for (original, kept) in args.iter().zip(&result) {
            if original.chars().count() <= avg {
                assert_eq!(original, kept, "budget {max} shortened a short argument");
            }
        }
    }
}

#[test]
fn format_args_joins_without_limit() {
    let config = config_with_max_length(None);
    let args = strings(&["'a'", "1", "null"]);
    assert_eq!(format_args(&args, &config), "'a', 1, null");
}

#[test]
fn format_args_reserves_room_for_separators() {
    let config = config_with_max_length(Some(8));
    let args = strings(&["abcdefgh", "xy"]);
    assert_eq!(format_args(&args, &config), "a..., xy");
}

#[test]
fn format_args_is_empty_when_separators_use_the_budget() {
    let config = config_with_max_length(Some(3));
    let args = strings(&["a", "b", "c"]);
    assert_eq!(format_args(&args, &config), "");
}

#[test]
fn format_args_falls_back_to_a_single_ellipsis() {
    let config = config_with_max_length(Some(4));
    let args = strings(&["abcdefgh", "xy"]);
    assert_eq!(format_args(&args, &config), "...");
}
