use super::*;

#[test]
fn results_label_singular_for_one_match() {
    assert_eq!(results_label(1), "Found 1 job");
}

#[test]
fn results_label_plural_otherwise() {
    assert_eq!(results_label(0), "Found 0 jobs");
    assert_eq!(results_label(12), "Found 12 jobs");
}
