use super::*;

// =============================================================
// Tag labels
// =============================================================

#[test]
fn tag_label_maps_known_job_types() {
    assert_eq!(tag_label("full_time"), "Full Time");
    assert_eq!(tag_label("part_time"), "Part Time");
    assert_eq!(tag_label("contract"), "Contract");
    assert_eq!(tag_label("internship"), "Internship");
    assert_eq!(tag_label("remote"), "Remote");
}

#[test]
fn tag_label_maps_known_experience_levels() {
    assert_eq!(tag_label("entry"), "Entry Level");
    assert_eq!(tag_label("mid"), "Mid Level");
    assert_eq!(tag_label("senior"), "Senior Level");
    assert_eq!(tag_label("executive"), "Executive");
}

#[test]
fn tag_label_passes_unknown_tags_through() {
    assert_eq!(tag_label("apprenticeship"), "apprenticeship");
}

// =============================================================
// Salary label
// =============================================================

#[test]
fn salary_label_formats_full_range() {
    assert_eq!(
        salary_label(Some("90000.00"), Some("120000.00")),
        Some("$90000.00 - $120000.00".to_owned())
    );
}

#[test]
fn salary_label_formats_open_ended_bounds() {
    assert_eq!(salary_label(Some("90000.00"), None), Some("From $90000.00".to_owned()));
    assert_eq!(salary_label(None, Some("120000.00")), Some("Up to $120000.00".to_owned()));
}

#[test]
fn salary_label_absent_when_no_bounds_published() {
    assert_eq!(salary_label(None, None), None);
}
