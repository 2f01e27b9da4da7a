use crate::core::{Mismatch, RecordSet, Verdict};

/// Compares the two sets pairwise over their common prefix.
///
/// Stops at the first pair whose fields differ. Lines beyond the shorter set
/// are never inspected.
pub fn compare(work: &RecordSet, reference: &RecordSet) -> Verdict {
    let mismatch = work
        .records
        .iter()
        .zip(reference.records.iter())
        .enumerate()
        .find(|(_, (mine, correct))| !mine.same_values(correct));

    if let Some((idx, (mine, correct))) = mismatch {
        return Verdict::Different(Mismatch {
            index: idx + 1,
            work: mine.clone(),
            reference: correct.clone(),
        });
    }

    let compared = work.len().min(reference.len());
    if work.len() != reference.len() {
        tracing::warn!(
            "Ignoring {} trailing line(s): {} has {} records, {} has {}",
            work.len().abs_diff(reference.len()),
            work.source,
            work.len(),
            reference.source,
            reference.len()
        );
    }

    Verdict::Same { compared }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parser::parse_records, FieldPair};

    fn set(source: &str, content: &str) -> RecordSet {
        parse_records(source, content, FieldPair::default()).unwrap()
    }

    #[test]
    fn test_identical_sets_are_same() {
        let content = "1 2 3 4 5 6 7 8\na b c d e f g h\n";
        let verdict = compare(&set("work", content), &set("ref", content));
        assert_eq!(verdict, Verdict::Same { compared: 2 });
    }

    #[test]
    fn test_only_selected_fields_matter() {
        let work = set("work", "1 2 3 4 5 6 7 8");
        let reference = set("ref", "9 9 3 9 9 9 9 8");
        assert!(compare(&work, &reference).is_same());
    }

    #[test]
    fn test_first_field_difference() {
        let work = set("work", "A B C D E F G H");
        let reference = set("ref", "A B X D E F G H");
        match compare(&work, &reference) {
            Verdict::Different(m) => {
                assert_eq!(m.index, 1);
                assert_eq!(m.work.first, "C");
                assert_eq!(m.reference.first, "X");
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_reports_first_mismatch_only() {
        let work = set("work", "a b 1 d e f g 1\na b 2 d e f g 2\na b 3 d e f g 3\n");
        let reference = set("ref", "a b 1 d e f g 1\na b 2 d e f g X\na b X d e f g 3\n");
        match compare(&work, &reference) {
            Verdict::Different(m) => {
                assert_eq!(m.index, 2);
                assert_eq!(m.work.line, 2);
                assert_eq!(m.reference.second, "X");
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_extra_lines_are_ignored() {
        let short = set("work", "a b 1 d e f g 1\n");
        let long = set("ref", "a b 1 d e f g 1\na b 2 d e f g 2\n");
        assert_eq!(compare(&short, &long), Verdict::Same { compared: 1 });
        assert_eq!(compare(&long, &short), Verdict::Same { compared: 1 });
    }

    #[test]
    fn test_empty_work_set_is_same() {
        let reference = set("ref", "a b 1 d e f g 1\n");
        assert_eq!(
            compare(&RecordSet::default(), &reference),
            Verdict::Same { compared: 0 }
        );
    }
}
