use anyhow::Result;
use ecchecker::{CheckError, CheckSettings, Checker, FieldPair, LocalStorage, Verdict};
use tempfile::TempDir;

fn write_pair(work: &str, reference: &str) -> Result<TempDir> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("out.txt"), work)?;
    std::fs::write(dir.path().join("correct.txt"), reference)?;
    Ok(dir)
}

#[test]
fn test_end_to_end_with_local_storage() -> Result<()> {
    let dir = write_pair("1 2 3 4 5 6 7 8\n", "9 9 3 9 9 9 9 8\n")?;

    let checker = Checker::new(LocalStorage::new(dir.path()), CheckSettings::new("out.txt"));
    assert_eq!(checker.run()?, Verdict::Same { compared: 1 });
    Ok(())
}

#[test]
fn test_mismatch_details() -> Result<()> {
    let dir = write_pair(
        "a b 1 d e f g 1\na b 2 d e f g 2\n",
        "a b 1 d e f g 1\na b 2 d e f g 3\n",
    )?;

    let checker = Checker::new(LocalStorage::new(dir.path()), CheckSettings::new("out.txt"));
    match checker.run()? {
        Verdict::Different(m) => {
            assert_eq!(m.index, 2);
            assert_eq!((m.work.first.as_str(), m.work.second.as_str()), ("2", "2"));
            assert_eq!(m.reference.second, "3");
            assert_eq!(m.reference.line, 2);
        }
        other => panic!("expected a mismatch, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_custom_reference_and_fields() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("mine.txt"), "k1 v1\nk2 v2\n")?;
    std::fs::write(dir.path().join("answers.txt"), "k1 v1\nk2 v2\nk3 v3\n")?;

    let settings = CheckSettings::new("mine.txt")
        .with_reference("answers.txt")
        .with_fields(FieldPair::new(1, 2));
    let checker = Checker::new(LocalStorage::new(dir.path()), settings);

    assert_eq!(checker.run()?, Verdict::Same { compared: 2 });
    Ok(())
}

#[test]
fn test_malformed_reference_line() -> Result<()> {
    let dir = write_pair("1 2 3 4 5 6 7 8\n", "1 2 3 4 5 6 7 8\n1 2 3\n")?;

    let checker = Checker::new(LocalStorage::new(dir.path()), CheckSettings::new("out.txt"));
    let err = checker.run().unwrap_err();
    assert!(matches!(
        err,
        CheckError::MalformedLine { line: 2, found: 3, required: 8, .. }
    ));
    Ok(())
}
