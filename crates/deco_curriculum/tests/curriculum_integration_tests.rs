//! Integration tests for curriculum loading.

use std::fs;

use tempfile::tempdir;

use deco_curriculum::{CurriculumError, CurriculumReader};

#[test]
fn test_load_curriculum_from_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("curriculum.tsv");

    fs::write(
        &path,
        "short a\tcat, mat, sat, ram\n\
         short i\tsit, pit, rim\n\
         short o\thop, pod, log\n",
    )
    .unwrap();

    let load = CurriculumReader::read_file(&path).unwrap();
    assert!(!load.has_skipped());
    assert_eq!(load.curriculum.len(), 3);

    let review = load.curriculum.review_words(3);
    assert_eq!(review.len(), 7);
    assert!(review.contains("cat"));
    assert!(review.contains("rim"));
    assert!(!review.contains("hop"));
}

#[test]
fn test_load_reports_skipped_rows_and_keeps_gaps() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("curriculum.tsv");

    fs::write(
        &path,
        "short a\tcat, mat\n\
         broken row without a tab\n\
         short o\thop, pod\n",
    )
    .unwrap();

    let load = CurriculumReader::read_file(&path).unwrap();
    assert_eq!(load.skipped, vec![2]);

    // Lesson 3 still sits at row position 3.
    assert!(load.curriculum.target_words(3).unwrap().contains("hop"));
    assert!(matches!(
        load.curriculum.target_words(2),
        Err(CurriculumError::UnknownLesson(2))
    ));
}

#[test]
fn test_missing_source_is_fatal() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("absent.tsv");

    let err = CurriculumReader::read_file(&path).unwrap_err();
    assert!(matches!(err, CurriculumError::SourceNotFound(_)));
}
