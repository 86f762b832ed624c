use folio_core::{ContentError, PortfolioContent, RecordValidationError};
use std::io::Write;

const MINIMAL: &str = r#"{
  "personal": { "name": "Ada", "title": "Engineer", "subtitle": "", "institution": "", "location": "London" },
  "education": { "degree": "BSc", "institution": "Somewhere", "location": "London", "start_date": "2010" },
  "contact": { "email": "ada@example.com", "location": "London", "github": "", "linkedin": "" },
  "projects": [
    { "id": "p1", "title": "Engine", "description": "Analytical engine", "image": "", "technologies": ["Brass"] }
  ],
  "skills": [ { "name": "Math", "category": "other", "proficiency": 99 } ],
  "socials": [ { "name": "Site", "url": "https://example.com", "icon": "website" } ]
}"#;

fn write_temp(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn loads_minimal_content_from_file() {
    let file = write_temp(MINIMAL);
    let content = PortfolioContent::from_path(file.path()).unwrap();

    assert_eq!(content.personal.name, "Ada");
    assert!(content.experience.is_empty());
    assert!(content.about.is_empty());
    assert!(!content.projects[0].featured);
    assert_eq!(content.projects[0].source_url, None);
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PortfolioContent::from_path(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ContentError::Io { .. }));
}

#[test]
fn malformed_json_reports_parse_error() {
    let err = PortfolioContent::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ContentError::Parse(_)));
}

#[test]
fn unknown_category_is_a_parse_error() {
    let text = MINIMAL.replace("\"other\"", "\"cooking\"");
    let err = PortfolioContent::from_json_str(&text).unwrap_err();
    assert!(matches!(err, ContentError::Parse(_)));
}

#[test]
fn duplicate_project_ids_are_rejected() {
    let text = MINIMAL.replace(
        r#"{ "id": "p1", "title": "Engine", "description": "Analytical engine", "image": "", "technologies": ["Brass"] }"#,
        r#"{ "id": "p1", "title": "A", "description": "", "image": "" },
    { "id": "p1", "title": "B", "description": "", "image": "" }"#,
    );
    let err = PortfolioContent::from_json_str(&text).unwrap_err();
    assert!(matches!(err, ContentError::DuplicateKey { list: "project", .. }));
    assert_eq!(err.to_string(), "duplicate key `p1` in project list");
}

#[test]
fn proficiency_over_hundred_is_rejected() {
    let text = MINIMAL.replace("\"proficiency\": 99", "\"proficiency\": 150");
    let err = PortfolioContent::from_json_str(&text).unwrap_err();
    assert!(matches!(
        err,
        ContentError::InvalidRecord(RecordValidationError::ProficiencyOutOfRange {
            proficiency: 150,
            ..
        })
    ));
}

#[test]
fn builtin_content_round_trips_through_json() {
    let builtin = PortfolioContent::builtin();
    let text = serde_json::to_string(builtin).unwrap();
    let decoded = PortfolioContent::from_json_str(&text).unwrap();
    assert_eq!(&decoded, builtin);
}

#[test]
fn proficiency_past_byte_range_is_the_same_record_error() {
    let text = MINIMAL.replace("\"proficiency\": 99", "\"proficiency\": 300");
    let err = PortfolioContent::from_json_str(&text).unwrap_err();
    assert!(matches!(
        err,
        ContentError::InvalidRecord(RecordValidationError::ProficiencyOutOfRange {
            proficiency: 300,
            ..
        })
    ));
}

#[test]
fn negative_proficiency_is_a_parse_error() {
    let text = MINIMAL.replace("\"proficiency\": 99", "\"proficiency\": -1");
    let err = PortfolioContent::from_json_str(&text).unwrap_err();
    assert!(matches!(err, ContentError::Parse(_)));
}
