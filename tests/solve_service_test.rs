//! Tests for SolveService and the parent-array text format

use domset::application::services::SolveService;
use domset::application::ApplicationError;
use domset::config::Settings;
use domset::domain::DomainError;

fn service() -> SolveService {
    SolveService::new(&Settings::default())
}

#[test]
fn given_bracketed_text_when_solving_then_returns_minimum_set() {
    // Act
    let report = service().solve_text("[None,2,None,4,2,4]").unwrap();

    // Assert
    assert_eq!(report.set.len(), 3);
    assert_eq!(report.parents, vec![None, Some(2), None, Some(4), Some(2), Some(4)]);
}

#[test]
fn given_commented_multiline_text_when_solving_then_ignores_comments() {
    let text = "# hub with two young parents\nNone 0 0 0 0 0\n1 1 # below node 1\n3 3\n";

    let report = service().with_verify(true).solve_text(text).unwrap();

    assert_eq!(report.set.to_vec(), vec![0, 1, 3]);
}

#[test]
fn given_custom_root_marker_when_solving_then_accepts_it() {
    let settings = Settings {
        root_markers: vec!["_".into()],
        ..Settings::default()
    };

    let report = SolveService::new(&settings).solve_text("_ 0 1").unwrap();

    assert_eq!(report.set.to_vec(), vec![1]);
}

#[test]
fn given_unknown_token_when_solving_then_parse_error() {
    let err = service().solve_text("None 0 zero").unwrap_err();

    assert!(matches!(err, ApplicationError::Parse { position: 2, .. }));
}

#[test]
fn given_self_parent_when_solving_then_domain_error() {
    let err = service().solve_text("None 1").unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::SelfParent { node: 1 })
    ));
}

#[test]
fn given_empty_text_when_solving_then_empty_set() {
    let report = service().with_verify(true).solve_text("   \n").unwrap();

    assert!(report.set.is_empty());
    assert!(report.parents.is_empty());
}

#[test]
fn given_valid_text_when_checking_then_summarizes_forest() {
    let summary = service().check_text("None 2 None 4 2 4").unwrap();

    assert_eq!(summary.nodes, 6);
    assert_eq!(summary.roots, 2);
    assert_eq!(summary.leaves, 4);
    assert_eq!(summary.depth, 3);
}
