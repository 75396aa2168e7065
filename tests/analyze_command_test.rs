/// End-to-end tests for `subtext analyze` against a mock analysis service
mod common;

use std::sync::Arc;

use mockito::Server;
use subtext::cli::commands::analyze::{self, collect_inputs, AnalyzeArgs};
use subtext::domain::models::{FindingFilter, SessionAction};
use subtext::infrastructure::analysis_api::AnalysisClientImpl;
use tempfile::TempDir;

fn args(out_dir: &TempDir) -> AnalyzeArgs {
    AnalyzeArgs {
        story: Some("As a shopper I want to reset my password".to_string()),
        story_file: None,
        criteria: None,
        criteria_file: None,
        documents: Vec::new(),
        filter: FindingFilter::All,
        report: true,
        checklist: true,
        out_dir: out_dir.path().to_path_buf(),
    }
}

#[tokio::test]
async fn test_analyze_writes_requested_exports() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/analyze")
        .with_status(200)
        .with_body(common::analysis_response_body())
        .create_async()
        .await;

    let out_dir = tempfile::tempdir().unwrap();
    let service = Arc::new(AnalysisClientImpl::new(server.url()).unwrap());

    analyze::execute(args(&out_dir), service, true).await.unwrap();
    mock.assert_async().await;

    let report = std::fs::read_to_string(out_dir.path().join("silent-requirements-report.md")).unwrap();
    assert!(report.contains("As a shopper I want to reset my password"));
    assert!(report.contains("- **Missing edge case** (MEDIUM) — network failure on submit"));

    let checklist = std::fs::read_to_string(out_dir.path().join("jira-checklist.txt")).unwrap();
    assert!(checklist.starts_with("h2. Silent Requirements Checklist"));
    assert!(checklist.contains("- [ ] Who can reset a password?"));
}

#[tokio::test]
async fn test_analyze_without_input_skips_service() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/analyze")
        .expect(0)
        .create_async()
        .await;

    let out_dir = tempfile::tempdir().unwrap();
    let mut no_input = args(&out_dir);
    no_input.story = Some("   ".to_string());
    let service = Arc::new(AnalysisClientImpl::new(server.url()).unwrap());

    analyze::execute(no_input, service, true).await.unwrap();

    mock.assert_async().await;
    assert!(!out_dir.path().join("silent-requirements-report.md").exists());
}

#[tokio::test]
async fn test_analyze_surfaces_service_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/analyze")
        .with_status(400)
        .with_body(r#"{"detail": "Unsupported file type"}"#)
        .create_async()
        .await;

    let out_dir = tempfile::tempdir().unwrap();
    let service = Arc::new(AnalysisClientImpl::new(server.url()).unwrap());

    let err = analyze::execute(args(&out_dir), service, true).await.unwrap_err();

    assert_eq!(err.to_string(), "Unsupported file type");
    assert!(!out_dir.path().join("jira-checklist.txt").exists());
}

#[tokio::test]
async fn test_collect_inputs_reads_files_and_documents() {
    let dir = tempfile::tempdir().unwrap();
    let story_path = dir.path().join("story.txt");
    let doc_path = dir.path().join("prd.pdf");
    std::fs::write(&story_path, "Story from file").unwrap();
    std::fs::write(&doc_path, [0x25, 0x50, 0x44, 0x46]).unwrap();

    let mut input = args(&dir);
    input.story = None;
    input.story_file = Some(story_path);
    input.documents = vec![doc_path];

    let actions = collect_inputs(&input).await.unwrap();

    assert_eq!(actions[0], SessionAction::SetUserStory("Story from file".to_string()));
    match actions.last().unwrap() {
        SessionAction::AddDocument(doc) => {
            assert_eq!(doc.name, "prd.pdf");
            assert_eq!(doc.content_type, "application/pdf");
            assert_eq!(doc.size(), 4);
        }
        other => panic!("Expected AddDocument, got {other:?}"),
    }
}

#[tokio::test]
async fn test_collect_inputs_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut input = args(&dir);
    input.story = None;
    input.story_file = Some(dir.path().join("missing.txt"));

    assert!(collect_inputs(&input).await.is_err());
}
