use clap::Parser;
use std::path::PathBuf;
use subtext::cli::{Cli, Commands};
use subtext::domain::models::{FindingFilter, FindingType};

#[test]
fn test_parse_analyze_with_inline_text() {
    let cli = Cli::try_parse_from(vec![
        "subtext",
        "analyze",
        "--story",
        "As a user I want to log in",
        "--criteria",
        "Login succeeds",
    ])
    .unwrap();

    match cli.command {
        Commands::Analyze(args) => {
            assert_eq!(args.story.as_deref(), Some("As a user I want to log in"));
            assert_eq!(args.criteria.as_deref(), Some("Login succeeds"));
            assert!(args.documents.is_empty());
            assert_eq!(args.filter, FindingFilter::All);
            assert!(!args.report);
            assert!(!args.checklist);
            assert_eq!(args.out_dir, PathBuf::from("."));
        }
        Commands::Health => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_analyze_with_documents_and_exports() {
    let cli = Cli::try_parse_from(vec![
        "subtext",
        "analyze",
        "-d",
        "prd.pdf",
        "--document",
        "notes.md",
        "--filter",
        "edge",
        "--report",
        "--checklist",
        "--out-dir",
        "out",
    ])
    .unwrap();

    match cli.command {
        Commands::Analyze(args) => {
            assert_eq!(
                args.documents,
                vec![PathBuf::from("prd.pdf"), PathBuf::from("notes.md")]
            );
            assert_eq!(args.filter, FindingFilter::Type(FindingType::Edge));
            assert!(args.report);
            assert!(args.checklist);
            assert_eq!(args.out_dir, PathBuf::from("out"));
        }
        Commands::Health => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_unknown_filter_is_kept() {
    let cli = Cli::try_parse_from(vec!["subtext", "analyze", "--filter", "severe"]).unwrap();

    match cli.command {
        Commands::Analyze(args) => {
            assert_eq!(args.filter, FindingFilter::Unrecognized("severe".to_string()));
        }
        Commands::Health => panic!("Wrong command"),
    }
}

#[test]
fn test_story_and_story_file_conflict() {
    let result = Cli::try_parse_from(vec![
        "subtext",
        "analyze",
        "--story",
        "inline",
        "--story-file",
        "story.txt",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_criteria_and_criteria_file_conflict() {
    let result = Cli::try_parse_from(vec![
        "subtext",
        "analyze",
        "--criteria",
        "inline",
        "--criteria-file",
        "criteria.txt",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_parse_health_with_global_flags() {
    let cli = Cli::try_parse_from(vec![
        "subtext",
        "health",
        "--json",
        "--base-url",
        "http://analysis.internal:9000",
        "--config",
        "custom.yaml",
    ])
    .unwrap();

    assert!(matches!(cli.command, Commands::Health));
    assert!(cli.json);
    assert_eq!(cli.base_url.as_deref(), Some("http://analysis.internal:9000"));
    assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
}

#[test]
fn test_missing_subcommand_fails() {
    assert!(Cli::try_parse_from(vec!["subtext"]).is_err());
}
