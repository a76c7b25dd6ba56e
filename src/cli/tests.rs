//! Unit tests for CLI commands

use crate::cli::{run, Cli, Commands};
use crate::router::RouterError;
use clap::Parser;
use std::io::Write;
use tempfile::NamedTempFile;

const TABLE: &str = r#"
routes:
  - path: /users
    handlers:
      GET: list_users
  - path: /users/{id}
    handlers:
      GET: get_user
      DELETE: delete_user
"#;

fn table_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(TABLE.as_bytes()).unwrap();
    file
}

fn run_to_string(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    run(cli.command, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_resolve_command_parses() {
    let cli = Cli::try_parse_from(["trierouter", "resolve", "--table", "t.yaml", "/a/b"]).unwrap();
    match cli.command {
        Commands::Resolve {
            table,
            method,
            path,
        } => {
            assert_eq!(table.to_string_lossy(), "t.yaml");
            assert_eq!(method, "GET");
            assert_eq!(path, "/a/b");
        }
        _ => panic!("Expected Resolve command"),
    }
}

#[test]
fn test_log_level_is_global() {
    let cli = Cli::try_parse_from([
        "trierouter",
        "dump",
        "--table",
        "t.yaml",
        "--log-level",
        "debug",
    ])
    .unwrap();
    assert_eq!(cli.log_level, "debug");
}

#[test]
fn test_dump_command_output() {
    let file = table_file();
    let path = file.path().to_str().unwrap();
    let out = run_to_string(&["trierouter", "dump", "--table", path]).unwrap();
    assert_eq!(
        out,
        "Routing Tree:\n └──users\t[GET]\n    └──{id}\t[DELETE, GET]\n"
    );
}

#[test]
fn test_routes_command_output() {
    let file = table_file();
    let path = file.path().to_str().unwrap();
    let out = run_to_string(&["trierouter", "routes", "-t", path]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec!["GET     /users", "DELETE  /users/{id}", "GET     /users/{id}"]
    );
}

#[test]
fn test_resolve_command_output() {
    let file = table_file();
    let path = file.path().to_str().unwrap();
    let out = run_to_string(&["trierouter", "resolve", "-t", path, "-m", "delete", "/users/42"])
        .unwrap();
    assert_eq!(
        out,
        "handler=delete_user\npattern=/users/{id}\nparam id=42\n"
    );
}

#[test]
fn test_resolve_command_method_not_allowed() {
    let file = table_file();
    let path = file.path().to_str().unwrap();
    let err = run_to_string(&["trierouter", "resolve", "-t", path, "-m", "PUT", "/users"])
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RouterError>(),
        Some(RouterError::MethodNotAllowed { .. })
    ));
}

#[test]
fn test_missing_table_file() {
    let err = run_to_string(&["trierouter", "dump", "-t", "/definitely/not/here.yaml"])
        .unwrap_err();
    assert!(err.to_string().contains("failed to read route table"));
}
