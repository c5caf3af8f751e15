use std::fs;
use std::path::PathBuf;

use codegallery::config::GalleryConfig;
use codegallery::tooling::cli::{CliContext, Commands, PayloadArgs};
use tempfile::TempDir;

fn cli() -> CliContext {
    let mut config = GalleryConfig::default();
    config.viewer.color = false;
    CliContext::with_config(config)
}

fn source(dir: &TempDir, hash: Option<&str>) -> PayloadArgs {
    let payload = dir.path().join("gallery.json");
    fs::write(
        &payload,
        r#"{"files":[
            {"path":"README.md","content":"hi"},
            {"path":"src/main.go","content":"package main"},
            {"path":"src/lib/util.rs","content":"pub fn util() {}"}
        ]}"#,
    )
    .unwrap();
    PayloadArgs {
        payload,
        hash: hash.map(str::to_string),
    }
}

#[test]
fn status_json_contract_has_required_fields() {
    let dir = TempDir::new().unwrap();
    let output = cli()
        .execute(&Commands::Status {
            source: source(&dir, Some("#file=src%2Flib%2Futil.rs")),
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.get("files").and_then(|v| v.as_u64()), Some(3));
    assert_eq!(parsed.get("directories").and_then(|v| v.as_u64()), Some(2));
    assert_eq!(parsed.get("records").and_then(|v| v.as_u64()), Some(3));
    assert_eq!(
        parsed.get("selected").and_then(|v| v.as_str()),
        Some("src/lib/util.rs")
    );
    assert_eq!(
        parsed.get("location").and_then(|v| v.as_str()),
        Some("#file=src%2Flib%2Futil.rs")
    );
    assert!(parsed.get("collisions").and_then(|v| v.as_array()).is_some());
    assert!(parsed.get("duplicates").and_then(|v| v.as_array()).is_some());
}

#[test]
fn tree_json_contract_orders_directories_first() {
    let dir = TempDir::new().unwrap();
    let output = cli()
        .execute(&Commands::Tree {
            source: source(&dir, None),
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let nodes = parsed
        .get("nodes")
        .and_then(|v| v.as_array())
        .expect("nodes array should exist");
    assert_eq!(nodes[0]["full_path"], "src");
    assert_eq!(nodes[0]["kind"], "directory");
    assert_eq!(nodes[1]["full_path"], "README.md");
    assert_eq!(nodes[1]["active"], true);

    let src_children = nodes[0]["children"].as_array().unwrap();
    assert_eq!(src_children[0]["full_path"], "src/lib");
    assert_eq!(src_children[1]["full_path"], "src/main.go");
    assert_eq!(parsed["sidebar_collapsed"], false);
}

#[test]
fn collect_then_show_round_trip() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("project");
    fs::create_dir_all(project.join("docs")).unwrap();
    fs::write(project.join("docs").join("guide.md"), "# Guide").unwrap();
    fs::write(project.join("README.md"), "hello").unwrap();
    fs::write(project.join(".hidden"), "secret").unwrap();

    let payload_path = dir.path().join("out").join("payload.json");
    let message = cli()
        .execute(&Commands::Collect {
            dir: project,
            output: Some(payload_path.clone()),
        })
        .unwrap();
    assert!(message.starts_with("Collected 2 files"));

    let output = cli()
        .execute(&Commands::Show {
            source: PayloadArgs {
                payload: payload_path,
                hash: Some("#file=docs%2Fguide.md".to_string()),
            },
        })
        .unwrap();
    assert_eq!(output, "guide.md (Markdown)\n\n# Guide\n");
}

#[test]
fn browse_script_replays_commands() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("session.txt");
    fs::write(&script, "j\nj\nj\nopen src\nsidebar\nquit\n").unwrap();

    let output = cli()
        .execute(&Commands::Browse {
            source: source(&dir, Some("#file=src%2Flib%2Futil.rs")),
            script: Some(script),
        })
        .unwrap();

    assert_eq!(
        output,
        "> j\nSelected src/main.go\n> j\nSelected README.md\n> j\nNo change\n> open src\nCollapsed src\n> sidebar\nSidebar hidden\n"
    );
}

#[test]
fn html_page_embeds_escaped_payload() {
    let dir = TempDir::new().unwrap();
    let payload = dir.path().join("gallery.json");
    fs::write(
        &payload,
        r#"{"files":[{"path":"index.html","content":"<script>alert(1)</script>"}]}"#,
    )
    .unwrap();

    let page = cli()
        .execute(&Commands::Html {
            source: PayloadArgs {
                payload,
                hash: None,
            },
            output: None,
        })
        .unwrap();
    assert!(page.contains("id=\"code-viewer\""));
    assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!page.contains("<script>alert(1)</script>"));
    assert!(page.contains("\\u003c/script\\u003e"));
}

#[test]
fn config_command_prints_toml() {
    let output = cli().execute(&Commands::Config).unwrap();
    assert!(output.contains("[viewer]"));
    assert!(output.contains("default_file = \"readme.md\""));
}

#[test]
fn missing_payload_fails() {
    let result = cli().execute(&Commands::Show {
        source: PayloadArgs {
            payload: PathBuf::from("/nonexistent/gallery.json"),
            hash: None,
        },
    });
    assert!(result.is_err());
}
