use assert_cmd::Command;

pub fn vitrine_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vitrine").unwrap();
    cmd.env_remove("VITRINE_ROOT");
    cmd
}

/// Write a record file named `<id>.json` with a timestamp `hours_ago`
/// hours in the past, so relative ordering is stable across test runs.
#[allow(dead_code)]
pub fn write_record(posts: &std::path::Path, id: &str, hours_ago: i64, tags: &[&str]) {
    let published = chrono::Utc::now() - chrono::Duration::hours(hours_ago);
    let tags: Vec<String> = tags.iter().map(|t| format!("\"{}\"", t)).collect();
    let contents = format!(
        r#"{{
  "id": "{id}",
  "title": "Title {id}",
  "author": "tester",
  "publishedAt": "{}",
  "tags": [{}]
}}"#,
        published.to_rfc3339(),
        tags.join(", ")
    );
    std::fs::write(posts.join(format!("{}.json", id)), contents).unwrap();
}
