//! Output formatting utilities

use crate::domain::{ContentRecord, Curation};

/// Shown in place of an empty feed section or an empty list
pub const EMPTY_FALLBACK: &str = "No content yet";

fn format_date(record: &ContentRecord, date_format: &str) -> String {
    match record.published_at {
        Some(dt) => dt.format(date_format).to_string(),
        None => "undated".to_string(),
    }
}

fn format_line(record: &ContentRecord, date_format: &str) -> String {
    let mut line = format!("{:>11}  {}", format_date(record, date_format), record.title);
    if !record.author.is_empty() {
        line.push_str(&format!("  ({})", record.author));
    }
    line
}

/// Format the curated front page: a Featured section and a Latest section.
/// Empty sections render a fallback line rather than disappearing.
pub fn format_feed(curation: &Curation, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str("Featured\n");
    if curation.featured.is_empty() {
        output.push_str(&format!("  {}\n", EMPTY_FALLBACK));
    } else {
        for record in &curation.featured {
            output.push_str(&format!("  {}\n", format_line(record, date_format)));
        }
    }

    output.push_str("\nLatest\n");
    if curation.latest.is_empty() {
        output.push_str(&format!("  {}\n", EMPTY_FALLBACK));
    } else {
        for record in &curation.latest {
            output.push_str(&format!("  {}\n", format_line(record, date_format)));
        }
    }

    output
}

/// Format a flat record list for display
pub fn format_record_list(records: &[ContentRecord], date_format: &str) -> String {
    if records.is_empty() {
        return EMPTY_FALLBACK.to_string();
    }

    let mut output = String::new();
    for record in records {
        output.push_str(&format!(
            "{}  [{}]\n",
            format_line(record, date_format),
            record.id
        ));
    }
    output
}

/// Format a list of tags for display.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("#{}\n", tag));
    }

    output
}

/// Format a single record in full
pub fn format_record(record: &ContentRecord, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", record.title));
    output.push_str(&format!("id: {}\n", record.id));
    if !record.author.is_empty() {
        output.push_str(&format!("author: {}\n", record.author));
    }
    output.push_str(&format!("published: {}\n", format_date(record, date_format)));
    if !record.tags.is_empty() {
        let tags: Vec<String> = record.tags.iter().map(|t| format!("#{}", t)).collect();
        output.push_str(&format!("tags: {}\n", tags.join(" ")));
    }
    if !record.description.is_empty() {
        output.push_str(&format!("\n{}\n", record.description));
    }
    if !record.body.is_empty() {
        output.push_str(&format!("\n{}\n", record.body));
    }

    output
}
