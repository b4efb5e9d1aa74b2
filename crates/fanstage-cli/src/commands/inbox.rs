//! Inbox command - filter, sort and page a letter collection

use anyhow::{Context, Result};
use fanstage_config::Config;
use fanstage_core::date::parse_filter_date;
use fanstage_core::{FilterCriteria, Letter, load_letters};
use fanstage_inbox::{paginate, process};
use time::macros::format_description;
use tracing::info;

use crate::cli::{InboxArgs, OutputFormat};

pub fn handle(args: InboxArgs, config: &Config) -> Result<()> {
    let letters = load_letters(&args.letters)
        .with_context(|| format!("Failed to load letters from {}", args.letters.display()))?;
    let criteria = criteria_from_args(&args)?;
    let sort = args.sort.unwrap_or(config.inbox.default_sort);
    let page_size = args.page_size.unwrap_or(config.inbox.page_size);

    let processed = process(&letters, &criteria, sort);
    let page = paginate(&processed, args.page, page_size);
    info!(
        total = letters.len(),
        matched = page.total_results,
        page = page.page,
        "inbox ready"
    );

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        OutputFormat::Text => {
            println!(
                "Inbox: {} of {} letters (sorted by {})",
                page.total_results,
                letters.len(),
                sort
            );
            if !criteria.is_empty() {
                println!("Filter: {}", describe_criteria(&criteria));
            }

            if page.items.is_empty() {
                println!("\nNo letters found.");
                return Ok(());
            }

            println!("Page {}/{}\n", page.page, page.total_pages);
            let offset = (page.page - 1) * page.page_size;
            for (i, letter) in page.items.iter().enumerate() {
                println!("{}. {}", offset + i + 1, summarize(letter));
                if !letter.message.is_empty() {
                    println!("   \"{}\"", first_line(&letter.message));
                }
            }
        }
    }

    Ok(())
}

fn criteria_from_args(args: &InboxArgs) -> Result<FilterCriteria> {
    Ok(FilterCriteria {
        name: args.name.clone(),
        track_title: args.track_title.clone(),
        date_from: args.from.as_deref().map(parse_filter_date).transpose()?,
        date_to: args.to.as_deref().map(parse_filter_date).transpose()?,
    })
}

fn describe_criteria(criteria: &FilterCriteria) -> String {
    let mut parts = Vec::new();
    if let Some(name) = criteria.name_query() {
        parts.push(format!("name~\"{name}\""));
    }
    if let Some(title) = criteria.track_title_query() {
        parts.push(format!("track~\"{title}\""));
    }
    if let Some(from) = criteria.date_from {
        parts.push(format!("from {from}"));
    }
    if let Some(to) = criteria.date_to {
        parts.push(format!("to {to}"));
    }
    parts.join(", ")
}

fn summarize(letter: &Letter) -> String {
    let from = letter.sender_name.as_deref().unwrap_or("?");
    let to = letter.recipient_name.as_deref().unwrap_or("?");
    let date = letter
        .timestamp()
        .and_then(|ts| ts.format(format_description!("[year]-[month]-[day]")).ok())
        .unwrap_or_else(|| "undated".to_string());

    format!(
        "[{}] {} -> {}  {}  tracks: {}  plays: {}",
        letter.id,
        from,
        to,
        date,
        letter.track_count(),
        letter.play_count()
    )
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use time::macros::date;

    fn args() -> InboxArgs {
        InboxArgs {
            letters: PathBuf::from("letters.json"),
            sort: None,
            name: None,
            track_title: None,
            from: None,
            to: None,
            page: 1,
            page_size: None,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn test_criteria_from_args() {
        let mut args = args();
        args.name = Some("kim".to_string());
        args.from = Some("2024-01-16".to_string());
        args.to = Some("2024.01.24".to_string());

        let criteria = criteria_from_args(&args).unwrap();
        assert_eq!(criteria.name_query(), Some("kim"));
        assert_eq!(criteria.date_from, Some(date!(2024 - 01 - 16)));
        assert_eq!(criteria.date_to, Some(date!(2024 - 01 - 24)));
        assert_eq!(
            describe_criteria(&criteria),
            "name~\"kim\", from 2024-01-16, to 2024-01-24"
        );
    }

    #[test]
    fn test_bad_filter_date_is_an_error() {
        let mut args = args();
        args.to = Some("next week".to_string());
        assert!(criteria_from_args(&args).is_err());
    }

    #[test]
    fn test_summarize() {
        let letter = Letter::new("l1")
            .with_sender("Kim")
            .with_created_at("2024-01-15T10:00:00Z")
            .with_track_count(3);
        assert_eq!(
            summarize(&letter),
            "[l1] Kim -> ?  2024-01-15  tracks: 3  plays: 0"
        );
        assert!(summarize(&Letter::new("l2")).contains("undated"));
    }
}
