//! Recommend command - pick the platform for "play all"

use anyhow::{Context, Result};
use fanstage_config::Config;
use fanstage_core::{Letter, load_history, load_letter};
use fanstage_recommend::{DecisionSource, Recommendation, explain_smart};

use crate::cli::{OutputFormat, RecommendArgs};

pub fn handle(args: RecommendArgs, config: &Config) -> Result<()> {
    let letter = load_letter(&args.letter)
        .with_context(|| format!("Failed to load letter from {}", args.letter.display()))?;
    let history = match &args.history {
        Some(path) => load_history(path)
            .with_context(|| format!("Failed to load history from {}", path.display()))?,
        None => Vec::new(),
    };

    let fallback = if args.no_fallback {
        None
    } else {
        args.fallback
            .or_else(|| config.recommend.fallback_platform.clone())
    };

    let recommendation = explain_smart(&letter, &history, fallback);

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&recommendation)?);
        }
        OutputFormat::Text => {
            for line in describe(&letter, &recommendation) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn describe_source(source: DecisionSource) -> &'static str {
    match source {
        DecisionSource::UnanimousTracks => "every track is on this platform",
        DecisionSource::History => "your most used platform",
        DecisionSource::CallerFallback => "no listening history; configured fallback",
        DecisionSource::Baseline => "no other signal; default platform",
    }
}

fn describe(letter: &Letter, recommendation: &Recommendation) -> Vec<String> {
    let mut lines = vec![
        format!("Play \"{}\" on: {}", letter.id, recommendation.platform),
        format!("  Reason: {}", describe_source(recommendation.source)),
    ];

    lines.push(match &recommendation.track_opinion {
        Some(platform) if recommendation.unanimous => {
            format!("  Tracks: all {} on {}", letter.tracks().len(), platform)
        }
        Some(platform) => format!("  Tracks: mostly {} (mixed)", platform),
        None => "  Tracks: no track detail".to_string(),
    });
    lines.push(match &recommendation.history_opinion {
        Some(platform) => format!("  History: mostly {}", platform),
        None => "  History: none".to_string(),
    });

    if !recommendation.platform.is_known() {
        lines.push(format!(
            "  Warning: {} is not a supported player",
            recommendation.platform
        ));
    }
    lines
}
