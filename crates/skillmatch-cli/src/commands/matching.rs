use crate::MatchArgs;
use anyhow::{Context, Result};
use skillmatch_catalog::{CatalogLoader, extract_text};
use skillmatch_core::{Catalog, DEFAULT_MIN_PERCENT, RankingConfig};
use skillmatch_render::{MatchReport, OutputFormat, export_csv};
use skillmatch_score::SkillMatcher;
use std::io::Write;
use tracing::{info, warn};

pub fn run(args: &MatchArgs) -> Result<()> {
    let catalog = CatalogLoader::new(&args.catalog)
        .load()
        .with_context(|| format!("Failed to load catalog {}", args.catalog.display()))?;

    let raw_skills = collect_skills(args)?;
    let config = ranking_config(args, &catalog);
    let matcher = SkillMatcher::new(config);
    let ranking = matcher.run(&catalog, &raw_skills);
    let user_skills = matcher.user_skills(&raw_skills);

    let report = MatchReport {
        name: args.name.as_deref(),
        user_skills: &user_skills,
        catalog: &catalog,
        ranking: &ranking,
        mode: config.mode,
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    OutputFormat::from(args.format)
        .renderer()
        .write_to(&mut out, &report)?;
    out.flush()?;

    if let Some(path) = &args.output {
        export_csv(path, &catalog, &ranking)
            .with_context(|| format!("Failed to write results to {}", path.display()))?;
        info!(path = %path.display(), jobs = ranking.all.len(), "exported results");
    }

    Ok(())
}

/// Typed skills followed by the resume text, if any.
fn collect_skills(args: &MatchArgs) -> Result<String> {
    let mut parts: Vec<String> = Vec::new();

    if let Some(skills) = args
        .skills
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        parts.push(skills.to_string());
    }

    if let Some(path) = &args.resume {
        let text = extract_text(path)
            .with_context(|| format!("Failed to read resume {}", path.display()))?;
        let text = text.trim();
        if text.is_empty() {
            warn!(resume = %path.display(), "resume contains no text");
        } else {
            parts.push(text.to_string());
        }
    }

    if parts.is_empty() {
        anyhow::bail!("Enter your skills with --skills or upload a resume with --resume.");
    }
    Ok(parts.join(" "))
}

fn ranking_config(args: &MatchArgs, catalog: &Catalog) -> RankingConfig {
    let total = catalog.job_count();
    let config = RankingConfig::for_catalog(total).remove_stop_words(args.remove_stop_words);
    match (args.top, args.min_percent) {
        (_, Some(pct)) => config.min_percent(pct.unwrap_or(DEFAULT_MIN_PERCENT)),
        (Some(n), None) => config.top_n(n, total),
        (None, None) => config,
    }
}
