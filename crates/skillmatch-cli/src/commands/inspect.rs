use crate::InspectArgs;
use anyhow::{Context, Result};
use skillmatch_catalog::CatalogLoader;
use skillmatch_score::{DEFAULT_MIN_TERM_LEN, TfIdfModel};

pub fn run(args: &InspectArgs) -> Result<()> {
    let catalog = CatalogLoader::new(&args.catalog)
        .load()
        .with_context(|| format!("Failed to load catalog {}", args.catalog.display()))?;

    println!("Catalog: {}", catalog.source.display());
    println!("Fingerprint: {}", catalog.fingerprint);
    println!("Jobs: {}", catalog.job_count());
    println!("Empty skill rows: {}", catalog.empty_skill_rows());

    let model = match TfIdfModel::fit(&catalog.corpus(), DEFAULT_MIN_TERM_LEN) {
        Ok(model) => model,
        Err(_) => {
            println!("Unique skill terms: 0");
            return Ok(());
        }
    };
    println!("Unique skill terms: {}", model.vocabulary_len());
    println!();

    let terms = model.terms_by_document_frequency();
    println!("Most requested terms:");
    for (term, jobs) in terms.iter().take(args.terms) {
        println!("  {term:<20} {jobs:>6}");
    }
    if terms.len() > args.terms {
        let rest = terms.len() - args.terms;
        println!("  ({rest} more)");
    }

    Ok(())
}
