//! Url command implementation.

use crate::cli::UrlArgs;
use crate::commands::{http_collector, load_toolkit};
use crate::config::AppConfig;
use crate::error::Result;
use crate::output::{write_report, write_usage, URL_USAGE};
use newsbrief_domain::{BulletReport, EntityClassifier};
use newsbrief_fetch::{ArticleCollector, PageSource};
use newsbrief_nlp::BulletGenerator;
use std::io::Write;

/// Execute the url command.
pub async fn execute_url(args: UrlArgs, config: &AppConfig, out: &mut impl Write) -> Result<()> {
    let Some(url) = args.url else {
        write_usage(out, URL_USAGE)?;
        return Ok(());
    };

    let collector = http_collector(config)?;
    let generator = load_toolkit(config).bullet_generator()?;

    let report = summarize_url(&url, &collector, &generator).await;
    write_report(out, &report)?;
    Ok(())
}

/// Fetch one article and summarize it.
pub async fn summarize_url<S, C>(
    url: &str,
    collector: &ArticleCollector<S>,
    generator: &BulletGenerator<C>,
) -> BulletReport
where
    S: PageSource,
    C: EntityClassifier,
{
    let corpus = collector.collect_url(url).await;
    generator.summarize(&corpus)
}
