//! Topic command implementation.

use crate::cli::TopicArgs;
use crate::commands::{http_collector, load_toolkit};
use crate::config::AppConfig;
use crate::error::Result;
use crate::output::{topic_header, write_report, write_usage, TOPIC_USAGE};
use newsbrief_domain::{BulletReport, EntityClassifier};
use newsbrief_fetch::{ArticleCollector, PageSource};
use newsbrief_nlp::BulletGenerator;
use std::io::Write;

/// Execute the topic command.
pub async fn execute_topic(
    args: TopicArgs,
    config: &AppConfig,
    out: &mut impl Write,
) -> Result<()> {
    let (Some(topic), Some(count)) = (args.topic, args.count) else {
        write_usage(out, TOPIC_USAGE)?;
        return Ok(());
    };

    let collector = http_collector(config)?;
    let generator = load_toolkit(config).bullet_generator()?;

    let report = summarize_topic(&topic, count, &collector, &generator).await;
    writeln!(out, "{}", topic_header(&topic))?;
    write_report(out, &report)?;
    Ok(())
}

/// Search for `topic`, fetch the first `count` articles, and summarize them.
pub async fn summarize_topic<S, C>(
    topic: &str,
    count: usize,
    collector: &ArticleCollector<S>,
    generator: &BulletGenerator<C>,
) -> BulletReport
where
    S: PageSource,
    C: EntityClassifier,
{
    let corpus = collector.collect_topic(topic, count).await;
    generator.summarize(&corpus)
}
