//! Usage messages and report rendering.

use newsbrief_domain::BulletReport;
use std::io::Write;

/// Printed by `url` when the URL is missing.
pub const URL_USAGE: &str = "##########\n\
Requires URL parameter\n\
\n\
Example: newsbrief url https://au.sports.yahoo.com/jaylen-brown-scores-40-points-114649965.html";

/// Printed by `topic` when the topic or count is missing.
pub const TOPIC_USAGE: &str = "##############################\n\
Requires two parameters: topic number-of-feeds-to-process\n\
\n\
Example: newsbrief topic celtics 3";

/// Heading printed before a topic report.
pub fn topic_header(topic: &str) -> String {
    format!("Generated Bullet List for topic {}:", topic)
}

/// Write a usage block.
pub fn write_usage(out: &mut impl Write, usage: &str) -> std::io::Result<()> {
    writeln!(out, "{}", usage)
}

/// Write both usage blocks, for a bare invocation.
pub fn write_general_usage(out: &mut impl Write) -> std::io::Result<()> {
    write_usage(out, URL_USAGE)?;
    writeln!(out)?;
    write_usage(out, TOPIC_USAGE)
}

/// Write a report followed by a newline. An empty report prints a blank line.
pub fn write_report(out: &mut impl Write, report: &BulletReport) -> std::io::Result<()> {
    writeln!(out, "{}", report)
}
