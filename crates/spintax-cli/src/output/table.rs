//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use spintax::TemplateStats;

/// Format template statistics as an ASCII table.
pub fn format_stats_table(stats: &TemplateStats) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Metric", "Value"]);

    table.add_row(vec!["Groups".to_string(), stats.groups.to_string()]);
    table.add_row(vec![
        "Alternatives".to_string(),
        stats.alternatives.to_string(),
    ]);
    table.add_row(vec!["Max depth".to_string(), stats.max_depth.to_string()]);
    table.add_row(vec![
        "Combinations".to_string(),
        stats.combinations.to_string(),
    ]);

    table
}
