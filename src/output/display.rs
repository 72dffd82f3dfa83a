//! Display functions for command results

use super::formatters::{create_progress_bar, rarity_badge, word_preview};
use crate::browse::PatternQuery;
use crate::catalog::CatalogStats;
use crate::commands::BrowseResult;
use crate::core::Rarity;
use crate::drill::{DrillablePattern, SessionSnapshot};
use colored::Colorize;

/// Print one page of browsed patterns
pub fn print_browse_result(result: &BrowseResult) {
    let page = &result.page;

    println!("\n{}", "═".repeat(78).cyan());
    println!(
        " {} {}",
        "PATTERNS".bright_cyan().bold(),
        describe_query(&result.query).bright_black()
    );
    println!("{}", "═".repeat(78).cyan());

    if page.items.is_empty() {
        println!("\n  No patterns match.");
        return;
    }

    println!(
        "\n  {:<10} {:>3} {:>6} {:>6} {:>6}  {:<12} {}",
        "pattern", "len", "ends", "starts", "total", "rarity", "examples"
    );
    for record in &page.items {
        let length = if record.length_mismatch() {
            format!("{}!", record.length()).yellow().to_string()
        } else {
            record.length().to_string()
        };
        let examples = if record.ends_count() > 0 {
            word_preview(record.ends_words(), 3)
        } else {
            word_preview(record.starts_words(), 3)
        };
        println!(
            "  {:<10} {:>3} {:>6} {:>6} {:>6}  {:<12} {}",
            record.pattern().bright_white().bold(),
            length,
            record.ends_count(),
            record.starts_count(),
            record.total_count(),
            rarity_badge(record.rarity()),
            examples.bright_black()
        );
    }

    let first = page.first_position(result.page_size);
    let last = first + page.items.len() - 1;
    println!(
        "\n  Showing {first}-{last} of {} | Page {}/{}",
        page.total_items, page.number, page.total_pages
    );
}

fn describe_query(query: &PatternQuery) -> String {
    let mut parts = Vec::new();
    if let Some(text) = query.text.as_deref().filter(|t| !t.trim().is_empty()) {
        parts.push(format!("matching '{}'", text.trim()));
    }
    if let Some(length) = query.length {
        parts.push(format!("length {length}"));
    }
    if let Some(rarity) = query.rarity {
        parts.push(rarity.label().to_string());
    }
    if parts.is_empty() {
        "(all)".to_string()
    } else {
        format!("({})", parts.join(", "))
    }
}

/// Print the drillable patterns
pub fn print_drill_list(drills: &[DrillablePattern]) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ({})", "DRILLABLE PATTERNS".bright_cyan().bold(), drills.len());
    println!("{}", "─".repeat(60).cyan());

    if drills.is_empty() {
        println!("\n  Nothing to drill with these filters.");
        return;
    }

    for (i, drill) in drills.iter().enumerate() {
        println!(
            "  {:>3}. {:<12} {:>2} words  {}",
            (i + 1).to_string().bright_black(),
            drill.key().to_string().bright_white().bold(),
            drill.count(),
            word_preview(drill.words(), 4).bright_black()
        );
    }
}

/// Print catalog statistics
pub fn print_stats(stats: &CatalogStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CATALOG".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 {}", "Inputs:".bright_cyan().bold());
    println!("   Words:            {}", stats.words);
    println!("   Vocabulary:       {} patterns", stats.vocabulary);
    println!("   Ending keys:      {}", stats.ending_keys);
    println!("   Starting keys:    {}", stats.starting_keys);

    println!("\n🔎 {}", "Patterns:".bright_cyan().bold());
    println!(
        "   Occurring twice+: {}",
        stats.records.to_string().bright_yellow().bold()
    );
    println!(
        "   Drillable:        {} ends, {} starts",
        stats.drillable_ends, stats.drillable_starts
    );
    if stats.length_mismatches > 0 {
        println!(
            "   {}",
            format!(
                "{} patterns declare a length that differs from their text",
                stats.length_mismatches
            )
            .yellow()
        );
    }

    println!("\n📈 {}", "Rarity:".bright_cyan().bold());
    let max = stats.by_rarity.iter().copied().max().unwrap_or(0) as f64;
    for rarity in Rarity::ALL {
        let count = stats.count_for(rarity);
        let bar = create_progress_bar(count as f64, max, 30);
        println!("   {:<12} {} {count:4}", rarity_badge(rarity), bar.green());
    }
}

/// Print the final score of a drill session
pub fn print_session_summary(snapshot: &SessionSnapshot) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "    S E S S I O N   C O M P L E T E    ".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    println!(
        "\n  Correct answers: {}",
        snapshot.correct_answers.to_string().bright_green().bold()
    );
    println!("  Attempts:        {}", snapshot.total_attempts);
    if let Some(accuracy) = snapshot.accuracy() {
        println!(
            "  Accuracy:        [{}] {accuracy:.0}%",
            create_progress_bar(accuracy, 100.0, 20).green()
        );
    }
    if snapshot.is_active() {
        println!("  Patterns seen:   {}", snapshot.challenge_index + 1);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_query_lists_active_filters() {
        assert_eq!(describe_query(&PatternQuery::default()), "(all)");

        let query = PatternQuery::default()
            .with_text(" in ")
            .with_length(3)
            .with_rarity(Rarity::Rare);
        assert_eq!(describe_query(&query), "(matching 'in', length 3, rare)");
    }
}
