// Colored terminal output for built graphs and pair scores.
//
// The command handlers in main.rs delegate here for anything that is more
// than a single status line.

use colored::Colorize;

use crate::export::ExportReport;
use crate::graph::model::RhymeGraph;
use crate::phonetics::resolver::{KeySource, RhymeKey};
use crate::scoring::strength::StrengthBreakdown;

/// How many families the summary lists.
const TOP_FAMILIES: usize = 5;
/// How many member words are shown per listed family.
const FAMILY_PREVIEW: usize = 8;

/// Display a summary of a built graph.
pub fn display_graph_summary(graph: &RhymeGraph) {
    if graph.nodes.is_empty() {
        println!("No end-of-line words found. Is the input empty?");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Rhyme Network ({} words, {} links, {} families) ===",
            graph.nodes.len(),
            graph.links.len(),
            graph.family_count()
        )
        .bold()
    );

    let mut families = graph.families();
    families.retain(|members| members.len() > 1);
    if families.is_empty() {
        println!("  {}", "No rhyme pairs passed the threshold.".dimmed());
        return;
    }
    families.sort_by(|a, b| b.len().cmp(&a.len()));

    println!("\n  Largest families:");
    for members in families.iter().take(TOP_FAMILIES) {
        let preview = members
            .iter()
            .take(FAMILY_PREVIEW)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        let more = if members.len() > FAMILY_PREVIEW {
            format!(" (+{} more)", members.len() - FAMILY_PREVIEW)
        } else {
            String::new()
        };
        println!("  {:>4}  {}{}", members.len(), preview, more.dimmed());
    }

    let singletons = graph.family_count() - families.len();
    if singletons > 0 {
        println!("  {} {} words with no rhyme partner", "~".yellow(), singletons);
    }
}

/// Display one line per requested export.
pub fn display_exports(reports: &[ExportReport]) {
    for report in reports {
        if report.written {
            println!("  {} {} written", "✓".green(), report.format.name());
        } else {
            println!("  {} {} not written (see log)", "✗".red(), report.format.name());
        }
    }
}

/// Display every component of one pair's strength.
pub fn display_breakdown(a: &str, b: &str, breakdown: &StrengthBreakdown) {
    println!("\n{}", format!("=== {a} / {b} ===").bold());
    print_key(a, &breakdown.key_a);
    print_key(b, &breakdown.key_b);
    println!();
    println!("  Key similarity: {:.4}", breakdown.base);
    println!("  Stress bonus:   {:.4}", breakdown.stress_bonus);
    println!("  Confidence:     {:.4}", breakdown.confidence);
    println!(
        "  Strength:       {}",
        colorize_strength(breakdown.strength)
    );
}

/// Display a word's perfect rhymes in columns.
pub fn display_rhymes(word: &str, rhymes: &[String]) {
    if rhymes.is_empty() {
        println!("No dictionary rhymes for \"{word}\".");
        return;
    }
    println!(
        "\n{}",
        format!("=== Rhymes for \"{word}\" ({}) ===", rhymes.len()).bold()
    );
    for row in rhymes.chunks(6) {
        let line: String = row.iter().map(|w| format!("{w:<16}")).collect();
        println!("  {}", line.trim_end());
    }
}

fn print_key(word: &str, key: &RhymeKey) {
    let source = match key.source {
        KeySource::Dictionary => key.source.to_string().green(),
        KeySource::Stemmed => key.source.to_string().yellow(),
        KeySource::Orthographic => key.source.to_string().red(),
    };
    println!(
        "  {:<16} {:<20} {} ({:.1})",
        word,
        key.key,
        source,
        key.confidence()
    );
}

fn colorize_strength(strength: f64) -> colored::ColoredString {
    let text = format!("{strength:.4}");
    if strength >= 0.9 {
        text.green().bold()
    } else if strength >= 0.6 {
        text.green()
    } else if strength >= 0.3 {
        text.yellow()
    } else {
        text.dimmed()
    }
}
