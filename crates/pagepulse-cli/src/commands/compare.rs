use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use pagepulse_browser::PageProbe;
use pagepulse_core::analyzer::SingleAnalyzer;
use pagepulse_core::compare::ComparisonOrchestrator;
use pagepulse_core::report::ComparisonAnalysis;
use std::sync::Arc;
use std::time::Duration;

pub async fn execute(urls: &[String], format: &str) -> Result<()> {
    let urls: Vec<String> = urls.iter().map(|u| crate::normalize_url(u)).collect();
    tracing::info!("Comparing {} URLs", urls.len());

    let analyzer = SingleAnalyzer::new(Arc::new(PageProbe::new()));
    let orchestrator = ComparisonOrchestrator::new(analyzer);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!("Analyzing {} pages...", urls.len()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = orchestrator.compare(&urls).await;
    spinner.finish_and_clear();
    let analysis = outcome?;

    match format {
        "json" => output_json(&analysis)?,
        "table" => output_table(&analysis),
        _ => output_pretty(&analysis), // "pretty" is default
    }

    Ok(())
}

fn output_pretty(analysis: &ComparisonAnalysis) {
    use console::style;

    println!("\n{}", style("Page Comparison Report").bold().cyan());
    println!("{}", style("======================").cyan());
    println!("\n  Generated:      {}", analysis.generated_at);
    println!("  Pages Analyzed: {}", analysis.total_analyzed);

    println!("\n{}", style("Ranking:").bold());
    for result in &analysis.results {
        println!(
            "  {}. {} - {}/200 (CRO {}/100, Performance {}/100)",
            result.rank,
            result.analysis.url,
            result.analysis.combined_score(),
            result.analysis.cro_score,
            result.analysis.performance.performance_score
        );
    }

    println!("\n{}", style("Category Winners:").bold());
    for (category, url) in &analysis.winners {
        println!("  {:16} {}", format!("{}:", category), url);
    }

    println!("\n{}", style("Insights:").bold());
    for insight in &analysis.insights {
        println!("  - {}", insight);
    }

    if !analysis.failures.is_empty() {
        println!("\n{}", style("Failed Targets:").bold().red());
        for failure in &analysis.failures {
            println!("  {} - {}", failure.url, failure.reason);
        }
    }

    println!(); // trailing newline
}

fn output_json(analysis: &ComparisonAnalysis) -> Result<()> {
    let json = serde_json::to_string_pretty(analysis)?;
    println!("{}", json);
    Ok(())
}

fn output_table(analysis: &ComparisonAnalysis) {
    println!("Rank,URL,Combined,CRO,Performance");
    for result in &analysis.results {
        println!(
            "{},{},{},{},{}",
            result.rank,
            result.analysis.url,
            result.analysis.combined_score(),
            result.analysis.cro_score,
            result.analysis.performance.performance_score
        );
    }
}
