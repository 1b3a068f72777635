use anyhow::Result;
use pagepulse_browser::PageProbe;
use pagepulse_core::analyzer::SingleAnalyzer;
use pagepulse_core::report::AnalysisResult;
use std::sync::Arc;

pub async fn execute(url: &str, performance: bool, format: &str) -> Result<()> {
    let url = crate::normalize_url(url);
    tracing::info!("Analyzing {}", url);

    let analyzer = SingleAnalyzer::new(Arc::new(PageProbe::new()));
    let result = analyzer.analyze(&url).await?;

    match format {
        "json" => output_json(&result)?,
        "table" => output_table(&result, performance),
        _ => output_pretty(&result, performance), // "pretty" is default
    }

    Ok(())
}

fn output_pretty(result: &AnalysisResult, include_performance: bool) {
    use console::style;

    println!("\n{}", style("Page Analysis Report").bold().cyan());
    println!("{}", style("====================").cyan());

    println!("\n{}", style("CRO:").bold());
    println!("  URL:              {}", result.url);
    println!("  CRO Score:        {}/100", result.cro_score);
    println!("  Title:            {}/20", result.breakdown.title);
    println!("  Meta Description: {}/15", result.breakdown.meta_description);
    println!("  H1 Tags:          {}/15", result.breakdown.h1_tags);
    println!("  CTAs:             {}/25", result.breakdown.ctas);
    println!("  Forms:            {}/15", result.breakdown.forms);
    println!("  Content:          {}/10", result.breakdown.content);

    if include_performance {
        println!("\n{}", style("Performance:").bold());
        println!(
            "  Performance Score: {}/100",
            result.performance.performance_score
        );
        println!("  Load Time:         {} ms", result.performance.load_time_ms);
        println!("  DOM Ready:         {} ms", result.performance.dom_ready_ms);
        match result.performance.page_size_kb {
            Some(kb) => println!("  Page Size:         {:.2} KB", kb),
            None => println!("  Page Size:         unknown"),
        }
    }

    if !result.recommendations.is_empty() {
        println!("\n{}", style("Recommendations:").bold());
        for (i, recommendation) in result.recommendations.iter().enumerate() {
            println!("  {}. {}", i + 1, recommendation);
        }
    }

    println!(); // trailing newline
}

fn output_json(result: &AnalysisResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{}", json);
    Ok(())
}

fn output_table(result: &AnalysisResult, include_performance: bool) {
    println!("Metric,Value");
    println!("URL,{}", result.url);
    println!("CRO Score,{}", result.cro_score);
    println!("Title,{}", result.breakdown.title);
    println!("Meta Description,{}", result.breakdown.meta_description);
    println!("H1 Tags,{}", result.breakdown.h1_tags);
    println!("CTAs,{}", result.breakdown.ctas);
    println!("Forms,{}", result.breakdown.forms);
    println!("Content,{}", result.breakdown.content);

    if include_performance {
        println!("Performance Score,{}", result.performance.performance_score);
        println!("Load Time (ms),{}", result.performance.load_time_ms);
        println!("DOM Ready (ms),{}", result.performance.dom_ready_ms);
        if let Some(kb) = result.performance.page_size_kb {
            println!("Page Size (KB),{:.2}", kb);
        }
    }
}
