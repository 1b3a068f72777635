use async_trait::async_trait;
use pagepulse_core::analyzer::SingleAnalyzer;
use pagepulse_core::compare::ComparisonOrchestrator;
use pagepulse_core::signals::{PageSignals, SignalExtractor};
use pagepulse_core::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

enum Plan {
    Success {
        signals: PageSignals,
        delay: Duration,
    },
    Fail(String),
}

/// In-memory extractor scripted per URL: canned signals with an optional
/// artificial delay, or a canned failure.
struct ScriptedExtractor {
    plans: HashMap<String, Plan>,
    fetch_calls: AtomicUsize,
    fetch_completions: AtomicUsize,
}

impl ScriptedExtractor {
    fn new(plans: Vec<(&str, Plan)>) -> Self {
        Self {
            plans: plans
                .into_iter()
                .map(|(url, plan)| (url.to_string(), plan))
                .collect(),
            fetch_calls: AtomicUsize::new(0),
            fetch_completions: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SignalExtractor for ScriptedExtractor {
    async fn fetch(&self, url: &str, _timeout: Duration) -> Result<PageSignals> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        match self.plans.get(url) {
            Some(Plan::Success { signals, delay }) => {
                tokio::time::sleep(*delay).await;
                self.fetch_completions.fetch_add(1, Ordering::SeqCst);
                Ok(signals.clone())
            }
            Some(Plan::Fail(reason)) => Err(Error::Fetch {
                url: url.to_string(),
                reason: reason.clone(),
            }),
            None => Err(Error::Fetch {
                url: url.to_string(),
                reason: "unknown target".to_string(),
            }),
        }
    }
}

fn strong_signals() -> PageSignals {
    PageSignals {
        title: Some("A strong landing page title for conversions".to_string()),
        meta_description: Some("d".repeat(140)),
        h1_count: 1,
        cta_count: 3,
        form_count: 1,
        word_count: 800,
        load_time_ms: 1200,
        dom_ready_ms: 600,
        page_size_kb: Some(350.0),
    }
}

fn weak_signals() -> PageSignals {
    PageSignals {
        title: None,
        meta_description: None,
        h1_count: 0,
        cta_count: 0,
        form_count: 0,
        word_count: 40,
        load_time_ms: 6500,
        dom_ready_ms: 2800,
        page_size_kb: Some(2400.0),
    }
}

fn orchestrator_for(plans: Vec<(&str, Plan)>) -> (ComparisonOrchestrator, Arc<ScriptedExtractor>) {
    let extractor = Arc::new(ScriptedExtractor::new(plans));
    let analyzer = SingleAnalyzer::new(extractor.clone());
    (ComparisonOrchestrator::new(analyzer), extractor)
}

fn urls(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|u| u.to_string()).collect()
}

#[tokio::test]
async fn test_too_few_urls_rejected_before_any_fetch() {
    let (orchestrator, extractor) = orchestrator_for(vec![]);

    let result = orchestrator.compare(&urls(&["https://only.test"])).await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(extractor.fetch_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_too_many_urls_rejected_before_any_fetch() {
    let (orchestrator, extractor) = orchestrator_for(vec![]);

    let batch: Vec<String> = (0..11).map(|i| format!("https://site{i}.test")).collect();
    let result = orchestrator.compare(&batch).await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(extractor.fetch_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_partial_failure_keeps_surviving_targets() {
    let (orchestrator, _) = orchestrator_for(vec![
        (
            "https://a.test",
            Plan::Success {
                signals: strong_signals(),
                delay: Duration::ZERO,
            },
        ),
        ("https://down.test", Plan::Fail("connection refused".into())),
        (
            "https://b.test",
            Plan::Success {
                signals: weak_signals(),
                delay: Duration::ZERO,
            },
        ),
    ]);

    let analysis = orchestrator
        .compare(&urls(&["https://a.test", "https://down.test", "https://b.test"]))
        .await
        .unwrap();

    assert_eq!(analysis.total_analyzed, 2);
    let ranks: Vec<usize> = analysis.results.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2]);
    assert_eq!(analysis.results[0].analysis.url, "https://a.test");
    assert_eq!(analysis.failures.len(), 1);
    assert_eq!(analysis.failures[0].url, "https://down.test");
    assert!(analysis.failures[0].reason.contains("connection refused"));
}

#[tokio::test]
async fn test_all_targets_failed_surfaces_every_reason() {
    let (orchestrator, _) = orchestrator_for(vec![
        ("https://a.test", Plan::Fail("dns error".into())),
        ("https://b.test", Plan::Fail("http 500".into())),
    ]);

    let result = orchestrator
        .compare(&urls(&["https://a.test", "https://b.test"]))
        .await;

    match result {
        Err(Error::AllTargetsFailed(failures)) => {
            assert_eq!(failures.len(), 2);
            assert!(failures.iter().any(|f| f.reason.contains("dns error")));
            assert!(failures.iter().any(|f| f.reason.contains("http 500")));
        }
        other => panic!("expected AllTargetsFailed, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_tie_break_ignores_completion_order() {
    // identical signals, but the first input finishes last
    let (orchestrator, _) = orchestrator_for(vec![
        (
            "https://slow-first.test",
            Plan::Success {
                signals: strong_signals(),
                delay: Duration::from_millis(80),
            },
        ),
        (
            "https://fast-second.test",
            Plan::Success {
                signals: strong_signals(),
                delay: Duration::ZERO,
            },
        ),
    ]);

    for _ in 0..3 {
        let analysis = orchestrator
            .compare(&urls(&["https://slow-first.test", "https://fast-second.test"]))
            .await
            .unwrap();

        assert_eq!(analysis.results[0].analysis.url, "https://slow-first.test");
        assert_eq!(analysis.results[1].analysis.url, "https://fast-second.test");
        assert_eq!(analysis.winners["overall"], "https://slow-first.test");
    }
}

#[tokio::test]
async fn test_slow_target_times_out_without_blocking_the_batch() {
    let extractor = Arc::new(ScriptedExtractor::new(vec![
        (
            "https://hang.test",
            Plan::Success {
                signals: strong_signals(),
                delay: Duration::from_secs(5),
            },
        ),
        (
            "https://ok.test",
            Plan::Success {
                signals: weak_signals(),
                delay: Duration::ZERO,
            },
        ),
    ]));
    let analyzer = SingleAnalyzer::new(extractor).with_timeout(Duration::from_millis(100));
    let orchestrator = ComparisonOrchestrator::new(analyzer);

    let analysis = orchestrator
        .compare(&urls(&["https://hang.test", "https://ok.test"]))
        .await
        .unwrap();

    assert_eq!(analysis.total_analyzed, 1);
    assert_eq!(analysis.results[0].analysis.url, "https://ok.test");
    assert_eq!(analysis.failures[0].url, "https://hang.test");
    assert!(analysis.failures[0].reason.contains("Timed out"));
}

#[tokio::test]
async fn test_aborted_comparison_cancels_outstanding_fetches() {
    let (orchestrator, extractor) = orchestrator_for(vec![
        (
            "https://slow-a.test",
            Plan::Success {
                signals: strong_signals(),
                delay: Duration::from_millis(200),
            },
        ),
        (
            "https://slow-b.test",
            Plan::Success {
                signals: strong_signals(),
                delay: Duration::from_millis(200),
            },
        ),
    ]);

    let task = tokio::spawn(async move {
        orchestrator
            .compare(&urls(&["https://slow-a.test", "https://slow-b.test"]))
            .await
    });

    // let both fetches start, then drop the comparison mid-flight
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(extractor.fetch_calls.load(Ordering::SeqCst), 2);
    task.abort();
    assert!(task.await.unwrap_err().is_cancelled());

    // well past the scripted delays, neither fetch ever ran to completion
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(extractor.fetch_completions.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_single_analysis_merges_cro_then_performance_recommendations() {
    let extractor = Arc::new(ScriptedExtractor::new(vec![(
        "https://weak.test",
        Plan::Success {
            signals: weak_signals(),
            delay: Duration::ZERO,
        },
    )]));
    let analyzer = SingleAnalyzer::new(extractor);

    let result = analyzer.analyze("https://weak.test").await.unwrap();

    // six missed CRO sub-bonuses come first
    assert!(result.recommendations[0].contains("title tag"));
    assert_eq!(result.cro_score, 0);
    // performance recommendations are appended after the CRO block
    let first_perf = result
        .recommendations
        .iter()
        .position(|r| r.contains("load time"))
        .unwrap();
    assert!(first_perf >= 6);
    assert_eq!(result.performance.performance_score, 20);
}

#[tokio::test]
async fn test_comparison_report_shape() {
    let (orchestrator, _) = orchestrator_for(vec![
        (
            "https://a.test",
            Plan::Success {
                signals: strong_signals(),
                delay: Duration::ZERO,
            },
        ),
        (
            "https://b.test",
            Plan::Success {
                signals: weak_signals(),
                delay: Duration::ZERO,
            },
        ),
    ]);

    let analysis = orchestrator
        .compare(&urls(&["https://a.test", "https://b.test"]))
        .await
        .unwrap();

    assert!(!analysis.generated_at.is_empty());
    assert_eq!(analysis.total_analyzed, 2);
    assert_eq!(analysis.winners.len(), 9);
    assert_eq!(analysis.insights.len(), 4);
    assert!(analysis.failures.is_empty());

    // strong page sweeps every category against the weak one
    for winner in analysis.winners.values() {
        assert_eq!(winner, "https://a.test");
    }
}
