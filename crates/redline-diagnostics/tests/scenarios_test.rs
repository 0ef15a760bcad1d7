//! End-to-end scenarios over joined annual histories

use redline_data::{AnnualRecord, Disclosure, QuantMetrics, ZScoreVariant, pad_concerns};
use redline_diagnostics::{RedFlagEngine, RuleId, SentimentTrend, Severity, narrative};

fn year(fiscal_year: i32, quant: QuantMetrics, disclosure: Disclosure) -> AnnualRecord {
    AnnualRecord::new("DEMO", fiscal_year)
        .with_quant(quant)
        .with_disclosure(disclosure)
}

fn concerns(tags: &[&str]) -> [Option<String>; 3] {
    pad_concerns(tags.iter().map(|t| Some(t.to_string())))
}

#[test]
fn test_f_score_collapse_with_souring_tone() {
    let history = vec![
        year(
            2022,
            QuantMetrics {
                f_score: Some(7),
                ..QuantMetrics::default()
            },
            Disclosure {
                mda_sentiment_score: Some(8),
                ..Disclosure::default()
            },
        ),
        year(
            2023,
            QuantMetrics {
                f_score: Some(3),
                ..QuantMetrics::default()
            },
            Disclosure {
                mda_sentiment_score: Some(4),
                ..Disclosure::default()
            },
        ),
    ];

    let flags = RedFlagEngine::default().evaluate(&history);
    assert_eq!(flags.len(), 2);

    assert_eq!(flags[0].rule_id, RuleId::Rf001);
    assert_eq!(flags[0].fiscal_year, 2023);
    assert_eq!(flags[0].severity, Severity::Medium);
    assert_eq!(flags[0].detail, "F-Score=3, MDA sentiment=4");

    assert_eq!(flags[1].rule_id, RuleId::Rf002);
    assert_eq!(flags[1].severity, Severity::High);
    assert_eq!(flags[1].title, "Sharp F-Score Deterioration");
    assert_eq!(flags[1].detail, "F-Score dropped 4 pts: 7 (2022) → 3 (2023)");

    let diffs = narrative::compute(&history);
    assert_eq!(diffs[1].sentiment_delta, Some(-4));
    assert_eq!(diffs[1].sentiment_trend, Some(SentimentTrend::Deteriorating));
}

#[test]
fn test_distress_requires_liquidity_concern() {
    let quant = QuantMetrics {
        z_score: Some(1.5),
        z_score_type: Some(ZScoreVariant::Standard),
        ..QuantMetrics::default()
    };

    let with_credit = year(
        2023,
        quant.clone(),
        Disclosure {
            macro_concerns: concerns(&["elevated credit risk"]),
            ..Disclosure::default()
        },
    );
    let flags = RedFlagEngine::default().evaluate(&[with_credit]);
    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].rule_id, RuleId::Rf003);
    assert_eq!(flags[0].severity, Severity::Critical);
    assert_eq!(
        flags[0].detail,
        "Z-Score=1.5000 (standard, threshold=1.81). Matching concern: 'elevated credit risk'"
    );

    let without = year(
        2023,
        quant,
        Disclosure {
            macro_concerns: concerns(&["consumer spending", "tariffs"]),
            ..Disclosure::default()
        },
    );
    assert!(RedFlagEngine::default().evaluate(&[without]).is_empty());
}

#[test]
fn test_unknown_variant_never_fires_distress() {
    let rec = year(
        2023,
        QuantMetrics {
            z_score: Some(0.2),
            z_score_type: None,
            ..QuantMetrics::default()
        },
        Disclosure {
            macro_concerns: concerns(&["debt default"]),
            ..Disclosure::default()
        },
    );
    assert!(RedFlagEngine::default().evaluate(&[rec]).is_empty());
}

#[test]
fn test_single_year_narrative() {
    let history = vec![year(
        2024,
        QuantMetrics::default(),
        Disclosure {
            mda_sentiment_score: Some(6),
            macro_concerns: concerns(&["rates", "AI capex"]),
            capex_guidance_tone: Some("increasing".to_string()),
            ..Disclosure::default()
        },
    )];

    let diffs = narrative::compute(&history);
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].sentiment_delta, None);
    assert_eq!(diffs[0].sentiment_trend, None);
    assert_eq!(diffs[0].capex_tone_changed, None);
    assert_eq!(diffs[0].new_macro_concerns, vec!["AI capex", "rates"]);
    assert!(diffs[0].dropped_macro_concerns.is_empty());
}

#[test]
fn test_identical_concerns_produce_empty_diff() {
    let disclosure = Disclosure {
        macro_concerns: concerns(&["rates", "fx"]),
        ..Disclosure::default()
    };
    let mut reordered = disclosure.clone();
    reordered.macro_concerns = concerns(&["fx", "rates"]);

    let history = vec![
        year(2022, QuantMetrics::default(), disclosure),
        year(2023, QuantMetrics::default(), reordered),
    ];
    let diffs = narrative::compute(&history);
    assert!(diffs[1].new_macro_concerns.is_empty());
    assert!(diffs[1].dropped_macro_concerns.is_empty());
}
