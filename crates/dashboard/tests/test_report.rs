//! End-to-end report over the fixture dataset

use dashboard::{run, AnalyticsContext, ExplorerSettings, PipelineError, Settings};
use dataset::{Gender, LoadError};
use feature_engine::{AgeCategory, Enricher, Field, Level};
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/customers.csv")
}

fn settings(explorer: ExplorerSettings) -> Settings {
    Settings {
        data_path: fixture(),
        explorer,
        ..Default::default()
    }
}

#[test]
fn test_overview_totals() {
    let report = run(&settings(ExplorerSettings::default())).unwrap();

    assert_eq!(report.total_customers, 12);
    assert_eq!(report.feature_count, 12);
    assert_eq!(report.product_distribution[&Level::product("KP281")].count, 6);
    assert_eq!(report.revenue.total, 6 * 1500 + 4 * 1750 + 2 * 2500);
    assert_eq!(report.average_revenue_per_product, Some(7000.0));
    assert_eq!(report.gender_distribution[&Level::from(Gender::Male)].count, 7);
    assert_eq!(report.explorer.showing, 12);
    assert_eq!(report.explorer.of, 12);
}

#[test]
fn test_conditional_probabilities_are_percentages() {
    let report = run(&settings(ExplorerSettings::default())).unwrap();
    let by_age = &report.conditional_probabilities.product_given_age_category;

    // Teens in the fixture only bought the entry model
    let teen = Level::from(AgeCategory::Teen);
    assert_eq!(by_age.get(&Level::product("KP281"), &teen), Some(100.0));
    assert_eq!(by_age.get(&Level::product("KP781"), &teen), Some(0.0));
    assert!(by_age.has_margins());
    for sum in by_age.column_sums() {
        assert!((sum - 100.0).abs() < 1e-9);
    }
}

#[test]
fn test_grouped_and_correlation_views() {
    let report = run(&settings(ExplorerSettings::default())).unwrap();

    assert_eq!(report.average_miles_by_product[&Level::product("KP781")], 190.0);
    assert_eq!(report.correlation.get(Field::Miles, Field::Miles), Some(1.0));
    let r = report.correlation.get(Field::Fitness, Field::Miles).unwrap();
    assert!(r > 0.5);
    assert_eq!(report.numeric_summaries[&Field::Age].count, 12);
}

#[test]
fn test_explorer_narrows_view_only() {
    let explorer = ExplorerSettings {
        products: Some(vec!["KP481".to_string(), "KP781".to_string()]),
        genders: Some(vec![Gender::Male]),
        age_min: Some(25),
        age_max: Some(45),
    };
    let report = run(&settings(explorer)).unwrap();

    assert_eq!(report.explorer.showing, 3);
    assert_eq!(report.explorer.of, 12);
    assert_eq!(report.total_customers, 12);
}

#[test]
fn test_report_serializes_to_json() {
    let report = run(&settings(ExplorerSettings::default())).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["total_customers"], 12);
    assert_eq!(json["product_distribution"]["KP481"]["count"], 4);
    assert!(json["numeric_summaries"]["Income"]["mean"].is_number());
}

#[test]
fn test_missing_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        data_path: dir.path().join("absent.csv"),
        ..Default::default()
    };

    assert!(matches!(
        run(&settings),
        Err(PipelineError::Load(LoadError::DataUnavailable { .. }))
    ));
}

#[test]
fn test_context_shares_dataset() {
    let context = AnalyticsContext::open(fixture(), &Enricher::default()).unwrap();
    let first = context.dataset();
    let second = context.dataset();
    assert!(std::sync::Arc::ptr_eq(&first, &second));

    let view = context
        .view(&feature_engine::PredicateSet::all().one_of(Field::Gender, [Gender::Female]))
        .unwrap();
    assert_eq!(view.len(), 5);
}
