//! Worked examples over small hand-built datasets

mod common;

use common::{abc_catalog, enrich, enrich_with, record};
use dataset::Gender;
use feature_engine::{AgeCategory, Field, FitnessCategory, Level, PredicateSet};
use summary_engine::{
    correlation_matrix, crosstab, describe, grouped_stat, marginal, revenue, Normalize, QueryError,
    Statistic,
};

fn four_three_two() -> feature_engine::EnrichedDataset {
    let mut rows = Vec::new();
    rows.extend((0..4).map(|_| record("A")));
    rows.extend((0..3).map(|_| record("B")));
    rows.extend((0..2).map(|_| record("C")));
    enrich_with(abc_catalog(), rows)
}

#[test]
fn test_product_marginal() {
    let dataset = four_three_two();
    let distribution = marginal(&dataset, Field::Product).unwrap();

    let counts: Vec<(String, usize)> = distribution
        .iter()
        .map(|(level, frequency)| (level.to_string(), frequency.count))
        .collect();
    assert_eq!(
        counts,
        vec![("A".to_string(), 4), ("B".to_string(), 3), ("C".to_string(), 2)]
    );

    let a = distribution[&Level::product("A")].proportion;
    let b = distribution[&Level::product("B")].proportion;
    let c = distribution[&Level::product("C")].proportion;
    assert!((a - 4.0 / 9.0).abs() < 1e-12);
    assert!((b - 3.0 / 9.0).abs() < 1e-12);
    assert!((c - 2.0 / 9.0).abs() < 1e-12);
}

#[test]
fn test_revenue_for_product_a() {
    let dataset = four_three_two();
    let breakdown = revenue(&dataset);
    assert_eq!(breakdown.get("A").unwrap().revenue, 6000);
    assert_eq!(breakdown.total, 6000 + 3 * 1750 + 2 * 2500);

    let sums = grouped_stat(&dataset, Field::Product, Field::ProductPrice, Statistic::Sum).unwrap();
    assert_eq!(sums[&Level::product("A")], 6000.0);
}

#[test]
fn test_fitness_and_age_derivation() {
    let mut row = record("KP781");
    row.fitness_self_rating = 5;
    row.age = 21;
    let dataset = enrich(vec![row]);

    let enriched = dataset.iter().next().unwrap();
    assert_eq!(enriched.derived.fitness_category, FitnessCategory::ExcellentShape);
    assert_eq!(enriched.derived.fitness_category.label(), "Excellent Shape");
    assert_eq!(enriched.derived.age_category, AgeCategory::Teen);
}

#[test]
fn test_unobserved_product_gender_pair_is_zero() {
    let mut female = record("KP481");
    female.gender = Gender::Female;
    let dataset = enrich(vec![record("KP281"), record("KP281"), female]);

    let table = crosstab(&dataset, Field::Product, Field::Gender, Normalize::None, false).unwrap();
    assert_eq!(table.get(&Level::product("KP481"), &Gender::Male.into()), Some(0.0));
    assert_eq!(table.get(&Level::product("KP281"), &Gender::Female.into()), Some(0.0));
    assert_eq!(table.get(&Level::product("KP781"), &Gender::Female.into()), Some(0.0));
    assert_eq!(table.get(&Level::product("KP281"), &Gender::Male.into()), Some(2.0));
}

#[test]
fn test_conditional_probability_by_age_category() {
    let ages = [19, 20, 25, 30, 33, 40, 50];
    let products = ["KP281", "KP281", "KP481", "KP281", "KP781", "KP481", "KP781"];
    let rows = ages
        .iter()
        .zip(products)
        .map(|(&age, product)| {
            let mut row = record(product);
            row.age = age;
            row
        })
        .collect();
    let dataset = enrich(rows);

    let table = crosstab(&dataset, Field::Product, Field::AgeCategory, Normalize::Column, true)
        .unwrap()
        .to_percent();

    // Every age bin is a column, even the empty ones
    assert_eq!(table.columns.len(), 4);
    let teen_kp281 = table
        .get(&Level::product("KP281"), &AgeCategory::Teen.into())
        .unwrap();
    assert!((teen_kp281 - 100.0).abs() < 1e-9);
    for sum in table.column_sums() {
        assert!((sum - 100.0).abs() < 1e-9);
    }
}

#[test]
fn test_average_miles_by_product() {
    let miles = [(80.0, "KP281"), (90.0, "KP281"), (120.0, "KP481"), (200.0, "KP781")];
    let rows = miles
        .iter()
        .map(|&(m, product)| {
            let mut row = record(product);
            row.miles_per_week = m;
            row
        })
        .collect();
    let dataset = enrich(rows);

    let means = grouped_stat(&dataset, Field::Product, Field::Miles, Statistic::Mean).unwrap();
    assert_eq!(means[&Level::product("KP281")], 85.0);
    assert_eq!(means[&Level::product("KP481")], 120.0);
    assert_eq!(means[&Level::product("KP781")], 200.0);

    let medians = grouped_stat(&dataset, Field::Product, Field::Miles, Statistic::Median).unwrap();
    assert_eq!(medians[&Level::product("KP281")], 85.0);
}

#[test]
fn test_correlation_over_filtered_view() {
    let rows = (0..10)
        .map(|i| {
            let mut row = record(if i % 2 == 0 { "KP281" } else { "KP781" });
            row.fitness_self_rating = 1 + (i % 5) as u8;
            row.miles_per_week = 50.0 + 30.0 * f64::from(row.fitness_self_rating);
            row.income = 30_000.0 + 1_000.0 * f64::from(i);
            row
        })
        .collect();
    let dataset = enrich(rows);
    let view = dataset
        .filter(&PredicateSet::all().between(Field::Income, 30_000.0, 36_000.0))
        .unwrap();
    assert_eq!(view.len(), 7);

    let matrix = correlation_matrix(&view, &[Field::Fitness, Field::Miles, Field::Income]).unwrap();
    let r = matrix.get(Field::Fitness, Field::Miles).unwrap();
    assert!((r - 1.0).abs() < 1e-9);
    assert_eq!(matrix.get(Field::Income, Field::Income), Some(1.0));
}

#[test]
fn test_describe_numeric_fields() {
    let dataset = enrich((0..5).map(|_| record("KP281")).collect());
    let summaries = describe(&dataset, &[Field::Income, Field::Age]).unwrap();

    let income = &summaries[&Field::Income];
    assert_eq!(income.count, 5);
    assert_eq!(income.mean, 50_000.0);
    assert_eq!(income.std, 0.0);
    assert_eq!(income.outliers, 0);

    assert!(matches!(
        describe(&dataset, &[Field::Gender]),
        Err(QueryError::TypeMismatch { field: "Gender", .. })
    ));
}

#[test]
fn test_correlation_rejects_categorical_field() {
    let dataset = enrich(vec![record("KP281")]);
    assert_eq!(
        correlation_matrix(&dataset, &[Field::Age, Field::AgeCategory]),
        Err(QueryError::TypeMismatch {
            field: "Age_category",
            expected: "numeric"
        })
    );
}
