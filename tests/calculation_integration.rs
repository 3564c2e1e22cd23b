//! Integration tests for the full MOORA calculation flow.
//!
//! These tests verify the end-to-end pipeline:
//! 1. CalculationService resolves records into a decision matrix
//! 2. Normalization, weighting, scoring, and ranking run over it
//! 3. The ranking batch is persisted atomically through the port
//! 4. Accuracy evaluation and summaries read the persisted batch back
//!
//! Uses the in-memory ranking store; no external dependencies.

use std::collections::HashSet;
use std::sync::Arc;

use moora_rank::adapters::memory::InMemoryRankingStore;
use moora_rank::application::{CalculationService, UserRankingEntry};
use moora_rank::domain::decision::{Alternative, Criterion};
use moora_rank::domain::foundation::{EngineError, Polarity, Weight};
use moora_rank::ports::RankingRepository;

// =============================================================================
// Test Data
// =============================================================================

/// Criterion set modeled on a used-car selection study.
fn used_car_criteria() -> Vec<Criterion> {
    vec![
        Criterion::with_description(
            "K1",
            "Price",
            Polarity::Cost,
            Weight::new(35.0),
            "Asking price in millions",
        ),
        Criterion::new("K2", "Production Year", Polarity::Benefit, Weight::new(30.0)),
        Criterion::new("K3", "Engine Capacity", Polarity::Benefit, Weight::new(15.0)),
        Criterion::new("K4", "Maintenance", Polarity::Benefit, Weight::new(20.0)),
    ]
}

fn used_car_alternatives() -> Vec<Alternative> {
    vec![
        Alternative::new("Mbl01", "BMW 320i")
            .with_value("K1", 329.0)
            .with_value("K2", 2014.0)
            .with_value("K3", 1997.0)
            .with_value("K4", 6.0),
        Alternative::new("Mbl02", "Toyota Avanza")
            .with_value("K1", 150.0)
            .with_value("K2", 2017.0)
            .with_value("K3", 1329.0)
            .with_value("K4", 9.0),
        Alternative::new("Mbl03", "Honda Jazz")
            .with_value("K1", 185.0)
            .with_value("K2", 2016.0)
            .with_value("K3", 1497.0)
            .with_value("K4", 8.0),
        Alternative::new("Mbl04", "Daihatsu Xenia")
            .with_value("K1", 130.0)
            .with_value("K2", 2015.0)
            .with_value("K3", 1298.0)
            .with_value("K4", 8.0),
        Alternative::new("Mbl05", "Suzuki Ertiga")
            .with_value("K1", 160.0)
            .with_value("K2", 2018.0)
            .with_value("K3", 1462.0)
            .with_value("K4", 7.0),
    ]
}

fn service() -> (Arc<InMemoryRankingStore>, CalculationService) {
    let store = Arc::new(InMemoryRankingStore::new());
    (store.clone(), CalculationService::new(store))
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn complete_calculation_produces_consistent_ranking_and_batch() {
    let (store, service) = service();

    let outcome = service
        .calculate(&used_car_criteria(), &used_car_alternatives(), None)
        .await
        .unwrap();

    // Ranks form a permutation of 1..=5.
    let ranks: HashSet<usize> = outcome.alternatives.iter().map(|a| a.rank).collect();
    assert_eq!(ranks, (1..=5).collect::<HashSet<_>>());

    // Ranking is score-consistent.
    for a in &outcome.alternatives {
        for b in &outcome.alternatives {
            if a.preference_score > b.preference_score {
                assert!(a.rank < b.rank, "{} should outrank {}", a.code, b.code);
            }
        }
    }

    // Every alternative carries a full vector per criterion.
    for alternative in &outcome.alternatives {
        for code in ["K1", "K2", "K3", "K4"] {
            assert!(alternative.normalized_values.contains_key(code));
            assert!(alternative.weighted_values.contains_key(code));
        }
    }

    // The persisted batch matches the outcome, ordered by rank.
    let batch = store.current().await.unwrap().unwrap();
    assert_eq!(batch.generation, outcome.summary.generation);
    assert_eq!(batch.len(), 5);
    let batch_ranks: Vec<usize> = batch.records.iter().map(|r| r.rank).collect();
    assert_eq!(batch_ranks, [1, 2, 3, 4, 5]);
    assert_eq!(batch.best().unwrap().alternative_name, outcome.summary.best_alternative);

    // Top recommendations lead with the best alternative.
    assert_eq!(outcome.top_recommendations[0].rank, 1);
    assert_eq!(outcome.top_recommendations[0].name, outcome.summary.best_alternative);
}

#[tokio::test]
async fn repeated_calculations_are_deterministic_but_swap_generations() {
    let (store, service) = service();

    let first = service
        .calculate(&used_car_criteria(), &used_car_alternatives(), None)
        .await
        .unwrap();
    let second = service
        .calculate(&used_car_criteria(), &used_car_alternatives(), None)
        .await
        .unwrap();

    // Same inputs rank identically.
    for (a, b) in first.alternatives.iter().zip(&second.alternatives) {
        assert_eq!(a.code, b.code);
        assert_eq!(a.rank, b.rank);
        assert_eq!(a.preference_score, b.preference_score);
    }

    // But each run persists a fresh batch that replaces the previous one.
    assert_ne!(first.summary.generation, second.summary.generation);
    let batch = store.current().await.unwrap().unwrap();
    assert_eq!(batch.generation, second.summary.generation);
}

#[tokio::test]
async fn stakeholder_weights_replace_criterion_weights() {
    let (_, service) = service();

    let balanced = service
        .calculate(&used_car_criteria(), &used_car_alternatives(), None)
        .await
        .unwrap();

    // Stakeholders who care almost only about price, in criterion code order.
    let price_first = service
        .calculate(
            &used_car_criteria(),
            &used_car_alternatives(),
            Some(&[
                vec![97.0, 1.0, 1.0, 1.0],
                vec![91.0, 3.0, 3.0, 3.0],
            ]),
        )
        .await
        .unwrap();

    let weight_sum: f64 = price_first.criteria.iter().map(|c| c.weight).sum();
    assert!((weight_sum - 100.0).abs() < 1e-9);
    assert!(price_first.criteria[0].weight > 80.0, "price should dominate");

    // The cheapest car wins the price-dominated run.
    assert_eq!(price_first.summary.best_alternative, "Daihatsu Xenia");
    // The balanced run applied the configured criterion weights instead.
    assert!((balanced.criteria[0].weight - 35.0).abs() < 1e-9);
}

#[tokio::test]
async fn accuracy_flow_compares_persisted_ranking_with_reference() {
    let (_, service) = service();
    service
        .calculate(&used_car_criteria(), &used_car_alternatives(), None)
        .await
        .unwrap();

    // Reference ranking agrees on two of the top three positions.
    let user_ranking = vec![
        UserRankingEntry::new(0),
        UserRankingEntry::new(1),
        UserRankingEntry::new(3),
        UserRankingEntry::new(2),
        UserRankingEntry::new(4),
    ];

    let outcome = service.evaluate_accuracy(&user_ranking, Some(3)).await.unwrap();

    assert_eq!(outcome.top_n, 3);
    assert_eq!(outcome.report.true_positives, 2);
    assert_eq!(outcome.report.false_positives, 1);
    assert_eq!(outcome.report.false_negatives, 1);
    assert_eq!(outcome.report.true_negatives, 1);
    assert!((outcome.report.accuracy - 60.0).abs() < 1e-9);
    assert_eq!(outcome.system_top_n.len(), 3);
    assert_eq!(outcome.user_top_n.len(), 3);
}

#[tokio::test]
async fn accuracy_requires_a_prior_calculation() {
    let (_, service) = service();

    let result = service
        .evaluate_accuracy(&[UserRankingEntry::new(0)], Some(1))
        .await;

    assert!(matches!(result, Err(EngineError::NoRankings)));
}

#[tokio::test]
async fn summary_tracks_the_latest_run() {
    let (_, service) = service();

    assert!(service.summary().await.unwrap().is_none());

    let outcome = service
        .calculate(&used_car_criteria(), &used_car_alternatives(), None)
        .await
        .unwrap();
    let summary = service.summary().await.unwrap().unwrap();

    assert_eq!(summary.rankings_count, 5);
    assert_eq!(summary.generation, outcome.summary.generation);
    assert_eq!(
        summary.best_alternative.unwrap().name,
        outcome.summary.best_alternative
    );
}

#[tokio::test]
async fn missing_cell_fails_fast_before_any_persistence() {
    let (store, service) = service();

    let mut alternatives = used_car_alternatives();
    alternatives[2].values.remove("K3");

    let result = service
        .calculate(&used_car_criteria(), &alternatives, None)
        .await;

    match result {
        Err(EngineError::MissingValue { alternative, criterion }) => {
            assert_eq!(alternative, "Mbl03");
            assert_eq!(criterion, "K3");
        }
        other => panic!("Expected MissingValue, got {:?}", other),
    }
    assert!(store.current().await.unwrap().is_none());
}
