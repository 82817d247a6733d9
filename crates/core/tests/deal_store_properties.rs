//! Behavioural properties of `DealStore` over a mock repository.

mod support;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use dealdesk_core::{validate_create_deal, DealStore};
use dealdesk_domain::{DealAmount, DealId, DealStage};
use support::fixtures::deal_input;
use support::repositories::MockDealRepository;

fn store() -> (DealStore, MockDealRepository) {
    let repo = MockDealRepository::new();
    (DealStore::new(Arc::new(repo.clone())), repo)
}

#[tokio::test]
async fn created_deals_get_distinct_ids() {
    let (store, _) = store();

    let mut ids = HashSet::new();
    for i in 0..50 {
        let deal = store.create_deal(deal_input("Acme", i + 1)).await.unwrap();
        assert!(ids.insert(deal.id), "duplicate id {}", deal.id);
    }
    assert_eq!(store.list_deals().await.unwrap().len(), 50);
}

#[tokio::test]
async fn create_copies_input_and_get_returns_it() {
    let (store, repo) = store();
    let input = deal_input("Acme Corporation", 125_000);

    let created = store.create_deal(input.clone()).await.unwrap();

    assert_eq!(created.client_name, input.client_name);
    assert_eq!(created.contact_email, input.contact_email);
    assert_eq!(created.iban, input.iban);
    assert_eq!(created.deal_amount, input.deal_amount);
    assert_eq!(created.marketing_services, input.marketing_services);
    assert_eq!(store.get_deal(&created.id).await.unwrap(), Some(created.clone()));
    assert_eq!(repo.stored(), vec![created]);
}

#[tokio::test]
async fn get_unknown_deal_is_none() {
    let (store, _) = store();
    store.create_deal(deal_input("Acme", 1)).await.unwrap();

    assert_eq!(store.get_deal(&DealId::new()).await.unwrap(), None);
}

#[tokio::test]
async fn update_stage_changes_only_the_stage() {
    let (store, _) = store();
    let created = store.create_deal(deal_input("Acme", 100)).await.unwrap();

    assert!(store.update_stage(&created.id, DealStage::Finished).await.unwrap());

    let fetched = store.get_deal(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched.stage, DealStage::Finished);
    assert_eq!(fetched, deal_with_stage(created, DealStage::Finished));
}

#[tokio::test]
async fn finished_deals_can_move_back() {
    let (store, _) = store();
    let created = store.create_deal(deal_input("Acme", 100)).await.unwrap();

    store.update_stage(&created.id, DealStage::Finished).await.unwrap();
    assert!(store.update_stage(&created.id, DealStage::FinancialDepartment).await.unwrap());

    let fetched = store.get_deal(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched.stage, DealStage::FinancialDepartment);
}

#[tokio::test]
async fn update_unknown_deal_returns_false_and_changes_nothing() {
    let (store, _) = store();
    store.create_deal(deal_input("Acme", 100)).await.unwrap();
    store.create_deal(deal_input("Globex", 7)).await.unwrap();
    let before = store.list_deals().await.unwrap();

    let updated = store.update_stage(&DealId::new(), DealStage::Finished).await.unwrap();

    assert!(!updated);
    assert_eq!(store.list_deals().await.unwrap(), before);
}

#[tokio::test]
async fn client_aggregate_matches_manual_grouping() {
    let (store, _) = store();
    let inputs = [("Acme", 100), ("Globex", 20), ("Acme", 50), ("acme", 3), ("Initech", 9)];
    for (client, amount) in inputs {
        store.create_deal(deal_input(client, amount)).await.unwrap();
    }

    let aggregates = store.list_clients_aggregate().await.unwrap();

    let mut expected: HashMap<&str, (usize, u32)> = HashMap::new();
    for (client, amount) in inputs {
        let entry = expected.entry(client).or_default();
        entry.0 += 1;
        entry.1 += amount;
    }
    assert_eq!(aggregates.len(), expected.len());
    for aggregate in &aggregates {
        let (count, sum) = expected[aggregate.name.as_str()];
        assert_eq!(aggregate.total_deals, count);
        assert_eq!(aggregate.total_amount, DealAmount::from(sum));
    }
    let names: Vec<&str> = aggregates.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Acme", "Globex", "acme", "Initech"]);
}

#[tokio::test]
async fn acme_deals_aggregate_to_one_client() {
    let (store, _) = store();
    store.create_deal(deal_input("Acme", 100)).await.unwrap();
    store.create_deal(deal_input("Acme", 50)).await.unwrap();

    let aggregates = store.list_clients_aggregate().await.unwrap();

    assert_eq!(aggregates.len(), 1);
    assert_eq!(aggregates[0].name, "Acme");
    assert_eq!(aggregates[0].total_deals, 2);
    assert_eq!(aggregates[0].total_amount, DealAmount::from(150));
}

#[tokio::test]
async fn deals_for_client_is_exact_subset() {
    let (store, _) = store();
    for (client, amount) in [("Acme", 1), ("Acme Corp", 2), ("Acme", 3), ("ACME", 4)] {
        store.create_deal(deal_input(client, amount)).await.unwrap();
    }

    let all = store.list_deals().await.unwrap();
    let acme = store.list_deals_for_client("Acme").await.unwrap();

    let expected: Vec<_> = all.into_iter().filter(|d| d.client_name == "Acme").collect();
    assert_eq!(acme, expected);
    assert_eq!(acme.len(), 2);
    assert!(store.list_deals_for_client("Umbrella").await.unwrap().is_empty());
}

#[tokio::test]
async fn zero_amount_is_stored_but_fails_validation() {
    let (store, _) = store();
    let input = deal_input("Acme", 0);

    assert!(validate_create_deal(&input).unwrap_err().has_field("dealAmount"));

    let created = store.create_deal(input).await.unwrap();
    assert_eq!(created.deal_amount, DealAmount::ZERO);
    assert_eq!(store.get_deal(&created.id).await.unwrap(), Some(created));
}

#[tokio::test]
async fn client_summary_reports_paid_total() {
    let (store, _) = store();
    let first = store.create_deal(deal_input("Acme", 100)).await.unwrap();
    store.create_deal(deal_input("Acme", 50)).await.unwrap();
    store.update_stage(&first.id, DealStage::Finished).await.unwrap();

    let summary = store.client_summary("Acme").await.unwrap().unwrap();

    assert_eq!(summary.total_deals, 2);
    assert_eq!(summary.total_amount, DealAmount::from(150));
    assert_eq!(summary.finished_deals, 1);
    assert_eq!(summary.total_paid, DealAmount::from(100));
    assert!(store.client_summary("Globex").await.unwrap().is_none());
}

#[tokio::test]
async fn pipeline_summary_follows_stage_updates() {
    let (store, _) = store();
    let a = store.create_deal(deal_input("Acme", 100)).await.unwrap();
    store.create_deal(deal_input("Globex", 30)).await.unwrap();
    store.update_stage(&a.id, DealStage::TechnicalDepartment).await.unwrap();

    let summary = store.pipeline_summary().await.unwrap();

    assert_eq!(summary.total_deals, 2);
    assert_eq!(summary.total_amount, DealAmount::from(130));
    let by_stage: HashMap<DealStage, (usize, DealAmount)> =
        summary.stages.iter().map(|s| (s.stage, (s.deals, s.amount))).collect();
    assert_eq!(by_stage[&DealStage::FinancialDepartment], (1, DealAmount::from(30)));
    assert_eq!(by_stage[&DealStage::TechnicalDepartment], (1, DealAmount::from(100)));
    assert_eq!(by_stage[&DealStage::Finished], (0, DealAmount::ZERO));
}

#[tokio::test]
async fn health_check_surfaces_repository_failure() {
    let store = DealStore::new(Arc::new(MockDealRepository::unhealthy()));
    assert!(store.health_check().await.is_err());

    let (healthy, _) = self::store();
    assert!(healthy.health_check().await.is_ok());
}

fn deal_with_stage(mut deal: dealdesk_domain::Deal, stage: DealStage) -> dealdesk_domain::Deal {
    deal.stage = stage;
    deal
}
