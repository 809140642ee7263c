mod common;

use chrono::{TimeZone, Utc};
use hero_gate::domain::entities::{GateEntry, GateEntryPatch, GateStatus, NewGateEntry};
use hero_gate::domain::repositories::GateEntryRepository;
use hero_gate::error::AppError;
use hero_gate::infrastructure::persistence::PgGateEntryRepository;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

fn new_entry(plate: &str) -> NewGateEntry {
    NewGateEntry {
        site_id: 1,
        vehicle_license_plate: plate.to_string(),
        ..Default::default()
    }
}

#[sqlx::test]
async fn test_create_defaults(pool: PgPool) {
    let repo = PgGateEntryRepository::new(Arc::new(pool));

    let entry = repo.create(new_entry("51A12345")).await.unwrap();

    assert_eq!(entry.status, GateStatus::Released);
    assert_eq!(entry.register_dstamp, entry.entry_dstamp);
    assert!(entry.linein_dstamp.is_none());
    assert_ne!(entry.uuid, Uuid::nil());
}

#[sqlx::test]
async fn test_create_keeps_supplied_timestamps(pool: PgPool) {
    let repo = PgGateEntryRepository::new(Arc::new(pool));
    let registered = Utc.with_ymd_and_hms(2024, 1, 31, 8, 0, 0).unwrap();

    let entry = repo
        .create(NewGateEntry {
            register_dstamp: Some(registered),
            driver_id: Some("D-001".to_string()),
            route_id: Some(4),
            ..new_entry("51A12345")
        })
        .await
        .unwrap();

    assert_eq!(entry.register_dstamp, registered);
    assert_eq!(entry.driver_id.as_deref(), Some("D-001"));
    assert_eq!(entry.route_id, Some(4));
}

#[sqlx::test]
async fn test_create_generates_distinct_uuids(pool: PgPool) {
    let repo = PgGateEntryRepository::new(Arc::new(pool));

    let a = repo.create(new_entry("AAA")).await.unwrap();
    let b = repo.create(new_entry("AAA")).await.unwrap();

    assert_ne!(a.uuid, b.uuid);
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let uuid = common::create_test_gate_entry(&pool, 3, "30F99999").await;
    let repo = PgGateEntryRepository::new(Arc::new(pool));

    let entry = repo.find_by_id(uuid).await.unwrap().unwrap();
    assert_eq!(entry.site_id, 3);
    assert_eq!(entry.vehicle_license_plate, "30F99999");

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_search_by_plate_substring(pool: PgPool) {
    common::create_test_gate_entry(&pool, 1, "51ABC123").await;
    common::create_test_gate_entry(&pool, 1, "ABC").await;
    common::create_test_gate_entry(&pool, 1, "51XYZ999").await;
    let repo = PgGateEntryRepository::new(Arc::new(pool));

    let found = repo.search_by_plate("ABC").await.unwrap();

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|e| e.vehicle_license_plate.contains("ABC")));
}

#[sqlx::test]
async fn test_search_by_plate_is_case_sensitive(pool: PgPool) {
    common::create_test_gate_entry(&pool, 1, "51ABC123").await;
    let repo = PgGateEntryRepository::new(Arc::new(pool));

    assert!(repo.search_by_plate("abc").await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_search_by_plate_treats_wildcards_literally(pool: PgPool) {
    common::create_test_gate_entry(&pool, 1, "51ABC123").await;
    common::create_test_gate_entry(&pool, 1, "50%OFF").await;
    let repo = PgGateEntryRepository::new(Arc::new(pool));

    let found = repo.search_by_plate("%").await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].vehicle_license_plate, "50%OFF");
}

#[sqlx::test]
async fn test_search_with_empty_filter_matches_all(pool: PgPool) {
    common::create_test_gate_entry(&pool, 1, "A1").await;
    common::create_test_gate_entry(&pool, 2, "B2").await;
    let repo = PgGateEntryRepository::new(Arc::new(pool));

    assert_eq!(repo.search_by_plate("").await.unwrap().len(), 2);
}

#[sqlx::test]
async fn test_list_paginates(pool: PgPool) {
    for plate in ["P1", "P2", "P3"] {
        common::create_test_gate_entry(&pool, 1, plate).await;
    }
    let repo = PgGateEntryRepository::new(Arc::new(pool));

    assert_eq!(repo.list(0, 2).await.unwrap().len(), 2);
    assert_eq!(repo.list(2, 2).await.unwrap().len(), 1);
}

#[sqlx::test]
async fn test_update_sets_and_clears_fields(pool: PgPool) {
    let repo = PgGateEntryRepository::new(Arc::new(pool));
    let created = repo
        .create(NewGateEntry {
            driver_id: Some("D-001".to_string()),
            ..new_entry("51A12345")
        })
        .await
        .unwrap();

    let patch = GateEntryPatch {
        driver_id: Some(None),
        phone_no: Some(Some("0901234567".to_string())),
        ..Default::default()
    };
    let updated = repo.update(created.uuid, patch).await.unwrap().unwrap();

    assert_eq!(updated.driver_id, None);
    assert_eq!(updated.phone_no.as_deref(), Some("0901234567"));
    assert_eq!(updated.vehicle_license_plate, "51A12345");
    assert_eq!(updated.register_dstamp, created.register_dstamp);
}

#[sqlx::test]
async fn test_update_missing_entry(pool: PgPool) {
    let repo = PgGateEntryRepository::new(Arc::new(pool));

    let result = repo
        .update(Uuid::new_v4(), GateEntryPatch::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test]
async fn test_complete_is_idempotent(pool: PgPool) {
    let uuid = common::create_test_gate_entry(&pool, 1, "51A12345").await;
    let repo = PgGateEntryRepository::new(Arc::new(pool.clone()));

    let first = repo.complete(uuid).await.unwrap().unwrap();
    let second = repo.complete(uuid).await.unwrap().unwrap();

    assert_eq!(first.status, GateStatus::Completed);
    assert_eq!(second.status, GateStatus::Completed);
    assert_eq!(common::gate_entry_status(&pool, uuid).await, 9);
}

#[sqlx::test]
async fn test_complete_changes_only_status(pool: PgPool) {
    let repo = PgGateEntryRepository::new(Arc::new(pool));

    let created = repo
        .create(NewGateEntry {
            site_id: 3,
            vehicle_license_plate: "51A12345".to_string(),
            driver_id: Some("D-001".to_string()),
            linein_dstamp: Some(Utc.with_ymd_and_hms(2024, 1, 31, 9, 15, 0).unwrap()),
            plan_entry_time: Some("0830".to_string()),
            route_id: Some(4),
            phone_no: Some("0901234567".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let original = repo.find_by_id(created.uuid).await.unwrap().unwrap();
    assert_eq!(original, created);

    repo.complete(original.uuid).await.unwrap().unwrap();
    let second = repo.complete(original.uuid).await.unwrap().unwrap();

    let expected = GateEntry {
        status: GateStatus::Completed,
        ..original.clone()
    };
    assert_eq!(second, expected);
    assert_eq!(repo.find_by_id(original.uuid).await.unwrap().unwrap(), expected);
}

#[sqlx::test]
async fn test_complete_missing_entry(pool: PgPool) {
    let repo = PgGateEntryRepository::new(Arc::new(pool));

    assert!(repo.complete(Uuid::new_v4()).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_update_rejects_reopening(pool: PgPool) {
    let uuid = common::create_completed_gate_entry(&pool, 1, "51A12345").await;
    let repo = PgGateEntryRepository::new(Arc::new(pool.clone()));

    let patch = GateEntryPatch {
        status: Some(GateStatus::Released),
        route_id: Some(Some(7)),
        ..Default::default()
    };
    let result = repo.update(uuid, patch).await;

    assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));

    let entry = repo.find_by_id(uuid).await.unwrap().unwrap();
    assert_eq!(entry.status, GateStatus::Completed);
    assert_eq!(entry.route_id, None);
}

#[sqlx::test]
async fn test_update_completed_entry_keeps_completed(pool: PgPool) {
    let uuid = common::create_completed_gate_entry(&pool, 1, "51A12345").await;
    let repo = PgGateEntryRepository::new(Arc::new(pool));

    let patch = GateEntryPatch {
        status: Some(GateStatus::Completed),
        linein_dstamp: Some(Some(Utc.with_ymd_and_hms(2024, 2, 1, 9, 30, 0).unwrap())),
        ..Default::default()
    };
    let entry = repo.update(uuid, patch).await.unwrap().unwrap();

    assert_eq!(entry.status, GateStatus::Completed);
    assert!(entry.linein_dstamp.is_some());
}
