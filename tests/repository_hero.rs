mod common;

use hero_gate::domain::entities::{HeroPatch, NewHero};
use hero_gate::domain::repositories::HeroRepository;
use hero_gate::error::AppError;
use hero_gate::infrastructure::persistence::PgHeroRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn deadpond() -> NewHero {
    NewHero {
        name: "Deadpond".to_string(),
        secret_name: "Dive Wilson".to_string(),
        age: None,
        team_id: None,
    }
}

#[sqlx::test]
async fn test_create_hero(pool: PgPool) {
    let repo = PgHeroRepository::new(Arc::new(pool));

    let hero = repo.create(deadpond()).await.unwrap();

    assert!(hero.id > 0);
    assert_eq!(hero.name, "Deadpond");
    assert_eq!(hero.secret_name, "Dive Wilson");
    assert_eq!(hero.age, None);
    assert_eq!(hero.team_id, None);
}

#[sqlx::test]
async fn test_create_hero_with_missing_team(pool: PgPool) {
    let repo = PgHeroRepository::new(Arc::new(pool));

    let result = repo
        .create(NewHero {
            team_id: Some(999),
            ..deadpond()
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Constraint { .. }));
}

#[sqlx::test]
async fn test_find_by_id_with_team(pool: PgPool) {
    let team_id = common::create_test_team(&pool, "Preventers", "Sharp Tower").await;
    let hero_id =
        common::create_test_hero(&pool, "Rusty-Man", "Tommy Sharp", Some(48), Some(team_id)).await;
    let repo = PgHeroRepository::new(Arc::new(pool));

    let found = repo.find_by_id(hero_id).await.unwrap().unwrap();

    assert_eq!(found.hero.name, "Rusty-Man");
    let team = found.team.unwrap();
    assert_eq!(team.id, team_id);
    assert_eq!(team.headquarters, "Sharp Tower");
}

#[sqlx::test]
async fn test_find_by_id_without_team(pool: PgPool) {
    let hero_id = common::create_test_hero(&pool, "Deadpond", "Dive Wilson", None, None).await;
    let repo = PgHeroRepository::new(Arc::new(pool));

    let found = repo.find_by_id(hero_id).await.unwrap().unwrap();

    assert!(found.team.is_none());
}

#[sqlx::test]
async fn test_find_by_id_missing(pool: PgPool) {
    let repo = PgHeroRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(12345).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_orders_by_id_and_paginates(pool: PgPool) {
    for name in ["A", "B", "C", "D"] {
        common::create_test_hero(&pool, name, "secret", None, None).await;
    }
    let repo = PgHeroRepository::new(Arc::new(pool));

    let page = repo.list(1, 2).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].name, "B");
    assert_eq!(page[1].name, "C");
    assert!(page[0].id < page[1].id);

    assert!(repo.list(10, 2).await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_update_only_supplied_fields(pool: PgPool) {
    let hero_id = common::create_test_hero(&pool, "Deadpond", "Dive Wilson", None, None).await;
    let repo = PgHeroRepository::new(Arc::new(pool));

    let patch = HeroPatch {
        age: Some(Some(99)),
        ..Default::default()
    };
    let hero = repo.update(hero_id, patch).await.unwrap().unwrap();

    assert_eq!(hero.age, Some(99));
    assert_eq!(hero.name, "Deadpond");
    assert_eq!(hero.secret_name, "Dive Wilson");
}

#[sqlx::test]
async fn test_update_clears_nullable_fields(pool: PgPool) {
    let team_id = common::create_test_team(&pool, "Z-Force", "Sister Margaret's Bar").await;
    let hero_id =
        common::create_test_hero(&pool, "Deadpond", "Dive Wilson", Some(30), Some(team_id)).await;
    let repo = PgHeroRepository::new(Arc::new(pool));

    let patch = HeroPatch {
        age: Some(None),
        team_id: Some(None),
        ..Default::default()
    };
    let hero = repo.update(hero_id, patch).await.unwrap().unwrap();

    assert_eq!(hero.age, None);
    assert_eq!(hero.team_id, None);
}

#[sqlx::test]
async fn test_empty_update_returns_current_hero(pool: PgPool) {
    let hero_id = common::create_test_hero(&pool, "Deadpond", "Dive Wilson", Some(30), None).await;
    let repo = PgHeroRepository::new(Arc::new(pool));

    let hero = repo
        .update(hero_id, HeroPatch::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(hero.age, Some(30));
}

#[sqlx::test]
async fn test_update_missing_hero(pool: PgPool) {
    let repo = PgHeroRepository::new(Arc::new(pool));

    let result = repo.update(777, HeroPatch::default()).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test]
async fn test_delete_hero(pool: PgPool) {
    let hero_id = common::create_test_hero(&pool, "Deadpond", "Dive Wilson", None, None).await;
    let repo = PgHeroRepository::new(Arc::new(pool));

    assert_eq!(repo.delete(hero_id).await.unwrap(), 1);
    assert_eq!(repo.delete(hero_id).await.unwrap(), 0);
    assert!(repo.find_by_id(hero_id).await.unwrap().is_none());
}
