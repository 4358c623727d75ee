//! Runs against a real PostgreSQL only when `TEST_DATABASE_URL` is set; each test
//! works in its own schema and drops it afterwards.

use devgraph::{connect, ensure_developers_table, AppError, DeveloperInput, DeveloperRepository, PgDeveloperRepository, Settings};
use sqlx::PgPool;
use std::time::{SystemTime, UNIX_EPOCH};

struct Harness {
    pool: PgPool,
    schema: String,
    repository: PgDeveloperRepository,
}

impl Harness {
    async fn start(label: &str) -> Option<Self> {
        let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
            eprintln!("TEST_DATABASE_URL not set; skipping {label}");
            return None;
        };
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();
        let schema = format!("devgraph_{}_{}_{}", label, std::process::id(), nanos);
        let settings = Settings::from_lookup(|key| match key {
            "DATABASE_URL" => Some(url.clone()),
            "DATABASE_SCHEMA" => Some(schema.clone()),
            "DATABASE_MAX_CONNECTIONS" => Some("2".into()),
            _ => None,
        })
        .expect("valid test settings");
        let pool = connect(&settings).await.expect("failed to connect");
        ensure_developers_table(&pool, &settings.table).await.expect("failed to create table");
        let repository = PgDeveloperRepository::new(pool.clone(), settings.table.clone());
        Some(Harness { pool, schema, repository })
    }

    async fn finish(self) {
        sqlx::query(&format!("DROP SCHEMA \"{}\" CASCADE", self.schema))
            .execute(&self.pool)
            .await
            .expect("failed to drop test schema");
    }
}

fn ada() -> DeveloperInput {
    DeveloperInput {
        first_name: Some("Ada".into()),
        last_name: Some("Lovelace".into()),
        stack: Some(vec!["go".into()]),
        ..Default::default()
    }
}

#[tokio::test]
async fn create_assigns_fresh_ids_and_round_trips() {
    let Some(h) = Harness::start("create").await else { return };

    let mut input = ada();
    input.id = Some(500);
    let first = h.repository.create(input).await.expect("create");
    let second = h.repository.create(ada()).await.expect("create");
    assert_ne!(first.id, 0);
    assert_ne!(first.id, 500);
    assert_ne!(first.id, second.id);
    assert_eq!(first.github_url, "");
    assert_eq!(first.stack, vec!["go".to_string()]);

    let fetched = h.repository.get_by_id(first.id).await.expect("get_by_id");
    assert_eq!(fetched, first);

    let all = h.repository.get_all().await.expect("get_all");
    assert_eq!(all, vec![first, second]);

    h.finish().await;
}

#[tokio::test]
async fn update_touches_only_present_columns() {
    let Some(h) = Harness::start("update").await else { return };

    let created = h.repository.create(ada()).await.expect("create");
    let updated = h
        .repository
        .update(DeveloperInput {
            id: Some(created.id),
            first_name: Some("Augusta".into()),
            ..Default::default()
        })
        .await
        .expect("update");
    assert_eq!(updated.first_name, "Augusta");
    assert_eq!(updated.last_name, created.last_name);
    assert_eq!(updated.stack, created.stack);
    assert_eq!(h.repository.get_by_id(created.id).await.expect("get_by_id"), updated);

    let updated = h
        .repository
        .update(DeveloperInput {
            id: Some(created.id),
            stack: Some(vec!["rust".into(), "sql".into()]),
            github_url: Some("https://github.com/ada".into()),
            ..Default::default()
        })
        .await
        .expect("update");
    assert_eq!(updated.stack, vec!["rust".to_string(), "sql".to_string()]);
    assert_eq!(updated.github_url, "https://github.com/ada");
    assert_eq!(updated.first_name, "Augusta");

    h.finish().await;
}

#[tokio::test]
async fn rejected_updates_leave_the_row_alone() {
    let Some(h) = Harness::start("rejected").await else { return };

    let created = h.repository.create(ada()).await.expect("create");

    let err = h
        .repository
        .update(DeveloperInput {
            id: Some(created.id),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = h
        .repository
        .update(DeveloperInput {
            first_name: Some("Nobody".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert_eq!(h.repository.get_by_id(created.id).await.expect("get_by_id"), created);

    h.finish().await;
}

#[tokio::test]
async fn missing_rows() {
    let Some(h) = Harness::start("missing").await else { return };

    assert!(h.repository.get_all().await.expect("get_all").is_empty());

    let err = h.repository.get_by_id(42).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = h
        .repository
        .update(DeveloperInput {
            id: Some(42),
            last_name: Some("Byron".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Storage(sqlx::Error::RowNotFound)));

    h.finish().await;
}

#[tokio::test]
async fn values_are_stored_verbatim() {
    let Some(h) = Harness::start("verbatim").await else { return };

    let hostile = "Robert'); DROP TABLE developers; --".to_string();
    let created = h
        .repository
        .create(DeveloperInput {
            first_name: Some(hostile.clone()),
            last_name: Some("Tables".into()),
            stack: Some(vec!["{a,b}".into(), "\"quoted\"".into()]),
            ..Default::default()
        })
        .await
        .expect("create");
    assert_eq!(created.first_name, hostile);
    assert_eq!(created.stack, vec!["{a,b}".to_string(), "\"quoted\"".to_string()]);
    h.repository.ping().await.expect("ping");

    h.finish().await;
}
