//! Test harnesses for integration testing.
//!
//! `TestHarness` wires the in-memory store into `ServerDeps` and the HTTP
//! router, so most tests need no external services. `PostgresHarness` shares
//! one Postgres container across every test in a binary; containers and
//! migrations are initialized once on first use, then reused.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use skillswap_core::common::MemberId;
use skillswap_core::config::{SkillDefaults, SwapDefaults};
use skillswap_core::domains::auth::JwtService;
use skillswap_core::kernel::test_dependencies::{TEST_JWT_ISSUER, TEST_JWT_SECRET};
use skillswap_core::kernel::{InMemoryStore, ServerDeps, TestDependencies};
use skillswap_core::server::build_app;
use sqlx::PgPool;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;
use tower::ServiceExt;

/// Respect RUST_LOG in tests. Run with: RUST_LOG=debug cargo test -- --nocapture
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// In-memory dependencies plus the router built on them.
pub struct TestHarness {
    pub deps: ServerDeps,
    /// Same records the deps point at, for fixtures and assertions
    pub store: InMemoryStore,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with(TestDependencies::new())
    }

    pub fn with(test_deps: TestDependencies) -> Self {
        init_tracing();
        let store = test_deps.store.clone();
        Self {
            deps: test_deps.into_server_deps(),
            store,
        }
    }

    pub fn router(&self) -> Router {
        build_app(self.deps.clone(), &[])
    }

    pub fn token_for(&self, member_id: MemberId) -> String {
        self.deps
            .jwt_service
            .create_token(member_id)
            .expect("Failed to create test token")
    }

    /// Drive one request through the router and decode the JSON body.
    ///
    /// Empty response bodies decode as `Value::Null`.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router()
            .oneshot(request)
            .await
            .expect("Router call failed");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared Postgres container that persists across all tests in a binary.
struct SharedPostgres {
    db_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

static SHARED_POSTGRES: OnceCell<SharedPostgres> = OnceCell::const_new();

impl SharedPostgres {
    async fn init() -> Result<Self> {
        init_tracing();

        let postgres = Postgres::default()
            .with_tag("16")
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let host = postgres.get_host().await?;
        let port = postgres.get_host_port_ipv4(5432).await?;
        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let pool = PgPool::connect(&db_url)
            .await
            .context("Failed to connect to Postgres for migrations")?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self {
            db_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_POSTGRES
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared Postgres container")
            })
            .await
    }
}

/// Postgres-backed dependencies. Requires Docker.
pub struct PostgresHarness {
    pub pool: PgPool,
    pub deps: ServerDeps,
}

impl PostgresHarness {
    pub async fn new() -> Result<Self> {
        let infra = SharedPostgres::get().await;
        let pool = PgPool::connect(&infra.db_url)
            .await
            .context("Failed to connect to test database")?;

        let deps = ServerDeps::postgres(
            pool.clone(),
            Arc::new(JwtService::new(TEST_JWT_SECRET, TEST_JWT_ISSUER.to_string())),
            SwapDefaults::default(),
            SkillDefaults::default(),
        );

        Ok(Self { pool, deps })
    }
}
