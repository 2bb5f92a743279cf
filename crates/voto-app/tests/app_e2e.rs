//! End-to-end tests for the application builder.
//!
//! Tests the complete flow: config sources → mode selection → session
//! restoration → the running event pump.

use std::time::Duration;
use tempfile::TempDir;
use voto_app::{
    Action, AuthError, ConfigLoader, ConfigResolver, ResourceKind, Role, VotoApp, VotoConfig,
};
use voto_runtime::datastore::{InMemoryDatastore, ProfileRecord};
use voto_runtime::testing::StubProvider;
use voto_types::{Identity, ProfileId};

fn test_identity() -> Identity {
    Identity::new(ProfileId::new(), "ana@example.com")
}

fn profile_row(identity: &Identity, name: &str, role: &str) -> serde_json::Value {
    serde_json::json!({
        "id": identity.id.uuid().to_string(),
        "name": name,
        "role": role,
    })
}

/// A deterministic loader: defaults only, no files, no env.
fn isolated_loader() -> ConfigLoader {
    ConfigLoader::new()
        .skip_global_config()
        .skip_project_config()
        .skip_env_vars()
}

/// Resolver standing in for embedder flags that configure the backend.
struct TestConnection;

impl ConfigResolver for TestConnection {
    fn apply(&self, config: &mut VotoConfig) {
        config.connection.base_url = "https://voto.test".into();
        config.connection.api_key = "test-key".into();
    }
}

/// Test the unconfigured path: the app comes up in demo mode
#[tokio::test]
async fn unconfigured_build_starts_in_demo_mode() {
    let provider = StubProvider::new();
    let app = VotoApp::builder(provider.clone(), InMemoryDatastore::new())
        .with_config_loader(isolated_loader())
        .build()
        .await
        .expect("unconfigured build should succeed");

    assert!(app.mode().is_demo());
    assert!(app.current_session().is_anonymous());
    assert_eq!(app.effective_role(), Role::Visitor);

    // Sign-in fails fast and classified; the provider is never called
    let err = app
        .sign_in("ana@example.com", "s3cret")
        .await
        .expect_err("demo mode should reject sign-in");
    assert!(err.to_string().contains("demo mode"));
    assert!(provider.was_untouched());

    // Without a profile every scope is the restrictive one
    for kind in ResourceKind::ALL {
        assert!(!app.scope(kind).allows(Action::Create));
    }

    app.shutdown();
}

/// Test the configured path: project config selects production mode and
/// restoration finds the stored profile
#[tokio::test]
async fn configured_build_restores_the_session() {
    let project = TempDir::new().expect("should create project dir");
    let voto_dir = project.path().join(".voto");
    std::fs::create_dir_all(&voto_dir).expect("should create .voto dir");
    std::fs::write(
        voto_dir.join("config.toml"),
        r#"
[connection]
base_url = "https://voto.example.com"
api_key = "project-key"

[timeouts]
sign_in_secs = 5

[textgen]
temperature = 0.9
"#,
    )
    .expect("should write project config");

    let identity = test_identity();
    let provider = StubProvider::new();
    provider.set_current_identity(Some(identity.clone()));

    let datastore = InMemoryDatastore::new();
    datastore.seed(ProfileRecord::COLLECTION, vec![profile_row(&identity, "Ana", "leader")]);

    let app = VotoApp::builder(provider, datastore)
        .with_config_loader(
            ConfigLoader::new()
                .with_project_root(project.path())
                .skip_global_config()
                .skip_env_vars(),
        )
        .build()
        .await
        .expect("configured build should succeed");

    assert!(app.mode().is_production());
    assert_eq!(app.config().timeouts.sign_in_secs, 5);

    let session = app.current_session();
    assert!(session.is_authenticated());
    assert_eq!(app.effective_role(), Role::Leader);

    // The leader scope comes straight from the policy table
    let scope = app.scope(ResourceKind::Territory);
    assert!(scope.allows(Action::Update));
    assert!(!scope.allows(Action::Create));

    // Generation parameters pick up the configured override
    let params = app.generation_params();
    assert!((params.temperature - 0.9).abs() < f32::EPSILON);
    assert_eq!(params.max_output_tokens, 1024);

    app.shutdown();
}

/// Test a full sign-in through the pump the builder spawned
#[tokio::test]
async fn sign_in_flows_through_the_running_pump() {
    let provider = StubProvider::new();
    let app = VotoApp::builder(provider.clone(), InMemoryDatastore::new())
        .with_config_loader(isolated_loader())
        .with_resolver(TestConnection)
        .build()
        .await
        .expect("resolver-configured build should succeed");

    assert!(app.mode().is_production());
    assert!(app.current_session().is_anonymous());

    let mut changes = app.subscribe();
    provider.script_sign_in(Ok(test_identity()));

    app.sign_in("ana@example.com", "s3cret")
        .await
        .expect("scripted sign-in should be accepted");

    let signed_in = tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            let change = changes.recv().await.expect("change channel should stay open");
            if change.is_sign_in() {
                return change;
            }
        }
    })
    .await
    .expect("should observe the sign-in change in time");

    // First-seen identity: the profile was synthesized as a voter
    assert_eq!(
        signed_in.session().profile().map(|p| p.role),
        Some(Role::Voter)
    );
    assert_eq!(app.effective_role(), Role::Voter);
    assert!(app.health().await.is_healthy());

    app.shutdown();
}

/// Test that rejected credentials surface as a classified AppError
#[tokio::test]
async fn rejected_sign_in_keeps_the_classified_error() {
    let provider = StubProvider::new();
    provider.script_sign_in(Err(voto_runtime::ProviderError::new(
        "Invalid login credentials",
    )));

    let app = VotoApp::builder(provider, InMemoryDatastore::new())
        .with_config_loader(isolated_loader())
        .with_resolver(TestConnection)
        .build()
        .await
        .expect("build should succeed");

    let err = app
        .sign_in("ana@example.com", "wrong")
        .await
        .expect_err("rejected credentials should fail");
    assert!(matches!(
        err,
        voto_app::AppError::Auth(AuthError::InvalidCredentials)
    ));

    let session = app.current_session();
    assert!(session.is_anonymous());
    assert_eq!(session.last_error(), Some("invalid credentials"));

    app.clear_last_error();
    assert!(app.current_session().last_error().is_none());

    app.shutdown();
}

/// Test that shutdown stops the event pump
#[tokio::test]
async fn shutdown_stops_the_event_pump() {
    let provider = StubProvider::new();
    let app = VotoApp::builder(provider.clone(), InMemoryDatastore::new())
        .with_config_loader(isolated_loader())
        .with_resolver(TestConnection)
        .build()
        .await
        .expect("build should succeed");

    let store = app.session_store().clone();
    app.shutdown();

    // Events emitted after shutdown are no longer applied
    provider.emit(voto_app::AuthEvent::signed_in(test_identity()));
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(store.current_session().is_anonymous());
}
