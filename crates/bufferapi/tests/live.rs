//! Live tests against the real Buffer API.
//!
//! Ignored by default. Run with a real token in the environment (or `.env`):
//!
//! ```text
//! BUFFER_ACCESS_TOKEN=... cargo test -p bufferapi --test live -- --ignored
//! ```
//!
//! `live_create_and_destroy_update` queues a real post on the first connected
//! profile and deletes it again before returning.

use bufferapi::{BufferClient, NewUpdate};
use bufferapi_core::load_client_config;
use tracing_subscriber::EnvFilter;

fn live_client() -> BufferClient {
    let config = load_client_config().expect("BUFFER_ACCESS_TOKEN must be set for live tests");

    // Several tests may race to install the subscriber; only the first wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_test_writer()
        .try_init();

    BufferClient::from_config(&config).expect("client construction should not fail")
}

#[tokio::test]
#[ignore = "hits the real Buffer API; needs BUFFER_ACCESS_TOKEN"]
async fn live_profiles_lists_connected_accounts() {
    let client = live_client();
    let profiles = client.profiles().await.expect("profiles should load");
    assert!(
        profiles.iter().all(|p| !p.id.is_empty()),
        "every profile should carry an id"
    );
}

#[tokio::test]
#[ignore = "hits the real Buffer API; needs BUFFER_ACCESS_TOKEN"]
async fn live_pending_updates_for_first_profile() {
    let client = live_client();
    let profiles = client.profiles().await.expect("profiles should load");
    let Some(first) = profiles.first() else {
        return;
    };

    client
        .get(&format!("profiles/{}/updates/pending", first.id))
        .await
        .expect("pending updates should load");
}

#[tokio::test]
#[ignore = "hits the real Buffer API; needs BUFFER_ACCESS_TOKEN"]
async fn live_create_and_destroy_update() {
    let client = live_client();
    let profiles = client.profiles().await.expect("profiles should load");
    let first = profiles.first().expect("account needs at least one profile");

    let stamp = chrono::Utc::now().timestamp_millis();
    let update = NewUpdate::new(format!("Test Update {stamp}"), [first.id.clone()])
        .media("link", "https://buffer.com");
    let resp = client
        .create_update(&update)
        .await
        .expect("update should be created");

    let created = resp.last_update().expect("response should list the update");
    client
        .destroy_update(&created.id)
        .await
        .expect("update should be destroyed");
}
