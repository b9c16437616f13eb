//! # RPC Configuration
//!
//! Bootstraps the connection to the node: reads the RPC settings, then
//! probes the node. Results land in [`AppState`]; the readiness gate only
//! triggers the fetch and never sees its outcome. Failures are not retried.

use dioxus::prelude::*;

use defi_shell::ConfigFetcher;

use crate::api::{ApiResult, BlockchainInfo, RpcClient};
use crate::config::Config;
use crate::state::AppState;

/// Node lifecycle fields written by the bootstrap.
pub trait NodeLifecycle {
    /// The fetch started; any previous node error is cleared.
    fn fetch_started(&mut self);
    /// The node answered its probe.
    fn probe_succeeded(&mut self, info: BlockchainInfo);
    /// The configuration could not be read or the node did not answer.
    fn probe_failed(&mut self, error: String);
    /// The fetch is over, whatever its outcome.
    fn fetch_finished(&mut self);
}

impl NodeLifecycle for AppState {
    fn fetch_started(&mut self) {
        self.is_fetching.set(true);
        self.node_error.set(String::new());
    }

    fn probe_succeeded(&mut self, info: BlockchainInfo) {
        self.mark_running(info);
    }

    fn probe_failed(&mut self, error: String) {
        self.mark_failed(error);
    }

    fn fetch_finished(&mut self) {
        self.is_fetching.set(false);
    }
}

/// Configuration fetch collaborator handed to the readiness gate.
#[derive(Clone, Copy)]
pub struct RpcConfiguration {
    state: AppState,
}

impl RpcConfiguration {
    /// Creates a collaborator writing into `state`.
    #[must_use]
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl ConfigFetcher for RpcConfiguration {
    fn request_configs(&self) {
        let mut state = self.state;
        let config = state.config.peek().clone();
        spawn(async move {
            fetch_and_probe(&mut state, &config).await;
        });
    }
}

/// Resolves the RPC settings and asks the node for its chain state.
///
/// # Errors
///
/// Returns the configuration or RPC error that stopped the probe.
pub async fn probe_node(config: &Config) -> ApiResult<BlockchainInfo> {
    let configs = config.rpc_configs()?;
    let client = RpcClient::from_configs(&configs)?;
    tracing::info!(endpoint = client.endpoint(), "Probing node");
    client.get_blockchain_info().await
}

/// Runs one fetch, reporting its progress to `lifecycle`.
pub async fn fetch_and_probe<L: NodeLifecycle>(lifecycle: &mut L, config: &Config) {
    lifecycle.fetch_started();

    match probe_node(config).await {
        Ok(info) => {
            tracing::info!(chain = %info.chain, blocks = info.blocks, "Node is running");
            lifecycle.probe_succeeded(info);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Node is not reachable");
            lifecycle.probe_failed(e.to_string());
        }
    }

    lifecycle.fetch_finished();
}

#[cfg(test)]
mod tests {
    use super::*;
    use defi_shell::ReadinessState;
    use std::fs;
    use std::path::Path;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Lifecycle recorder over the readiness fields the gate reads.
    #[derive(Default)]
    struct Recorder {
        state: ReadinessState,
        fetching_seen: bool,
        info: Option<BlockchainInfo>,
    }

    impl NodeLifecycle for Recorder {
        fn fetch_started(&mut self) {
            self.state.is_fetching = true;
            self.state.node_error.clear();
            self.fetching_seen = true;
        }

        fn probe_succeeded(&mut self, info: BlockchainInfo) {
            self.state.is_running = true;
            self.state.node_error.clear();
            self.info = Some(info);
        }

        fn probe_failed(&mut self, error: String) {
            self.state.is_running = false;
            self.state.node_error = error;
        }

        fn fetch_finished(&mut self) {
            self.state.is_fetching = false;
        }
    }

    fn config_for(dir: &Path, port: u16) -> Config {
        let conf = dir.join("defi.conf");
        fs::write(
            &conf,
            format!("rpcuser=user\nrpcpassword=pw\nrpcbind=127.0.0.1\nrpcport={port}\n"),
        )
        .unwrap();
        Config {
            node_conf_path: Some(conf),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_marks_running() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({"method": "getblockchaininfo"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "result": {
                    "chain": "main",
                    "blocks": 7,
                    "headers": 7,
                    "bestblockhash": "00",
                    "verificationprogress": 1.0,
                    "initialblockdownload": false
                },
                "error": null,
                "id": "defi-desktop"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), server.address().port());
        let mut recorder = Recorder {
            state: ReadinessState {
                node_error: "stale".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        fetch_and_probe(&mut recorder, &config).await;

        assert!(recorder.fetching_seen);
        assert!(!recorder.state.is_fetching);
        assert!(recorder.state.is_running);
        assert_eq!(recorder.state.node_error, "");
        assert_eq!(recorder.info.map(|i| i.blocks), Some(7));
    }

    #[tokio::test]
    async fn test_fetch_reports_rpc_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "result": null,
                "error": {"code": -28, "message": "Loading block index..."},
                "id": "defi-desktop"
            })))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), server.address().port());
        let mut recorder = Recorder::default();

        fetch_and_probe(&mut recorder, &config).await;

        assert!(recorder.fetching_seen);
        assert!(!recorder.state.is_fetching);
        assert!(!recorder.state.is_running);
        assert!(recorder.state.node_error.contains("Loading block index"));
    }

    #[tokio::test]
    async fn test_fetch_reports_unreadable_conf() {
        let dir = tempfile::tempdir().unwrap();
        let conf = dir.path().join("defi.conf");
        fs::write(&conf, "rpcport=not-a-port\n").unwrap();
        let config = Config {
            node_conf_path: Some(conf),
            ..Config::default()
        };
        let mut recorder = Recorder::default();

        fetch_and_probe(&mut recorder, &config).await;

        assert!(!recorder.state.is_fetching);
        assert!(!recorder.state.is_running);
        assert!(recorder.state.node_error.contains("not-a-port"));
    }
}
