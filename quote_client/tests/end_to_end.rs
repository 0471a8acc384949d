use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use quote_client::ClientError;
use quote_client::args::Args;
use quote_common::{QuoteError, Scope};
use quote_server::handler::AppState;
use quote_server::provider::ProviderClient;
use quote_server::storage::SqliteStore;
use tempfile::TempDir;
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROVIDER_PATH: &str = "/json/last/USD-BRL";

struct Stack {
    server_root: Scope,
    server_url: String,
    store: SqliteStore,
    dir: TempDir,
    _provider: MockServer,
}

impl Stack {
    fn output(&self) -> PathBuf {
        self.dir.path().join("cotacao.txt")
    }

    fn args(&self) -> Args {
        Args {
            server_url: self.server_url.clone(),
            output: self.output(),
            timeout_ms: 2000,
        }
    }
}

/// Provider double -> real quote server on a random port.
async fn start_stack(provider_response: ResponseTemplate, fetch: Duration) -> Stack {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PROVIDER_PATH))
        .respond_with(provider_response)
        .mount(&provider)
        .await;

    let dir = TempDir::new().unwrap();
    let store = SqliteStore::open(&dir.path().join("cotacoes.db"), Duration::from_secs(2))
        .await
        .unwrap();
    let server_root = Scope::root();
    let state = Arc::new(AppState {
        provider: ProviderClient::new(&format!("{}{}", provider.uri(), PROVIDER_PATH), fetch),
        store: store.clone(),
        shutdown: server_root.token(),
    });
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(quote_server::serve(listener, state));

    Stack {
        server_root,
        server_url: format!("http://{addr}/cotacao"),
        store,
        dir,
        _provider: provider,
    }
}

#[test_log::test(tokio::test)]
async fn writes_the_quote_served_by_the_server() {
    let stack = start_stack(
        ResponseTemplate::new(200).set_body_string(r#"{"USDBRL":{"bid":"5.43"}}"#),
        Duration::from_secs(2),
    )
    .await;

    quote_client::run(&stack.args(), &Scope::root()).await.unwrap();

    assert_eq!(fs::read_to_string(stack.output()).unwrap(), "Dólar: 5.43");
    let records = stack.store.records().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].value.as_str(), "5.43");
    stack.server_root.cancel();
}

#[test_log::test(tokio::test)]
async fn server_failure_leaves_previous_file_untouched() {
    let stack = start_stack(
        ResponseTemplate::new(200)
            .set_body_string(r#"{"USDBRL":{"bid":"5.43"}}"#)
            .set_delay(Duration::from_secs(3)),
        Duration::from_millis(200),
    )
    .await;
    fs::write(stack.output(), "Dólar: 5.01").unwrap();

    let err = quote_client::run(&stack.args(), &Scope::root()).await.unwrap_err();

    assert!(matches!(err, ClientError::Fetch(QuoteError::UnexpectedStatus(500))), "{err}");
    assert_eq!(fs::read_to_string(stack.output()).unwrap(), "Dólar: 5.01");
}

#[test_log::test(tokio::test)]
async fn unreachable_server_creates_no_file() {
    let dir = TempDir::new().unwrap();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let args = Args {
        server_url: format!("http://{addr}/cotacao"),
        output: dir.path().join("cotacao.txt"),
        timeout_ms: 300,
    };

    let err = quote_client::run(&args, &Scope::root()).await.unwrap_err();

    assert!(matches!(err, ClientError::Fetch(QuoteError::Transport(_))), "{err}");
    assert!(!args.output.exists());
}

#[test_log::test(tokio::test)]
async fn cancelled_run_creates_no_file() {
    let stack = start_stack(
        ResponseTemplate::new(200)
            .set_body_string(r#"{"USDBRL":{"bid":"5.43"}}"#)
            .set_delay(Duration::from_secs(3)),
        Duration::from_secs(5),
    )
    .await;
    let root = Scope::root();
    let token = root.token();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let err = quote_client::run(&stack.args(), &root).await.unwrap_err();

    assert!(matches!(err, ClientError::Fetch(QuoteError::Cancelled)), "{err}");
    assert!(!stack.output().exists());
}
