use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use api_server::http::{AppState, build_router};
use axum::Router;
use shared::history::HistoryStore;
use shared::llm::{
    LlmGateway, LlmGatewayError, LlmGatewayFuture, LlmGatewayRequest, LlmGatewayResponse,
};
use shared::service::InterviewService;
use tempfile::TempDir;

pub struct TestApp {
    pub router: Router,
    pub store: HistoryStore,
    pub history_path: PathBuf,
    _log_dir: TempDir,
}

/// Builds the real router around a scripted gateway and a temp-dir history
/// log. Replies are consumed in order, one per submission.
pub fn scripted_app(replies: Vec<Result<String, LlmGatewayError>>) -> TestApp {
    let log_dir = TempDir::new().expect("temp dir should create");
    let history_path = log_dir.path().join("history.csv");
    let store = HistoryStore::new(&history_path);

    let service = InterviewService::new(Arc::new(ScriptedGateway::new(replies)), store.clone());

    TestApp {
        router: build_router(AppState {
            service: Arc::new(service),
        }),
        store,
        history_path,
        _log_dir: log_dir,
    }
}

struct ScriptedGateway {
    replies: Mutex<VecDeque<Result<String, LlmGatewayError>>>,
}

impl ScriptedGateway {
    fn new(replies: Vec<Result<String, LlmGatewayError>>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
        }
    }
}

impl LlmGateway for ScriptedGateway {
    fn generate<'a>(&'a self, _request: LlmGatewayRequest) -> LlmGatewayFuture<'a> {
        let reply = self
            .replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .expect("a scripted reply should be queued");

        Box::pin(async move {
            reply.map(|content| LlmGatewayResponse {
                model: "scripted-model".to_string(),
                content,
                usage: None,
            })
        })
    }
}
