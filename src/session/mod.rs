pub mod http;

use crate::{
    error::Result,
    models::{
        GenerateResponse, GenerationRequest, GenerationResult, ImageSize, ImageStyle, SessionState,
    },
};
use async_trait::async_trait;

pub use http::HttpGatewayClient;

/// The session controller's view of the gateway. Production code goes over
/// HTTP; tests substitute a mock.
#[async_trait]
pub trait GatewayClient: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerateResponse>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Guard refused the submit: empty prompt, or a request already in flight.
    Skipped,
    /// A result was constructed and prepended to history.
    Generated,
    /// The gateway succeeded but carried no image reference; nothing recorded.
    Empty,
    /// The gateway failed; nothing recorded.
    Failed,
}

/// Owns the UI-facing session state and is the only writer of it. Each
/// lifecycle step is a named transition so the state machine is testable
/// without any rendering attached.
pub struct SessionController<G: GatewayClient> {
    state: SessionState,
    gateway: G,
}

impl<G: GatewayClient> SessionController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            state: SessionState::new(),
            gateway,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.state.prompt = prompt.into();
    }

    /// Settings edits apply immediately but only shape the next submitted
    /// request, never one already in flight.
    pub fn set_size(&mut self, size: ImageSize) {
        self.state.settings.size = size;
    }

    pub fn set_style(&mut self, style: ImageStyle) {
        self.state.settings.style = style;
    }

    /// Submit guard. Returns the immutable request snapshot and marks the
    /// session pending, or `None` when the prompt is empty/whitespace or a
    /// request is already outstanding.
    pub fn begin(&mut self) -> Option<GenerationRequest> {
        if self.state.pending || self.state.prompt.trim().is_empty() {
            return None;
        }
        self.state.pending = true;
        Some(GenerationRequest {
            prompt: self.state.prompt.clone(),
            size: self.state.settings.size,
            style: self.state.settings.style,
        })
    }

    pub fn settle_success(&mut self, prompt: &str, response: GenerateResponse) -> SubmitOutcome {
        self.state.pending = false;
        match response.image_url {
            Some(url) => {
                self.state
                    .history
                    .insert(0, GenerationResult::new(prompt, url));
                SubmitOutcome::Generated
            }
            None => {
                log::warn!("Generation settled without an image reference");
                SubmitOutcome::Empty
            }
        }
    }

    pub fn settle_failure(&mut self) -> SubmitOutcome {
        self.state.pending = false;
        SubmitOutcome::Failed
    }

    /// The whole submit lifecycle with a single resolution point: guard,
    /// one dispatch, one settle. There is no cancellation; a dispatched
    /// request runs to completion.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let request = match self.begin() {
            Some(request) => request,
            None => return SubmitOutcome::Skipped,
        };

        let response = self.gateway.generate(&request).await;

        match response {
            Ok(response) => self.settle_success(&request.prompt, response),
            Err(e) => {
                log::error!("Generation request failed: {}", e);
                self.settle_failure()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct MockGateway {
        calls: Mutex<Vec<String>>,
        responses: Mutex<VecDeque<Result<GenerateResponse>>>,
    }

    impl MockGateway {
        fn new(responses: Vec<Result<GenerateResponse>>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                responses: Mutex::new(responses.into()),
            }
        }

        fn with_url(url: &str) -> Self {
            Self::new(vec![Ok(GenerateResponse {
                image_url: Some(url.to_string()),
            })])
        }
    }

    #[async_trait]
    impl GatewayClient for MockGateway {
        async fn generate(&self, request: &GenerationRequest) -> Result<GenerateResponse> {
            self.calls.lock().unwrap().push(request.prompt.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::InternalError("no queued response".into())))
        }
    }

    fn controller(gateway: MockGateway) -> SessionController<MockGateway> {
        SessionController::new(gateway)
    }

    #[tokio::test]
    async fn test_submit_generates_and_records() {
        let mut session = controller(MockGateway::with_url("https://x/img1.png"));
        session.set_prompt("a red fox in snow");

        let outcome = session.submit().await;

        assert_eq!(outcome, SubmitOutcome::Generated);
        let state = session.state();
        assert!(!state.pending);
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history[0].prompt, "a red fox in snow");
        assert_eq!(state.history[0].image_reference, "https://x/img1.png");
        assert_eq!(
            session.gateway.calls.lock().unwrap().as_slice(),
            ["a red fox in snow"]
        );
    }

    #[tokio::test]
    async fn test_empty_prompt_is_a_noop() {
        let mut session = controller(MockGateway::with_url("https://x/img1.png"));

        assert_eq!(session.submit().await, SubmitOutcome::Skipped);

        session.set_prompt("   \t ");
        assert_eq!(session.submit().await, SubmitOutcome::Skipped);

        assert!(!session.state().pending);
        assert!(session.state().history.is_empty());
        assert!(session.gateway.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_while_pending_is_a_noop() {
        let mut session = controller(MockGateway::with_url("https://x/img1.png"));
        session.set_prompt("cat");

        let request = session.begin();
        assert!(request.is_some());
        assert!(session.state().pending);

        assert_eq!(session.submit().await, SubmitOutcome::Skipped);
        assert!(session.gateway.calls.lock().unwrap().is_empty());
        assert!(session.state().pending);
    }

    #[tokio::test]
    async fn test_failure_leaves_history_unchanged() {
        let mut session = controller(MockGateway::new(vec![Err(GatewayError::ProviderError(
            "quota exceeded".into(),
        ))]));
        session.set_prompt("a red fox in snow");

        let outcome = session.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(!session.state().pending);
        assert!(session.state().history.is_empty());
        assert_eq!(session.gateway.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_image_reference_records_nothing() {
        let mut session =
            controller(MockGateway::new(vec![Ok(GenerateResponse { image_url: None })]));
        session.set_prompt("a red fox in snow");

        let outcome = session.submit().await;

        assert_eq!(outcome, SubmitOutcome::Empty);
        assert!(!session.state().pending);
        assert!(session.state().history.is_empty());
    }

    #[tokio::test]
    async fn test_history_is_newest_first() {
        let mut session = controller(MockGateway::new(vec![
            Ok(GenerateResponse {
                image_url: Some("https://x/cat.png".to_string()),
            }),
            Ok(GenerateResponse {
                image_url: Some("https://x/dog.png".to_string()),
            }),
        ]));

        session.set_prompt("cat");
        assert_eq!(session.submit().await, SubmitOutcome::Generated);
        session.set_prompt("dog");
        assert_eq!(session.submit().await, SubmitOutcome::Generated);

        let history = &session.state().history;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].prompt, "dog");
        assert_eq!(history[1].prompt, "cat");
    }

    #[tokio::test]
    async fn test_settings_snapshot_at_submit_time() {
        let mut session = controller(MockGateway::with_url("https://x/img1.png"));
        session.set_prompt("cat");
        session.set_size(ImageSize::Square1024);
        session.set_style(ImageStyle::Anime);

        let request = session.begin().unwrap();
        assert_eq!(request.size, ImageSize::Square1024);
        assert_eq!(request.style, ImageStyle::Anime);

        // Edits while pending apply to state but not to the snapshot.
        session.set_style(ImageStyle::Abstract);
        assert_eq!(request.style, ImageStyle::Anime);
        assert_eq!(session.state().settings.style, ImageStyle::Abstract);
    }

    #[tokio::test]
    async fn test_settle_failure_clears_pending_only() {
        let mut session = controller(MockGateway::with_url("https://x/img1.png"));
        session.set_prompt("cat");
        session.begin().unwrap();

        assert_eq!(session.settle_failure(), SubmitOutcome::Failed);
        assert!(!session.state().pending);
        assert!(session.state().history.is_empty());
    }
}
