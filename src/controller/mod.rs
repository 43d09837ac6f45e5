//! Interaction controller for generation requests
//!
//! The controller validates a request, waits on the scheduler (the simulated
//! network round trip), renders the code, records the artifact in the history
//! ledger and reports the outcome through a [`Notifier`].
//!
//! Requests may overlap. Each one appends its own artifact when its wait
//! completes, so history is in completion order rather than submission order.

mod notify;
mod scheduler;

pub use notify::{Notification, NotificationKind, NotificationLog, Notifier, TracingNotifier};
pub use scheduler::{GenerationRequest, LatencyScheduler, NoLatency, SimulatedLatency};

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::HubConfig;
use crate::error::GenerateError;
use crate::ledger::{HistoryLedger, LedgerStats};
use crate::model::{ArtifactId, CodeType, GeneratedArtifact, Language};
use crate::renderer::Renderer;

const SUCCESS_MESSAGE: &str = "Code generated successfully!";

/// State shared by all requests of a session
#[derive(Debug)]
pub struct ControllerState {
    ledger: RwLock<HistoryLedger>,
    /// Draft description, as typed by the user
    input: Mutex<String>,
    pending: AtomicUsize,
}

impl ControllerState {
    pub fn new(max_entries: NonZeroUsize) -> Self {
        Self::with_ledger(HistoryLedger::new(max_entries))
    }

    pub fn from_config(config: &HubConfig) -> Self {
        Self::new(config.max_entries)
    }

    pub fn with_ledger(ledger: HistoryLedger) -> Self {
        Self {
            ledger: RwLock::new(ledger),
            input: Mutex::new(String::new()),
            pending: AtomicUsize::new(0),
        }
    }
}

/// Counts a request as in flight until dropped
struct PendingGuard<'a>(&'a AtomicUsize);

impl<'a> PendingGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Coordinates generation requests end to end
#[derive(Clone)]
pub struct Controller {
    state: Arc<ControllerState>,
    renderer: Renderer,
    scheduler: Arc<dyn LatencyScheduler>,
    notifier: Arc<dyn Notifier>,
}

impl Controller {
    pub fn new(
        state: Arc<ControllerState>,
        scheduler: Arc<dyn LatencyScheduler>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            state,
            renderer: Renderer::default(),
            scheduler,
            notifier,
        }
    }

    /// Controller with fresh state, the configured latency and log notifications
    pub fn from_config(config: &HubConfig) -> Self {
        Self::new(
            Arc::new(ControllerState::from_config(config)),
            Arc::new(SimulatedLatency::new(config.latency)),
            Arc::new(TracingNotifier),
        )
    }

    /// Use a different latency scheduler
    pub fn with_scheduler(mut self, scheduler: Arc<dyn LatencyScheduler>) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Generate code for a description
    ///
    /// A blank description is rejected with a single validation notification
    /// and leaves history and input untouched.
    pub async fn generate(
        &self,
        language: Language,
        code_type: CodeType,
        description: &str,
    ) -> Result<GeneratedArtifact, GenerateError> {
        if description.trim().is_empty() {
            let err = GenerateError::EmptyDescription;
            warn!(%language, %code_type, "rejected generation request: {err}");
            self.notifier.notify(Notification::new(
                NotificationKind::ValidationError,
                err.user_message(),
            ));
            return Err(err);
        }

        let _pending = PendingGuard::enter(&self.state.pending);
        let request = GenerationRequest {
            language,
            code_type,
            description: description.to_string(),
        };
        info!(%language, %code_type, "generation request accepted");

        self.scheduler.wait(&request).await;

        let code = self
            .renderer
            .render_typed(language, code_type, &request.description);
        let artifact = GeneratedArtifact::new(language, code_type, code, request.description);

        self.state.ledger.write().await.append(artifact.clone());
        self.clear_input_if(artifact.description()).await;

        info!(id = %artifact.id(), %language, %code_type, "generated code");
        self.notifier
            .notify(Notification::new(NotificationKind::Success, SUCCESS_MESSAGE));
        Ok(artifact)
    }

    /// Generate from the current input field
    pub async fn generate_from_input(
        &self,
        language: Language,
        code_type: CodeType,
    ) -> Result<GeneratedArtifact, GenerateError> {
        let description = self.input().await;
        self.generate(language, code_type, &description).await
    }

    /// Start a request on the runtime without waiting for it
    ///
    /// Completion is visible through [`Controller::history`]; the handle is
    /// only needed by callers that want the individual result.
    pub fn submit(
        &self,
        language: Language,
        code_type: CodeType,
        description: impl Into<String>,
    ) -> JoinHandle<Result<GeneratedArtifact, GenerateError>> {
        let controller = self.clone();
        let description = description.into();
        tokio::spawn(async move { controller.generate(language, code_type, &description).await })
    }

    pub async fn set_input(&self, text: impl Into<String>) {
        *self.state.input.lock().await = text.into();
    }

    pub async fn input(&self) -> String {
        self.state.input.lock().await.clone()
    }

    /// Clear the input unless it was edited while the request was pending
    async fn clear_input_if(&self, submitted: &str) {
        let mut input = self.state.input.lock().await;
        if *input == submitted {
            input.clear();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending_requests() > 0
    }

    pub fn pending_requests(&self) -> usize {
        self.state.pending.load(Ordering::SeqCst)
    }

    /// All artifacts, most recent first
    pub async fn history(&self) -> Vec<GeneratedArtifact> {
        self.state.ledger.read().await.all()
    }

    pub async fn history_page(&self, skip: usize, limit: usize) -> Vec<GeneratedArtifact> {
        self.state.ledger.read().await.page(skip, limit)
    }

    pub async fn find(&self, id: &ArtifactId) -> Option<GeneratedArtifact> {
        self.state.ledger.read().await.get(id).cloned()
    }

    pub async fn delete(&self, id: &ArtifactId) -> Option<GeneratedArtifact> {
        self.state.ledger.write().await.remove(id)
    }

    pub async fn clear_history(&self) -> usize {
        self.state.ledger.write().await.clear()
    }

    pub async fn stats(&self) -> LedgerStats {
        self.state.ledger.read().await.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn controller(cap: usize) -> (Controller, Arc<NotificationLog>) {
        let log = Arc::new(NotificationLog::new());
        let state = Arc::new(ControllerState::new(NonZeroUsize::new(cap).unwrap()));
        let controller = Controller::new(state, Arc::new(NoLatency), log.clone());
        (controller, log)
    }

    #[tokio::test]
    async fn test_blank_description_is_rejected() {
        let (controller, log) = controller(10);
        for description in ["", "   ", "\n\t"] {
            let result = controller
                .generate(Language::Python, CodeType::Function, description)
                .await;
            assert_eq!(result, Err(GenerateError::EmptyDescription));
        }
        assert!(controller.history().await.is_empty());
        assert_eq!(log.count(NotificationKind::ValidationError), 3);
        assert_eq!(log.count(NotificationKind::Success), 0);
    }

    #[tokio::test]
    async fn test_generate_appends_and_notifies() {
        let (controller, log) = controller(10);
        let artifact = controller
            .generate(Language::Rust, CodeType::Function, "Reverse a string")
            .await
            .unwrap();

        assert_eq!(artifact.description(), "Reverse a string");
        assert!(artifact.code().contains("fn reverse_a_string"));
        assert_eq!(controller.history().await, vec![artifact]);
        assert_eq!(
            log.entries(),
            vec![Notification::new(NotificationKind::Success, SUCCESS_MESSAGE)]
        );
        assert!(!controller.is_pending());
    }

    #[tokio::test]
    async fn test_generate_from_input_clears_input() {
        let (controller, _log) = controller(10);
        controller.set_input("Binary search").await;
        let artifact = controller
            .generate_from_input(Language::Python, CodeType::Algorithm)
            .await
            .unwrap();
        assert_eq!(artifact.description(), "Binary search");
        assert_eq!(controller.input().await, "");
    }

    #[tokio::test]
    async fn test_rejected_input_is_left_for_correction() {
        let (controller, _log) = controller(10);
        controller.set_input("  ").await;
        let result = controller
            .generate_from_input(Language::Python, CodeType::Algorithm)
            .await;
        assert!(result.is_err());
        assert_eq!(controller.input().await, "  ");
    }

    #[tokio::test]
    async fn test_edited_input_is_not_cleared() {
        let (controller, _log) = controller(10);
        controller.set_input("something newer").await;
        controller
            .generate(Language::Go, CodeType::Api, "older request")
            .await
            .unwrap();
        assert_eq!(controller.input().await, "something newer");
    }

    #[tokio::test]
    async fn test_history_management() {
        let (controller, _log) = controller(2);
        let a = controller
            .generate(Language::Java, CodeType::Class, "a")
            .await
            .unwrap();
        let b = controller
            .generate(Language::Java, CodeType::Class, "b")
            .await
            .unwrap();
        let c = controller
            .generate(Language::Java, CodeType::Class, "c")
            .await
            .unwrap();

        assert_eq!(controller.history().await, vec![c.clone(), b.clone()]);
        assert!(controller.find(&a.id()).await.is_none());
        assert_eq!(controller.stats().await, LedgerStats { total: 2, limit: 2 });
        assert_eq!(controller.history_page(1, 5).await, vec![b.clone()]);

        assert_eq!(controller.delete(&b.id()).await, Some(b));
        assert_eq!(controller.clear_history().await, 1);
        assert!(controller.history().await.is_empty());
    }

    #[tokio::test]
    async fn test_from_config_with_scheduler_override() {
        let config = HubConfig::default().with_max_entries(NonZeroUsize::new(1).unwrap());
        let controller = Controller::from_config(&config).with_scheduler(Arc::new(NoLatency));

        let started = std::time::Instant::now();
        controller
            .generate(Language::Python, CodeType::Script, "first")
            .await
            .unwrap();
        let second = controller
            .generate(Language::Python, CodeType::Script, "second")
            .await
            .unwrap();

        assert!(started.elapsed() < config.latency);
        assert_eq!(controller.history().await, vec![second]);
    }

    #[tokio::test]
    async fn test_submit_runs_in_background() {
        let (controller, _log) = controller(10);
        let handle = controller.submit(Language::CSharp, CodeType::Api, "Orders");
        let artifact = handle.await.expect("task joins").expect("generates");
        assert_eq!(controller.find(&artifact.id()).await, Some(artifact));
    }
}
