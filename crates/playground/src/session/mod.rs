//! Session state machine
//!
//! `idle → running → success`, driven by user actions. A run computes its
//! result immediately and shows it after a simulated network delay.
//!
//! Each run gets a fresh run id. Only the most recent run may complete:
//! starting another run or resetting invalidates the pending one.
//! Changing the template selection does not, so a pending run still
//! completes afterwards.

mod run;
mod state;
mod wire;

pub use run::{PendingCompletion, RunHandle, START_LOGS};
pub use state::{SessionState, Status};
pub use wire::{ErrorDescriptor, Request, Response};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::AbortHandle;

use crate::catalog::TemplateCatalog;
use crate::config::PlaygroundConfig;
use crate::error::Result;
use crate::parse::{parse_call, CallDescriptor};
use crate::synth::Synthesizer;
use crate::Arguments;

/// Mutable state shared with the deferred completion task.
#[derive(Debug)]
struct Shared {
    state: SessionState,

    /// Id of the run allowed to complete, if any
    active_run: Option<u64>,
}

/// An interactive playground session.
///
/// # Example
///
/// ```
/// use prpc_playground::{Session, Status};
///
/// let mut session = Session::with_defaults().unwrap();
/// assert_eq!(session.status(), Status::Idle);
///
/// let pending = session.begin_run();
/// assert_eq!(session.status(), Status::Running);
///
/// assert!(session.complete(pending));
/// assert_eq!(session.status(), Status::Success);
/// assert_eq!(session.logs().len(), 6);
/// ```
#[derive(Debug)]
pub struct Session {
    shared: Arc<Mutex<Shared>>,
    catalog: Arc<TemplateCatalog>,
    synthesizer: Arc<Synthesizer>,
    config: PlaygroundConfig,
    run_counter: u64,
    pending: Option<AbortHandle>,
}

impl Session {
    /// Create a session on the configured default selection.
    ///
    /// # Errors
    ///
    /// Fails if the default selection does not exist in the catalog.
    pub fn new(catalog: Arc<TemplateCatalog>, config: PlaygroundConfig) -> Result<Self> {
        let (server, client) = catalog.snippets(
            &config.default_server_template,
            &config.default_client_framework,
            &config.default_client_language,
        )?;

        let call = parse_call(client)
            .unwrap_or(catalog.get(&config.default_server_template)?.default_call.clone());
        let state = SessionState {
            status: Status::Idle,
            request: Request::from_call(&call, &config.initial_request_id),
            response: None,
            logs: Vec::new(),
            server_code: server.to_string(),
            client_code: client.to_string(),
            selected_server_template: config.default_server_template.clone(),
            selected_client_framework: config.default_client_framework.clone(),
            selected_client_language: config.default_client_language.clone(),
        };

        Ok(Self {
            shared: Arc::new(Mutex::new(Shared {
                state,
                active_run: None,
            })),
            catalog,
            synthesizer: Arc::new(Synthesizer::new()),
            config,
            run_counter: 0,
            pending: None,
        })
    }

    /// Create a session over the built-in catalog with default settings.
    pub fn with_defaults() -> Result<Self> {
        Self::new(Arc::new(TemplateCatalog::builtin()), PlaygroundConfig::default())
    }

    /// Use a different synthesizer (builder pattern).
    pub fn with_synthesizer(mut self, synthesizer: Synthesizer) -> Self {
        self.synthesizer = Arc::new(synthesizer);
        self
    }

    // ═══════════════════════════════════════════════════════════════════
    // Read-only View
    // ═══════════════════════════════════════════════════════════════════

    /// Snapshot of the whole state.
    pub fn state(&self) -> SessionState {
        self.lock().state.clone()
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.lock().state.status
    }

    /// Current request.
    pub fn request(&self) -> Request {
        self.lock().state.request.clone()
    }

    /// Response of the last completed run.
    pub fn response(&self) -> Option<Response> {
        self.lock().state.response.clone()
    }

    /// Log lines of the current run.
    pub fn logs(&self) -> Vec<String> {
        self.lock().state.logs.clone()
    }

    /// The template catalog.
    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// The session configuration.
    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    // ═══════════════════════════════════════════════════════════════════
    // Run / Complete
    // ═══════════════════════════════════════════════════════════════════

    /// Start a run and schedule its completion after the configured latency.
    ///
    /// Any earlier pending run is superseded and will not complete.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn run(&mut self) -> RunHandle {
        let pending = self.begin_run();
        let run_id = pending.run_id;
        let shared = Arc::clone(&self.shared);
        let latency = self.config.latency();

        self.abort_pending();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            apply_completion(&shared, pending)
        });
        self.pending = Some(handle.abort_handle());
        RunHandle::new(run_id, handle)
    }

    /// Start a run without scheduling it.
    ///
    /// Parses and synthesizes from the current editor text, enters
    /// `running`, and returns the completion for the caller to apply
    /// with [`Session::complete`] once its latency has elapsed.
    pub fn begin_run(&mut self) -> PendingCompletion {
        self.run_counter += 1;
        let run_id = self.run_counter;

        let mut shared = self.lock();
        let call = self.current_call(&shared.state);
        let simulation = self.synthesizer.simulate(&call, &shared.state.server_code);
        let request = Request::from_call(&call, self.config.request_id(run_id));

        tracing::debug!(
            run_id,
            procedure = %call.procedure_name,
            source = ?simulation.result.source,
            "run started"
        );

        let state = &mut shared.state;
        state.status = Status::Running;
        state.response = None;
        state.logs = START_LOGS.iter().map(|line| line.to_string()).collect();
        state.request = request.clone();
        shared.active_run = Some(run_id);

        PendingCompletion {
            run_id,
            request_id: request.id,
            adapter: shared.state.selected_server_template.clone(),
            result: simulation.result,
        }
    }

    /// Apply a completion. Returns `false` if it is stale.
    pub fn complete(&self, pending: PendingCompletion) -> bool {
        apply_completion(&self.shared, pending)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Actions
    // ═══════════════════════════════════════════════════════════════════

    /// Return to idle, dropping any pending run.
    ///
    /// The request is re-derived from the current client code.
    pub fn reset(&mut self) {
        self.abort_pending();
        let mut shared = self.lock();
        shared.active_run = None;
        let request = self.idle_request(&shared.state);
        shared.state.reset_to(request);
        tracing::debug!("session reset");
    }

    /// Select a server template, loading its snippets for the current
    /// client framework and language.
    ///
    /// # Errors
    ///
    /// Fails, leaving the session untouched, if the template or the
    /// current client selection does not exist in it.
    pub fn select_server_template(&mut self, name: &str) -> Result<()> {
        let (framework, language) = {
            let shared = self.lock();
            (
                shared.state.selected_client_framework.clone(),
                shared.state.selected_client_language.clone(),
            )
        };
        self.load_selection(name, &framework, &language)
    }

    /// Select a client framework, swapping in its client snippet.
    ///
    /// Only the client editor changes: server edits, status, logs and
    /// response are kept, and the request is re-derived from the new
    /// client code under the current request id.
    ///
    /// # Errors
    ///
    /// Fails, leaving the session untouched, if the current template has
    /// no snippet for it in the current language.
    pub fn select_client_framework(&mut self, name: &str) -> Result<()> {
        let (server, language) = {
            let shared = self.lock();
            (
                shared.state.selected_server_template.clone(),
                shared.state.selected_client_language.clone(),
            )
        };
        self.load_client_selection(&server, name, &language)
    }

    /// Select a client language, swapping in its client snippet.
    ///
    /// Like [`Session::select_client_framework`], only the client editor
    /// changes.
    ///
    /// # Errors
    ///
    /// Fails, leaving the session untouched, if the current framework has
    /// no snippet in it.
    pub fn select_client_language(&mut self, name: &str) -> Result<()> {
        let (server, framework) = {
            let shared = self.lock();
            (
                shared.state.selected_server_template.clone(),
                shared.state.selected_client_framework.clone(),
            )
        };
        self.load_client_selection(&server, &framework, name)
    }

    /// Replace the server editor text.
    pub fn edit_server_code(&mut self, text: impl Into<String>) {
        self.lock().state.server_code = text.into();
    }

    /// Replace the client editor text.
    pub fn edit_client_code(&mut self, text: impl Into<String>) {
        self.lock().state.client_code = text.into();
    }

    // ═══════════════════════════════════════════════════════════════════
    // Internals
    // ═══════════════════════════════════════════════════════════════════

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load_selection(&mut self, server: &str, framework: &str, language: &str) -> Result<()> {
        let (server_code, client_code) = self.catalog.snippets(server, framework, language)?;

        let mut shared = self.lock();
        let state = &mut shared.state;
        state.selected_server_template = server.to_string();
        state.selected_client_framework = framework.to_string();
        state.selected_client_language = language.to_string();
        state.server_code = server_code.to_string();
        state.client_code = client_code.to_string();

        let request = self.idle_request(state);
        state.reset_to(request);
        tracing::debug!(server, framework, language, "template selected");
        Ok(())
    }

    fn load_client_selection(
        &mut self,
        server: &str,
        framework: &str,
        language: &str,
    ) -> Result<()> {
        let (_, client_code) = self.catalog.snippets(server, framework, language)?;

        let mut shared = self.lock();
        let state = &mut shared.state;
        state.selected_client_framework = framework.to_string();
        state.selected_client_language = language.to_string();
        state.client_code = client_code.to_string();

        let call = self.current_call(state);
        state.request = Request::from_call(&call, state.request.id.clone());
        tracing::debug!(framework, language, "client snippet selected");
        Ok(())
    }

    /// The call in the client editor, or the template's default call.
    fn current_call(&self, state: &SessionState) -> CallDescriptor {
        parse_call(&state.client_code).unwrap_or_else(|| {
            tracing::debug!("client code has no call, using template default");
            self.catalog
                .get(&state.selected_server_template)
                .map(|template| template.default_call.clone())
                .unwrap_or_else(|_| CallDescriptor::new(String::new(), Arguments::default()))
        })
    }

    fn idle_request(&self, state: &SessionState) -> Request {
        Request::from_call(&self.current_call(state), &self.config.initial_request_id)
    }

    fn abort_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

fn apply_completion(shared: &Mutex<Shared>, pending: PendingCompletion) -> bool {
    let mut shared = shared.lock().unwrap_or_else(PoisonError::into_inner);
    if shared.active_run != Some(pending.run_id) {
        tracing::trace!(run_id = pending.run_id, "stale completion ignored");
        return false;
    }

    shared.active_run = None;
    let state = &mut shared.state;
    state.logs.extend(pending.completion_logs());
    state.response = Some(Response::success(pending.result.value, pending.request_id));
    state.status = Status::Success;
    tracing::debug!(run_id = pending.run_id, "run completed");
    true
}
