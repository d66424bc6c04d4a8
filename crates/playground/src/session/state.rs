//! Session status and the state exposed to the presentation layer

use serde::Serialize;

use super::wire::{Request, Response};

/// Lifecycle of a simulated call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Nothing in flight
    #[default]
    Idle,
    /// A run is waiting out its simulated latency
    Running,
    /// The last run completed
    Success,
    /// Reserved; simulated runs never fail
    Error,
}

/// Everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    /// Current status
    pub status: Status,

    /// The request for the current client code
    pub request: Request,

    /// Response of the last completed run, if any
    pub response: Option<Response>,

    /// Log lines of the current run
    pub logs: Vec<String>,

    /// Server editor text
    pub server_code: String,

    /// Client editor text
    pub client_code: String,

    /// Selected server template
    pub selected_server_template: String,

    /// Selected client framework
    pub selected_client_framework: String,

    /// Selected client language
    pub selected_client_language: String,
}

impl SessionState {
    /// Return to idle: clear the response and logs, install a new request.
    pub(crate) fn reset_to(&mut self, request: Request) {
        self.status = Status::Idle;
        self.response = None;
        self.logs.clear();
        self.request = request;
    }
}
