//! Deferred run completion

use tokio::task::JoinHandle;

use crate::synth::MockResult;

/// Log lines written when a run starts.
pub const START_LOGS: [&str; 3] = [
    "Initializing RPC bridge...",
    "Encoding request...",
    "Dispatching to Python server...",
];

/// A computed run waiting for its simulated latency to elapse.
///
/// Carries everything the completion needs, captured when the run
/// started, so applying it reads nothing else from the session.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCompletion {
    /// Run id; only the latest run may complete
    pub run_id: u64,

    /// Id of the request being answered
    pub request_id: String,

    /// Server template selected when the run started
    pub adapter: String,

    /// The synthesized result
    pub result: MockResult,
}

impl PendingCompletion {
    /// Log lines appended on completion.
    pub fn completion_logs(&self) -> [String; 3] {
        [
            format!("{} adapter processing...", self.adapter),
            format!("Executing procedure: {}", self.result.log_line),
            format!("Result: {}", self.result.value.to_json()),
        ]
    }
}

/// Handle to a scheduled run.
#[derive(Debug)]
pub struct RunHandle {
    run_id: u64,
    handle: JoinHandle<bool>,
}

impl RunHandle {
    pub(crate) fn new(run_id: u64, handle: JoinHandle<bool>) -> Self {
        Self { run_id, handle }
    }

    /// The run's id.
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// Wait for the run to finish.
    ///
    /// Returns `true` if its completion was applied, `false` if it was
    /// superseded, invalidated, or aborted.
    pub async fn wait(self) -> bool {
        self.handle.await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::ResultSource;
    use crate::Value;

    #[test]
    fn test_completion_logs() {
        let pending = PendingCompletion {
            run_id: 1,
            request_id: "rpc-1".to_string(),
            adapter: "FastAPI".to_string(),
            result: MockResult {
                log_line: "get_user(id=1)".to_string(),
                value: Value::map([("id", Value::Int(1)), ("name", Value::string("pRPC User"))]),
                source: ResultSource::Resolved,
            },
        };
        assert_eq!(
            pending.completion_logs(),
            [
                "FastAPI adapter processing...".to_string(),
                "Executing procedure: get_user(id=1)".to_string(),
                r#"Result: {"id":1,"name":"pRPC User"}"#.to_string(),
            ]
        );
    }
}
