//! # pRPC Playground
//!
//! The simulation engine behind the pRPC interactive playground.
//!
//! The playground shows a remote procedure call round trip without a
//! backend. It reads a client snippet and a server snippet as plain text,
//! infers which procedure is called with which arguments and what the
//! server would plausibly return, and drives the status a UI renders.
//! Nothing is executed: all "execution" is pattern matching over text.
//!
//! ## Architecture
//!
//! ```text
//! Template Catalog / editor text
//!   → Snippet Parser        (parse)
//!   → Value Resolver        (resolve)
//!   → Mock Response Synthesizer (synth)
//!   → Session State Machine (session)
//!   → presentation layer
//! ```
//!
//! ## Example
//!
//! ```
//! use prpc_playground::{parse_call, Synthesizer, Value};
//!
//! let server = "@rpc\ndef greet(name: str) -> str:\n    return f\"Hello {name}\"";
//! let call = parse_call(r#"client.greet({ name: "Ada" })"#).unwrap();
//!
//! let sim = Synthesizer::new().simulate(&call, server);
//! assert_eq!(sim.result.value, Value::string("Hello Ada"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bindings;
pub mod catalog;
pub mod config;
pub mod error;
pub mod parse;
pub mod resolve;
pub mod session;
pub mod synth;
pub mod value;

// Re-export main types
pub use bindings::Bindings;
pub use catalog::{ServerTemplate, TemplateCatalog};
pub use config::PlaygroundConfig;
pub use error::{PlaygroundError, Result};
pub use parse::{
    extract_return_expression, parse_arguments, parse_call, parse_signature, CallDescriptor,
    SignatureDescriptor,
};
pub use resolve::{resolve, Resolve, ReturnForm};
pub use session::{
    ErrorDescriptor, PendingCompletion, Request, Response, RunHandle, Session, SessionState,
    Status,
};
pub use synth::{synthesize, FallbackFn, FallbackTable, MockResult, ResultSource, Simulation, Synthesizer};
pub use value::{Arguments, Value};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
