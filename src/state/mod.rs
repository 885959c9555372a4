//! State Management
//!
//! Session context and per-page request lifecycle state.

pub mod remote;
pub mod session;

pub use remote::RemoteData;
pub use session::{provide_session, use_session, Session, SessionData};
