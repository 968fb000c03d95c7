pub mod session;

pub use session::{LookupSession, SessionSummary};
