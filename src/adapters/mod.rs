// Adapters layer: concrete implementations of the domain ports (http lookup, terminal ui).

pub mod http;
pub mod terminal;

pub use http::ZipcloudClient;
pub use terminal::TerminalUi;
