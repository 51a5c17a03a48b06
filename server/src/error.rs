//! Server startup errors.

/// Failures that stop the host process.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `[package.metadata.leptos]` / cargo-leptos settings could not be read.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
