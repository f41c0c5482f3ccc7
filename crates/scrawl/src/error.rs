//! Error type for formatter operations.

use scrawl_render::RenderError;

/// Error returned by terminal operations.
///
/// There is no recovery path: a print either fully completes or the whole
/// operation fails with the underlying cause.
#[derive(Debug, thiserror::Error)]
pub enum ScrawlError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScrawlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: ScrawlError = io_err.into();
        assert!(matches!(err, ScrawlError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn render_errors_convert() {
        let err: ScrawlError = RenderError::Serialization("nope".into()).into();
        assert!(matches!(err, ScrawlError::Render(_)));
    }
}
