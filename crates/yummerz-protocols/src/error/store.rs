//! Recipe store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error() {
        let err = StoreError::ConnectionError("unable to open database file".to_string());
        let display = err.to_string();
        assert!(display.contains("Connection error"));
        assert!(display.contains("unable to open"));
    }

    #[test]
    fn test_query_error() {
        let err = StoreError::QueryError("no such table: recipes".to_string());
        let display = err.to_string();
        assert!(display.contains("Query error"));
        assert!(display.contains("recipes"));
    }

    #[test]
    fn test_error_debug() {
        let err = StoreError::QueryError("disk I/O error".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("QueryError"));
    }
}
