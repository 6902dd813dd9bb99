use rollcall_core::errors::RollcallError;

#[tokio::test]
async fn test_error_handling_not_found() {
    // Create a not found error
    let error = RollcallError::NotFound("Player not found".to_string());

    // Map the error to a response
    let response = rollcall_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_entry_not_found() {
    // A missing entry is still a "record absent" signal, not a server fault
    let error = RollcallError::EntryNotFound("Player not in this record".to_string());

    let response = rollcall_api::middleware::error_handling::map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    // Create a validation error
    let error = RollcallError::Validation("name is required".to_string());

    // Map the error to a response
    let response = rollcall_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_database() {
    // Create a database error
    let error = RollcallError::Database(eyre::eyre!("Database error"));

    // Map the error to a response
    let response = rollcall_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_error_handling_internal() {
    // Create an internal error
    let error = RollcallError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    // Map the error to a response
    let response = rollcall_api::middleware::error_handling::map_error(error);

    // Assert the response has the correct status code
    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}
