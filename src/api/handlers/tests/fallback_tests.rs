#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode, Uri};

    use crate::api::handlers::{method_not_allowed_handler, not_found_handler};
    use crate::application::ExceptionFilter;
    use crate::domain::ClassifiedError;

    #[tokio::test]
    async fn test_not_found_names_method_and_path() {
        let error = not_found_handler(Method::GET, Uri::from_static("/nowhere?x=1")).await;
        assert_eq!(
            ExceptionFilter::classify(error.raised()),
            ClassifiedError::new(StatusCode::NOT_FOUND, "Cannot GET /nowhere")
        );
    }

    #[tokio::test]
    async fn test_not_found_path_with_colon_keeps_404() {
        let error = not_found_handler(Method::POST, Uri::from_static("/users:search")).await;
        assert_eq!(
            ExceptionFilter::classify(error.raised()),
            ClassifiedError::new(StatusCode::NOT_FOUND, "Cannot POST /users:search")
        );
    }

    #[tokio::test]
    async fn test_method_not_allowed() {
        let error = method_not_allowed_handler().await;
        assert_eq!(
            ExceptionFilter::classify(error.raised()),
            ClassifiedError::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
        );
    }
}
