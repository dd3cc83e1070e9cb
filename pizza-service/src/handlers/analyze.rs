use crate::error::AnalyzeError;
use crate::models::{ClassificationRequest, ClassificationResult};
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, http::Method, Json};

/// `POST /api/analyze`: classify the image at `imageUrl`.
///
/// The body is parsed by hand rather than through the `Json` extractor so that
/// unparseable bodies fall into the generic 500 instead of axum's 4xx
/// rejections, and so that non-object bodies are not read as structs.
pub async fn analyze_image(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ClassificationResult>, AnalyzeError> {
    let request = ClassificationRequest::from_body(&body)?;
    let image_url = request.image_url()?;

    let result = state.classifier.classify(image_url).await?;

    Ok(Json(result))
}

/// Any method other than POST on the analyze route.
pub async fn method_not_allowed(method: Method) -> AnalyzeError {
    tracing::debug!(%method, "Rejected non-POST request to analyze endpoint");
    AnalyzeError::MethodNotAllowed
}
