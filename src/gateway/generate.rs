use crate::{
    gateway::GatewayState,
    models::{ErrorResponse, GenerateRequest, GenerateResponse, ImageGenerationRequest},
};
use actix_web::{post, web, HttpResponse, Responder};

/// The single relay route. One provider call per invocation; any failure
/// collapses into the fixed wire error, with the cause logged locally only.
#[post("/generate")]
pub async fn generate(
    state: web::Data<GatewayState>,
    request: web::Json<GenerateRequest>,
) -> impl Responder {
    let request = request.into_inner();
    let _timer = crate::logger::timer("images/generations");

    let result = state
        .provider
        .generate(ImageGenerationRequest::from_prompt(request.prompt))
        .await;

    match result {
        Ok(response) => HttpResponse::Ok().json(GenerateResponse {
            image_url: response.image_url,
        }),
        Err(e) => {
            log::error!("Error generating image: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::generation_failed())
        }
    }
}
