// tests/integration_tests.rs
use actix_web::test as actix_test;
use actix_web::{web, App};
use sketchlab::api::{configure_routes, AppState};
use sketchlab::config::AppConfig;
use sketchlab::errors::GenError;
use sketchlab::extract::extract_code;
use sketchlab::models::{GenerationOutcome, GenerationRequest};
use sketchlab::runner::{collect_outcomes, validate_request};
use serde_json::json;

#[test]
fn test_extractor_single_block() {
    let text = "Here is the code:\n```html\n<div>hi</div>\n```\nDone.";
    assert_eq!(extract_code(text), "<div>hi</div>");
}

#[test]
fn test_extractor_fallback_is_full_text() {
    assert_eq!(extract_code("plain answer, no code"), "plain answer, no code");
}

#[test]
fn test_extractor_first_of_many_blocks() {
    let text = "```\none\n```\nmiddle\n```\ntwo\n```";
    assert_eq!(extract_code(text), "one");
}

#[test]
fn test_request_validation_rejects_before_fanout() {
    let req = GenerationRequest {
        image_data: String::new(),
        image_mime_type: "image/png".to_string(),
        prompt: "draw".to_string(),
        user_input: None,
        model: None,
        count: 3,
    };
    assert!(matches!(validate_request(&req), Err(GenError::InvalidInput(_))));
}

#[test]
fn test_batch_ids_follow_submission_order() {
    let results = (0..5)
        .map(|i| Ok((format!("```\nitem {}\n```", i), i as u64)))
        .collect();
    let items = collect_outcomes(results);
    assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_partial_failure_keeps_successes() {
    let results = vec![
        Ok(("```\na\n```".to_string(), 1)),
        Err(GenError::ApiError { status: 500, body: "upstream".to_string() }),
        Ok(("```\nc\n```".to_string(), 2)),
    ];
    let items = collect_outcomes(results);
    let succeeded = items
        .iter()
        .filter(|i| matches!(i.outcome, GenerationOutcome::Succeeded { .. }))
        .count();
    assert_eq!(succeeded, 2);
    match &items[1].outcome {
        GenerationOutcome::Failed { reason } => assert!(reason.contains("500")),
        GenerationOutcome::Succeeded { .. } => panic!("expected failure marker"),
    }
}

fn test_state() -> AppState {
    let config = AppConfig {
        gemini: None,
        openai: None,
        models: vec!["gemini:gemini-2.0-flash".to_string()],
        sample_images: vec!["https://example.com/sample.png".to_string()],
        port: 8080,
    };
    AppState::new(config, None)
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["status"], "healthy");
    assert_eq!(resp["service"], "sketchlab");
}

#[actix_web::test]
async fn test_models_endpoint_lists_configured_models() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/api/v1/models").to_request();
    let resp: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["models"][0], "gemini:gemini-2.0-flash");
    assert_eq!(resp["max_fanout"], 10);
    assert!(resp["default_prompts"]["html"].as_str().unwrap().len() > 0);
    assert!(resp["default_prompts"]["sketch"].as_str().unwrap().len() > 0);
}

#[actix_web::test]
async fn test_generate_rejects_invalid_input_inline() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(configure_routes),
    )
    .await;

    // Missing image: rejected before any network call.
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/generate")
        .set_json(json!({
            "image_data": "",
            "image_mime_type": "image/png",
            "prompt": "recreate this",
            "count": 2
        }))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_generate_rejects_unknown_provider() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/generate")
        .set_json(json!({
            "image_data": "aGVsbG8=",
            "image_mime_type": "image/png",
            "prompt": "recreate this",
            "model": "mystery:model-x",
            "count": 1
        }))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_prompt_endpoints_degrade_without_store() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/prompt?key=prompt.html")
        .to_request();
    let resp: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;
    assert!(resp["body"].is_null());

    let req = actix_test::TestRequest::put()
        .uri("/api/v1/prompt")
        .set_json(json!({"key": "prompt.html", "body": "custom"}))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 503);
}

#[actix_web::test]
async fn test_sample_fetch_rejects_unlisted_url() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/samples/fetch")
        .set_json(json!({"url": "https://evil.example/whatever.png"}))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
