use actix_web::{web, HttpResponse, Responder};
use breeze::{
    core::session::{SessionId, SessionManager},
    llm::LLM,
};
use bytes::Bytes;
use futures::Stream;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const WELCOME_MESSAGE: &str = "Welcome! Check the latest weather updates for your location.";
pub const THINKING_PLACEHOLDER: &str = "Thinking...";

pub const STARTER_PROMPTS: [&str; 3] = [
    "What's the weather in Karachi?",
    "Will I need an umbrella in London today?",
    "What should I wear in New York right now?",
];

#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    pub content: String,
}

/// One frame on the per-turn event stream. The client renders `thinking`
/// immediately and replaces it in place with the terminal `message` or
/// `error` frame, so each turn shows exactly one assistant bubble.
#[derive(Debug, Serialize)]
struct TurnEvent<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    content: &'a str,
}

fn sse_frame(event: &TurnEvent<'_>) -> Bytes {
    let json = serde_json::to_string(event).unwrap_or_else(|_| "{}".into());
    Bytes::from(format!("data: {}\n\n", json))
}

async fn create_session<L: LLM + 'static>(
    manager: web::Data<SessionManager<L>>,
) -> impl Responder {
    let id = manager.create_session().await;
    HttpResponse::Ok().json(json!({
        "session_id": id,
        "welcome": WELCOME_MESSAGE,
        "starter_prompts": STARTER_PROMPTS,
    }))
}

fn turn_stream<L: LLM + 'static>(
    manager: web::Data<SessionManager<L>>,
    id: SessionId,
    content: String,
) -> impl Stream<Item = Result<Bytes, actix_web::Error>> {
    async_stream::stream! {
        yield Ok(sse_frame(&TurnEvent {
            kind: "thinking",
            content: THINKING_PLACEHOLDER,
        }));

        let result = match manager.get_session(id).await {
            Ok(session) => {
                let mut session = session.lock().await;
                session.handle_message(content).await
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(reply) => yield Ok(sse_frame(&TurnEvent {
                kind: "message",
                content: &reply,
            })),
            Err(e) => yield Ok(sse_frame(&TurnEvent {
                kind: "error",
                content: &format!("Error: {}", e),
            })),
        }
    }
}

async fn post_message<L: LLM + 'static>(
    manager: web::Data<SessionManager<L>>,
    path: web::Path<SessionId>,
    body: web::Json<IncomingMessage>,
) -> impl Responder {
    let id = path.into_inner();
    let content = body.into_inner().content;

    HttpResponse::Ok()
        .content_type("text/event-stream")
        .streaming(turn_stream(manager, id, content))
}

async fn get_history<L: LLM + 'static>(
    manager: web::Data<SessionManager<L>>,
    path: web::Path<SessionId>,
) -> impl Responder {
    match manager.get_session(path.into_inner()).await {
        Ok(session) => {
            let session = session.lock().await;
            HttpResponse::Ok().json(json!({ "history": session.history() }))
        }
        Err(e) => HttpResponse::NotFound().json(json!({ "error": e.to_string() })),
    }
}

async fn end_session<L: LLM + 'static>(
    manager: web::Data<SessionManager<L>>,
    path: web::Path<SessionId>,
) -> impl Responder {
    match manager.end_session(path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => HttpResponse::NotFound().json(json!({ "error": e.to_string() })),
    }
}

/// Mount the session routes for a concrete model type.
pub fn configure<L: LLM + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/session", web::post().to(create_session::<L>))
        .route("/session/{id}/message", web::post().to(post_message::<L>))
        .route("/session/{id}/history", web::get().to(get_history::<L>))
        .route("/session/{id}", web::delete().to(end_session::<L>));
}
