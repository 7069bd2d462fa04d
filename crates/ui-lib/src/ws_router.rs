// ============================
// crates/ui-lib/src/ws_router.rs
// ============================
//! HTTP router and WebSocket connection handling.
use crate::error::AppError;
use crate::metrics::{WS_ACTIVE, WS_CONNECTION, WS_DISCONNECTION};
use crate::pages;
use crate::session::{SessionInput, UiSession};
use crate::validation;
use crate::AppState;
use ::metrics::{counter, gauge};
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use futures_util::{SinkExt, StreamExt};
use neverpass_common::{ClientToServer, ServerToClient};
use std::sync::Arc;
use tokio::sync::mpsc;
use tower_http::trace::TraceLayer;

/// Create the application router: the two page routes and the event socket
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::app_page))
        .route("/forgot-password", get(pages::app_page))
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handler for WebSocket connections
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    counter!(WS_CONNECTION).increment(1);
    gauge!(WS_ACTIVE).increment(1.0);

    ws.on_upgrade(move |socket| handle_connection(socket, state))
}

async fn handle_connection(socket: WebSocket, state: Arc<AppState>) {
    let (mut sink, mut stream) = socket.split();

    // Channel for outbound view models and errors
    let (out_tx, mut out_rx) = mpsc::channel::<ServerToClient>(32);

    // Channel merging client messages with the session's own timer events
    let (input_tx, mut input_rx) = mpsc::channel::<SessionInput>(32);

    let mut session = UiSession::new(state.settings.clone(), out_tx.clone(), input_tx.clone());

    // Task 1: Serialize outbound messages onto the socket
    let send_task = tokio::spawn(async move {
        while let Some(msg) = out_rx.recv().await {
            let json = serde_json::to_string(&msg).unwrap_or_default();
            if sink.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    // Task 2: Parse and validate incoming frames, feed them to the session
    let reader_tx = input_tx.clone();
    let reader_out = out_tx.clone();
    let mut read_task = tokio::spawn(async move {
        while let Some(Ok(message)) = stream.next().await {
            match message {
                Message::Text(text) => match serde_json::from_str::<ClientToServer>(&text) {
                    Ok(client_msg) => match validation::validate_client_message(&client_msg) {
                        Ok(()) => {
                            if reader_tx
                                .send(SessionInput::Client(client_msg))
                                .await
                                .is_err()
                            {
                                break;
                            }
                        },
                        Err(validation_err) => {
                            let err = AppError::InvalidInput(validation_err.to_string());
                            let err_msg = ServerToClient::Error {
                                code: err.error_code().to_string(),
                                message: err.to_string(),
                            };
                            if reader_out.send(err_msg).await.is_err() {
                                break;
                            }
                        },
                    },
                    Err(e) => {
                        let err_msg = ServerToClient::MalformedMessage {
                            err_msg: e.to_string(),
                        };
                        if reader_out.send(err_msg).await.is_err() {
                            break;
                        }
                    },
                },
                Message::Close(_) => break,
                _ => {}, // Ignore binary and ping/pong frames
            }
        }
    });

    // Main task: apply inputs to the session, one at a time
    loop {
        tokio::select! {
            maybe_input = input_rx.recv() => match maybe_input {
                Some(input) => {
                    if let Err(e) = session.handle(input).await {
                        tracing::warn!(error = %e, "session error, closing connection");
                        break;
                    }
                },
                None => break,
            },
            _ = &mut read_task => break, // Socket closed or errored
        }
    }

    counter!(WS_DISCONNECTION).increment(1);
    gauge!(WS_ACTIVE).decrement(1.0);

    read_task.abort();
    send_task.abort();
}
