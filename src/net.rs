use std::sync::Arc;

use futures::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::sync::{mpsc, Mutex};
use tokio_tungstenite::accept_async;
use tungstenite::Message;
use uuid::Uuid;

use crate::state::SharedSimState;

#[derive(Debug)]
struct ClientMessage {
    msg_type: String,
    surface: Option<String>,
    gravity: Option<f32>,
}

impl ClientMessage {
    fn from_json(txt: &str) -> Option<Self> {
        let v = serde_json::from_str::<serde_json::Value>(txt).ok()?;

        Some(ClientMessage {
            msg_type: v.get("type")?.as_str()?.to_string(),
            surface: v
                .get("surface")
                .and_then(|x| x.as_str())
                .map(str::to_string),
            gravity: v.get("gravity").and_then(|x| x.as_f64()).map(|x| x as f32),
        })
    }
}

pub async fn start_websocket_server(state: Arc<Mutex<SharedSimState>>) {
    let listener = TcpListener::bind("0.0.0.0:9001")
        .await
        .expect("Failed to bind WebSocket port");

    println!("🌐 WebSocket listening on ws://localhost:9001");

    loop {
        let (raw, _) = listener.accept().await.unwrap();
        let state_clone = Arc::clone(&state);

        tokio::spawn(async move {
            let ws = accept_async(raw).await.unwrap();
            let (mut write, mut read) = ws.split();

            // outgoing channel: the sim loop broadcasts through it
            let (tx, mut rx) = mpsc::unbounded_channel::<String>();

            let client_id = Uuid::new_v4().to_string();

            let welcome = {
                let mut sim = state_clone.lock().await;
                sim.register_client(tx.clone());
                format!(
                    r#"{{"type":"welcome","client_id":"{}","track":{}}}"#,
                    client_id, sim.track_geometry
                )
            };

            tokio::spawn(async move {
                while let Some(msg) = rx.recv().await {
                    let _ = write.send(Message::Text(msg)).await;
                }
            });

            println!("🟢 Viewer connected: {}", client_id);
            let _ = tx.send(welcome);

            while let Some(msg) = read.next().await {
                let msg = match msg {
                    Ok(m) => m,
                    Err(_) => break,
                };

                if !msg.is_text() {
                    continue;
                }
                let text = match msg.to_text() {
                    Ok(t) => t,
                    Err(_) => continue,
                };

                if text.contains("\"type\":\"ping\"") {
                    let _ = tx.send("{\"type\":\"pong\"}".into());
                    continue;
                }

                let parsed = match ClientMessage::from_json(text) {
                    Some(v) => v,
                    None => continue,
                };

                // config messages carry the HUD selections back into the sim
                if parsed.msg_type == "config" {
                    let mut sim = state_clone.lock().await;
                    if let Some(surface) = parsed.surface {
                        sim.config.surface = surface;
                    }
                    if let Some(g) = parsed.gravity {
                        sim.config.gravity = g.clamp(0.0, 30.0);
                    }
                }
            }

            println!("🔴 Viewer disconnected: {}", client_id);
        });
    }
}
