//! Common test utilities for integration tests

use async_trait::async_trait;
use chrono::DateTime;
use seace_dashboard::errors::{AppError, AppResult};
use seace_dashboard::models::{Announcement, AnnouncementBatch};
use seace_dashboard::provider::AnnouncementProvider;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// One scripted provider answer, returned after `delay`.
pub struct Step {
    pub delay: Duration,
    pub outcome: AppResult<AnnouncementBatch>,
}

#[allow(dead_code)]
impl Step {
    pub fn ok(batch: AnnouncementBatch) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Ok(batch),
        }
    }

    pub fn err(message: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Err(AppError::NetworkError(message.to_string())),
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Provider that replays a fixed list of answers in call order.
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl ScriptedProvider {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            script: Mutex::new(steps.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnnouncementProvider for ScriptedProvider {
    async fn fetch_announcements(&self) -> AppResult<AnnouncementBatch> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.script.lock().unwrap().pop_front();
        match step {
            Some(step) => {
                if !step.delay.is_zero() {
                    tokio::time::sleep(step.delay).await;
                }
                step.outcome
            }
            None => Err(AppError::NetworkError("script exhausted".to_string())),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Builds an announcement with the given code and hours remaining.
#[allow(dead_code)]
pub fn announcement(code: &str, hours_remaining: f64) -> Announcement {
    Announcement {
        code: code.to_string(),
        description: format!("SERVICIO {code}"),
        entity: "MUNICIPALIDAD DISTRITAL DE PRUEBA".to_string(),
        deadline: DateTime::parse_from_rfc3339("2025-06-05T15:00:00+00:00").unwrap(),
        hours_remaining,
        provider_urgency: None,
        detail_url: format!("https://prod6.seace.gob.pe/buscador-publico/contrataciones/{code}"),
        published_at: None,
    }
}

#[allow(dead_code)]
pub fn batch(items: Vec<Announcement>) -> AnnouncementBatch {
    AnnouncementBatch {
        total: items.len(),
        items,
        server_timestamp: None,
    }
}

/// Serves `body` with `status_line` to every connection. Returns the endpoint URL.
#[allow(dead_code)]
pub async fn spawn_stub_server(status_line: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap_or(0);
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{addr}/api/contrataciones")
}

/// Returns an endpoint on a local port with nothing listening.
#[allow(dead_code)]
pub async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/contrataciones")
}

/// Backend payload with one announcement half an hour from its deadline.
#[allow(dead_code)]
pub const HALF_HOUR_PAYLOAD: &str = r#"{
    "contrataciones": [
        {
            "codigo": "CM-117-2025-CPMP",
            "descripcion": "SERVICIO DE RENOVACIÓN E INSTALACIÓN DE ALFOMBRAS",
            "entidad": "CAJA DE PENSIONES MILITAR - POLICIAL",
            "fecha_limite": "2025-06-01T15:30:00Z",
            "tiempo_restante_horas": 0.5,
            "estado_tiempo": "rojo",
            "url_detalle": "https://prod6.seace.gob.pe/buscador-publico/contrataciones/30529"
        }
    ],
    "total": 1,
    "timestamp": "2025-06-01T15:00:00Z"
}"#;
