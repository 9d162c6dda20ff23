//! Shared fakes and helpers for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{oneshot, Notify};
use user_gateway::config::{GatewayConfig, HandlerConfig};
use user_gateway::lifecycle::start_with_directory;
use user_gateway::upstream::{GetUserRequest, GetUserResponse, LookupError, UserDirectory};

/// What a fake directory saw for one call.
#[derive(Debug, Clone)]
pub struct SeenCall {
    pub username: String,
    pub request_id: Option<String>,
}

enum Behavior {
    Echo,
    Fixed(GetUserResponse),
    Fail(tonic::Code, String),
    Hang {
        started: Arc<Notify>,
        cancelled: Arc<AtomicBool>,
    },
}

/// In-process stand-in for the user service.
pub struct FakeDirectory {
    behavior: Behavior,
    calls: Mutex<Vec<SeenCall>>,
}

impl FakeDirectory {
    fn with(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Answers with `<name>@example.com` / `Full <name>`.
    pub fn echo() -> Arc<Self> {
        Self::with(Behavior::Echo)
    }

    pub fn fixed(username: &str, email: &str, full_name: &str) -> Arc<Self> {
        Self::with(Behavior::Fixed(GetUserResponse {
            username: username.into(),
            email: email.into(),
            full_name: full_name.into(),
        }))
    }

    pub fn failing(code: tonic::Code, message: &str) -> Arc<Self> {
        Self::with(Behavior::Fail(code, message.into()))
    }

    /// Never answers. `started` fires when a call begins; `cancelled` flips
    /// when the call future is dropped.
    pub fn hanging(started: Arc<Notify>, cancelled: Arc<AtomicBool>) -> Arc<Self> {
        Self::with(Behavior::Hang { started, cancelled })
    }

    pub fn calls(&self) -> Vec<SeenCall> {
        self.calls.lock().unwrap().clone()
    }
}

struct SetOnDrop(Arc<AtomicBool>);

impl Drop for SetOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserDirectory for FakeDirectory {
    async fn get_user_details(
        &self,
        request: tonic::Request<GetUserRequest>,
    ) -> Result<GetUserResponse, LookupError> {
        let request_id = request
            .metadata()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let username = request.into_inner().username;
        self.calls.lock().unwrap().push(SeenCall {
            username: username.clone(),
            request_id,
        });

        match &self.behavior {
            Behavior::Echo => Ok(GetUserResponse {
                email: format!("{username}@example.com"),
                full_name: format!("Full {username}"),
                username,
            }),
            Behavior::Fixed(response) => Ok(response.clone()),
            Behavior::Fail(code, message) => {
                Err(LookupError::from(tonic::Status::new(*code, message.clone())))
            }
            Behavior::Hang { started, cancelled } => {
                let _guard = SetOnDrop(cancelled.clone());
                started.notify_one();
                std::future::pending().await
            }
        }
    }
}

/// Start a gateway on an ephemeral port in front of `directory`.
///
/// Sending on (or dropping) the returned sender stops the server.
pub async fn spawn_gateway(
    directory: Arc<dyn UserDirectory>,
    handler: HandlerConfig,
) -> (SocketAddr, oneshot::Sender<()>) {
    let mut config = GatewayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.handler = handler;

    let gateway = start_with_directory(&config, directory).await.unwrap();
    let addr = gateway.local_addr().unwrap();

    let (shutdown, stop) = oneshot::channel::<()>();
    tokio::spawn(async move {
        let _ = gateway
            .run(async move {
                let _ = stop.await;
            })
            .await;
    });

    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
