//! The async operation wrapper.

use std::future::Future;
use std::sync::Arc;

use async_channel::Sender;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::Instrument;

use super::context::OperationContext;
use super::handle::OperationHandle;
use super::resolve::resolve_response;
use super::spec::{Endpoint, OperationSpec, OrderingPolicy, RequestId};
use crate::app::events::AppEvent;
use crate::core::error::OperationError;
use crate::core::http::{HttpRequest, HttpResponse};
use crate::core::service::{AuthContext, HttpExecutor};
use crate::debug::spawn_tracked;
use crate::session::SessionBridge;
use crate::store::{Action, Domain, Store};

/// Runs operations against an executor and reports their outcomes to a store.
///
/// Cheap to clone; all clones share the executor, store and event channel.
#[derive(Clone)]
pub struct Dispatcher {
    executor: Arc<dyn HttpExecutor>,
    store: Store,
    auth: Arc<dyn AuthContext>,
    base_url: Arc<str>,
    policy: OrderingPolicy,
    events: Option<Sender<AppEvent>>,
    session: Option<SessionBridge>,
}

impl Dispatcher {
    /// Dispatcher reading the bearer token from `store`'s auth slice.
    pub fn new(executor: Arc<dyn HttpExecutor>, store: Store, base_url: impl AsRef<str>) -> Self {
        Self {
            executor,
            auth: Arc::new(store.clone()),
            store,
            base_url: Arc::from(base_url.as_ref().trim_end_matches('/')),
            policy: OrderingPolicy::default(),
            events: None,
            session: None,
        }
    }

    /// Replace the token source.
    pub fn with_auth_context(mut self, auth: Arc<dyn AuthContext>) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_ordering(mut self, policy: OrderingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Broadcast lifecycle events to consumers.
    pub fn with_events(mut self, events: Sender<AppEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// Mirror settled auth outcomes to durable storage.
    pub fn with_session(mut self, session: SessionBridge) -> Self {
        self.session = Some(session);
        self
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn ordering(&self) -> OrderingPolicy {
        self.policy
    }

    pub fn syncs_session(&self) -> bool {
        self.session.is_some()
    }

    /// Run `body` as operation `op`.
    ///
    /// `Pending` is applied to the store before this returns. The body runs on its own
    /// task; its response is validated against the envelope contract and the resulting
    /// outcome applied to the store. Must be called from within a Tokio runtime.
    pub fn run<P, T, F, Fut>(&self, op: OperationSpec, payload: P, body: F) -> OperationHandle<T>
    where
        P: Send + 'static,
        F: FnOnce(P, OperationContext) -> Fut + Send + 'static,
        Fut: Future<Output = Result<HttpResponse, OperationError>> + Send + 'static,
    {
        let request_id = RequestId::new();
        let begun = self.store.begin(op, request_id);
        let sequence = begun.sequence;

        tracing::debug!(operation = %op, request_id = %request_id, sequence, "Operation pending");
        self.emit_now(AppEvent::OperationStarted {
            op,
            request_id,
            sequence,
        });

        let ctx = OperationContext::new(
            op,
            request_id,
            Arc::clone(&self.auth),
            Arc::clone(&self.executor),
            Arc::clone(&self.base_url),
        );
        let this = self.clone();
        let span = tracing::info_span!("operation", operation = %op, request_id = %request_id, sequence);

        let join = spawn_tracked(
            op.name,
            async move {
                let start = std::time::Instant::now();
                let result = match body(payload, ctx).await {
                    Ok(response) => resolve_response(op, response),
                    Err(err) => Err(err),
                };

                match &result {
                    Ok(_) => tracing::info!(duration_ms = start.elapsed().as_millis(), "Operation fulfilled"),
                    Err(err) => tracing::warn!(
                        duration_ms = start.elapsed().as_millis(),
                        kind = %err.kind,
                        status = ?err.status_code,
                        error = %err,
                        "Operation rejected"
                    ),
                }

                this.settle(begun, &result).await;
                result
            }
            .instrument(span),
        );

        OperationHandle::new(op, request_id, sequence, join)
    }

    /// Run a catalog endpoint with an optional JSON payload.
    ///
    /// The bearer token is attached when the endpoint is authenticated and a session exists.
    pub fn call<P, T>(&self, endpoint: Endpoint, payload: Option<P>) -> OperationHandle<T>
    where
        P: Serialize,
    {
        let body = payload.map(|p| serde_json::to_value(&p)).transpose();

        self.run(endpoint.op, body, move |body, ctx| async move {
            let body = body.map_err(|e| {
                ctx.reject_with_value(format!("Invalid request for {}: {}", endpoint.op.label(), e))
            })?;
            let token = if endpoint.authenticated {
                ctx.bearer_token()
            } else {
                None
            };

            let request = HttpRequest::new(endpoint.method, ctx.url(endpoint.path))
                .bearer(token)
                .json(body);
            ctx.execute(request).await
        })
    }

    /// Run a catalog endpoint that takes no payload.
    pub fn fetch<T>(&self, endpoint: Endpoint) -> OperationHandle<T> {
        self.call::<Value, T>(endpoint, None)
    }

    async fn settle(&self, begun: Action, result: &Result<Value, OperationError>) {
        let action = Action {
            outcome: result.clone().into(),
            ..begun
        };

        let applied = self.store.settle(&action, self.policy);
        if !applied {
            tracing::debug!(
                latest = self.store.read(|s| s.latest_sequence(action.op)),
                "Discarding outcome superseded by a newer invocation"
            );
        }

        if applied && action.op.domain == Domain::Auth {
            if let Some(session) = &self.session {
                let auth = self.store.auth();
                session.sync(&action, &auth).await;
            }
        }

        if let Some(events) = &self.events {
            let _ = events
                .send(AppEvent::OperationSettled {
                    op: action.op,
                    request_id: action.request_id,
                    sequence: action.sequence,
                    result: result.clone(),
                    applied,
                })
                .await;
        }
    }

    fn emit_now(&self, event: AppEvent) {
        if let Some(events) = &self.events {
            let _ = events.try_send(event);
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("base_url", &self.base_url)
            .field("policy", &self.policy)
            .field("syncs_session", &self.session.is_some())
            .finish_non_exhaustive()
    }
}
