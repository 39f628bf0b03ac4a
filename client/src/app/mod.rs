//! # Application Orchestrator
//!
//! [`App`] wires the executor, store, dispatcher and session bridge together and is
//! the entry point consumers hold on to.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Consumer                                                    │
//! │  - app.login(..), app.validate_customer(..), app.call(..)    │
//! │  - reads app.store() snapshots                               │
//! │  - drains AppEvents                                          │
//! └───────────────┬──────────────────────────────▲───────────────┘
//!                 │ dispatch                     │ async_channel
//! ┌───────────────▼──────────────────────────────┴───────────────┐
//! │  Dispatcher                                                  │
//! │  Pending ──> spawn_tracked(op) ──> HttpExecutor (ApiClient)  │
//! │          <── Fulfilled / Rejected                            │
//! └───────────────┬─────────────────────────────┬────────────────┘
//!                 │ reduce                      │ auth outcomes
//! ┌───────────────▼───────────────┐   ┌─────────▼────────────────┐
//! │  Store: Arc<RwLock<AppState>> │   │  SessionBridge           │
//! │  auth + per-domain slices     │   │  FileStorage on disk     │
//! └───────────────────────────────┘   └──────────────────────────┘
//! ```
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use banking_client::app::App;
//! use banking_client::config::ClientConfig;
//! use shared::ValidateCustomerRequest;
//!
//! # async fn demo() -> banking_client::core::error::Result<()> {
//! let app = App::new(&ClientConfig::from_env()?)?;
//! let restored = app.start().await;
//!
//! if restored.is_authenticated() {
//!     let customer = app
//!         .validate_customer(ValidateCustomerRequest {
//!             biller_id: "ikedc".to_string(),
//!             customer_id: "45062310988".to_string(),
//!         })?
//!         .await?;
//!     println!("{}", customer.customer_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod events;
pub mod handlers;

pub use events::AppEvent;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use serde::Serialize;
use serde_json::Value;
use shared::{
    Account, AccountValidation, AuthData, ChangePasscodeRequest, CustomerValidation, LoginRequest, PasscodeRequest,
    PayBillRequest, RegisterRequest, StatementRequest, TransactionReceipt, TransferRequest, UpdateProfileRequest,
    UserProfile, ValidateAccountRequest, ValidateCustomerRequest,
};

use crate::config::ClientConfig;
use crate::core::error::Result;
use crate::core::service::HttpExecutor;
use crate::operation::{Dispatcher, Endpoint, OperationHandle};
use crate::services::api::ApiClient;
use crate::session::{FileStorage, RestoreResult, SessionBridge, SessionStorage};
use crate::store::{Domain, Store};

/// Main application orchestrator.
#[derive(Debug, Clone)]
pub struct App {
    store: Store,
    dispatcher: Dispatcher,
    session: SessionBridge,
    event_tx: Sender<AppEvent>,
    event_rx: Receiver<AppEvent>,
}

impl App {
    /// Production wiring: reqwest executor and the session file under the data dir.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let executor = Arc::new(ApiClient::new(config)?);
        let storage = Arc::new(FileStorage::new(config.session_file()));
        Ok(Self::with_parts(executor, storage, config))
    }

    /// Wire an app around any executor and storage.
    pub fn with_parts(executor: Arc<dyn HttpExecutor>, storage: Arc<dyn SessionStorage>, config: &ClientConfig) -> Self {
        let (event_tx, event_rx) = unbounded();
        let store = Store::new();
        let session = SessionBridge::new(storage);
        let dispatcher = Dispatcher::new(executor, store.clone(), &config.api_base_url)
            .with_ordering(config.ordering)
            .with_events(event_tx.clone())
            .with_session(session.clone());

        tracing::debug!(base_url = %config.api_base_url, ordering = ?config.ordering, "App wired");

        Self {
            store,
            dispatcher,
            session,
            event_tx,
            event_rx,
        }
    }

    /// Restore the persisted session. Call once at startup.
    pub async fn start(&self) -> RestoreResult {
        let result = self.session.restore(&self.dispatcher).await;
        let _ = self.event_tx.send(AppEvent::SessionRestored(result.clone())).await;
        result
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn session(&self) -> &SessionBridge {
        &self.session
    }

    /// A receiver of lifecycle events. Receivers share one queue.
    pub fn events(&self) -> Receiver<AppEvent> {
        self.event_rx.clone()
    }

    /// Take every queued event without waiting.
    pub fn drain_events(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Dispatch any catalog endpoint.
    pub fn call<P: Serialize, T>(&self, endpoint: Endpoint, payload: Option<P>) -> OperationHandle<T> {
        self.dispatcher.call(endpoint, payload)
    }

    pub fn fetch<T>(&self, endpoint: Endpoint) -> OperationHandle<T> {
        self.dispatcher.fetch(endpoint)
    }

    pub fn clear_error(&self, domain: Domain) {
        self.store.update(|s| s.clear_error(domain));
    }

    /// Local logout: token dropped from memory and storage, profile kept, domain slices reset.
    pub async fn logout(&self) {
        self.store.update(|s| s.logout());
        self.session.clear().await;
        tracing::info!("Logged out");
        let _ = self.event_tx.send(AppEvent::LoggedOut).await;
    }

    // Auth

    pub fn login(&self, request: LoginRequest) -> Result<OperationHandle<AuthData>> {
        handlers::auth::login(&self.dispatcher, request)
    }

    pub fn register(&self, request: RegisterRequest) -> Result<OperationHandle<AuthData>> {
        handlers::auth::register(&self.dispatcher, request)
    }

    pub fn get_profile(&self) -> OperationHandle<UserProfile> {
        handlers::auth::get_profile(&self.dispatcher)
    }

    pub fn update_profile(&self, request: UpdateProfileRequest) -> Result<OperationHandle<UserProfile>> {
        handlers::auth::update_profile(&self.dispatcher, request)
    }

    pub fn set_passcode(&self, request: PasscodeRequest) -> Result<OperationHandle<Value>> {
        handlers::auth::set_passcode(&self.dispatcher, request)
    }

    pub fn change_passcode(&self, request: ChangePasscodeRequest) -> Result<OperationHandle<Value>> {
        handlers::auth::change_passcode(&self.dispatcher, request)
    }

    pub fn verify_passcode(&self, request: PasscodeRequest) -> Result<OperationHandle<Value>> {
        handlers::auth::verify_passcode(&self.dispatcher, request)
    }

    // Accounts

    pub fn get_accounts(&self) -> OperationHandle<Vec<Account>> {
        handlers::accounts::get_accounts(&self.dispatcher)
    }

    pub fn get_balance(&self) -> OperationHandle<Value> {
        handlers::accounts::get_balance(&self.dispatcher)
    }

    pub fn validate_account(&self, request: ValidateAccountRequest) -> Result<OperationHandle<AccountValidation>> {
        handlers::accounts::validate_account(&self.dispatcher, request)
    }

    pub fn clear_account_validation(&self) {
        handlers::accounts::clear_validation(&self.dispatcher)
    }

    // Bills

    pub fn get_billers(&self) -> OperationHandle<Vec<Value>> {
        handlers::bills::get_billers(&self.dispatcher)
    }

    pub fn validate_customer(&self, request: ValidateCustomerRequest) -> Result<OperationHandle<CustomerValidation>> {
        handlers::bills::validate_customer(&self.dispatcher, request)
    }

    pub fn pay_bill(&self, request: PayBillRequest) -> Result<OperationHandle<TransactionReceipt>> {
        handlers::bills::pay_bill(&self.dispatcher, request)
    }

    pub fn clear_customer_validation(&self) {
        handlers::bills::clear_validation(&self.dispatcher)
    }

    // Transfers

    pub fn transfer(&self, request: TransferRequest) -> Result<OperationHandle<TransactionReceipt>> {
        handlers::transfers::transfer(&self.dispatcher, request)
    }

    pub fn get_transfers(&self) -> OperationHandle<Vec<TransactionReceipt>> {
        handlers::transfers::get_transfers(&self.dispatcher)
    }

    pub fn get_statement(&self, request: StatementRequest) -> Result<OperationHandle<Value>> {
        handlers::transfers::get_statement(&self.dispatcher, request)
    }
}
