//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`envelope`] - Response envelope shared by every endpoint
//! - [`auth`] - Login, registration, profile and passcode DTOs
//! - [`accounts`] - Accounts and account-number validation
//! - [`bills`] - Bill payment DTOs
//! - [`transfers`] - Transfer and statement DTOs
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "email_or_phone": "ada@example.com",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "status": "success",
//!   "success": true,
//!   "data": {
//!     "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!     "user": { "id": "1", "first_name": "Ada", "last_name": "Obi", "email": "ada@example.com" },
//!     "requires_passcode_setup": false
//!   },
//!   "message": "Login successful"
//! }
//! ```

pub mod accounts;
pub mod auth;
pub mod bills;
pub mod envelope;
pub mod transfers;

pub use accounts::*;
pub use auth::*;
pub use bills::*;
pub use envelope::*;
pub use transfers::*;
