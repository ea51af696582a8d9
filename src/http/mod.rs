//! HTTP protocol implementation.
//!
//! Just enough HTTP/1.1 to answer one request per connection.
//!
//! # Architecture
//!
//! - **`connection`**: drives one accepted socket through the state machine below
//! - **`parser`**: turns the received bytes into a [`request::Request`]
//! - **`request`** / **`headers`** / **`form`**: the parsed request and its parts
//! - **`response`**: response representation with builder pattern
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Bounded read of one request
//!        └──────┬──────┘
//!               │ Bytes received (nothing received → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route and build the response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │
//!        └──────────────────┘
//! ```

pub mod connection;
pub mod form;
pub mod headers;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
