//! Todo List Client
//!
//! Library client for the todos HTTP API. Keeps a local cache of one
//! day's todos and a completion summary, synchronized with the service
//! after every mutation without a full reload.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Session   │  ← operations: select date, submit, toggle, delete
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌─────────────┐
//! │   DayView   │────▶│   render()  │  ← pure view → render description
//! └──────┬──────┘     └─────────────┘
//!        │
//! ┌──────▼──────┐
//! │  Transport  │  ← trait + reqwest implementation
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use todo_client::{HttpTodoTransport, Locale, TodoSession};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTodoTransport::new("http://localhost:5000");
//! let mut session = TodoSession::new(transport, "2024-06-01", Locale::Id);
//!
//! let patch = session.select_date("2024-06-01").await?;
//! let patch = session.submit("Buy groceries").await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod locale;
pub mod render;
pub mod session;
pub mod transport;
pub mod view;

// Re-export commonly used types
pub use error::ClientError;
pub use locale::{ClientAction, Locale};
pub use render::{ListRender, RowRender, render, render_row, render_summary};
pub use session::{ListPatch, TodoSession};
pub use transport::{HttpTodoTransport, TodoTransport, TransportError};
pub use view::{DayView, Summary};
