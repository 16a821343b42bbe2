//!
//! Common Use.
//!
pub use crate::context::QueryContext;
pub use crate::errors::{is_record_not_found, RecordNotFound};
pub use crate::event::{LogMessage, QueryLogParams};
pub use crate::level::LogLevel;
pub use crate::logger::{default_logger, Logger};
pub use crate::sink::{console_log_func, json_log_func, noop_log_func, tracing_log_func, LogFunc};
