/*
 *
 *  *
 *  *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *  *
 *  *   Redistribution and use in source and binary forms, with or without
 *  *   modification, are permitted provided that the following conditions are met:
 *  *
 *  *   Redistributions of source code must retain the above copyright notice,
 *  *   this list of conditions and the following disclaimer.
 *  *   Redistributions in binary form must reproduce the above copyright
 *  *   notice, this list of conditions and the following disclaimer in the
 *  *   documentation and/or other materials provided with the distribution.
 *  *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *  *   contributors may be used to endorse or promote products derived from
 *  *   this software without specific prior written permission.
 *  *   Author: SnackCloud
 *  *
 *
 */

//! This crate offers:
//!
//! *   A pluggable query log adapter for rust orm frameworks;
//! *   A slow query / error classification engine with a configurable sink;
//!
//! The host orm calls [`Logger::trace`] once per completed query with the
//! begin timestamp, an accessor producing the final SQL and row count, and
//! the query error if any. The logger classifies the event (error, slow
//! query, or normal completion), gates it against the configured level, and
//! hands at most one event to the sink.
//!
//! ## Installation
//!
//! Put the desired version of the crate into the `dependencies` section of your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! querylog = "0.1"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use querylog::{LogLevel, Logger, QueryContext};
//!
//! let logger = Logger::new()
//!     .with_log_level(LogLevel::Info)
//!     .with_slow_threshold(Duration::from_millis(100));
//!
//! let ctx = QueryContext::new().with_connection_id(1);
//! let begin = Instant::now();
//! // ... the query runs here ...
//! logger.trace(&ctx, begin, || ("SELECT * FROM t_system_user".to_string(), 3), None);
//!
//! // Plain messages share the severity entry points:
//! logger.warn(&ctx, format!("pool nearly exhausted: {} idle", 1));
//!
//! // Derive a quieter copy for a noisy call site:
//! let quiet = logger.log_mode(LogLevel::Error);
//! assert_eq!(quiet.level, LogLevel::Error);
//! ```
//!
//! Ready-made sinks live in [`sink`]: the default severity-prefixed console
//! printer, a `tracing` forwarder, a JSON-lines printer and a no-op sink.
//! Custom sinks are any `Fn(&QueryContext, LogLevel, &str, Option<&QueryLogParams>)`.
pub mod context;
pub mod errors;
pub mod event;
pub mod level;
pub mod logger;
pub mod prelude;
pub mod sink;

pub use context::QueryContext;
pub use errors::{is_record_not_found, RecordNotFound};
pub use event::{LogMessage, QueryLogParams};
pub use level::LogLevel;
pub use logger::{default_logger, Logger};
pub use sink::{console_log_func, json_log_func, noop_log_func, tracing_log_func, LogFunc};
