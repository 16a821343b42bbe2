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
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::context::QueryContext;
use crate::event::QueryLogParams;
use crate::level::LogLevel;

/// Sink callback, invoked synchronously once per classified event.
pub type LogFunc =
    Arc<dyn Fn(&QueryContext, LogLevel, &str, Option<&QueryLogParams<'_>>) + Send + Sync>;

/// Severity-prefixed text printer, the default sink.
pub fn console_log_func() -> LogFunc {
    Arc::new(|_ctx, level, msg, _params| match level {
        LogLevel::Silent => {}
        LogLevel::Error | LogLevel::Warn | LogLevel::Info => {
            println!("[{}] {}", level.as_str(), msg);
        }
    })
}

/// Forward events to `tracing` with structured fields.
pub fn tracing_log_func() -> LogFunc {
    Arc::new(|ctx, level, msg, params| {
        let conn_id = ctx.connection_id();
        let rows = params.map(|p| p.rows_affected);
        let elapsed_ms = params.map(|p| p.elapsed.as_millis() as u64);
        match level {
            LogLevel::Silent => {}
            LogLevel::Error => {
                let err = params.and_then(|p| p.error).map(|e| e.to_string());
                error!(conn_id, rows, elapsed_ms, error = err.as_deref(), "{}", msg);
            }
            LogLevel::Warn => {
                let slow = params.map(|p| p.is_slow).unwrap_or(false);
                warn!(conn_id, rows, elapsed_ms, slow, "{}", msg);
            }
            LogLevel::Info => {
                info!(conn_id, rows, elapsed_ms, "{}", msg);
            }
        }
    })
}

/// One JSON object per line on stdout, for log shippers.
pub fn json_log_func() -> LogFunc {
    Arc::new(|ctx, level, msg, params| {
        if level == LogLevel::Silent {
            return;
        }
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let mut record = serde_json::json!({
            "ts": timestamp.to_string(),
            "level": level.as_str(),
            "msg": msg,
        });
        if let Some(connection_id) = ctx.connection_id() {
            record["connection_id"] = serde_json::json!(connection_id);
        }
        if let Some(params) = params {
            record["sql"] = serde_json::json!(params.sql);
            record["rows_affected"] = serde_json::json!(params.rows_affected);
            record["elapsed_ms"] = serde_json::json!(params.elapsed.as_millis() as u64);
            record["slow"] = serde_json::json!(params.is_slow);
            if let Some(err) = params.error {
                record["error"] = serde_json::json!(err.to_string());
            }
        }
        println!("{}", record);
    })
}

/// Discard everything. Useful for tests and hard silencing.
pub fn noop_log_func() -> LogFunc {
    Arc::new(|_ctx, _level, _msg, _params| {})
}
