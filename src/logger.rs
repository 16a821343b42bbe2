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
use std::fmt;
use std::time::{Duration, Instant};

use once_cell::sync::Lazy;

use crate::context::QueryContext;
use crate::errors::is_record_not_found;
use crate::event::{LogMessage, QueryLogParams};
use crate::level::LogLevel;
use crate::sink::{console_log_func, LogFunc};

static DEFAULT_LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

/// Process-wide logger built from stock options.
pub fn default_logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

/// Query log adapter - classifies completed queries and plain messages
/// against the configured level before handing them to the sink.
///
/// Immutable once built; clone it, or derive a copy at a different level with
/// [`Logger::log_mode`], to hand it to concurrent callers.
#[derive(Clone)]
pub struct Logger {
    /// Exclude record-not-found errors from error-level dispatch
    pub ignore_record_not_found: bool,

    /// Queries slower than this are classified as warnings; zero disables
    /// slow query detection
    pub slow_threshold: Duration,

    /// Configured verbosity
    pub level: LogLevel,

    log_func: LogFunc,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            ignore_record_not_found: false,
            slow_threshold: Duration::from_millis(200),
            level: LogLevel::Info,
            log_func: console_log_func(),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("ignore_record_not_found", &self.ignore_record_not_found)
            .field("slow_threshold", &self.slow_threshold)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_slow_threshold(mut self, threshold: Duration) -> Self {
        self.slow_threshold = threshold;
        self
    }

    pub fn with_ignore_record_not_found(mut self, ignore: bool) -> Self {
        self.ignore_record_not_found = ignore;
        self
    }

    pub fn with_log_func(mut self, log_func: LogFunc) -> Self {
        self.log_func = log_func;
        self
    }

    /// Derive a logger at a different level. The original is untouched and
    /// the sink is shared.
    pub fn log_mode(&self, level: LogLevel) -> Self {
        let mut derived = self.clone();
        derived.level = level;
        derived
    }

    pub fn info<'a>(&self, ctx: &QueryContext, msg: impl Into<LogMessage<'a>>) {
        self.log(ctx, LogLevel::Info, msg.into());
    }

    pub fn warn<'a>(&self, ctx: &QueryContext, msg: impl Into<LogMessage<'a>>) {
        self.log(ctx, LogLevel::Warn, msg.into());
    }

    pub fn error<'a>(&self, ctx: &QueryContext, msg: impl Into<LogMessage<'a>>) {
        self.log(ctx, LogLevel::Error, msg.into());
    }

    fn log(&self, ctx: &QueryContext, severity: LogLevel, msg: LogMessage<'_>) {
        if !self.level.should_log(severity) {
            return;
        }
        match msg {
            LogMessage::Text(text) => (self.log_func)(ctx, severity, &text, None),
            LogMessage::Query(params) => (self.log_func)(ctx, severity, &params.sql, Some(&params)),
        }
    }

    /// Classify one completed query and dispatch at most one event.
    ///
    /// `fc` is evaluated exactly once, even when the level suppresses every
    /// branch, since evaluating it is what finalizes the caller's query.
    /// Priority order: error, then slow query, then normal completion.
    pub fn trace<F>(&self, ctx: &QueryContext, begin: Instant, fc: F, err: Option<&anyhow::Error>)
    where
        F: FnOnce() -> (String, i64),
    {
        let elapsed = begin.elapsed();
        let (sql, rows_affected) = fc();
        if self.level <= LogLevel::Silent {
            return;
        }

        match err {
            Some(err)
                if self.level.should_log(LogLevel::Error)
                    && (!self.ignore_record_not_found || !is_record_not_found(err)) =>
            {
                self.error(
                    ctx,
                    QueryLogParams {
                        sql,
                        rows_affected,
                        elapsed,
                        error: Some(err),
                        is_slow: false,
                    },
                );
            }
            _ if elapsed > self.slow_threshold
                && !self.slow_threshold.is_zero()
                && self.level.should_log(LogLevel::Warn) =>
            {
                self.warn(
                    ctx,
                    QueryLogParams {
                        sql,
                        rows_affected,
                        elapsed,
                        error: None,
                        is_slow: true,
                    },
                );
            }
            _ if self.level.should_log(LogLevel::Info) => {
                self.info(
                    ctx,
                    QueryLogParams {
                        sql,
                        rows_affected,
                        elapsed,
                        error: None,
                        is_slow: false,
                    },
                );
            }
            _ => {}
        }
    }
}
