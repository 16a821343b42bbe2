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
use std::borrow::Cow;
use std::time::Duration;

/// Structured record describing one completed query.
///
/// Built fresh for every dispatch and handed to the sink by shared reference
/// for the duration of the call only.
#[derive(Debug)]
pub struct QueryLogParams<'a> {
    /// Final SQL text of the completed query
    pub sql: String,

    /// Rows returned or affected
    pub rows_affected: i64,

    /// Wall time between query begin and dispatch
    pub elapsed: Duration,

    /// The query error, when the query failed
    pub error: Option<&'a anyhow::Error>,

    /// Set when the query exceeded the configured slow threshold
    pub is_slow: bool,
}

/// The two calling conventions served by the severity entry points.
#[derive(Debug)]
pub enum LogMessage<'a> {
    /// Free text, already formatted by the caller
    Text(Cow<'a, str>),

    /// A completed query event; its SQL text doubles as the message
    Query(QueryLogParams<'a>),
}

impl<'a> From<&'a str> for LogMessage<'a> {
    fn from(text: &'a str) -> Self {
        LogMessage::Text(Cow::Borrowed(text))
    }
}

impl From<String> for LogMessage<'_> {
    fn from(text: String) -> Self {
        LogMessage::Text(Cow::Owned(text))
    }
}

impl<'a> From<QueryLogParams<'a>> for LogMessage<'a> {
    fn from(params: QueryLogParams<'a>) -> Self {
        LogMessage::Query(params)
    }
}
