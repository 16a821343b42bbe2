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
use std::collections::HashMap;

/// Per-query context handed through to the sink untouched.
///
/// The dispatch engine never branches on anything in here; it exists so a
/// sink can correlate events with the connection or request that produced
/// them.
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    connection_id: Option<u32>,

    /// Metadata - A container that passes caller data through to the sink
    metadata: HashMap<String, String>,
}

impl QueryContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connection_id(mut self, connection_id: u32) -> Self {
        self.connection_id = Some(connection_id);
        self
    }

    pub fn connection_id(&self) -> Option<u32> {
        self.connection_id
    }

    /// Attach a metadata entry
    pub fn insert_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(|v| v.as_str())
    }
}
