//! Tag-invalidated query cache.
//!
//! Each cached read is keyed by its operation plus serialized arguments and
//! carries the tags it depends on. Each mutation declares the tags it
//! invalidates through an explicit table, so a write drops exactly the reads
//! it affects and nothing else.

use crate::error::ClientResult;
use serde::Serialize;
use std::collections::HashMap;

/// Dependency label attached to cached reads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// The full employee listing, under any combination of parameters.
    EmployeeList,
    /// A single employee record.
    Employee(i64),
    /// The distinct-classes projection.
    ClassList,
}

/// Write operations, each mapped to the tags it invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    AddEmployee,
    UpdateEmployee(i64),
    DeleteEmployee(i64),
}

impl Mutation {
    /// The explicit mutation-to-tags table. Creates and deletes touch every
    /// listing-shaped read; updates additionally drop the one record they
    /// changed.
    pub fn invalidates(&self) -> Vec<Tag> {
        match *self {
            Mutation::AddEmployee => vec![Tag::EmployeeList, Tag::ClassList],
            Mutation::UpdateEmployee(id) => {
                vec![Tag::EmployeeList, Tag::ClassList, Tag::Employee(id)]
            }
            Mutation::DeleteEmployee(id) => {
                vec![Tag::EmployeeList, Tag::ClassList, Tag::Employee(id)]
            }
        }
    }
}

/// Cache key: operation name plus its serialized arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    operation: &'static str,
    args: String,
}

impl QueryKey {
    pub fn new<A: Serialize>(operation: &'static str, args: &A) -> ClientResult<Self> {
        Ok(Self {
            operation,
            args: serde_json::to_string(args)?,
        })
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: serde_json::Value,
    tags: Vec<Tag>,
}

/// Query cache with tag invalidation.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &QueryKey) -> Option<&serde_json::Value> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    pub fn insert(&mut self, key: QueryKey, value: serde_json::Value, tags: Vec<Tag>) {
        self.entries.insert(key, CacheEntry { value, tags });
    }

    /// Drops every entry carrying at least one of the given tags and returns
    /// how many were removed.
    pub fn invalidate(&mut self, tags: &[Tag]) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !entry.tags.iter().any(|tag| tags.contains(tag)));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
