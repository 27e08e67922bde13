//! # Record Grouping
//!
//! Re-indexes a flat sequence of records into a two-level lookup keyed by
//! topic and then partition.
//!
//! The grouper assumes nothing about records beyond the two key accessors
//! exposed by [`TopicPartition`], so it works equally for produce requests,
//! fetch responses, and offset bookkeeping structures. Iteration order of
//! the returned maps is unspecified; callers must not depend on it.

use std::collections::HashMap;

/// Key accessors a record must expose to be groupable.
pub trait TopicPartition {
    /// Topic this record belongs to.
    fn topic(&self) -> &str;

    /// Partition ordinal within the topic.
    fn partition(&self) -> i32;
}

/// Group a flat sequence of records by topic, then partition.
///
/// One pass in iteration order, O(n) time and space. If two records share
/// the same (topic, partition) pair, the later one wins, matching how flat
/// map construction overwrites a prior entry. No record is otherwise
/// dropped or duplicated.
pub fn group_by_topic_and_partition<R, I>(records: I) -> HashMap<String, HashMap<i32, R>>
where
    R: TopicPartition,
    I: IntoIterator<Item = R>,
{
    let mut out: HashMap<String, HashMap<i32, R>> = HashMap::new();
    for record in records {
        out.entry(record.topic().to_owned())
            .or_default()
            .insert(record.partition(), record);
    }
    out
}
