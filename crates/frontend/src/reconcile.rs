//! Local list maintenance after a mutation. The server response is applied
//! to the in-memory list by id; nothing is refetched, so a list can drift
//! from the server when someone else mutates the same data.

use common::{ProductRecord, ProfileRecord};

pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for ProductRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ProfileRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    Append(T),
    Replace(T),
    Remove(String),
}

pub fn apply_patch<T: Identified>(items: &mut Vec<T>, patch: Patch<T>) {
    match patch {
        Patch::Append(item) => items.push(item),
        Patch::Replace(item) => {
            // A record that is no longer listed locally stays absent
            if let Some(slot) = items.iter_mut().find(|existing| existing.id() == item.id()) {
                *slot = item;
            }
        }
        Patch::Remove(id) => items.retain(|existing| existing.id() != id),
    }
}
