//! Associative merge: index keys are appended and renumbered from zero,
//! name keys overwrite earlier values while keeping their first position.

use crate::types::{Key, Mapping, Value};

#[derive(Debug, Default)]
pub(crate) struct Merged {
    map: Mapping,
    next_index: i64,
}

impl Merged {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: Key, value: Value) {
        match key {
            Key::Index(_) => {
                self.map.insert(Key::Index(self.next_index), value);
                self.next_index += 1;
            }
            name => {
                self.map.insert(name, value);
            }
        }
    }

    pub(crate) fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        for (key, value) in entries {
            self.push(key, value);
        }
    }

    pub(crate) fn finish(self) -> Value {
        Value::from_mapping(self.into_mapping())
    }

    pub(crate) fn into_mapping(self) -> Mapping {
        self.map
    }
}
