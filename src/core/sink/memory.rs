//! Recording sink.

use std::collections::BTreeMap;

use super::EnvSink;
use crate::error::SinkError;

/// A single sink operation, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Set { name: String, value: String },
    Unset { name: String },
    Mask { value: String },
}

/// Keeps variables in memory and records every operation.
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
    events: Vec<SinkEvent>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// All variables currently set.
    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    /// Every operation so far.
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Values registered as masks.
    pub fn masks(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Mask { value } => Some(value.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl EnvSink for MemoryEnv {
    fn set(&mut self, name: &str, value: &str) -> Result<(), SinkError> {
        self.vars.insert(name.to_string(), value.to_string());
        self.events.push(SinkEvent::Set {
            name: name.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn unset(&mut self, name: &str) -> Result<(), SinkError> {
        self.vars.remove(name);
        self.events.push(SinkEvent::Unset {
            name: name.to_string(),
        });
        Ok(())
    }

    fn mask(&mut self, value: &str) -> Result<(), SinkError> {
        self.events.push(SinkEvent::Mask {
            value: value.to_string(),
        });
        Ok(())
    }
}
