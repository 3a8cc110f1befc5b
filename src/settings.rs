//! Functions for loading probe settings.

use serde::{Deserialize, Serialize};
use serde_json;

use crate::capabilities::Capability;
use crate::errors::*;

/// Controls how a context is probed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeSettings {
    /// Capabilities whose absence makes initialization fail.
    pub mandatory: Vec<Capability>,
    /// Capabilities treated as unsupported whatever the driver says.
    pub disabled: Vec<Capability>,
    /// Logs vendor, renderer, version and extensions after probing.
    pub dump_information: bool,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        ProbeSettings {
            mandatory: vec![Capability::Framebuffer, Capability::Renderbuffer],
            disabled: Vec::new(),
            dump_information: false,
        }
    }
}

impl ProbeSettings {
    /// Parses settings from json. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<ProbeSettings> {
        Ok(serde_json::from_str(json)?)
    }

    #[inline]
    pub fn is_mandatory(&self, capability: Capability) -> bool {
        self.mandatory.contains(&capability)
    }

    #[inline]
    pub fn is_disabled(&self, capability: Capability) -> bool {
        self.disabled.contains(&capability)
    }
}
