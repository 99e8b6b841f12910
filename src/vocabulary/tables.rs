//! Static CIDOC-CRM to ALIADA vocabulary tables.

use std::collections::HashMap;

/// CRM class code -> ALIADA class URI.
const CLASSES: &[(&str, &str)] = &[
    ("E22", "http://erlangen-crm.org/current/E22_Man-Made_Object"),
    ("E25", "http://erlangen-crm.org/current/E25_Man-Made_Feature"),
    ("E78", "http://erlangen-crm.org/current/E78_Collection"),
];

/// CRM / LIDO event type URI -> ALIADA class URI.
const EVENT_TYPES: &[(&str, &str)] = &[
    (
        "http://www.cidoc-crm.org/crm-concepts/E65",
        "http://erlangen-crm.org/current/E65_Creation",
    ),
    (
        "http://terminology.lido-schema.org/lido00012",
        "http://erlangen-crm.org/current/E65_Creation",
    ),
];

/// Immutable lookup tables, built once at startup.
#[derive(Debug, Clone)]
pub struct VocabularyTables {
    classes: HashMap<&'static str, &'static str>,
    event_types: HashMap<&'static str, &'static str>,
}

impl VocabularyTables {
    /// The built-in ALIADA mappings.
    pub fn aliada() -> Self {
        Self {
            classes: CLASSES.iter().copied().collect(),
            event_types: EVENT_TYPES.iter().copied().collect(),
        }
    }

    pub fn class(&self, crm_class: &str) -> Option<&'static str> {
        self.classes.get(crm_class).copied()
    }

    pub fn event_type(&self, crm_class: &str) -> Option<&'static str> {
        self.event_types.get(crm_class).copied()
    }
}

impl Default for VocabularyTables {
    fn default() -> Self {
        Self::aliada()
    }
}
