//! DTOs for the providers listing.

use serde::Serialize;

use crate::domain::deduction::RegistryEntry;

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Ats,
    Board,
}

/// One registry entry, as listed by `GET /api/providers`.
#[derive(Debug, Serialize)]
pub struct ProviderResponse {
    pub name: &'static str,
    pub kind: ProviderKind,
    /// Matchers in evaluation order (`=host` exact, `host` suffix, `/re/` pattern).
    pub domains: Vec<String>,
}

impl From<&RegistryEntry> for ProviderResponse {
    fn from(entry: &RegistryEntry) -> Self {
        Self {
            name: entry.name,
            kind: if entry.is_ats() {
                ProviderKind::Ats
            } else {
                ProviderKind::Board
            },
            domains: entry.matchers.iter().map(|m| m.describe()).collect(),
        }
    }
}
