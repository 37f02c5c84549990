use tracing::debug;

use crate::habitat::HabitatCollection;

/// Identifies the county selection that triggered a shard load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTicket {
    generation: u64,
    county: String,
}

impl SelectionTicket {
    #[inline]
    pub fn county(&self) -> &str { &self.county }
}

/// Tracks the current county selection so that shard loads finishing out of
/// order cannot overwrite a newer selection's data.
#[derive(Debug, Default)]
pub struct CountySelection {
    generation: u64,
    current: Option<(String, HabitatCollection)>,
}

impl CountySelection {
    pub fn new() -> Self { Self::default() }

    /// Record a new selection; every ticket issued before this one becomes stale.
    pub fn select(&mut self, county: impl Into<String>) -> SelectionTicket {
        self.generation += 1;
        SelectionTicket { generation: self.generation, county: county.into() }
    }

    #[inline]
    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Store a finished load if its ticket is still current. Returns whether it was kept.
    pub fn accept(&mut self, ticket: SelectionTicket, collection: HabitatCollection) -> bool {
        if !self.is_current(&ticket) {
            debug!(county = %ticket.county, "discarding stale county load");
            return false
        }
        self.current = Some((ticket.county, collection));
        true
    }

    /// County and features of the most recent accepted load.
    pub fn current(&self) -> Option<(&str, &HabitatCollection)> {
        self.current.as_ref().map(|(county, collection)| (county.as_str(), collection))
    }

    /// Drop the loaded data and invalidate every outstanding ticket.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.current = None;
    }
}
