use std::sync::{Arc, PoisonError, RwLock};

use log::debug;

use super::source::PredictionTable;

#[derive(Debug, Default)]
struct Slot {
	table: Option<Arc<PredictionTable>>,
	generation: u64,
}

/// Holds the loaded prediction table for the lifetime of the app.
///
/// Cloning yields another handle onto the same slot. The table is loaded at
/// most once until [`PredictionCache::invalidate`] is called.
#[derive(Clone, Debug, Default)]
pub struct PredictionCache {
	slot: Arc<RwLock<Slot>>,
}

impl PredictionCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// The cached table, if loaded.
	pub fn get(&self) -> Option<Arc<PredictionTable>> {
		self.slot
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.table
			.clone()
	}

	/// Stores a freshly loaded table and returns the shared handle.
	pub fn insert(&self, table: PredictionTable) -> Arc<PredictionTable> {
		let table = Arc::new(table);
		let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
		slot.table = Some(table.clone());
		slot.generation += 1;
		debug!("Prediction cache filled (generation {})", slot.generation);
		table
	}

	/// Drops the cached table so the next load refetches it.
	pub fn invalidate(&self) {
		let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
		slot.table = None;
		debug!("Prediction cache invalidated");
	}

	/// Number of times a table has been inserted.
	pub fn generation(&self) -> u64 {
		self.slot
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.generation
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::predictions::PredictionRow;

	fn table() -> PredictionTable {
		PredictionTable::new(vec![PredictionRow::new("D1", "Aspirin", "X1", "Fever", 0.8, None)])
	}

	#[test]
	fn empty_until_inserted() {
		let cache = PredictionCache::new();
		assert!(cache.get().is_none());
		assert_eq!(cache.generation(), 0);

		cache.insert(table());
		assert_eq!(cache.get().map(|t| t.len()), Some(1));
		assert_eq!(cache.generation(), 1);
	}

	#[test]
	fn clones_share_the_slot() {
		let cache = PredictionCache::new();
		let other = cache.clone();
		cache.insert(table());
		assert!(other.get().is_some());

		other.invalidate();
		assert!(cache.get().is_none());
		assert_eq!(cache.generation(), 1);
	}
}
