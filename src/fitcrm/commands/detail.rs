use crate::enrich::{self, Enrichment, ExerciseSource};
use crate::error::Result;
use crate::model::{ClientId, ClientRecord};
use crate::store::RecordStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Found(ClientRecord),
    NotFound(ClientId),
}

/// Loads the client shown on the detail screen. This is all local, so callers
/// can render it before starting the (slow) enrichment.
pub fn load<S: RecordStore>(store: &S, id: &ClientId) -> Result<DetailView> {
    Ok(match store.find_by_id(id)? {
        Some(client) => DetailView::Found(client),
        None => DetailView::NotFound(id.clone()),
    })
}

/// Resolves the exercise panel for an already loaded client.
pub fn suggestions<E: ExerciseSource + ?Sized>(client: &ClientRecord, source: &E) -> Enrichment {
    enrich::enrich(source, &client.fields.goal)
}
