use crate::error::Result;
use crate::model::ClientRecord;
use crate::store::RecordStore;

/// What the list screen shows: the clients matching `filter`, in roster order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientListing {
    pub filter: String,
    pub clients: Vec<ClientRecord>,
    pub count: usize,
}

pub fn run<S: RecordStore>(store: &S, filter: &str) -> Result<ClientListing> {
    let clients = store.search(filter)?;
    Ok(ClientListing {
        filter: filter.to_string(),
        count: clients.len(),
        clients,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn empty_filter_lists_everyone() {
        let fixture = StoreFixture::new().with_clients(&["Zed", "Amy"]);
        let listing = run(&fixture.store, "").unwrap();
        assert_eq!(listing.count, 2);
        assert_eq!(listing.clients[0].fields.full_name, "Zed");
        assert_eq!(listing.clients[1].fields.full_name, "Amy");
    }

    #[test]
    fn filter_counts_matches() {
        let fixture = StoreFixture::new().with_clients(&["Jane Doe", "John Doe", "Amy"]);
        let listing = run(&fixture.store, "doe").unwrap();
        assert_eq!(listing.count, 2);
        assert_eq!(listing.filter, "doe");

        let none = run(&fixture.store, "xyz").unwrap();
        assert_eq!(none.count, 0);
        assert!(none.clients.is_empty());
    }
}
