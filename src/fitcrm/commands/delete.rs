use crate::commands::{list, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ClientId;
use crate::store::RecordStore;

/// Asks the user a yes/no question before something irreversible happens.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Answers yes without asking (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Deletes a client after confirmation, then re-lists with the same filter.
pub fn run<S: RecordStore, C: Confirm + ?Sized>(
    store: &mut S,
    id: &ClientId,
    filter: &str,
    confirm: &mut C,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.find_by_id(id)? {
        None => {
            result.add_message(CmdMessage::warning(format!("Client not found: {}", id)));
        }
        Some(client) => {
            let prompt = format!(
                "Are you sure you want to delete {}?",
                client.fields.full_name
            );
            if confirm.confirm(&prompt)? {
                store.delete(id)?;
                result.add_message(CmdMessage::success(format!(
                    "Client deleted: {}",
                    client.fields.full_name
                )));
                result.affected_clients.push(client);
            } else {
                result.add_message(CmdMessage::info("Deletion cancelled."));
            }
        }
    }

    Ok(result.with_listing(list::run(store, filter)?))
}
