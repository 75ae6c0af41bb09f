//! Add/edit form handling.
//!
//! The mode is chosen by whether an id was supplied. Edit mode always starts
//! from the stored record; an unknown id yields [`FormState::NotFound`] and
//! nothing is ever written for it.

use crate::commands::{list, CmdMessage, CmdResult};
use crate::error::{FitcrmError, Result};
use crate::model::{ClientForm, ClientId};
use crate::store::RecordStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(ClientId),
}

impl FormMode {
    pub fn from_id(id: Option<ClientId>) -> Self {
        match id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Add,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Blank,
    Prefilled(ClientForm),
    NotFound(ClientId),
}

pub fn open<S: RecordStore>(store: &S, mode: &FormMode) -> Result<FormState> {
    match mode {
        FormMode::Add => Ok(FormState::Blank),
        FormMode::Edit(id) => Ok(match store.find_by_id(id)? {
            Some(record) => FormState::Prefilled(ClientForm::from(&record)),
            None => FormState::NotFound(id.clone()),
        }),
    }
}

/// Validates and persists the form. On success the result carries the saved
/// record and the full client list to show next.
///
/// A validation failure is returned as [`FitcrmError::Validation`] and the
/// store is not touched.
pub fn submit<S: RecordStore>(store: &mut S, mode: &FormMode, form: ClientForm) -> Result<CmdResult> {
    let fields = form.into_fields()?;

    let mut result = CmdResult::default();
    let saved = match mode {
        FormMode::Add => store.create(fields)?,
        FormMode::Edit(id) => match store.update(id, fields) {
            Ok(record) => record,
            Err(FitcrmError::ClientNotFound(id)) => {
                result.add_message(CmdMessage::error(format!("Client not found: {}", id)));
                return Ok(result);
            }
            Err(e) => return Err(e),
        },
    };

    let verb = match mode {
        FormMode::Add => "added",
        FormMode::Edit(_) => "updated",
    };
    result.add_message(CmdMessage::success(format!(
        "Client {}: {} ({})",
        verb, saved.fields.full_name, saved.id
    )));

    let listing = list::run(store, "")?;
    Ok(result.with_affected_clients(vec![saved]).with_listing(listing))
}
