//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every fitcrm operation, whatever the UI.
//!
//! It dispatches to `commands/*.rs`, turns loose inputs (raw id strings) into
//! typed ones, and returns structured values. It does no business logic and
//! no I/O of its own.
//!
//! `FitcrmApi<S: RecordStore>` is generic over the storage backend:
//! `FitcrmApi<FileStore>` in the binary, `FitcrmApi<InMemoryStore>` in tests.

use crate::commands::{self, delete::Confirm, detail::DetailView, form::FormState};
use crate::enrich::{Enrichment, ExerciseSource};
use crate::error::Result;
use crate::model::{ClientForm, ClientId, ClientRecord};
use crate::store::RecordStore;

pub struct FitcrmApi<S: RecordStore> {
    store: S,
    paths: commands::FitcrmPaths,
}

impl<S: RecordStore> FitcrmApi<S> {
    pub fn new(store: S, paths: commands::FitcrmPaths) -> Self {
        Self { store, paths }
    }

    pub fn list_clients(&self, filter: &str) -> Result<ClientListing> {
        commands::list::run(&self.store, filter)
    }

    pub fn open_form(&self, id: Option<&str>) -> Result<FormState> {
        commands::form::open(&self.store, &form_mode(id))
    }

    pub fn submit_form(&mut self, id: Option<&str>, form: ClientForm) -> Result<CmdResult> {
        commands::form::submit(&mut self.store, &form_mode(id), form)
    }

    pub fn delete_client<C: Confirm + ?Sized>(
        &mut self,
        id: &str,
        filter: &str,
        confirm: &mut C,
    ) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, &ClientId::from(id), filter, confirm)
    }

    pub fn view_client(&self, id: &str) -> Result<DetailView> {
        commands::detail::load(&self.store, &ClientId::from(id))
    }

    pub fn exercise_suggestions<E: ExerciseSource + ?Sized>(
        &self,
        client: &ClientRecord,
        source: &E,
    ) -> Enrichment {
        commands::detail::suggestions(client, source)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        let location = self.paths.data_dir.display().to_string();
        commands::init::run(&mut self.store, &location)
    }

    pub fn paths(&self) -> &commands::FitcrmPaths {
        &self.paths
    }
}

fn form_mode(id: Option<&str>) -> FormMode {
    FormMode::from_id(id.map(ClientId::from))
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::delete::AssumeYes;
pub use crate::commands::form::FormMode;
pub use commands::{ClientListing, CmdMessage, CmdResult, FitcrmPaths, MessageLevel};
