use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

/// Creates the data directory and an empty roster slot. An existing slot is
/// never rewritten, even one that no longer parses.
pub fn run<S: RecordStore>(store: &mut S, location: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.is_initialized()? {
        let count = store.load_all()?.len();
        result.add_message(CmdMessage::info(format!(
            "Roster already present at {} ({} clients)",
            location, count
        )));
    } else {
        store.save_all(&[])?;
        result.add_message(CmdMessage::success(format!(
            "Initialized fitcrm roster at {}",
            location
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs::FileStore;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn creates_empty_slot() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("data"));
        run(&mut store, "test").unwrap();

        assert!(store.slot_path().exists());
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn keeps_existing_clients() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store
            .create(crate::store::memory::fixtures::fields("Ann"))
            .unwrap();

        let result = run(&mut store, "test").unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);
        assert!(result.messages[0].content.contains("1 clients"));
    }

    #[test]
    fn leaves_unreadable_slot_untouched() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        let raw = r#"[{"id":"a1","fullName":"Ann","age":34,"gender":"Female",
            "email":"ann@x.io","goal":"Weight Loss","startDate":"2024-01-02",
            "lastUpdated":"2024-01-02"},
            {"id":"b2","fullName":"Bo","age":300,"gender":"Male","email":"bo@x.io",
            "goal":"Muscle Gain","startDate":"2024-01-03","lastUpdated":"2024-01-03"}]"#;
        fs::write(store.slot_path(), raw).unwrap();

        run(&mut store, "test").unwrap();

        assert_eq!(fs::read_to_string(store.slot_path()).unwrap(), raw);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
