//! Repository Tests
//!
//! Exercised through `MemoryRepository`, which runs the same codec as the
//! localStorage backend.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::domain::TodoItem;
    use crate::repository::{decode, encode, MemoryRepository, RepositoryError, TodoRepository};

    const NS: &str = "todos-test";

    fn sample() -> Vec<TodoItem> {
        let mut done = TodoItem::new(1, "Write docs");
        done.completed = true;
        vec![TodoItem::new(0, "Buy milk"), done, TodoItem::new(2, "Ship it")]
    }

    #[test]
    fn test_load_missing_namespace() {
        let repo = MemoryRepository::new();
        assert!(repo.load(NS).expect("load failed").is_none());
    }

    #[test]
    fn test_save_then_load() {
        let repo = MemoryRepository::new();
        repo.save(NS, &sample()).expect("save failed");

        let loaded = repo.load(NS).expect("load failed");
        assert_eq!(loaded, Some(sample()));
        assert_eq!(repo.save_count(), 1);
    }

    #[test]
    fn test_save_overwrites() {
        let repo = MemoryRepository::new();
        repo.save(NS, &sample()).unwrap();
        repo.save(NS, &[TodoItem::new(0, "Only one")]).unwrap();

        let loaded = repo.load(NS).unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Only one");
    }

    #[test]
    fn test_namespaces_are_separate() {
        let repo = MemoryRepository::new();
        repo.save(NS, &sample()).unwrap();
        assert!(repo.load("other").unwrap().is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let repo = MemoryRepository::new();
        let handle = repo.clone();
        repo.save(NS, &sample()).unwrap();
        assert_eq!(handle.load(NS).unwrap(), Some(sample()));
    }

    #[test]
    fn test_corrupt_data_is_codec_error() {
        let repo = MemoryRepository::new();
        repo.insert_raw(NS, "{not json");
        assert!(matches!(repo.load(NS), Err(RepositoryError::Codec(_))));
    }

    #[test]
    fn test_reads_legacy_layout() {
        let raw = r#"[{"id":"todo0","title":"a","completed":false},{"id":"todo1","title":"b","completed":true}]"#;
        let todos = decode(raw).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[1].id.as_str(), "todo1");
        assert!(todos[1].completed);
        assert_eq!(encode(&todos).unwrap(), raw);
    }

    #[test]
    fn test_empty_list_roundtrip() {
        let repo = MemoryRepository::new();
        repo.save(NS, &[]).unwrap();
        assert_eq!(repo.raw(NS).as_deref(), Some("[]"));
        assert_eq!(repo.load(NS).unwrap(), Some(Vec::new()));
    }

    proptest! {
        /// Property: save followed by load returns the same list.
        #[test]
        fn prop_save_load_roundtrip(
            entries in proptest::collection::vec((".{1,30}", any::<bool>()), 0..20)
        ) {
            let todos: Vec<TodoItem> = entries
                .into_iter()
                .enumerate()
                .map(|(i, (title, completed))| TodoItem { completed, ..TodoItem::new(i, title) })
                .collect();

            let repo = MemoryRepository::new();
            repo.save(NS, &todos).unwrap();
            prop_assert_eq!(repo.load(NS).unwrap(), Some(todos));
        }
    }
}
