//! Property tests for the imported-asset store.

use proptest::prelude::*;
use tempfile::TempDir;

use lookatme::domain::ports::{AssetStore, ContentSource, SourceError};
use lookatme::infrastructure::repositories::sanitize_file_name;
use lookatme::{AssetKind, TomlAssetStore};

struct MemorySource {
    name: Option<String>,
    bytes: Vec<u8>,
}

impl ContentSource for MemorySource {
    fn display_name(&self) -> Option<String> {
        self.name.clone()
    }

    fn mime_type(&self) -> Option<String> {
        None
    }

    fn open(&mut self) -> Result<Box<dyn std::io::Read + '_>, SourceError> {
        Ok(Box::new(self.bytes.as_slice()))
    }
}

fn kind() -> impl Strategy<Value = AssetKind> {
    prop_oneof![
        Just(AssetKind::Font),
        Just(AssetKind::Image),
        Just(AssetKind::Sound),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A copied and recorded file is listed exactly once, with the
    /// bytes it was given.
    #[test]
    fn property_copy_then_record_lists_once(
        kind in kind(),
        name in proptest::option::of("(?s).{0,40}"),
        bytes in proptest::collection::vec(any::<u8>(), 0..2048),
    ) {
        let root = TempDir::new().unwrap();
        let store = TomlAssetStore::new(root.path());
        let mut source = MemorySource { name: name.clone(), bytes: bytes.clone() };

        let path = store.copy_to_private_storage(&mut source, kind).unwrap();
        store.record_path(kind, &path).unwrap();
        store.record_path(kind, &path).unwrap();

        let listed = store.list_paths(kind).unwrap();
        prop_assert_eq!(listed.iter().filter(|p| **p == path).count(), 1);
        prop_assert_eq!(std::fs::read(&path).unwrap(), bytes);

        let file_name = path.file_name().unwrap().to_str().unwrap().to_string();
        let expected_suffix = format!("_{}", sanitize_file_name(name.as_deref()));
        prop_assert!(file_name.ends_with(&expected_suffix));
    }

    /// PROPERTY: Sanitized names only contain `[A-Za-z0-9._-]`.
    #[test]
    fn property_sanitized_names_are_safe(name in "(?s).{0,64}") {
        let sanitized = sanitize_file_name(Some(&name));
        prop_assert!(!sanitized.is_empty());
        prop_assert!(sanitized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')));
    }

    /// PROPERTY: After `delete`, the path is never listed.
    #[test]
    fn property_deleted_path_is_never_listed(
        kind in kind(),
        count in 1usize..5,
        victim in any::<prop::sample::Index>(),
    ) {
        let root = TempDir::new().unwrap();
        let store = TomlAssetStore::new(root.path());

        let mut paths = Vec::new();
        for i in 0..count {
            let mut source = MemorySource { name: Some(format!("asset{}.bin", i)), bytes: vec![i as u8] };
            let path = store.copy_to_private_storage(&mut source, kind).unwrap();
            store.record_path(kind, &path).unwrap();
            paths.push(path);
        }

        let target = victim.get(&paths).clone();
        store.delete(kind, &target).unwrap();

        let listed = store.list_paths(kind).unwrap();
        prop_assert!(!listed.contains(&target));
        prop_assert_eq!(listed.len(), count - 1);
        prop_assert!(!target.exists());
    }
}
