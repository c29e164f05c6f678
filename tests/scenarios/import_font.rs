//! Scenario: Importing a Custom Font
//!
//! Journey: A user picks "My Font.ttf" from their downloads and wants it on
//! the lock screen title.
//!
//! Steps:
//! 1. Import the picked file
//! 2. Find it in the font list after the packaged fonts
//! 3. Select it and enable the title text
//! 4. Delete it again
//!
//! Success Criteria:
//! - The copy is named `<timestamp>_My_Font.ttf` inside private font storage
//! - The title uses the imported font while it exists
//! - Deleting it falls back to the platform default font

use lookatme::domain::ports::AssetStore;
use lookatme::{AppearancePlan, AssetKind, LocalFileSource, Settings};

use crate::common::*;

#[test]
fn scenario_import_select_and_delete_font() {
    let env = TestEnv::new();
    let library = env.library();
    let picked = env.write_work_file("My Font.ttf", b"\x00\x01\x00\x00font");

    // Step 1: import
    let asset = library
        .import(&mut LocalFileSource::new(&picked), AssetKind::Font)
        .expect("import should succeed");
    let path = asset.path().expect("imported asset has a path").to_path_buf();

    assert_in_private_dir(&env, "fonts", &path);
    let file_name = path.file_name().unwrap().to_str().unwrap();
    let (timestamp, rest) = file_name.split_once('_').unwrap();
    assert!(
        timestamp.chars().all(|c| c.is_ascii_digit()),
        "expected a millisecond prefix, got {}",
        file_name
    );
    assert_eq!(rest, "My_Font.ttf");
    assert_eq!(std::fs::read(&path).unwrap(), std::fs::read(&picked).unwrap());
    assert_eq!(
        library.store().list_paths(AssetKind::Font).unwrap(),
        vec![path.clone()]
    );

    // Step 2: listed after the packaged fonts
    let fonts = library.list(AssetKind::Font).unwrap();
    let first_imported = fonts.iter().position(|a| !a.is_packaged()).unwrap();
    assert!(fonts[..first_imported].iter().all(|a| a.is_packaged()));
    assert_eq!(fonts.last(), Some(&asset));

    // Step 3: select and enable the title
    library.select(AssetKind::Font, &asset.identifier()).unwrap();
    Settings::update(&env.settings_path(), |s| s.text.enabled = true).unwrap();

    let plan = AppearancePlan::from_settings(&Settings::load(&env.settings_path()).unwrap());
    let text = plan.text.expect("title should be visible");
    assert_eq!(text.font, Some(asset.identifier()));

    // Step 4: delete
    let report = library.delete(&asset, AssetKind::Font).unwrap();
    assert!(report.selection_cleared);
    assert!(!path.exists());

    let plan = AppearancePlan::from_settings(&Settings::load(&env.settings_path()).unwrap());
    assert_eq!(plan.text.and_then(|t| t.font), None);
    assert!(library.store().list_paths(AssetKind::Font).unwrap().is_empty());
}

#[test]
fn scenario_import_without_display_name_uses_placeholder() {
    use lookatme::domain::ports::{ContentSource, SourceError};

    struct Anonymous;

    impl ContentSource for Anonymous {
        fn display_name(&self) -> Option<String> {
            None
        }

        fn mime_type(&self) -> Option<String> {
            Some("audio/ogg".to_string())
        }

        fn open(&mut self) -> Result<Box<dyn std::io::Read + '_>, SourceError> {
            Ok(Box::new(&b"ogg"[..]))
        }
    }

    let env = TestEnv::new();
    let asset = env
        .library()
        .import(&mut Anonymous, AssetKind::Sound)
        .unwrap();

    assert!(asset.name().ends_with("_unknown_file"));
}

#[test]
fn scenario_stale_record_does_not_resolve_other_kind() {
    let env = TestEnv::new();
    let library = env.library();
    let picked = env.write_work_file("cat.png", b"png");

    let image = library
        .import(&mut LocalFileSource::new(&picked), AssetKind::Image)
        .unwrap();

    // An image path is not a font
    assert!(library.select(AssetKind::Font, &image.identifier()).is_err());
    assert!(library.select(AssetKind::Image, &image.identifier()).is_ok());
}
