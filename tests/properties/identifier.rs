//! Property tests for tagged asset identifiers.

use proptest::prelude::*;

use lookatme::domain::value_objects::{AssetIdentifier, IdentifierError};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(raw in "(?s).{0,128}") {
        let _ = raw.parse::<AssetIdentifier>();
    }

    /// PROPERTY: Text without a known prefix is an error, never an asset.
    #[test]
    fn property_unprefixed_text_is_rejected(raw in "[A-Za-z0-9_./ ]{0,64}") {
        prop_assume!(!raw.contains(':'));
        prop_assert!(matches!(
            raw.parse::<AssetIdentifier>(),
            Err(IdentifierError::MissingPrefix(_))
        ));
    }

    /// PROPERTY: The persisted form of a resource id decodes to the same id.
    #[test]
    fn property_resource_text_decodes(id in any::<u32>()) {
        let text = AssetIdentifier::resource(id).to_string();
        prop_assert_eq!(text.parse::<AssetIdentifier>(), Ok(AssetIdentifier::resource(id)));
    }
}
