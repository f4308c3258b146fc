use proptest::prelude::*;

use super::*;

#[test]
fn test_control_tokens_fixed_ids() {
    let v = Vocabulary::with_controls();
    assert_eq!(v.len(), 4);
    for control in ControlToken::ALL {
        assert_eq!(v.get(control.as_str()), Some(control.id()));
    }
    assert_eq!(v.token_at(0), Some("<PAD>"));
    assert_eq!(v.token_at(3), Some("<UNK>"));
}

#[test]
fn test_vocabulary_is_never_empty() {
    assert!(!Vocabulary::with_controls().is_empty());
    assert!(!Vocabulary::default().is_empty());
    let stored = Vocabulary::with_controls().tokens().to_vec();
    assert!(!Vocabulary::from_tokens(stored).unwrap().is_empty());
}

#[test]
fn test_seeded_phone_alphabet() {
    let reg = VocabRegistry::new();
    assert_eq!(reg.phone.len(), 47);
    assert_eq!(reg.phone.get("n"), Some(4));
    assert_eq!(reg.phone.get("o::"), Some(46));
    assert_eq!(reg.mora_phone.len(), 39);
    assert_eq!(reg.mora_phone.get("N"), Some(4));
    assert_eq!(reg.mora.len(), 4);
    assert_eq!(reg.ortho.len(), 4);
}

#[test]
fn test_index_of_appends_once() {
    let mut v = Vocabulary::with_controls();
    assert_eq!(v.index_of("ば"), 4);
    assert_eq!(v.index_of("す"), 5);
    assert_eq!(v.index_of("ば"), 4);
    assert_eq!(v.len(), 6);
}

#[test]
fn test_seeded_skips_duplicates() {
    let v = Vocabulary::seeded(&["a", "<PAD>", "b", "a"]);
    assert_eq!(v.tokens(), &["<PAD>", "<EOW>", "<SOW>", "<UNK>", "a", "b"]);
}

#[test]
fn test_encode_decode() {
    let mut v = Vocabulary::with_controls();
    let ids = v.encode(&["ス", "ー", "パ", "ー"]);
    assert_eq!(ids, vec![4, 5, 6, 5]);
    assert_eq!(v.decode(&ids).unwrap(), vec!["ス", "ー", "パ", "ー"]);
}

#[test]
fn test_decode_out_of_range() {
    let v = Vocabulary::with_controls();
    match v.decode(&[0, 99]) {
        Err(VocabError::IdOutOfRange { id, len }) => {
            assert_eq!(id, 99);
            assert_eq!(len, 4);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_encode_known_does_not_grow() {
    let reg = VocabRegistry::new();
    assert_eq!(reg.phone.encode_known(&["b", "a"]).unwrap(), vec![23, 7]);
    assert!(matches!(
        reg.phone.encode_known(&["b", "v"]),
        Err(VocabError::UnknownToken(t)) if t == "v"
    ));
    assert_eq!(reg.phone.len(), 47);
}

#[test]
fn test_observe_counts() {
    let mut v = Vocabulary::with_controls();
    v.observe("か");
    v.observe("か");
    v.observe("き");
    assert_eq!(v.count("か"), 2);
    assert_eq!(v.count("き"), 1);
    assert_eq!(v.count("く"), 0);
    assert_eq!(v.frequencies(), vec![("か", 2), ("き", 1)]);
}

#[test]
fn test_from_tokens_validates_controls() {
    let err = Vocabulary::from_tokens(vec!["<PAD>".into(), "a".into()]).unwrap_err();
    assert!(matches!(err, VocabError::MissingControl { id: 1, .. }));

    let mut tokens: Vec<String> = Vocabulary::with_controls().tokens().to_vec();
    tokens.push("a".into());
    tokens.push("a".into());
    let err = Vocabulary::from_tokens(tokens).unwrap_err();
    assert!(matches!(err, VocabError::DuplicateToken(t) if t == "a"));
}

#[test]
fn test_registry_bytes_roundtrip() {
    let mut reg = VocabRegistry::new();
    reg.ortho.encode(&["バ", "ス"]);
    reg.mora.encode(&["ば", "す"]);
    let bytes = reg.to_bytes().unwrap();
    assert_eq!(&bytes[0..4], b"CCVR");
    let loaded = VocabRegistry::from_bytes(&bytes).unwrap();
    for kind in VocabKind::ALL {
        assert_eq!(loaded.get(kind).tokens(), reg.get(kind).tokens(), "{kind}");
    }
}

#[test]
fn test_registry_bad_header() {
    assert!(matches!(
        VocabRegistry::from_bytes(b"CC"),
        Err(VocabError::InvalidHeader)
    ));
    assert!(matches!(
        VocabRegistry::from_bytes(b"XXXX\x01"),
        Err(VocabError::InvalidMagic)
    ));
    assert!(matches!(
        VocabRegistry::from_bytes(b"CCVR\x09"),
        Err(VocabError::UnsupportedVersion(9))
    ));
}

#[test]
fn test_registry_json_is_ordered_lists() {
    let mut reg = VocabRegistry::new();
    reg.mora.encode(&["す", "う"]);
    let json = reg.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["mora"][4], "す");
    assert_eq!(value["mora"][5], "う");
    assert_eq!(value["phone"].as_array().unwrap().len(), 47);
}

#[test]
fn test_registry_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["vocab.ccvr", "vocab.json"] {
        let path = dir.path().join("nested").join(name);
        let mut reg = VocabRegistry::new();
        reg.ortho.encode(&["犬"]);
        reg.save(&path).unwrap();
        assert!(!path.with_extension("tmp").exists());

        let loaded = VocabRegistry::load(&path).unwrap();
        assert_eq!(loaded.ortho.get("犬"), Some(4), "{name}");
    }
}

#[test]
fn test_vocab_kind_parse() {
    for kind in VocabKind::ALL {
        assert_eq!(kind.as_str().parse::<VocabKind>().unwrap(), kind);
    }
    assert!("nope".parse::<VocabKind>().is_err());
}

proptest! {
    #[test]
    fn encode_decode_encode_is_stable(tokens in proptest::collection::vec("[a-zあ-ん]{1,3}", 0..20)) {
        let mut v = Vocabulary::with_controls();
        let ids = v.encode(&tokens);
        let decoded: Vec<String> = v.decode(&ids).unwrap().into_iter().map(str::to_string).collect();
        prop_assert_eq!(&decoded, &tokens);
        let len = v.len();
        prop_assert_eq!(v.encode(&decoded), ids);
        prop_assert_eq!(v.len(), len);
    }

    #[test]
    fn registry_bytes_roundtrip_preserves_ids(tokens in proptest::collection::vec("[ぁ-ゖ]{1,2}", 0..20)) {
        let mut reg = VocabRegistry::new();
        let ids = reg.mora.encode(&tokens);
        let loaded = VocabRegistry::from_bytes(&reg.to_bytes().unwrap()).unwrap();
        prop_assert_eq!(loaded.mora.encode_known(&tokens).unwrap(), ids);
    }
}
