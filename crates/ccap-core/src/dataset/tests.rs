use std::collections::HashMap;

use super::*;
use crate::vocab::VocabRegistry;

fn options(train_size: usize) -> AssemblyOptions {
    AssemblyOptions {
        train_size,
        test_delimiter: "／".into(),
        skip_ascii: true,
        skip_symbols: true,
        strip_chars: vec!["・".into()],
        substitutions: vec![("ヴ".into(), "ブ".into())],
        max_passes: 4,
    }
}

fn readings() -> HashMap<String, String> {
    [
        ("犬", "いぬ"),
        ("猫", "ねこ"),
        ("バス", "ばす"),
        ("スーパー", "すーぱー"),
        ("ブイ", "ぶい"),
        ("鉛筆", "えんぴつ"),
        ("帽子", "ぼうし"),
        ("外", "ゔぃ"),
        ("空", ""),
    ]
    .into_iter()
    .map(|(w, r)| (w.to_string(), r.to_string()))
    .collect()
}

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_transcribe_bus() {
    let mut reg = VocabRegistry::new();
    let rec = transcribe("バス", "ばす", &mut reg, PhonemePolicy::Strict).unwrap();
    assert_eq!(rec.ortho.tokens, strings(&["バ", "ス"]));
    assert_eq!(rec.ortho.ids, vec![4, 5]);
    assert_eq!(rec.ortho.reversed, strings(&["ス", "バ"]));
    assert_eq!(rec.ortho.reversed_ids, vec![5, 4]);
    assert_eq!(rec.phone.tokens, strings(&["b", "a", "s", "u"]));
    assert_eq!(rec.phone.ids, vec![23, 7, 19, 12]);
    assert_eq!(rec.phone.reversed_ids, vec![12, 19, 7, 23]);
    assert_eq!(rec.mora.tokens, strings(&["ば", "す"]));
    assert_eq!(rec.mora_phone.ids, vec![6, 5, 31, 35]);
    assert_eq!(rec.mora_phone.reversed, strings(&["u", "s", "a", "b"]));
}

#[test]
fn test_transcribe_katakana_reading() {
    let mut reg = VocabRegistry::new();
    let rec = transcribe("スーパー", "スーパー", &mut reg, PhonemePolicy::Strict).unwrap();
    assert_eq!(rec.reading, "すーぱー");
    assert_eq!(rec.raw_mora, strings(&["す", "ー", "ぱ", "ー"]));
    assert_eq!(rec.mora.tokens, strings(&["す", "う", "ぱ", "あ"]));
    assert_eq!(rec.phone.tokens, strings(&["s", "u:", "p", "a:"]));
}

#[test]
fn test_strict_policy_rejects_without_mutation() {
    let mut reg = VocabRegistry::new();
    let before = reg.clone();
    // A stray latin letter passes through the transducer and fuses with the vowel.
    let err = transcribe("x", "かx", &mut reg, PhonemePolicy::Strict).unwrap_err();
    assert!(matches!(err, TransformError::UnknownPhoneme { ref phoneme, .. } if phoneme == "ax"));
    assert_eq!(reg, before);
}

#[test]
fn test_extend_policy_grows_phone_vocab() {
    let mut reg = VocabRegistry::new();
    let rec = transcribe("x", "かx", &mut reg, PhonemePolicy::Extend);
    // The mora tokenizer drops the latin letter, so only the phone vocabulary
    // learns the new token.
    let rec = rec.unwrap();
    assert_eq!(rec.phone.tokens, strings(&["k", "ax"]));
    assert_eq!(reg.phone.get("ax"), Some(47));
}

#[test]
fn test_record_reports_stray_characters() {
    let mut reg = VocabRegistry::new();
    let rec = transcribe("犬", "いぬ1", &mut reg, PhonemePolicy::Extend).unwrap();
    // The phone channel fuses the digit into the last phoneme while the
    // mora channel skips it; the record says so.
    assert_eq!(rec.phone.tokens, strings(&["i", "n", "u1"]));
    assert_eq!(rec.mora.tokens, strings(&["い", "ぬ"]));
    assert_eq!(rec.unmapped, vec!['1']);
    assert_eq!(rec.dropped, vec!['1']);
    assert!(!rec.is_clean());

    let value = serde_json::to_value(&rec).unwrap();
    assert_eq!(value["unmapped"][0], "1");

    let clean = transcribe("猫", "ねこ", &mut reg, PhonemePolicy::Extend).unwrap();
    assert!(clean.is_clean());
}

#[test]
fn test_symbol_words() {
    assert!(is_symbol_word("・・"));
    assert!(is_symbol_word("ー"));
    assert!(is_symbol_word("ＡＢ"));
    assert!(!is_symbol_word("犬"));
    assert!(!is_symbol_word("ー犬"));
    assert!(!is_symbol_word(""));
}

#[test]
fn test_test_words_split_and_filtered() {
    let emb = WordSet::from_iter(strings(&["犬", "猫", "バス"]));
    let map = readings();
    let asm = DatasetAssembler::new(&map, &emb).with_options(options(10));
    let words = asm.test_words(&strings(&["犬／猫", "鳥", "バス"]));
    assert_eq!(words, strings(&["犬", "猫", "バス"]));
}

#[test]
fn test_clean_train_word() {
    let emb = AcceptAll;
    let map = readings();
    let asm = DatasetAssembler::new(&map, &emb).with_options(options(10));
    assert_eq!(asm.clean_train_word("ヴイ"), "ブイ");
    assert_eq!(asm.clean_train_word("バ・ス"), "バス");
    assert_eq!(asm.clean_train_word("ﾊﾞｽ"), "バス");
}

#[test]
fn test_assemble_train_then_test() {
    let emb = WordSet::from_iter(strings(&[
        "犬", "猫", "バス", "スーパー", "鉛筆", "帽子", "ブイ",
    ]));
    let map = readings();
    let asm = DatasetAssembler::new(&map, &emb).with_options(options(3));
    let freq = strings(&["\u{3000}", "。", "abc", "猫", "ヴイ", "鳥", "犬", "スーパー", "鉛筆"]);
    let mut reg = VocabRegistry::new();
    let corpus = asm.assemble(&freq, &strings(&["犬／帽子"]), &mut reg);

    let train: Vec<&str> = corpus.train.iter().map(|r| r.orig.as_str()).collect();
    // 犬 is a test word; 鳥 has no embedding; the cap stops before 鉛筆.
    assert_eq!(train, vec!["猫", "ブイ", "スーパー"]);
    let test: Vec<&str> = corpus.test.iter().map(|r| r.orig.as_str()).collect();
    assert_eq!(test, vec!["犬", "帽子"]);
    assert!(corpus.excluded.is_empty());

    // Training ids are assigned first.
    assert_eq!(reg.ortho.get("猫"), Some(4));
    assert_eq!(corpus.max_lengths.ortho, 4);
    assert_eq!(corpus.max_lengths.mora, 4);
    assert_eq!(corpus.max_lengths.mora_phone, 6);
}

#[test]
fn test_malformed_reading_excluded_and_assembly_continues() {
    let emb = AcceptAll;
    let map = readings();
    let asm = DatasetAssembler::new(&map, &emb).with_options(options(10));
    let mut reg = VocabRegistry::new();
    let corpus = asm.assemble(&strings(&["外", "犬", "空", "鳥"]), &[], &mut reg);

    let train: Vec<&str> = corpus.train.iter().map(|r| r.orig.as_str()).collect();
    assert_eq!(train, vec!["犬"]);
    assert_eq!(
        corpus.excluded,
        vec![
            Exclusion {
                word: "外".into(),
                split: Split::Train,
                reason: ExclusionReason::MalformedReading { mora: "ゔぃ".into() },
            },
            Exclusion {
                word: "空".into(),
                split: Split::Train,
                reason: ExclusionReason::Empty,
            },
            Exclusion {
                word: "鳥".into(),
                split: Split::Train,
                reason: ExclusionReason::NoReading,
            },
        ]
    );
    // The failed word left no trace in the vocabularies.
    assert_eq!(reg.ortho.get("外"), None);
}

#[test]
fn test_duplicate_training_words_count_once() {
    let emb = AcceptAll;
    let map = readings();
    let asm = DatasetAssembler::new(&map, &emb).with_options(options(10));
    let mut reg = VocabRegistry::new();
    let corpus = asm.assemble(&strings(&["犬", "犬", "猫"]), &[], &mut reg);
    assert_eq!(corpus.train.len(), 2);
}

#[test]
fn test_corpus_json() {
    let emb = AcceptAll;
    let map = readings();
    let asm = DatasetAssembler::new(&map, &emb).with_options(options(10));
    let mut reg = VocabRegistry::new();
    let corpus = asm.assemble(&strings(&["犬", "外"]), &strings(&["猫"]), &mut reg);
    let value: serde_json::Value = serde_json::from_str(&corpus.to_json().unwrap()).unwrap();
    assert_eq!(value["train"][0]["orig"], "犬");
    assert_eq!(value["test"][0]["mora"]["tokens"][0], "ね");
    assert_eq!(value["excluded"][0]["reason"]["kind"], "malformed_reading");
    assert_eq!(corpus.excluded_in(Split::Test).count(), 0);
}
