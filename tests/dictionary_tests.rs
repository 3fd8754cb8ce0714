use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use termle::dictionary::{Dictionary, WordSource};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("termle-{}-{}", std::process::id(), name))
}

#[tokio::test]
async fn test_load_from_file() {
    let path = temp_path("words.txt");
    std::fs::write(&path, "crane\nslate\r\n\n adieu \n").unwrap();

    let dict = Dictionary::load(&WordSource::File(path.clone())).await;
    std::fs::remove_file(&path).unwrap();

    assert_eq!(dict.words(), ["crane", "slate", "adieu"]);
}

#[tokio::test]
async fn test_missing_file_gives_empty_dictionary() {
    let dict = Dictionary::load(&WordSource::File(temp_path("does-not-exist.txt"))).await;
    assert!(dict.is_empty());
}

#[tokio::test]
async fn test_file_without_words_gives_empty_dictionary() {
    let path = temp_path("junk.txt");
    std::fs::write(&path, "toolongword\nab\n\n").unwrap();

    let dict = Dictionary::load(&WordSource::File(path.clone())).await;
    std::fs::remove_file(&path).unwrap();

    assert!(dict.is_empty());
}

#[tokio::test]
async fn test_embedded_source() {
    let dict = Dictionary::load(&WordSource::Embedded).await;
    assert_eq!(dict, Dictionary::embedded());
}

#[test]
fn test_chosen_word_is_in_dictionary() {
    for text in ["crane\n", "crane\nslate\n", "crane\nslate\nadieu\nmouse\nhorse\n"] {
        let dict = Dictionary::parse(text);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let word = dict.choose(&mut rng).unwrap();
            assert!(dict.words().iter().any(|w| w == word));
        }
    }
}

#[test]
fn test_choose_from_empty() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(Dictionary::default().choose(&mut rng).is_none());
}

#[test]
fn test_choice_covers_the_list() {
    let dict = Dictionary::parse("crane\nslate\nadieu\n");
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(dict.choose(&mut rng).unwrap().to_string());
    }
    assert_eq!(seen.len(), 3);
}
