use std::collections::{HashMap, HashSet};

use rescomp_core::lang::keywords;
use rescomp_core::lang::vocab;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
    assert_eq!(seen.len(), 15, "the language has exactly fifteen statement keywords");
}

#[test]
fn keywords_are_upper_case_identifiers() {
    for info in keywords::KEYWORDS {
        let mut chars = info.canonical.chars();
        let first = chars.next().expect("empty keyword spelling");
        assert!(first.is_ascii_uppercase(), "keyword must start with a letter: {}", info.canonical);
        assert!(
            chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
            "keyword must be upper-case alphanumeric: {}",
            info.canonical
        );
    }
}

#[test]
fn keyword_examples_start_with_their_keyword() {
    for info in keywords::KEYWORDS {
        for ex in info.examples {
            let head = ex.code.split_whitespace().next().unwrap_or("");
            assert_eq!(head, info.canonical, "example for {:?} starts with {:?}", info.id, head);
        }
    }
}

#[test]
fn vocab_registry_covers_every_id_once() {
    let mut ids = HashSet::new();
    for v in vocab::VOCABULARIES {
        assert!(ids.insert(v.id), "duplicate vocabulary entry {:?}", v.id);
        assert!(!v.spellings.is_empty(), "vocabulary {:?} has no spellings", v.id);
        assert_eq!(vocab::info_for(v.id).name, v.name);
    }
    assert_eq!(ids.len(), 11);
}

#[test]
fn vocab_spellings_unique_within_vocab_and_resolvable() {
    for v in vocab::VOCABULARIES {
        let mut seen = HashSet::new();
        for &s in v.spellings {
            assert!(seen.insert(s), "duplicate spelling {:?} in {:?}", s, v.id);
            assert_eq!(vocab::lookup(v.id, s), Some(s));
        }
    }
}

#[test]
fn vocab_spellings_are_single_tokens() {
    // Every spelling must lex as one identifier or one integer literal.
    for v in vocab::VOCABULARIES {
        for &s in v.spellings {
            let ident = s.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
                && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            let int = s.strip_prefix('-').unwrap_or(s).chars().all(|c| c.is_ascii_digit());
            assert!(ident || int, "spelling {:?} of {:?} is not a single token", s, v.id);
        }
    }
}
