use std::cell::Cell;

use futures::executor::block_on;

use super::*;

fn settings(language: &str) -> Settings {
    Settings { default_language: language.to_owned(), ..Settings::default() }
}

#[test]
fn saved_language_skips_settings_fetch() {
    let fetched = Cell::new(false);
    let resolved = block_on(resolve_initial_language(Some("en"), || {
        fetched.set(true);
        async { Ok(settings("es")) }
    }));
    assert_eq!(resolved, (Language::En, LanguageSource::Saved));
    assert!(!fetched.get());
}

#[test]
fn settings_default_used_when_nothing_saved() {
    let resolved = block_on(resolve_initial_language(None, || async { Ok(settings("en")) }));
    assert_eq!(resolved, (Language::En, LanguageSource::Settings));
}

#[test]
fn unknown_saved_code_falls_through_to_settings() {
    let resolved = block_on(resolve_initial_language(Some("fr"), || async { Ok(settings("es")) }));
    assert_eq!(resolved, (Language::Es, LanguageSource::Settings));
}

#[test]
fn failure_falls_back_to_spanish() {
    let resolved = block_on(resolve_initial_language(None, || async {
        Err(ApiError::Network("offline".to_owned()))
    }));
    assert_eq!(resolved, (Language::Es, LanguageSource::Fallback));
    let resolved = block_on(resolve_initial_language(None, || async { Ok(settings("")) }));
    assert_eq!(resolved, (Language::Es, LanguageSource::Fallback));
}

#[test]
fn labels_translate_and_unknown_keys_echo() {
    assert_eq!(tr(Language::Es, "save"), "Guardar");
    assert_eq!(tr(Language::En, "save"), "Save");
    assert_eq!(tr(Language::En, "no.such.key"), "no.such.key");
}

#[test]
fn table_keys_are_unique() {
    let mut keys: Vec<_> = TABLE.iter().map(|(k, _, _)| *k).collect();
    let total = keys.len();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), total);
}
