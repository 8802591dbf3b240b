//! Integration tests for TranslationContext.

use std::sync::{Arc, Mutex};

use dictum::{
    DictionaryBuilder, DictionaryError, FormatOptions, LanguageCode, RawDictionary, Selection,
    TranslateError, TranslationContext, UNIVERSAL_LANGUAGE, values,
};

fn dictionaries() -> DictionaryBuilder {
    DictionaryBuilder::new()
        .with(
            "en",
            RawDictionary::new()
                .separators(",", ".")
                .text("Personal.title", "Personal page")
                .text("Personal.jury", "Jury")
                .template("Personal.count", |args| {
                    let n = args.number(0)?;
                    Ok(format!("{n} {}", dictum::plural(n, "editathon", "editathons")))
                }),
        )
        .with(
            "ru",
            RawDictionary::new()
                .fallback("en")
                .separators("\u{a0}", ",")
                .text("Personal.title", "Личная страница"),
        )
        .with(
            "de",
            RawDictionary::new()
                .fallback("en")
                .text("Personal.title", "Persönliche Seite"),
        )
}

fn context(default_language: &str) -> TranslationContext {
    TranslationContext::builder()
        .dictionaries(dictionaries())
        .default_language(default_language)
        .build()
}

// =========================================================================
// Selection state
// =========================================================================

#[test]
fn starts_with_default_language() {
    let context = context("de");
    assert_eq!(context.selection(), &Selection::Default);
    assert_eq!(context.current_language(), LanguageCode::from("de"));
    assert_eq!(context.translate("Personal.title", &[]).unwrap(), "Persönliche Seite");
}

#[test]
fn set_language_switches_translations() {
    let mut context = context("en");
    context.set_language("ru").unwrap();
    assert_eq!(
        context.selection(),
        &Selection::Explicit(LanguageCode::from("ru"))
    );
    assert_eq!(context.current_language(), LanguageCode::from("ru"));
    assert_eq!(context.translate("Personal.title", &[]).unwrap(), "Личная страница");
    assert_eq!(context.translate("Personal.jury", &[]).unwrap(), "Jury");
}

#[test]
fn set_language_rejects_unknown_codes() {
    let mut context = context("en");
    context.set_language("ru").unwrap();

    let err = context.set_language("tlh").unwrap_err();
    assert_eq!(
        err,
        DictionaryError::UnknownLanguage {
            language: LanguageCode::from("tlh")
        }
    );
    // Selection is unchanged
    assert_eq!(context.current_language(), LanguageCode::from("ru"));
}

#[test]
fn unregistered_default_falls_back_to_universal_language() {
    let context = context("xx");
    assert_eq!(context.selected_language(), &LanguageCode::from("xx"));
    assert_eq!(context.current_language(), LanguageCode::from(UNIVERSAL_LANGUAGE));
    assert_eq!(context.translate("Personal.title", &[]).unwrap(), "Personal page");
}

#[test]
fn missing_universal_language_falls_back_to_first_registered() {
    let context = TranslationContext::builder()
        .dictionaries(
            DictionaryBuilder::new()
                .with("uk", RawDictionary::new().text("Personal.title", "Особиста сторінка"))
                .with("ru", RawDictionary::new().text("Personal.title", "Личная страница")),
        )
        .default_language("de")
        .build();

    assert_eq!(context.current_language(), LanguageCode::from("ru"));
    assert_eq!(context.translate("Personal.title", &[]).unwrap(), "Личная страница");
    assert_eq!(context.formats().unwrap().language(), &LanguageCode::from("ru"));
}

// =========================================================================
// Observer
// =========================================================================

#[test]
fn observer_is_notified_on_successful_switch() {
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let mut context = TranslationContext::builder()
        .dictionaries(dictionaries())
        .default_language("en")
        .on_set_language(Box::new(move |code: &LanguageCode| {
            sink.lock().unwrap().push(code.to_string());
        }))
        .build();

    context.set_language("ru").unwrap();
    assert!(context.set_language("tlh").is_err());
    context.set_language("de").unwrap();

    assert_eq!(*seen.lock().unwrap(), vec!["ru", "de"]);
}

// =========================================================================
// Translation helpers
// =========================================================================

#[test]
fn translate_passes_arguments() {
    let context = context("en");
    assert_eq!(
        context.translate("Personal.count", &values![2]).unwrap(),
        "2 editathons"
    );
}

#[test]
fn translate_from_ignores_current_language() {
    let mut context = context("en");
    context.set_language("ru").unwrap();
    assert_eq!(
        context.translate_from("de", "Personal.title", &[]).unwrap(),
        "Persönliche Seite"
    );
}

#[test]
fn translate_from_unknown_language_fails() {
    let context = context("en");
    let err = context.translate_from("tlh", "Personal.title", &[]).unwrap_err();
    assert!(matches!(
        err,
        TranslateError::Dictionary(DictionaryError::UnknownLanguage { .. })
    ));
}

#[test]
fn scoped_translator_follows_current_language() {
    let mut context = context("en");
    context.set_language("ru").unwrap();
    let personal = context.scoped("Personal").unwrap();
    assert_eq!(personal.tr("title", &[]).unwrap(), "Личная страница");
    assert_eq!(personal.tr("jury", &[]).unwrap(), "Jury");
}

#[test]
fn formats_follow_current_language() {
    let mut context = context("en");
    let options = FormatOptions::with_places(2);
    assert_eq!(context.formats().unwrap().format_number(1234.5, options), "1,234.50");

    context.set_language("ru").unwrap();
    let formats = context.formats().unwrap();
    assert_eq!(formats.language(), &LanguageCode::from("ru"));
    assert_eq!(formats.format_number(1234.5, options), "1\u{a0}234,50");
}

#[test]
fn all_languages_are_sorted() {
    let context = context("en");
    let codes: Vec<String> = context
        .all_languages()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(codes, vec!["de", "en", "ru"]);
}

#[test]
fn contexts_share_built_dictionaries() {
    let shared = Arc::new(dictionaries());
    let first = TranslationContext::builder()
        .dictionaries(Arc::clone(&shared))
        .default_language("ru")
        .build();
    let second = TranslationContext::builder()
        .dictionaries(Arc::clone(&shared))
        .default_language("ru")
        .build();

    first.translate("Personal.title", &[]).unwrap();
    assert_eq!(shared.cached_len(), 2);
    second.translate("Personal.title", &[]).unwrap();
    assert_eq!(shared.cached_len(), 2);
    assert!(Arc::ptr_eq(
        first.translator().unwrap().dictionary(),
        second.translator().unwrap().dictionary()
    ));
}
