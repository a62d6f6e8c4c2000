use super::*;

fn fetched() -> Settings {
    Settings {
        id: 1,
        name: "Academy".to_owned(),
        email: "hello@academy.test".to_owned(),
        website: "https://academy.test".to_owned(),
        logo_url: String::new(),
        default_language: "es".to_owned(),
        timezone: "America/Lima".to_owned(),
        theme_color: "#1d4ed8".to_owned(),
        created_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn option_labels_fall_back_to_value() {
    assert_eq!(option_label(LANGUAGES, "en"), "English");
    assert_eq!(option_label(TIMEZONES, "America/Santiago"), "Chile (Santiago)");
    assert_eq!(option_label(TIMEZONES, "Europe/Madrid"), "Europe/Madrid");
}

#[test]
fn draft_overlays_fetched_settings() {
    let mut editor = SettingsEditor::default();
    editor.begin();
    editor.set_field(SettingsField::Name, "New Academy".to_owned());
    editor.set_field(SettingsField::DefaultLanguage, "en".to_owned());

    let merged = editor.merged(&fetched());
    assert_eq!(merged.name, "New Academy");
    assert_eq!(merged.default_language, "en");
    assert_eq!(merged.timezone, "America/Lima");
    assert_eq!(field_value(&merged, SettingsField::Email), "hello@academy.test");
}

#[test]
fn save_payload_sends_every_writable_field() {
    let mut editor = SettingsEditor::default();
    editor.begin();
    editor.set_field(SettingsField::Timezone, "America/Bogota".to_owned());
    let payload = editor.save_payload(&fetched());
    assert_eq!(payload.timezone.as_deref(), Some("America/Bogota"));
    assert_eq!(payload.name.as_deref(), Some("Academy"));
    let json = serde_json::to_value(&payload).unwrap();
    assert!(json.get("id").is_none());
    assert_eq!(json["themeColor"], "#1d4ed8");
}

#[test]
fn cancel_discards_draft() {
    let mut editor = SettingsEditor::default();
    editor.begin();
    editor.set_field(SettingsField::Website, "x".to_owned());
    editor.cancel();
    assert!(!editor.editing);
    assert!(editor.draft.is_empty());
}

#[test]
fn failed_save_keeps_editing() {
    let mut editor = SettingsEditor::default();
    editor.begin();
    editor.set_field(SettingsField::Name, "x".to_owned());
    editor.saving = true;
    editor.finish_save(false);
    assert!(editor.editing);
    assert!(!editor.saving);
    editor.finish_save(true);
    assert!(!editor.editing);
    assert!(editor.draft.is_empty());
}
