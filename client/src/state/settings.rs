//! Settings screen editor state.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::net::types::{Settings, SettingsPatch};

/// Selectable interface languages as `(code, label)`.
pub const LANGUAGES: &[(&str, &str)] = &[("es", "Español"), ("en", "English")];

/// Selectable tenant timezones as `(IANA name, label)`.
pub const TIMEZONES: &[(&str, &str)] = &[
    ("America/Lima", "Peru (Lima)"),
    ("America/Bogota", "Colombia (Bogotá)"),
    ("America/Mexico_City", "Mexico (Mexico City)"),
    ("America/Buenos_Aires", "Argentina (Buenos Aires)"),
    ("America/Santiago", "Chile (Santiago)"),
    ("America/Sao_Paulo", "Brazil (São Paulo)"),
    ("America/Caracas", "Venezuela (Caracas)"),
    ("America/Montevideo", "Uruguay (Montevideo)"),
    ("America/Asuncion", "Paraguay (Asunción)"),
    ("America/Guatemala", "Guatemala (Guatemala City)"),
];

/// Label for `value` in `options`, or `value` itself when not listed.
pub fn option_label<'a>(options: &[(&'a str, &'a str)], value: &'a str) -> &'a str {
    options.iter().find(|(v, _)| *v == value).map_or(value, |&(_, label)| label)
}

/// Editable settings fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsField {
    Name,
    Email,
    Website,
    LogoUrl,
    DefaultLanguage,
    Timezone,
    ThemeColor,
}

/// View/edit toggle plus the pending draft.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsEditor {
    pub editing: bool,
    pub draft: SettingsPatch,
    pub saving: bool,
}

impl SettingsEditor {
    pub fn begin(&mut self) {
        self.editing = true;
        self.draft = SettingsPatch::default();
    }

    pub fn cancel(&mut self) {
        self.editing = false;
        self.saving = false;
        self.draft = SettingsPatch::default();
    }

    pub fn set_field(&mut self, field: SettingsField, value: String) {
        let slot = match field {
            SettingsField::Name => &mut self.draft.name,
            SettingsField::Email => &mut self.draft.email,
            SettingsField::Website => &mut self.draft.website,
            SettingsField::LogoUrl => &mut self.draft.logo_url,
            SettingsField::DefaultLanguage => &mut self.draft.default_language,
            SettingsField::Timezone => &mut self.draft.timezone,
            SettingsField::ThemeColor => &mut self.draft.theme_color,
        };
        *slot = Some(value);
    }

    /// The draft overlaid on the fetched settings.
    pub fn merged(&self, base: &Settings) -> Settings {
        self.draft.apply_to(base)
    }

    /// Full update body: every writable field of the merged settings.
    pub fn save_payload(&self, base: &Settings) -> SettingsPatch {
        let merged = self.merged(base);
        SettingsPatch {
            name: Some(merged.name),
            email: Some(merged.email),
            website: Some(merged.website),
            logo_url: Some(merged.logo_url),
            default_language: Some(merged.default_language),
            timezone: Some(merged.timezone),
            theme_color: Some(merged.theme_color),
        }
    }

    pub fn finish_save(&mut self, ok: bool) {
        self.saving = false;
        if ok {
            self.editing = false;
            self.draft = SettingsPatch::default();
        }
    }
}

pub fn field_value(settings: &Settings, field: SettingsField) -> &str {
    match field {
        SettingsField::Name => &settings.name,
        SettingsField::Email => &settings.email,
        SettingsField::Website => &settings.website,
        SettingsField::LogoUrl => &settings.logo_url,
        SettingsField::DefaultLanguage => &settings.default_language,
        SettingsField::Timezone => &settings.timezone,
        SettingsField::ThemeColor => &settings.theme_color,
    }
}
