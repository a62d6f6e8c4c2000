//! Interface language selection and the built-in label table.
//!
//! DESIGN
//! ======
//! Spanish is the fallback language. The initial language is resolved once at
//! startup: a value saved in the browser wins, otherwise the tenant's
//! `defaultLanguage` setting is used and saved, and any failure lands on
//! Spanish. Keys missing from the table render as the key itself.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use crate::net::error::ApiError;
use crate::net::types::Settings;

/// Storage key of the saved language code.
pub const LANGUAGE_KEY: &str = "appLanguage";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    /// Parse a language code; anything unrecognized is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }
}

/// Where the initial language came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguageSource {
    Saved,
    Settings,
    Fallback,
}

/// Pick the startup language from a saved code or the tenant settings.
/// `fetch_settings` only runs when nothing usable was saved.
pub async fn resolve_initial_language<F, Fut>(saved: Option<&str>, fetch_settings: F) -> (Language, LanguageSource)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Settings, ApiError>>,
{
    if let Some(language) = saved.and_then(Language::from_code) {
        return (language, LanguageSource::Saved);
    }
    match fetch_settings().await {
        Ok(settings) => match Language::from_code(&settings.default_language) {
            Some(language) => (language, LanguageSource::Settings),
            None => (Language::default(), LanguageSource::Fallback),
        },
        Err(e) => {
            leptos::logging::warn!("language init failed: error={e}");
            (Language::default(), LanguageSource::Fallback)
        }
    }
}

pub fn load_saved_language() -> Option<String> {
    super::storage::load_string(LANGUAGE_KEY)
}

pub fn save_language(language: Language) {
    super::storage::save_string(LANGUAGE_KEY, language.code());
}

/// Label for `key` in `language`.
pub fn tr(language: Language, key: &'static str) -> &'static str {
    TABLE
        .iter()
        .find(|(k, _, _)| *k == key)
        .map_or(key, |&(_, es, en)| match language {
            Language::Es => es,
            Language::En => en,
        })
}

/// `(key, es, en)`.
const TABLE: &[(&str, &str, &str)] = &[
    ("nav.dashboard", "Panel", "Dashboard"),
    ("nav.users", "Usuarios", "Users"),
    ("nav.courses", "Cursos", "Courses"),
    ("nav.settings", "Configuración", "Settings"),
    ("nav.logout", "Cerrar sesión", "Logout"),
    ("nav.expand", "Expandir menú", "Expand sidebar"),
    ("nav.collapse", "Contraer menú", "Collapse sidebar"),
    ("loading", "Cargando...", "Loading..."),
    ("errorLoading", "Error al cargar los datos. Inténtalo más tarde.", "Error loading data. Please try again later."),
    ("edit", "Editar", "Edit"),
    ("cancel", "Cancelar", "Cancel"),
    ("save", "Guardar", "Save"),
    ("updated", "Configuración actualizada", "Settings updated"),
    ("updatedDescription", "Los cambios se guardaron correctamente.", "Your changes were saved."),
    ("updateFailed", "No se pudo actualizar", "Update failed"),
    ("updateFailedDescription", "Los cambios no se guardaron. Inténtalo de nuevo.", "Your changes were not saved. Please try again."),
    ("settings.title", "Configuración", "Settings"),
    ("settings.company", "Empresa", "Company"),
    ("settings.email", "Correo", "Email"),
    ("settings.website", "Sitio web", "Website"),
    ("settings.logo", "Logo", "Logo"),
    ("settings.language", "Idioma", "Language"),
    ("settings.selectLanguage", "Selecciona un idioma", "Select a language"),
    ("settings.timezone", "Zona horaria", "Timezone"),
    ("settings.selectTimezone", "Selecciona una zona horaria", "Select a timezone"),
    ("settings.themeColor", "Color del tema", "Theme color"),
    ("settings.enterHexColor", "Ingresa un color hexadecimal", "Enter a hex color"),
    ("settings.createdAt", "Creado", "Created"),
    ("dashboard.title", "Panel", "Dashboard"),
    ("dashboard.teachers", "Profesores", "Teachers"),
    ("dashboard.students", "Estudiantes", "Students"),
    ("dashboard.courses", "Cursos", "Courses"),
    ("dashboard.revenue", "Ingresos", "Revenue"),
    ("dashboard.enrollments", "Inscripciones", "Enrollments"),
    ("dashboard.active", "activos", "active"),
    ("dashboard.thisMonth", "este mes", "this month"),
    ("dashboard.avgRating", "calificación promedio", "average rating"),
    ("dashboard.growth", "Crecimiento de estudiantes", "Student growth"),
    ("dashboard.revenueTrend", "Tendencia de ingresos", "Revenue trend"),
    ("dashboard.mostPopular", "Cursos más populares", "Most popular courses"),
    ("dashboard.topRated", "Cursos mejor valorados", "Top rated courses"),
    ("dashboard.enrolled", "inscritos", "enrolled"),
    ("dashboard.reviews", "reseñas", "reviews"),
    ("users.title", "Usuarios", "Users"),
    ("users.search", "Buscar por nombre o correo...", "Search by name or email..."),
    ("users.allRoles", "Todos los roles", "All roles"),
    ("users.allStatuses", "Todos los estados", "All statuses"),
    ("users.active", "Activo", "Active"),
    ("users.inactive", "Inactivo", "Inactive"),
    ("users.name", "Nombre", "Name"),
    ("users.email", "Correo", "Email"),
    ("users.role", "Rol", "Role"),
    ("users.status", "Estado", "Status"),
    ("users.created", "Creado", "Created"),
    ("users.empty", "No se encontraron usuarios", "No users found"),
    ("users.loadingAll", "Cargando todos los usuarios...", "Loading all users..."),
    ("courses.title", "Cursos", "Courses"),
    ("courses.search", "Buscar cursos por nombre o descripción...", "Search courses by name or description..."),
    ("courses.searchButton", "Buscar", "Search"),
    ("courses.allCategories", "Todas las categorías", "All Categories"),
    ("courses.clearAll", "Limpiar todo", "Clear All"),
    ("courses.total", "cursos en total", "Courses Total"),
    ("courses.loading", "Cargando cursos...", "Loading courses..."),
    ("courses.empty", "No se encontraron cursos", "No courses found"),
    ("courses.featured", "Destacado", "Featured"),
    ("pagination.previous", "Anterior", "Previous"),
    ("pagination.next", "Siguiente", "Next"),
];
