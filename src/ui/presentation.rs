//! Process-wide presentation settings and the string tool's label table
//!
//! Nothing in `core`, `scanner`, `reporting` or `run` reads this module.

use clap::ValueEnum;
use lazy_static::lazy_static;
use std::path::PathBuf;
use std::sync::RwLock;

/// Label language of the string relocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lower")]
pub enum UiLanguage {
    En,
    #[default]
    Es,
}

impl UiLanguage {
    pub fn toggled(self) -> Self {
        match self {
            UiLanguage::En => UiLanguage::Es,
            UiLanguage::Es => UiLanguage::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            UiLanguage::En => "EN",
            UiLanguage::Es => "ES",
        }
    }

    pub fn texts(self) -> &'static Texts {
        match self {
            UiLanguage::En => &EN_TEXTS,
            UiLanguage::Es => &ES_TEXTS,
        }
    }
}

/// User-facing labels and messages.
#[derive(Debug)]
pub struct Texts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub label_origin: &'static str,
    pub label_dest: &'static str,
    pub btn_browse: &'static str,
    pub btn_start: &'static str,
    pub success: &'static str,
    pub error_path: &'static str,
}

static EN_TEXTS: Texts = Texts {
    title: "Strings Relocator",
    subtitle: "Extract and organize language files",
    label_origin: "Game Installation Path",
    label_dest: "Output Destination",
    btn_browse: "Browse",
    btn_start: "START EXTRACTION",
    success: "Extraction completed!",
    error_path: "The game path does not exist.",
};

static ES_TEXTS: Texts = Texts {
    title: "Relocalizador de Strings",
    subtitle: "Extrae y organiza archivos de idioma",
    label_origin: "Ruta de Instalación del Juego",
    label_dest: "Carpeta de Destino",
    btn_browse: "Explorar",
    btn_start: "INICIAR EXTRACCIÓN",
    success: "¡Extracción completada!",
    error_path: "La ruta del juego no existe o es inválida.",
};

/// Theme accent used for spinners and highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self { accent: "cyan" }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Presentation {
    pub language: UiLanguage,
    pub theme: Theme,
}

lazy_static! {
    static ref PRESENTATION: RwLock<Presentation> = RwLock::new(Presentation::default());
}

/// Set the startup presentation. Call once from `main`.
pub fn init(language: UiLanguage) {
    if let Ok(mut p) = PRESENTATION.write() {
        *p = Presentation {
            language,
            theme: Theme::default(),
        };
    }
}

pub fn current() -> Presentation {
    PRESENTATION.read().map(|p| *p).unwrap_or_default()
}

pub fn set_language(language: UiLanguage) {
    if let Ok(mut p) = PRESENTATION.write() {
        p.language = language;
    }
}

/// Input form of the string relocator. Paths survive language toggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub origin: PathBuf,
    pub destination: PathBuf,
}

impl FormState {
    pub fn new(origin: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Label/value lines of the form in `language`.
    pub fn render(&self, language: UiLanguage) -> Vec<String> {
        let t = language.texts();
        vec![
            format!("{} [{}]", t.title, language.code()),
            t.subtitle.to_string(),
            format!("{}: {}", t.label_origin, self.origin.display()),
            format!("{}: {}", t.label_dest, self.destination.display()),
        ]
    }

    /// Switch the global language and re-render with the same paths.
    pub fn toggle_language(&self) -> Vec<String> {
        let next = current().language.toggled();
        set_language(next);
        self.render(next)
    }
}
