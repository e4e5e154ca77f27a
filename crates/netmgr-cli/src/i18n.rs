// crates/netmgr-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Message catalog and translation utilities for the CLI.
// Purpose: Centralize user-facing strings and support English and Catalan.
// Dependencies: Standard library collections.
// ============================================================================

//! ## Overview
//! The netmgr CLI keeps every user-facing string in a small translation
//! catalog. Runtime output is routed through the [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The locale is chosen once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.
//! - Placeholder substitutions preserve deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported CLI locales.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    /// English (default).
    En,
    /// Catalan.
    Ca,
}

impl Locale {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ca => "ca",
        }
    }

    /// Parses a locale value (case-insensitive, tolerant of region tags).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.split(['-', '_', '.']).next().unwrap_or("") {
            "en" => Some(Self::En),
            "ca" => Some(Self::Ca),
            _ => None,
        }
    }
}

/// Ordered list of supported CLI locales.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Ca];

/// A formatted message argument captured by the [`macro@crate::t`] macro.
#[derive(Clone)]
pub struct MessageArg {
    /// Placeholder name without braces.
    pub key: &'static str,
    /// Preformatted value substituted for the placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`].
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Global locale selection for CLI output.
static CURRENT_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Sets the CLI locale. Only the first call wins.
pub fn set_locale(locale: Locale) {
    let _ = CURRENT_LOCALE.set(locale);
}

/// Returns the current CLI locale (defaults to English).
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "netmgr {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("output.render_failed", "Failed to render output: {error}"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("registry.invalid", "The built-in command table is invalid: {error}"),
    ("client.init_failed", "Failed to initialize the service client: {error}"),
    ("logging.init_failed", "Failed to initialize logging: {error}"),
    ("audit.open_failed", "Failed to open audit log {path}: {error}"),
    ("signal.install_failed", "Failed to install the interrupt handler: {error}"),
    ("pipeline.read_failed", "Failed to read pipeline input: {error}"),
    ("pipeline.too_large", "Pipeline input exceeds {limit} bytes."),
    ("pipeline.parse_failed", "Failed to parse pipeline input: {error}"),
    ("describe.unknown_command", "Unknown command: {name}"),
    ("confirm.prompt", "Perform {operation} on {targets}? Impact: {impact}. [y/N] "),
    ("confirm.targets.none", "(no target identifiers)"),
    ("confirm.declined", "{operation} skipped: confirmation declined."),
    ("dispatch.cancelled", "{operation} cancelled."),
    (
        "dispatch.batch_stopped",
        "Batch stopped after cancellation; {remaining} input(s) not processed.",
    ),
    ("i18n.lang.invalid_env", "Invalid value for {env}: {value}. Expected 'en' or 'ca'."),
    (
        "i18n.disclaimer.machine_translated",
        "Note: non-English output is machine-translated and may be inaccurate.",
    ),
];

/// Catalan catalog entries.
const CATALOG_CA: &[(&str, &str)] = &[
    ("main.version", "netmgr {version}"),
    ("output.stream.stdout", "sortida estàndard"),
    ("output.stream.stderr", "sortida d'error"),
    ("output.stream.unknown", "sortida"),
    ("output.write_failed", "No s'ha pogut escriure a {stream}: {error}"),
    ("output.render_failed", "No s'ha pogut generar la sortida: {error}"),
    ("config.load_failed", "No s'ha pogut carregar la configuració: {error}"),
    ("registry.invalid", "La taula d'ordres integrada no és vàlida: {error}"),
    ("client.init_failed", "No s'ha pogut inicialitzar el client del servei: {error}"),
    ("logging.init_failed", "No s'ha pogut inicialitzar el registre: {error}"),
    ("audit.open_failed", "No s'ha pogut obrir el registre d'auditoria {path}: {error}"),
    ("signal.install_failed", "No s'ha pogut instal·lar el gestor d'interrupcions: {error}"),
    ("pipeline.read_failed", "No s'ha pogut llegir l'entrada del pipeline: {error}"),
    ("pipeline.too_large", "L'entrada del pipeline supera {limit} bytes."),
    ("pipeline.parse_failed", "No s'ha pogut analitzar l'entrada del pipeline: {error}"),
    ("describe.unknown_command", "Ordre desconeguda: {name}"),
    ("confirm.prompt", "Voleu executar {operation} sobre {targets}? Impacte: {impact}. [s/N] "),
    ("confirm.targets.none", "(sense identificadors de destí)"),
    ("confirm.declined", "S'ha omès {operation}: confirmació rebutjada."),
    ("dispatch.cancelled", "S'ha cancel·lat {operation}."),
    (
        "dispatch.batch_stopped",
        "Lot aturat després de la cancel·lació; {remaining} entrada(es) sense processar.",
    ),
    ("i18n.lang.invalid_env", "Valor no vàlid per a {env}: {value}. S'esperava 'en' o 'ca'."),
    (
        "i18n.disclaimer.machine_translated",
        "Nota: la sortida que no és en anglès està traduïda automàticament i pot ser inexacta.",
    ),
];

/// Returns the raw catalog entries for `locale`.
#[must_use]
pub fn catalog_entries_for(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => CATALOG_EN,
        Locale::Ca => CATALOG_CA,
    }
}

/// Returns the message catalog for the requested locale.
pub(crate) fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static CATALOG_CA_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    match locale {
        Locale::En => CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect()),
        Locale::Ca => CATALOG_CA_MAP.get_or_init(|| CATALOG_CA.iter().copied().collect()),
    }
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` using the selected locale while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    translate_for(current_locale(), key, args)
}

/// Translates `key` for an explicit locale.
#[must_use]
pub fn translate_for(locale: Locale, key: &str, args: Vec<MessageArg>) -> String {
    let template = catalog_for(locale)
        .get(key)
        .copied()
        .or_else(|| catalog_for(Locale::En).get(key).copied())
        .unwrap_or(key);
    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}

// ============================================================================
// SECTION: Tests
// ============================================================================
