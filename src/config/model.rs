//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the page works out of the box.

use crate::projects::render::Locale;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub nav: NavConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionConfig>,
    #[serde(default)]
    pub fallback: FallbackConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            ui: UiConfig::default(),
            nav: NavConfig::default(),
            reveal: RevealConfig::default(),
            counter: CounterConfig::default(),
            logging: LoggingConfig::default(),
            profile: ProfileConfig::default(),
            sections: default_sections(),
            fallback: FallbackConfig::default(),
        }
    }
}

/// Where the project document comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// `http(s)://` URL or a filesystem path.
    #[serde(default = "default_source")]
    pub source: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
        }
    }
}

/// Terminal appearance and geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub locale: Locale,
    /// Animation frames per second.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// Pixel height of one terminal row, for scroll thresholds.
    #[serde(default = "default_row_height")]
    pub row_height_px: f64,
    /// Below this many columns the nav links collapse into a menu.
    #[serde(default = "default_compact_width")]
    pub compact_width: u16,
    #[serde(default = "default_card_min_width")]
    pub card_min_width: u16,
    /// Filter selectors in display order; `"all"` shows everything.
    #[serde(default = "default_filters")]
    pub filters: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            frame_rate: default_frame_rate(),
            row_height_px: default_row_height(),
            compact_width: default_compact_width(),
            card_min_width: default_card_min_width(),
            filters: default_filters(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
    #[serde(default = "default_scrolled_threshold")]
    pub scrolled_threshold_px: f64,
    #[serde(default = "default_section_lead")]
    pub section_lead_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: default_scrolled_threshold(),
            section_lead_px: default_section_lead(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Fraction of an element that must be inside the viewport.
    #[serde(default = "default_reveal_threshold")]
    pub threshold: f64,
    /// Shrinks the viewport's bottom edge for intersection checks.
    #[serde(default = "default_reveal_margin")]
    pub bottom_margin_px: f64,
    /// Stagger between card delay tiers.
    #[serde(default = "default_delay_step")]
    pub delay_step_ms: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_reveal_threshold(),
            bottom_margin_px: default_reveal_margin(),
            delay_step_ms: default_delay_step(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterConfig {
    #[serde(default = "default_counter_duration")]
    pub duration_ms: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_counter_duration(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

/// Static page text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_about")]
    pub about: Vec<String>,
    #[serde(default = "default_contacts")]
    pub contacts: Vec<ContactLink>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: default_tagline(),
            about: default_about(),
            contacts: default_contacts(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Name, tagline and the project counter.
    Hero,
    About,
    /// Filter/sort controls and the project grid.
    Projects,
    Contact,
}

/// One page section; each gets a nav link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    pub id: String,
    pub label: String,
    pub kind: SectionKind,
}

/// The card shown when the data source cannot be loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    #[serde(default = "default_fallback_title")]
    pub title: String,
    #[serde(default = "default_fallback_category")]
    pub category: String,
    #[serde(default = "default_fallback_description")]
    pub description: String,
    #[serde(default = "default_fallback_technologies")]
    pub technologies: Vec<String>,
    #[serde(default = "default_fallback_repo")]
    pub repo_url: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            title: default_fallback_title(),
            category: default_fallback_category(),
            description: default_fallback_description(),
            technologies: default_fallback_technologies(),
            repo_url: default_fallback_repo(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_source() -> String {
    "data.json".to_string()
}
fn default_frame_rate() -> u32 {
    60
}
fn default_row_height() -> f64 {
    20.0
}
fn default_compact_width() -> u16 {
    80
}
fn default_card_min_width() -> u16 {
    36
}
fn default_filters() -> Vec<String> {
    ["all", "Back-end", "Automação", "Web"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_scrolled_threshold() -> f64 {
    50.0
}
fn default_section_lead() -> f64 {
    150.0
}
fn default_reveal_threshold() -> f64 {
    0.1
}
fn default_reveal_margin() -> f64 {
    50.0
}
fn default_delay_step() -> f64 {
    100.0
}
fn default_counter_duration() -> f64 {
    800.0
}
fn default_log_dir() -> String {
    "~/.local/share/folio/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_name() -> String {
    "Portfólio".to_string()
}
fn default_tagline() -> String {
    "Back-end, automação e projetos web publicados no GitHub.".to_string()
}
fn default_about() -> Vec<String> {
    vec![
        "Desenvolvedor focado em serviços back-end, automação residencial e ferramentas web."
            .to_string(),
        "Os projetos abaixo são carregados do arquivo de dados do portfólio.".to_string(),
    ]
}
fn default_contacts() -> Vec<ContactLink> {
    vec![ContactLink {
        label: "GitHub".into(),
        url: "https://github.com/Luizlfc-dev".into(),
    }]
}
fn default_sections() -> Vec<SectionConfig> {
    [
        ("inicio", "Início", SectionKind::Hero),
        ("sobre", "Sobre", SectionKind::About),
        ("projetos", "Projetos", SectionKind::Projects),
        ("contato", "Contato", SectionKind::Contact),
    ]
    .into_iter()
    .map(|(id, label, kind)| SectionConfig {
        id: id.into(),
        label: label.into(),
        kind,
    })
    .collect()
}
fn default_fallback_title() -> String {
    "Projeto JARVIS".to_string()
}
fn default_fallback_category() -> String {
    "Automação".to_string()
}
fn default_fallback_description() -> String {
    "Assistente de IA 100% privado e auto-hospedado inspirado no Jarvis.".to_string()
}
fn default_fallback_technologies() -> Vec<String> {
    vec!["C#".into(), ".NET".into(), "Home Assistant".into()]
}
fn default_fallback_repo() -> String {
    "https://github.com/Luizlfc-dev/Projeto-Jarvis-Cerebro".to_string()
}
