use console::Style;
use once_cell::sync::Lazy;
use rollbook::feedback::{FeedbackKind, SpanKind, Theme};

/// Style table for one theme. The theme changes colors only; what gets
/// highlighted is decided by the feedback formatter.
pub struct Palette {
    pub info: Style,
    pub success: Style,
    pub error: Style,
    pub student_id: Style,
    pub module_code: Style,
    pub heading: Style,
    pub dim: Style,
}

static DARK: Lazy<Palette> = Lazy::new(|| Palette {
    info: Style::new().cyan(),
    success: Style::new().green(),
    error: Style::new().red(),
    student_id: Style::new().cyan().bold(),
    module_code: Style::new().magenta().bold(),
    heading: Style::new().bold(),
    dim: Style::new().dim(),
});

static LIGHT: Lazy<Palette> = Lazy::new(|| Palette {
    info: Style::new().blue(),
    success: Style::new().green().bold(),
    error: Style::new().red().bold(),
    student_id: Style::new().blue().bold(),
    module_code: Style::new().magenta(),
    heading: Style::new().bold().underlined(),
    dim: Style::new().dim(),
});

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

impl Palette {
    pub fn for_kind(&self, kind: FeedbackKind) -> &Style {
        match kind {
            FeedbackKind::Info => &self.info,
            FeedbackKind::Success => &self.success,
            FeedbackKind::Error => &self.error,
        }
    }

    /// Style for one span; plain text inherits the message's base style.
    pub fn for_span<'a>(&'a self, kind: SpanKind, base: &'a Style) -> &'a Style {
        match kind {
            SpanKind::Text => base,
            SpanKind::StudentId => &self.student_id,
            SpanKind::ModuleCode => &self.module_code,
        }
    }
}
