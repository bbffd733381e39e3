//! Plain-text analysis reports rendered with Jinja2-compatible templates.
//!
//! Report mode runs one analysis and writes the result through a `minijinja`
//! template. The built-in [`DEFAULT_REPORT_TEMPLATE`] mirrors the dashboard's
//! sections; a custom template can be supplied instead.
//!
//! # Available Variables
//!
//! - `link`: the analysed listing link
//! - `generated_at`: report timestamp (RFC 3339)
//! - `rating`: overall rating, one decimal place
//! - `sentiment`: list of `{ name, value, percent }`
//! - `positive_areas`, `negative_areas`: lists of `{ label, mentions }`
//! - `suggestions`: list of strings
//! - `comparison`: list of `{ name, rating, service, food, location }`,
//!   each formatted to one decimal place

use std::io::Write;

use chrono::Utc;
use minijinja::{Environment, context};
use serde::Serialize;

use crate::analysis::{
    AnalyzerError, ComparisonRow, ReviewAnalysis, SUMMARY_RATING, TOP_NEGATIVE_AREAS,
    TOP_POSITIVE_AREAS, share_percent,
};

/// Template used when no custom report template is configured.
pub const DEFAULT_REPORT_TEMPLATE: &str = "\
Review analysis for {{ link }}
Generated {{ generated_at }}

Overall rating: {{ rating }}

Sentiment
{% for bucket in sentiment %}  {{ bucket.name }}: {{ bucket.percent }}%
{% endfor %}
Top positive areas
{% for area in positive_areas %}  {{ area.label }} (mentioned {{ area.mentions }} times)
{% endfor %}
Top negative areas
{% for area in negative_areas %}  {{ area.label }} (mentioned {{ area.mentions }} times)
{% endfor %}
Improvement suggestions
{% for suggestion in suggestions %}  - {{ suggestion }}
{% endfor %}
Competitor comparison
{% for row in comparison %}  {{ row.name }}: overall {{ row.rating }}, service {{ row.service }}, food {{ row.food }}, location {{ row.location }}
{% endfor %}";

#[derive(Debug, Clone, Serialize)]
struct TemplateSentiment {
    name: String,
    value: u32,
    percent: u32,
}

/// Comparison row with scores pre-formatted to one decimal place.
#[derive(Debug, Clone, Serialize)]
struct TemplateComparison {
    name: String,
    rating: String,
    service: String,
    food: String,
    location: String,
}

impl From<&ComparisonRow> for TemplateComparison {
    fn from(row: &ComparisonRow) -> Self {
        Self {
            name: row.name.clone(),
            rating: format!("{:.1}", row.rating),
            service: format!("{:.1}", row.service),
            food: format!("{:.1}", row.food),
            location: format!("{:.1}", row.location),
        }
    }
}

/// Writes `analysis` for `link` using the Jinja2 `template_content`.
///
/// # Errors
///
/// Returns [`AnalyzerError::Configuration`] if the template has syntax errors
/// or fails to render. Returns [`AnalyzerError::Io`] if writing fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    link: &str,
    analysis: &ReviewAnalysis,
    template_content: &str,
) -> Result<(), AnalyzerError> {
    let mut env = Environment::new();

    // Reports are plain text.
    env.set_auto_escape_callback(|_| minijinja::AutoEscape::None);

    env.add_template("report", template_content)
        .map_err(|e| AnalyzerError::Configuration {
            message: format!("invalid report template syntax: {e}"),
        })?;

    let total = analysis.sentiment_total();
    let sentiment: Vec<TemplateSentiment> = analysis
        .sentiment
        .iter()
        .map(|datum| TemplateSentiment {
            name: datum.name.clone(),
            value: datum.value,
            percent: share_percent(datum.value, total),
        })
        .collect();
    let comparison: Vec<TemplateComparison> = analysis
        .comparison
        .iter()
        .map(TemplateComparison::from)
        .collect();

    let ctx = context! {
        link => link,
        generated_at => Utc::now().to_rfc3339(),
        rating => format!("{SUMMARY_RATING:.1}"),
        sentiment => sentiment,
        positive_areas => TOP_POSITIVE_AREAS.as_slice(),
        negative_areas => TOP_NEGATIVE_AREAS.as_slice(),
        suggestions => &analysis.suggestions,
        comparison => comparison,
    };

    let tmpl = env.get_template("report").map_err(|e| AnalyzerError::Io {
        message: format!("failed to retrieve report template: {e}"),
    })?;

    let output = tmpl.render(ctx).map_err(|e| AnalyzerError::Configuration {
        message: format!("report rendering failed: {e}"),
    })?;

    writer
        .write_all(output.as_bytes())
        .map_err(|e| AnalyzerError::Io {
            message: format!("failed to write report: {e}"),
        })?;

    Ok(())
}
