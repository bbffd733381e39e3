//! Text charts for sentiment shares and venue ratings.

use crossterm::style::{Color, Stylize};

use super::text::visible_width;
use crate::analysis::{ComparisonRow, SentimentDatum, share_percent};

/// Slice colours, cycled by position: green, blue, red.
const SENTIMENT_PALETTE: [Color; 3] = [
    Color::Rgb {
        r: 0x22,
        g: 0xc5,
        b: 0x5e,
    },
    Color::Rgb {
        r: 0x3b,
        g: 0x82,
        b: 0xf6,
    },
    Color::Rgb {
        r: 0xef,
        g: 0x44,
        b: 0x44,
    },
];

/// Colour used for rating bars.
const RATING_COLOUR: Color = Color::Rgb {
    r: 0x3b,
    g: 0x82,
    b: 0xf6,
};

/// Upper bound of the rating axis.
pub const RATING_AXIS_MAX: f64 = 5.0;

/// Returns the palette colour for the slice at `index`.
#[must_use]
pub fn sentiment_colour(index: usize) -> Color {
    SENTIMENT_PALETTE
        .iter()
        .cycle()
        .nth(index)
        .copied()
        .unwrap_or(Color::Reset)
}

/// Renders sentiment shares as labelled horizontal bars.
///
/// Each bar's length is the bucket's share of the total, and the label shows
/// the share rounded to a whole percent.
#[must_use]
pub fn sentiment_chart(sentiment: &[SentimentDatum], bar_width: usize) -> String {
    let total = sentiment
        .iter()
        .fold(0_u32, |sum, datum| sum.saturating_add(datum.value));
    let label_width = label_column_width(sentiment.iter().map(|datum| datum.name.as_str()));

    let mut output = String::new();
    for (index, datum) in sentiment.iter().enumerate() {
        let percent = share_percent(datum.value, total);
        let filled = scaled_length(u64::from(percent), 100, bar_width);
        let bar = "█".repeat(filled).with(sentiment_colour(index));
        let label = pad_label(&datum.name, label_width);
        output.push_str(&format!("{label} {bar} {percent}%\n"));
    }
    output
}

/// Renders each venue's overall rating as a bar on a fixed 0–5 axis.
#[must_use]
pub fn rating_chart(rows: &[ComparisonRow], bar_width: usize) -> String {
    let label_width = label_column_width(rows.iter().map(|row| row.name.as_str()));

    let mut output = String::new();
    for row in rows {
        let filled = rating_bar_length(row.rating, bar_width);
        let bar = "█".repeat(filled).with(RATING_COLOUR);
        let label = pad_label(&row.name, label_width);
        output.push_str(&format!("{label} {bar} {:.1}\n", row.rating));
    }
    output.push_str(&format!(
        "{} 0{}5\n",
        " ".repeat(label_width),
        " ".repeat(bar_width.saturating_sub(1))
    ));
    output
}

/// Widest label in terminal columns, so wide glyphs keep bars aligned.
fn label_column_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(visible_width).max().unwrap_or(0)
}

fn pad_label(label: &str, width: usize) -> String {
    let padding = width.saturating_sub(visible_width(label));
    format!("{label}{}", " ".repeat(padding))
}

#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "Bar lengths are whole character cells"
)]
fn scaled_length(value: u64, max: u64, width: usize) -> usize {
    if max == 0 {
        return 0;
    }
    let width_u64 = u64::try_from(width).unwrap_or(u64::MAX);
    let scaled = value.min(max).saturating_mul(width_u64) / max;
    usize::try_from(scaled).unwrap_or(width)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Ratings are clamped to the axis before conversion to tenths"
)]
fn rating_bar_length(rating: f64, width: usize) -> usize {
    if !rating.is_finite() {
        return 0;
    }
    let tenths = (rating.clamp(0.0, RATING_AXIS_MAX) * 10.0).round() as u64;
    scaled_length(tenths, 50, width)
}
