//! Review source and analysis service contracts with their stub
//! implementations.
//!
//! Both stubs ignore their input and return fixed payloads. They stand in
//! for a listing-review API and an analysis model until real services are
//! wired up.

use async_trait::async_trait;

use super::error::AnalyzerError;
use super::models::{ComparisonRow, ReviewAnalysis, SentimentDatum};

/// Source of customer review texts for a business listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetch review texts for the listing behind `link`, in source order.
    async fn fetch_reviews(&self, link: &str) -> Result<Vec<String>, AnalyzerError>;
}

/// Service turning review texts into a structured analysis.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewAnalyser: Send + Sync {
    /// Analyse `reviews` and return sentiment, suggestions, and comparisons.
    async fn analyse(&self, reviews: &[String]) -> Result<ReviewAnalysis, AnalyzerError>;
}

/// Review source returning a fixed set of sample reviews.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleReviewSource;

#[async_trait]
impl ReviewSource for SampleReviewSource {
    async fn fetch_reviews(&self, link: &str) -> Result<Vec<String>, AnalyzerError> {
        tracing::debug!(link, "returning sample reviews");
        Ok(sample_reviews())
    }
}

/// Analysis service returning a fixed, simulated analysis.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleReviewAnalyser;

#[async_trait]
impl ReviewAnalyser for SampleReviewAnalyser {
    async fn analyse(&self, reviews: &[String]) -> Result<ReviewAnalysis, AnalyzerError> {
        tracing::debug!(review_count = reviews.len(), "returning sample analysis");
        Ok(sample_analysis())
    }
}

/// The reviews returned by [`SampleReviewSource`].
#[must_use]
pub fn sample_reviews() -> Vec<String> {
    [
        "Great service and food!",
        "Long wait times but worth it.",
        "Amazing atmosphere and friendly staff.",
        "Food quality was inconsistent.",
        "Limited parking options.",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

/// The analysis returned by [`SampleReviewAnalyser`].
#[must_use]
pub fn sample_analysis() -> ReviewAnalysis {
    ReviewAnalysis {
        sentiment: vec![
            SentimentDatum::new("Positive", 70),
            SentimentDatum::new("Neutral", 20),
            SentimentDatum::new("Negative", 10),
        ],
        comparison: vec![
            venue("Your Venue", [4.2, 4.5, 4.0, 4.1]),
            venue("Competitor A", [4.0, 4.2, 3.8, 4.0]),
            venue("Competitor B", [4.5, 4.7, 4.3, 4.5]),
            venue("Competitor C", [3.8, 3.5, 4.1, 3.8]),
        ],
        suggestions: [
            "Implement a reservation system to reduce wait times",
            "Partner with nearby parking facilities or consider valet service",
            "Conduct regular staff training to ensure consistent food quality",
            "Expand menu options to cater to diverse dietary preferences",
        ]
        .into_iter()
        .map(str::to_owned)
        .collect(),
    }
}

fn venue(name: &str, [rating, service, food, location]: [f64; 4]) -> ComparisonRow {
    ComparisonRow {
        name: name.to_owned(),
        rating,
        service,
        food,
        location,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("https://maps.google.com/?cid=1")]
    #[case("")]
    #[tokio::test]
    async fn sample_source_ignores_link(#[case] link: &str) {
        let reviews = SampleReviewSource
            .fetch_reviews(link)
            .await
            .expect("sample source should not fail");

        assert_eq!(reviews.len(), 5);
        assert_eq!(reviews.first().map(String::as_str), Some("Great service and food!"));
    }

    #[tokio::test]
    async fn sample_analyser_returns_fixed_payload() {
        let reviews = vec![
            "Great service and food!".to_owned(),
            "Long wait times but worth it.".to_owned(),
        ];

        let analysis = SampleReviewAnalyser
            .analyse(&reviews)
            .await
            .expect("sample analyser should not fail");

        let first_row = analysis.comparison.first().expect("comparison rows");
        assert_eq!(first_row.name, "Your Venue");
        assert!((first_row.rating - 4.2).abs() < f64::EPSILON);
        assert!((first_row.service - 4.5).abs() < f64::EPSILON);
        assert!((first_row.food - 4.0).abs() < f64::EPSILON);
        assert!((first_row.location - 4.1).abs() < f64::EPSILON);
        assert_eq!(analysis.suggestions.len(), 4);
        assert_eq!(
            analysis.suggestions.first().map(String::as_str),
            Some("Implement a reservation system to reduce wait times")
        );
    }

    #[tokio::test]
    async fn sample_analyser_ignores_empty_input() {
        let analysis = SampleReviewAnalyser
            .analyse(&[])
            .await
            .expect("sample analyser should not fail");

        assert_eq!(analysis, sample_analysis());
    }
}
