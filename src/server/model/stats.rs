//! Study statistics models.

use crate::model::study::{StudyChartDto, StudySummaryDto};

/// Studied seconds in the current local day and week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StudySummary {
    pub today: i64,
    pub week: i64,
}

impl StudySummary {
    pub fn into_dto(self) -> StudySummaryDto {
        StudySummaryDto {
            today: self.today,
            week: self.week,
        }
    }
}

/// Labelled series of studied seconds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudyChart {
    pub labels: Vec<String>,
    pub seconds: Vec<i64>,
}

impl StudyChart {
    /// Builds a chart from `(label, seconds)` points, keeping their order.
    pub fn from_points(points: Vec<(String, i64)>) -> Self {
        let (labels, seconds) = points.into_iter().unzip();
        Self { labels, seconds }
    }

    pub fn into_dto(self) -> StudyChartDto {
        StudyChartDto {
            labels: self.labels,
            seconds: self.seconds,
        }
    }
}
