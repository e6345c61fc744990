//! View Controller
//!
//! The home view shows at most one chart at a time. Which one is decided by a
//! single [`ViewMode`] value, so "both visible" cannot be represented.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::chart::ChartMatrix;
use crate::slot::{FetchError, Slot};

/// The two data series served by the prediction service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Series {
    Predictions,
    Actual,
}

impl Series {
    pub const ALL: [Series; 2] = [Series::Predictions, Series::Actual];

    /// Endpoint path on the data service
    pub fn path(self) -> &'static str {
        match self {
            Series::Predictions => "/predictions",
            Series::Actual => "/actual",
        }
    }

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            Series::Predictions => "Predictions",
            Series::Actual => "Real",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Series::Predictions => "predictions",
            Series::Actual => "actual",
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Series {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "predictions" | "predicted" => Ok(Series::Predictions),
            "actual" | "real" => Ok(Series::Actual),
            other => Err(format!("Unknown series: {}", other)),
        }
    }
}

/// Which chart the home view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Idle,
    ShowingPredictions,
    ShowingActual,
}

impl ViewMode {
    pub fn showing(series: Series) -> Self {
        match series {
            Series::Predictions => ViewMode::ShowingPredictions,
            Series::Actual => ViewMode::ShowingActual,
        }
    }

    /// Show `series`, or hide it if it is already shown
    pub fn toggle(self, series: Series) -> Self {
        if self.is_showing(series) {
            ViewMode::Idle
        } else {
            ViewMode::showing(series)
        }
    }

    /// The series currently shown
    pub fn visible(self) -> Option<Series> {
        match self {
            ViewMode::Idle => None,
            ViewMode::ShowingPredictions => Some(Series::Predictions),
            ViewMode::ShowingActual => Some(Series::Actual),
        }
    }

    pub fn is_showing(self, series: Series) -> bool {
        self.visible() == Some(series)
    }
}

/// What the chart area should display
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Render<'a> {
    /// No series selected
    Nothing,
    /// Series selected but its fetch has not resolved
    Loading(Series),
    /// Series selected and loaded
    Chart(Series, &'a ChartMatrix),
    /// Series selected but its fetch failed
    Failed(Series, &'a FetchError),
}

impl<'a> Render<'a> {
    /// Decide what to draw for the selected series given its slot
    pub fn for_slot(visible: Option<Series>, slot: &'a Slot) -> Self {
        match (visible, slot) {
            (None, _) => Render::Nothing,
            (Some(series), Slot::Pending) => Render::Loading(series),
            (Some(series), Slot::Loaded(matrix)) => Render::Chart(series, matrix),
            (Some(series), Slot::Failed(e)) => Render::Failed(series, e),
        }
    }
}

/// Home view state: the current mode plus one slot per series
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeView {
    mode: ViewMode,
    predictions: Slot,
    actual: Slot,
}

impl HomeView {
    /// Freshly mounted view: idle, both fetches pending
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Apply a toggle action and return the new mode
    pub fn toggle(&mut self, series: Series) -> ViewMode {
        self.mode = self.mode.toggle(series);
        tracing::debug!(series = %series, mode = ?self.mode, "View toggled");
        self.mode
    }

    /// Store a fetch outcome in the slot of `series`
    pub fn resolve(&mut self, series: Series, result: Result<ChartMatrix, FetchError>) {
        *self.slot_mut(series) = Slot::from_result(result);
    }

    pub fn slot(&self, series: Series) -> &Slot {
        match series {
            Series::Predictions => &self.predictions,
            Series::Actual => &self.actual,
        }
    }

    fn slot_mut(&mut self, series: Series) -> &mut Slot {
        match series {
            Series::Predictions => &mut self.predictions,
            Series::Actual => &mut self.actual,
        }
    }

    /// What the chart area displays right now
    pub fn render(&self) -> Render<'_> {
        match self.mode.visible() {
            None => Render::Nothing,
            Some(series) => Render::for_slot(Some(series), self.slot(series)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartRow;
    use chrono::NaiveDate;

    fn matrix_with_one_day() -> ChartMatrix {
        let row = ChartRow::new(NaiveDate::from_ymd_opt(2018, 10, 16).unwrap(), vec![50.0; 30]);
        ChartMatrix::transform(&[row.to_raw()]).unwrap()
    }

    #[test]
    fn test_toggle_twice_returns_to_idle() {
        let mode = ViewMode::default().toggle(Series::Predictions);
        assert_eq!(mode, ViewMode::ShowingPredictions);
        assert_eq!(mode.toggle(Series::Predictions), ViewMode::Idle);
    }

    #[test]
    fn test_toggle_switches_series() {
        let mode = ViewMode::ShowingPredictions.toggle(Series::Actual);
        assert_eq!(mode, ViewMode::ShowingActual);
        assert!(!mode.is_showing(Series::Predictions));

        let mode = mode.toggle(Series::Predictions);
        assert_eq!(mode, ViewMode::ShowingPredictions);
    }

    #[test]
    fn test_at_most_one_visible_under_any_sequence() {
        let actions = [
            Series::Predictions,
            Series::Actual,
            Series::Actual,
            Series::Predictions,
            Series::Predictions,
            Series::Actual,
        ];
        let mut mode = ViewMode::Idle;
        for series in actions {
            mode = mode.toggle(series);
            let shown = Series::ALL.iter().filter(|s| mode.is_showing(**s)).count();
            assert!(shown <= 1);
        }
        assert_eq!(mode, ViewMode::ShowingActual);
    }

    #[test]
    fn test_mount_renders_nothing() {
        let view = HomeView::new();
        assert_eq!(view.mode(), ViewMode::Idle);
        assert!(view.slot(Series::Predictions).is_pending());
        assert!(view.slot(Series::Actual).is_pending());
        assert_eq!(view.render(), Render::Nothing);
    }

    #[test]
    fn test_resolved_predictions_render_after_toggle() {
        let mut view = HomeView::new();
        let matrix = matrix_with_one_day();

        view.resolve(Series::Predictions, Ok(matrix.clone()));
        assert_eq!(view.render(), Render::Nothing);

        view.toggle(Series::Predictions);
        assert_eq!(view.render(), Render::Chart(Series::Predictions, &matrix));
    }

    #[test]
    fn test_pending_and_failed_are_distinct() {
        let mut view = HomeView::new();

        view.toggle(Series::Actual);
        assert_eq!(view.render(), Render::Loading(Series::Actual));

        view.resolve(Series::Actual, Err(FetchError::Network("refused".into())));
        assert!(matches!(view.render(), Render::Failed(Series::Actual, _)));

        // The other slot is untouched
        assert!(view.slot(Series::Predictions).is_pending());
    }

    #[test]
    fn test_series_parsing() {
        assert_eq!("predictions".parse::<Series>(), Ok(Series::Predictions));
        assert_eq!("Real".parse::<Series>(), Ok(Series::Actual));
        assert!("both".parse::<Series>().is_err());
        assert_eq!(Series::Actual.path(), "/actual");
        assert_eq!(Series::Predictions.to_string(), "predictions");
    }
}
