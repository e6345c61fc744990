//! Chart Options
//!
//! The configuration object handed to the chart widget alongside the matrix.
//! Serializes with the key names the widget recognizes
//! (`hAxis`, `vAxis`, `legend.maxlines`).

use serde::{Deserialize, Serialize};

/// Line chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub title: String,
    #[serde(rename = "hAxis")]
    pub h_axis: AxisOptions,
    #[serde(rename = "vAxis")]
    pub v_axis: AxisOptions,
    pub legend: LegendOptions,
}

/// Axis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    pub title: String,
}

/// Legend configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    pub position: LegendPosition,
    #[serde(rename = "maxlines")]
    pub max_lines: u32,
}

/// Where the legend is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Bottom,
    Top,
    Right,
    Left,
    None,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "NBA 2018-19 SEASON PREDICTIONS".to_string(),
            h_axis: AxisOptions {
                title: "Win / Loss ratio (%)".to_string(),
            },
            v_axis: AxisOptions {
                title: "Days".to_string(),
            },
            legend: LegendOptions {
                position: LegendPosition::Bottom,
                max_lines: 10,
            },
        }
    }
}

impl ChartOptions {
    /// Replace the chart title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_json_shape() {
        let json = serde_json::to_value(ChartOptions::default()).unwrap();

        assert_eq!(json["title"], "NBA 2018-19 SEASON PREDICTIONS");
        assert_eq!(json["hAxis"]["title"], "Win / Loss ratio (%)");
        assert_eq!(json["vAxis"]["title"], "Days");
        assert_eq!(json["legend"]["position"], "bottom");
        assert_eq!(json["legend"]["maxlines"], 10);
    }

    #[test]
    fn test_with_title() {
        let options = ChartOptions::default().with_title("Actual outcomes");
        assert_eq!(options.title, "Actual outcomes");
        assert_eq!(options.legend.max_lines, 10);
    }
}
