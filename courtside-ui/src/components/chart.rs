//! Chart Component
//!
//! Win-ratio line chart using HTML5 Canvas. One line per team, game days on
//! the horizontal axis.

use chrono::NaiveDate;
use courtside::chart::{ChartMatrix, ChartOptions, LegendPosition};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Team line colors, cycled when there are more teams than colors
const SERIES_COLORS: [&str; 10] = [
    "#FF9800", // Orange (primary)
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
    "#FFEB3B", // Yellow
    "#795548", // Brown
    "#E91E63", // Pink
    "#8BC34A", // Light green
];

/// Height of one legend line, in rem
const LEGEND_LINE_REM: f64 = 1.75;

/// Line chart of a chart matrix
#[component]
pub fn Chart(
    matrix: ChartMatrix,
    #[prop(optional)]
    options: Option<ChartOptions>,
) -> impl IntoView {
    let options = options.unwrap_or_default();
    let canvas_ref = create_node_ref::<html::Canvas>();

    let matrix_for_draw = matrix.clone();
    let options_for_draw = options.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &matrix_for_draw, &options_for_draw);
        }
    });

    let legend = match options.legend.position {
        LegendPosition::None => None,
        _ => Some(
            view! { <ChartLegend matrix=matrix.clone() max_lines=options.legend.max_lines /> }
                .into_view(),
        ),
    };
    let (legend_top, legend_bottom) = if options.legend.position == LegendPosition::Top {
        (legend, None)
    } else {
        (None, legend)
    };

    view! {
        <div class="relative">
            {legend_top}

            <canvas
                node_ref=canvas_ref
                width="1000"
                height="500"
                class="w-full h-72 md:h-[32rem] rounded-lg"
            />

            {legend_bottom}
        </div>
    }
}

/// Team legend, scrollable beyond `max_lines` rows
#[component]
fn ChartLegend(matrix: ChartMatrix, max_lines: u32) -> impl IntoView {
    let style = format!(
        "max-height: {}rem; overflow-y: auto",
        legend_max_height_rem(max_lines)
    );

    view! {
        <div class="flex justify-center flex-wrap gap-x-4 gap-y-1 mt-4" style=style>
            {(0..matrix.series_count())
                .filter_map(|idx| {
                    let label = matrix.series_label(idx)?.to_string();
                    let color = series_color(idx);
                    Some(view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-300">{label}</span>
                        </div>
                    })
                })
                .collect_view()}
        </div>
    }
}

fn series_color(idx: usize) -> &'static str {
    SERIES_COLORS[idx % SERIES_COLORS.len()]
}

fn legend_max_height_rem(max_lines: u32) -> f64 {
    max_lines.max(1) as f64 * LEGEND_LINE_REM
}

/// Pad the value range by 10% each side; a flat range gets ±1
fn padded_bounds((min, max): (f64, f64)) -> (f64, f64) {
    let range = max - min;
    if range > 0.0 {
        (min - range * 0.1, max + range * 0.1)
    } else {
        (min - 1.0, max + 1.0)
    }
}

/// Fraction of the way `date` lies between `start` and `end`
fn date_fraction(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> f64 {
    let span = (end - start).num_days();
    if span <= 0 {
        return 0.5;
    }
    (date - start).num_days() as f64 / span as f64
}

/// `count + 1` evenly spaced dates from `start` to `end`, deduplicated
fn date_ticks(start: NaiveDate, end: NaiveDate, count: i64) -> Vec<NaiveDate> {
    let span = (end - start).num_days().max(0);
    let mut ticks: Vec<NaiveDate> = (0..=count)
        .map(|i| start + chrono::Duration::days(i * span / count.max(1)))
        .collect();
    ticks.dedup();
    ticks
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, matrix: &ChartMatrix, options: &ChartOptions) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 70.0;
    let margin_right = 20.0;
    let margin_top = 50.0;
    let margin_bottom = 60.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    // Title
    ctx.set_fill_style(&"#f3f4f6".into()); // gray-100
    ctx.set_font("bold 16px sans-serif");
    ctx.set_text_align("center");
    let _ = ctx.fill_text(&options.title, width / 2.0, 28.0);

    let (bounds, span) = match (matrix.value_bounds(), matrix.date_span()) {
        (Some(bounds), Some(span)) => (bounds, span),
        _ => {
            ctx.set_fill_style(&"#6b7280".into());
            ctx.set_font("16px sans-serif");
            let _ = ctx.fill_text("No data", width / 2.0, height / 2.0);
            ctx.set_text_align("start");
            return;
        }
    };

    let (y_min, y_max) = padded_bounds(bounds);
    let (start, end) = span;

    let to_x = |date: NaiveDate| margin_left + date_fraction(date, start, end) * chart_width;
    let to_y = |value: f64| margin_top + ((y_max - value) / (y_max - y_min)) * chart_height;

    // Grid lines and value labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("end");

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * (y_max - y_min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(&format!("{:.0}", value), margin_left - 8.0, y + 4.0);
    }

    // Date labels
    ctx.set_text_align("center");
    for date in date_ticks(start, end, 6) {
        let _ = ctx.fill_text(&date.format("%b %d").to_string(), to_x(date), height - 36.0);
    }

    // Axis titles: game days run along the bottom, ratios up the side
    ctx.set_fill_style(&"#d1d5db".into()); // gray-300
    ctx.set_font("13px sans-serif");
    let _ = ctx.fill_text(&options.v_axis.title, margin_left + chart_width / 2.0, height - 12.0);

    ctx.save();
    let _ = ctx.translate(18.0, margin_top + chart_height / 2.0);
    let _ = ctx.rotate(-std::f64::consts::FRAC_PI_2);
    let _ = ctx.fill_text(&options.h_axis.title, 0.0, 0.0);
    ctx.restore();
    ctx.set_text_align("start");

    // One line per team
    ctx.set_line_width(1.5);
    for idx in 0..matrix.series_count() {
        ctx.set_stroke_style(&series_color(idx).into());
        ctx.begin_path();

        for (i, (date, value)) in matrix.series(idx).enumerate() {
            let (x, y) = (to_x(date), to_y(value));
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }

        ctx.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, m, d).unwrap()
    }

    #[test]
    fn test_series_color_cycles() {
        assert_eq!(series_color(0), series_color(SERIES_COLORS.len()));
        assert_ne!(series_color(0), series_color(1));
    }

    #[test]
    fn test_padded_bounds() {
        let (min, max) = padded_bounds((0.0, 100.0));
        assert!((min + 10.0).abs() < 1e-9);
        assert!((max - 110.0).abs() < 1e-9);

        assert_eq!(padded_bounds((50.0, 50.0)), (49.0, 51.0));
    }

    #[test]
    fn test_date_fraction() {
        let (start, end) = (day(10, 16), day(10, 26));
        assert_eq!(date_fraction(start, start, end), 0.0);
        assert_eq!(date_fraction(end, start, end), 1.0);
        assert_eq!(date_fraction(day(10, 21), start, end), 0.5);

        // Single game day sits in the middle
        assert_eq!(date_fraction(start, start, start), 0.5);
    }

    #[test]
    fn test_date_ticks() {
        let ticks = date_ticks(day(10, 1), day(10, 7), 6);
        assert_eq!(ticks.len(), 7);
        assert_eq!(ticks.first(), Some(&day(10, 1)));
        assert_eq!(ticks.last(), Some(&day(10, 7)));

        assert_eq!(date_ticks(day(10, 1), day(10, 1), 6), vec![day(10, 1)]);
    }

    #[test]
    fn test_legend_height() {
        assert_eq!(legend_max_height_rem(10), 17.5);
        assert_eq!(legend_max_height_rem(0), LEGEND_LINE_REM);
    }
}
