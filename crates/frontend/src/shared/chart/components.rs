//! SVG charts. Each component recomputes its geometry from signals; nothing
//! is interpolated across missing points.

use super::geometry::{
    arc_path, label_stride, pie_slices, polyline, segments, Frame, ValueRange,
};
use leptos::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 280.0;
const PADDING: f64 = 40.0;
const MAX_X_LABELS: usize = 8;

/// Pie palette, cycled by slice index
pub const PIE_PALETTE: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8"];

/// Cluster/group palette for scatter charts
pub const GROUP_PALETTE: [&str; 6] = [
    "#8884d8", "#82ca9d", "#ffc658", "#ff7300", "#d0ed57", "#a4de6c",
];

fn frame() -> Frame {
    Frame::new(WIDTH, HEIGHT, PADDING)
}

fn view_box() -> String {
    format!("0 0 {} {}", WIDTH, HEIGHT)
}

/// One line of a [`LineChart`]; `values` is aligned with the chart labels
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub label: String,
    pub color: &'static str,
    pub dashed: bool,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub group: usize,
    pub label: String,
}

fn compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Horizontal grid lines with value labels on the left
fn y_axis(range: ValueRange) -> impl IntoView {
    let f = frame();
    range
        .ticks(5)
        .into_iter()
        .map(|tick| {
            let y = f.y_at(tick, &range);
            view! {
                <g class="chart__tick">
                    <line x1=f.padding x2=f.width - f.padding y1=y y2=y stroke="#e5e7eb" />
                    <text x=f.padding - 6.0 y=y + 4.0 text-anchor="end" font-size="10" fill="#6b7280">
                        {compact(tick)}
                    </text>
                </g>
            }
        })
        .collect_view()
}

fn legend(items: Vec<(String, &'static str)>) -> impl IntoView {
    view! {
        <div class="chart__legend">
            {items
                .into_iter()
                .map(|(label, color)| {
                    view! {
                        <span class="chart__legend-item">
                            <span class="chart__swatch" style=format!("background:{}", color)></span>
                            {label}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn empty_chart(message: &'static str) -> AnyView {
    view! { <div class="chart chart--empty">{message}</div> }.into_any()
}

#[component]
pub fn LineChart(
    /// X-axis labels (dates)
    #[prop(into)]
    labels: Signal<Vec<String>>,
    #[prop(into)] series: Signal<Vec<LineSeries>>,
) -> impl IntoView {
    move || {
        let labels = labels.get();
        let series = series.get();
        if labels.is_empty() {
            return empty_chart("No data");
        }

        let f = frame();
        let count = labels.len();
        let range = ValueRange::from_values(
            series
                .iter()
                .flat_map(|s| s.values.iter().flatten().copied()),
        );
        let stride = label_stride(count, MAX_X_LABELS);

        let x_labels = labels
            .iter()
            .enumerate()
            .filter(|(i, _)| i % stride == 0)
            .map(|(i, label)| {
                view! {
                    <text x=f.x_at(i, count) y=f.bottom() + 16.0 text-anchor="middle" font-size="10" fill="#6b7280">
                        {label.clone()}
                    </text>
                }
            })
            .collect_view();

        let legend_items = series.iter().map(|s| (s.label.clone(), s.color)).collect();

        let lines = series
            .into_iter()
            .flat_map(|s| {
                let dash = if s.dashed { "6 4" } else { "" };
                segments(&s.values)
                    .into_iter()
                    .map(move |segment| {
                        let points = polyline(&segment, count, &range, &f);
                        let dots = segment
                            .iter()
                            .map(|(i, v)| {
                                view! {
                                    <circle cx=f.x_at(*i, count) cy=f.y_at(*v, &range) r="2.5" fill=s.color>
                                        <title>{format!("{}: {:.2}", s.label, v)}</title>
                                    </circle>
                                }
                            })
                            .collect_view();
                        view! {
                            <g>
                                <polyline points=points fill="none" stroke=s.color stroke-width="2" stroke-dasharray=dash />
                                {dots}
                            </g>
                        }
                    })
                    .collect::<Vec<_>>()
            })
            .collect_view();

        view! {
            <div class="chart">
                <svg class="chart__svg" viewBox=view_box() preserveAspectRatio="xMidYMid meet">
                    {y_axis(range)}
                    {lines}
                    {x_labels}
                </svg>
                {legend(legend_items)}
            </div>
        }
        .into_any()
    }
}

#[component]
pub fn BarChart(
    #[prop(into)] labels: Signal<Vec<String>>,
    #[prop(into)] values: Signal<Vec<f64>>,
    #[prop(optional)] color: Option<&'static str>,
) -> impl IntoView {
    let color = color.unwrap_or("#82ca9d");
    move || {
        let labels = labels.get();
        let values = values.get();
        if values.is_empty() {
            return empty_chart("No data");
        }

        let f = frame();
        let count = values.len();
        let range = ValueRange::from_values(values.iter().copied());
        let width = f.band_width(count);
        let baseline = f.y_at(0.0_f64.max(range.min), &range);
        let stride = label_stride(count, MAX_X_LABELS);

        let bars = values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let top = f.y_at(*value, &range);
                let (y, h) = if top <= baseline {
                    (top, baseline - top)
                } else {
                    (baseline, top - baseline)
                };
                let label = labels.get(i).cloned().unwrap_or_default();
                let x_label = (i % stride == 0).then(|| {
                    view! {
                        <text x=f.band_center(i, count) y=f.bottom() + 16.0 text-anchor="middle" font-size="10" fill="#6b7280">
                            {label.clone()}
                        </text>
                    }
                });
                view! {
                    <g>
                        <rect x=f.band_center(i, count) - width / 2.0 y=y width=width height=h fill=color>
                            <title>{format!("{}: {}", label, compact(*value))}</title>
                        </rect>
                        {x_label}
                    </g>
                }
            })
            .collect_view();

        view! {
            <div class="chart">
                <svg class="chart__svg" viewBox=view_box() preserveAspectRatio="xMidYMid meet">
                    {y_axis(range)}
                    {bars}
                </svg>
            </div>
        }
        .into_any()
    }
}

#[component]
pub fn PieChart(
    #[prop(into)] labels: Signal<Vec<String>>,
    #[prop(into)] values: Signal<Vec<f64>>,
) -> impl IntoView {
    move || {
        let labels = labels.get();
        let values = values.get();
        let slices = pie_slices(&values);
        if slices.is_empty() {
            return empty_chart("No data");
        }

        let (cx, cy, r) = (WIDTH / 2.0, HEIGHT / 2.0, HEIGHT / 2.0 - 20.0);
        let total: f64 = values.iter().filter(|v| **v > 0.0).sum();

        let paths = slices
            .iter()
            .zip(values.iter())
            .enumerate()
            .filter(|(_, ((start, end), _))| end > start)
            .map(|(i, ((start, end), value))| {
                let label = labels.get(i).cloned().unwrap_or_default();
                let share = value / total * 100.0;
                view! {
                    <path d=arc_path(cx, cy, r, *start, *end) fill=PIE_PALETTE[i % PIE_PALETTE.len()] stroke="#fff">
                        <title>{format!("{}: {} ({:.0}%)", label, compact(*value), share)}</title>
                    </path>
                }
            })
            .collect_view();

        let legend_items = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), PIE_PALETTE[i % PIE_PALETTE.len()]))
            .collect();

        view! {
            <div class="chart">
                <svg class="chart__svg" viewBox=view_box() preserveAspectRatio="xMidYMid meet">
                    {paths}
                </svg>
                {legend(legend_items)}
            </div>
        }
        .into_any()
    }
}

#[component]
pub fn ScatterChart(
    #[prop(into)] points: Signal<Vec<ScatterPoint>>,
    /// Legend label per group index
    #[prop(into)]
    groups: Signal<Vec<String>>,
    #[prop(into)] x_label: String,
    #[prop(into)] y_label: String,
) -> impl IntoView {
    move || {
        let points = points.get();
        if points.is_empty() {
            return empty_chart("No data");
        }

        let f = frame();
        let x_range = ValueRange::from_values(points.iter().map(|p| p.x));
        let y_range = ValueRange::from_values(points.iter().map(|p| p.y));

        let dots = points
            .iter()
            .map(|p| {
                let color = GROUP_PALETTE[p.group % GROUP_PALETTE.len()];
                view! {
                    <circle cx=f.x_for(p.x, &x_range) cy=f.y_at(p.y, &y_range) r="5" fill=color fill-opacity="0.8">
                        <title>{format!("{} ({}, {})", p.label, compact(p.x), compact(p.y))}</title>
                    </circle>
                }
            })
            .collect_view();

        let legend_items = groups
            .get()
            .into_iter()
            .enumerate()
            .map(|(i, label)| (label, GROUP_PALETTE[i % GROUP_PALETTE.len()]))
            .collect();

        view! {
            <div class="chart">
                <svg class="chart__svg" viewBox=view_box() preserveAspectRatio="xMidYMid meet">
                    {y_axis(y_range)}
                    <text x=WIDTH / 2.0 y=HEIGHT - 6.0 text-anchor="middle" font-size="11" fill="#374151">
                        {format!("{} (max {})", x_label.clone(), compact(x_range.max))}
                    </text>
                    <text x=12.0 y=PADDING - 12.0 font-size="11" fill="#374151">{y_label.clone()}</text>
                    {dots}
                </svg>
                {legend(legend_items)}
            </div>
        }
        .into_any()
    }
}
