use dioxus::prelude::*;
use gscores::chart::{format_count, StackedBarChart};
use gscores::dashboard::DashboardState;
use gscores::ApiError;

const CHART_WIDTH: f64 = 800.0;
const CHART_HEIGHT: f64 = 400.0;
const PADDING_LEFT: f64 = 72.0;
const PADDING_RIGHT: f64 = 16.0;
const PADDING_TOP: f64 = 16.0;
const PADDING_BOTTOM: f64 = 48.0;
const TICKS: u32 = 5;

#[component]
pub fn StatisticsChart(dashboard: Signal<DashboardState>) -> Element {
    let state = dashboard.read();
    let body = match (state.empty_filter(), state.chart()) {
        (Some(axis), _) => {
            let message = ApiError::EmptyFilter(axis).user_message();
            rsx! {
                div {
                    style: "padding: 1rem; background: #fffbeb; border: 1px solid #fcd34d; border-radius: 0.375rem; color: #92400e;",
                    "{message}"
                }
            }
        }
        (None, None) if state.loading_statistics => rsx! {
            p { style: "text-align: center; color: #6b7280; padding: 4rem 0;", "Loading statistics..." }
        },
        (None, None) => rsx! {
            p { style: "text-align: center; color: #6b7280; padding: 4rem 0;", "No data available" }
        },
        (None, Some(chart)) => rsx! {
            StackedBars { chart }
        },
    };

    rsx! {
        div {
            style: "background: white; border-radius: 0.5rem; box-shadow: 0 4px 6px rgba(0,0,0,0.1); padding: 1.5rem;",
            h3 { style: "font-size: 1.25rem; font-weight: bold; margin: 0 0 1rem 0;", "Score Distribution by Subject" }
            {body}
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct SegmentRect {
    y: f64,
    height: f64,
    color: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
struct BarLayout {
    x: f64,
    width: f64,
    center: f64,
    label: String,
    segments: Vec<SegmentRect>,
}

fn layout_bars(chart: &StackedBarChart, axis_max: f64) -> Vec<BarLayout> {
    let plot_width = CHART_WIDTH - PADDING_LEFT - PADDING_RIGHT;
    let plot_height = CHART_HEIGHT - PADDING_TOP - PADDING_BOTTOM;
    let band = plot_width / chart.bars.len().max(1) as f64;
    let y_of = |value: u64| PADDING_TOP + plot_height * (1.0 - value as f64 / axis_max);

    chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let x = PADDING_LEFT + band * i as f64 + band * 0.2;
            BarLayout {
                x,
                width: band * 0.6,
                center: x + band * 0.3,
                label: bar.label.clone(),
                segments: bar
                    .segments
                    .iter()
                    .map(|segment| {
                        let top = y_of(segment.offset + segment.count);
                        SegmentRect {
                            y: top,
                            height: y_of(segment.offset) - top,
                            color: segment.color(),
                        }
                    })
                    .collect(),
            }
        })
        .collect()
}

#[component]
fn StackedBars(chart: StackedBarChart) -> Element {
    let mut hovered = use_signal(|| None::<usize>);

    let axis_max = chart.axis_max(TICKS).max(1) as f64;
    let plot_height = CHART_HEIGHT - PADDING_TOP - PADDING_BOTTOM;
    let bars = layout_bars(&chart, axis_max);
    let ticks: Vec<(f64, String)> = chart
        .ticks(TICKS)
        .into_iter()
        .map(|tick| {
            let y = PADDING_TOP + plot_height * (1.0 - tick as f64 / axis_max);
            (y, format_count(tick))
        })
        .collect();
    let legend = chart.legend();

    let tooltip = hovered().and_then(|i| {
        let bar = chart.bars.get(i)?;
        let layout = bars.get(i)?;
        Some((bar.tooltip(), layout.center / CHART_WIDTH * 100.0))
    });

    rsx! {
        div {
            style: "position: relative;",
            svg {
                style: "width: 100%; height: auto;",
                view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                "preserveAspectRatio": "xMidYMid meet",

                for (y, label) in ticks {
                    line {
                        x1: "{PADDING_LEFT}",
                        y1: "{y}",
                        x2: "{CHART_WIDTH - PADDING_RIGHT}",
                        y2: "{y}",
                        stroke: "#e5e7eb",
                        "stroke-dasharray": "3 3"
                    }
                    text {
                        x: "{PADDING_LEFT - 8.0}",
                        y: "{y + 4.0}",
                        fill: "#6b7280",
                        "font-size": "12",
                        "text-anchor": "end",
                        "{label}"
                    }
                }

                for (i, bar) in bars.into_iter().enumerate() {
                    g {
                        key: "{bar.label}",
                        onmouseenter: move |_| hovered.set(Some(i)),
                        onmouseleave: move |_| hovered.set(None),
                        for segment in bar.segments.iter() {
                            rect {
                                x: "{bar.x}",
                                y: "{segment.y}",
                                width: "{bar.width}",
                                height: "{segment.height}",
                                fill: "{segment.color}"
                            }
                        }
                        text {
                            x: "{bar.center}",
                            y: "{CHART_HEIGHT - PADDING_BOTTOM + 20.0}",
                            fill: "#374151",
                            "font-size": "12",
                            "text-anchor": "middle",
                            "{bar.label}"
                        }
                    }
                }
            }

            if let Some((lines, left)) = tooltip {
                div {
                    style: "position: absolute; top: 0; left: {left}%; transform: translateX(-50%); background: white; border: 1px solid #e5e7eb; border-radius: 0.375rem; box-shadow: 0 4px 6px rgba(0,0,0,0.1); padding: 0.5rem 0.75rem; pointer-events: none; font-size: 0.875rem;",
                    for (i, line) in lines.iter().enumerate() {
                        div {
                            key: "{i}",
                            style: if i == 0 { "font-weight: bold;" } else { "color: #4b5563;" },
                            "{line}"
                        }
                    }
                }
            }

            div {
                style: "display: flex; justify-content: center; flex-wrap: wrap; gap: 1rem; margin-top: 0.5rem;",
                for entry in legend {
                    div {
                        key: "{entry.level}",
                        style: "display: flex; align-items: center; gap: 0.375rem; font-size: 0.875rem;",
                        span { style: "display: inline-block; width: 0.75rem; height: 0.75rem; border-radius: 2px; background-color: {entry.color};" }
                        span { "{entry.label}" }
                    }
                }
            }
        }
    }
}
