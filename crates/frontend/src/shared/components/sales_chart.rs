use crate::shared::chart::{ChartPoint, LineChart, LineSeries};
use leptos::prelude::*;

const ACTUAL_COLOR: &str = "#8884d8";
const FORECAST_COLOR: &str = "#82ca9d";

/// Two lines over a shared date axis: actuals solid, forecast dashed.
///
/// Points sharing a date with the previous one go into the same x slot when
/// their keys do not collide, so the junction sits on the last actual and
/// the two lines touch.
pub fn sales_series(points: &[ChartPoint]) -> (Vec<String>, Vec<LineSeries>) {
    let mut labels: Vec<String> = Vec::with_capacity(points.len());
    let mut cost: Vec<Option<f64>> = Vec::with_capacity(points.len());
    let mut forecast: Vec<Option<f64>> = Vec::with_capacity(points.len());

    for point in points {
        let last = labels.len().checked_sub(1);
        let mergeable = last.filter(|&i| {
            labels[i] == point.date
                && (cost[i].is_none() || point.cost.is_none())
                && (forecast[i].is_none() || point.forecast.is_none())
        });
        match mergeable {
            Some(i) => {
                cost[i] = cost[i].or(point.cost);
                forecast[i] = forecast[i].or(point.forecast);
            }
            None => {
                labels.push(point.date.clone());
                cost.push(point.cost);
                forecast.push(point.forecast);
            }
        }
    }

    let has_forecast = forecast.iter().any(Option::is_some);
    let mut series = vec![LineSeries {
        label: "Actual Sales".to_string(),
        color: ACTUAL_COLOR,
        dashed: false,
        values: cost,
    }];
    if has_forecast {
        series.push(LineSeries {
            label: "Forecast".to_string(),
            color: FORECAST_COLOR,
            dashed: true,
            values: forecast,
        });
    }
    (labels, series)
}

#[component]
pub fn SalesChart(#[prop(into)] points: Signal<Vec<ChartPoint>>) -> impl IntoView {
    let shaped = Memo::new(move |_| points.with(|p| sales_series(p)));
    let labels = Signal::derive(move || shaped.with(|(l, _)| l.clone()));
    let series = Signal::derive(move || shaped.with(|(_, s)| s.clone()));

    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">"Sales Overview"</h3>
            <LineChart labels=labels series=series />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::chart::{stitch, TimePoint};

    #[test]
    fn test_forecast_line_starts_at_junction() {
        let points = stitch(
            &[TimePoint::new("d1", 1.0), TimePoint::new("d2", 2.0)],
            &[TimePoint::new("d3", 3.0)],
        );
        let (labels, series) = sales_series(&points);
        assert_eq!(labels, vec!["d1", "d2", "d3"]);
        assert_eq!(series[0].values, vec![Some(1.0), Some(2.0), None]);
        assert_eq!(series[1].values, vec![None, Some(2.0), Some(3.0)]);
        assert!(series[1].dashed);
    }

    #[test]
    fn test_no_forecast_line_without_forecast() {
        let points = stitch(&[TimePoint::new("d1", 1.0)], &[]);
        let (_, series) = sales_series(&points);
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_colliding_dates_keep_separate_slots() {
        let points = stitch(
            &[TimePoint::new("d1", 1.0), TimePoint::new("d1", 5.0)],
            &[],
        );
        let (labels, series) = sales_series(&points);
        assert_eq!(labels, vec!["d1", "d1"]);
        assert_eq!(series[0].values, vec![Some(1.0), Some(5.0)]);
    }
}
