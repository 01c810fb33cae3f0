use contracts::domain::a001_transaction::aggregate::Transaction;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Value at a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub date: String,
    pub value: f64,
}

impl TimePoint {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// Chart point: actual (`cost`) or forecast (`forecast`)
///
/// Exactly one of the two is set per point; the junction point carries only
/// `forecast`, seeded from the last actual. An absent key is a gap the
/// renderer must not interpolate across.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<f64>,
}

impl ChartPoint {
    fn cost(date: &str, value: f64) -> Self {
        Self {
            date: date.to_string(),
            cost: Some(value),
            forecast: None,
        }
    }

    fn forecast(date: &str, value: f64) -> Self {
        Self {
            date: date.to_string(),
            cost: None,
            forecast: Some(value),
        }
    }
}

/// Merge the historical series and the forecast into one chart sequence.
///
/// Output: every historical point as `cost`, then (only if the forecast is
/// non-empty) one junction point on the last historical date whose
/// `forecast` is the last historical value, then the forecast as-is.
/// Empty history yields an empty chart whatever the forecast holds.
/// Forecast dates are not checked against historical ones.
pub fn stitch(historical: &[TimePoint], forecast: &[TimePoint]) -> Vec<ChartPoint> {
    let Some(last) = historical.last() else {
        return Vec::new();
    };

    let extra = if forecast.is_empty() { 0 } else { 1 + forecast.len() };
    let mut points = Vec::with_capacity(historical.len() + extra);
    points.extend(historical.iter().map(|p| ChartPoint::cost(&p.date, p.value)));

    if !forecast.is_empty() {
        points.push(ChartPoint::forecast(&last.date, last.value));
        points.extend(forecast.iter().map(|p| ChartPoint::forecast(&p.date, p.value)));
    }
    points
}

/// Parse a raw JSON series of `{date, <value_key>}` objects.
///
/// `null` (absent) is an empty series. Anything that is not an array, or an
/// element without a string date or a numeric value, is malformed.
pub fn parse_series(raw: &Value, value_key: &str) -> Result<Vec<TimePoint>, String> {
    let items = match raw {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        other => return Err(format!("expected an array, got {}", json_kind(other))),
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let date = item
                .get("date")
                .and_then(Value::as_str)
                .ok_or_else(|| format!("point {} has no date", i))?;
            let value = item
                .get(value_key)
                .and_then(Value::as_f64)
                .ok_or_else(|| format!("point {} has no numeric '{}'", i, value_key))?;
            Ok(TimePoint::new(date, value))
        })
        .collect()
}

/// [`stitch`] with a forecast payload straight off the wire. A malformed
/// forecast degrades to an empty chart instead of an error.
pub fn stitch_with_raw_forecast(historical: &[TimePoint], raw_forecast: &Value) -> Vec<ChartPoint> {
    match parse_series(raw_forecast, "forecast") {
        Ok(forecast) => stitch(historical, &forecast),
        Err(e) => {
            log::warn!("malformed forecast series, chart left empty: {}", e);
            Vec::new()
        }
    }
}

/// Sum of `Amount` per date, chronological (ISO dates sort lexically).
pub fn daily_totals(transactions: &[Transaction]) -> Vec<TimePoint> {
    let mut by_date: BTreeMap<&str, f64> = BTreeMap::new();
    for tx in transactions {
        *by_date.entry(tx.date.as_str()).or_insert(0.0) += tx.amount;
    }
    by_date
        .into_iter()
        .map(|(date, value)| TimePoint::new(date, round2(value)))
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn history() -> Vec<TimePoint> {
        vec![
            TimePoint::new("2024-01-01", 100.0),
            TimePoint::new("2024-01-02", 120.0),
            TimePoint::new("2024-01-03", 90.0),
        ]
    }

    fn forecast() -> Vec<TimePoint> {
        vec![
            TimePoint::new("2024-01-04", 95.5),
            TimePoint::new("2024-01-05", 97.0),
        ]
    }

    #[test]
    fn test_length_is_history_plus_junction_plus_forecast() {
        assert_eq!(stitch(&history(), &forecast()).len(), 3 + 1 + 2);
        assert_eq!(stitch(&history(), &[]).len(), 3);
    }

    #[test]
    fn test_junction_is_seeded_from_last_actual() {
        let points = stitch(&history(), &forecast());
        let junction = &points[3];
        assert_eq!(junction.date, "2024-01-03");
        assert_eq!(junction.forecast, Some(90.0));
        assert_eq!(junction.cost, None);
        assert_ne!(junction.forecast, Some(95.5));
    }

    #[test]
    fn test_keys_are_disjoint_around_the_junction() {
        let points = stitch(&history(), &forecast());
        assert!(points[..3].iter().all(|p| p.cost.is_some() && p.forecast.is_none()));
        assert!(points[3..].iter().all(|p| p.cost.is_none() && p.forecast.is_some()));
        assert_eq!(points[5], ChartPoint::forecast("2024-01-05", 97.0));
    }

    #[test]
    fn test_empty_history_hides_forecast() {
        assert!(stitch(&[], &forecast()).is_empty());
        assert!(stitch(&[], &[]).is_empty());
    }

    #[test]
    fn test_junction_serializes_without_cost_key() {
        let points = stitch(&history(), &forecast());
        let value = serde_json::to_value(&points[3]).unwrap();
        assert_eq!(value, json!({"date": "2024-01-03", "forecast": 90.0}));
    }

    #[test]
    fn test_raw_forecast_is_parsed() {
        let raw = json!([{"date": "2024-01-04", "forecast": 95.5}]);
        let points = stitch_with_raw_forecast(&history(), &raw);
        assert_eq!(points.len(), 5);
        assert_eq!(points[4].forecast, Some(95.5));
    }

    #[test]
    fn test_absent_forecast_is_empty_not_malformed() {
        let points = stitch_with_raw_forecast(&history(), &Value::Null);
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_malformed_forecast_degrades_to_empty() {
        assert!(stitch_with_raw_forecast(&history(), &json!({"forecast": 1})).is_empty());
        assert!(stitch_with_raw_forecast(&history(), &json!([{"forecast": 1.0}])).is_empty());
        assert!(parse_series(&json!("oops"), "forecast").is_err());
    }

    #[test]
    fn test_daily_totals_groups_and_orders_by_date() {
        use contracts::domain::a001_transaction::aggregate::{
            TransactionId, TransactionStatus,
        };
        let tx = |id: i64, date: &str, amount: f64| Transaction {
            id: TransactionId(id),
            date: date.into(),
            description: "Widget".into(),
            amount,
            status: TransactionStatus::Completed,
            product_category: None,
            payment_method: None,
            units_sold: 1,
        };
        let totals = daily_totals(&[
            tx(1, "2024-01-02", 5.0),
            tx(2, "2024-01-01", 10.0),
            tx(3, "2024-01-02", 2.25),
        ]);
        assert_eq!(
            totals,
            vec![
                TimePoint::new("2024-01-01", 10.0),
                TimePoint::new("2024-01-02", 7.25),
            ]
        );
    }
}
