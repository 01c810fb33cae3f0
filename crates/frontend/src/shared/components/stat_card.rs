use crate::shared::icons::icon;
use leptos::prelude::*;

/// Как показывать значение карточки
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueFormat {
    Money,
    Integer,
}

pub fn format_value(val: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Money => {
            let cents = (val.abs() * 100.0).round() as i64;
            let sign = if val < 0.0 && cents != 0 { "-" } else { "" };
            format!("{}${}.{:02}", sign, format_thousands(cents / 100), cents % 100)
        }
        ValueFormat::Integer => {
            let n = val.round() as i64;
            let sign = if n < 0 { "-" } else { "" };
            format!("{}{}", sign, format_thousands(n.abs()))
        }
    }
}

fn format_thousands(n: i64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Primary value (None = still loading)
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: ValueFormat,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "\u{2014}".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_format() {
        assert_eq!(format_value(1234567.891, ValueFormat::Money), "$1,234,567.89");
        assert_eq!(format_value(0.5, ValueFormat::Money), "$0.50");
        assert_eq!(format_value(-12.0, ValueFormat::Money), "-$12.00");
    }

    #[test]
    fn test_integer_format() {
        assert_eq!(format_value(1500.0, ValueFormat::Integer), "1,500");
        assert_eq!(format_value(7.0, ValueFormat::Integer), "7");
    }
}
