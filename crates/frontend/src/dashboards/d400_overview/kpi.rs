use contracts::domain::a001_transaction::aggregate::Transaction;

/// Сколько последних операций показывать на обзоре
pub const RECENT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kpis {
    pub total_sales: f64,
    pub total_orders: usize,
    pub average_sale: f64,
}

impl Kpis {
    pub fn from_transactions(items: &[Transaction]) -> Self {
        let total_sales: f64 = items.iter().map(|t| t.amount).sum();
        let total_orders = items.len();
        let average_sale = if total_orders == 0 {
            0.0
        } else {
            total_sales / total_orders as f64
        };
        Self {
            total_sales,
            total_orders,
            average_sale,
        }
    }
}

/// Последние `limit` операций, новые первыми (порядок хранилища)
pub fn recent(items: &[Transaction], limit: usize) -> Vec<Transaction> {
    items.iter().rev().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::synchronizer::tests::widget;

    #[test]
    fn test_kpis() {
        let kpis = Kpis::from_transactions(&[widget(1, 10.0), widget(2, 30.0)]);
        assert_eq!(kpis.total_sales, 40.0);
        assert_eq!(kpis.total_orders, 2);
        assert_eq!(kpis.average_sale, 20.0);
    }

    #[test]
    fn test_empty_average_is_zero() {
        assert_eq!(Kpis::from_transactions(&[]), Kpis::default());
    }

    #[test]
    fn test_recent_is_newest_first_and_bounded() {
        let items: Vec<_> = (1..=12).map(|i| widget(i, i as f64)).collect();
        let ids: Vec<i64> = recent(&items, RECENT_LIMIT)
            .iter()
            .map(|t| t.id.value())
            .collect();
        assert_eq!(ids, (3..=12).rev().collect::<Vec<_>>());
    }
}
