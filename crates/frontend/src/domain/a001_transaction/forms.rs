//! Формы создания операций.

use crate::shared::picker_aggregate::Typeahead;
use contracts::domain::a001_transaction::aggregate::{TransactionDto, TransactionStatus};
use contracts::domain::a002_product::aggregate::Product;

pub const PAYMENT_METHODS: [&str; 4] = ["Credit Card", "Debit Card", "PayPal", "Cash"];

fn parse_amount(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Ручное добавление операции
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewTransactionForm {
    pub description: String,
    pub amount: String,
    pub status: TransactionStatus,
}

impl NewTransactionForm {
    pub fn submit(&self) -> Result<TransactionDto, String> {
        let description = self.description.trim();
        if description.is_empty() || self.amount.trim().is_empty() {
            return Err("Please fill in both description and amount.".into());
        }
        let amount = parse_amount(&self.amount)
            .ok_or_else(|| format!("Amount must be a number, got '{}'", self.amount))?;
        Ok(TransactionDto::new(description, amount, self.status))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Продажа товара из каталога
#[derive(Debug, Clone, PartialEq)]
pub struct SaleEntryForm {
    pub product: Typeahead<Product>,
    pub category: String,
    pub unit_price: String,
    pub payment_method: String,
}

impl Default for SaleEntryForm {
    fn default() -> Self {
        Self {
            product: Typeahead::new(),
            category: String::new(),
            unit_price: String::new(),
            payment_method: PAYMENT_METHODS[0].to_string(),
        }
    }
}

impl SaleEntryForm {
    pub fn set_product_text(&mut self, text: impl Into<String>) {
        self.product.set_text(text);
        if self.product.selected().is_none() {
            self.category.clear();
        }
    }

    /// Name, category and price change together
    pub fn select_product(&mut self, product: Product) {
        self.category = product.product_category.clone();
        self.unit_price = format!("{:.2}", product.unit_price);
        self.product.select(product);
    }

    pub fn suggestions(&self, catalog: &[Product]) -> Vec<Product> {
        self.product.suggestions(catalog).cloned().collect()
    }

    pub fn submit(&self) -> Result<TransactionDto, String> {
        let product = self
            .product
            .selected_for_submit()
            .map_err(|_| "Please select a valid product from the list.".to_string())?;
        let price = parse_amount(&self.unit_price)
            .filter(|p| *p > 0.0)
            .ok_or_else(|| "Sale price must be a positive number".to_string())?;
        if !PAYMENT_METHODS.contains(&self.payment_method.as_str()) {
            return Err(format!("Unknown payment method: {}", self.payment_method));
        }
        Ok(TransactionDto {
            product_category: Some(product.product_category.clone()),
            payment_method: Some(self.payment_method.clone()),
            ..TransactionDto::new(&product.product_name, price, TransactionStatus::Completed)
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
