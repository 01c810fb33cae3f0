pub mod api;

use crate::shared::picker_aggregate::AggregatePickerResult;
use contracts::domain::a002_product::aggregate::Product;

impl AggregatePickerResult for Product {
    fn id(&self) -> String {
        self.product_name.clone()
    }

    fn display_name(&self) -> String {
        self.product_name.clone()
    }
}
