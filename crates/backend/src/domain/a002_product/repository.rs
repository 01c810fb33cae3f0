use anyhow::Result;
use contracts::domain::a002_product::aggregate::Product;
use once_cell::sync::OnceCell;
use std::path::Path;

static CATALOG: OnceCell<Vec<Product>> = OnceCell::new();

/// Разбор каталога товаров (CSV: ProductName, ProductCategory, UnitPrice)
pub fn parse_catalog(csv_text: &str) -> Result<Vec<Product>> {
    let text = csv_text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    // Header names without spaces so "Product Name" and "ProductName" both map
    let headers: csv::StringRecord = reader
        .headers()?
        .iter()
        .map(|name| name.replace(' ', ""))
        .collect();
    reader.set_headers(headers);

    let mut items = Vec::new();
    for result in reader.deserialize::<Product>() {
        match result {
            Ok(product) if !product.product_name.is_empty() => items.push(product),
            Ok(_) => tracing::warn!("Skipping catalog row without a product name"),
            Err(e) => tracing::warn!("Skipping malformed catalog row: {}", e),
        }
    }
    Ok(items)
}

/// Загрузить каталог при старте; отсутствие файла не фатально
pub fn load_catalog(path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::warn!("Products file not found: {}", path.display());
        return Ok(());
    }
    let items = parse_catalog(&std::fs::read_to_string(path)?)?;
    tracing::info!("Loaded {} products from {}", items.len(), path.display());
    CATALOG
        .set(items)
        .map_err(|_| anyhow::anyhow!("Product catalog already loaded"))
}

/// Каталог, если он был загружен
pub fn list_all() -> Option<&'static [Product]> {
    CATALOG.get().map(Vec::as_slice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_with_spaced_headers() {
        let csv = "Product Name,Product Category,Unit Price\niPhone 14 Pro,Electronics,999.99\nDune, Books ,15.5\n";
        let items = parse_catalog(csv).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].product_name, "iPhone 14 Pro");
        assert_eq!(items[1].product_category, "Books");
        assert_eq!(items[1].unit_price, 15.5);
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let csv = "ProductName,ProductCategory,UnitPrice\nLamp,Home,abc\n,Home,3\nRug,Home,40\n";
        let items = parse_catalog(csv).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_name, "Rug");
    }
}
