//! Conversion from catalog wire records to the product view model.

use shopfront_core::{CurrencyCode, Price, Product, ProductId, Rating};

use super::CatalogError;
use super::types::{RawProduct, RawRating};

/// Currency the upstream catalog quotes prices in.
const CATALOG_CURRENCY: CurrencyCode = CurrencyCode::USD;

/// Convert one wire record into a [`Product`].
///
/// # Errors
///
/// Returns [`CatalogError::InvalidRecord`] if the price cannot be represented.
pub fn convert_product(raw: RawProduct) -> Result<Product, CatalogError> {
    let price =
        Price::from_f64(raw.price, CATALOG_CURRENCY).map_err(|e| CatalogError::InvalidRecord {
            id: raw.id,
            reason: e.to_string(),
        })?;

    let category = if raw.category.trim().is_empty() {
        None
    } else {
        Some(raw.category)
    };

    Ok(Product {
        id: ProductId::new(raw.id),
        name: raw.title,
        description: raw.description,
        price,
        image: raw.image,
        category,
        rating: raw.rating.map(convert_rating),
    })
}

/// Convert a full listing, failing as a whole if any record is invalid.
///
/// # Errors
///
/// Returns the first [`CatalogError::InvalidRecord`] encountered.
pub fn convert_products(raw: Vec<RawProduct>) -> Result<Vec<Product>, CatalogError> {
    raw.into_iter().map(convert_product).collect()
}

const fn convert_rating(r: RawRating) -> Rating {
    Rating {
        rate: r.rate,
        count: r.count,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn raw(id: i32, price: f64) -> RawProduct {
        RawProduct {
            id,
            title: format!("Product {id}"),
            description: "A thing".to_string(),
            price,
            image: format!("https://example.com/{id}.jpg"),
            category: "electronics".to_string(),
            rating: Some(RawRating {
                rate: 3.9,
                count: 120,
            }),
        }
    }

    #[test]
    fn test_convert_product_maps_fields() {
        let product = convert_product(raw(1, 109.95)).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "Product 1");
        assert_eq!(product.formatted_price(), "$109.95");
        assert_eq!(product.category.as_deref(), Some("electronics"));
        assert_eq!(product.rating.unwrap().count, 120);
    }

    #[test]
    fn test_convert_product_empty_category_is_none() {
        let mut record = raw(2, 10.0);
        record.category = "  ".to_string();
        record.rating = None;
        let product = convert_product(record).unwrap();
        assert!(product.category.is_none());
        assert!(product.rating.is_none());
        assert_eq!(product.formatted_price(), "$10.00");
    }

    #[test]
    fn test_convert_products_fails_as_a_whole() {
        let result = convert_products(vec![raw(1, 5.0), raw(2, -3.0), raw(3, 7.5)]);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidRecord { id: 2, .. })
        ));
    }

    #[test]
    fn test_convert_products_preserves_order() {
        let products = convert_products(vec![raw(3, 1.0), raw(1, 2.0), raw(2, 3.0)]).unwrap();
        let ids: Vec<i32> = products.iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
