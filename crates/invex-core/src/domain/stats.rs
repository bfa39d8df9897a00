//! Aggregate statistics over the product table

use serde::Serialize;

use super::product::{Product, ProductLine};

/// Min/max/total of the per-row amount, plus the rows that were counted.
///
/// On an empty (or fully discarded) set `min` and `max` are `None`, which
/// serializes to `null`, and `total`/`count` are zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub total: f64,
    pub count: usize,
    pub products: Vec<ProductLine>,
}

impl ProductStats {
    /// Rows whose price or amount is not a finite number are discarded.
    pub fn compute<I>(products: I) -> Self
    where
        I: IntoIterator<Item = Product>,
    {
        let lines: Vec<ProductLine> = products
            .into_iter()
            .filter(|p| p.prix.is_finite())
            .map(ProductLine::from)
            .filter(|line| line.montant.is_finite())
            .collect();

        let (min, max, total) = lines.iter().map(|line| line.montant).fold(
            (None, None, 0.0),
            |(min, max, total): (Option<f64>, Option<f64>, f64), montant| {
                (
                    Some(min.map_or(montant, |m: f64| m.min(montant))),
                    Some(max.map_or(montant, |m: f64| m.max(montant))),
                    total + montant,
                )
            },
        );

        Self {
            min,
            max,
            total,
            count: lines.len(),
            products: lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(num: &str, prix: f64, quantite: i32) -> Product {
        Product {
            num_produit: num.to_string(),
            design: format!("Article {}", num),
            prix,
            quantite,
        }
    }

    #[test]
    fn test_stats_two_products() {
        let stats = ProductStats::compute(vec![product("A", 10.0, 2), product("B", 5.0, 3)]);
        assert_eq!(stats.min, Some(15.0));
        assert_eq!(stats.max, Some(20.0));
        assert_eq!(stats.total, 35.0);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.products.len(), 2);
        assert_eq!(stats.products[0].montant, 20.0);
    }

    #[test]
    fn test_stats_empty_set() {
        let stats = ProductStats::compute(Vec::new());
        assert_eq!(stats.min, None);
        assert_eq!(stats.max, None);
        assert_eq!(stats.total, 0.0);
        assert_eq!(stats.count, 0);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "min": null, "max": null, "total": 0.0, "count": 0, "products": [] })
        );
    }

    #[test]
    fn test_stats_discard_non_finite_rows() {
        let stats = ProductStats::compute(vec![
            product("A", f64::NAN, 2),
            product("B", 4.0, 1),
            product("C", f64::INFINITY, 1),
            product("D", f64::MAX, 2),
        ]);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min, Some(4.0));
        assert_eq!(stats.max, Some(4.0));
        assert_eq!(stats.products[0].num_produit, "B");
    }

    #[test]
    fn test_stats_single_row_min_equals_max() {
        let stats = ProductStats::compute(vec![product("A", 2.5, 4)]);
        assert_eq!(stats.min, stats.max);
        assert_eq!(stats.total, 10.0);
    }
}
