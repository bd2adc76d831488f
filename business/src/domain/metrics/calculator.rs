use std::collections::HashMap;

use uuid::Uuid;

use super::model::DashboardMetrics;
use crate::domain::product::model::Product;
use crate::domain::sale::model::Sale;
use crate::domain::shared::value_objects::Money;

/// Derives the dashboard metrics from a product snapshot and a sale snapshot.
///
/// Business rules:
/// - Revenue is the sum of sale totals.
/// - Units is the sum of line item quantities.
/// - Profit per line is `quantity * (unit_price - product.cost)` using the
///   product's *current* cost. Lines whose product is not in the snapshot
///   add nothing to profit but still count towards units and revenue.
///
/// The result is recomputed from scratch on every call.
pub fn compute_metrics(products: &[Product], sales: &[Sale]) -> DashboardMetrics {
    let costs: HashMap<Uuid, Money> = products.iter().map(|p| (p.id, p.cost)).collect();

    let mut metrics = DashboardMetrics {
        total_sales: sales.len() as u64,
        ..DashboardMetrics::default()
    };

    for sale in sales {
        if sale.is_pending() {
            metrics.pending_sales += 1;
        }
        metrics.total_revenue += sale.total_amount;

        for item in &sale.items {
            metrics.total_units += i64::from(item.quantity);
            if let Some(cost) = costs.get(&item.product_id) {
                metrics.total_profit += (item.unit_price - *cost).times(item.quantity);
            }
        }
    }

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sale::model::SaleLineItem;
    use crate::domain::sale::value_objects::SaleStatus;
    use chrono::Utc;
    use proptest::prelude::*;

    fn product(price: i64, cost: i64) -> Product {
        Product::from_repository(
            Uuid::new_v4(),
            "Notebook".to_string(),
            Money::new(price),
            Money::new(cost),
            100,
            Utc::now(),
        )
    }

    fn item(product_id: Uuid, quantity: i32, unit_price: i64) -> SaleLineItem {
        SaleLineItem {
            id: Uuid::new_v4(),
            sale_id: Uuid::nil(),
            product_id,
            product_name: None,
            quantity,
            unit_price: Money::new(unit_price),
            subtotal: Money::new(unit_price).times(quantity),
        }
    }

    fn sale(status: SaleStatus, items: Vec<SaleLineItem>) -> Sale {
        let total = items.iter().map(|i| i.subtotal).sum();
        Sale::from_repository(
            Uuid::new_v4(),
            "Walk-in".to_string(),
            status,
            total,
            Utc::now(),
            items,
        )
    }

    #[test]
    fn should_return_zeroes_for_empty_snapshots() {
        let metrics = compute_metrics(&[], &[]);

        assert_eq!(metrics, DashboardMetrics::default());
    }

    #[test]
    fn should_aggregate_sales_revenue_units_and_profit() {
        let a = product(6900, 4000);
        let b = product(1500, 1000);
        let sales = vec![
            sale(
                SaleStatus::NotFulfilled,
                vec![item(a.id, 2, 6900), item(b.id, 1, 1500)],
            ),
            sale(SaleStatus::Fulfilled, vec![item(b.id, 4, 1500)]),
        ];

        let metrics = compute_metrics(&[a, b], &sales);

        assert_eq!(metrics.total_sales, 2);
        assert_eq!(metrics.pending_sales, 1);
        assert_eq!(metrics.total_revenue, Money::new(13800 + 1500 + 6000));
        assert_eq!(metrics.total_units, 7);
        // 2 * 2900 + 1 * 500 + 4 * 500
        assert_eq!(metrics.total_profit, Money::new(8300));
    }

    #[test]
    fn should_skip_profit_for_unknown_product_but_keep_units_and_revenue() {
        let known = product(1000, 600);
        let missing_id = Uuid::new_v4();
        let sales = vec![sale(
            SaleStatus::NotFulfilled,
            vec![item(known.id, 1, 1000), item(missing_id, 3, 2000)],
        )];

        let metrics = compute_metrics(&[known], &sales);

        assert_eq!(metrics.total_units, 4);
        assert_eq!(metrics.total_revenue, Money::new(7000));
        assert_eq!(metrics.total_profit, Money::new(400));
    }

    #[test]
    fn should_use_current_cost_for_historical_profit() {
        let mut p = product(1000, 600);
        let sales = vec![sale(SaleStatus::Fulfilled, vec![item(p.id, 2, 1000)])];

        assert_eq!(compute_metrics(&[p.clone()], &sales).total_profit, Money::new(800));

        p.cost = Money::new(900);
        assert_eq!(compute_metrics(&[p], &sales).total_profit, Money::new(200));
    }

    #[test]
    fn should_report_negative_profit_when_sold_below_cost() {
        let p = product(1000, 1200);
        let sales = vec![sale(SaleStatus::Fulfilled, vec![item(p.id, 1, 1000)])];

        assert_eq!(compute_metrics(&[p], &sales).total_profit, Money::new(-200));
    }

    fn arb_sales() -> impl Strategy<Value = Vec<Vec<(i32, i64)>>> {
        prop::collection::vec(
            prop::collection::vec((1i32..50, 0i64..100_000), 0..5),
            0..8,
        )
    }

    proptest! {
        #[test]
        fn metrics_match_snapshot_sums(raw in arb_sales(), known in any::<bool>()) {
            let p = product(5000, 3000);
            let product_id = if known { p.id } else { Uuid::new_v4() };
            let sales: Vec<Sale> = raw
                .iter()
                .map(|lines| {
                    sale(
                        SaleStatus::NotFulfilled,
                        lines.iter().map(|(q, price)| item(product_id, *q, *price)).collect(),
                    )
                })
                .collect();

            let metrics = compute_metrics(&[p], &sales);

            let revenue: Money = sales.iter().map(|s| s.total_amount).sum();
            let units: i64 = raw.iter().flatten().map(|(q, _)| i64::from(*q)).sum();
            prop_assert_eq!(metrics.total_sales, sales.len() as u64);
            prop_assert_eq!(metrics.total_revenue, revenue);
            prop_assert_eq!(metrics.total_units, units);
            if !known {
                prop_assert_eq!(metrics.total_profit, Money::ZERO);
            }
        }

        #[test]
        fn profit_is_revenue_minus_cost_of_units_when_all_products_known(
            raw in arb_sales(),
        ) {
            let p = product(5000, 3000);
            let sales: Vec<Sale> = raw
                .iter()
                .map(|lines| {
                    sale(
                        SaleStatus::Fulfilled,
                        lines.iter().map(|(q, price)| item(p.id, *q, *price)).collect(),
                    )
                })
                .collect();

            let metrics = compute_metrics(std::slice::from_ref(&p), &sales);

            let expected = metrics.total_revenue.minor_units()
                - metrics.total_units * p.cost.minor_units();
            prop_assert_eq!(metrics.total_profit.minor_units(), expected);
            prop_assert_eq!(metrics.pending_sales, 0);
        }
    }
}
