use contracts::dashboards::d404_clustering::ClusteredProduct;
use std::collections::BTreeMap;

/// Сводка по кластеру
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSummary {
    pub cluster: u8,
    pub count: usize,
    pub mean_revenue: f64,
    pub mean_units: f64,
}

/// One row per cluster present, ordered by cluster number
pub fn cluster_summaries(products: &[ClusteredProduct]) -> Vec<ClusterSummary> {
    let mut groups: BTreeMap<u8, (usize, f64, f64)> = BTreeMap::new();
    for p in products {
        let entry = groups.entry(p.cluster).or_insert((0, 0.0, 0.0));
        entry.0 += 1;
        entry.1 += p.total_revenue;
        entry.2 += p.total_units_sold;
    }
    groups
        .into_iter()
        .map(|(cluster, (count, revenue, units))| ClusterSummary {
            cluster,
            count,
            mean_revenue: revenue / count as f64,
            mean_units: units / count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, cluster: u8, revenue: f64, units: f64) -> ClusteredProduct {
        ClusteredProduct {
            product_name: name.into(),
            total_units_sold: units,
            total_revenue: revenue,
            average_price: revenue / units,
            cluster,
        }
    }

    #[test]
    fn test_summaries_by_cluster() {
        let summaries = cluster_summaries(&[
            product("A", 2, 300.0, 3.0),
            product("B", 0, 100.0, 10.0),
            product("C", 2, 100.0, 1.0),
        ]);
        assert_eq!(
            summaries,
            vec![
                ClusterSummary {
                    cluster: 0,
                    count: 1,
                    mean_revenue: 100.0,
                    mean_units: 10.0
                },
                ClusterSummary {
                    cluster: 2,
                    count: 2,
                    mean_revenue: 200.0,
                    mean_units: 2.0
                },
            ]
        );
    }

    #[test]
    fn test_no_products_no_clusters() {
        assert!(cluster_summaries(&[]).is_empty());
    }
}
