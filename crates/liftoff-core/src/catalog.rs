//! The fixed service catalog.
//!
//! Order is deploy order. The gateway is last: it depends on nothing but is
//! the public entry point, so every backend should exist before it comes up.

use crate::types::{DatabaseRequirement, ServiceDefinition};

/// Source path of the GraphQL gateway. The only Node project in the
/// repository; everything else builds as a Go binary.
pub const GATEWAY_PATH: &str = "gateway";

/// Every service of the platform, in deploy order.
pub const CATALOG: [ServiceDefinition; 10] = [
    ServiceDefinition {
        name: "Identity Service",
        path: "services/identity",
        port: 8001,
        database: DatabaseRequirement::Postgres,
    },
    ServiceDefinition {
        name: "Product Catalog",
        path: "services/product-catalog",
        port: 8006,
        database: DatabaseRequirement::Mongo,
    },
    ServiceDefinition {
        name: "Inventory Service",
        path: "services/inventory",
        port: 8005,
        database: DatabaseRequirement::Postgres,
    },
    ServiceDefinition {
        name: "Cart Service",
        path: "services/cart",
        port: 8002,
        database: DatabaseRequirement::Postgres,
    },
    ServiceDefinition {
        name: "Order Service",
        path: "services/order",
        port: 8003,
        database: DatabaseRequirement::Postgres,
    },
    ServiceDefinition {
        name: "Payment Service",
        path: "services/payment",
        port: 8004,
        database: DatabaseRequirement::Postgres,
    },
    ServiceDefinition {
        name: "Promotions Service",
        path: "services/promotions",
        port: 8007,
        database: DatabaseRequirement::Postgres,
    },
    ServiceDefinition {
        name: "Merchant Account",
        path: "services/merchant-account",
        port: 8008,
        database: DatabaseRequirement::Postgres,
    },
    ServiceDefinition {
        name: "Analytics Service",
        path: "services/analytics",
        port: 8009,
        database: DatabaseRequirement::Postgres,
    },
    ServiceDefinition {
        name: "GraphQL Gateway",
        path: GATEWAY_PATH,
        port: 4000,
        database: DatabaseRequirement::None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_ten_services() {
        assert_eq!(CATALOG.len(), 10);
    }

    #[test]
    fn gateway_deploys_last() {
        let last = CATALOG.last().unwrap();
        assert_eq!(last.path, GATEWAY_PATH);
        assert_eq!(last.database, DatabaseRequirement::None);

        // And only the last entry is the gateway.
        assert_eq!(
            CATALOG.iter().filter(|s| s.path == GATEWAY_PATH).count(),
            1
        );
    }

    #[test]
    fn names_paths_and_ports_are_unique() {
        let names: HashSet<_> = CATALOG.iter().map(|s| s.name).collect();
        let paths: HashSet<_> = CATALOG.iter().map(|s| s.path).collect();
        let ports: HashSet<_> = CATALOG.iter().map(|s| s.port).collect();
        assert_eq!(names.len(), CATALOG.len());
        assert_eq!(paths.len(), CATALOG.len());
        assert_eq!(ports.len(), CATALOG.len());
    }

    #[test]
    fn only_product_catalog_wants_mongo() {
        let mongo: Vec<_> = CATALOG
            .iter()
            .filter(|s| s.database == DatabaseRequirement::Mongo)
            .map(|s| s.name)
            .collect();
        assert_eq!(mongo, vec!["Product Catalog"]);
    }
}
