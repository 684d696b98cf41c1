//! The fixed set of read views exposed over HTTP.
//!
//! Every queryable table lives in [`TABLES`]; nothing request-supplied ever
//! reaches the query text, so this array is the whole injection surface to
//! audit.

/// One exposed read view: table name, ORDER BY column, row cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDescriptor {
    pub name: &'static str,
    pub order_column: &'static str,
    pub limit: i64,
}

impl TableDescriptor {
    /// The route this view is served under.
    pub fn route_path(&self) -> String {
        format!("/api/{}", self.name)
    }

    /// Read query for the `limit` most-recent rows, descending by the
    /// ordering column. Identifiers come only from this whitelist.
    pub fn query(&self) -> String {
        format!(
            "SELECT * FROM {} ORDER BY {} DESC LIMIT {}",
            self.name, self.order_column, self.limit
        )
    }
}

pub static TABLES: [TableDescriptor; 6] = [
    TableDescriptor {
        name: "persons",
        order_column: "id",
        limit: 50,
    },
    TableDescriptor {
        name: "cameras",
        order_column: "id",
        limit: 50,
    },
    TableDescriptor {
        name: "events",
        order_column: "id",
        limit: 100,
    },
    TableDescriptor {
        name: "alerts",
        order_column: "id",
        limit: 100,
    },
    TableDescriptor {
        name: "system_logs",
        order_column: "id",
        limit: 200,
    },
    TableDescriptor {
        name: "embeddings",
        order_column: "id",
        limit: 20,
    },
];
