use serde::Serialize;

/// The protocol-ready result of a parse. `select` and `table` are always
/// non-empty; each optional field is set only when its clause appeared in
/// the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryDescription {
    pub select: String,
    pub table: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,
}

impl QueryDescription {
    pub fn new(select: String, table: String) -> Self {
        Self { select, table, ..Default::default() }
    }

    /// Path of this query on the service, before percent-encoding. The
    /// transport encodes the table segment along with the query pairs.
    pub fn resource_path(&self, connection_id: &str) -> String {
        format!("/connections/{}/query/{}", connection_id, self.table)
    }

    /// The `$`-prefixed query parameters, `$select` first, unset fields
    /// omitted. Values are raw; encoding is the URL builder's job.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("$select", self.select.clone())];

        if let Some(top) = self.top {
            pairs.push(("$top", top.to_string()));
        }
        if let Some(skip) = self.skip {
            pairs.push(("$skip", skip.to_string()));
        }
        if let Some(filter) = &self.filter {
            pairs.push(("$filter", filter.clone()));
        }
        if let Some(orderby) = &self.orderby {
            pairs.push(("$orderby", orderby.clone()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use crate::query::QueryDescription;

    fn description() -> QueryDescription {
        QueryDescription {
            select: "*".to_string(),
            table: "entity2".to_string(),
            top: Some(5),
            skip: None,
            filter: Some("index lt 10 ".to_string()),
            orderby: None,
        }
    }

    #[test]
    pub fn test_resource_path() {
        let path = description().resource_path("e40b3c7f");

        assert_eq!(path, "/connections/e40b3c7f/query/entity2");
    }

    #[test]
    pub fn test_query_pairs_order_and_presence() {
        let pairs = description().query_pairs();

        assert_eq!(
            pairs,
            vec![
                ("$select", "*".to_string()),
                ("$top", "5".to_string()),
                ("$filter", "index lt 10 ".to_string()),
            ]
        );
    }

    #[test]
    pub fn test_query_pairs_minimal() {
        let description = QueryDescription::new("a, b".to_string(), "t".to_string());

        let pairs = description.query_pairs();

        assert_eq!(pairs, vec![("$select", "a, b".to_string())]);
    }
}
