//! Query construction for document listings.
//!
//! Listings are returned in the store's natural insertion order. A [`Query`] only
//! narrows that order down with an offset and a limit.
//!
//! ```ignore
//! use usergraph_core::query::Query;
//!
//! let query = Query::builder()
//!     .offset(20)
//!     .limit(10)
//!     .build();
//! ```

/// A structured query for listing documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Maximum number of documents to return. `None` is unbounded.
    pub limit: Option<usize>,
    /// Number of documents to skip.
    pub offset: Option<usize>,
}

impl Query {
    /// Creates a new query returning every document.
    pub fn new() -> Self {
        Query { limit: None, offset: None }
    }

    /// Creates a new query builder for fluent construction.
    pub fn builder() -> QueryBuilder {
        QueryBuilder::new()
    }

    /// Builds a query from client supplied paging arguments.
    ///
    /// A missing or negative `skip` reads as 0. A missing, zero or negative `limit`
    /// reads as unbounded, matching the driver's treatment of a zero limit.
    pub fn page(limit: Option<i32>, skip: Option<i32>) -> Self {
        let mut builder = QueryBuilder::new();

        if let Some(skip) = skip.filter(|skip| *skip > 0) {
            builder = builder.offset(skip as usize);
        }
        if let Some(limit) = limit.filter(|limit| *limit > 0) {
            builder = builder.limit(limit as usize);
        }

        builder.build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    /// Creates a new query builder.
    pub fn new() -> Self {
        QueryBuilder { query: Query::default() }
    }

    /// Sets the maximum number of documents to return.
    pub fn limit(mut self, limit: usize) -> Self {
        self.query.limit = Some(limit);
        self
    }

    /// Sets the number of documents to skip.
    pub fn offset(mut self, offset: usize) -> Self {
        self.query.offset = Some(offset);
        self
    }

    /// Builds and returns the final query.
    pub fn build(self) -> Query {
        self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_everything() {
        assert_eq!(Query::page(None, None), Query::new());
    }

    #[test]
    fn zero_limit_is_unbounded() {
        assert_eq!(Query::page(Some(0), Some(3)), Query::builder().offset(3).build());
        assert_eq!(Query::page(Some(-5), None).limit, None);
    }

    #[test]
    fn negative_skip_is_clamped() {
        assert_eq!(Query::page(Some(3), Some(-2)), Query::builder().limit(3).build());
    }
}
