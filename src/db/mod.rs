pub mod sale_queries;
