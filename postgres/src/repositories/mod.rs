// storefront-postgres/src/repositories/mod.rs

//! sqlx implementations of the storefront repository traits.
//!
//! Queries are built at runtime (`sqlx::query`), so the crate compiles without a
//! live database. Rows are mapped with `try_get`, never panicking on a schema drift.

pub mod customers;
pub mod orders;
pub mod products;

pub use customers::PgCustomersRepository;
pub use orders::PgOrdersRepository;
pub use products::PgProductsRepository;
