//! Database Models
//!
//! One typed schema per partition; records are validated here at the gateway
//! boundary instead of being trusted as free-form documents at every call site.

// Serde helpers
pub mod serde_helpers;

// Auth
pub mod salesperson;

// Catalog
pub mod product;
pub mod resharpening;

// Orders
pub mod order;

// Re-exports
pub use order::{
    Order, OrderCreate, OrderId, OrderSnapshot, OrderStatus, OrderStatusPatch, OrderType,
};
pub use product::{Product, ProductCreate, ProductId, ProductUpdate};
pub use resharpening::{
    ResharpeningProduct, ResharpeningProductCreate, ResharpeningProductId,
    ResharpeningProductUpdate,
};
pub use salesperson::{
    Salesperson, SalespersonCreate, SalespersonId, SalespersonResponse, SalespersonUpdate,
};
