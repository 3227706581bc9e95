pub mod color;
pub mod quote;
pub mod tenant;

pub use color::Color;
pub use quote::{
    BillingAddress, DiscountType, LineItem, LineItemType, Quote, QuoteStatus,
};
pub use tenant::Tenant;
