//! The quote aggregate consumed by one document build.
//!
//! All fields arrive from the caller and are trusted as-is: totals are not
//! recomputed and monetary consistency is not validated here.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    #[default]
    Draft,
    PendingReview,
    Sent,
    Viewed,
    Accepted,
    Rejected,
    Expired,
    Revised,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineItemType {
    Product,
    #[default]
    Service,
    Subscription,
    Discount,
    Fee,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

fn default_quantity() -> f64 {
    1.0
}

fn default_version() -> u32 {
    1
}

fn default_currency() -> String {
    "MXN".to_string()
}

fn default_tax_rate() -> Option<f64> {
    Some(16.0)
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    #[serde(rename = "type", default)]
    pub item_type: LineItemType,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub discount_type: Option<DiscountType>,
    #[serde(default)]
    pub discount_value: Option<f64>,
    #[serde(default)]
    pub tax_rate: Option<f64>,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl Default for LineItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            item_type: LineItemType::default(),
            name: String::new(),
            description: None,
            quantity: default_quantity(),
            unit_price: 0.0,
            discount_type: None,
            discount_value: None,
            tax_rate: None,
            subtotal: 0.0,
            total: 0.0,
            order: 0,
            metadata: None,
        }
    }
}

/// Billing address. `street` is an accepted alternative spelling of `line1`;
/// [`BillingAddress::street_line`] resolves whichever is present.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BillingAddress {
    #[serde(default)]
    pub line1: Option<String>,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl BillingAddress {
    pub fn street_line(&self) -> Option<&str> {
        self.street.as_deref().or(self.line1.as_deref())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub tenant_id: String,
    pub quote_number: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: QuoteStatus,

    // Related entities
    #[serde(default)]
    pub lead_id: Option<String>,
    #[serde(default)]
    pub lead_name: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub opportunity_id: Option<String>,
    #[serde(default)]
    pub opportunity_name: Option<String>,
    #[serde(default)]
    pub contact_id: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,

    #[serde(default)]
    pub billing_address: Option<BillingAddress>,

    // Dates
    pub issue_date: String,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub sent_at: Option<String>,
    #[serde(default)]
    pub viewed_at: Option<String>,
    #[serde(default)]
    pub accepted_at: Option<String>,
    #[serde(default)]
    pub rejected_at: Option<String>,

    // Financial
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub discount_type: Option<DiscountType>,
    #[serde(default)]
    pub discount_value: Option<f64>,
    #[serde(default)]
    pub discount_amount: f64,
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Option<f64>,
    #[serde(default)]
    pub tax_amount: f64,
    #[serde(default)]
    pub total: f64,

    #[serde(default)]
    pub items: Vec<LineItem>,

    // Content
    #[serde(default)]
    pub terms: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub internal_notes: Option<String>,

    // Ownership
    pub created_by: String,
    #[serde(default)]
    pub created_by_name: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub assigned_to_name: Option<String>,

    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Quote {
    /// Display name of the client, with the fallback chain used everywhere a
    /// counterpart name is shown.
    pub fn client_name(&self) -> &str {
        self.customer_name
            .as_deref()
            .or(self.company_name.as_deref())
            .or(self.lead_name.as_deref())
            .unwrap_or("Cliente")
    }

    /// Display name of the person who prepared the quote.
    pub fn preparer_name(&self) -> &str {
        self.assigned_to_name
            .as_deref()
            .or(self.created_by_name.as_deref())
            .unwrap_or("Equipo de Ventas")
    }
}
