//! Domain types for Shopify Storefront API.
//!
//! These types provide a clean, ergonomic API separate from the raw
//! wire types in [`super::queries`].

use hello_storefront_core::{CartId, CartLineId, CustomerId, ImageId, Price, ProductId, VariantId};
use serde::{Deserialize, Serialize};

// =============================================================================
// Money Types
// =============================================================================

/// Monetary amount with currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount as string (preserves precision).
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

impl Money {
    /// Parse into a decimal [`Price`].
    #[must_use]
    pub fn price(&self) -> Option<Price> {
        Price::parse(&self.amount, &self.currency_code).ok()
    }

    /// Human-readable amount (e.g. `$19.99`).
    ///
    /// Falls back to the raw amount and code if the API sent something
    /// unparseable.
    #[must_use]
    pub fn display(&self) -> String {
        self.price().map_or_else(
            || format!("{} {}", self.amount, self.currency_code),
            |price| price.to_string(),
        )
    }
}

// =============================================================================
// Image Types
// =============================================================================

/// Product variant image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// Shopify image ID.
    pub id: Option<ImageId>,
    /// Image URL.
    pub url: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
    /// Image width in pixels.
    pub width: Option<i64>,
    /// Image height in pixels.
    pub height: Option<i64>,
}

// =============================================================================
// Shop Types
// =============================================================================

/// Shop-level metadata used to decorate the page shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    /// Shop name (page title).
    pub name: String,
    /// Shop description (may be unset in the admin).
    pub description: Option<String>,
}

/// Result of the layout query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// The shop.
    pub shop: Shop,
}

// =============================================================================
// Cart Types
// =============================================================================

/// Selected option on a product variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedOption {
    /// Option name (e.g., "Size", "Color").
    pub name: String,
    /// Selected value (e.g., "Large", "Blue").
    pub value: String,
}

/// Custom attribute (key-value pair).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute key.
    pub key: String,
    /// Attribute value.
    pub value: Option<String>,
}

/// Parent product reference on cart merchandise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartMerchandiseProduct {
    /// Product ID.
    pub id: ProductId,
    /// Product handle.
    pub handle: String,
    /// Product title.
    pub title: String,
}

/// Merchandise in a cart line (product variant).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartMerchandise {
    /// Variant ID.
    pub id: VariantId,
    /// Variant title ("Default Title" for single-variant products).
    pub title: String,
    /// Whether available for sale.
    pub available_for_sale: bool,
    /// Whether requires shipping.
    pub requires_shipping: bool,
    /// Current price.
    pub price: Money,
    /// Compare-at price.
    pub compare_at_price: Option<Money>,
    /// Selected options.
    pub selected_options: Vec<SelectedOption>,
    /// Variant image.
    pub image: Option<Image>,
    /// Parent product.
    pub product: CartMerchandiseProduct,
}

/// Cost for a cart line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineCost {
    /// Total for the line.
    pub total_amount: Money,
    /// Price per unit.
    pub amount_per_quantity: Money,
    /// Compare-at price per unit.
    pub compare_at_amount_per_quantity: Option<Money>,
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Cart line ID.
    pub id: CartLineId,
    /// Quantity.
    pub quantity: i64,
    /// Custom attributes.
    pub attributes: Vec<Attribute>,
    /// Line cost.
    pub cost: CartLineCost,
    /// Product variant.
    pub merchandise: CartMerchandise,
}

/// Cart cost summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartCost {
    /// Subtotal before tax/shipping.
    pub subtotal: Money,
    /// Total amount.
    pub total: Money,
    /// Total duty amount.
    pub total_duty: Option<Money>,
    /// Total tax amount.
    pub total_tax: Option<Money>,
}

/// Discount code applied to cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartDiscountCode {
    /// The discount code.
    pub code: String,
    /// Whether the code is applicable.
    pub applicable: bool,
}

/// Customer info in buyer identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartCustomer {
    /// Customer ID.
    pub id: CustomerId,
    /// Email.
    pub email: Option<String>,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Display name.
    pub display_name: String,
}

/// Buyer identity for the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartBuyerIdentity {
    /// Country code.
    pub country_code: Option<String>,
    /// Logged-in customer.
    pub customer: Option<CartCustomer>,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
}

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Cart ID.
    pub id: CartId,
    /// Checkout URL.
    pub checkout_url: String,
    /// Total item quantity.
    pub total_quantity: i64,
    /// Buyer identity.
    pub buyer_identity: CartBuyerIdentity,
    /// Cart lines, in API order.
    pub lines: Vec<CartLine>,
    /// Cart cost summary.
    pub cost: CartCost,
    /// Cart note.
    pub note: Option<String>,
    /// Custom attributes.
    pub attributes: Vec<Attribute>,
    /// Applied discount codes.
    pub discount_codes: Vec<CartDiscountCode>,
}

impl Cart {
    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
