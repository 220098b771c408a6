//! GraphQL operation definitions for Shopify Storefront API.
//!
//! Each operation lives in a module shaped like `graphql_client` codegen
//! output (`Variables`, `ResponseData`, `QUERY`, `OPERATION_NAME`) and a unit
//! struct implementing [`GraphQLQuery`]. Response structs mirror the selection
//! sets in `graphql/storefront/queries/*.graphql` field for field.

use graphql_client::{GraphQLQuery, QueryBody};

/// Cart lookup by ID, localized through `@inContext`.
pub struct CartQuery;

impl GraphQLQuery for CartQuery {
    type Variables = cart_query::Variables;
    type ResponseData = cart_query::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: cart_query::QUERY,
            operation_name: cart_query::OPERATION_NAME,
        }
    }
}

/// Shop name and description for the page shell.
pub struct LayoutQuery;

impl GraphQLQuery for LayoutQuery {
    type Variables = layout_query::Variables;
    type ResponseData = layout_query::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: layout_query::QUERY,
            operation_name: layout_query::OPERATION_NAME,
        }
    }
}

pub mod cart_query {
    use serde::{Deserialize, Serialize};

    pub const OPERATION_NAME: &str = "CartQuery";
    pub const QUERY: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/graphql/storefront/queries/cart.graphql"
    ));

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct Variables {
        #[serde(rename = "cartId")]
        pub cart_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub country: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub language: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub cart: Option<CartFragment>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CartFragment {
        pub id: String,
        pub checkout_url: String,
        pub total_quantity: i64,
        pub buyer_identity: CartBuyerIdentity,
        pub lines: CartLineConnection,
        pub cost: CartCost,
        pub note: Option<String>,
        pub attributes: Vec<Attribute>,
        pub discount_codes: Vec<CartDiscountCode>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CartBuyerIdentity {
        pub country_code: Option<String>,
        pub customer: Option<Customer>,
        pub email: Option<String>,
        pub phone: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Customer {
        pub id: String,
        pub email: Option<String>,
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        pub display_name: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct CartLineConnection {
        pub edges: Vec<CartLineEdge>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct CartLineEdge {
        pub node: CartLine,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct CartLine {
        pub id: String,
        pub quantity: i64,
        pub attributes: Vec<Attribute>,
        pub cost: CartLineCost,
        pub merchandise: Merchandise,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CartLineCost {
        pub total_amount: MoneyFragment,
        pub amount_per_quantity: MoneyFragment,
        pub compare_at_amount_per_quantity: Option<MoneyFragment>,
    }

    /// `Merchandise` union; only `ProductVariant` carries a selection.
    #[derive(Debug, Clone, Deserialize)]
    #[serde(tag = "__typename")]
    pub enum Merchandise {
        ProductVariant(ProductVariant),
        #[serde(other)]
        Other,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductVariant {
        pub id: String,
        pub available_for_sale: bool,
        pub compare_at_price: Option<MoneyFragment>,
        pub price: MoneyFragment,
        pub requires_shipping: bool,
        pub title: String,
        pub image: Option<ImageFragment>,
        pub product: ProductRef,
        pub selected_options: Vec<SelectedOption>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ProductRef {
        pub handle: String,
        pub title: String,
        pub id: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct SelectedOption {
        pub name: String,
        pub value: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CartCost {
        pub subtotal_amount: MoneyFragment,
        pub total_amount: MoneyFragment,
        pub total_duty_amount: Option<MoneyFragment>,
        pub total_tax_amount: Option<MoneyFragment>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct Attribute {
        pub key: String,
        pub value: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct CartDiscountCode {
        pub code: String,
        pub applicable: bool,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct MoneyFragment {
        pub currency_code: String,
        pub amount: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ImageFragment {
        pub id: Option<String>,
        pub url: String,
        pub alt_text: Option<String>,
        pub width: Option<i64>,
        pub height: Option<i64>,
    }
}

pub mod layout_query {
    use serde::{Deserialize, Serialize};

    pub const OPERATION_NAME: &str = "layout";
    pub const QUERY: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/graphql/storefront/queries/layout.graphql"
    ));

    /// The layout query takes no variables (serialized as `null`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct Variables;

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub shop: Shop,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct Shop {
        pub name: String,
        pub description: Option<String>,
    }
}
