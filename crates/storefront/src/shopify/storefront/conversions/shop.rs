//! Layout (shop metadata) conversion.

use crate::shopify::types::{Layout, Shop};

use super::super::queries::layout_query;

/// Convert the layout query response into domain types.
///
/// An empty description is treated the same as an unset one.
pub fn convert_layout(data: layout_query::ResponseData) -> Layout {
    Layout {
        shop: Shop {
            name: data.shop.name,
            description: data.shop.description.filter(|d| !d.trim().is_empty()),
        },
    }
}
