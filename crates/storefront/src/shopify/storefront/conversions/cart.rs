//! Cart type conversion functions.

use tracing::warn;

use crate::shopify::types::{
    Attribute, Cart, CartBuyerIdentity, CartCost, CartCustomer, CartDiscountCode, CartLine,
    CartLineCost, CartMerchandise, CartMerchandiseProduct, Image, Money, SelectedOption,
};

use super::super::queries::cart_query;

/// Convert a `CartFragment` into the domain cart.
///
/// Lines whose merchandise is not a product variant are dropped with a warning.
pub fn convert_cart(cart: cart_query::CartFragment) -> Cart {
    Cart {
        id: cart.id.into(),
        checkout_url: cart.checkout_url,
        total_quantity: cart.total_quantity,
        buyer_identity: convert_buyer_identity(cart.buyer_identity),
        lines: cart
            .lines
            .edges
            .into_iter()
            .filter_map(|edge| convert_cart_line(edge.node))
            .collect(),
        cost: convert_cart_cost(cart.cost),
        note: cart.note.filter(|n| !n.is_empty()),
        attributes: cart.attributes.into_iter().map(convert_attribute).collect(),
        discount_codes: cart
            .discount_codes
            .into_iter()
            .map(|d| CartDiscountCode {
                code: d.code,
                applicable: d.applicable,
            })
            .collect(),
    }
}

fn convert_money(money: cart_query::MoneyFragment) -> Money {
    Money {
        amount: money.amount,
        currency_code: money.currency_code,
    }
}

fn convert_attribute(attribute: cart_query::Attribute) -> Attribute {
    Attribute {
        key: attribute.key,
        value: attribute.value,
    }
}

fn convert_buyer_identity(b: cart_query::CartBuyerIdentity) -> CartBuyerIdentity {
    CartBuyerIdentity {
        country_code: b.country_code,
        customer: b.customer.map(|c| CartCustomer {
            id: c.id.into(),
            email: c.email,
            first_name: c.first_name,
            last_name: c.last_name,
            display_name: c.display_name,
        }),
        email: b.email,
        phone: b.phone,
    }
}

fn convert_cart_cost(cost: cart_query::CartCost) -> CartCost {
    CartCost {
        subtotal: convert_money(cost.subtotal_amount),
        total: convert_money(cost.total_amount),
        total_duty: cost.total_duty_amount.map(convert_money),
        total_tax: cost.total_tax_amount.map(convert_money),
    }
}

fn convert_cart_line(line: cart_query::CartLine) -> Option<CartLine> {
    let merchandise = match line.merchandise {
        cart_query::Merchandise::ProductVariant(variant) => convert_merchandise(variant),
        cart_query::Merchandise::Other => {
            warn!(line_id = %line.id, "Skipping cart line with non-variant merchandise");
            return None;
        }
    };

    Some(CartLine {
        id: line.id.into(),
        quantity: line.quantity,
        attributes: line.attributes.into_iter().map(convert_attribute).collect(),
        cost: CartLineCost {
            total_amount: convert_money(line.cost.total_amount),
            amount_per_quantity: convert_money(line.cost.amount_per_quantity),
            compare_at_amount_per_quantity: line
                .cost
                .compare_at_amount_per_quantity
                .map(convert_money),
        },
        merchandise,
    })
}

fn convert_merchandise(v: cart_query::ProductVariant) -> CartMerchandise {
    CartMerchandise {
        id: v.id.into(),
        title: v.title,
        available_for_sale: v.available_for_sale,
        requires_shipping: v.requires_shipping,
        price: convert_money(v.price),
        compare_at_price: v.compare_at_price.map(convert_money),
        selected_options: v
            .selected_options
            .into_iter()
            .map(|o| SelectedOption {
                name: o.name,
                value: o.value,
            })
            .collect(),
        image: v.image.map(|i| Image {
            id: i.id.map(Into::into),
            url: i.url,
            alt_text: i.alt_text,
            width: i.width,
            height: i.height,
        }),
        product: CartMerchandiseProduct {
            id: v.product.id.into(),
            handle: v.product.handle,
            title: v.product.title,
        },
    }
}
