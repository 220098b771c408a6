//! Newtype IDs for Shopify global object references.
//!
//! Shopify identifies every object with an opaque global ID string such as
//! `gid://shopify/Cart/c1-abc123`. Use the `define_gid!` macro to create
//! type-safe wrappers that prevent accidentally mixing IDs from different
//! object types.

/// Prefix shared by all Shopify global IDs.
pub const GID_PREFIX: &str = "gid://shopify/";

/// Macro to define a type-safe Shopify global ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`, `resource_id()`
/// - `From<String>`, `From<&str>` and `Into<String>` implementations
///
/// # Example
///
/// ```rust
/// # use hello_storefront_core::define_gid;
/// define_gid!(CartId);
/// define_gid!(OrderId);
///
/// let cart_id = CartId::new("gid://shopify/Cart/abc123");
/// assert_eq!(cart_id.resource_id(), "abc123");
///
/// // These are different types, so this won't compile:
/// // let _: OrderId = cart_id;
/// ```
#[macro_export]
macro_rules! define_gid {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// The trailing resource segment of a global ID.
            ///
            /// `gid://shopify/Cart/abc123?key=x` yields `abc123?key=x`. IDs that
            /// are not global IDs are returned unchanged.
            #[must_use]
            pub fn resource_id(&self) -> &str {
                self.0
                    .strip_prefix($crate::types::id::GID_PREFIX)
                    .and_then(|rest| rest.split_once('/'))
                    .map_or(self.0.as_str(), |(_, id)| id)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_gid!(CartId);
define_gid!(CartLineId);
define_gid!(ProductId);
define_gid!(VariantId);
define_gid!(CustomerId);
define_gid!(ImageId);
