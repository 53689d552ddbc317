//! Session-related types.
//!
//! The only state the storefront keeps per shopper is the cart; it is
//! serialized into the session row under a single key.

/// Session keys for shopper data.
pub mod keys {
    /// Key for the serialized [`souk_core::cart::Cart`].
    pub const CART: &str = "cart";
}
