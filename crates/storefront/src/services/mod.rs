//! Business services for the storefront.

pub mod whatsapp;
