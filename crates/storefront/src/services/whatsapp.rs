//! WhatsApp order hand-off.
//!
//! There is no checkout API: an order leaves the system as a human-readable
//! Arabic summary, URL-encoded into a `wa.me` link the client opens. These
//! builders produce that text for every flow that ends in a hand-off - cart
//! checkout, grocery orders, prescription requests, store applications, and
//! craftsman contact.

use rust_decimal::Decimal;
use serde::Deserialize;

use souk_core::Price;
use souk_core::cart::Cart;

/// Customer details collected before checkout.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CustomerInfo {
    /// Whether the three required fields are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.phone.is_empty() && !self.address.is_empty()
    }
}

/// "Add your store" application details.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRequest {
    pub name: String,
    pub category: String,
    pub owner_name: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
}

impl StoreRequest {
    /// Whether the required fields are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.category.is_empty()
            && !self.owner_name.is_empty()
            && !self.phone.is_empty()
    }
}

/// Build the order summary sent at cart checkout.
#[must_use]
pub fn order_message(cart: &Cart, customer: &CustomerInfo) -> String {
    let mut text = String::from("*طلب جديد من تطبيق سوق إكسبريس*\n\n");
    text.push_str("*معلومات العميل:*\n");
    text.push_str(&format!("الاسم: {}\n", customer.name));
    text.push_str(&format!("رقم الهاتف: {}\n", customer.phone));
    text.push_str(&format!("العنوان: {}\n\n", customer.address));

    if let Some(notes) = customer.notes.as_deref().filter(|n| !n.is_empty()) {
        text.push_str(&format!("*ملاحظات:* {notes}\n\n"));
    }

    text.push_str("*الطلبات:*\n");
    for (index, line) in cart.lines().iter().enumerate() {
        let line_total = Price::egp(line.price * Decimal::from(line.quantity));
        text.push_str(&format!(
            "{}. {} - {}× - {line_total}\n",
            index + 1,
            line.name,
            line.quantity,
        ));
    }

    text.push_str(&format!(
        "\n*إجمالي الطلب:* {}",
        Price::egp(cart.total_price())
    ));
    text
}

/// Build the grocery order sent from the supermarket screen.
#[must_use]
pub fn grocery_message(customer: &CustomerInfo, grocery_list: &str) -> String {
    let mut text = String::from("*طلب جديد من سوبرماركت سوق إكسبريس*\n\n");
    text.push_str("*معلومات العميل:*\n");
    text.push_str(&format!("الاسم: {}\n", customer.name));
    text.push_str(&format!("رقم الهاتف: {}\n", customer.phone));
    text.push_str(&format!("العنوان: {}\n\n", customer.address));
    text.push_str(&format!("*قائمة المشتريات:*\n{grocery_list}"));
    text
}

/// The fixed prescription request sent from the pharmacy screen.
#[must_use]
pub const fn prescription_message() -> &'static str {
    "مرحباً، أرغب في طلب أدوية حسب الروشتة المرفقة."
}

/// Build the store application sent from the "add your store" screen.
#[must_use]
pub fn store_request_message(request: &StoreRequest) -> String {
    let mut text = String::from("*طلب إضافة متجر جديد*\n\n");
    text.push_str(&format!("اسم المتجر: {}\n", request.name));
    text.push_str(&format!("نوع المتجر: {}\n", request.category));
    text.push_str(&format!("اسم المالك: {}\n", request.owner_name));
    text.push_str(&format!("رقم الهاتف: {}\n", request.phone));
    text.push_str(&format!("العنوان: {}\n", request.address));
    text.push_str(&format!("نبذة عن المتجر: {}", request.description));
    text
}

/// Build the contact opener for a craftsman.
#[must_use]
pub fn craftsman_contact_message(name: &str, profession: &str) -> String {
    format!("مرحباً، أرغب في التواصل مع الفني {name} ({profession})")
}

/// Build a `wa.me` link carrying the given message.
#[must_use]
pub fn wa_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{number}?text={}", urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use souk_core::cart::CartLine;

    use super::*;

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "أحمد".to_owned(),
            phone: "01000000000".to_owned(),
            address: "شارع التحرير 12".to_owned(),
            notes: None,
        }
    }

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(CartLine {
            id: "b1".to_owned(),
            name: "بيج كينج".to_owned(),
            price: Decimal::from(90),
            quantity: 2,
            image: None,
            restaurant_id: None,
            restaurant_name: None,
        });
        cart.add_item(CartLine {
            id: "f1".to_owned(),
            name: "بطاطس كبير".to_owned(),
            price: Decimal::from(35),
            quantity: 1,
            image: None,
            restaurant_id: None,
            restaurant_name: None,
        });
        cart
    }

    #[test]
    fn test_order_message_lists_lines_and_total() {
        let text = order_message(&cart(), &customer());

        assert!(text.contains("1. بيج كينج - 2× - 180 ج.م"));
        assert!(text.contains("2. بطاطس كبير - 1× - 35 ج.م"));
        assert!(text.contains("*إجمالي الطلب:* 215 ج.م"));
        assert!(!text.contains("*ملاحظات:*"));
    }

    #[test]
    fn test_order_message_includes_notes_when_present() {
        let mut with_notes = customer();
        with_notes.notes = Some("بدون بصل".to_owned());

        let text = order_message(&cart(), &with_notes);
        assert!(text.contains("*ملاحظات:* بدون بصل"));
    }

    #[test]
    fn test_grocery_message_carries_list_verbatim() {
        let text = grocery_message(&customer(), "2 كيلو أرز\nزيت عباد الشمس");
        assert!(text.contains("*قائمة المشتريات:*\n2 كيلو أرز\nزيت عباد الشمس"));
    }

    #[test]
    fn test_customer_info_required_fields() {
        assert!(customer().is_complete());

        let mut missing = customer();
        missing.address = String::new();
        assert!(!missing.is_complete());
    }

    #[test]
    fn test_wa_link_encodes_message() {
        let link = wa_link("201234567890", "hello world & more");
        assert!(link.starts_with("https://wa.me/201234567890?text="));
        assert!(link.contains("hello%20world%20%26%20more"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_craftsman_contact_message() {
        let text = craftsman_contact_message("محمد صلاح", "كهرباء");
        assert_eq!(text, "مرحباً، أرغب في التواصل مع الفني محمد صلاح (كهرباء)");
    }
}
