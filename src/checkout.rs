//! Checkout Stub
//!
//! Builds the order payload and reports it to the browser console.
//! No payment gateway is contacted and the cart is left untouched.

use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::cart::Cart;

// ========================
// Payload Structs
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutLine {
    pub id: u32,
    pub qty: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutPayload {
    pub items: Vec<CheckoutLine>,
    #[serde(rename = "amountCents")]
    pub amount_cents: u64,
    pub method: String,
}

impl CheckoutPayload {
    /// Empty carts have nothing to submit
    pub fn from_cart(cart: &Cart, method: &str) -> Result<Self, String> {
        if cart.is_empty() {
            return Err("cart is empty".to_string());
        }
        Ok(Self {
            items: cart
                .items()
                .iter()
                .map(|item| CheckoutLine { id: item.id, qty: item.qty })
                .collect(),
            amount_cents: cart.subtotal(),
            method: method.to_string(),
        })
    }
}

// ========================
// Reporting
// ========================

/// Log the payload as a JS object and block on an alert
pub fn submit(payload: &CheckoutPayload, notice: &str) -> Result<(), String> {
    let js_payload = serde_wasm_bindgen::to_value(payload).map_err(|e| e.to_string())?;
    web_sys::console::log_2(
        &JsValue::from_str(&format!("[CHECKOUT] Payload ({}):", payload.method)),
        &js_payload,
    );

    let win = web_sys::window().ok_or_else(|| "no window".to_string())?;
    win.alert_with_message(notice)
        .map_err(|e| format!("alert failed: {:?}", e))
}

pub fn checkout(cart: &Cart, method: &str, notice: &str) -> Result<CheckoutPayload, String> {
    let payload = CheckoutPayload::from_cart(cart, method)?;
    submit(&payload, notice)?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    const EBOOK: Product = Product { id: 1, title: "E", description: "", price_cents: 8900, image: "" };
    const GUIDE: Product = Product { id: 2, title: "G", description: "", price_cents: 4500, image: "" };

    #[test]
    fn test_payload_from_cart() {
        let mut cart = Cart::new();
        cart.add(&EBOOK);
        cart.add(&GUIDE);
        cart.add(&EBOOK);

        let payload = CheckoutPayload::from_cart(&cart, "przelewy24").unwrap();
        assert_eq!(
            payload.items,
            vec![CheckoutLine { id: 1, qty: 2 }, CheckoutLine { id: 2, qty: 1 }]
        );
        assert_eq!(payload.amount_cents, 2 * 8900 + 4500);
        assert_eq!(payload.method, "przelewy24");
        // Building the payload does not consume the cart
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_payload_json_shape() {
        let mut cart = Cart::new();
        cart.add(&GUIDE);
        let payload = CheckoutPayload::from_cart(&cart, "przelewy24").unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": [{ "id": 2, "qty": 1 }],
                "amountCents": 4500,
                "method": "przelewy24"
            })
        );
    }

    #[test]
    fn test_empty_cart_rejected() {
        assert!(CheckoutPayload::from_cart(&Cart::new(), "przelewy24").is_err());
    }
}
