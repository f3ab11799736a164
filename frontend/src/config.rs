#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub fn contact_endpoint() -> String {
    format!("{}/api/contact", get_backend_url())
}

pub const WHATSAPP_NUMBER: &str = "9373545169";
pub const WHATSAPP_COUNTRY_CODE: &str = "91";
pub const WHATSAPP_GREETING: &str = "Hi OmRadix Solutions! I want to know more about your services.";

pub fn whatsapp_url() -> String {
    format!(
        "https://wa.me/{}{}?text={}",
        WHATSAPP_COUNTRY_CODE,
        WHATSAPP_NUMBER,
        urlencoding::encode(WHATSAPP_GREETING)
    )
}
