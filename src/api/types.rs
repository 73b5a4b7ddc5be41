//! Request payloads for the marketplace backend API.
//!
//! JSON payloads use camelCase serialization to match the API. Payloads that
//! carry files are built as multipart forms through `into_form()`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::transport::{FileUpload, FormData};

// ── Auth ─────────────────────────────────────────────────────────────────

/// Login request body sent to POST /{role}/login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Refresh request body sent to POST /auth/refresh-token.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Vendor self-registration, sent as multipart to POST /vendor/register.
#[derive(Debug, Clone, Default)]
pub struct VendorRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub shop_name: String,
    pub address: Option<String>,
    pub logo: Option<FileUpload>,
}

impl VendorRegistration {
    pub fn into_form(self) -> FormData {
        let form = FormData::new()
            .text("name", self.name)
            .text("email", self.email)
            .text("password", self.password)
            .text("phone", self.phone)
            .text("shopName", self.shop_name)
            .text_opt("address", self.address);
        attach(form, "logo", self.logo)
    }
}

// ── Categories ───────────────────────────────────────────────────────────

/// Main category create/update form.
#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<FileUpload>,
}

impl CategoryForm {
    pub fn into_form(self) -> FormData {
        let form = FormData::new()
            .text("name", self.name)
            .text_opt("description", self.description);
        attach(form, "image", self.image)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryRequest {
    pub name: String,
    pub parent_id: String,
}

// ── Products ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Discount percentage applied on top of `price`.
    pub discount: Option<f64>,
    pub stock: u32,
    pub category_id: String,
    pub sub_category_id: Option<String>,
    pub vendor_id: Option<String>,
    pub images: Vec<FileUpload>,
}

impl ProductForm {
    pub fn into_form(self) -> FormData {
        let mut form = FormData::new()
            .text("name", self.name)
            .text("description", self.description)
            .text("price", self.price)
            .text_opt("discount", self.discount)
            .text("stock", self.stock)
            .text("categoryId", self.category_id)
            .text_opt("subCategoryId", self.sub_category_id)
            .text_opt("vendorId", self.vendor_id);
        for image in self.images {
            form = form.file("images", image);
        }
        form
    }
}

// ── Orders ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            "returned" => Ok(OrderStatus::Returned),
            other => Err(format!("Unknown order status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

// ── Coupons ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponRequest {
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order_amount: Option<f64>,
    /// ISO-8601 date, e.g. "2024-12-31".
    pub expiry_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    pub is_active: bool,
}

// ── Vendors ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct VendorForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub shop_name: String,
    pub address: Option<String>,
    /// Platform commission in percent.
    pub commission_rate: Option<f64>,
    /// Only sent when an admin creates the vendor account.
    pub password: Option<String>,
    pub logo: Option<FileUpload>,
}

impl VendorForm {
    pub fn into_form(self) -> FormData {
        let form = FormData::new()
            .text("name", self.name)
            .text("email", self.email)
            .text("phone", self.phone)
            .text("shopName", self.shop_name)
            .text_opt("address", self.address)
            .text_opt("commissionRate", self.commission_rate)
            .text_opt("password", self.password);
        attach(form, "logo", self.logo)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorStatus {
    Pending,
    Approved,
    Rejected,
    Blocked,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorStatusUpdate {
    pub status: VendorStatus,
}

// ── Notifications ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct NotificationForm {
    pub title: String,
    pub message: String,
    /// Target group, e.g. "all", "vendors", "customers".
    pub audience: Option<String>,
    pub image: Option<FileUpload>,
}

impl NotificationForm {
    pub fn into_form(self) -> FormData {
        let form = FormData::new()
            .text("title", self.title)
            .text("message", self.message)
            .text_opt("audience", self.audience);
        attach(form, "image", self.image)
    }
}

// ── Reviews ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewReply {
    pub reply: String,
}

// ── Carousel ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct CarouselForm {
    pub title: Option<String>,
    pub link: Option<String>,
    pub position: Option<u32>,
    pub is_active: Option<bool>,
    pub image: Option<FileUpload>,
}

impl CarouselForm {
    pub fn into_form(self) -> FormData {
        let form = FormData::new()
            .text_opt("title", self.title)
            .text_opt("link", self.link)
            .text_opt("position", self.position)
            .text_opt("isActive", self.is_active);
        attach(form, "image", self.image)
    }
}

// ── Dashboard filters ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardPeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl DashboardPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardPeriod::Daily => "daily",
            DashboardPeriod::Weekly => "weekly",
            DashboardPeriod::Monthly => "monthly",
            DashboardPeriod::Yearly => "yearly",
        }
    }
}

impl fmt::Display for DashboardPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashboardPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" | "day" => Ok(DashboardPeriod::Daily),
            "weekly" | "week" => Ok(DashboardPeriod::Weekly),
            "monthly" | "month" => Ok(DashboardPeriod::Monthly),
            "yearly" | "year" => Ok(DashboardPeriod::Yearly),
            other => Err(format!("Unknown period: {}", other)),
        }
    }
}

/// Filter for the monthly sales report.
#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    /// Month in `YYYY-MM` form.
    pub month: String,
    pub vendor_id: Option<String>,
}

fn attach(form: FormData, name: &str, file: Option<FileUpload>) -> FormData {
    match file {
        Some(file) => form.file(name, file),
        None => form,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::FormPart;
    use serde_json::json;

    #[test]
    fn test_product_form_fields() {
        let form = ProductForm {
            name: "Phone".into(),
            description: "A phone".into(),
            price: 299.0,
            discount: Some(10.0),
            stock: 5,
            category_id: "cat-1".into(),
            images: vec![
                FileUpload::new("front.png", "image/png", vec![1]),
                FileUpload::new("back.png", "image/png", vec![2]),
            ],
            ..Default::default()
        }
        .into_form();

        assert_eq!(form.text_value("price"), Some("299"));
        assert_eq!(form.text_value("discount"), Some("10"));
        assert_eq!(form.text_value("categoryId"), Some("cat-1"));
        assert_eq!(form.text_value("vendorId"), None);
        let images = form
            .parts()
            .iter()
            .filter(|p| matches!(p, FormPart::File { name, .. } if name == "images"))
            .count();
        assert_eq!(images, 2);
    }

    #[test]
    fn test_coupon_serialization() {
        let coupon = CouponRequest {
            code: "SAVE10".into(),
            discount_type: DiscountType::Percentage,
            discount_value: 10.0,
            min_order_amount: None,
            expiry_date: "2024-12-31".into(),
            usage_limit: Some(100),
            is_active: true,
        };
        assert_eq!(
            serde_json::to_value(&coupon).unwrap(),
            json!({
                "code": "SAVE10",
                "discountType": "percentage",
                "discountValue": 10.0,
                "expiryDate": "2024-12-31",
                "usageLimit": 100,
                "isActive": true
            })
        );
    }

    #[test]
    fn test_order_status_parse_and_serialize() {
        assert_eq!("Shipped".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
        assert_eq!("canceled".parse::<OrderStatus>().unwrap(), OrderStatus::Cancelled);
        assert!("lost".parse::<OrderStatus>().is_err());
        assert_eq!(
            serde_json::to_value(OrderStatusUpdate {
                status: OrderStatus::Delivered
            })
            .unwrap(),
            json!({"status": "delivered"})
        );
    }

    #[test]
    fn test_dashboard_period() {
        assert_eq!(DashboardPeriod::default().as_str(), "monthly");
        assert_eq!("week".parse::<DashboardPeriod>().unwrap(), DashboardPeriod::Weekly);
        assert!("decade".parse::<DashboardPeriod>().is_err());
    }

    #[test]
    fn test_carousel_form_skips_absent_fields() {
        let form = CarouselForm {
            title: Some("Sale".into()),
            is_active: Some(false),
            ..Default::default()
        }
        .into_form();
        assert_eq!(form.parts().len(), 2);
        assert_eq!(form.text_value("isActive"), Some("false"));
        assert!(!form.has_files());
    }
}
