//! Endpoint catalog tests: routes, methods, body encodings, and the
//! missing-token short circuit across every authenticated function.

#[cfg(test)]
mod catalog_tests {
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
    use serde_json::json;

    use crate::api::catalog::{
        carousel, categories, coupons, customers, dashboard, notifications, orders, products,
        reviews, vendors,
    };
    use crate::api::envelope::ApiResponse;
    use crate::api::test_support::{anonymous_client, authed_client, MockTransport, BASE_URL};
    use crate::api::transport::{FileUpload, HttpMethod, RequestBody};
    use crate::api::types::{
        CarouselForm, CategoryForm, CouponRequest, DashboardPeriod, DiscountType,
        NotificationForm, OrderStatus, ProductForm, ReportQuery, SubCategoryRequest, VendorForm,
        VendorStatus,
    };
    use crate::session::Role;

    // ── Helpers ──────────────────────────────────────────────────────────

    fn image() -> FileUpload {
        FileUpload::new("photo.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF])
    }

    fn product() -> ProductForm {
        ProductForm {
            name: "Laptop".into(),
            description: "14 inch".into(),
            price: 999.99,
            stock: 3,
            category_id: "c-1".into(),
            images: vec![image()],
            ..Default::default()
        }
    }

    fn coupon() -> CouponRequest {
        CouponRequest {
            code: "WELCOME".into(),
            discount_type: DiscountType::Fixed,
            discount_value: 5.0,
            min_order_amount: Some(20.0),
            expiry_date: "2025-01-31".into(),
            usage_limit: None,
            is_active: true,
        }
    }

    fn url(path: &str) -> String {
        format!("{}{}", BASE_URL, path)
    }

    // ── Missing token ────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_every_endpoint_requires_a_token() {
        let (c, _) = anonymous_client(Role::Admin, MockTransport::new());
        let period = DashboardPeriod::Monthly;
        let report = ReportQuery {
            month: "2024-05".into(),
            vendor_id: None,
        };

        let results: Vec<ApiResponse> = vec![
            categories::list_categories(&c).await,
            categories::get_category(&c, "1").await,
            categories::create_main_category(&c, CategoryForm::default()).await,
            categories::create_sub_category(
                &c,
                &SubCategoryRequest {
                    name: "Phones".into(),
                    parent_id: "1".into(),
                },
            )
            .await,
            categories::update_category(&c, "1", CategoryForm::default()).await,
            categories::delete_category(&c, "1").await,
            products::list_products(&c).await,
            products::list_vendor_products(&c, "v").await,
            products::get_product(&c, "p").await,
            products::create_product(&c, product()).await,
            products::update_product(&c, "p", product()).await,
            products::delete_product(&c, "p").await,
            orders::list_orders(&c).await,
            orders::list_vendor_orders(&c, "v").await,
            orders::get_order(&c, "o").await,
            orders::update_order_status(&c, "o", OrderStatus::Shipped).await,
            coupons::list_coupons(&c).await,
            coupons::create_coupon(&c, &coupon()).await,
            coupons::update_coupon(&c, "k", &coupon()).await,
            coupons::delete_coupon(&c, "k").await,
            vendors::list_vendors(&c).await,
            vendors::get_vendor(&c, "v").await,
            vendors::create_vendor(&c, VendorForm::default()).await,
            vendors::update_vendor(&c, "v", VendorForm::default()).await,
            vendors::update_vendor_status(&c, "v", VendorStatus::Approved).await,
            vendors::delete_vendor(&c, "v").await,
            customers::list_customers(&c).await,
            customers::get_customer(&c, "u").await,
            notifications::list_notifications(&c).await,
            notifications::create_notification(&c, NotificationForm::default()).await,
            notifications::mark_notification_read(&c, "n").await,
            notifications::delete_notification(&c, "n").await,
            reviews::list_reviews(&c).await,
            reviews::list_product_reviews(&c, "p").await,
            reviews::reply_to_review(&c, "r", "Thanks!").await,
            reviews::delete_review(&c, "r").await,
            dashboard::dashboard_summary(&c, period).await,
            dashboard::sales_chart(&c, period).await,
            dashboard::monthly_report(&c, &report).await,
            dashboard::vendor_dashboard(&c, "v", period).await,
            carousel::list_carousel(&c).await,
            carousel::create_carousel(&c, CarouselForm::default()).await,
            carousel::update_carousel(&c, "b", CarouselForm::default()).await,
            carousel::delete_carousel(&c, "b").await,
        ];

        for resp in &results {
            assert_eq!(
                serde_json::to_value(resp).unwrap(),
                json!({"success": false, "error": "No token provided"})
            );
        }
        assert_eq!(c.transport().calls(), 0);
    }

    // ── Routes and encodings ─────────────────────────────────────────────

    #[tokio::test]
    async fn test_create_product_is_multipart_without_json_content_type() {
        let (c, _) = authed_client(
            Role::Vendor,
            MockTransport::new().respond(201, json!({"_id": "p-1"})),
        );

        let resp = products::create_product(&c, product()).await;

        assert_eq!(resp, ApiResponse::ok(json!({"_id": "p-1"}), 201));
        let request = c.transport().last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, url("/product/create"));
        assert!(request.headers.get(CONTENT_TYPE).is_none());
        assert_eq!(request.header("authorization"), Some("Bearer test-token"));
        match request.body {
            RequestBody::Multipart(form) => {
                assert_eq!(form.text_value("name"), Some("Laptop"));
                assert_eq!(form.text_value("price"), Some("999.99"));
                assert!(form.has_files());
            }
            other => panic!("expected multipart body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_json_endpoints_send_json() {
        let (c, _) = authed_client(Role::Admin, MockTransport::new());

        orders::update_order_status(&c, "o-1", OrderStatus::Delivered).await;
        let request = c.transport().last_request();
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.url, url("/order/update-status/o-1"));
        assert_eq!(request.headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(request.body, RequestBody::Json(json!({"status": "delivered"})));

        coupons::update_coupon(&c, "k-1", &coupon()).await;
        let request = c.transport().last_request();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.url, url("/coupon/update/k-1"));
        match request.body {
            RequestBody::Json(body) => {
                assert_eq!(body["code"], "WELCOME");
                assert_eq!(body["discountType"], "fixed");
                assert!(body.get("usageLimit").is_none());
            }
            other => panic!("expected JSON body, got {:?}", other),
        }

        vendors::update_vendor_status(&c, "v-1", VendorStatus::Blocked).await;
        assert_eq!(
            c.transport().last_request().body,
            RequestBody::Json(json!({"status": "blocked"}))
        );
    }

    #[tokio::test]
    async fn test_image_endpoints_are_multipart() {
        let (c, _) = authed_client(Role::Admin, MockTransport::new());
        let with_image = || CategoryForm {
            name: "Electronics".into(),
            image: Some(image()),
            ..Default::default()
        };

        categories::create_main_category(&c, with_image()).await;
        categories::update_category(&c, "1", with_image()).await;
        vendors::create_vendor(
            &c,
            VendorForm {
                logo: Some(image()),
                ..Default::default()
            },
        )
        .await;
        notifications::create_notification(
            &c,
            NotificationForm {
                title: "Sale".into(),
                message: "50% off".into(),
                ..Default::default()
            },
        )
        .await;
        carousel::create_carousel(
            &c,
            CarouselForm {
                image: Some(image()),
                ..Default::default()
            },
        )
        .await;

        let requests = c.transport().requests();
        assert_eq!(requests.len(), 5);
        for request in &requests {
            assert!(request.body.is_multipart(), "{} should be multipart", request.url);
            assert!(request.headers.get(CONTENT_TYPE).is_none());
            assert!(request.headers.get(AUTHORIZATION).is_some());
        }
        assert_eq!(requests[1].url, url("/category/update/1"));
        assert_eq!(requests[1].method, HttpMethod::Put);
    }

    #[tokio::test]
    async fn test_dashboard_filters_use_query_string() {
        let (c, _) = authed_client(Role::Admin, MockTransport::new());

        dashboard::dashboard_summary(&c, DashboardPeriod::Weekly).await;
        assert_eq!(
            c.transport().last_request().url,
            url("/dashboard/summary?period=weekly")
        );

        dashboard::monthly_report(
            &c,
            &ReportQuery {
                month: "2024-05".into(),
                vendor_id: Some("v 1".into()),
            },
        )
        .await;
        let request = c.transport().last_request();
        assert_eq!(request.url, url("/dashboard/report?month=2024-05&vendorId=v%201"));
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.body, RequestBody::Empty);

        dashboard::monthly_report(
            &c,
            &ReportQuery {
                month: "2024-06".into(),
                vendor_id: None,
            },
        )
        .await;
        assert_eq!(
            c.transport().last_request().url,
            url("/dashboard/report?month=2024-06")
        );
    }

    #[tokio::test]
    async fn test_path_ids_are_encoded() {
        let (c, _) = authed_client(Role::Admin, MockTransport::new());

        products::delete_product(&c, "a/b").await;

        let request = c.transport().last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.url, url("/product/delete/a%2Fb"));
    }

    #[tokio::test]
    async fn test_not_found_is_distinguishable() {
        let (c, _) = authed_client(
            Role::Vendor,
            MockTransport::new().respond(404, json!({"message": "No reviews found"})),
        );

        let resp = reviews::list_product_reviews(&c, "p-1").await;

        assert!(!resp.success);
        assert!(resp.is_not_found());
        assert_eq!(resp.error_message().as_deref(), Some("No reviews found"));
    }
}
