#[cfg(test)]
mod tests {
    use hotel_dashboard::components::hotel_selector::parse_selection;
    use hotel_dashboard::hooks::FetchState;
    use hotel_dashboard::models::{
        error::AppError,
        hotel::{DashboardSummary, HotelDetail, PmsType, TrendsResponse, Validate},
        kpi::{Trend, dashboard_kpis, detail_primary_kpis, detail_secondary_kpis, property_metrics},
    };
    use hotel_dashboard::pages::{dashboard::chart_subtitle, hotel_detail::detail_error_message};
    use hotel_dashboard::services::api::ApiConfig;
    use hotel_dashboard::utils::format::format_currency;
    use std::rc::Rc;

    const SUMMARY_JSON: &str = r#"{
        "hotels": [
            {
                "hotel_id": "grand_budapest",
                "hotel_name": "The Grand Budapest",
                "total_revenue": 1234567.89,
                "adr": 189.5,
                "revpar": 152.3,
                "occupancy_rate": 0.82,
                "cancellation_rate": 0.18,
                "total_bookings": 6512
            },
            {
                "hotel_id": "seaside_resort",
                "hotel_name": "Seaside Resort",
                "total_revenue": 987654.0,
                "adr": 245.0,
                "revpar": 210.7,
                "occupancy_rate": 0.86,
                "cancellation_rate": 0.12,
                "total_bookings": 4021
            },
            {
                "hotel_id": "city_budget_inn",
                "hotel_name": "City Budget Inn",
                "total_revenue": 312000,
                "adr": 79.9,
                "revpar": 60.1,
                "occupancy_rate": 0.75,
                "cancellation_rate": 0.24,
                "total_bookings": 3950
            }
        ],
        "total_revenue": 2534221.89,
        "avg_adr": 171.47,
        "avg_occupancy_rate": 0.81,
        "avg_cancellation_rate": 0.18
    }"#;

    const DETAIL_JSON: &str = r#"{
        "hotel_id": "grand_budapest",
        "hotel_name": "The Grand Budapest",
        "pms_type": "legacy",
        "total_rooms": 200,
        "total_revenue": 1234567.89,
        "adr": 189.5,
        "revpar": 152.3,
        "occupancy_rate": 0.82,
        "cancellation_rate": 0.18,
        "total_bookings": 6512,
        "trends": [
            { "date": "2025-03-01", "revenue": 41250.0, "bookings": 220 },
            { "date": "2025-03-02", "revenue": 39870.5, "bookings": 213 }
        ]
    }"#;

    fn summary() -> DashboardSummary {
        serde_json::from_str(SUMMARY_JSON).unwrap()
    }

    fn detail() -> HotelDetail {
        serde_json::from_str(DETAIL_JSON).unwrap()
    }

    /// Reads a compact currency string such as "$1.2M" back into a number
    fn parse_compact_currency(s: &str) -> f64 {
        let s = s.trim_start_matches('$');
        let (number, multiplier) = match s.chars().last() {
            Some('K') => (&s[..s.len() - 1], 1e3),
            Some('M') => (&s[..s.len() - 1], 1e6),
            Some('B') => (&s[..s.len() - 1], 1e9),
            Some('T') => (&s[..s.len() - 1], 1e12),
            _ => (s, 1.0),
        };
        number.parse::<f64>().unwrap() * multiplier
    }

    // ===== Data Contract Tests =====

    #[test]
    fn test_summary_deserialization() {
        let summary = summary();
        assert_eq!(summary.hotels.len(), 3);
        assert_eq!(summary.hotels[2].total_revenue, 312000.0);
        assert_eq!(
            summary.hotel_name("seaside_resort"),
            Some("Seaside Resort")
        );
        assert!(summary.validate().is_ok());
    }

    #[test]
    fn test_trends_for_all_hotels_has_no_scope() {
        let json = r#"{
            "hotel_id": null,
            "trends": [{ "date": "2025-03-01", "revenue": 98000.0, "bookings": 512 }]
        }"#;

        let trends: TrendsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(trends.hotel_id, None);
        assert_eq!(trends.trends[0].bookings, 512);
        assert_eq!(trends.trends[0].date.to_string(), "2025-03-01");
    }

    #[test]
    fn test_detail_deserialization_flattens_summary_fields() {
        let detail = detail();
        assert_eq!(detail.hotel_id(), "grand_budapest");
        assert_eq!(detail.pms_type, PmsType::Legacy);
        assert_eq!(detail.total_rooms, 200);
        assert_eq!(detail.summary.total_bookings, 6512);
        assert_eq!(detail.trends.len(), 2);
        assert!(detail.validate().is_ok());
    }

    #[test]
    fn test_detail_with_unknown_pms_type() {
        let json = DETAIL_JSON.replace("\"legacy\"", "\"opera_cloud\"");
        let detail: HotelDetail = serde_json::from_str(&json).unwrap();

        assert_eq!(detail.pms_type, PmsType::Other("opera_cloud".to_string()));
        assert_eq!(detail.pms_type.css_class(), "badge-gray");
        assert_eq!(detail.pms_type.badge_label(), "OPERA_CLOUD PMS");
    }

    #[test]
    fn test_detail_matches_its_summary_entry() {
        let summary = summary();
        let detail = detail();

        let entry = summary.find(detail.hotel_id()).unwrap();
        assert_eq!(entry.hotel_id, detail.summary.hotel_id);
        assert_eq!(entry.hotel_name, detail.summary.hotel_name);
    }

    #[test]
    fn test_malformed_body_fails_to_decode() {
        let json = r#"{ "hotels": "not a list" }"#;
        assert!(serde_json::from_str::<DashboardSummary>(json).is_err());
    }

    #[test]
    fn test_validation_rejects_blank_hotel_id() {
        let json = DETAIL_JSON.replace("\"grand_budapest\"", "\"\"");
        let detail: HotelDetail = serde_json::from_str(&json).unwrap();
        assert!(matches!(detail.validate(), Err(AppError::Decode(_))));
    }

    #[test]
    fn test_validation_tolerates_rates_above_one() {
        let json = DETAIL_JSON.replace("0.82", "1.25");
        let detail: HotelDetail = serde_json::from_str(&json).unwrap();
        assert!(detail.validate().is_ok());

        let occupancy = &detail_primary_kpis(&detail)[3];
        assert_eq!(occupancy.value, "125.0%");
    }

    // ===== Dashboard Scenario Tests =====

    #[test]
    fn test_dashboard_kpis_for_three_hotels() {
        let summary = summary();
        let kpis = dashboard_kpis(&summary);

        assert_eq!(summary.hotels.len(), 3);
        let occupancy = kpis
            .iter()
            .find(|k| k.title == "Avg. Occupancy Rate")
            .unwrap();
        assert_eq!(occupancy.value, "81.0%");

        let revenue = kpis.iter().find(|k| k.title == "Total Revenue").unwrap();
        assert_eq!(revenue.value, "$2.5M");

        let cancellations = kpis
            .iter()
            .find(|k| k.title == "Avg. Cancellation Rate")
            .unwrap();
        assert_eq!(cancellations.trend, Some(Trend::Positive));
    }

    #[test]
    fn test_property_metrics() {
        let summary = summary();
        let metrics = property_metrics(&summary.hotels[0]);

        assert_eq!(metrics[0], ("Revenue", "$1.2M".to_string()));
        assert_eq!(metrics[1], ("ADR", "$189.5".to_string()));
        assert_eq!(metrics[2], ("Occupancy", "82.0%".to_string()));
        assert_eq!(metrics[3], ("Bookings", "6,512".to_string()));
    }

    #[test]
    fn test_chart_subtitle_names_scoped_hotel() {
        let summary = summary();
        let scoped = TrendsResponse {
            hotel_id: Some("city_budget_inn".to_string()),
            trends: vec![],
        };
        let all = TrendsResponse {
            hotel_id: None,
            trends: vec![],
        };

        assert_eq!(
            chart_subtitle(&summary, &scoped, 30),
            "Daily revenue — last 30 days (City Budget Inn)"
        );
        assert_eq!(
            chart_subtitle(&summary, &all, 30),
            "Daily revenue — last 30 days"
        );
    }

    #[test]
    fn test_selector_choice_drives_trend_scope() {
        let config = ApiConfig::builder().build();

        let all = parse_selection("all");
        let url = config.trends_url(all.as_deref(), 30).unwrap();
        assert!(url.query_pairs().all(|(k, _)| k != "hotel_id"));

        let one = parse_selection("seaside_resort");
        let url = config.trends_url(one.as_deref(), 30).unwrap();
        assert!(
            url.query_pairs()
                .any(|(k, v)| k == "hotel_id" && v == "seaside_resort")
        );
    }

    // ===== Hotel Detail Tests =====

    #[test]
    fn test_detail_kpis() {
        let detail = detail();
        let primary = detail_primary_kpis(&detail);
        let secondary = detail_secondary_kpis(&detail);

        assert_eq!(primary.len(), 4);
        assert_eq!(primary[2].subtitle.as_deref(), Some("Revenue per available room"));
        assert_eq!(primary[3].subtitle.as_deref(), Some("200 total rooms"));
        assert_eq!(primary[3].trend, Some(Trend::Positive));

        assert_eq!(secondary[0].value, "6,512");
        assert_eq!(secondary[1].value, "18.0%");
        assert_eq!(secondary[2].value, "Legacy");
    }

    #[test]
    fn test_detail_not_found_renders_error_message() {
        let err = AppError::Http {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        let state: FetchState<HotelDetail> = Err(err).into();

        assert!(state.data().is_none());
        assert_eq!(
            state.error().map(detail_error_message).as_deref(),
            Some("Hotel not found")
        );
    }

    // ===== FetchState Tests =====

    #[test]
    fn test_fetch_state_from_result() {
        let loaded: FetchState<DashboardSummary> = Ok(summary()).into();
        assert_eq!(loaded.data().map(|s| s.hotels.len()), Some(3));
        assert!(!loaded.is_loading());

        let failed: FetchState<DashboardSummary> = Err(AppError::Http {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        })
        .into();
        assert!(failed.data().is_none());
        assert_eq!(
            failed.error().map(ToString::to_string).as_deref(),
            Some("API error: 503 Service Unavailable")
        );
    }

    #[test]
    fn test_fetch_state_equality() {
        assert_eq!(
            FetchState::<DashboardSummary>::Loading,
            FetchState::<DashboardSummary>::Loading
        );
        assert_eq!(
            FetchState::Loaded(Rc::new(summary())),
            FetchState::Loaded(Rc::new(summary()))
        );
    }

    // ===== Formatting Tests =====

    #[test]
    fn test_currency_format_is_stable_when_read_back() {
        for value in [0.0, 42.0, 189.5, 1_250.0, 45_678.0, 999_950.0, 2_534_221.89, 3.2e9] {
            let formatted = format_currency(value);
            let reread = parse_compact_currency(&formatted);
            assert_eq!(format_currency(reread), formatted, "value {value}");
        }
    }

    #[test]
    fn test_app_error_display() {
        assert_eq!(
            AppError::Decode("missing field `hotels`".to_string()).to_string(),
            "Invalid response: missing field `hotels`"
        );
        assert_eq!(
            AppError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
    }
}
