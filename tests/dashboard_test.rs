//! End-to-end rendering with the built-in sample dataset

use seace_dashboard::fetch::FetchController;
use seace_dashboard::models::UrgencyLevel;
use seace_dashboard::provider::SampleProvider;
use seace_dashboard::ui::{render_state, RenderOptions};
use seace_dashboard::urgency::{build_views, UrgencyThresholds};

#[tokio::test]
async fn test_sample_dashboard_renders_three_bands() {
    let controller = FetchController::new(SampleProvider::new());
    controller.refresh().await;

    let state = controller.state();
    let result = state.result().unwrap();
    let views = build_views(&result.items, &UrgencyThresholds::default());

    let summary: Vec<(UrgencyLevel, &str)> = views
        .iter()
        .map(|v| (v.urgency, v.remaining_text.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (UrgencyLevel::Critical, "18 horas"),
            (UrgencyLevel::Warning, "2 días 0h"),
            (UrgencyLevel::Normal, "4 días 0h"),
        ]
    );

    let text = render_state(
        &state,
        &RenderOptions {
            thresholds: UrgencyThresholds::default(),
            timestamp_format: "%d/%m/%Y, %H:%M:%S".to_string(),
            color: false,
            interactive: false,
        },
    );
    assert!(text.contains("3 contrataciones encontradas"));
    assert!(text.contains("CM-117-2025-CPMP"));
}

#[tokio::test]
async fn test_custom_thresholds_change_bands_not_text() {
    let controller = FetchController::new(SampleProvider::new());
    controller.refresh().await;

    let state = controller.state();
    let result = state.result().unwrap();
    let thresholds = UrgencyThresholds {
        critical_hours_below: 50.0,
        warning_hours_below: 100.0,
    };
    let views = build_views(&result.items, &thresholds);

    assert_eq!(views[1].urgency, UrgencyLevel::Critical);
    assert_eq!(views[1].remaining_text, "2 días 0h");
    assert_eq!(views[2].urgency, UrgencyLevel::Warning);
}
