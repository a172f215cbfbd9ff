use super::*;

#[test]
fn recent_activity_line_formats_count() {
    assert_eq!(recent_activity_line(0), "0 new records this week");
    assert_eq!(recent_activity_line(3), "3 new records this week");
}

#[test]
fn average_area_line_formats_square_meters() {
    assert_eq!(average_area_line(250), "250 m² average property size");
}

#[test]
fn property_count_line_pluralizes() {
    assert_eq!(property_count_line(0), "0 Properties");
    assert_eq!(property_count_line(1), "1 Property");
    assert_eq!(property_count_line(3), "3 Properties");
}

#[test]
fn tiles_agree_with_the_pipeline_on_empty_portfolios() {
    assert_eq!(record_stats(&[]), RecordStats::default());
    assert_eq!(portfolio_stats(&[], None), PortfolioStats::default());
}
