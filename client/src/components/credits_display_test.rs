use super::*;

#[test]
fn progress_percent_scales_to_max() {
    assert_eq!(progress_percent(5), 100);
    assert_eq!(progress_percent(3), 60);
    assert_eq!(progress_percent(0), 0);
}

#[test]
fn progress_percent_clamps_above_max() {
    assert_eq!(progress_percent(12), 100);
}

#[test]
fn credits_message_warns_when_low() {
    assert_eq!(credits_message(1), "Warning: You're running low on credits!");
    assert_eq!(credits_message(0), "Warning: You're running low on credits!");
}

#[test]
fn credits_message_reports_remaining() {
    assert_eq!(credits_message(4), "You have 4 out of 5 credits remaining");
}
