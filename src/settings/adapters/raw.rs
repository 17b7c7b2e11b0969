//! Normalisation of the raw settings row.

use serde_json::Value;
use tracing::warn;

use crate::row;
use crate::settings::domain::{DEFAULT_ALERT_WINDOW_DAYS, OfficeSettings};

const ALERT_WINDOW: &[&str] = &["alert_window_days", "janela_alerta_dias", "dias_alerta"];
const HIGH_TERMS: &[&str] = &["high_risk_terms", "termos_risco_alto"];
const MEDIUM_TERMS: &[&str] = &["medium_risk_terms", "termos_risco_medio"];
const TEMPLATE: &[&str] = &["minuta_template", "template_minuta", "modelo_minuta"];

/// Maps a raw settings row into [`OfficeSettings`].
///
/// Absent fields take their defaults. An alert window that does not fit a
/// `u32` is logged and replaced by the default.
#[must_use]
pub fn settings_from_row(record: &Value) -> OfficeSettings {
    let defaults = OfficeSettings::default();
    let alert_window_days = row::count(record, ALERT_WINDOW).map_or(
        DEFAULT_ALERT_WINDOW_DAYS,
        |days| {
            u32::try_from(days).unwrap_or_else(|_| {
                warn!(days, "alert window out of range, using default");
                DEFAULT_ALERT_WINDOW_DAYS
            })
        },
    );

    OfficeSettings {
        alert_window_days,
        high_risk_terms: row::text(record, HIGH_TERMS).unwrap_or(defaults.high_risk_terms),
        medium_risk_terms: row::text(record, MEDIUM_TERMS).unwrap_or(defaults.medium_risk_terms),
        minuta_template: row::text(record, TEMPLATE).unwrap_or(defaults.minuta_template),
    }
}
