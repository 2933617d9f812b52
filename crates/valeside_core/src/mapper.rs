//! Converts Vale's line/column alerts into absolute buffer regions.

use crate::ValeError;
use crate::alert::{Alert, AlertMap, MappedAlert};
use crate::region::Region;
use crate::template::Templates;
use crate::view::View;

/// Computes the buffer region flagged by `alert`.
///
/// Alert lines are relative to the analyzed text, which starts on row
/// `row_offset` of the buffer. The start column is 1-based and the end column
/// is inclusive, so only the start is decremented.
pub fn map_region(view: &dyn View, alert: &Alert, row_offset: usize) -> Region {
    let row = alert.line.saturating_sub(1).saturating_add(row_offset);
    let line_start = view.text_point(row, 0);
    Region::new(
        line_start.saturating_add(alert.span[0].saturating_sub(1)),
        line_start.saturating_add(alert.span[1]),
    )
}

/// Maps and renders every alert in `alerts`, in file then report order.
///
/// Alerts that land on the same region are all kept.
pub fn map_alerts(
    view: &dyn View,
    alerts: &AlertMap,
    row_offset: usize,
    templates: &Templates,
) -> Result<Vec<MappedAlert>, ValeError> {
    alerts
        .values()
        .flatten()
        .map(|alert| {
            Ok(MappedAlert {
                region: map_region(view, alert, row_offset),
                html: templates.render(alert)?,
                view: view.id(),
                alert: alert.clone(),
            })
        })
        .collect()
}
