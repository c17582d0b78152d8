//! CLI command implementations

pub(crate) mod install;
pub(crate) mod migrate;
pub(crate) mod new;
pub(crate) mod rollback;
pub(crate) mod schema;
pub(crate) mod status;

use mig_core::Marker;

/// Marker as shown to the operator.
pub(crate) fn describe_marker(marker: Marker) -> String {
    match marker {
        Marker::Empty => "(none)".to_string(),
        Marker::Baseline => "0 (baseline)".to_string(),
        Marker::Applied(v) => v.to_string(),
    }
}
