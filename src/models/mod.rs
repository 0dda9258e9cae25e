use crate::error::ApiError;

pub mod audience;
pub mod broadcast_url;
pub mod event;
pub mod event_item;
pub mod event_part_option;
pub mod item;
pub mod item_broadcast_url;
pub mod participant;
pub mod participation_option;
pub mod participation_status;
pub mod platform;

/// Create-time required field check shared by all payloads.
pub(crate) fn ensure_required(missing: Vec<&'static str>) -> Result<(), ApiError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::bad_request(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}
