use axum::Json;
use serde::{Deserialize, Serialize};
use timetable_core::time_slot::{self, TimeSlot};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct SlotSetRequest {
    #[validate(length(min = 1, max = 18))]
    pub time_slots: Vec<TimeSlot>,
}

#[derive(Debug, Serialize)]
pub struct SlotSetResponse {
    /// The slots in display order.
    pub time_slots: Vec<TimeSlot>,
    /// `order` values after which the numbering skips.
    pub gaps_after: Vec<i32>,
}

/// POST /api/v1/time-slots/validate
pub async fn validate(
    AppJson(body): AppJson<SlotSetRequest>,
) -> AppResult<Json<DataResponse<SlotSetResponse>>> {
    body.validate()?;
    time_slot::validate_slot_set(&body.time_slots)?;

    let mut time_slots = body.time_slots;
    time_slot::sort_by_order(&mut time_slots);
    let gaps_after = time_slots
        .windows(2)
        .filter(|pair| !time_slot::are_adjacent(&pair[0], &pair[1]))
        .map(|pair| pair[0].order)
        .collect();

    Ok(Json(DataResponse {
        data: SlotSetResponse {
            time_slots,
            gaps_after,
        },
    }))
}
