//! Shared color constants for the UI.

use catalog_business::Sex;
use egui::Color32;

/// Link blue, used for male owners.
pub const COLOR_LINK: Color32 = Color32::from_rgb(72, 95, 199);

/// Danger red, used for female owners.
pub const COLOR_DANGER: Color32 = Color32::from_rgb(241, 70, 104);

/// Success green for the "All categories" button while it is active.
pub const COLOR_SUCCESS: Color32 = Color32::from_rgb(72, 199, 142);

/// Text color of an owner name in the product table.
#[inline]
pub fn owner_color(sex: Sex) -> Color32 {
    match sex {
        Sex::Male => COLOR_LINK,
        Sex::Female => COLOR_DANGER,
    }
}
