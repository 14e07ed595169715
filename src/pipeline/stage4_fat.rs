/// Decimal places kept on the internal body-fat percentage.
pub const FAT_PERCENT_DECIMALS: i32 = 4;

/// Siri: `%BF = 495 / density - 450`.
pub fn fat_from_density(density: f64) -> Option<f64> {
    if !density.is_finite() || density <= 0.0 {
        return None;
    }
    let fat = 495.0 / density - 450.0;
    fat.is_finite().then_some(fat)
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_fat.rs"]
mod tests;
