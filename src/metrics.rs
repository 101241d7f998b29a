//! Derived nutrition metrics. Pure functions; aggregates are always computed
//! on read, never stored.

/// 4 kcal per gram of protein and carbs, 9 per gram of fat. No clamping;
/// negative inputs propagate.
pub fn calories(protein_g: f64, carb_g: f64, fat_g: f64) -> f64 {
    protein_g * 4.0 + carb_g * 4.0 + fat_g * 9.0
}

/// Mean over only the records where the field was actually logged. `None`
/// when no record has it. Used for fields that are sometimes simply not
/// measured (sleep).
pub fn mean_present<T, F>(records: &[T], select: F) -> Option<f64>
where
    F: Fn(&T) -> Option<f64>,
{
    let values: Vec<f64> = records.iter().filter_map(&select).collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean over every day in the window, treating an absent value as zero —
/// including days with no record at all, which is why the denominator is the
/// window length rather than the record count. `None` when the window has no
/// records. Used for cumulative fields where "not logged" means zero
/// (calories, protein, steps).
pub fn mean_zero_filled<T, F>(records: &[T], window_days: usize, select: F) -> Option<f64>
where
    F: Fn(&T) -> Option<f64>,
{
    if records.is_empty() || window_days == 0 {
        return None;
    }
    let sum: f64 = records.iter().map(|r| select(r).unwrap_or(0.0)).sum();
    Some(sum / window_days as f64)
}
