//! Setting value validation.

use print_normalizer::options::{MAX_DPI, MIN_DPI};
use print_normalizer::{ContentFit, ResampleFilter};

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "SERVER_PORT" => {
            let v: u16 = value.parse().map_err(|_| "must be a port number")?;
            if v == 0 {
                return Err("must be between 1 and 65535".into());
            }
        }
        "PRINT_MARGIN_MM" => {
            let v: f64 = value.parse().map_err(|_| "must be a number")?;
            if !(0.0..=50.0).contains(&v) {
                return Err("must be between 0 and 50 millimeters".into());
            }
        }
        "PRINT_TARGET_DPI" => validate_int_range(value, i64::from(MIN_DPI), i64::from(MAX_DPI))?,
        "PRINT_FILTER" => {
            value
                .parse::<ResampleFilter>()
                .map_err(|_| "must be one of lanczos3, catmullrom, gaussian, triangle, nearest")?;
        }
        "PRINT_CONTENT_FIT" => {
            value
                .parse::<ContentFit>()
                .map_err(|_| "must be 'letterbox' or 'stretch'")?;
        }
        "MAX_UPLOAD_MB" => validate_int_range(value, 1, 100)?,
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if !(min..=max).contains(&v) {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
