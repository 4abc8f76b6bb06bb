use std::path::PathBuf;

use serde_json::Value;

//tilde expansion (no canonicalization as the file may not exist)
pub fn expand_tilde(s: &str) -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) if (s == "~" || s.starts_with("~/")) => PathBuf::from(s.replacen('~', &home, 1)),
        _ => PathBuf::from(s),
    }
}

fn integral_f64_to_u64(f: f64) -> Option<u64> {
    if (f.is_finite() && f >= 0. && f.fract() == 0. && f <= u64::MAX as f64) {
        Some(f as u64)
    } else {
        None
    }
}

//Coerces a number-like JSON value to a listener count.
//
//Accepts non-negative integers, integral floats such as `3.0`, and strings holding one of those.
//Negative, fractional, empty and non-numeric values are rejected.
pub fn coerce_listener_count(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(integral_f64_to_u64)),
        Value::String(s) => {
            let s = s.trim();
            if (s.is_empty()) {
                return None;
            }
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral_f64_to_u64))
        }
        _ => None,
    }
}
