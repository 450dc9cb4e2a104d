//! Host CPU and OS discovery.

use std::num::NonZeroUsize;

use vecbench_report::{CpuInfo, Environment};

const UNKNOWN: &str = "Unknown";

/// Describe the current host, reporting `compiler` as its toolchain.
pub fn detect(compiler: String) -> Environment {
    Environment {
        os: std::env::consts::OS.to_string(),
        compiler,
        cpu: cpu_info(),
    }
}

fn cpu_info() -> CpuInfo {
    let (brand, frequency_mhz) = std::fs::read_to_string("/proc/cpuinfo")
        .map(|text| parse_cpuinfo(&text))
        .unwrap_or_else(|_| (UNKNOWN.to_string(), 0));

    CpuInfo {
        brand,
        arch: std::env::consts::ARCH.to_string(),
        cores: std::thread::available_parallelism().map_or(1, NonZeroUsize::get),
        frequency_mhz,
    }
}

/// Extract the model name and clock of the first processor entry.
fn parse_cpuinfo(text: &str) -> (String, u32) {
    let field = |key: &str| {
        text.lines().find_map(|line| {
            let (k, v) = line.split_once(':')?;
            (k.trim() == key).then(|| v.trim().to_string())
        })
    };

    let brand = field("model name").unwrap_or_else(|| UNKNOWN.to_string());
    let mhz = field("cpu MHz")
        .and_then(|v| v.parse::<f64>().ok())
        .and_then(mhz_to_u32)
        .unwrap_or(0);
    (brand, mhz)
}

/// Round a clock reading to whole MHz, rejecting values outside `u32`.
fn mhz_to_u32(mhz: f64) -> Option<u32> {
    let rounded = mhz.round();
    if !rounded.is_finite() || rounded < 0.0 || rounded > f64::from(u32::MAX) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(rounded as u32)
}
