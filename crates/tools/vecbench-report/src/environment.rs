//! Host description attached to reports.
//!
//! Discovery lives in the calling tool; this crate only renders what it is
//! handed.

use serde::{Deserialize, Serialize};

/// CPU details of the benchmark host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuInfo {
    /// Marketing name, e.g. `AMD Ryzen 9 7950X 16-Core Processor`.
    pub brand: String,
    /// Architecture, e.g. `x86_64`.
    pub arch: String,
    /// Logical core count.
    pub cores: usize,
    /// Nominal frequency in MHz, `0` when unknown.
    pub frequency_mhz: u32,
}

/// Environment a benchmark run was produced on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Operating system name.
    pub os: String,
    /// Compiler identifier and version.
    pub compiler: String,
    /// CPU details.
    pub cpu: CpuInfo,
}

impl Environment {
    /// One-line CPU description.
    pub fn cpu_line(&self) -> String {
        let mut line = format!("{} ({}, {} cores", self.cpu.brand, self.cpu.arch, self.cpu.cores);
        if self.cpu.frequency_mhz > 0 {
            line.push_str(&format!(", {} MHz", self.cpu.frequency_mhz));
        }
        line.push(')');
        line
    }

    /// Short caption used under chart titles.
    pub fn caption(&self) -> String {
        format!("{} | {} | {}", self.os, self.compiler, self.cpu_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(frequency_mhz: u32) -> Environment {
        Environment {
            os: "linux".into(),
            compiler: "g++ (GCC) 13.2.0".into(),
            cpu: CpuInfo {
                brand: "Test CPU".into(),
                arch: "x86_64".into(),
                cores: 8,
                frequency_mhz,
            },
        }
    }

    #[test]
    fn cpu_line_includes_known_frequency() {
        assert_eq!(env(3600).cpu_line(), "Test CPU (x86_64, 8 cores, 3600 MHz)");
        assert_eq!(env(0).cpu_line(), "Test CPU (x86_64, 8 cores)");
    }

    #[test]
    fn caption_joins_fields() {
        assert_eq!(
            env(0).caption(),
            "linux | g++ (GCC) 13.2.0 | Test CPU (x86_64, 8 cores)"
        );
    }
}
