//! Brew Calculator Status Tool
//!
//! Runtime status and usage instructions for the calculator service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Usage instructions for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# Brew Calculator Instructions

## Recipe Format

Every calculation tool takes a `recipe` object:

```json
{
  "name": "Pale Ale",
  "batch_size": 5.0,
  "boil_size": {"amount": 6.0, "unit": "gal"},
  "efficiency": 75,
  "fermentables": [
    {"name": "2-Row", "weight": {"amount": 10, "unit": "lb"}, "ppg": 1.036, "method": "Mash"}
  ],
  "hops": [
    {"name": "Cascade", "grams": 28, "aa": 5.5, "time": 60, "form": "Pellet"}
  ],
  "yeasts": [
    {"name": "US-05", "attenuation": 77, "quantity": {"amount": 11.5, "unit": "g"}}
  ],
  "items": [
    {"name": "Irish moss", "quantity": {"amount": 5, "unit": "g"}}
  ]
}
```

- `batch_size` is always US gallons.
- `boil_size` may be `l` or `gal`.
- Fermentable weights may be `kg` or `lb`.
- Hop weights are grams.
- Yeast and item quantities may be `g` or `ml`; any other unit is counted as-is.
- `efficiency` (0-100) only applies to fermentables whose method contains "Mash".

## Order of Calculation

1. `calculate_gravity` → OG and FG
2. `calculate_ibu` with that OG (omit `og` to compute it automatically)
3. `calculate_abv` with the OG and FG

`analyze_recipe` runs all three in order and is usually what you want.

## Defaults

- No yeasts, or a yeast without attenuation → 75% attenuation
- Hops without `aa` (or `aa: 0`) are ignored for bitterness
- No bittering hops → 0 IBU
"#;

/// Status information returned by the status tool
#[derive(Debug, Clone, Serialize)]
pub struct BrewStatus {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Tracks service start time for uptime reporting
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn get_status(&self) -> BrewStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        BrewStatus {
            name: build_info.name,
            version: build_info.version,
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_current_process() {
        let status = StatusTracker::new().get_status();
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.name, "brewcalc");
    }
}
