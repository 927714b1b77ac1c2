//! Legacy `length,speed` configuration format
//!
//! The older `config.txt` files store one arm per line:
//!
//! ```text
//! 200,60
//! 120,-150
//! ```
//!
//! Length in pixels, speed in degrees per second. Reading stops at the
//! first line without a comma, so trailing free text is tolerated.

use crate::config::ArmSettings;
use crate::error::{SettingsError, SettingsResult};
use std::path::Path;

/// Parse legacy config content into arm definitions
pub fn parse(content: &str) -> SettingsResult<Vec<ArmSettings>> {
    let mut arms = Vec::new();

    for (line_number, line) in content.lines().enumerate() {
        let line = line.trim();
        let Some((length, speed)) = line.split_once(',') else {
            break;
        };

        let length: f64 = length.trim().parse().map_err(|_| invalid(line_number, "length"))?;
        let speed: f64 = speed.trim().parse().map_err(|_| invalid(line_number, "speed"))?;
        arms.push(ArmSettings::new(length, speed));
    }

    if arms.is_empty() {
        return Err(SettingsError::LoadError(
            "no arm definitions found".to_string(),
        ));
    }

    tracing::debug!(arms = arms.len(), "parsed legacy config");
    Ok(arms)
}

fn invalid(line_number: usize, field: &str) -> SettingsError {
    SettingsError::InvalidSetting {
        key: format!("line {}", line_number + 1),
        reason: format!("{} is not a number", field),
    }
}

/// Format arm definitions in the legacy line format
pub fn format(arms: &[ArmSettings]) -> String {
    let mut out = String::new();
    for arm in arms {
        out.push_str(&arm.length.to_string());
        out.push(',');
        out.push_str(&arm.speed_deg_per_sec.to_string());
        out.push('\n');
    }
    out
}

/// Load arm definitions from a legacy config file
pub fn load_from_file(path: &Path) -> SettingsResult<Vec<ArmSettings>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;
    parse(&content)
}

/// Save arm definitions to a legacy config file
pub fn save_to_file(path: &Path, arms: &[ArmSettings]) -> SettingsResult<()> {
    std::fs::write(path, format(arms))
        .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_basic() {
        let arms = parse("200,60\n120,-150\n").unwrap();
        assert_eq!(arms.len(), 2);
        assert_eq!(arms[0], ArmSettings::new(200.0, 60.0));
        assert_eq!(arms[1], ArmSettings::new(120.0, -150.0));
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let arms = parse("  200 , 60 \n").unwrap();
        assert_eq!(arms[0], ArmSettings::new(200.0, 60.0));
    }

    #[test]
    fn test_parse_stops_at_first_non_arm_line() {
        let arms = parse("100,30\nsaved by spirokit\n200,45\n").unwrap();
        assert_eq!(arms.len(), 1);
    }

    #[test]
    fn test_parse_rejects_garbage_fields() {
        let err = parse("abc,30\n").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidSetting { .. }));

        let err = parse("100,fast\n").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidSetting { .. }));
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(parse(""), Err(SettingsError::LoadError(_))));
        assert!(matches!(
            parse("no commas here"),
            Err(SettingsError::LoadError(_))
        ));
    }

    #[test]
    fn test_format_round_trip() {
        let arms = vec![ArmSettings::new(200.0, 60.0), ArmSettings::new(85.5, -12.25)];
        let text = format(&arms);
        assert_eq!(parse(&text).unwrap(), arms);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.txt");

        let arms = vec![ArmSettings::new(150.0, 90.0)];
        save_to_file(&path, &arms).unwrap();
        assert_eq!(load_from_file(&path).unwrap(), arms);
    }
}
