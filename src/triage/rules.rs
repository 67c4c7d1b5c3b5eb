use super::Severity;
use crate::vitals::VitalsInput;

/// Outcome of one category check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub severity: Severity,
    pub finding: Option<&'static str>,
}

impl Assessment {
    const NORMAL: Assessment = Assessment { severity: Severity::Ok, finding: None };

    fn flag(severity: Severity, finding: &'static str) -> Self {
        Assessment { severity, finding: Some(finding) }
    }
}

/// Vital sign groups checked independently of each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    HeartRate,
    BloodPressure,
    Temperature,
    OxygenSaturation,
}

impl Category {
    /// Evaluation order, which is also the order findings are reported in.
    pub const ALL: [Category; 4] = [
        Category::HeartRate,
        Category::BloodPressure,
        Category::Temperature,
        Category::OxygenSaturation,
    ];

    /// Bands are checked top-down and the first match wins, so each category
    /// yields at most one finding.
    pub fn assess(&self, vitals: &VitalsInput) -> Assessment {
        match self {
            Category::HeartRate => heart_rate(vitals.heart_rate),
            Category::BloodPressure => blood_pressure(vitals.systolic, vitals.diastolic),
            Category::Temperature => temperature(vitals.temperature_c),
            Category::OxygenSaturation => oxygen_saturation(vitals.spo2),
        }
    }
}

fn heart_rate(hr: f64) -> Assessment {
    if hr < 50.0 {
        Assessment::flag(Severity::Warn, "Low heart rate (possible bradycardia).")
    } else if hr > 120.0 {
        Assessment::flag(Severity::Critical, "Very high heart rate (possible tachycardia).")
    } else if hr > 100.0 {
        Assessment::flag(Severity::Warn, "Elevated heart rate.")
    } else {
        Assessment::NORMAL
    }
}

// The bands overlap on purpose: a high systolic with a low diastolic is
// reported as elevated, never as low.
fn blood_pressure(systolic: f64, diastolic: f64) -> Assessment {
    if systolic >= 180.0 || diastolic >= 120.0 {
        Assessment::flag(Severity::Critical, "Hypertensive crisis range blood pressure.")
    } else if systolic >= 130.0 || diastolic >= 80.0 {
        Assessment::flag(Severity::Warn, "Elevated blood pressure.")
    } else if systolic < 90.0 || diastolic < 60.0 {
        Assessment::flag(Severity::Warn, "Low blood pressure.")
    } else {
        Assessment::NORMAL
    }
}

fn temperature(temp_c: f64) -> Assessment {
    if temp_c < 35.0 {
        Assessment::flag(Severity::Critical, "Low temperature (possible hypothermia).")
    } else if temp_c >= 39.5 {
        Assessment::flag(Severity::Critical, "High fever.")
    } else if temp_c >= 38.0 {
        Assessment::flag(Severity::Warn, "Fever.")
    } else {
        Assessment::NORMAL
    }
}

fn oxygen_saturation(spo2: f64) -> Assessment {
    if spo2 < 90.0 {
        Assessment::flag(Severity::Critical, "Critically low oxygen saturation.")
    } else if spo2 < 95.0 {
        Assessment::flag(Severity::Warn, "Low oxygen saturation.")
    } else {
        Assessment::NORMAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn severity_of(a: Assessment) -> Severity {
        a.severity
    }

    #[test]
    fn test_heart_rate_bands() {
        assert_eq!(heart_rate(49.9), Assessment::flag(Severity::Warn, "Low heart rate (possible bradycardia)."));
        assert_eq!(heart_rate(50.0), Assessment::NORMAL);
        assert_eq!(heart_rate(100.0), Assessment::NORMAL);
        assert_eq!(heart_rate(101.0), Assessment::flag(Severity::Warn, "Elevated heart rate."));
        assert_eq!(heart_rate(120.0), Assessment::flag(Severity::Warn, "Elevated heart rate."));
        assert_eq!(
            heart_rate(121.0),
            Assessment::flag(Severity::Critical, "Very high heart rate (possible tachycardia).")
        );
    }

    #[test]
    fn test_blood_pressure_bands() {
        assert_eq!(severity_of(blood_pressure(180.0, 70.0)), Severity::Critical);
        assert_eq!(severity_of(blood_pressure(120.0, 120.0)), Severity::Critical);
        assert_eq!(blood_pressure(179.0, 119.0).finding, Some("Elevated blood pressure."));
        assert_eq!(blood_pressure(130.0, 70.0).finding, Some("Elevated blood pressure."));
        assert_eq!(blood_pressure(120.0, 80.0).finding, Some("Elevated blood pressure."));
        assert_eq!(blood_pressure(129.0, 79.0), Assessment::NORMAL);
        assert_eq!(blood_pressure(89.0, 70.0).finding, Some("Low blood pressure."));
        assert_eq!(blood_pressure(100.0, 59.0).finding, Some("Low blood pressure."));
        assert_eq!(blood_pressure(90.0, 60.0), Assessment::NORMAL);
    }

    #[test]
    fn test_elevated_band_shadows_low_band() {
        // systolic is low but diastolic is elevated
        assert_eq!(blood_pressure(85.0, 85.0).finding, Some("Elevated blood pressure."));
        assert_eq!(blood_pressure(140.0, 50.0).finding, Some("Elevated blood pressure."));
    }

    #[test]
    fn test_temperature_bands() {
        assert_eq!(temperature(35.0), Assessment::NORMAL);
        assert_eq!(
            temperature(34.99),
            Assessment::flag(Severity::Critical, "Low temperature (possible hypothermia).")
        );
        assert_eq!(temperature(37.99), Assessment::NORMAL);
        assert_eq!(temperature(38.0), Assessment::flag(Severity::Warn, "Fever."));
        assert_eq!(temperature(39.49), Assessment::flag(Severity::Warn, "Fever."));
        assert_eq!(temperature(39.5), Assessment::flag(Severity::Critical, "High fever."));
    }

    #[test]
    fn test_oxygen_saturation_bands() {
        assert_eq!(oxygen_saturation(95.0), Assessment::NORMAL);
        assert_eq!(oxygen_saturation(94.0), Assessment::flag(Severity::Warn, "Low oxygen saturation."));
        assert_eq!(oxygen_saturation(90.0), Assessment::flag(Severity::Warn, "Low oxygen saturation."));
        assert_eq!(
            oxygen_saturation(89.9),
            Assessment::flag(Severity::Critical, "Critically low oxygen saturation.")
        );
    }

    #[test]
    fn test_category_dispatch() {
        let vitals = VitalsInput::new(140.0, 118.0, 76.0, 36.8, 98.0);
        let assessed: Vec<Severity> = Category::ALL.iter().map(|c| c.assess(&vitals).severity).collect();
        assert_eq!(assessed, vec![Severity::Critical, Severity::Ok, Severity::Ok, Severity::Ok]);
    }
}
