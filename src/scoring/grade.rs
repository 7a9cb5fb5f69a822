use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    C,
    D,
}

impl LetterGrade {
    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LetterGrade::APlus => "Outstanding",
            LetterGrade::A => "Excellent",
            LetterGrade::BPlus => "Good",
            LetterGrade::B => "Fair",
            LetterGrade::C => "Needs work",
            LetterGrade::D => "Needs a lot of work",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grade {
    pub grade: LetterGrade,
    pub label: &'static str,
}

// Descending; first match wins.
const BANDS: [(f64, LetterGrade); 5] = [
    (90.0, LetterGrade::APlus),
    (80.0, LetterGrade::A),
    (70.0, LetterGrade::BPlus),
    (60.0, LetterGrade::B),
    (50.0, LetterGrade::C),
];

/// Map a composite score to a letter grade. Lower bounds are inclusive and
/// anything that misses every band (including NaN) is a D. Bands are checked
/// top down, so a score above 100 is still an A+.
pub fn classify_grade(composite_score: f64) -> Grade {
    let grade = BANDS
        .iter()
        .find(|(min, _)| composite_score >= *min)
        .map_or(LetterGrade::D, |(_, grade)| *grade);
    Grade {
        grade,
        label: grade.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_midpoints() {
        assert_eq!(classify_grade(95.0).grade, LetterGrade::APlus);
        assert_eq!(classify_grade(85.0).grade, LetterGrade::A);
        assert_eq!(classify_grade(75.0).grade, LetterGrade::BPlus);
        assert_eq!(classify_grade(65.0).grade, LetterGrade::B);
        assert_eq!(classify_grade(55.0).grade, LetterGrade::C);
        assert_eq!(classify_grade(10.0).grade, LetterGrade::D);
    }

    #[test]
    fn test_boundaries_map_to_upper_band() {
        assert_eq!(classify_grade(90.0).grade, LetterGrade::APlus);
        assert_eq!(classify_grade(80.0).grade, LetterGrade::A);
        assert_eq!(classify_grade(70.0).grade, LetterGrade::BPlus);
        assert_eq!(classify_grade(60.0).grade, LetterGrade::B);
        assert_eq!(classify_grade(50.0).grade, LetterGrade::C);
        assert_eq!(classify_grade(49.999).grade, LetterGrade::D);
    }

    #[test]
    fn test_out_of_range_scores() {
        assert_eq!(classify_grade(-5.0).grade, LetterGrade::D);
        assert_eq!(classify_grade(f64::NAN).grade, LetterGrade::D);
        assert_eq!(classify_grade(f64::NEG_INFINITY).grade, LetterGrade::D);
        assert_eq!(classify_grade(150.0).grade, LetterGrade::APlus);
    }

    #[test]
    fn test_monotonic() {
        let mut previous = classify_grade(0.0);
        for step in 1..=1000 {
            let current = classify_grade(step as f64 / 10.0);
            let rank = |g: Grade| BANDS.iter().position(|(_, b)| *b == g.grade).unwrap_or(BANDS.len());
            assert!(rank(current) <= rank(previous));
            previous = current;
        }
    }

    #[test]
    fn test_label_attached() {
        let grade = classify_grade(82.0);
        assert_eq!(grade.label, "Excellent");
        assert_eq!(grade.grade.to_string(), "A");
    }

    #[test]
    fn test_grade_serializes_with_symbol() {
        let json = serde_json::to_string(&classify_grade(91.0)).unwrap();
        assert_eq!(json, r#"{"grade":"A+","label":"Outstanding"}"#);
    }
}
