pub struct GradingService;

impl GradingService {
    /// Letter grade from the rounded percentage. Computed once when a result
    /// is recorded; never recomputed afterwards. A zero max score yields NaN,
    /// which fails every bound and lands on "F".
    pub fn letter_grade(score: f64, max_score: f64) -> &'static str {
        let percentage = (score / max_score * 100.0).round();
        if percentage >= 90.0 {
            "A"
        } else if percentage >= 80.0 {
            "B"
        } else if percentage >= 70.0 {
            "C"
        } else if percentage >= 60.0 {
            "D"
        } else {
            "F"
        }
    }
}
