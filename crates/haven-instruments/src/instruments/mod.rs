pub mod dass21;
pub mod gad7;
pub mod phq9;

/// Response labels shared by PHQ-9 and GAD-7 ("over the last 2 weeks").
pub(crate) const FREQUENCY_SCALE: [&str; 4] = [
    "Not at all",
    "Several days",
    "More than half the days",
    "Nearly every day",
];
