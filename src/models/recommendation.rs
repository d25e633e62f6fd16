/// A single reduction suggestion surfaced after a calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Short action headline.
    pub title: String,

    /// Concrete steps behind the headline.
    pub description: String,
}

impl Recommendation {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}
