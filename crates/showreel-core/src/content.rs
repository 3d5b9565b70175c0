use serde::{Deserialize, Serialize};

/// Photo slide in the guests carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSlide {
    /// Image path relative to the site's public assets
    pub src: String,
    /// Alternative text, also used as the caption fallback
    pub alt: String,
    /// Explicit caption; falls back to `alt`
    #[serde(default)]
    pub label: Option<String>,
}

impl GuestSlide {
    pub fn new(src: &str, alt: &str) -> Self {
        Self {
            src: src.to_string(),
            alt: alt.to_string(),
            label: None,
        }
    }

    /// Caption shown on the card
    pub fn caption(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ if !self.alt.is_empty() => &self.alt,
            _ => "For our valued guests",
        }
    }
}

/// Guest quote in the testimonials carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub location: String,
}

impl Testimonial {
    pub fn new(quote: &str, name: &str, location: &str) -> Self {
        Self {
            quote: quote.to_string(),
            name: name.to_string(),
            location: location.to_string(),
        }
    }

    /// Two-letter avatar initials
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub fn default_guest_slides() -> Vec<GuestSlide> {
    vec![
        GuestSlide::new("/images/service-1.jpg", "Guest relaxing in pool"),
        GuestSlide::new("/images/service-2.jpg", "Woman at resort with luggage"),
        GuestSlide::new("/images/service-3.jpg", "Doing warmup with coach"),
        GuestSlide::new("/images/service-4.jpg", "Guest relaxing in pool repeat"),
        GuestSlide::new("/images/exp2.jpg", "Resort pool and ocean view"),
        GuestSlide {
            src: "/images/exp6.jpg".to_string(),
            alt: "Flexing".to_string(),
            label: Some("Flexing".to_string()),
        },
    ]
}

pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "We've been ordering from TALES FRESH for over one year now, and the quality of their organic produce is consistently excellent.",
            "Sarah Johnson",
            "Portland, OR",
        ),
        Testimonial::new(
            "The team's expert programs elevate guest experience at every level. Warm, focused, and results-driven.",
            "James Lee",
            "Austin, TX",
        ),
        Testimonial::new(
            "Tailored sessions for executives were spot on. Our staff loved the resilience workshops and mobility classes.",
            "Amelia Chen",
            "New York, NY",
        ),
        Testimonial::new(
            "Professional, discreet, and world-class. Our VIPs keep asking for them by name.",
            "Miguel Santos",
            "Miami, FL",
        ),
    ]
}
