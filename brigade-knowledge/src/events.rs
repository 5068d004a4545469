//! Per-event style and complexity preferences.

use brigade_core::menu::{Complexity, CulinaryStyle, EventType};

/// Preferred styles for an event, ordered by preference.
pub fn preferred_styles(event: EventType) -> &'static [CulinaryStyle] {
    match event {
        EventType::Wedding => &[
            CulinaryStyle::Sibarita,
            CulinaryStyle::Gourmet,
            CulinaryStyle::Classic,
            CulinaryStyle::Fusion,
            CulinaryStyle::Modern,
        ],
        EventType::Christening => &[
            CulinaryStyle::Classic,
            CulinaryStyle::Regional,
            CulinaryStyle::Modern,
        ],
        EventType::Communion => &[
            CulinaryStyle::Classic,
            CulinaryStyle::Regional,
            CulinaryStyle::Fusion,
            CulinaryStyle::Suave,
        ],
        EventType::Familiar => &[
            CulinaryStyle::Regional,
            CulinaryStyle::Classic,
            CulinaryStyle::Fusion,
        ],
        EventType::Congress | EventType::Corporate => &[
            CulinaryStyle::Classic,
            CulinaryStyle::Modern,
            CulinaryStyle::Fusion,
            CulinaryStyle::Gourmet,
        ],
    }
}

/// Whether a style is appropriate for an event.
pub fn is_style_appropriate(style: CulinaryStyle, event: EventType) -> bool {
    preferred_styles(event).contains(&style)
}

/// Complexity levels acceptable for an event.
pub fn allowed_complexity(event: EventType) -> &'static [Complexity] {
    match event {
        EventType::Wedding => &[Complexity::Medium, Complexity::High],
        EventType::Christening | EventType::Communion | EventType::Familiar => {
            &[Complexity::Low, Complexity::Medium]
        }
        EventType::Congress | EventType::Corporate => &[Complexity::Medium],
    }
}

/// Whether the complexity suits the event and budget. Weddings on a tight
/// budget (< 50 per guest) avoid high-complexity plates.
pub fn is_complexity_appropriate(
    complexity: Complexity,
    event: EventType,
    budget_max: Option<f64>,
) -> bool {
    if event == EventType::Wedding
        && complexity == Complexity::High
        && budget_max.map_or(false, |b| b < 50.0)
    {
        return false;
    }
    allowed_complexity(event).contains(&complexity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wedding_prefers_haute_cuisine() {
        assert!(is_style_appropriate(CulinaryStyle::Sibarita, EventType::Wedding));
        assert!(!is_style_appropriate(CulinaryStyle::Suave, EventType::Wedding));
    }

    #[test]
    fn cheap_wedding_rejects_high_complexity() {
        assert!(!is_complexity_appropriate(
            Complexity::High,
            EventType::Wedding,
            Some(45.0)
        ));
        assert!(is_complexity_appropriate(
            Complexity::High,
            EventType::Wedding,
            Some(90.0)
        ));
    }
}
