use quotepress_types::{Color, QuoteStatus};

/// Badge color and Spanish display label for a quote status.
///
/// The mapping is total: every status variant has a defined pair, so the
/// cover never falls back to an "unknown" badge.
pub fn status_badge(status: QuoteStatus) -> (Color, &'static str) {
    match status {
        QuoteStatus::Draft => (Color::rgb(0x64, 0x74, 0x8b), "Borrador"),
        QuoteStatus::PendingReview => (Color::rgb(0xf5, 0x9e, 0x0b), "En Revisión"),
        QuoteStatus::Sent => (Color::rgb(0x3b, 0x82, 0xf6), "Enviada"),
        QuoteStatus::Viewed => (Color::rgb(0x06, 0xb6, 0xd4), "Vista"),
        QuoteStatus::Accepted => (Color::rgb(0x10, 0xb9, 0x81), "Aceptada"),
        QuoteStatus::Rejected => (Color::rgb(0xef, 0x44, 0x44), "Rechazada"),
        QuoteStatus::Expired => (Color::rgb(0xf9, 0x73, 0x16), "Expirada"),
        QuoteStatus::Revised => (Color::rgb(0x7c, 0x3a, 0xed), "Revisada"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_is_emerald() {
        let (color, label) = status_badge(QuoteStatus::Accepted);
        assert_eq!(color, Color::rgb(0x10, 0xb9, 0x81));
        assert_eq!(label, "Aceptada");
    }
}
