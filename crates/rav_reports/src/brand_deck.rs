//! Six-slide brand template: title, section divider, bullets, stat cards,
//! feature highlight and closing.

use rav_docs::brand::{self, Rgb};
use rav_docs::pptx::{Frame, Geometry, Outline, TextAlign, TextStyle};
use rav_docs::{Deck, Slide};

pub const FILE_NAME: &str = "RAV-Brand-Template.pptx";

const FOOTER_TEXT: &str = "rent-a-vacation.com  |  Name Your Price. Book Your Paradise.";

const CONTENT_BULLETS: [&str; 5] = [
    "First key point — keep it concise and actionable",
    "Second key point — one idea per bullet",
    "Third key point — use data to support claims",
    "Fourth key point — highlight with Coral for emphasis",
    "Fifth key point — end with a clear takeaway",
];

/// Bullet drawn in coral instead of teal.
const EMPHASISED_BULLET: usize = 3;

const STATS: [(&str, &str); 4] = [
    ("117+", "Resorts Worldwide"),
    ("351", "Unit Types Available"),
    ("34%", "Voice Search Adoption"),
    ("99.97%", "Platform Uptime"),
];

pub fn build() -> Deck {
    let mut deck = Deck::new();
    deck.add_slide(title_slide())
        .add_slide(section_divider())
        .add_slide(content_slide())
        .add_slide(key_metrics())
        .add_slide(feature_highlight())
        .add_slide(closing());
    deck
}

fn full_width(y: f64, height: f64) -> Frame {
    Frame::inches(0.0, y, rav_docs::pptx::SLIDE_WIDTH_IN, height)
}

fn logo_text(slide: &mut Slide, x: f64, y: f64, size_pt: f32) {
    slide.text_box(
        Frame::inches(x, y, 3.0, 0.5),
        brand::BRAND_NAME,
        TextStyle::new(size_pt, brand::WHITE).bold(),
    );
}

fn accent_bar(slide: &mut Slide, y: f64) {
    slide.rect(Frame::inches(0.8, y, 2.0, 0.06), brand::CORAL);
}

fn slide_title(slide: &mut Slide, text: &str) {
    slide.text_box(
        Frame::inches(0.8, 0.5, 10.0, 0.8),
        text,
        TextStyle::new(32.0, brand::TEAL).bold(),
    );
}

fn footer(slide: &mut Slide, dark_bg: bool) {
    let color: Rgb = if dark_bg { brand::WHITE } else { brand::MUTED };
    slide.text_box(
        Frame::inches(0.8, 6.8, 6.0, 0.4),
        FOOTER_TEXT,
        TextStyle::new(10.0, color),
    );
}

fn title_slide() -> Slide {
    let mut slide = Slide::new("Title Slide (teal bg)");
    slide
        .rect(Frame::full(), brand::TEAL)
        .rect(full_width(0.0, 0.12), brand::CORAL);
    logo_text(&mut slide, 0.8, 1.2, 16.0);
    slide
        .text_box(
            Frame::inches(0.8, 2.5, 10.0, 1.5),
            "Presentation Title Here",
            TextStyle::new(44.0, brand::WHITE).bold(),
        )
        .text_box(
            Frame::inches(0.8, 4.2, 8.0, 0.8),
            "Subtitle or description goes here  |  Date",
            TextStyle::new(20.0, brand::TEAL_TINT),
        )
        .text_box(
            Frame::inches(0.8, 6.2, 8.0, 0.5),
            brand::TAGLINE,
            TextStyle::new(14.0, brand::TEAL_MIST),
        )
        .rect(Frame::inches(0.8, 5.8, 3.0, 0.05), brand::CORAL);
    footer(&mut slide, true);
    slide
}

fn section_divider() -> Slide {
    let mut slide = Slide::new("Section Divider (teal header + cream body)");
    slide
        .rect(Frame::full(), brand::CREAM)
        .rect(full_width(0.0, 2.8), brand::TEAL)
        .rect(full_width(2.8, 0.08), brand::CORAL);
    logo_text(&mut slide, 0.8, 0.5, 12.0);
    slide
        .text_box(
            Frame::inches(0.8, 1.2, 10.0, 1.2),
            "Section Title",
            TextStyle::new(40.0, brand::WHITE).bold(),
        )
        .text_box(
            Frame::inches(0.8, 3.4, 10.0, 0.8),
            "Brief overview of what this section covers. Use this slide to introduce a new topic or group of related content.",
            TextStyle::new(18.0, brand::NAVY),
        );
    footer(&mut slide, false);
    slide
}

fn content_slide() -> Slide {
    let mut slide = Slide::new("Content Slide (bullets)");
    slide
        .rect(Frame::full(), brand::CREAM)
        .rect(full_width(0.0, 0.08), brand::TEAL);
    slide_title(&mut slide, "Content Slide Title");
    accent_bar(&mut slide, 1.25);

    for (i, bullet) in CONTENT_BULLETS.iter().enumerate() {
        let y = 1.7 + 0.75 * i as f64;
        let dot = if i == EMPHASISED_BULLET {
            brand::CORAL
        } else {
            brand::TEAL
        };
        slide
            .fill(Geometry::Ellipse, Frame::inches(0.85, y + 0.12, 0.15, 0.15), dot)
            .text_box(
                Frame::inches(1.2, y, 10.0, 0.5),
                *bullet,
                TextStyle::new(18.0, brand::NAVY),
            );
    }

    footer(&mut slide, false);
    slide
}

fn key_metrics() -> Slide {
    let mut slide = Slide::new("Key Metrics (2x2 stat cards)");
    slide
        .rect(Frame::full(), brand::CREAM)
        .rect(full_width(0.0, 0.08), brand::TEAL);
    slide_title(&mut slide, "Key Metrics & Highlights");
    accent_bar(&mut slide, 1.25);

    for (i, (number, label)) in STATS.iter().enumerate() {
        let x = 0.8 + 5.5 * (i % 2) as f64;
        let y = 1.8 + 2.2 * (i / 2) as f64;
        slide
            .fill(Geometry::RoundRect, Frame::inches(x, y, 4.8, 1.8), brand::WHITE)
            .rect(Frame::inches(x, y, 4.8, 0.06), brand::CORAL)
            .text_box(
                Frame::inches(x + 0.3, y + 0.3, 4.0, 0.8),
                *number,
                TextStyle::new(42.0, brand::TEAL).bold(),
            )
            .text_box(
                Frame::inches(x + 0.3, y + 1.1, 4.0, 0.5),
                *label,
                TextStyle::new(16.0, brand::MUTED),
            );
    }

    footer(&mut slide, false);
    slide
}

fn feature_highlight() -> Slide {
    let mut slide = Slide::new("Feature Highlight (image + text split)");
    slide
        .rect(Frame::full(), brand::WHITE)
        .rect(full_width(0.0, 0.08), brand::TEAL)
        .outlined(
            Geometry::RoundRect,
            Frame::inches(0.8, 0.8, 5.5, 5.8),
            brand::SAND,
            Outline {
                color: brand::SAND_EDGE,
                width_pt: 1.0,
            },
        )
        .text_box(
            Frame::inches(1.5, 3.2, 4.0, 1.0),
            "[ Insert Image Here ]",
            TextStyle::new(18.0, brand::MUTED).align(TextAlign::Center),
        )
        .text_box(
            Frame::inches(7.0, 1.2, 5.5, 0.8),
            "Feature Highlight",
            TextStyle::new(32.0, brand::TEAL).bold(),
        )
        .rect(Frame::inches(7.0, 1.95, 2.0, 0.06), brand::CORAL)
        .text_box(
            Frame::inches(7.0, 2.3, 5.5, 2.0),
            "Describe the feature or value proposition here. \
             Keep it to 2-3 sentences that communicate the key benefit to your audience.",
            TextStyle::new(18.0, brand::NAVY),
        )
        .labelled(
            Geometry::RoundRect,
            Frame::inches(7.0, 4.8, 3.5, 0.7),
            brand::CORAL,
            "Call to Action",
            TextStyle::new(18.0, brand::WHITE)
                .bold()
                .align(TextAlign::Center),
        );
    footer(&mut slide, false);
    slide
}

fn closing() -> Slide {
    let mut slide = Slide::new("Closing / Thank You (teal bg)");
    slide
        .rect(Frame::full(), brand::TEAL)
        .rect(full_width(0.0, 0.12), brand::CORAL);
    logo_text(&mut slide, 0.8, 1.0, 16.0);
    slide
        .text_box(
            Frame::inches(0.8, 2.5, 10.0, 1.2),
            "Thank You",
            TextStyle::new(52.0, brand::WHITE).bold(),
        )
        .text_box(
            Frame::inches(0.8, 4.0, 8.0, 0.5),
            brand::WEBSITE,
            TextStyle::new(22.0, brand::TEAL_TINT),
        )
        .text_box(
            Frame::inches(0.8, 4.6, 8.0, 0.5),
            format!("{}  |  1-800-RAV-BOOK", brand::SUPPORT_EMAIL),
            TextStyle::new(16.0, brand::TEAL_MIST),
        )
        .rect(Frame::inches(0.8, 5.6, 3.0, 0.05), brand::CORAL)
        .text_box(
            Frame::inches(0.8, 5.8, 8.0, 0.5),
            brand::TAGLINE,
            TextStyle::new(16.0, brand::TEAL_MIST),
        );
    footer(&mut slide, true);
    slide
}

#[cfg(test)]
mod tests {
    use rav_docs::pptx::Shape;

    use super::*;

    #[test]
    fn test_six_slides_in_order() {
        let deck = build();
        assert_eq!(
            deck.overview(),
            vec![
                "  1. Title Slide (teal bg)",
                "  2. Section Divider (teal header + cream body)",
                "  3. Content Slide (bullets)",
                "  4. Key Metrics (2x2 stat cards)",
                "  5. Feature Highlight (image + text split)",
                "  6. Closing / Thank You (teal bg)",
            ]
        );
    }

    #[test]
    fn test_every_slide_has_footer() {
        let deck = build();
        for slide in deck.slides() {
            assert_eq!(slide.texts().last(), Some(&FOOTER_TEXT), "{}", slide.name);
        }
    }

    #[test]
    fn test_footer_colour_follows_background() {
        let deck = build();
        let footer_color = |slide: &Slide| match slide.shapes.last() {
            Some(Shape::TextBox { body, .. }) => body.style.color,
            other => panic!("unexpected last shape {other:?}"),
        };
        let slides = deck.slides();
        assert_eq!(footer_color(&slides[0]), brand::WHITE);
        assert_eq!(footer_color(&slides[2]), brand::MUTED);
        assert_eq!(footer_color(&slides[5]), brand::WHITE);
    }

    #[test]
    fn test_fourth_bullet_dot_is_coral() {
        let deck = build();
        let dots: Vec<Rgb> = deck.slides()[2]
            .shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Auto {
                    geometry: Geometry::Ellipse,
                    fill,
                    ..
                } => Some(*fill),
                _ => None,
            })
            .collect();
        assert_eq!(
            dots,
            vec![brand::TEAL, brand::TEAL, brand::TEAL, brand::CORAL, brand::TEAL]
        );
    }

    #[test]
    fn test_stat_cards_grid() {
        let deck = build();
        let cards: Vec<Frame> = deck.slides()[3]
            .shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Auto {
                    geometry: Geometry::RoundRect,
                    frame,
                    ..
                } => Some(*frame),
                _ => None,
            })
            .collect();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0], Frame::inches(0.8, 1.8, 4.8, 1.8));
        assert_eq!(cards[3], Frame::inches(6.3, 4.0, 4.8, 1.8));
        assert!(deck.slides()[3].texts().contains(&"99.97%"));
    }

    #[test]
    fn test_call_to_action_is_labelled_shape() {
        let deck = build();
        let cta = deck.slides()[4].shapes.iter().find(|shape| {
            matches!(shape, Shape::Auto { text: Some(t), .. } if t.text == "Call to Action")
        });
        assert!(cta.is_some());
    }

    #[test]
    fn test_deck_serializes() {
        let bytes = build().to_pptx_bytes().unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
