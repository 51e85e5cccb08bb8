//! Renderer validation document.
//!
//! [`renderer_test_document`] builds a five-page US Letter document that
//! exercises everything a page renderer has to get right:
//!
//! 1. Overlapping translucent rectangles, a 50-strip alpha ramp and six
//!    translucent circles
//! 2. Form widgets: text fields, checkboxes, a radio group and a dropdown
//! 3. A link, highlight bars, a dashed signature box with a squiggle, a
//!    stamp and a rotated watermark bar
//! 4. Rotated bars under nested save/restore, concentric circles, Bézier
//!    curves and a star
//! 5. Eighty random translucent shapes from a fixed seed
//!
//! Text labels are not part of the page model, so the pages carry only the
//! shapes, widgets and annotations.

use crate::color::Rgba;
use crate::config::PageSize;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::writer::form_fields::{CheckboxWidget, ChoiceWidget, RadioWidget, TextFieldWidget};
use crate::writer::{
    shapes, DashPattern, Document, DocumentBuilder, DocumentMetadata, LinkAnnotation,
    PageAssembler, PathBuilder, StampAnnotation,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed for the page 5 shapes.
pub const STRESS_SEED: u64 = 42;

/// Number of shapes on page 5.
pub const STRESS_SHAPES: usize = 80;

/// Build the five-page renderer test document.
pub fn renderer_test_document() -> Result<Document> {
    let mut page = PageAssembler::new();
    let mut doc = DocumentBuilder::new();
    doc.metadata(
        DocumentMetadata::new()
            .title("Renderer test document")
            .subject("Transparency, forms, annotations, vectors, stress")
            .creator(concat!("pagecraft ", env!("CARGO_PKG_VERSION"))),
    );

    let builders: [fn(&mut PageAssembler) -> Result<()>; 5] = [
        transparency_page,
        form_page,
        annotation_page,
        vector_page,
        stress_page,
    ];
    for (i, build) in builders.iter().enumerate() {
        if i > 0 {
            page.begin_page(PageSize::Letter)?;
        }
        build(&mut page)?;
        doc.add_page(page.finalize()?);
    }

    Ok(doc.build())
}

fn transparency_page(page: &mut PageAssembler) -> Result<()> {
    let y = 642.0;

    // Red, blue, green at 40%, each overlapping the previous ones
    page.set_fill_color(Rgba::new(1.0, 0.0, 0.0, 0.4)?)?;
    page.fill(&shapes::rectangle(80.0, y, 200.0, 150.0)?)?;
    page.set_fill_color(Rgba::new(0.0, 0.0, 1.0, 0.4)?)?;
    page.fill(&shapes::rectangle(180.0, y - 30.0, 200.0, 150.0)?)?;
    page.set_fill_color(Rgba::new(0.0, 0.7, 0.0, 0.4)?)?;
    page.fill(&shapes::rectangle(130.0, y - 60.0, 200.0, 150.0)?)?;

    for i in 0..50 {
        page.set_fill_color(Rgba::new(0.2, 0.4, 0.9, i as f32 / 50.0)?)?;
        page.fill(&shapes::rectangle(50.0 + i as f32 * 8.0, y - 200.0, 8.0, 50.0)?)?;
    }

    let colors = [
        (1.0, 0.0, 0.0),
        (0.0, 1.0, 0.0),
        (0.0, 0.0, 1.0),
        (1.0, 1.0, 0.0),
        (1.0, 0.0, 1.0),
        (0.0, 1.0, 1.0),
    ];
    for (i, (r, g, b)) in colors.into_iter().enumerate() {
        let cx = 100.0 + (i % 3) as f32 * 120.0;
        let cy = y - 350.0 - (i / 3) as f32 * 80.0;
        page.set_fill_color(Rgba::new(r, g, b, 0.5)?)?;
        page.fill_and_stroke(&shapes::circle(cx, cy, 40.0)?)?;
    }
    Ok(())
}

fn form_page(page: &mut PageAssembler) -> Result<()> {
    let border = Rgba::from_hex("#333333")?;
    let field_bg = Rgba::from_hex("#f0f0f0")?;

    page.add_widget(
        TextFieldWidget::new("nombre", Rect::new(130.0, 630.0, 250.0, 22.0))?
            .with_value("Juan Pérez")
            .with_font_size(11.0)?
            .with_border_color(border)
            .with_background_color(field_bg),
    )?;
    page.add_widget(
        TextFieldWidget::new("email", Rect::new(130.0, 590.0, 250.0, 22.0))?
            .with_value("juan@example.com")
            .with_font_size(11.0)?
            .with_border_color(border)
            .with_background_color(field_bg),
    )?;
    page.add_widget(
        TextFieldWidget::new("comments", Rect::new(130.0, 522.0, 350.0, 60.0))?
            .with_value("Este es un campo de texto multilínea para probar el renderizado.")
            .multiline()
            .with_font_size(10.0)?
            .with_border_color(border)
            .with_background_color(Rgba::from_hex("#fffff0")?),
    )?;

    for (i, checked) in [true, false, true].into_iter().enumerate() {
        let y = 425.0 - i as f32 * 28.0;
        page.add_widget(
            CheckboxWidget::new(format!("check_{}", i), Rect::new(50.0, y, 16.0, 16.0))?
                .with_checked(checked)
                .with_border_color(border)
                .with_background_color(Rgba::white()),
        )?;
    }

    for i in 0..3 {
        let y = 296.0 - i as f32 * 28.0;
        page.add_widget(
            RadioWidget::new("radio_group", format!("sel_{}", i), Rect::new(50.0, y, 16.0, 16.0))?
                .with_selected(i == 0)
                .with_border_color(border)
                .with_background_color(Rgba::white()),
        )?;
    }

    page.add_widget(
        ChoiceWidget::new(
            "dropdown",
            Rect::new(50.0, 167.0, 200.0, 22.0),
            ["Opción 1", "Opción 2", "Opción 3", "Opción 4"],
            "Opción 2",
        )?
        .with_font_size(11.0)?
        .with_border_color(border)
        .with_background_color(field_bg),
    )
}

fn annotation_page(page: &mut PageAssembler) -> Result<()> {
    page.add_annotation(LinkAnnotation::uri(
        Rect::from_points(50.0, 622.0, 300.0, 652.0),
        "https://www.example.com",
    )?)?;

    // Highlight bars
    page.set_fill_color(Rgba::new(1.0, 1.0, 0.0, 0.4)?)?;
    page.fill(&shapes::rectangle(50.0, 562.0, 400.0, 20.0)?)?;
    page.set_fill_color(Rgba::new(0.0, 1.0, 0.0, 0.3)?)?;
    page.fill(&shapes::rectangle(50.0, 522.0, 350.0, 20.0)?)?;
    page.set_fill_color(Rgba::black())?;

    // Signature box
    page.set_stroke_color(Rgba::from_hex("#999999")?)?;
    page.set_dash(Some(DashPattern::new(3, 3)?))?;
    page.stroke(&shapes::rectangle(50.0, 377.0, 250.0, 70.0)?)?;
    page.set_dash(None)?;

    let base = 417.0;
    let mut squiggle = PathBuilder::new();
    squiggle.move_to(Point::new(70.0, base))?;
    for i in 0..20 {
        let t = i as f32;
        let offset = (t * 0.8).sin() * 12.0 + (t * 1.2).cos() * 6.0;
        squiggle.line_to(Point::new(70.0 + t * 10.0, base + offset))?;
    }
    page.set_stroke_color(Rgba::from_hex("#1a237e")?)?;
    page.set_line_width(1.5)?;
    page.stroke(&squiggle.build()?)?;
    page.set_line_width(1.0)?;

    // Stamp
    let stamp_rect = Rect::new(80.0, 267.0, 180.0, 50.0);
    page.save_state()?;
    page.set_fill_color(Rgba::new(1.0, 0.0, 0.0, 0.15)?)?;
    page.set_stroke_color(Rgba::red())?;
    page.set_line_width(3.0)?;
    page.fill_and_stroke(&shapes::rounded_rectangle(
        stamp_rect.x,
        stamp_rect.y,
        stamp_rect.width,
        stamp_rect.height,
        10.0,
    )?)?;
    page.restore_state()?;
    page.add_annotation(StampAnnotation::new(stamp_rect, "APROBADO", Rgba::red())?)?;

    // Watermark bar, rotated about its center
    page.save_state()?;
    page.set_fill_color(Rgba::new(0.5, 0.5, 0.5, 0.15)?)?;
    page.translate(306.0, 147.0)?;
    page.rotate_degrees(30.0)?;
    page.fill(&shapes::rectangle(-150.0, -22.0, 300.0, 44.0)?)?;
    page.restore_state()
}

fn vector_page(page: &mut PageAssembler) -> Result<()> {
    let (cx, cy) = (200.0, 542.0);
    page.save_state()?;
    for i in 0..12 {
        page.save_state()?;
        page.translate(cx, cy)?;
        page.rotate_degrees(i as f32 * 30.0)?;
        page.set_fill_color(Rgba::new(0.2, 0.5, 0.9, 0.3 + (i as f32 / 12.0) * 0.5)?)?;
        page.set_stroke_color(Rgba::opaque(0.1, 0.3, 0.7)?)?;
        page.fill_and_stroke(&shapes::rectangle(-60.0, -10.0, 120.0, 20.0)?)?;
        page.restore_state()?;
    }
    page.restore_state()?;

    // Drifting concentric circles
    page.set_stroke_color(Rgba::from_hex("#d4af37")?)?;
    page.set_line_width(2.0)?;
    let (mut sx, mut sy) = (450.0, 542.0);
    for size in [80.0, 50.0, 31.0, 19.0, 12.0, 7.0, 4.0] {
        page.stroke(&shapes::circle(sx, sy, size)?)?;
        sx += size * 0.1;
        sy += size * 0.05;
    }

    let y = 382.0;
    let curves = [
        ("#e91e63", (150.0, y + 30.0), (250.0, y - 130.0), (350.0, y - 50.0)),
        ("#4caf50", (100.0, y - 150.0), (300.0, y + 50.0), (450.0, y - 50.0)),
    ];
    for (hex, c1, c2, end) in curves {
        let mut curve = PathBuilder::new();
        curve.move_to(Point::new(50.0, y - 50.0))?;
        curve.curve_to(
            Point::new(c1.0, c1.1),
            Point::new(c2.0, c2.1),
            Point::new(end.0, end.1),
        )?;
        page.set_stroke_color(Rgba::from_hex(hex)?)?;
        page.stroke(&curve.build()?)?;
    }
    page.set_line_width(1.0)?;

    page.set_fill_color(Rgba::new(1.0, 0.84, 0.0, 0.7)?)?;
    page.set_stroke_color(Rgba::from_hex("#ff8f00")?)?;
    page.set_line_width(2.0)?;
    page.fill_and_stroke(&shapes::regular_star(170.0, 162.0, 50.0, 20.0, 5)?)?;
    page.set_line_width(1.0)
}

fn stress_page(page: &mut PageAssembler) -> Result<()> {
    let (width, height) = page.page_size();
    let (max_x, max_y) = (width as i32 - 80, height as i32 - 120);
    let mut rng = StdRng::seed_from_u64(STRESS_SEED);

    for _ in 0..STRESS_SHAPES {
        let x = rng.gen_range(30..=max_x) as f32;
        let y = rng.gen_range(100..=max_y) as f32;
        let w = rng.gen_range(20..=80) as f32;
        let h = rng.gen_range(20..=60) as f32;
        let color = Rgba::new(rng.gen(), rng.gen(), rng.gen(), rng.gen_range(0.1..0.5))?;

        page.set_fill_color(color)?;
        let shape = match rng.gen_range(0..3) {
            0 => shapes::rectangle(x, y, w, h)?,
            1 => shapes::circle(x, y, w / 2.0)?,
            _ => shapes::rounded_rectangle(x, y, w, h, 5.0)?,
        };
        page.fill(&shape)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositing::composite;
    use crate::writer::{PaintMode, Widget};

    #[test]
    fn test_document_shape() {
        let doc = renderer_test_document().unwrap();
        assert_eq!(doc.page_count(), 5);
        for page in doc.pages() {
            assert_eq!(page.size(), (612.0, 792.0));
        }

        let counts: Vec<_> = doc.pages().iter().map(|p| p.ops().len()).collect();
        assert_eq!(counts, [59, 0, 6, 22, STRESS_SHAPES]);
    }

    #[test]
    fn test_first_page_overlap_composites() {
        let doc = renderer_test_document().unwrap();
        let layers: Vec<Rgba> = doc.pages()[0].fill_colors().take(3).collect();
        let result = composite(Rgba::white(), &layers);
        assert!((result.r - 0.36).abs() < 1e-5);
        assert!((result.g - 0.496).abs() < 1e-5);
        assert!((result.b - 0.456).abs() < 1e-5);
    }

    #[test]
    fn test_form_page_widgets() {
        let doc = renderer_test_document().unwrap();
        let page = &doc.pages()[1];
        assert_eq!(page.widgets().len(), 10);

        let selected: Vec<_> = page
            .widgets()
            .iter()
            .filter_map(|w| match w {
                Widget::Radio(r) if r.is_selected() => Some(r.value()),
                _ => None,
            })
            .collect();
        assert_eq!(selected, ["sel_0"]);

        match page.widget("comments") {
            Some(Widget::TextField(field)) => assert!(field.is_multiline()),
            other => panic!("unexpected widget: {:?}", other),
        }
    }

    #[test]
    fn test_annotation_page() {
        let doc = renderer_test_document().unwrap();
        let page = &doc.pages()[2];
        assert_eq!(page.annotations().len(), 2);
        assert_eq!(page.annotations()[0].subtype(), "Link");

        let squiggle = &page.ops()[3];
        assert_eq!(squiggle.line_width(), 1.5);
        assert_eq!(squiggle.path().segments().len(), 21);
        assert_eq!(page.ops()[2].dash(), Some(DashPattern::new(3, 3).unwrap()));
        assert_eq!(page.ops()[4].paint_mode(), PaintMode::FillAndStroke);
    }

    #[test]
    fn test_stress_page_is_deterministic() {
        let a = renderer_test_document().unwrap();
        let b = renderer_test_document().unwrap();
        assert_eq!(a.pages()[4], b.pages()[4]);
        for color in a.pages()[4].fill_colors() {
            assert!((0.1..0.5).contains(&color.a));
        }
    }
}
