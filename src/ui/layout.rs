use ratatui::layout::Rect;

/// Split the screen into header, body and footer.
///
/// Header and footer are three rows each; the body gets the rest.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        height: header_height,
        ..area
    };
    let footer = Rect {
        y: area.y + area.height.saturating_sub(footer_height),
        height: footer_height,
        ..area
    };
    let body = Rect {
        y: area.y + header_height,
        height: area.height.saturating_sub(header_height + footer_height),
        ..area
    };
    (header, body, footer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_screen() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header, Rect::new(0, 0, 80, 3));
        assert_eq!(body, Rect::new(0, 3, 80, 18));
        assert_eq!(footer, Rect::new(0, 21, 80, 3));
    }

    #[test]
    fn tiny_screens_do_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 4));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 1);
        assert_eq!(body.height, 0);
    }
}
