use ratatui::layout::Rect;

/// Split the screen into header, body, and footer bands.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the single visible input region and the output
/// list below it.
pub fn body_regions(body: Rect) -> (Rect, Rect) {
    let input_height = body.height.min(3);
    let input = Rect {
        x: body.x,
        y: body.y,
        width: body.width,
        height: input_height,
    };
    let output = Rect {
        x: body.x,
        y: body.y + input_height,
        width: body.width,
        height: body.height.saturating_sub(input_height),
    };
    (input, output)
}

/// Center a fixed-size rectangle inside `area`, clamping to its bounds.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_whole_area() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 18);
        assert_eq!(header.height + body.height + footer.height, area.height);
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let area = Rect::new(0, 0, 20, 2);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, 2);
        assert_eq!(footer.height, 0);
        assert_eq!(body.height, 0);
    }

    #[test]
    fn body_regions_give_the_input_three_rows() {
        let (input, output) = body_regions(Rect::new(0, 3, 80, 18));
        assert_eq!(input.height, 3);
        assert_eq!(output.height, 15);
        assert_eq!(output.y, input.y + input.height);
    }

    #[test]
    fn centered_rect_clamps_to_the_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect_by_size(area, 60, 20);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 10);

        let small = centered_rect_by_size(area, 20, 4);
        assert_eq!(small.x, 10);
        assert_eq!(small.y, 3);
    }
}
