use super::*;

#[derive(Default)]
struct MockSurface {
    calls: Vec<&'static str>,
    fail_on_fill: bool,
}

impl DrawSurface for MockSurface {
    fn canvas(&self) -> Canvas {
        Canvas::new(4, 3)
    }

    fn clear_rect(&mut self, _rect: Rect) -> VizResult<()> {
        self.calls.push("clear_rect");
        Ok(())
    }

    fn fill_rect(&mut self, _rect: Rect, _color: Rgba8) -> VizResult<()> {
        self.calls.push("fill_rect");
        if self.fail_on_fill {
            return Err(VizError::render("fill failed"));
        }
        Ok(())
    }

    fn stroke_line(&mut self, _from: Point, _to: Point, _stroke: &LineStroke) -> VizResult<()> {
        self.calls.push("stroke_line");
        Ok(())
    }
}

fn sample_list() -> DrawList {
    let mut list = DrawList::new(Canvas::new(4, 3));
    list.stroke_line(
        Point::new(0.0, 0.0),
        Point::new(4.0, 3.0),
        LineStroke::default(),
    );
    list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Rgba8::BLACK);
    list.fill_rect(Rect::new(1.0, 1.0, 2.0, 2.0), Rgba8::BLACK);
    list
}

#[test]
fn execute_draw_list_calls_in_list_order() {
    let mut surface = MockSurface::default();
    execute_draw_list(&mut surface, &sample_list()).unwrap();
    assert_eq!(
        surface.calls,
        vec!["clear_rect", "stroke_line", "fill_rect", "fill_rect"]
    );
}

#[test]
fn surface_error_stops_execution() {
    let mut surface = MockSurface {
        fail_on_fill: true,
        ..MockSurface::default()
    };
    let err = execute_draw_list(&mut surface, &sample_list()).unwrap_err();
    assert!(matches!(err, VizError::Render(_)));
    assert_eq!(surface.calls, vec!["clear_rect", "stroke_line", "fill_rect"]);
}

#[test]
fn canvas_mismatch_is_rejected_before_drawing() {
    let mut surface = RecordingSurface::new(Canvas::new(8, 8));
    let err = execute_draw_list(&mut surface, &sample_list()).unwrap_err();
    assert!(err.to_string().contains("4x3"));
    assert!(surface.commands.is_empty());
}

#[test]
fn recording_surface_replays_list_verbatim() {
    let list = sample_list();
    let mut surface = RecordingSurface::new(list.canvas);
    execute_draw_list(&mut surface, &list).unwrap();
    assert_eq!(surface.commands, list.commands);
}

#[test]
fn works_through_trait_objects() {
    let list = sample_list();
    let mut surface = RecordingSurface::new(list.canvas);
    let dyn_surface: &mut dyn DrawSurface = &mut surface;
    execute_draw_list(dyn_surface, &list).unwrap();
    assert_eq!(surface.commands.len(), 4);
}
