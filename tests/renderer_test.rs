//! Integration tests for the Renderer API.
//!
//! These drive the public render entry point with stub collaborators and
//! verify the rendered SVG structure, zoom state handling, and failure
//! propagation.

use std::cell::RefCell;
use std::rc::Rc;

use graticule::document::{
    DiagramSettings, DocumentSettings, TitlePosition, TitleSettings,
};
use graticule::geometry::Insets;
use graticule::layout::Frame;
use graticule::render::context::RenderContext;
use graticule::render::element::{
    ElementError, ElementRenderer, ElementRenderers, TitleOutcome, TitleRenderer,
};
use graticule::render::stacking::{StackedOutput, StackingCategory};
use graticule::{Document, GraticuleError, RenderOptions, Renderer, Viewport, ZoomObserver, ZoomTransform};
use svg::node::element::{Line, Rectangle, Text};

/// Title stub that always draws a title of a fixed height.
struct FixedTitle {
    height: f32,
}

impl TitleRenderer for FixedTitle {
    fn render(
        &self,
        group: &mut svg::node::element::Group,
        _document: &Document,
        _frame: &Frame,
    ) -> Result<TitleOutcome, ElementError> {
        use svg::Node;
        group.append(Text::new("Test diagram").set("class", "title"));
        Ok(TitleOutcome::rendered(self.height))
    }
}

/// Element stub that emits one tagged node per category it is given.
struct TaggedStub {
    categories: Vec<StackingCategory>,
}

impl TaggedStub {
    fn new(categories: &[StackingCategory]) -> Box<Self> {
        Box::new(Self {
            categories: categories.to_vec(),
        })
    }
}

impl ElementRenderer for TaggedStub {
    fn render(
        &self,
        _document: &Document,
        _context: &RenderContext,
        out: &mut StackedOutput,
    ) -> Result<(), ElementError> {
        for category in &self.categories {
            out.add(*category, Box::new(Rectangle::new()));
        }
        Ok(())
    }
}

/// Element stub that records the context it was handed.
struct ContextProbe {
    seen: Rc<RefCell<Option<RenderContext>>>,
}

impl ElementRenderer for ContextProbe {
    fn render(
        &self,
        _document: &Document,
        context: &RenderContext,
        _out: &mut StackedOutput,
    ) -> Result<(), ElementError> {
        *self.seen.borrow_mut() = Some(*context);
        Ok(())
    }
}

/// Element stub that always fails.
struct FailingRenderer;

impl ElementRenderer for FailingRenderer {
    fn render(
        &self,
        _document: &Document,
        _context: &RenderContext,
        _out: &mut StackedOutput,
    ) -> Result<(), ElementError> {
        Err("icon sprite sheet missing".into())
    }
}

/// Observer that records the order of its callbacks.
struct RecordingObserver {
    events: Rc<RefCell<Vec<String>>>,
}

impl ZoomObserver for RecordingObserver {
    fn dismiss_hover_metadata(&mut self) {
        self.events.borrow_mut().push("dismiss".to_string());
    }

    fn zoom_changed(&mut self, transform: &ZoomTransform) {
        self.events
            .borrow_mut()
            .push(format!("zoom {} {} {}", transform.x(), transform.y(), transform.k()));
    }
}

fn document_with(settings: DocumentSettings, diagram: DiagramSettings) -> Document {
    Document::new(settings, diagram, TitleSettings::default())
}

#[test]
fn test_render_default_document_produces_svg() {
    let mut renderer = Renderer::default();
    let canvas = renderer
        .render(
            Viewport::new(800.0, 600.0),
            &Document::default(),
            RenderOptions::new(),
        )
        .expect("render failed");

    let svg = canvas.to_svg().to_string();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("class=\"render\""));
    assert!(svg.contains("class=\"zoom\""));
    assert!(svg.contains("class=\"document\""));
}

#[test]
fn test_letterbox_offsets_reach_document_group() {
    // 1000x400 with ratio 1:1: height binds, 300px centering on X.
    let settings = DocumentSettings::new(
        Insets::default(),
        "1:1".parse().unwrap(),
        "white",
        false,
    );
    let document = document_with(settings, DiagramSettings::default());

    let mut renderer = Renderer::default();
    let canvas = renderer
        .render(Viewport::new(1000.0, 400.0), &document, RenderOptions::new())
        .unwrap();

    assert!(canvas.to_svg().to_string().contains("translate(300, 0)"));
}

#[test]
fn test_context_carries_scalers_over_diagram_rect() {
    let seen = Rc::new(RefCell::new(None));
    let elements = ElementRenderers::new().with_icons(Box::new(ContextProbe {
        seen: Rc::clone(&seen),
    }));

    let diagram = DiagramSettings::new(10, 5, false, Insets::default());
    let document = document_with(DocumentSettings::default(), diagram);

    let mut renderer = Renderer::new(elements);
    renderer
        .render(Viewport::new(800.0, 600.0), &document, RenderOptions::new())
        .unwrap();

    let context = (*seen.borrow()).expect("icon renderer was not invoked");
    assert_eq!(context.diagram().width(), 800.0);
    assert_eq!(context.diagram().height(), 600.0);
    // Scalers span the grid onto the diagram rectangle.
    assert_eq!(context.scaler_x().scale(0.0), 0.0);
    assert_eq!(context.scaler_x().scale(9.0), 800.0);
    assert_eq!(context.scaler_y().scale(4.0), 600.0);
    assert!(!context.scaler_y().is_inverted());
}

#[test]
fn test_inverted_y_scaler() {
    let seen = Rc::new(RefCell::new(None));
    let elements = ElementRenderers::new().with_icons(Box::new(ContextProbe {
        seen: Rc::clone(&seen),
    }));

    let diagram = DiagramSettings::new(4, 4, true, Insets::default());
    let document = document_with(DocumentSettings::default(), diagram);

    Renderer::new(elements)
        .render(Viewport::new(300.0, 300.0), &document, RenderOptions::new())
        .unwrap();

    let context = (*seen.borrow()).expect("icon renderer was not invoked");
    assert!(context.scaler_y().is_inverted());
    assert_eq!(context.scaler_y().scale(0.0), 300.0);
    assert_eq!(context.scaler_y().scale(3.0), 0.0);
}

#[test]
fn test_single_column_grid_renders_instead_of_failing() {
    let seen = Rc::new(RefCell::new(None));
    let elements = ElementRenderers::new().with_icons(Box::new(ContextProbe {
        seen: Rc::clone(&seen),
    }));

    let diagram = DiagramSettings::new(1, 1, false, Insets::default());
    let document = document_with(DocumentSettings::default(), diagram);

    Renderer::new(elements)
        .render(Viewport::new(200.0, 200.0), &document, RenderOptions::new())
        .expect("single-cell grids must render");

    let context = (*seen.borrow()).expect("icon renderer was not invoked");
    // The only cell sits on the low edge of each axis.
    assert_eq!(context.scaler_x().scale(0.0), 0.0);
    assert_eq!(context.scaler_y().scale(0.0), 0.0);
}

#[test]
fn test_title_height_shifts_diagram_group() {
    let elements = ElementRenderers::new().with_title(Box::new(FixedTitle { height: 40.0 }));
    let document = Document::new(
        DocumentSettings::default(),
        DiagramSettings::default(),
        TitleSettings::new(TitlePosition::Top, Some("Test diagram".to_string())),
    );

    let mut renderer = Renderer::new(elements);
    let canvas = renderer
        .render(Viewport::new(800.0, 600.0), &document, RenderOptions::new())
        .unwrap();

    let svg = canvas.to_svg().to_string();
    assert!(svg.contains("Test diagram"));
    assert!(svg.contains("translate(0, 40)"));
}

#[test]
fn test_stacking_order_in_final_document() {
    let elements = ElementRenderers::new()
        .with_grid_lines(TaggedStub::new(&[StackingCategory::Grids]))
        .with_icons(TaggedStub::new(&[
            StackingCategory::Icons,
            StackingCategory::IconLabel,
        ]))
        .with_notes(TaggedStub::new(&[StackingCategory::Notes]))
        .with_groups(TaggedStub::new(&[
            StackingCategory::Groups,
            StackingCategory::GroupLabel,
        ]))
        .with_connections(TaggedStub::new(&[
            StackingCategory::Connections,
            StackingCategory::ConnectionLabel,
        ]));

    let settings = DocumentSettings::new(
        Insets::default(),
        "none".parse().unwrap(),
        "white",
        true, // watermark on
    );
    let document = document_with(settings, DiagramSettings::default());

    let mut renderer = Renderer::new(elements);
    let canvas = renderer
        .render(Viewport::new(800.0, 600.0), &document, RenderOptions::new())
        .unwrap();

    let svg = canvas.to_svg().to_string();
    let expected = [
        "class=\"grids\"",
        "class=\"groups\"",
        "class=\"connections\"",
        "class=\"notes\"",
        "class=\"icons\"",
        "class=\"icon-label\"",
        "class=\"connection-label\"",
        "class=\"group-label\"",
        "class=\"watermark\"",
    ];
    let positions: Vec<usize> = expected
        .iter()
        .map(|class| svg.find(class).unwrap_or_else(|| panic!("{class} missing")))
        .collect();
    assert!(
        positions.windows(2).all(|pair| pair[0] < pair[1]),
        "categories out of stacking order: {positions:?}",
    );
}

#[test]
fn test_zoom_restore_across_re_renders() {
    let mut renderer = Renderer::default();
    let document = Document::default();
    let viewport = Viewport::new(800.0, 600.0);

    renderer
        .render(viewport, &document, RenderOptions::new())
        .unwrap();
    renderer.apply_zoom(ZoomTransform::new(10.0, 5.0, 2.0));

    let kept = renderer
        .render(viewport, &document, RenderOptions::new().with_keep_zoom(true))
        .unwrap();
    assert_eq!(kept.transform(), ZoomTransform::new(10.0, 5.0, 2.0));

    let reset = renderer
        .render(viewport, &document, RenderOptions::new())
        .unwrap();
    assert_eq!(reset.transform(), ZoomTransform::identity());
}

#[test]
fn test_keep_zoom_with_zoom_disabled_resets_to_identity() {
    let mut renderer = Renderer::default();
    let document = Document::default();
    let viewport = Viewport::new(800.0, 600.0);

    renderer
        .render(viewport, &document, RenderOptions::new())
        .unwrap();
    renderer.apply_zoom(ZoomTransform::new(10.0, 5.0, 2.0));

    // A canvas without zoom never carries a transform, kept or not.
    let disabled = renderer
        .render(
            viewport,
            &document,
            RenderOptions::new().with_keep_zoom(true).with_enable_zoom(false),
        )
        .unwrap();
    assert_eq!(disabled.transform(), ZoomTransform::identity());
}

#[test]
fn test_zoom_ignored_when_disabled() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut renderer = Renderer::default();
    renderer.subscribe(Box::new(RecordingObserver {
        events: Rc::clone(&events),
    }));

    renderer
        .render(
            Viewport::new(800.0, 600.0),
            &Document::default(),
            RenderOptions::new().with_enable_zoom(false),
        )
        .unwrap();

    renderer.apply_zoom(ZoomTransform::new(10.0, 5.0, 2.0));

    assert_eq!(renderer.canvas().unwrap().transform(), ZoomTransform::identity());
    assert!(events.borrow().is_empty());
}

#[test]
fn test_observer_ordering_per_interaction() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut renderer = Renderer::default();
    renderer.subscribe(Box::new(RecordingObserver {
        events: Rc::clone(&events),
    }));

    renderer
        .render(
            Viewport::new(800.0, 600.0),
            &Document::default(),
            RenderOptions::new(),
        )
        .unwrap();
    renderer.apply_zoom(ZoomTransform::new(3.0, 4.0, 1.5));

    assert_eq!(
        *events.borrow(),
        vec!["dismiss".to_string(), "zoom 3 4 1.5".to_string()],
    );
}

#[test]
fn test_restoring_kept_zoom_does_not_notify() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut renderer = Renderer::default();
    renderer.subscribe(Box::new(RecordingObserver {
        events: Rc::clone(&events),
    }));

    let viewport = Viewport::new(800.0, 600.0);
    renderer
        .render(viewport, &Document::default(), RenderOptions::new())
        .unwrap();
    renderer.apply_zoom(ZoomTransform::new(1.0, 2.0, 3.0));
    events.borrow_mut().clear();

    renderer
        .render(
            viewport,
            &Document::default(),
            RenderOptions::new().with_keep_zoom(true),
        )
        .unwrap();

    // State restoration is not an interaction.
    assert!(events.borrow().is_empty());
}

#[test]
fn test_collaborator_failure_propagates_and_leaves_no_canvas() {
    let elements = ElementRenderers::new().with_icons(Box::new(FailingRenderer));
    let mut renderer = Renderer::new(elements);

    let result = renderer.render(
        Viewport::new(800.0, 600.0),
        &Document::default(),
        RenderOptions::new(),
    );
    assert!(matches!(result, Err(GraticuleError::Render(_))));

    assert!(renderer.canvas().is_none());
}

#[test]
fn test_invalid_fill_is_config_error() {
    let settings = DocumentSettings::new(
        Insets::default(),
        "none".parse().unwrap(),
        "not a color at all",
        false,
    );
    let document = document_with(settings, DiagramSettings::default());

    let mut renderer = Renderer::default();
    let result = renderer.render(
        Viewport::new(800.0, 600.0),
        &document,
        RenderOptions::new(),
    );
    assert!(matches!(result, Err(GraticuleError::Config(_))));
}

#[test]
fn test_grid_lines_stub_can_draw_with_scalers() {
    // A minimal "real" collaborator: vertical grid lines at each column.
    struct GridLines;
    impl ElementRenderer for GridLines {
        fn render(
            &self,
            document: &Document,
            context: &RenderContext,
            out: &mut StackedOutput,
        ) -> Result<(), ElementError> {
            for column in 0..document.diagram().columns() {
                let x = context.scaler_x().scale(column as f32);
                let line = Line::new()
                    .set("x1", x)
                    .set("y1", 0.0)
                    .set("x2", x)
                    .set("y2", context.diagram().height());
                out.add(StackingCategory::Grids, Box::new(line));
            }
            Ok(())
        }
    }

    let elements = ElementRenderers::new().with_grid_lines(Box::new(GridLines));
    let diagram = DiagramSettings::new(3, 3, false, Insets::default());
    let document = document_with(DocumentSettings::default(), diagram);

    let mut renderer = Renderer::new(elements);
    let canvas = renderer
        .render(Viewport::new(200.0, 200.0), &document, RenderOptions::new())
        .unwrap();

    let svg = canvas.to_svg().to_string();
    // Columns at x = 0, 100, 200 across the 200px diagram.
    assert_eq!(svg.matches("<line").count(), 3);
    assert!(svg.contains("x1=\"100\""));
}
