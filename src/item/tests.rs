use kurbo::Point as KurboPoint;
use quire_core::{FillPaint, LinearGradient, Point, StrokeStyle};
use quire_render::GroupNode;

use super::*;
use crate::preset::GradientStop;

struct Fixture {
    tree: RenderTree,
    parent: NodeId,
}

impl Fixture {
    fn new() -> Self {
        let mut tree = RenderTree::new();
        let root = tree.replace_root(Box::new(GroupNode));
        let parent = tree.append_child(root, Box::new(GroupNode));
        Self { tree, parent }
    }

    fn update(&mut self, item: &mut ShapeItem) {
        item.update_node(&mut self.tree, self.parent);
    }

    fn children(&self) -> Vec<NodeId> {
        self.tree.children(self.parent).to_vec()
    }

    fn fill<'a>(&'a self, item: &ShapeItem) -> Option<&'a FillNode> {
        item.fill_node().and_then(|id| self.tree.get::<FillNode>(id))
    }

    fn border<'a>(&'a self, item: &ShapeItem) -> Option<&'a BorderNode> {
        item.border_node().and_then(|id| self.tree.get::<BorderNode>(id))
    }
}

fn square_path() -> VectorPath {
    VectorPath::rect(Rect::from_xywh(0.0, 0.0, 10.0, 10.0))
}

fn shape(content: Rect) -> ShapeItem {
    let mut item = ShapeItem::new();
    item.set_path(square_path());
    item.set_geometry(content);
    item.set_fill(Color::RED, Color::RED);
    item.set_stroke(StrokeStyle::new(2.0, Color::BLACK).cosmetic(true));
    item
}

fn map(transform: Affine, x: f64, y: f64) -> KurboPoint {
    transform * KurboPoint::new(x, y)
}

#[test]
fn unchanged_inputs_keep_nodes() {
    let mut fx = Fixture::new();
    let mut item = shape(Rect::from_xywh(0.0, 0.0, 100.0, 100.0));

    fx.update(&mut item);
    let nodes = fx.children();
    let len = fx.tree.len();
    let fill_revision = fx.fill(&item).map(FillNode::revision);
    let border_revision = fx.border(&item).map(BorderNode::revision);
    let _ = fx.tree.drain_dirty().count();

    for _ in 0..3 {
        fx.update(&mut item);
    }
    assert_eq!(fx.children(), nodes);
    assert_eq!(fx.tree.len(), len);
    assert_eq!(fx.fill(&item).map(FillNode::revision), fill_revision);
    assert_eq!(fx.border(&item).map(BorderNode::revision), border_revision);
    assert!(!fx.tree.has_dirty());
}

#[test]
fn transparent_fill_has_no_node() {
    let mut fx = Fixture::new();
    let mut item = shape(Rect::from_xywh(0.0, 0.0, 100.0, 100.0));
    fx.update(&mut item);
    assert!(item.fill_node().is_some());

    item.set_fill_style(FillStyle::Solid(Color::RED.with_alpha(0)));
    fx.update(&mut item);
    assert!(item.fill_node().is_none());
    assert_eq!(fx.children(), vec![item.border_node().unwrap()]);
}

#[test]
fn cosmetic_border_keeps_device_width() {
    for content in [
        Rect::from_xywh(0.0, 0.0, 10.0, 10.0),
        Rect::from_xywh(0.0, 0.0, 400.0, 30.0),
        Rect::from_xywh(5.0, 5.0, 3.0, 90.0),
    ] {
        let mut fx = Fixture::new();
        let mut item = shape(content);
        fx.update(&mut item);
        let width = fx.border(&item).unwrap().device_width();
        assert!((width - 2.0).abs() < 1e-5, "width {width} for {content:?}");
    }
}

#[test]
fn non_cosmetic_border_scales_with_content() {
    let mut fx = Fixture::new();
    let mut item = shape(Rect::from_xywh(0.0, 0.0, 5.0, 20.0));
    item.set_stroke(StrokeStyle::new(4.0, Color::BLACK));
    fx.update(&mut item);

    let width = fx.border(&item).unwrap().device_width();
    assert!((width - 2.0).abs() < 1e-5);
}

#[test]
fn fill_is_inset_by_half_the_visible_stroke() {
    let mut fx = Fixture::new();
    let mut item = shape(Rect::from_xywh(0.0, 0.0, 100.0, 100.0));
    fx.update(&mut item);

    let fill = item.fill_transform(&fx.tree).unwrap();
    assert!((map(fill, 0.0, 0.0) - KurboPoint::new(1.0, 1.0)).hypot() < 1e-4);
    assert!((map(fill, 10.0, 10.0) - KurboPoint::new(99.0, 99.0)).hypot() < 1e-4);

    let border = fx.border(&item).unwrap().transform();
    assert!((map(border, 10.0, 10.0) - KurboPoint::new(100.0, 100.0)).hypot() < 1e-4);

    item.set_stroke(StrokeStyle::new(2.0, Color::TRANSPARENT));
    fx.update(&mut item);
    let fill = item.fill_transform(&fx.tree).unwrap();
    assert!((map(fill, 0.0, 0.0) - KurboPoint::new(0.0, 0.0)).hypot() < 1e-4);
    assert!(item.border_node().is_none());
}

#[test]
fn two_colors_give_gradient_anchored_at_content() {
    let mut fx = Fixture::new();
    let mut item = shape(Rect::from_xywh(10.0, 20.0, 100.0, 50.0));
    item.set_fill(Color::RED, Color::BLUE);
    fx.update(&mut item);

    assert_eq!(
        fx.fill(&item).unwrap().fill_paint(),
        Some(&FillPaint::LinearGradient(LinearGradient::two_stop(
            Point::new(10.0, 20.0),
            Point::new(110.0, 70.0),
            Color::RED,
            Color::BLUE,
        )))
    );

    item.set_fill(Color::GREEN, Color::GREEN);
    fx.update(&mut item);
    assert_eq!(
        fx.fill(&item).unwrap().fill_paint(),
        Some(&FillPaint::Solid(Color::GREEN))
    );
}

#[test]
fn fill_precedes_border_whatever_the_order_of_changes() {
    let mut fx = Fixture::new();
    let mut item = shape(Rect::from_xywh(0.0, 0.0, 50.0, 50.0));
    item.set_fill_style(FillStyle::default());
    fx.update(&mut item);
    assert_eq!(fx.children(), vec![item.border_node().unwrap()]);

    item.set_fill(Color::RED, Color::BLUE);
    fx.update(&mut item);
    assert_eq!(
        fx.children(),
        vec![item.fill_node().unwrap(), item.border_node().unwrap()]
    );

    item.set_stroke(StrokeStyle::none());
    fx.update(&mut item);
    item.set_stroke(StrokeStyle::new(1.0, Color::BLACK));
    fx.update(&mut item);
    assert_eq!(
        fx.children(),
        vec![item.fill_node().unwrap(), item.border_node().unwrap()]
    );
}

#[test]
fn empty_content_removes_both_nodes() {
    let mut fx = Fixture::new();
    let mut item = shape(Rect::from_xywh(0.0, 0.0, 50.0, 50.0));
    fx.update(&mut item);
    assert_eq!(fx.children().len(), 2);

    item.set_geometry(Rect::from_xywh(0.0, 0.0, 0.0, 10.0));
    fx.update(&mut item);
    assert!(item.fill_node().is_none());
    assert!(item.border_node().is_none());
    assert!(fx.children().is_empty());
}

#[test]
fn degenerate_path_removes_both_nodes() {
    let mut fx = Fixture::new();
    let mut item = shape(Rect::from_xywh(0.0, 0.0, 50.0, 50.0));
    fx.update(&mut item);

    let mut line = VectorPath::new();
    line.move_to(Point::new(0.0, 5.0));
    line.line_to(Point::new(10.0, 5.0));
    item.set_path(line);
    fx.update(&mut item);
    assert!(fx.children().is_empty());
}

#[test]
fn margins_shrink_the_content() {
    let mut fx = Fixture::new();
    let mut item = shape(Rect::from_xywh(0.0, 0.0, 100.0, 100.0));
    item.set_stroke(StrokeStyle::none());
    item.set_margins(10.0);
    assert_eq!(item.content_rect(), Rect::from_xywh(10.0, 10.0, 80.0, 80.0));

    fx.update(&mut item);
    let fill = item.fill_transform(&fx.tree).unwrap();
    assert!((map(fill, 0.0, 0.0) - KurboPoint::new(10.0, 10.0)).hypot() < 1e-4);

    item.set_margins(60.0);
    fx.update(&mut item);
    assert!(item.fill_node().is_none());
}

#[test]
fn removed_node_is_recreated() {
    let mut fx = Fixture::new();
    let mut item = shape(Rect::from_xywh(0.0, 0.0, 50.0, 50.0));
    fx.update(&mut item);
    let stale = item.fill_node().unwrap();

    fx.tree.remove(stale);
    fx.update(&mut item);
    let fresh = item.fill_node().unwrap();
    assert_ne!(fresh, stale);
    assert_eq!(fx.children()[0], fresh);
    assert_eq!(fx.children().len(), 2);
}

#[test]
fn new_item_adopts_tagged_nodes() {
    let mut fx = Fixture::new();
    let mut first = shape(Rect::from_xywh(0.0, 0.0, 50.0, 50.0));
    fx.update(&mut first);
    let nodes = fx.children();

    let mut second = shape(Rect::from_xywh(0.0, 0.0, 50.0, 50.0));
    fx.update(&mut second);
    assert_eq!(fx.children(), nodes);
    assert_eq!(second.fill_node(), first.fill_node());
    assert_eq!(second.border_node(), first.border_node());
}

#[test]
fn mutators_only_dirty_on_change() {
    let mut fx = Fixture::new();
    let mut item = shape(Rect::from_xywh(0.0, 0.0, 50.0, 50.0));
    assert!(item.is_dirty());
    fx.update(&mut item);
    assert!(!item.is_dirty());

    item.set_path(square_path());
    item.set_fill(Color::RED, Color::RED);
    item.set_geometry(Rect::from_xywh(0.0, 0.0, 50.0, 50.0));
    item.set_margins(0.0);
    item.set_stroke(StrokeStyle::new(2.0, Color::BLACK).cosmetic(true));
    assert!(!item.is_dirty());

    item.set_margins(1.0);
    assert!(item.is_dirty());
}

#[test]
fn presets_and_strings_fail_without_side_effects() {
    let mut item = shape(Rect::from_xywh(0.0, 0.0, 50.0, 50.0));
    let mut presets = PresetTable::new();
    presets.insert(
        "dawn",
        vec![
            GradientStop::new(0.0, Color::ORANGE),
            GradientStop::new(0.5, Color::WHITE),
            GradientStop::new(1.0, Color::BLUE),
        ],
    );

    item.set_fill_preset(&presets, "dawn").unwrap();
    assert_eq!(item.fill().colors(), (Color::ORANGE, Color::BLUE));

    assert!(item.set_fill_preset(&presets, "dusk").is_err());
    assert!(item.set_fill_hex("#000000", "nope").is_err());
    assert!(item.set_path_svg("M0,0 X1,1").is_err());
    assert_eq!(item.fill().colors(), (Color::ORANGE, Color::BLUE));
    assert_eq!(item.path(), &square_path());

    item.set_fill_hex("#FF0000", "0x0000FF").unwrap();
    assert_eq!(
        item.fill().colors(),
        (Color::rgb(255, 0, 0), Color::rgb(0, 0, 255))
    );
}

#[test]
fn release_removes_nodes() {
    let mut fx = Fixture::new();
    let mut item = shape(Rect::from_xywh(0.0, 0.0, 50.0, 50.0));
    fx.update(&mut item);

    item.release(&mut fx.tree);
    assert!(fx.children().is_empty());
    assert!(item.fill_node().is_none());
    assert!(item.is_dirty());
}

#[test]
fn moving_to_another_parent_removes_old_nodes() {
    let mut fx = Fixture::new();
    let root = fx.tree.root().unwrap();
    let other = fx.tree.append_child(root, Box::new(GroupNode));
    let mut item = shape(Rect::from_xywh(0.0, 0.0, 50.0, 50.0));

    fx.update(&mut item);
    assert_eq!(fx.children().len(), 2);

    item.update_node(&mut fx.tree, other);
    assert!(fx.children().is_empty());
    assert_eq!(
        fx.tree.children(other),
        &[item.fill_node().unwrap(), item.border_node().unwrap()]
    );
}
