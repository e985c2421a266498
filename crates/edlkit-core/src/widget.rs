//! Leaf widgets and their rendering attributes.
//!
//! A [`Widget`] is a rectangle plus what the renderer needs to draw it: the
//! name of its template and a bag of attributes. Widgets own no children.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{LayoutError, LayoutResult};
use crate::font::Font;
use crate::geometry::{Point, Rect};

/// EDM colour palette index.
pub type ColorIndex = u16;

/// Default foreground colour index (black in the stock palette).
pub const DEFAULT_FOREGROUND: ColorIndex = 14;

/// Default background colour index (light grey in the stock palette).
pub const DEFAULT_BACKGROUND: ColorIndex = 3;

/// Show or hide a widget depending on a process variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visibility {
    /// Process variable name.
    pub pv: String,
    /// Lower bound of the visible range.
    #[serde(default)]
    pub min: f64,
    /// Upper bound of the visible range.
    #[serde(default = "default_visibility_max")]
    pub max: f64,
    /// Hide inside the range instead of outside it.
    #[serde(default)]
    pub inverted: bool,
}

fn default_visibility_max() -> f64 {
    1.0
}

impl Visibility {
    /// Visible while `pv` is in `[0, 1)`.
    pub fn new(pv: impl Into<String>) -> Self {
        Self {
            pv: pv.into(),
            min: 0.0,
            max: default_visibility_max(),
            inverted: false,
        }
    }

    /// Set the visible range.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Invert the range.
    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }
}

/// One rendering-relevant property of a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Flag.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Free text.
    Text(String),
    /// Palette colour.
    Color(ColorIndex),
    /// Font.
    Font(Font),
    /// PV-driven visibility.
    Visibility(Visibility),
}

impl AttributeValue {
    /// The value as seen by templates.
    ///
    /// Fonts expand to an object carrying their `tag`.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Bool(b) => json!(b),
            Self::Int(i) => json!(i),
            Self::Text(s) => json!(s),
            Self::Color(c) => json!(c),
            Self::Font(font) => json!({
                "tag": font.tag(),
                "family": font.font.as_str(),
                "size": font.size(),
                "bold": font.bold,
                "italicized": font.italicized,
            }),
            Self::Visibility(vis) => json!({
                "pv": vis.pv,
                "min": vis.min,
                "max": vis.max,
                "inverted": vis.inverted,
            }),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Font> for AttributeValue {
    fn from(value: Font) -> Self {
        Self::Font(value)
    }
}

impl From<Visibility> for AttributeValue {
    fn from(value: Visibility) -> Self {
        Self::Visibility(value)
    }
}

/// Attributes keyed by name, iterated in name order.
pub type Attributes = BTreeMap<String, AttributeValue>;

/// Template names of the stock widgets.
pub mod templates {
    /// Background screen definition.
    pub const SCREEN: &str = "screen.edl";
    /// Rectangle shape.
    pub const RECTANGLE: &str = "rectangle.edl";
    /// Circle shape.
    pub const CIRCLE: &str = "circle.edl";
    /// Static text.
    pub const TEXT: &str = "text.edl";
}

/// A leaf element of a screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    name: String,
    template: String,
    rect: Rect,
    attributes: Attributes,
}

impl Widget {
    /// Create a widget rendered by `template`, at the origin with zero size.
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            rect: Rect::ZERO,
            attributes: Attributes::new(),
        }
    }

    /// A rectangle outline, optionally filled.
    pub fn rectangle(name: impl Into<String>) -> Self {
        Self::shape(name, templates::RECTANGLE)
    }

    /// A circle outline, optionally filled.
    pub fn circle(name: impl Into<String>) -> Self {
        Self::shape(name, templates::CIRCLE)
    }

    fn shape(name: impl Into<String>, template: &str) -> Self {
        Self::new(name, template)
            .with_size(50, 50)
            .with_attribute("line_color", AttributeValue::Color(DEFAULT_FOREGROUND))
            .with_attribute("line_width", 1)
            .with_attribute("fill", false)
            .with_attribute("fill_color", AttributeValue::Color(DEFAULT_BACKGROUND))
    }

    /// A static text label.
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, templates::TEXT)
            .with_size(100, 20)
            .with_attribute("text", text.into())
            .with_attribute("font", Font::new())
            .with_attribute("fg_color", AttributeValue::Color(DEFAULT_FOREGROUND))
    }

    /// The background screen definition.
    pub fn screen(w: i32, h: i32) -> Self {
        Self::new("screen", templates::SCREEN)
            .with_size(w, h)
            .with_attribute("title", "")
            .with_attribute("font", Font::new())
            .with_attribute("fg_color", AttributeValue::Color(DEFAULT_FOREGROUND))
            .with_attribute("bg_color", AttributeValue::Color(DEFAULT_BACKGROUND))
            .with_attribute("grid_size", 5)
    }

    /// Identifier used in diagnostics.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the widget.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Template file this widget renders through.
    #[inline]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Swap the template.
    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
    }

    /// Current geometry.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Left edge.
    #[inline]
    pub fn x(&self) -> i32 {
        self.rect.x
    }

    /// Top edge.
    #[inline]
    pub fn y(&self) -> i32 {
        self.rect.y
    }

    /// Width.
    #[inline]
    pub fn w(&self) -> i32 {
        self.rect.w
    }

    /// Height.
    #[inline]
    pub fn h(&self) -> i32 {
        self.rect.h
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> i32 {
        self.rect.right()
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.rect.bottom()
    }

    /// Centre point.
    #[inline]
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// Set the left edge.
    pub fn set_x(&mut self, x: i32) {
        self.rect.x = x;
    }

    /// Set the top edge.
    pub fn set_y(&mut self, y: i32) {
        self.rect.y = y;
    }

    /// Set both dimensions.
    pub fn set_size(&mut self, w: i32, h: i32) -> LayoutResult<()> {
        if w < 0 || h < 0 {
            return Err(LayoutError::NegativeSize { w, h });
        }
        self.rect.w = w;
        self.rect.h = h;
        Ok(())
    }

    /// Set the width.
    pub fn set_width(&mut self, w: i32) -> LayoutResult<()> {
        self.set_size(w, self.rect.h)
    }

    /// Set the height.
    pub fn set_height(&mut self, h: i32) -> LayoutResult<()> {
        self.set_size(self.rect.w, h)
    }

    /// Builder-style position.
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.rect.x = x;
        self.rect.y = y;
        self
    }

    /// Builder-style size. Negative values are clamped to zero.
    pub fn with_size(mut self, w: i32, h: i32) -> Self {
        self.rect.w = w.max(0);
        self.rect.h = h.max(0);
        self
    }

    /// Builder-style geometry.
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = Rect::new(rect.x, rect.y, rect.w, rect.h);
        self
    }

    /// All attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Look up an attribute.
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Set an attribute, returning the previous value.
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.attributes.insert(key.into(), value.into())
    }

    /// Remove an attribute.
    pub fn remove_attribute(&mut self, key: &str) -> Option<AttributeValue> {
        self.attributes.remove(key)
    }

    /// Builder-style [`set_attribute`](Self::set_attribute).
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Template context for this widget.
    ///
    /// Geometry keys (`x`, `y`, `w`, `h`, `right`, `bottom`, `center_x`,
    /// `center_y`) sit next to the attributes; `name` is always present.
    pub fn context(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (key, value) in &self.attributes {
            map.insert(key.clone(), value.to_value());
        }

        let center = self.center();
        map.insert("name".into(), json!(self.name));
        map.insert("x".into(), json!(self.rect.x));
        map.insert("y".into(), json!(self.rect.y));
        map.insert("w".into(), json!(self.rect.w));
        map.insert("h".into(), json!(self.rect.h));
        map.insert("right".into(), json!(self.right()));
        map.insert("bottom".into(), json!(self.bottom()));
        map.insert("center_x".into(), json!(center.x));
        map.insert("center_y".into(), json!(center.y));

        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_widget_geometry() {
        let widget = Widget::new("box", "rectangle.edl").with_position(10, 20).with_size(30, 40);
        assert_eq!(widget.rect(), Rect::new(10, 20, 30, 40));
        assert_eq!(widget.right(), 40);
        assert_eq!(widget.bottom(), 60);
        assert_eq!(widget.center(), Point::new(25, 40));
    }

    #[test]
    fn test_negative_size_rejected() {
        let mut widget = Widget::rectangle("r");
        let err = widget.set_width(-1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(widget.w(), 50);
    }

    #[test]
    fn test_stock_shapes() {
        let rect = Widget::rectangle("r");
        assert_eq!(rect.template(), templates::RECTANGLE);
        assert_eq!(rect.attribute("fill"), Some(&AttributeValue::Bool(false)));

        let circle = Widget::circle("c");
        assert_eq!(circle.template(), templates::CIRCLE);
        assert_eq!(circle.attribute("line_width"), Some(&AttributeValue::Int(1)));
    }

    #[test]
    fn test_context_contains_geometry_and_attributes() {
        let mut widget = Widget::text("label", "Hello").with_position(5, 6);
        widget.set_attribute("visibility", Visibility::new("SYS:ON").inverted());

        let ctx = widget.context();
        assert_eq!(ctx["name"], "label");
        assert_eq!(ctx["x"], 5);
        assert_eq!(ctx["right"], 105);
        assert_eq!(ctx["text"], "Hello");
        assert_eq!(ctx["font"]["tag"], "helvetica-medium-r-18.0");
        assert_eq!(ctx["visibility"]["pv"], "SYS:ON");
        assert_eq!(ctx["visibility"]["inverted"], true);
    }
}
