//! Fixtures shared by the unit tests of this crate.

use dtomap_reflect::{Reflect, TypeRegistry};

use crate::ClassMetadata;

pub(crate) const WIDGET: &str = "test::Widget";
pub(crate) const WIDGET_DTO: &str = "test::WidgetDto";

/// Original-side fixture. Its only public constructor needs arguments.
#[derive(Debug, PartialEq, Reflect)]
#[reflect(
    name = WIDGET,
    blank = Widget::blank,
    getters(tag, summary),
    try_getters(explode),
    setters(set_secret)
)]
pub(crate) struct Widget {
    label: String,
    count: i64,
    pub(crate) tag: String,
    secret: String,
}

impl Widget {
    pub(crate) fn new(label: &str, count: i64) -> Self {
        Widget {
            label: label.to_string(),
            count,
            tag: "plain".to_string(),
            secret: String::new(),
        }
    }

    fn blank() -> Self {
        Widget {
            label: String::new(),
            count: 0,
            tag: String::new(),
            secret: String::new(),
        }
    }

    pub(crate) fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn count(&self) -> i64 {
        self.count
    }

    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }

    fn tag(&self) -> String {
        self.tag.to_uppercase()
    }

    fn summary(&self) -> String {
        format!("{} x{}", self.label, self.count)
    }

    fn explode(&self) -> Result<String, String> {
        Err("boom".to_string())
    }

    pub(crate) fn set_secret(&mut self, secret: String) {
        self.secret = format!("hidden:{}", secret);
    }
}

/// DTO-side fixture.
#[derive(Debug, Default, PartialEq, Reflect)]
#[reflect(name = WIDGET_DTO)]
pub(crate) struct WidgetDto {
    pub(crate) label: Option<String>,
    pub(crate) count: Option<i64>,
    pub(crate) tag: Option<String>,
    pub(crate) summary: Option<String>,
    pub(crate) secret: Option<String>,
}

pub(crate) fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry
        .register::<Widget>()
        .and_then(|r| r.register::<WidgetDto>())
        .unwrap();
    registry
}

pub(crate) fn metadata() -> ClassMetadata {
    ClassMetadata::new(&registry(), WIDGET, WIDGET_DTO).unwrap()
}
