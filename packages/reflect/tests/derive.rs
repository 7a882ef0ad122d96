//! `#[derive(Reflect)]` against the runtime traits.

use dtomap_reflect::{
    Introspect, Reflect, ReflectError, TypeRegistry, Value, Visibility,
};

mod cents {
    use dtomap_reflect::{ReflectError, Value};

    pub fn to_value(amount: &u64) -> Result<Value, ReflectError> {
        i64::try_from(*amount)
            .map(Value::Integer)
            .map_err(|_| ReflectError::failed("amount out of range"))
    }

    pub fn from_value(value: Value) -> Result<u64, ReflectError> {
        let amount: i64 = value.into_typed()?;
        u64::try_from(amount).map_err(|_| ReflectError::failed("negative amount"))
    }
}

#[derive(Reflect)]
#[reflect(
    name = "shop::Order",
    blank = Order::blank,
    getters(summary),
    try_getters(checksum),
    setters(rename),
    try_setters(set_quantity),
)]
pub struct Order {
    pub reference: String,
    pub(crate) note: Option<String>,
    quantity: i64,
    tags: Vec<String>,
    #[reflect(with = cents)]
    total: u64,
    r#type: String,
    #[reflect(skip)]
    cache: Vec<u8>,
}

impl Order {
    fn blank() -> Self {
        Order {
            reference: String::new(),
            note: None,
            quantity: 0,
            tags: Vec::new(),
            total: 0,
            r#type: "retail".to_string(),
            cache: vec![1, 2, 3],
        }
    }

    fn summary(&self) -> String {
        format!("{} x{}", self.reference, self.quantity)
    }

    fn checksum(&self) -> Result<i64, String> {
        if self.reference.is_empty() {
            Err("no reference".to_string())
        } else {
            Ok(self.reference.len() as i64 + self.quantity)
        }
    }

    fn rename(&mut self, reference: String) {
        self.reference = reference;
    }

    fn set_quantity(&mut self, quantity: i64) -> Result<(), &'static str> {
        if quantity < 0 {
            return Err("quantity must not be negative");
        }
        self.quantity = quantity;
        Ok(())
    }
}

#[derive(Default, Reflect)]
struct Plain {
    count: i64,
}

#[derive(Default, Reflect)]
struct Marker;

// ==================== Fields ====================

#[test]
fn fields_read_and_write() {
    let mut order = Order::blank();
    order.set_field("reference", Value::from("A-1")).unwrap();
    order.set_field("note", Value::from("fragile")).unwrap();
    order.set_field("quantity", Value::from(3)).unwrap();
    order
        .set_field("tags", Value::from(vec!["gift", "express"]))
        .unwrap();

    assert_eq!(order.reference, "A-1");
    assert_eq!(order.note.as_deref(), Some("fragile"));
    assert_eq!(order.field("quantity").unwrap(), Value::Integer(3));
    assert_eq!(
        order.field("tags").unwrap(),
        Value::from(vec!["gift", "express"])
    );
}

#[test]
fn optional_field_accepts_null() {
    let mut order = Order::blank();
    order.note = Some("old".to_string());
    order.set_field("note", Value::Null).unwrap();
    assert_eq!(order.note, None);
    assert_eq!(order.field("note").unwrap(), Value::Null);
}

#[test]
fn field_values_are_not_coerced() {
    let mut order = Order::blank();
    let err = order.set_field("quantity", Value::from("3")).unwrap_err();
    assert!(matches!(err, ReflectError::TypeMismatch { .. }));
    assert_eq!(order.quantity, 0);
}

#[test]
fn with_module_converts_the_field() {
    let mut order = Order::blank();
    order.set_field("total", Value::from(1250)).unwrap();
    assert_eq!(order.total, 1250);
    assert_eq!(order.field("total").unwrap(), Value::Integer(1250));

    let err = order.set_field("total", Value::from(-5)).unwrap_err();
    assert_eq!(err, ReflectError::failed("negative amount"));
}

#[test]
fn raw_identifiers_drop_their_prefix() {
    let mut order = Order::blank();
    assert_eq!(order.field("type").unwrap(), Value::from("retail"));
    order.set_field("type", Value::from("wholesale")).unwrap();
    assert_eq!(order.r#type, "wholesale");
}

#[test]
fn skipped_fields_are_unreachable() {
    let mut order = Order::blank();
    assert!(matches!(
        order.field("cache"),
        Err(ReflectError::NoSuchField { .. })
    ));
    assert!(matches!(
        order.set_field("cache", Value::Bytes(vec![9])),
        Err(ReflectError::NoSuchField { .. })
    ));
    assert_eq!(order.cache, vec![1, 2, 3]);

    let descriptor = Order::describe().unwrap();
    assert!(descriptor.shape().field("cache").is_none());
}

#[test]
fn unknown_members_are_reported() {
    let mut order = Order::blank();
    let err = order.field("missing").unwrap_err();
    match err {
        ReflectError::NoSuchField { type_name, name } => {
            assert!(type_name.ends_with("Order"));
            assert_eq!(name, "missing");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(matches!(
        order.call("missing"),
        Err(ReflectError::NoSuchMethod { .. })
    ));
    assert!(matches!(
        order.call_with("missing", Value::Null),
        Err(ReflectError::NoSuchMethod { .. })
    ));
}

// ==================== Methods ====================

#[test]
fn getters_and_setters_dispatch() {
    let mut order = Order::blank();
    order.call_with("rename", Value::from("B-7")).unwrap();
    order.call_with("set_quantity", Value::from(2)).unwrap();

    assert_eq!(order.call("summary").unwrap(), Value::from("B-7 x2"));
    assert_eq!(order.call("checksum").unwrap(), Value::Integer(5));
}

#[test]
fn fallible_methods_report_failure() {
    let mut order = Order::blank();
    assert_eq!(
        order.call("checksum").unwrap_err(),
        ReflectError::failed("no reference")
    );
    assert_eq!(
        order.call_with("set_quantity", Value::from(-1)).unwrap_err(),
        ReflectError::failed("quantity must not be negative")
    );
    assert_eq!(order.quantity, 0);
}

#[test]
fn setter_argument_is_not_coerced() {
    let mut order = Order::blank();
    let err = order.call_with("rename", Value::from(7)).unwrap_err();
    assert!(matches!(err, ReflectError::TypeMismatch { .. }));
}

#[test]
fn methods_are_not_fields() {
    let order = Order::blank();
    assert!(matches!(
        order.field("summary"),
        Err(ReflectError::NoSuchField { .. })
    ));
}

// ==================== Descriptor ====================

#[test]
fn descriptor_lists_every_member() {
    let descriptor = Order::describe().unwrap();
    assert_eq!(descriptor.name(), "shop::Order");

    let fields: Vec<&str> = descriptor.fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        fields,
        vec!["reference", "note", "quantity", "tags", "total", "type"]
    );

    let shape = descriptor.shape();
    assert_eq!(shape.method("summary", 0), Some(Visibility::Public));
    assert_eq!(shape.method("checksum", 0), Some(Visibility::Public));
    assert_eq!(shape.method("rename", 1), Some(Visibility::Public));
    assert_eq!(shape.method("set_quantity", 1), Some(Visibility::Public));
    assert_eq!(shape.method("rename", 0), None);
}

#[test]
fn field_visibility_follows_the_declaration() {
    let shape = Order::describe().unwrap().shape();
    assert_eq!(shape.field("reference"), Some(Visibility::Public));
    assert_eq!(shape.field("note"), Some(Visibility::Protected));
    assert_eq!(shape.field("quantity"), Some(Visibility::Private));
}

#[test]
fn blank_constructor_is_used() {
    let descriptor = Order::describe().unwrap();
    let blank = descriptor.instantiate();
    assert_eq!(blank.field("type").unwrap(), Value::from("retail"));
    assert!(blank.is::<Order>());
}

#[test]
fn defaults_use_module_path_and_default() {
    let descriptor = Plain::describe().unwrap();
    assert_eq!(descriptor.name(), concat!(module_path!(), "::Plain"));
    assert_eq!(
        descriptor.instantiate().field("count").unwrap(),
        Value::Integer(0)
    );
}

#[test]
fn unit_struct_has_no_members() {
    let descriptor = Marker::describe().unwrap();
    assert!(descriptor.fields().is_empty());
    assert!(descriptor.methods().is_empty());

    let mut marker = Marker;
    assert!(matches!(
        marker.set_field("anything", Value::Null),
        Err(ReflectError::NoSuchField { .. })
    ));
    assert!(matches!(
        marker.call("anything"),
        Err(ReflectError::NoSuchMethod { .. })
    ));
}

#[test]
fn every_declared_member_is_reachable() {
    let descriptor = Order::describe().unwrap();
    let mut instance = descriptor.instantiate();

    for field in descriptor.fields() {
        let value = instance.field(field.name.as_str()).unwrap();
        instance.set_field(field.name.as_str(), value).unwrap();
    }
    for method in descriptor.methods() {
        let outcome = match method.arity {
            0 => instance.call(method.name.as_str()).map(drop),
            _ => instance.call_with(method.name.as_str(), Value::Null),
        };
        assert!(
            !matches!(outcome, Err(ReflectError::NoSuchMethod { .. })),
            "{} is declared but not dispatched",
            method.name
        );
    }
}

#[test]
fn derived_types_register() {
    let mut registry = TypeRegistry::new();
    registry.register::<Order>().unwrap().register::<Plain>().unwrap();
    assert!(registry.contains("shop::Order"));
    assert_eq!(registry.len(), 2);
}
