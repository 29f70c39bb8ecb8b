use jiff::civil::DateTime;
use keel::{codec, Datum, Entity, Relation, Scalar, View};
use pretty_assertions::assert_eq;
use tests::{models, orm};

#[derive(Debug, Clone, Default, PartialEq, Entity)]
struct Address {
    #[orm(spec = "Code key", view = "detail")]
    code: u32,

    #[orm(spec = "City", view = "detail")]
    city: String,
}

#[derive(Debug, Clone, Default, PartialEq, Entity)]
struct Customer {
    #[orm(spec = "ID key snowflake", view = "detail")]
    id: u64,

    #[orm(spec = "Token uuid")]
    token: String,

    #[orm(spec = "Joined datetime")]
    joined: Option<DateTime>,

    #[orm(spec = "Home", view = "detail")]
    home: Address,

    #[orm(spec = "Work")]
    work: Option<Box<Address>>,

    #[orm(spec = "Visited")]
    visited: Vec<Address>,

    #[orm(spec = "Previous")]
    previous: Option<Vec<Address>>,
}

#[derive(Debug, Clone, Default, PartialEq, Entity)]
struct Inner {
    #[orm(spec = "ID key")]
    id: i64,

    #[orm(spec = "N")]
    n: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Entity)]
struct Outer {
    #[orm(spec = "ID key", view = "detail")]
    id: i64,

    #[orm(spec = "Inner", view = "detail")]
    inner: Inner,
}

fn address(code: u32, city: &str) -> Address {
    Address {
        code,
        city: city.to_string(),
    }
}

fn customer() -> Customer {
    Customer {
        id: 42,
        token: "t-1".to_string(),
        joined: Some(jiff::civil::date(2024, 3, 9).at(8, 30, 0, 0)),
        home: address(1, "Lyon"),
        work: Some(Box::new(address(2, "Paris"))),
        visited: vec![address(3, "Oslo"), address(4, "Rome")],
        previous: None,
    }
}

// ---------------------------------------------------------------------------
// Structure
// ---------------------------------------------------------------------------

#[test]
fn nested_templates_are_attached() {
    let orm = orm();
    let model = orm.model(&customer(), &View::Origin).unwrap();

    let home = model.field("Home").unwrap();
    assert!(home.ty().is_struct());
    assert_eq!(home.ty().pkg_key(), "nested/Address");
    assert_eq!(home.ty().template().unwrap().primary_field().name(), "Code");

    let visited = model.field("Visited").unwrap();
    assert!(visited.ty().is_slice());
    assert!(!visited.ty().is_basic());
    assert!(visited.ty().elem().template().is_some());

    assert!(orm.cache().contains("nested/Address"));
    assert!(orm.cache().contains("nested/Customer"));
}

#[test]
fn relations() {
    let orm = orm();
    let model = orm.model(&customer(), &View::Origin).unwrap();

    let relation = |name: &str| model.field(name).unwrap().relation();
    assert_eq!(relation("ID"), None);
    assert_eq!(relation("Joined"), None);
    assert_eq!(relation("Home"), Some(Relation::EmbeddedOne));
    assert_eq!(relation("Work"), Some(Relation::ReferencedOne));
    assert_eq!(relation("Visited"), Some(Relation::EmbeddedMany));
    assert_eq!(relation("Previous"), Some(Relation::ReferencedMany));
}

#[test]
fn nested_values() {
    let orm = orm();
    let model = orm.model(&customer(), &View::Origin).unwrap();

    let home = model.get("Home").and_then(Datum::as_struct).unwrap();
    assert_eq!(home.get("City"), Some(&Datum::from("Lyon")));

    let visited = model.get("Visited").and_then(Datum::as_list).unwrap();
    assert_eq!(visited.len(), 2);
    assert!(model.field("Previous").unwrap().value().is_nil());
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[test]
fn detail_view_on_nested_fields() {
    let orm = orm();
    let model = orm.model(&customer(), &View::detail()).unwrap();

    let home = model.get("Home").and_then(Datum::as_struct).unwrap();
    assert_eq!(home.get("Code"), Some(&Datum::U32(1)));

    assert!(model.field("Work").unwrap().value().is_nil());
    assert!(model.field("Joined").unwrap().value().is_nil());
    assert_eq!(model.get("Visited"), Some(&Datum::List(vec![])));
    assert_eq!(model.get("Token"), Some(&Datum::from("")));
}

#[test]
fn detail_view_keeps_optional_zero_in_nested_record() {
    let orm = orm();
    let outer = Outer {
        id: 1,
        inner: Inner { id: 0, n: Some(0) },
    };

    let model = orm.model(&outer, &View::detail()).unwrap();
    let back: Outer = orm.local().interface(&model).unwrap();

    assert_eq!(back, outer);
}

#[test]
fn meta_view_resets_nested_records() {
    let orm = orm();
    let model = orm.model(&customer(), &View::Meta).unwrap();

    let home = model.get("Home").and_then(Datum::as_struct).unwrap();
    assert_eq!(home.get("Code"), Some(&Datum::U32(0)));
    assert_eq!(home.get("City"), Some(&Datum::from("")));
    assert!(model.field("Work").unwrap().value().is_nil());
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

#[test]
fn nested_records_encode_as_keys() {
    let orm = orm();
    let model = orm.model(&customer(), &View::Origin).unwrap();

    let home = codec::encode(model.field("Home").unwrap().value()).unwrap();
    assert_eq!(home, Scalar::U32(1));

    let visited = codec::encode(model.field("Visited").unwrap().value()).unwrap();
    assert_eq!(visited, Scalar::from("[3,4]"));

    let joined = codec::encode(model.field("Joined").unwrap().value()).unwrap();
    assert_eq!(joined, Scalar::from("2024-03-09 08:30:00"));

    let previous = codec::encode(model.field("Previous").unwrap().value()).unwrap();
    assert_eq!(previous, Scalar::Null);
}

#[test]
fn nested_key_decodes_into_fresh_record() {
    let orm = orm();
    let model = orm.model(&customer(), &View::Origin).unwrap();
    let ty = model.field("Home").unwrap().ty();

    let value = codec::decode(&Scalar::U32(9), ty).unwrap();
    let home = value.get().and_then(Datum::as_struct).unwrap();
    assert_eq!(home.get("Code"), Some(&Datum::U32(9)));
    assert_eq!(home.get("City"), Some(&Datum::from("")));
}

// ---------------------------------------------------------------------------
// Back to records
// ---------------------------------------------------------------------------

#[test]
fn interface_round_trip() {
    let orm = orm();
    let model = orm.model(&customer(), &View::Origin).unwrap();

    let back: Customer = orm.local().interface(&model).unwrap();
    assert_eq!(back, customer());
}

#[test]
fn append_to_nested_sequence() {
    use keel::Provider;

    let orm = orm();
    let local = orm.local();
    let mut model = orm.model(&customer(), &View::Origin).unwrap();

    let item = local.get_entity_value(&address(5, "Bern")).unwrap();
    let previous = model.field_mut("Previous").unwrap().value_mut();
    Provider::<Customer>::append_sequence_value(local, previous, item).unwrap();

    let back: Customer = local.interface(&model).unwrap();
    assert_eq!(back.previous, Some(vec![address(5, "Bern")]));
}

// ---------------------------------------------------------------------------
// Generated values
// ---------------------------------------------------------------------------

#[test]
fn generate_fills_empty_fields() {
    let orm = models!(Customer).snowflake_node(5).build().unwrap();
    let mut model = orm.model(&Customer::default(), &View::Origin).unwrap();

    orm.generate(&mut model).unwrap();

    let Some(&Datum::U64(id)) = model.get("ID") else {
        panic!("expected a snowflake id, got {:?}", model.get("ID"));
    };
    assert_ne!(id, 0);
    assert_eq!((id >> 12) & 0x3FF, 5);

    let token = model.get("Token").and_then(Datum::as_str).unwrap();
    assert_eq!(token.len(), 36);

    let Some(&Datum::DateTime(joined)) = model.get("Joined") else {
        panic!("expected a timestamp, got {:?}", model.get("Joined"));
    };
    assert_eq!(joined.subsec_nanosecond(), 0);
    assert!(joined.year() >= 2024);

    let back: Customer = orm.local().interface(&model).unwrap();
    assert_eq!(back.id, id);
}

#[test]
fn generate_keeps_present_values() {
    let orm = orm();
    let mut model = orm.model(&customer(), &View::Origin).unwrap();

    orm.generate(&mut model).unwrap();

    assert_eq!(model.get("ID"), Some(&Datum::U64(42)));
    assert_eq!(model.get("Token"), Some(&Datum::from("t-1")));
}
