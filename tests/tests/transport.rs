use jiff::civil::DateTime;
use keel::{provider::ObjectValue, Datum, Entity, Model, Provider, Remote, Source, View};
use pretty_assertions::assert_eq;
use tests::{orm, transport};

#[derive(Debug, Clone, Default, PartialEq, Entity)]
struct Place {
    #[orm(spec = "code key")]
    code: u32,

    #[orm(spec = "city", view = "detail")]
    city: String,
}

#[derive(Debug, Clone, Default, PartialEq, Entity)]
struct Person {
    #[orm(spec = "id key", view = "detail,lite")]
    id: i64,

    #[orm(spec = "active", view = "detail")]
    active: bool,

    #[orm(spec = "age", view = "lite")]
    age: u8,

    #[orm(spec = "balance")]
    balance: i32,

    #[orm(spec = "weight", view = "detail")]
    weight: f32,

    #[orm(spec = "name", view = "detail,lite", constraint = "required")]
    name: String,

    #[orm(spec = "nickname")]
    nickname: Option<String>,

    #[orm(spec = "born", view = "detail")]
    born: DateTime,

    #[orm(spec = "home", view = "detail")]
    home: Place,

    #[orm(spec = "work")]
    work: Option<Place>,

    #[orm(spec = "trips", view = "detail")]
    trips: Vec<Place>,

    #[orm(spec = "scores")]
    scores: Vec<i16>,

    notes: String,
}

fn person() -> Person {
    Person {
        id: 11,
        active: true,
        age: 34,
        balance: -250,
        weight: 61.25,
        name: "ada".to_string(),
        nickname: None,
        born: jiff::civil::date(1990, 12, 10).at(6, 0, 0, 0),
        home: Place {
            code: 1,
            city: "Berlin".to_string(),
        },
        work: None,
        trips: vec![
            Place {
                code: 2,
                city: "Oslo".to_string(),
            },
            Place {
                code: 3,
                city: "Rome".to_string(),
            },
        ],
        scores: vec![3, 9],
        notes: "local only".to_string(),
    }
}

fn values(model: &Model) -> Vec<Option<Datum>> {
    model.fields().map(|field| field.value().get().cloned()).collect()
}

// ---------------------------------------------------------------------------
// Cross-binding equivalence
// ---------------------------------------------------------------------------

#[test]
fn remote_model_equals_local_model() {
    let sender = orm();
    let object = transport(&sender.object(&person()).unwrap());

    for view in [View::Origin, View::detail(), View::lite(), View::Meta] {
        let expected = sender.model(&person(), &view).unwrap();

        // A fresh handle has never seen `Person`
        let receiver = orm();
        let actual = receiver.remote().get_entity_model(&object, &view).unwrap();

        assert_eq!(actual, expected, "view {view}");
        assert_eq!(values(&actual), values(&expected), "view {view}");
    }
}

#[test]
fn remote_types_match_local_types() {
    let sender = orm();
    let object = transport(&sender.object(&person()).unwrap());

    let receiver = orm();
    let remote_ty = receiver.remote().get_entity_type(&object).unwrap();
    let local_ty = sender.local().get_entity_type(&person()).unwrap();

    assert_eq!(remote_ty, local_ty);
    assert!(receiver.cache().contains("transport/Place"));
    assert!(receiver.cache().contains("transport/Person"));
}

#[test]
fn nil_nested_record_keeps_its_template() {
    let sender = orm();
    let object = transport(&sender.object(&person()).unwrap());

    let receiver = orm();
    let model = receiver.remote().get_entity_model(&object, &View::Origin).unwrap();

    let work = model.field("work").unwrap();
    assert!(work.value().is_nil());
    assert_eq!(work.ty().template().unwrap().pkg_key(), "transport/Place");
}

// ---------------------------------------------------------------------------
// Back to native records
// ---------------------------------------------------------------------------

#[test]
fn peer_rebuilds_native_record() {
    let sender = orm();
    let object = transport(&sender.object(&person()).unwrap());

    let receiver = orm();
    let rebuilt: Person = receiver.entity(&object).unwrap();

    assert_eq!(
        rebuilt,
        Person {
            notes: String::new(),
            ..person()
        }
    );
}

#[test]
fn peer_datetimes_keep_whole_seconds() {
    let sender = orm();
    let original = Person {
        born: jiff::civil::date(2024, 1, 2).at(3, 4, 5, 123_000_000),
        ..person()
    };
    let object = transport(&sender.object(&original).unwrap());

    let rebuilt: Person = orm().entity(&object).unwrap();
    assert_eq!(rebuilt.born, jiff::civil::date(2024, 1, 2).at(3, 4, 5, 0));
}

#[test]
fn renamed_peer_field_leaves_native_record_intact() {
    let mut object = transport(&orm().object(&person()).unwrap());
    for field in &mut object.fields {
        if field.name == "name" {
            field.name = "title".to_string();
        }
    }

    // The peer's description is accepted on its own terms first
    let receiver = orm();
    let model = receiver.remote().get_entity_model(&object, &View::Origin).unwrap();
    assert_eq!(model.get("title"), Some(&Datum::from("ada")));
    assert_eq!(receiver.cache().source("transport/Person"), Some(Source::Remote));

    let model = receiver.model(&person(), &View::Origin).unwrap();
    assert_eq!(model.get("name"), Some(&Datum::from("ada")));
    assert_eq!(receiver.cache().source("transport/Person"), Some(Source::Native));

    let err = receiver.entity::<Person>(&object).unwrap_err();
    assert!(err.is_shape_mismatch());
}

#[test]
fn remote_interface_rebuilds_object() {
    let sender = orm();
    let object = sender.object(&person()).unwrap();

    let receiver = orm();
    let model = receiver.remote().get_entity_model(&object, &View::Origin).unwrap();
    assert_eq!(receiver.remote().interface(&model).unwrap(), object);
}

#[test]
fn view_applied_before_sending() {
    let sender = orm();
    let model = sender.model(&person(), &View::lite()).unwrap();
    let object = transport(&Remote::object_of(&model).unwrap());

    let receiver = orm();
    let rebuilt: Person = receiver.entity(&object).unwrap();

    assert_eq!(rebuilt.id, 11);
    assert_eq!(rebuilt.age, 34);
    assert_eq!(rebuilt.name, "ada");
    assert_eq!(rebuilt.balance, 0);
    assert!(rebuilt.trips.is_empty());
}

// ---------------------------------------------------------------------------
// Wire shape
// ---------------------------------------------------------------------------

#[test]
fn wire_values() {
    let object = orm().object(&person()).unwrap();

    assert_eq!(object.name, "Person");
    assert_eq!(object.namespace, "transport");
    assert_eq!(object.field("id").unwrap().value, ObjectValue::Int(11));
    assert_eq!(object.field("age").unwrap().value, ObjectValue::UInt(34));
    assert_eq!(object.field("nickname").unwrap().value, ObjectValue::Nil);
    assert_eq!(
        object.field("born").unwrap().value,
        ObjectValue::String("1990-12-10 06:00:00".to_string())
    );
    assert_eq!(
        object.field("scores").unwrap().value,
        ObjectValue::List(vec![ObjectValue::Int(3), ObjectValue::Int(9)])
    );
    assert!(object.field("notes").is_none());

    let name = object.field("name").unwrap();
    assert_eq!(name.spec.view.as_deref(), Some("detail,lite"));
    assert_eq!(name.spec.constraint.as_deref(), Some("required"));
}

#[test]
fn mismatched_shape_is_rejected() {
    let orm = orm();
    let object = orm.object(&person()).unwrap();

    let err = orm.entity::<Place>(&object).unwrap_err();
    assert!(err.is_shape_mismatch());
}
