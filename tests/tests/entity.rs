use keel::{codec, Datum, Entity, Provider, View};
use pretty_assertions::assert_eq;
use tests::{models, orm};

#[derive(Debug, Clone, Default, PartialEq, Entity)]
struct Record {
    #[orm(spec = "ID key", view = "detail")]
    id: i64,

    #[orm(spec = "Name", view = "detail", constraint = "required")]
    name: String,

    #[orm(spec = "Score")]
    score: f64,

    #[orm(spec = "Tag")]
    tag: Option<String>,

    scratch: u32,
}

fn record() -> Record {
    Record {
        id: 7,
        name: "ann".to_string(),
        score: 3.5,
        tag: None,
        scratch: 99,
    }
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

#[test]
fn shape_lists_every_member() {
    let shape = Record::shape();

    assert_eq!(shape.name, "Record");
    assert_eq!(shape.namespace, "entity");
    assert_eq!(shape.pkg_key(), "entity/Record");

    let idents: Vec<_> = shape.members.iter().map(|member| member.ident).collect();
    assert_eq!(idents, ["id", "name", "score", "tag", "scratch"]);

    let declared: Vec<_> = shape.members.iter().map(|member| member.is_declared()).collect();
    assert_eq!(declared, [true, true, true, true, false]);

    assert_eq!(shape.members[1].constraint, Some("required"));
    assert_eq!(shape.members[3].index, 3);
}

#[test]
fn undeclared_members_are_omitted() {
    let orm = orm();
    let model = orm.model(&record(), &View::Origin).unwrap();

    let names: Vec<_> = model.fields().map(|field| field.name()).collect();
    assert_eq!(names, ["ID", "Name", "Score", "Tag"]);
    assert_eq!(model.primary_field().name(), "ID");
    assert!(model.field("scratch").is_none());
}

#[test]
fn identifier_is_the_default_name() {
    #[derive(Debug, Default, Entity)]
    struct Post {
        #[orm(spec = "ID key")]
        id: i64,

        #[orm]
        title: String,

        #[orm(view = "detail")]
        r#type: String,
    }

    let orm = orm();
    let model = orm.model(&Post::default(), &View::Origin).unwrap();

    let names: Vec<_> = model.fields().map(|field| field.name()).collect();
    assert_eq!(names, ["ID", "title", "type"]);
    assert_eq!(model.field("type").unwrap().spec().views(), ["detail"]);
}

#[test]
fn unknown_spec_directives_are_ignored() {
    #[derive(Debug, Default, Entity)]
    struct Shard {
        #[orm(spec = "ID key sharded")]
        id: i64,

        #[orm(spec = "Label indexed")]
        label: String,
    }

    let orm = orm();
    let model = orm.model(&Shard { id: 3, ..Shard::default() }, &View::Origin).unwrap();

    assert_eq!(model.primary_field().name(), "ID");
    assert_eq!(model.get("ID"), Some(&Datum::I64(3)));
    assert_eq!(model.field("ID").unwrap().spec().spec_decl(), Some("ID key sharded"));
    assert!(!model.field("Label").unwrap().is_primary_key());
}

#[test]
fn declarations_are_kept() {
    let orm = orm();
    let model = orm.model(&record(), &View::Origin).unwrap();

    let spec = model.field("Name").unwrap().spec();
    assert_eq!(spec.spec_decl(), Some("Name"));
    assert_eq!(spec.view_decl(), Some("detail"));
    assert_eq!(spec.constraint_decl(), Some("required"));
    assert_eq!(spec.constraints().len(), 1);
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[test]
fn origin_view() {
    let orm = orm();
    let model = orm.model(&record(), &View::Origin).unwrap();

    assert_eq!(model.get("ID"), Some(&Datum::I64(7)));
    assert_eq!(model.get("Name"), Some(&Datum::from("ann")));
    assert_eq!(model.get("Score"), Some(&Datum::F64(3.5)));
    assert!(model.field("Tag").unwrap().value().is_nil());
}

#[test]
fn detail_view() {
    let orm = orm();
    let model = orm.model(&record(), &View::detail()).unwrap();

    assert_eq!(model.get("ID"), Some(&Datum::I64(7)));
    assert_eq!(model.get("Name"), Some(&Datum::from("ann")));
    assert_eq!(model.get("Score"), Some(&Datum::F64(0.0)));
    assert!(model.field("Tag").unwrap().value().is_nil());
}

#[test]
fn meta_view() {
    let orm = orm();
    let model = orm.model(&record(), &View::Meta).unwrap();

    assert_eq!(model.get("ID"), Some(&Datum::I64(0)));
    assert_eq!(model.get("Name"), Some(&Datum::from("")));
    assert!(model.field("Tag").unwrap().value().is_nil());

    let score = codec::encode(model.field("Score").unwrap().value()).unwrap();
    assert_eq!(score.to_string(), "0.000000");
}

#[test]
fn view_is_idempotent() {
    let orm = orm();
    let once = orm.model(&record(), &View::detail()).unwrap();
    let twice = once.copy(&View::detail()).unwrap();

    assert_eq!(once, twice);
    assert_eq!(once.get("Score"), twice.get("Score"));
}

// ---------------------------------------------------------------------------
// Back to records
// ---------------------------------------------------------------------------

#[test]
fn interface_round_trip() {
    let orm = orm();
    let model = orm.model(&record(), &View::Origin).unwrap();

    let back: Record = orm.local().interface(&model).unwrap();
    assert_eq!(
        back,
        Record {
            scratch: 0,
            ..record()
        }
    );

    let boxed = orm.local().interface_ptr::<Record>(&model).unwrap();
    assert_eq!(*boxed, back);
}

#[test]
fn interface_after_view() {
    let orm = orm();
    let model = orm.model(&record(), &View::detail()).unwrap();

    let back: Record = orm.local().interface(&model).unwrap();
    assert_eq!(back.id, 7);
    assert_eq!(back.name, "ann");
    assert_eq!(back.score, 0.0);
    assert_eq!(back.tag, None);
}

#[test]
fn set_and_interface() {
    let orm = orm();
    let mut model = orm.model(&record(), &View::Origin).unwrap();

    model.set("Tag", Datum::from("red")).unwrap();
    let back: Record = orm.local().interface(&model).unwrap();
    assert_eq!(back.tag.as_deref(), Some("red"));

    model.set("Tag", None::<Datum>).unwrap();
    let back: Record = orm.local().interface(&model).unwrap();
    assert_eq!(back.tag, None);
}

#[test]
fn provider_contract() {
    let orm = orm();
    let local = orm.local();

    let ty = local.get_entity_type(&record()).unwrap();
    assert!(ty.is_struct());
    assert_eq!(ty.pkg_key(), "entity/Record");

    let value = local.get_entity_value(&record()).unwrap();
    let mut model = local.get_entity_model(&Record::default(), &View::Origin).unwrap();
    local.set_model_value(&mut model, &value).unwrap();
    assert_eq!(model.get("Name"), Some(&Datum::from("ann")));
}

#[test]
fn registered_templates_are_built_up_front() {
    let orm = models!(Record).build().unwrap();

    assert!(orm.cache().contains("entity/Record"));
    assert_eq!(orm.cache().len(), 1);
}
