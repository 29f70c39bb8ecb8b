use keel::{
    filter::{Op, Wildcard},
    Datum, Entity, Kind, Provider, Scalar, Type, Value, View,
};
use pretty_assertions::assert_eq;
use tests::orm;

#[derive(Debug, Clone, Default, PartialEq, Entity)]
struct Team {
    #[orm(spec = "ID key")]
    id: u32,

    #[orm(spec = "Title")]
    title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Entity)]
struct Member {
    #[orm(spec = "ID key", view = "lite")]
    id: i64,

    #[orm(spec = "Name", view = "lite")]
    name: String,

    #[orm(spec = "Rank")]
    rank: u8,

    #[orm(spec = "Alias")]
    alias: Option<String>,

    #[orm(spec = "Team")]
    team: Team,
}

fn member() -> Member {
    Member {
        id: 3,
        name: "bo".to_string(),
        rank: 2,
        alias: Some("b".to_string()),
        team: Team {
            id: 8,
            title: "core".to_string(),
        },
    }
}

#[test]
fn filter_binds_a_view_copy() {
    let orm = orm();
    let model = orm.model(&member(), &View::Origin).unwrap();

    let filter = orm.local().get_model_filter(&model, &View::lite()).unwrap();

    assert_eq!(filter.view(), &View::lite());
    assert_eq!(filter.model().get("Name"), Some(&Datum::from("bo")));
    assert_eq!(filter.model().get("Rank"), Some(&Datum::U8(0)));
    assert_eq!(model.get("Rank"), Some(&Datum::U8(2)));
    assert!(filter.conditions().is_empty());
}

#[test]
fn conditions_in_call_order() {
    let orm = orm();
    let model = orm.model(&member(), &View::Origin).unwrap();
    let mut filter = orm.local().get_model_filter(&model, &View::Origin).unwrap();

    let ranks = Value::list(Type::scalar(Kind::U8), vec![Datum::U8(1), Datum::U8(2)]).unwrap();
    let team = orm.local().get_entity_value(&member().team).unwrap();

    filter
        .above("ID", 0_i64)
        .unwrap()
        .like("Name", "b", Wildcard::Suffix)
        .unwrap()
        .in_list("Rank", ranks)
        .unwrap()
        .equal("Team", team)
        .unwrap()
        .not_equal("Alias", "x")
        .unwrap();

    let ops: Vec<_> = filter.conditions().iter().map(|c| c.op()).collect();
    assert_eq!(ops, [Op::Above, Op::Like, Op::In, Op::Equal, Op::NotEqual]);

    let scalars: Vec<_> = filter
        .conditions()
        .iter()
        .map(|c| c.scalar().unwrap())
        .collect();
    assert_eq!(
        scalars,
        [
            Scalar::I64(0),
            Scalar::from("b%"),
            Scalar::from("[1,2]"),
            Scalar::U32(8),
            Scalar::from("x"),
        ]
    );
}

#[test]
fn rejects_unknown_fields_and_mismatched_types() {
    let orm = orm();
    let model = orm.model(&member(), &View::Origin).unwrap();
    let mut filter = orm.local().get_model_filter(&model, &View::Origin).unwrap();

    let err = filter.equal("Missing", 1_i64).unwrap_err();
    assert!(err.is_invalid_filter());
    assert_eq!(
        err.to_string(),
        "invalid filter: no field `Missing` in `filter/Member`"
    );

    assert!(filter.equal("Rank", 1_i64).unwrap_err().is_invalid_filter());
    assert!(filter.like("Rank", "1", Wildcard::None).unwrap_err().is_invalid_filter());
    assert!(filter.in_list("Rank", Value::from(1_u8)).unwrap_err().is_invalid_filter());
    assert!(filter.conditions().is_empty());
}
