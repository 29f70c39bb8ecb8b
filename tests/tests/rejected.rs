use keel::{Entity, View};
use std::collections::{BTreeMap, HashMap};
use tests::{models, orm};

#[derive(Debug, Default, Entity)]
struct Account {
    #[orm(spec = "ID key")]
    id: i64,

    #[orm(spec = "Labels")]
    labels: HashMap<String, String>,
}

#[derive(Debug, Default, Entity)]
struct Node {
    #[orm(spec = "ID key")]
    id: i64,

    #[orm(spec = "Next")]
    next: Option<Box<Node>>,
}

#[derive(Debug, Default, Entity)]
struct Ledger {
    #[orm(spec = "ID key")]
    id: i64,

    // Never dumped, so the map does not matter
    entries: BTreeMap<String, i64>,
}

// ---------------------------------------------------------------------------
// Unsupported members
// ---------------------------------------------------------------------------

#[test]
fn map_member_is_rejected() {
    let err = orm()
        .model(&Account::default(), &View::Origin)
        .unwrap_err();

    assert!(err.is_unsupported_type());
    assert!(err.is_unsupported_kind());
    assert_eq!(
        err.to_string(),
        "unsupported type for member `Labels` of `rejected/Account`: unsupported kind: map"
    );
}

#[test]
fn register_reports_errors_at_build() {
    let err = models!(Account).build().unwrap_err();
    assert!(err.is_unsupported_type());
}

#[test]
fn undeclared_map_is_ignored() {
    let orm = orm();
    let model = orm.model(&Ledger::default(), &View::Origin).unwrap();

    assert_eq!(model.len(), 1);

    let back: Ledger = orm.local().interface(&model).unwrap();
    assert!(back.entries.is_empty());
}

// ---------------------------------------------------------------------------
// Recursion
// ---------------------------------------------------------------------------

#[test]
fn recursive_shape_is_rejected() {
    let err = orm().model(&Node::default(), &View::Origin).unwrap_err();

    assert!(err.is_recursive_shape());
    assert_eq!(
        err.to_string(),
        "recursive shape `rejected/Node` (rejected/Node -> rejected/Node)"
    );
}

#[test]
fn failed_templates_are_not_cached() {
    let orm = orm();

    assert!(orm.model(&Node::default(), &View::Origin).is_err());
    assert!(!orm.cache().contains("rejected/Node"));

    assert!(orm.model(&Node::default(), &View::Origin).is_err());
}

// ---------------------------------------------------------------------------
// Model invariants
// ---------------------------------------------------------------------------

#[test]
fn duplicate_primary_key() {
    #[derive(Debug, Default, Entity)]
    struct TwoKeys {
        #[orm(spec = "A key")]
        a: i64,

        #[orm(spec = "B key")]
        b: i64,
    }

    let err = orm().model(&TwoKeys::default(), &View::Origin).unwrap_err();
    assert!(err.is_duplicate_primary_key());
    assert_eq!(
        err.to_string(),
        "duplicate primary key `B` in `rejected/TwoKeys`"
    );
}

#[test]
fn duplicate_field_name() {
    #[derive(Debug, Default, Entity)]
    struct SameName {
        #[orm(spec = "ID key")]
        id: i64,

        #[orm(spec = "Name")]
        first: String,

        #[orm(spec = "Name")]
        last: String,
    }

    let err = orm().model(&SameName::default(), &View::Origin).unwrap_err();
    assert!(err.is_duplicate_field_name());
}

#[test]
fn no_primary_key() {
    #[derive(Debug, Default, Entity)]
    struct NoKey {
        #[orm(spec = "Name")]
        name: String,
    }

    let err = orm().model(&NoKey::default(), &View::Origin).unwrap_err();
    assert!(err.is_no_primary_key());
}

#[test]
fn no_declared_fields() {
    #[derive(Debug, Default, Entity)]
    struct Bare {
        scratch: u32,
    }

    let err = orm().model(&Bare::default(), &View::Origin).unwrap_err();
    assert!(err.is_no_fields());
    assert_eq!(err.to_string(), "no fields declared in `rejected/Bare`");
}

#[test]
fn max_depth_bounds_nesting() {
    #[derive(Debug, Default, Entity)]
    struct Leaf {
        #[orm(spec = "ID key")]
        id: i64,
    }

    #[derive(Debug, Default, Entity)]
    struct Branch {
        #[orm(spec = "ID key")]
        id: i64,

        #[orm(spec = "Leaf")]
        leaf: Leaf,
    }

    #[derive(Debug, Default, Entity)]
    struct Trunk {
        #[orm(spec = "ID key")]
        id: i64,

        #[orm(spec = "Branch")]
        branch: Branch,
    }

    let shallow = models!().max_depth(2).build().unwrap();
    let err = shallow.model(&Trunk::default(), &View::Origin).unwrap_err();
    assert!(err.is_recursive_shape());

    let deep = models!().max_depth(3).build().unwrap();
    assert!(deep.model(&Trunk::default(), &View::Origin).is_ok());
}
